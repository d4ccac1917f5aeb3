//! The immutable blocked/unblocked maze grid.
//!
//! A [`Grid`] is a rectangular matrix of [`CellKind`] values stored in a
//! flat row-major buffer. It is read-only for the duration of a search:
//! there is no mutation API once a grid has been built.

use std::fmt;

use crate::geom::Point;

/// What occupies a single maze cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    /// Traversable floor.
    #[default]
    Open,
    /// Impassable wall.
    Blocked,
}

/// An immutable rectangular grid of [`CellKind`] cells.
///
/// Cells are stored in a flat `Vec` indexed `y * width + x`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    cells: Vec<CellKind>,
    width: i32,
    height: i32,
}

impl Grid {
    /// Create a grid of the given size with every cell open.
    pub fn new(width: i32, height: i32) -> Self {
        let len = (width.max(0) as usize) * (height.max(0) as usize);
        Self {
            cells: vec![CellKind::Open; len],
            width: width.max(0),
            height: height.max(0),
        }
    }

    /// Build a grid from numeric rows: `0` = open, anything else = blocked.
    ///
    /// Rows must be non-empty and all the same width.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(GridError::Empty);
        }
        let mut cells = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(GridError::InconsistentWidth { line: y });
            }
            for &v in row {
                cells.push(if v == 0 {
                    CellKind::Open
                } else {
                    CellKind::Blocked
                });
            }
        }
        Ok(Self {
            cells,
            width: width as i32,
            height: height as i32,
        })
    }

    pub(crate) fn from_cells(cells: Vec<CellKind>, width: i32, height: i32) -> Self {
        debug_assert_eq!(cells.len(), (width * height) as usize);
        Self {
            cells,
            width,
            height,
        }
    }

    /// Width in cells (number of columns).
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height in cells (number of rows).
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` indexes a cell of this grid.
    #[inline]
    pub fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    /// Whether the cell at `p` is open.
    ///
    /// `p` must be in bounds; calling this with an out-of-bounds point is a
    /// programming error. Use [`is_traversable`](Self::is_traversable) for
    /// the combined check.
    #[inline]
    pub fn is_open(&self, p: Point) -> bool {
        debug_assert!(self.in_bounds(p), "is_open called out of bounds: {p}");
        self.cells[(p.y * self.width + p.x) as usize] == CellKind::Open
    }

    /// Whether `p` is in bounds and open.
    #[inline]
    pub fn is_traversable(&self, p: Point) -> bool {
        self.in_bounds(p) && self.is_open(p)
    }

    /// The cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn kind(&self, p: Point) -> Option<CellKind> {
        if !self.in_bounds(p) {
            return None;
        }
        Some(self.cells[(p.y * self.width + p.x) as usize])
    }

    /// Iterate over `(Point, CellKind)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, CellKind)> + '_ {
        self.cells.iter().enumerate().map(|(i, &kind)| {
            let p = Point::new(i as i32 % self.width, i as i32 / self.width);
            (p, kind)
        })
    }

    /// Count of open cells.
    pub fn open_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == CellKind::Open).count()
    }
}

/// Errors that can occur when building a grid from rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// No rows, or rows of zero width.
    Empty,
    /// A row's width differs from the first row's.
    InconsistentWidth { line: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid: no cells"),
            Self::InconsistentWidth { line } => {
                write!(f, "grid: row {line} has a different width")
            }
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_all_open() {
        let g = Grid::new(4, 3);
        assert_eq!(g.width(), 4);
        assert_eq!(g.height(), 3);
        assert_eq!(g.len(), 12);
        assert_eq!(g.open_count(), 12);
    }

    #[test]
    fn from_rows_maps_zero_to_open() {
        let g = Grid::from_rows(&[vec![0, 1], vec![1, 0]]).unwrap();
        assert_eq!(g.kind(Point::new(0, 0)), Some(CellKind::Open));
        assert_eq!(g.kind(Point::new(1, 0)), Some(CellKind::Blocked));
        assert_eq!(g.kind(Point::new(0, 1)), Some(CellKind::Blocked));
        assert_eq!(g.kind(Point::new(1, 1)), Some(CellKind::Open));
    }

    #[test]
    fn from_rows_rejects_empty() {
        assert_eq!(Grid::from_rows(&[]), Err(GridError::Empty));
        assert_eq!(Grid::from_rows(&[vec![]]), Err(GridError::Empty));
    }

    #[test]
    fn from_rows_rejects_ragged_rows() {
        let err = Grid::from_rows(&[vec![0, 0], vec![0]]).unwrap_err();
        assert_eq!(err, GridError::InconsistentWidth { line: 1 });
    }

    #[test]
    fn bounds_checks() {
        let g = Grid::new(3, 2);
        assert!(g.in_bounds(Point::new(0, 0)));
        assert!(g.in_bounds(Point::new(2, 1)));
        assert!(!g.in_bounds(Point::new(3, 0)));
        assert!(!g.in_bounds(Point::new(0, 2)));
        assert!(!g.in_bounds(Point::new(-1, 0)));
    }

    #[test]
    fn traversable_combines_bounds_and_openness() {
        let g = Grid::from_rows(&[vec![0, 1]]).unwrap();
        assert!(g.is_traversable(Point::new(0, 0)));
        assert!(!g.is_traversable(Point::new(1, 0)));
        assert!(!g.is_traversable(Point::new(2, 0)));
        assert!(!g.is_traversable(Point::new(0, -1)));
    }

    #[test]
    fn iter_is_row_major() {
        let g = Grid::from_rows(&[vec![0, 1], vec![0, 0]]).unwrap();
        let items: Vec<_> = g.iter().collect();
        assert_eq!(items.len(), 4);
        assert_eq!(items[0], (Point::new(0, 0), CellKind::Open));
        assert_eq!(items[1], (Point::new(1, 0), CellKind::Blocked));
        assert_eq!(items[2], (Point::new(0, 1), CellKind::Open));
    }
}
