//! Per-cell cost bookkeeping.
//!
//! [`CostTable`] is a flat arena of [`CellRecord`]s, one per grid cell,
//! indexed `y * width + x`. A fresh table is allocated at the start of
//! every search invocation so that no parent or g value can leak from a
//! prior run. Records are mutated only by the engine during relaxation and
//! are read-only during reconstruction.

use mazepath_core::Point;

/// Sentinel g/f value meaning "never visited".
pub const UNREACHABLE: i32 = i32::MAX;

/// Flat-index sentinel meaning "no parent recorded".
pub(crate) const NO_PARENT: usize = usize::MAX;

/// Cost bookkeeping for one cell.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellRecord {
    /// Cost from start along the best known path, [`UNREACHABLE`] if none.
    pub g: i32,
    /// Heuristic estimate to the goal.
    pub h: i32,
    /// `g + h`, the frontier priority.
    pub f: i32,
    /// Flat index of the predecessor on the best known path. The start
    /// cell's parent is its own index (the "root" sentinel).
    pub parent: usize,
}

impl Default for CellRecord {
    fn default() -> Self {
        Self {
            g: UNREACHABLE,
            h: 0,
            f: UNREACHABLE,
            parent: NO_PARENT,
        }
    }
}

/// A fixed-size arena of [`CellRecord`]s covering one grid.
pub struct CostTable {
    records: Vec<CellRecord>,
    width: i32,
}

impl CostTable {
    /// Allocate a fresh table for a `width × height` grid.
    pub fn new(width: i32, height: i32) -> Self {
        let len = (width.max(0) as usize) * (height.max(0) as usize);
        Self {
            records: vec![CellRecord::default(); len],
            width: width.max(0),
        }
    }

    /// Total number of records.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table covers no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Convert a point to its flat index.
    #[inline]
    pub fn idx(&self, p: Point) -> usize {
        (p.y * self.width + p.x) as usize
    }

    /// Convert a flat index back to a point.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        Point::new(idx as i32 % self.width, idx as i32 / self.width)
    }

    /// The record at a flat index.
    #[inline]
    pub fn record(&self, idx: usize) -> &CellRecord {
        &self.records[idx]
    }

    /// Mutable record access, used by the engine during relaxation.
    #[inline]
    pub fn record_mut(&mut self, idx: usize) -> &mut CellRecord {
        &mut self.records[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_table_is_unvisited() {
        let t = CostTable::new(3, 2);
        assert_eq!(t.len(), 6);
        for i in 0..t.len() {
            assert_eq!(t.record(i).g, UNREACHABLE);
            assert_eq!(t.record(i).f, UNREACHABLE);
            assert_eq!(t.record(i).parent, NO_PARENT);
        }
    }

    #[test]
    fn idx_point_round_trip() {
        let t = CostTable::new(4, 3);
        for y in 0..3 {
            for x in 0..4 {
                let p = Point::new(x, y);
                assert_eq!(t.point(t.idx(p)), p);
            }
        }
    }

    #[test]
    fn record_mutation() {
        let mut t = CostTable::new(2, 2);
        let i = t.idx(Point::new(1, 1));
        let r = t.record_mut(i);
        r.g = 3;
        r.h = 2;
        r.f = 5;
        r.parent = 0;
        assert_eq!(t.record(i).f, 5);
        assert_eq!(t.record(i).parent, 0);
    }
}
