//! Text-maze parsing.
//!
//! A maze source is an ASCII block with one character per cell:
//! `x` = wall, `o` = open floor, `S` = start (exactly one), `F` = goal
//! (exactly one). Lines are separated by `'\n'` and must all have the same
//! width. [`MazeMap`] bundles the parsed grid with the start/goal markers.

use std::fmt;
use std::io;
use std::path::Path;

use crate::geom::Point;
use crate::grid::{CellKind, Grid};

/// A parsed maze: the grid plus its start and goal cells.
///
/// The start and goal cells are always in-bounds, open cells — the parser
/// guarantees it, so a search over the map never fails its entry checks.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeMap {
    pub grid: Grid,
    pub start: Point,
    pub goal: Point,
}

impl MazeMap {
    /// Parse a maze from text.
    ///
    /// Surrounding whitespace of the whole text is trimmed; individual
    /// lines are not.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseError::Empty);
        }

        let mut cells = Vec::new();
        let mut start: Option<Point> = None;
        let mut goal: Option<Point> = None;
        let mut width: i32 = -1;
        let mut x: i32 = 0;
        let mut y: i32 = 0;

        for ch in s.chars() {
            if ch == '\n' {
                if width >= 0 && x != width {
                    return Err(ParseError::InconsistentWidth { line: y as usize });
                }
                width = x;
                x = 0;
                y += 1;
                continue;
            }
            let pos = Point::new(x, y);
            let kind = match ch {
                'x' => CellKind::Blocked,
                'o' => CellKind::Open,
                'S' => {
                    if start.replace(pos).is_some() {
                        return Err(ParseError::DuplicateStart { pos });
                    }
                    CellKind::Open
                }
                'F' => {
                    if goal.replace(pos).is_some() {
                        return Err(ParseError::DuplicateGoal { pos });
                    }
                    CellKind::Open
                }
                _ => return Err(ParseError::UnknownSymbol { ch, pos }),
            };
            cells.push(kind);
            x += 1;
        }
        // Last line carries no trailing newline.
        if width >= 0 && x != width {
            return Err(ParseError::InconsistentWidth { line: y as usize });
        }
        width = x;

        let start = start.ok_or(ParseError::MissingStart)?;
        let goal = goal.ok_or(ParseError::MissingGoal)?;
        Ok(Self {
            grid: Grid::from_cells(cells, width, y + 1),
            start,
            goal,
        })
    }

    /// Load and parse a maze file.
    ///
    /// A missing/unreadable file surfaces as [`SourceError::Unavailable`],
    /// distinct from a readable but malformed one.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let text = std::fs::read_to_string(path).map_err(SourceError::Unavailable)?;
        Self::parse(&text).map_err(SourceError::Malformed)
    }
}

/// Errors that can occur when parsing maze text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The source contained no cells.
    Empty,
    /// A character outside the `x o S F` alphabet.
    UnknownSymbol { ch: char, pos: Point },
    /// A line's width differs from the first line's.
    InconsistentWidth { line: usize },
    /// No `S` marker.
    MissingStart,
    /// No `F` marker.
    MissingGoal,
    /// More than one `S` marker.
    DuplicateStart { pos: Point },
    /// More than one `F` marker.
    DuplicateGoal { pos: Point },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "maze: empty source"),
            Self::UnknownSymbol { ch, pos } => {
                write!(f, "maze: unknown symbol \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::InconsistentWidth { line } => {
                write!(f, "maze: line {line} has a different width")
            }
            Self::MissingStart => write!(f, "maze: no start marker \u{201c}S\u{201d}"),
            Self::MissingGoal => write!(f, "maze: no goal marker \u{201c}F\u{201d}"),
            Self::DuplicateStart { pos } => write!(f, "maze: second start marker at {pos}"),
            Self::DuplicateGoal { pos } => write!(f, "maze: second goal marker at {pos}"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Errors that can occur when loading a maze from a file.
#[derive(Debug)]
pub enum SourceError {
    /// The file could not be read at all.
    Unavailable(io::Error),
    /// The file was read but its content did not parse.
    Malformed(ParseError),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable(e) => write!(f, "maze source unavailable: {e}"),
            Self::Malformed(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unavailable(e) => Some(e),
            Self::Malformed(e) => Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAZE: &str = "\
Soxo
ooxo
xoxo
xooF";

    #[test]
    fn parse_basic() {
        let m = MazeMap::parse(MAZE).unwrap();
        assert_eq!(m.grid.width(), 4);
        assert_eq!(m.grid.height(), 4);
        assert_eq!(m.start, Point::new(0, 0));
        assert_eq!(m.goal, Point::new(3, 3));
        assert_eq!(m.grid.kind(Point::new(1, 0)), Some(CellKind::Open));
        assert_eq!(m.grid.kind(Point::new(2, 0)), Some(CellKind::Blocked));
    }

    #[test]
    fn markers_are_open_cells() {
        let m = MazeMap::parse(MAZE).unwrap();
        assert!(m.grid.is_traversable(m.start));
        assert!(m.grid.is_traversable(m.goal));
    }

    #[test]
    fn surrounding_whitespace_trimmed() {
        let m = MazeMap::parse("\n  \nSF\n\n").unwrap();
        assert_eq!(m.grid.width(), 2);
        assert_eq!(m.grid.height(), 1);
    }

    #[test]
    fn unknown_symbol_reports_position() {
        let err = MazeMap::parse("So\no?").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnknownSymbol {
                ch: '?',
                pos: Point::new(1, 1)
            }
        );
    }

    #[test]
    fn inconsistent_width_rejected() {
        let err = MazeMap::parse("So\nooo\nxF").unwrap_err();
        assert_eq!(err, ParseError::InconsistentWidth { line: 1 });
        // Short last line too.
        let err = MazeMap::parse("So\nF").unwrap_err();
        assert_eq!(err, ParseError::InconsistentWidth { line: 1 });
    }

    #[test]
    fn missing_markers_rejected() {
        assert_eq!(MazeMap::parse("oo\noF").unwrap_err(), ParseError::MissingStart);
        assert_eq!(MazeMap::parse("So\noo").unwrap_err(), ParseError::MissingGoal);
        assert_eq!(MazeMap::parse("").unwrap_err(), ParseError::Empty);
    }

    #[test]
    fn duplicate_markers_rejected() {
        assert_eq!(
            MazeMap::parse("SS\noF").unwrap_err(),
            ParseError::DuplicateStart {
                pos: Point::new(1, 0)
            }
        );
        assert_eq!(
            MazeMap::parse("SF\noF").unwrap_err(),
            ParseError::DuplicateGoal {
                pos: Point::new(1, 1)
            }
        );
    }

    #[test]
    fn load_missing_file_is_unavailable() {
        let err = MazeMap::load("/definitely/not/here.maze").unwrap_err();
        assert!(matches!(err, SourceError::Unavailable(_)));
    }
}
