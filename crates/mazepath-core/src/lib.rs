//! **mazepath-core** — grid model and maze sources for the mazepath solver.
//!
//! This crate provides the types shared across the *mazepath* workspace:
//! the [`Point`] coordinate primitive, the immutable blocked/unblocked
//! [`Grid`] a search runs over, and the text-maze parser ([`MazeMap`])
//! that turns an ASCII maze into a grid plus start/goal markers.

pub mod geom;
pub mod grid;
pub mod parse;

pub use geom::Point;
pub use grid::{CellKind, Grid, GridError};
pub use parse::{MazeMap, ParseError, SourceError};
