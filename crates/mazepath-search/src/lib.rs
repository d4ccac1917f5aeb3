//! **mazepath-search** — an observable A* engine for maze grids.
//!
//! This crate runs single-source, single-goal A* over a
//! [`mazepath_core::Grid`] and reports every algorithmic decision to a
//! caller-supplied [`SearchObserver`], so an external visualizer can replay
//! the search step by step — and pause or cancel it — without the engine
//! knowing anything about rendering.
//!
//! - [`search`] — the engine entry point
//! - [`SearchOutcome`] — found / not found / cancelled, with the expansion trace
//! - [`SearchObserver`] — the observation and pause/cancel capability
//! - [`TraceObserver`], [`LogObserver`], [`NullObserver`] — provided sinks
//!
//! Movement is 4-directional with unit cost; the Manhattan heuristic
//! ([`manhattan`]) is admissible and consistent for it, which is what makes
//! returned paths shortest.

mod cost;
mod distance;
mod engine;
mod error;
mod frontier;
mod observer;
mod reconstruct;

pub use cost::{CellRecord, CostTable, UNREACHABLE};
pub use distance::manhattan;
pub use engine::{SearchOutcome, search, solve};
pub use error::{Endpoint, InvalidReason, SearchError};
pub use observer::{LogObserver, NullObserver, SearchEvent, SearchObserver, TraceObserver};
