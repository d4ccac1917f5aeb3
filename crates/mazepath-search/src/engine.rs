//! The A* search loop.
//!
//! One synchronous call per search. All per-run state (cost table,
//! frontier, closed set, expansion trace) is allocated fresh inside
//! [`search`] and owned exclusively by that invocation, so nothing can
//! leak between runs. The only suspension points are the cooperative
//! pause/cancel checkpoints at the top of each iteration and before each
//! neighbor relaxation is reported.

use mazepath_core::{Grid, Point};

use crate::cost::CostTable;
use crate::distance::manhattan;
use crate::error::{Endpoint, InvalidReason, SearchError};
use crate::frontier::Frontier;
use crate::observer::{NullObserver, SearchObserver};
use crate::reconstruct::reconstruct;

/// How a search run ended.
///
/// `expanded` is the exploration trace: the exact order in which cells were
/// popped from the frontier (stale entries skipped by lazy deletion are not
/// recorded; the goal appears only if it was popped).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchOutcome {
    /// A shortest path exists; `path` is start→goal inclusive.
    Found {
        path: Vec<Point>,
        expanded: Vec<Point>,
    },
    /// The frontier emptied without reaching the goal. A normal outcome,
    /// not an error.
    NotFound { expanded: Vec<Point> },
    /// The observer requested cancellation mid-search.
    Cancelled { expanded: Vec<Point> },
}

impl SearchOutcome {
    /// The path, if one was found.
    pub fn path(&self) -> Option<&[Point]> {
        match self {
            Self::Found { path, .. } => Some(path),
            _ => None,
        }
    }

    /// The exploration trace, whatever the outcome.
    pub fn expanded(&self) -> &[Point] {
        match self {
            Self::Found { expanded, .. }
            | Self::NotFound { expanded }
            | Self::Cancelled { expanded } => expanded,
        }
    }

    /// Whether a path was found.
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }
}

/// Neighbor order: +x, +y, −x, −y (right, down, left, up).
///
/// Fixed deterministic tie-break policy: equal-f cells resolve by discovery
/// order into the frontier, so this order decides which of two equally
/// short routes a search returns.
const DIRS: [Point; 4] = [
    Point::new(1, 0),
    Point::new(0, 1),
    Point::new(-1, 0),
    Point::new(0, -1),
];

/// Run A* from `start` to `goal` over `grid`, reporting every step to
/// `observer`.
///
/// Returns `Err` only for invalid endpoints (checked before any search
/// state is built) or a corrupted parent chain during reconstruction.
/// Exhaustion and cancellation are `Ok` outcomes.
pub fn search<O: SearchObserver>(
    grid: &Grid,
    start: Point,
    goal: Point,
    observer: &mut O,
) -> Result<SearchOutcome, SearchError> {
    validate_endpoint(grid, start, Endpoint::Start)?;
    validate_endpoint(grid, goal, Endpoint::Goal)?;

    if start == goal {
        observer.path_step(start, 0);
        return Ok(SearchOutcome::Found {
            path: vec![start],
            expanded: Vec::new(),
        });
    }

    let mut table = CostTable::new(grid.width(), grid.height());
    let mut frontier = Frontier::new();
    let mut closed = vec![false; table.len()];
    let mut expanded: Vec<Point> = Vec::new();

    let start_idx = table.idx(start);
    {
        let rec = table.record_mut(start_idx);
        rec.g = 0;
        rec.h = manhattan(start, goal);
        rec.f = rec.h;
        rec.parent = start_idx;
    }
    frontier.push(table.record(start_idx).f, start_idx);

    while let Some(ci) = frontier.pop() {
        if closed[ci] {
            // Lazily deleted stale entry; skip, not an error.
            continue;
        }
        let cp = table.point(ci);
        let cur = *table.record(ci);

        expanded.push(cp);
        observer.node_expanded(cp, cur.g, cur.h, cur.f);
        if hold_at_checkpoint(observer) {
            return Ok(SearchOutcome::Cancelled { expanded });
        }

        if cp == goal {
            let path = reconstruct(&table, ci)?;
            for (i, &p) in path.iter().enumerate() {
                observer.path_step(p, i);
            }
            return Ok(SearchOutcome::Found { path, expanded });
        }

        closed[ci] = true;

        for d in DIRS {
            let np = cp + d;
            if !grid.is_traversable(np) {
                continue;
            }
            let ni = table.idx(np);
            if closed[ni] {
                continue;
            }
            let tentative_g = cur.g + 1;
            // Open-set membership is the cost-table comparison; stored g
            // defaults to UNREACHABLE for never-visited cells.
            if tentative_g < table.record(ni).g {
                if hold_at_checkpoint(observer) {
                    return Ok(SearchOutcome::Cancelled { expanded });
                }
                let h = manhattan(np, goal);
                let rec = table.record_mut(ni);
                rec.g = tentative_g;
                rec.h = h;
                rec.f = tentative_g + h;
                rec.parent = ci;
                // Any older frontier entry for this cell stays put and is
                // skipped later via the closed-set check.
                frontier.push(tentative_g + h, ni);
                observer.node_opened(np, tentative_g, h, tentative_g + h);
            }
        }

        // Endpoints keep their own coloring; the goal never reaches here.
        if cp != start {
            observer.node_closed(cp, cur.f);
        }
    }

    Ok(SearchOutcome::NotFound { expanded })
}

/// Run a search with no observation; just the outcome.
pub fn solve(grid: &Grid, start: Point, goal: Point) -> Result<SearchOutcome, SearchError> {
    search(grid, start, goal, &mut NullObserver)
}

fn validate_endpoint(grid: &Grid, pos: Point, endpoint: Endpoint) -> Result<(), SearchError> {
    if !grid.in_bounds(pos) {
        return Err(SearchError::InvalidCoordinate {
            endpoint,
            pos,
            reason: InvalidReason::OutOfBounds,
        });
    }
    if !grid.is_open(pos) {
        return Err(SearchError::InvalidCoordinate {
            endpoint,
            pos,
            reason: InvalidReason::Blocked,
        });
    }
    Ok(())
}

/// The pause/cancel protocol run at every checkpoint.
///
/// Returns `true` if the search should abandon. Cancel wins over pause, so
/// a paused search can still be cancelled.
fn hold_at_checkpoint<O: SearchObserver>(observer: &mut O) -> bool {
    loop {
        if observer.should_cancel() {
            return true;
        }
        if !observer.should_pause() {
            return false;
        }
        observer.pause_wait();
    }
}
