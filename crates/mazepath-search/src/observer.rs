//! The observation sink: the capability an engine run reports into.
//!
//! The engine calls these hooks synchronously at fixed points in its loop
//! (see [`search`](crate::search)), so a visualizer can replay the search
//! faithfully. Event hooks never influence the search; only
//! [`should_pause`](SearchObserver::should_pause) and
//! [`should_cancel`](SearchObserver::should_cancel) do.

use mazepath_core::Point;

/// Observer of one search run.
///
/// Every method has a default so implementors override only what they
/// need. `pause_wait` is the cooperative suspension point: while
/// `should_pause` stays true (and cancel does not fire), the engine calls
/// it repeatedly; the default yields the thread, a visualizer would
/// typically sleep a frame-delay here, scaled by its playback speed.
pub trait SearchObserver {
    /// A cell was popped from the frontier and is being expanded.
    fn node_expanded(&mut self, _pos: Point, _g: i32, _h: i32, _f: i32) {}
    /// A cell's costs were relaxed and it was pushed onto the frontier.
    fn node_opened(&mut self, _pos: Point, _g: i32, _h: i32, _f: i32) {}
    /// A cell was finalized. Not reported for start or goal cells.
    fn node_closed(&mut self, _pos: Point, _f: i32) {}
    /// One cell of the final path, in start→goal order.
    fn path_step(&mut self, _pos: Point, _index: usize) {}

    /// Whether the engine should hold at the next checkpoint.
    fn should_pause(&self) -> bool {
        false
    }
    /// Whether the engine should abandon the search.
    fn should_cancel(&self) -> bool {
        false
    }
    /// Called repeatedly while paused.
    fn pause_wait(&mut self) {
        std::thread::yield_now();
    }
}

/// Observer that ignores everything; headless solving.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl SearchObserver for NullObserver {}

/// One recorded observation, as captured by [`TraceObserver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchEvent {
    Expanded { pos: Point, g: i32, h: i32, f: i32 },
    Opened { pos: Point, g: i32, h: i32, f: i32 },
    Closed { pos: Point, f: i32 },
    PathStep { pos: Point, index: usize },
}

/// Observer that records every event in order.
///
/// Optionally cancels the search after a fixed number of expansions, which
/// is how cancellation is exercised without threads or wall clock.
#[derive(Debug, Default)]
pub struct TraceObserver {
    pub events: Vec<SearchEvent>,
    expansions: usize,
    cancel_after: Option<usize>,
}

impl TraceObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation once `n` cells have been expanded.
    pub fn cancel_after(n: usize) -> Self {
        Self {
            cancel_after: Some(n),
            ..Self::default()
        }
    }

    /// Number of expansions seen so far.
    pub fn expansions(&self) -> usize {
        self.expansions
    }
}

impl SearchObserver for TraceObserver {
    fn node_expanded(&mut self, pos: Point, g: i32, h: i32, f: i32) {
        self.expansions += 1;
        self.events.push(SearchEvent::Expanded { pos, g, h, f });
    }

    fn node_opened(&mut self, pos: Point, g: i32, h: i32, f: i32) {
        self.events.push(SearchEvent::Opened { pos, g, h, f });
    }

    fn node_closed(&mut self, pos: Point, f: i32) {
        self.events.push(SearchEvent::Closed { pos, f });
    }

    fn path_step(&mut self, pos: Point, index: usize) {
        self.events.push(SearchEvent::PathStep { pos, index });
    }

    fn should_cancel(&self) -> bool {
        self.cancel_after.is_some_and(|n| self.expansions >= n)
    }
}

/// Observer that forwards events to the `log` crate.
///
/// Expansion/open/close go out at `trace` level, path steps at `debug`, so
/// a backend filtered to `debug` shows just the solution.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl SearchObserver for LogObserver {
    fn node_expanded(&mut self, pos: Point, g: i32, h: i32, f: i32) {
        log::trace!("expand {pos} g={g} h={h} f={f}");
    }

    fn node_opened(&mut self, pos: Point, g: i32, h: i32, f: i32) {
        log::trace!("open {pos} g={g} h={h} f={f}");
    }

    fn node_closed(&mut self, pos: Point, f: i32) {
        log::trace!("close {pos} f={f}");
    }

    fn path_step(&mut self, pos: Point, index: usize) {
        log::debug!("path[{index}] = {pos}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_observer_records_in_order() {
        let mut obs = TraceObserver::new();
        obs.node_expanded(Point::new(0, 0), 0, 2, 2);
        obs.node_opened(Point::new(1, 0), 1, 1, 2);
        obs.node_closed(Point::new(0, 0), 2);
        obs.path_step(Point::new(0, 0), 0);
        assert_eq!(obs.events.len(), 4);
        assert!(matches!(obs.events[0], SearchEvent::Expanded { .. }));
        assert!(matches!(obs.events[3], SearchEvent::PathStep { index: 0, .. }));
        assert_eq!(obs.expansions(), 1);
    }

    #[test]
    fn cancel_after_fires_at_threshold() {
        let mut obs = TraceObserver::cancel_after(2);
        assert!(!obs.should_cancel());
        obs.node_expanded(Point::ZERO, 0, 0, 0);
        assert!(!obs.should_cancel());
        obs.node_expanded(Point::ZERO, 0, 0, 0);
        assert!(obs.should_cancel());
    }

    #[test]
    fn null_observer_never_interrupts() {
        let obs = NullObserver;
        assert!(!obs.should_pause());
        assert!(!obs.should_cancel());
    }
}
