//! Path reconstruction from parent back-pointers.

use mazepath_core::Point;

use crate::cost::{CostTable, NO_PARENT};
use crate::error::SearchError;

/// Walk parent links from `goal_idx` back to the start cell (the record
/// whose parent is itself), then reverse into start→goal order.
///
/// The walk is capped at the cell count of the table; exceeding the cap —
/// or stepping onto a record with no parent — means the engine corrupted
/// its parent chain and is reported as [`SearchError::ReconstructionCycle`]
/// rather than silently producing a truncated path.
pub(crate) fn reconstruct(table: &CostTable, goal_idx: usize) -> Result<Vec<Point>, SearchError> {
    let mut path = Vec::new();
    let mut idx = goal_idx;

    for _ in 0..table.len() {
        path.push(table.point(idx));
        let parent = table.record(idx).parent;
        if parent == idx {
            path.reverse();
            return Ok(path);
        }
        if parent == NO_PARENT || parent >= table.len() {
            return Err(SearchError::ReconstructionCycle {
                pos: table.point(idx),
            });
        }
        idx = parent;
    }
    Err(SearchError::ReconstructionCycle {
        pos: table.point(idx),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::CostTable;

    fn link(table: &mut CostTable, from: Point, to: Point) {
        let fi = table.idx(from);
        let ti = table.idx(to);
        table.record_mut(fi).parent = ti;
    }

    #[test]
    fn walks_back_to_start_sentinel() {
        let mut t = CostTable::new(3, 1);
        // start (0,0): parent = self
        let si = t.idx(Point::new(0, 0));
        t.record_mut(si).parent = si;
        link(&mut t, Point::new(1, 0), Point::new(0, 0));
        link(&mut t, Point::new(2, 0), Point::new(1, 0));

        let path = reconstruct(&t, t.idx(Point::new(2, 0))).unwrap();
        assert_eq!(
            path,
            vec![Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)]
        );
    }

    #[test]
    fn single_cell_path() {
        let mut t = CostTable::new(2, 2);
        let si = t.idx(Point::new(1, 1));
        t.record_mut(si).parent = si;
        let path = reconstruct(&t, si).unwrap();
        assert_eq!(path, vec![Point::new(1, 1)]);
    }

    #[test]
    fn cycle_is_detected() {
        let mut t = CostTable::new(2, 1);
        // Two cells pointing at each other, no root in sight.
        link(&mut t, Point::new(0, 0), Point::new(1, 0));
        link(&mut t, Point::new(1, 0), Point::new(0, 0));
        let err = reconstruct(&t, 0).unwrap_err();
        assert!(matches!(err, SearchError::ReconstructionCycle { .. }));
    }

    #[test]
    fn missing_parent_is_an_invariant_violation() {
        let t = CostTable::new(2, 1);
        // Default records carry no parent at all.
        let err = reconstruct(&t, 1).unwrap_err();
        assert_eq!(
            err,
            SearchError::ReconstructionCycle {
                pos: Point::new(1, 0)
            }
        );
    }
}
