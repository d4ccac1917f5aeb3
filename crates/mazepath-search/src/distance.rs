use mazepath_core::Point;

/// Manhattan (L1) distance between two points.
///
/// Admissible and consistent for 4-directional unit-cost movement, which
/// the engine relies on for its optimality guarantee.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_basics() {
        assert_eq!(manhattan(Point::new(0, 0), Point::new(3, 4)), 7);
        assert_eq!(manhattan(Point::new(3, 4), Point::new(0, 0)), 7);
        assert_eq!(manhattan(Point::new(-2, 1), Point::new(1, -1)), 5);
        assert_eq!(manhattan(Point::new(5, 5), Point::new(5, 5)), 0);
    }

    #[test]
    fn manhattan_never_exceeds_step_count() {
        // Consistency on a unit step: the estimate drops by at most 1.
        let goal = Point::new(9, 9);
        let a = Point::new(2, 3);
        for b in [a.shift(1, 0), a.shift(0, 1), a.shift(-1, 0), a.shift(0, -1)] {
            assert!((manhattan(a, goal) - manhattan(b, goal)).abs() <= 1);
        }
    }
}
