//! Search-engine errors.
//!
//! Only two things are ever errors here: an invalid endpoint reported
//! before any search state is built, and a broken parent chain discovered
//! during reconstruction. Exhausting the frontier or being cancelled are
//! normal [`SearchOutcome`](crate::SearchOutcome) variants, not errors.

use std::fmt;

use mazepath_core::Point;

/// Which endpoint of a search failed validation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Goal => write!(f, "goal"),
        }
    }
}

/// Why an endpoint was rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InvalidReason {
    OutOfBounds,
    Blocked,
}

/// Errors returned by [`search`](crate::search).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchError {
    /// Start or goal is out of bounds or on a blocked cell.
    /// Returned before any search state is built.
    InvalidCoordinate {
        endpoint: Endpoint,
        pos: Point,
        reason: InvalidReason,
    },
    /// The parent chain walked during reconstruction did not reach the
    /// start within `width * height` steps. This is an engine invariant
    /// violation, surfaced loudly rather than silently truncated.
    ReconstructionCycle { pos: Point },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCoordinate {
                endpoint,
                pos,
                reason,
            } => match reason {
                InvalidReason::OutOfBounds => {
                    write!(f, "search: {endpoint} {pos} is out of bounds")
                }
                InvalidReason::Blocked => {
                    write!(f, "search: {endpoint} {pos} is a blocked cell")
                }
            },
            Self::ReconstructionCycle { pos } => {
                write!(f, "search: parent cycle while reconstructing through {pos}")
            }
        }
    }
}

impl std::error::Error for SearchError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = SearchError::InvalidCoordinate {
            endpoint: Endpoint::Start,
            pos: Point::new(5, 5),
            reason: InvalidReason::OutOfBounds,
        };
        assert_eq!(e.to_string(), "search: start (5, 5) is out of bounds");

        let e = SearchError::InvalidCoordinate {
            endpoint: Endpoint::Goal,
            pos: Point::new(1, 2),
            reason: InvalidReason::Blocked,
        };
        assert_eq!(e.to_string(), "search: goal (1, 2) is a blocked cell");

        let e = SearchError::ReconstructionCycle {
            pos: Point::new(0, 0),
        };
        assert!(e.to_string().contains("parent cycle"));
    }
}
