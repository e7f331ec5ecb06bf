use std::fmt;

use planar_core::Point;

/// Errors returned by [`GridPathfinder::search`](crate::GridPathfinder::search).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// The start position is not a cell of the grid.
    StartNotFound(Point),
    /// The destination position is not a cell of the grid.
    DestinationNotFound(Point),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartNotFound(p) => write!(f, "start position {p} not found in grid"),
            Self::DestinationNotFound(p) => {
                write!(f, "destination position {p} not found in grid")
            }
        }
    }
}

impl std::error::Error for SearchError {}
