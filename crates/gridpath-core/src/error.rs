//! Error types for grid access and ASCII map parsing.

use crate::geom::{Point, Range};

/// A coordinate fell outside the grid it was used with.
///
/// This is the only error the grid and search operations produce. It is
/// never clamped away: callers always see the offending point.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("point {pos} is outside grid bounds {bounds}")]
pub struct OutOfBounds {
    /// The rejected coordinate.
    pub pos: Point,
    /// The bounds it was checked against.
    pub bounds: Range,
}

/// Errors that can occur when parsing an ASCII grid map.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseGridError {
    /// The input had no map lines.
    #[error("grid map is empty")]
    Empty,

    /// A line's width differs from the first line's.
    #[error("grid map line {line} has width {found}, expected {expected}")]
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A character outside the map alphabet was found.
    #[error("grid map contains invalid character '{ch}' at {pos}")]
    InvalidChar { ch: char, pos: Point },

    /// A start or goal marker appeared more than once.
    #[error("grid map marker '{marker}' repeated at {pos}")]
    MultipleMarkers { marker: char, pos: Point },

    /// A map cell fell outside the grid built for it.
    #[error(transparent)]
    OutOfBounds(#[from] OutOfBounds),
}
