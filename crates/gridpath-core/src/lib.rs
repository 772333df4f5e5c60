//! **gridpath-core** — grid and geometry types for 4-connected pathfinding.
//!
//! This crate provides the foundational types used by `gridpath-paths`:
//! integer geometry primitives, an owned obstacle grid, ASCII map parsing,
//! and the [`OutOfBounds`] error reported by every bounds-checked operation.

pub mod error;
pub mod geom;
pub mod grid;
pub mod map;

pub use error::{OutOfBounds, ParseGridError};
pub use geom::{Point, Range};
pub use grid::{Cell, Grid};
pub use map::GridMap;
