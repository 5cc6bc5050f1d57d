//! **gridtrace-core**: core types for the gridtrace pathfinding visualizer.
//!
//! This crate provides the foundational types shared across the *gridtrace*
//! workspace: geometry primitives, grid dimensions with the row-major index
//! mapping used by the search engine, the shared error type, a terminal-neutral
//! screen buffer, and input events.

pub mod cell;
pub mod dims;
pub mod error;
pub mod geom;
pub mod messages;
pub mod screen;
pub mod style;

pub use cell::Cell;
pub use dims::GridDims;
pub use error::GridError;
pub use geom::{Point, Range};
pub use messages::*;
pub use screen::{Frame, FrameCell, Screen, compute_frame};
pub use style::Color;
