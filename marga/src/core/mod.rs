//! Core types for the marga planner.
//!
//! - [`GridCoord`]: integer cell indices into an [`OccupancyGrid`](crate::grid::OccupancyGrid)
//! - [`WorldPoint`]: continuous world coordinates
//! - [`Motion`] and [`MOTION_MODEL`]: the 8-connected motion primitives

mod motion;
mod point;

pub use motion::{MOTION_MODEL, Motion};
pub use point::{GridCoord, WorldPoint};
