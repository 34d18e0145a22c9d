//! Occupancy grid built from obstacle sample points.
//!
//! - [`OccupancyGrid`]: immutable boolean grid with coordinate conversion
//! - [`OccupancyGrid::build`]: inflate obstacle points by a clearance radius
//! - [`GridBuildError`]: configuration errors rejected at construction time

mod builder;
mod error;
mod storage;

pub use error::GridBuildError;
pub use storage::{CellId, OccupancyGrid};
