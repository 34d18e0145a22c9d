//! Reference arena and random query sampling.
//!
//! These modules only consume the planner API: the arena supplies obstacle
//! points to [`OccupancyGrid::build`](crate::grid::OccupancyGrid::build),
//! and the sampler draws start/goal pairs the planner can be asked about.

pub mod arena;
mod sampler;

pub use arena::{ARENA_HEIGHT, ARENA_WIDTH, Footprint, boundary_points, contains_point};
pub use sampler::{QueryPair, SampleError, ScenarioSampler};
