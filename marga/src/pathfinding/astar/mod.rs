//! A* search over an [`OccupancyGrid`].
//!
//! - 8-connected motion (unit axis steps, sqrt(2) diagonals)
//! - Euclidean heuristic in index space (admissible and consistent)
//! - Open/closed sets scoped to a single `plan` call
//! - Waypoints returned goal -> start

mod observer;
mod planner;
mod types;

pub use observer::{ExpansionCounter, ExpansionEvent, NoopObserver, SearchObserver};
pub use planner::AStarPlanner;
pub use types::{AStarConfig, PathFailure, PathResult, SearchNode};

use crate::core::WorldPoint;
use crate::grid::OccupancyGrid;

/// Quick path finding with default configuration
pub fn find_path(grid: &OccupancyGrid, start: WorldPoint, goal: WorldPoint) -> PathResult {
    AStarPlanner::with_defaults(grid).plan(start, goal)
}

/// Check if a path exists between two world points
pub fn path_exists(grid: &OccupancyGrid, start: WorldPoint, goal: WorldPoint) -> bool {
    find_path(grid, start, goal).success
}
