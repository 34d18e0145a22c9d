//! Path planning on the occupancy grid.
//!
//! ```rust,ignore
//! use marga::grid::OccupancyGrid;
//! use marga::pathfinding::{AStarConfig, AStarPlanner};
//!
//! let grid = OccupancyGrid::build(&obstacles, 1.0, 1.0)?;
//! let planner = AStarPlanner::new(&grid, AStarConfig::default());
//!
//! let result = planner.plan(start, goal);
//! if result.success {
//!     // Waypoints run goal -> start
//!     println!("Path found with {} waypoints", result.path_world.len());
//! }
//! ```
//!
//! Search progress can be observed (or cancelled) through a
//! [`SearchObserver`] passed to [`AStarPlanner::plan_with`].

pub mod astar;

pub use astar::{
    AStarConfig, AStarPlanner, ExpansionCounter, ExpansionEvent, NoopObserver, PathFailure,
    PathResult, SearchNode, SearchObserver, find_path, path_exists,
};
