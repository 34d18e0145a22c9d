//! # Marga: Grid-Based A* Path Planning
//!
//! Plans shortest 8-connected paths across a 2D occupancy grid built from a
//! set of obstacle points and a robot clearance radius.
//!
//! ## Quick Start
//!
//! ```rust
//! use marga::{AStarPlanner, OccupancyGrid, WorldPoint};
//!
//! // Corner posts of a 10x10 room
//! let obstacles = [
//!     WorldPoint::new(0.0, 0.0),
//!     WorldPoint::new(10.0, 0.0),
//!     WorldPoint::new(0.0, 10.0),
//!     WorldPoint::new(10.0, 10.0),
//! ];
//! let grid = OccupancyGrid::build(&obstacles, 1.0, 1.0).unwrap();
//!
//! let result = AStarPlanner::with_defaults(&grid)
//!     .plan(WorldPoint::new(2.0, 2.0), WorldPoint::new(8.0, 7.0));
//! assert!(result.success);
//!
//! // Waypoints are goal-first
//! assert_eq!(result.path_world[0], WorldPoint::new(8.0, 7.0));
//! ```
//!
//! ## Coordinates
//!
//! World positions map to grid indices by `round((pos - min) / resolution)`
//! with ties rounded to even. A cell is blocked when any obstacle point lies
//! within the clearance radius of its center (boundary inclusive). Positions
//! outside `[min, max)` on either axis are never traversable.
//!
//! ## Architecture
//!
//! - [`core`]: Points, grid coordinates, motion model
//! - [`grid`]: Occupancy grid construction and coordinate conversion
//! - [`pathfinding`]: A* search, results, search observers
//! - [`config`]: YAML configuration
//! - [`scenario`]: Reference arena and random query sampling
//! - [`io`]: CSV dataset output and SVG rendering

pub mod config;
pub mod core;
pub mod error;
pub mod grid;
pub mod io;
pub mod pathfinding;
pub mod scenario;

pub use config::MargaConfig;
pub use crate::core::{GridCoord, WorldPoint};
pub use error::{MargaError, Result};
pub use grid::{GridBuildError, OccupancyGrid};
pub use pathfinding::{AStarConfig, AStarPlanner, PathFailure, PathResult, SearchObserver};
