//! A* pathfinding types.

use crate::core::{GridCoord, WorldPoint};
use crate::grid::CellId;
use std::cmp::Ordering;

/// A node discovered during one search.
///
/// `parent` is `None` only for the start node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchNode {
    pub coord: GridCoord,
    pub cost: f32,
    pub parent: Option<CellId>,
}

impl SearchNode {
    pub(super) fn root(coord: GridCoord) -> Self {
        Self {
            coord,
            cost: 0.0,
            parent: None,
        }
    }
}

/// Priority queue entry. Ordered so `BinaryHeap` pops the lowest `f`
/// first, and the lowest cell id among equal `f`.
#[derive(Clone, Copy, Debug)]
pub(super) struct FrontierEntry {
    pub id: CellId,
    pub cost: f32, // g at push time, used to detect stale entries
    pub f_cost: f32,
}

impl Eq for FrontierEntry {}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior
        other
            .f_cost
            .total_cmp(&self.f_cost)
            .then_with(|| other.id.cmp(&self.id))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A* pathfinding configuration
#[derive(Clone, Debug, PartialEq)]
pub struct AStarConfig {
    /// Reject out-of-grid or blocked endpoints before searching.
    /// When false they simply end in [`PathFailure::NoPath`].
    pub validate_endpoints: bool,
    /// Maximum number of nodes to expand before giving up (None = unlimited)
    pub max_iterations: Option<usize>,
    /// Report every expansion to the observer passed to `plan_with`
    pub show_expansions: bool,
    /// Heuristic weight. Anything above 1.0 trades optimality for speed.
    pub heuristic_weight: f32,
}

impl Default for AStarConfig {
    fn default() -> Self {
        Self {
            validate_endpoints: false,
            max_iterations: None,
            show_expansions: false,
            heuristic_weight: 1.0,
        }
    }
}

impl AStarConfig {
    /// Enable expansion reporting
    pub fn with_expansions(mut self) -> Self {
        self.show_expansions = true;
        self
    }

    /// Enable endpoint validation
    pub fn with_validation(mut self) -> Self {
        self.validate_endpoints = true;
        self
    }
}

/// Result of A* pathfinding
#[derive(Clone, Debug)]
pub struct PathResult {
    /// Path as grid coordinates, goal first (empty if no path found)
    pub path_grid: Vec<GridCoord>,
    /// Path as world coordinates, goal first
    pub path_world: Vec<WorldPoint>,
    /// Total path cost in cells
    pub cost: f32,
    /// Number of nodes moved to the closed set
    pub nodes_expanded: usize,
    /// Whether a path was found
    pub success: bool,
    /// Reason for failure (if any)
    pub failure_reason: Option<PathFailure>,
}

impl PathResult {
    /// Create a failed result
    pub(super) fn failed(reason: PathFailure, nodes_expanded: usize) -> Self {
        Self {
            path_grid: Vec::new(),
            path_world: Vec::new(),
            cost: f32::INFINITY,
            nodes_expanded,
            success: false,
            failure_reason: Some(reason),
        }
    }

    /// Found a path with at least one move
    pub fn is_found(&self) -> bool {
        self.success && self.path_world.len() > 1
    }

    /// Path length in cells
    pub fn length_cells(&self) -> usize {
        self.path_grid.len()
    }

    /// Polyline length in world units
    pub fn length_world(&self) -> f32 {
        self.path_world
            .windows(2)
            .map(|w| w[0].distance(&w[1]))
            .sum()
    }

    /// Waypoints reordered start -> goal
    pub fn start_to_goal(&self) -> Vec<WorldPoint> {
        self.path_world.iter().rev().copied().collect()
    }

    /// X coordinates of the waypoints, goal first
    pub fn xs(&self) -> Vec<f32> {
        self.path_world.iter().map(|p| p.x).collect()
    }

    /// Y coordinates of the waypoints, goal first
    pub fn ys(&self) -> Vec<f32> {
        self.path_world.iter().map(|p| p.y).collect()
    }
}

/// Reason for path failure
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathFailure {
    /// Open set drained without reaching the goal
    NoPath,
    /// Observer requested cancellation
    Cancelled,
    /// Maximum iterations exceeded
    MaxIterationsExceeded,
    /// Start or goal is outside the grid (only with `validate_endpoints`)
    OutOfBounds,
    /// Start cell is blocked (only with `validate_endpoints`)
    StartBlocked,
    /// Goal cell is blocked (only with `validate_endpoints`)
    GoalBlocked,
}

impl std::fmt::Display for PathFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            PathFailure::NoPath => "no path found",
            PathFailure::Cancelled => "search cancelled",
            PathFailure::MaxIterationsExceeded => "iteration limit exceeded",
            PathFailure::OutOfBounds => "start or goal outside grid",
            PathFailure::StartBlocked => "start cell blocked",
            PathFailure::GoalBlocked => "goal cell blocked",
        };
        f.write_str(msg)
    }
}
