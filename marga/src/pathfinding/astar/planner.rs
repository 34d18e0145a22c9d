//! A* planner implementation.

use crate::core::{GridCoord, MOTION_MODEL, WorldPoint};
use crate::grid::{CellId, OccupancyGrid};
use log::{debug, trace};
use std::collections::hash_map::Entry;
use std::collections::{BinaryHeap, HashMap};

use super::observer::{ExpansionEvent, NoopObserver, SearchObserver};
use super::types::{AStarConfig, FrontierEntry, PathFailure, PathResult, SearchNode};

/// A* pathfinder over a shared, read-only occupancy grid.
///
/// Each `plan` call owns its open and closed sets; nothing survives
/// between calls, so one planner can serve any number of queries.
pub struct AStarPlanner<'a> {
    grid: &'a OccupancyGrid,
    config: AStarConfig,
}

impl<'a> AStarPlanner<'a> {
    /// Create a new A* planner
    pub fn new(grid: &'a OccupancyGrid, config: AStarConfig) -> Self {
        Self { grid, config }
    }

    /// Create with default configuration
    pub fn with_defaults(grid: &'a OccupancyGrid) -> Self {
        Self::new(grid, AStarConfig::default())
    }

    pub fn grid(&self) -> &OccupancyGrid {
        self.grid
    }

    pub fn config(&self) -> &AStarConfig {
        &self.config
    }

    /// Find a path between world coordinates.
    ///
    /// Waypoints are snapped to cell positions and ordered goal -> start.
    pub fn plan(&self, start: WorldPoint, goal: WorldPoint) -> PathResult {
        self.plan_with(start, goal, &mut NoopObserver)
    }

    /// Find a path between world coordinates, reporting to `observer`
    pub fn plan_with(
        &self,
        start: WorldPoint,
        goal: WorldPoint,
        observer: &mut dyn SearchObserver,
    ) -> PathResult {
        match (self.grid.world_to_grid(start), self.grid.world_to_grid(goal)) {
            (Some(start_grid), Some(goal_grid)) => {
                self.plan_grid_with(start_grid, goal_grid, observer)
            }
            _ => {
                // Not a cell index at all: no search can reach it
                let reason = if self.config.validate_endpoints {
                    PathFailure::OutOfBounds
                } else {
                    PathFailure::NoPath
                };
                debug!(
                    "[AStar] FAILED: {:?}, unrepresentable endpoint start=({}, {}) goal=({}, {})",
                    reason, start.x, start.y, goal.x, goal.y
                );
                let result = PathResult::failed(reason, 0);
                observer.on_finish(&result);
                result
            }
        }
    }

    /// Find a path between grid coordinates
    pub fn plan_grid(&self, start: GridCoord, goal: GridCoord) -> PathResult {
        self.plan_grid_with(start, goal, &mut NoopObserver)
    }

    /// Find a path between grid coordinates, reporting to `observer`
    pub fn plan_grid_with(
        &self,
        start: GridCoord,
        goal: GridCoord,
        observer: &mut dyn SearchObserver,
    ) -> PathResult {
        trace!(
            "[AStar] plan: start=({},{}) goal=({},{})",
            start.x, start.y, goal.x, goal.y
        );

        let result = match self.check_endpoints(start, goal) {
            Some(reason) => PathResult::failed(reason, 0),
            None => self.search(start, goal, observer),
        };

        observer.on_finish(&result);
        result
    }

    fn check_endpoints(&self, start: GridCoord, goal: GridCoord) -> Option<PathFailure> {
        if !self.config.validate_endpoints {
            return None;
        }

        let in_bounds = |c: GridCoord| {
            let p = self.grid.grid_to_world(c);
            self.grid.contains(c)
                && p.x < self.grid.max_x() as f32
                && p.y < self.grid.max_y() as f32
        };

        if !in_bounds(start) || !in_bounds(goal) {
            debug!("[AStar] FAILED: OutOfBounds - start or goal outside grid");
            return Some(PathFailure::OutOfBounds);
        }
        if self.grid.is_blocked(start) {
            debug!("[AStar] FAILED: StartBlocked at ({},{})", start.x, start.y);
            return Some(PathFailure::StartBlocked);
        }
        if self.grid.is_blocked(goal) {
            debug!("[AStar] FAILED: GoalBlocked at ({},{})", goal.x, goal.y);
            return Some(PathFailure::GoalBlocked);
        }
        None
    }

    fn search(
        &self,
        start: GridCoord,
        goal: GridCoord,
        observer: &mut dyn SearchObserver,
    ) -> PathResult {
        let mut open_set: HashMap<CellId, SearchNode> = HashMap::new();
        let mut closed_set: HashMap<CellId, SearchNode> = HashMap::new();
        let mut frontier = BinaryHeap::new();

        let start_id = self.grid.calc_grid_index(start);
        open_set.insert(start_id, SearchNode::root(start));
        frontier.push(FrontierEntry {
            id: start_id,
            cost: 0.0,
            f_cost: self.heuristic(start, goal),
        });

        let mut nodes_expanded = 0;

        loop {
            if observer.should_cancel() {
                debug!("[AStar] cancelled after {} expansions", nodes_expanded);
                return PathResult::failed(PathFailure::Cancelled, nodes_expanded);
            }

            let Some(entry) = frontier.pop() else {
                debug!(
                    "[AStar] FAILED: NoPath, open set empty after {} expansions",
                    nodes_expanded
                );
                return PathResult::failed(PathFailure::NoPath, nodes_expanded);
            };

            // Closed, or superseded by a cheaper entry for the same cell
            let current = match open_set.get(&entry.id) {
                Some(node) if node.cost == entry.cost => *node,
                _ => continue,
            };

            if current.coord == goal {
                return self.reconstruct_path(current, &closed_set, nodes_expanded);
            }

            if self
                .config
                .max_iterations
                .is_some_and(|limit| nodes_expanded >= limit)
            {
                debug!(
                    "[AStar] FAILED: MaxIterationsExceeded ({} nodes)",
                    nodes_expanded
                );
                return PathResult::failed(PathFailure::MaxIterationsExceeded, nodes_expanded);
            }

            open_set.remove(&entry.id);
            closed_set.insert(entry.id, current);
            nodes_expanded += 1;

            for motion in MOTION_MODEL {
                let Some(coord) = motion.apply(current.coord) else {
                    continue;
                };
                if !self.grid.verify_node(coord) {
                    continue;
                }

                let id = self.grid.calc_grid_index(coord);
                if closed_set.contains_key(&id) {
                    continue;
                }

                let node = SearchNode {
                    coord,
                    cost: current.cost + motion.cost,
                    parent: Some(entry.id),
                };

                let improved = match open_set.entry(id) {
                    Entry::Vacant(slot) => {
                        slot.insert(node);
                        true
                    }
                    Entry::Occupied(mut slot) if slot.get().cost > node.cost => {
                        slot.insert(node);
                        true
                    }
                    Entry::Occupied(_) => false,
                };

                if improved {
                    frontier.push(FrontierEntry {
                        id,
                        cost: node.cost,
                        f_cost: node.cost + self.heuristic(coord, goal),
                    });
                }
            }

            if self.config.show_expansions {
                observer.on_expand(&ExpansionEvent {
                    coord: current.coord,
                    world: self.grid.grid_to_world(current.coord),
                    cost: current.cost,
                    open_len: open_set.len(),
                    closed_len: closed_set.len(),
                });
            }
        }
    }

    /// Weighted Euclidean distance in index space
    #[inline]
    fn heuristic(&self, from: GridCoord, to: GridCoord) -> f32 {
        self.config.heuristic_weight * from.euclidean_distance(&to)
    }

    /// Follow parent links from the goal back to the start
    fn reconstruct_path(
        &self,
        goal: SearchNode,
        closed_set: &HashMap<CellId, SearchNode>,
        nodes_expanded: usize,
    ) -> PathResult {
        let mut path_grid = vec![goal.coord];
        let mut parent = goal.parent;

        while let Some(node) = parent.and_then(|id| closed_set.get(&id)) {
            path_grid.push(node.coord);
            parent = node.parent;
        }

        let path_world: Vec<WorldPoint> = path_grid
            .iter()
            .map(|c| self.grid.grid_to_world(*c))
            .collect();

        trace!(
            "[AStar] SUCCESS: path length={} cells, cost={:.2}, nodes_expanded={}",
            path_grid.len(),
            goal.cost,
            nodes_expanded
        );

        PathResult {
            path_grid,
            path_world,
            cost: goal.cost,
            nodes_expanded,
            success: true,
            failure_reason: None,
        }
    }
}
