//! Hand-built obstacle layouts with known answers.

use approx::assert_relative_eq;
use marga::core::GridCoord;
use marga::pathfinding::{ExpansionCounter, find_path, path_exists};
use marga::{AStarConfig, AStarPlanner, OccupancyGrid, PathFailure, WorldPoint};
use std::f32::consts::SQRT_2;
use std::sync::atomic::AtomicBool;

use super::common::{frame, init_logging, wall};

/// 20x10 room split at x = 10, leaving one free cell at y = 5 once the
/// wall is inflated by a unit clearance.
fn split_room() -> OccupancyGrid {
    let mut points = frame(20, 10);
    points.extend(wall(10.0, 0, 4));
    points.extend(wall(10.0, 7, 10));
    OccupancyGrid::build(&points, 1.0, 1.0).unwrap()
}

/// 20x20 room with a closed square ring around (10, 10).
fn ringed_room() -> OccupancyGrid {
    let mut points = frame(20, 20);
    for i in 5..=15 {
        points.push(WorldPoint::new(i as f32, 5.0));
        points.push(WorldPoint::new(i as f32, 15.0));
        points.push(WorldPoint::new(5.0, i as f32));
        points.push(WorldPoint::new(15.0, i as f32));
    }
    OccupancyGrid::build(&points, 1.0, 1.0).unwrap()
}

#[test]
fn test_inflated_wall_leaves_single_gap() {
    init_logging();
    let grid = split_room();

    assert!(grid.is_blocked(GridCoord::new(10, 4)));
    assert!(grid.is_blocked(GridCoord::new(10, 6)));
    assert!(!grid.is_blocked(GridCoord::new(10, 5)));

    let result = find_path(&grid, WorldPoint::new(3.0, 5.0), WorldPoint::new(17.0, 5.0));
    assert!(result.success);
    assert!(result.path_grid.contains(&GridCoord::new(10, 5)));
    assert_relative_eq!(result.cost, 14.0, epsilon = 1e-4);
}

#[test]
fn test_detour_costs_more_than_straight_line() {
    let grid = split_room();
    let result = find_path(&grid, WorldPoint::new(4.0, 1.0), WorldPoint::new(16.0, 1.0));

    assert!(result.success);
    assert!(result.path_grid.contains(&GridCoord::new(10, 5)));
    assert!(result.cost > 12.0);
    assert_relative_eq!(result.cost, 4.0 + 8.0 * SQRT_2, epsilon = 1e-4);
}

#[test]
fn test_enclosed_goal_has_no_path() {
    let grid = ringed_room();
    let start = WorldPoint::new(1.0, 18.0);
    let goal = WorldPoint::new(10.0, 10.0);

    let mut counter = ExpansionCounter::default();
    let planner = AStarPlanner::new(&grid, AStarConfig::default().with_expansions());
    let result = planner.plan_with(start, goal, &mut counter);

    assert!(!result.success);
    assert_eq!(result.failure_reason, Some(PathFailure::NoPath));
    assert!(result.path_world.is_empty());
    assert!(result.nodes_expanded > 0);
    assert_eq!(counter.expansions, result.nodes_expanded);
    assert!(counter.finished);
    assert!(!counter.success);

    // Inside the ring is reachable from inside
    assert!(path_exists(&grid, WorldPoint::new(8.0, 8.0), goal));
}

#[test]
fn test_coarse_resolution_scales_waypoints() {
    let grid = OccupancyGrid::build(&frame(20, 12), 2.0, 0.0).unwrap();
    assert_eq!((grid.width_x(), grid.width_y()), (10, 6));

    let result = find_path(&grid, WorldPoint::new(0.0, 0.0), WorldPoint::new(18.0, 10.0));

    assert!(result.success);
    assert_relative_eq!(result.cost, 4.0 + 5.0 * SQRT_2, epsilon = 1e-4);
    assert_relative_eq!(result.length_world(), 2.0 * result.cost, epsilon = 1e-3);
    for p in &result.path_world {
        assert_eq!(p.x % 2.0, 0.0);
        assert_eq!(p.y % 2.0, 0.0);
    }
}

#[test]
fn test_parallel_lists_match_points() {
    let ox: Vec<f32> = vec![0.4, 10.0, 10.0, 20.3];
    let oy: Vec<f32> = vec![-0.3, 2.0, 8.0, 10.2];
    let from_lists = OccupancyGrid::from_xy(&ox, &oy, 1.0, 1.0).unwrap();
    let from_points = OccupancyGrid::build(&WorldPoint::from_xy(&ox, &oy), 1.0, 1.0).unwrap();

    assert_eq!(from_lists.blocked_count(), from_points.blocked_count());
    assert!(from_lists.blocked_cells().eq(from_points.blocked_cells()));
}

#[test]
fn test_cancelled_before_first_expansion() {
    let grid = split_room();
    let mut cancel = AtomicBool::new(true);
    let planner = AStarPlanner::with_defaults(&grid);

    let result = planner.plan_with(WorldPoint::new(3.0, 5.0), WorldPoint::new(17.0, 5.0), &mut cancel);

    assert_eq!(result.failure_reason, Some(PathFailure::Cancelled));
    assert_eq!(result.nodes_expanded, 0);
}

#[test]
fn test_unusable_endpoints_fail_cleanly() {
    let grid = split_room();
    let inside = WorldPoint::new(3.0, 5.0);
    let validating = AStarPlanner::new(&grid, AStarConfig::default().with_validation());

    for bad in [
        WorldPoint::new(1e12, 5.0),
        WorldPoint::new(-1e12, -1e12),
        WorldPoint::new(f32::NAN, 5.0),
        WorldPoint::new(3.0, f32::INFINITY),
    ] {
        assert!(!path_exists(&grid, bad, inside));
        assert_eq!(find_path(&grid, inside, bad).failure_reason, Some(PathFailure::NoPath));
        assert_eq!(
            validating.plan(bad, inside).failure_reason,
            Some(PathFailure::OutOfBounds)
        );
    }
}
