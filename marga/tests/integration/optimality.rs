//! A* against brute-force uniform-cost search on random grids.

use approx::assert_relative_eq;
use marga::AStarPlanner;
use marga::PathFailure;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::common::{dijkstra, init_logging, path_cost, random_free_cell, random_grid};

#[test]
fn test_matches_dijkstra_on_random_grids() {
    init_logging();
    let mut rng = StdRng::seed_from_u64(0x6d61_7267);
    let mut solved = 0;
    let mut unreachable = 0;

    for _ in 0..60 {
        let grid = random_grid(&mut rng, 24, 16, 120);
        let (Some(start), Some(goal)) = (
            random_free_cell(&mut rng, &grid),
            random_free_cell(&mut rng, &grid),
        ) else {
            continue;
        };

        let result = AStarPlanner::with_defaults(&grid).plan_grid(start, goal);

        match dijkstra(&grid, start, goal) {
            Some(optimal) => {
                assert!(result.success, "A* missed a reachable goal");
                assert_relative_eq!(result.cost, optimal, epsilon = 1e-3);
                assert_relative_eq!(result.cost, path_cost(&result.path_grid), epsilon = 1e-3);
                assert_eq!(result.path_grid[0], goal);
                assert_eq!(*result.path_grid.last().unwrap(), start);
                solved += 1;
            }
            None => {
                assert!(!result.success);
                assert_eq!(result.failure_reason, Some(PathFailure::NoPath));
                unreachable += 1;
            }
        }
    }

    assert!(solved > 0);
    log::info!("{} solved, {} unreachable", solved, unreachable);
}

#[test]
fn test_path_is_connected_and_free() {
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..20 {
        let grid = random_grid(&mut rng, 30, 20, 150);
        let (Some(start), Some(goal)) = (
            random_free_cell(&mut rng, &grid),
            random_free_cell(&mut rng, &grid),
        ) else {
            continue;
        };

        let result = AStarPlanner::with_defaults(&grid).plan_grid(start, goal);
        if !result.success {
            continue;
        }

        for step in result.path_grid.windows(2) {
            let d = step[0] - step[1];
            assert!(d.x.abs() <= 1 && d.y.abs() <= 1 && (d.x, d.y) != (0, 0));
        }
        // Every cell after the start was entered through a traversable check
        for &cell in &result.path_grid[..result.path_grid.len() - 1] {
            assert!(grid.verify_node(cell));
        }
    }
}

#[test]
fn test_repeated_queries_are_identical() {
    let mut rng = StdRng::seed_from_u64(3);
    let grid = random_grid(&mut rng, 40, 30, 250);
    let start = random_free_cell(&mut rng, &grid).unwrap();
    let goal = random_free_cell(&mut rng, &grid).unwrap();

    let planner = AStarPlanner::with_defaults(&grid);
    let first = planner.plan_grid(start, goal);
    for _ in 0..5 {
        let again = planner.plan_grid(start, goal);
        assert_eq!(again.path_grid, first.path_grid);
        assert_eq!(again.nodes_expanded, first.nodes_expanded);
        assert_eq!(again.cost.to_bits(), first.cost.to_bits());
    }
}

#[test]
fn test_weighted_heuristic_never_beats_optimal() {
    let mut rng = StdRng::seed_from_u64(99);
    let grid = random_grid(&mut rng, 24, 24, 140);
    let start = random_free_cell(&mut rng, &grid).unwrap();
    let goal = random_free_cell(&mut rng, &grid).unwrap();

    let Some(optimal) = dijkstra(&grid, start, goal) else {
        return;
    };

    let config = marga::AStarConfig {
        heuristic_weight: 2.5,
        ..Default::default()
    };
    let result = AStarPlanner::new(&grid, config).plan_grid(start, goal);
    assert!(result.success);
    assert!(result.cost >= optimal - 1e-3);
}
