//! End-to-end dataset generation over the reference arena.

use std::path::PathBuf;

use marga::io::{DATASET_HEADER, DatasetRecord, DatasetWriter, SvgRecorder};
use marga::scenario::{self, ARENA_HEIGHT, ARENA_WIDTH, ScenarioSampler, arena::FOOTPRINTS};
use marga::{AStarConfig, AStarPlanner, MargaConfig, OccupancyGrid, WorldPoint};
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::common::init_logging;

fn arena_grid(config: &MargaConfig) -> OccupancyGrid {
    OccupancyGrid::build(
        &scenario::boundary_points(),
        config.grid.resolution,
        config.grid.clearance_radius,
    )
    .unwrap()
}

fn parse_list(field: &str) -> Vec<f32> {
    field
        .trim_matches(|c| c == '"' || c == '[' || c == ']')
        .split(", ")
        .map(|v| v.parse().unwrap())
        .collect()
}

/// Split a dataset row into start, goal and the two path lists
fn parse_row(row: &str) -> (WorldPoint, WorldPoint, Vec<f32>, Vec<f32>) {
    let (head, paths) = row.split_once(",\"").unwrap();
    let nums: Vec<f32> = head.split(',').map(|v| v.parse().unwrap()).collect();
    let (xs, ys) = paths.split_once("\",\"").unwrap();
    (
        WorldPoint::new(nums[0], nums[1]),
        WorldPoint::new(nums[2], nums[3]),
        parse_list(xs),
        parse_list(ys),
    )
}

#[test]
fn test_arena_grid_shape() {
    let grid = arena_grid(&MargaConfig::default());
    let (min, max) = grid.bounds();

    assert_eq!(min, WorldPoint::new(0.0, 0.0));
    assert_eq!(max, WorldPoint::new(ARENA_WIDTH as f32, ARENA_HEIGHT as f32));
    assert!(grid.blocked_count() > 0);
    assert!(grid.blocked_count() < grid.cell_count());
}

#[test]
fn test_generate_dataset() {
    init_logging();
    let config = MargaConfig::default();
    let grid = arena_grid(&config);
    let boundary = scenario::boundary_points();
    let planner = AStarPlanner::new(&grid, config.astar_config());
    let mut sampler = ScenarioSampler::new(
        &grid,
        &boundary,
        config.dataset.arena_width,
        config.dataset.arena_height,
        StdRng::seed_from_u64(2024),
    );

    let dir = tempfile::tempdir().unwrap();
    let csv = dir.path().join("path_data.csv");
    let mut writer = DatasetWriter::open(&csv).unwrap();

    let queries = 30;
    for _ in 0..queries {
        let query = sampler.sample().unwrap();
        assert!(sampler.is_valid(query.start));
        assert!(sampler.is_valid(query.goal));

        let result = planner.plan(query.start, query.goal);
        if let Some(record) = DatasetRecord::from_result(query.start, query.goal, &result) {
            writer.append(&record).unwrap();
        }
    }
    writer.flush().unwrap();
    assert!(writer.rows_written() > 0);
    assert!(writer.rows_written() <= queries);

    let contents = std::fs::read_to_string(&csv).unwrap();
    assert!(contents.ends_with("\r\n"));
    let mut lines = contents.lines();
    assert_eq!(lines.next(), Some(DATASET_HEADER));

    let rows: Vec<&str> = lines.collect();
    assert_eq!(rows.len(), writer.rows_written());
    for row in rows {
        let (start, goal, xs, ys) = parse_row(row);
        assert_eq!(xs.len(), ys.len());
        assert!(xs.len() > 1);

        // Integer endpoints on a unit grid snap onto themselves
        assert_eq!(WorldPoint::new(xs[0], ys[0]), goal);
        assert_eq!(WorldPoint::new(xs[xs.len() - 1], ys[ys.len() - 1]), start);
    }
}

#[test]
fn test_same_seed_same_dataset() {
    let config = MargaConfig::default();
    let grid = arena_grid(&config);
    let boundary = scenario::boundary_points();
    let planner = AStarPlanner::with_defaults(&grid);

    let rows = |seed: u64| -> Vec<String> {
        let mut sampler = ScenarioSampler::new(
            &grid,
            &boundary,
            ARENA_WIDTH,
            ARENA_HEIGHT,
            StdRng::seed_from_u64(seed),
        );
        (0..10)
            .filter_map(|_| {
                let q = sampler.sample().unwrap();
                DatasetRecord::from_result(q.start, q.goal, &planner.plan(q.start, q.goal))
            })
            .map(|r| r.to_row())
            .collect()
    };

    assert_eq!(rows(5), rows(5));
}

#[test]
fn test_render_arena_query() {
    let config = MargaConfig::default();
    let grid = arena_grid(&config);
    let boundary = scenario::boundary_points();
    let mut sampler =
        ScenarioSampler::new(&grid, &boundary, ARENA_WIDTH, ARENA_HEIGHT, StdRng::seed_from_u64(8));
    let query = sampler.sample().unwrap();

    let planner = AStarPlanner::new(&grid, AStarConfig::default().with_expansions());
    let mut recorder = SvgRecorder::new(&grid)
        .with_footprints(&FOOTPRINTS)
        .with_endpoints(query.start, query.goal);
    let result = planner.plan_with(query.start, query.goal, &mut recorder);
    assert_eq!(recorder.expanded().len(), result.nodes_expanded);

    let tmp = tempfile::tempdir().unwrap();
    let out_dir = std::env::var("MARGA_TEST_OUTPUT")
        .map(PathBuf::from)
        .unwrap_or_else(|_| tmp.path().to_path_buf());
    let file = out_dir.join("arena_query.svg");
    recorder.save(&file).unwrap();

    let svg = std::fs::read_to_string(&file).unwrap();
    assert!(svg.contains("id=\"footprints\""));
}
