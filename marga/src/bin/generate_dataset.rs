//! Generate a path dataset over the reference arena.
//!
//! Builds the arena grid once, then repeatedly samples a start/goal pair,
//! plans a path and appends every solved query to a CSV file.
//!
//! Usage:
//!   cargo run --bin generate_dataset -- --count 100 --seed 42
//!   cargo run --bin generate_dataset -- --svg-dir ./output/svg

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Parser;
use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

use marga::io::{DatasetRecord, DatasetWriter, SvgRecorder};
use marga::scenario::{self, ScenarioSampler, arena::FOOTPRINTS};
use marga::{AStarPlanner, MargaConfig, OccupancyGrid, PathResult};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "configs/config.yaml")]
    config: PathBuf,

    /// Number of queries to run (overrides config)
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Output CSV file (overrides config)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// RNG seed for reproducible datasets (overrides config)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Write one SVG per query into this directory
    #[arg(long)]
    svg_dir: Option<PathBuf>,
}

fn load_config(path: &Path) -> marga::Result<MargaConfig> {
    if path.exists() {
        info!("Loading config from {}", path.display());
        Ok(MargaConfig::load(path)?)
    } else {
        warn!("Config {} not found, using defaults", path.display());
        Ok(MargaConfig::default())
    }
}

fn run(args: Args) -> marga::Result<()> {
    let config = load_config(&args.config)?;
    let count = args.count.unwrap_or(config.dataset.count);
    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(&config.dataset.output));

    let boundary = scenario::boundary_points();
    let grid = OccupancyGrid::build(
        &boundary,
        config.grid.resolution,
        config.grid.clearance_radius,
    )?;
    info!(
        "Arena grid {}x{} ({} blocked cells)",
        grid.width_x(),
        grid.width_y(),
        grid.blocked_count()
    );

    let mut astar_config = config.astar_config();
    if args.svg_dir.is_some() {
        astar_config = astar_config.with_expansions();
    }
    let planner = AStarPlanner::new(&grid, astar_config);

    let rng = match args.seed.or(config.dataset.seed) {
        Some(seed) => {
            info!("Seed: {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };
    let mut sampler = ScenarioSampler::new(
        &grid,
        &boundary,
        config.dataset.arena_width,
        config.dataset.arena_height,
        rng,
    )
    .with_max_attempts(config.dataset.max_sample_attempts);

    let mut recorder = args
        .svg_dir
        .as_ref()
        .map(|_| SvgRecorder::new(&grid).with_footprints(&FOOTPRINTS));

    let mut writer = DatasetWriter::open(&output)?;
    let started = Instant::now();
    let mut failures = 0usize;

    for i in 0..count {
        let query = sampler.sample()?;

        let result: PathResult = match (recorder.as_mut(), &args.svg_dir) {
            (Some(recorder), Some(dir)) => {
                recorder.reset(query.start, query.goal);
                let result = planner.plan_with(query.start, query.goal, &mut *recorder);
                let file = dir.join(format!("query_{:05}.svg", i));
                if let Err(e) = recorder.save(&file) {
                    warn!("Failed to write {}: {}", file.display(), e);
                }
                result
            }
            _ => planner.plan(query.start, query.goal),
        };

        match DatasetRecord::from_result(query.start, query.goal, &result) {
            Some(record) => {
                debug!(
                    "Query {}: {} waypoints, cost {:.2}, {} expanded",
                    i,
                    result.path_world.len(),
                    result.cost,
                    result.nodes_expanded
                );
                writer.append(&record)?;
            }
            None => {
                failures += 1;
                match result.failure_reason {
                    Some(reason) => debug!("Query {}: {}", i, reason),
                    None => debug!("Query {}: start equals goal, skipped", i),
                }
            }
        }

        if (i + 1) % 100 == 0 {
            info!("{}/{} queries", i + 1, count);
        }
    }

    writer.flush()?;
    info!(
        "Wrote {} rows to {} ({} skipped) in {:.1}s",
        writer.rows_written(),
        output.display(),
        failures,
        started.elapsed().as_secs_f32()
    );
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    if let Err(e) = run(Args::parse()) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
