//! Persistence and visualization of planner output.
//!
//! - **Dataset CSV**: append-only log of successful queries
//! - **SVG**: search observer that renders grid, expansions and path
//!
//! ```rust,ignore
//! use marga::io::{DatasetRecord, DatasetWriter, SvgRecorder};
//!
//! let mut recorder = SvgRecorder::new(&grid).with_endpoints(start, goal);
//! let result = planner.plan_with(start, goal, &mut recorder);
//! recorder.save(Path::new("query.svg"))?;
//!
//! if let Some(record) = DatasetRecord::from_result(start, goal, &result) {
//!     DatasetWriter::open(Path::new("path_data.csv"))?.append(&record)?;
//! }
//! ```

mod dataset;
mod visualize;

pub use dataset::{DATASET_HEADER, DatasetError, DatasetRecord, DatasetWriter};
pub use visualize::{SvgConfig, SvgError, SvgRecorder};
