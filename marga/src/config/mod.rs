//! Unified configuration loading for marga.
//!
//! Loads all configuration from a single YAML file with sensible defaults.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use marga::config::MargaConfig;
//!
//! // Load from default path (configs/config.yaml), falling back to defaults
//! let config = MargaConfig::load_default()?;
//!
//! let planner_config = config.astar_config();
//! ```
//!
//! ## Configuration Sections
//!
//! | Section | Description |
//! |---------|-------------|
//! | [`GridSection`] | Resolution and clearance radius |
//! | [`PlannerSection`] | A* limits, validation, expansion reporting |
//! | [`DatasetSection`] | Scenario sampling and CSV output |
//!
//! ## Example YAML
//!
//! ```yaml
//! grid:
//!   resolution: 1.0
//!   clearance_radius: 1.0
//! planner:
//!   validate_endpoints: false
//!   max_iterations: 200000
//! dataset:
//!   count: 2000
//!   output: path_data.csv
//! ```

mod dataset;
mod defaults;
mod error;
mod grid;
mod marga;
mod planner;

pub use error::ConfigLoadError;
pub use marga::MargaConfig;

pub use dataset::DatasetSection;
pub use grid::GridSection;
pub use planner::PlannerSection;
