//! Dataset generation section.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Scenario sampling and persistence settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DatasetSection {
    /// Number of queries to run
    #[serde(default = "defaults::query_count")]
    pub count: usize,

    /// CSV file that successful queries are appended to
    #[serde(default = "defaults::output")]
    pub output: String,

    /// Sampling range for x is `0..=arena_width`
    #[serde(default = "defaults::arena_width")]
    pub arena_width: i32,

    /// Sampling range for y is `0..=arena_height`
    #[serde(default = "defaults::arena_height")]
    pub arena_height: i32,

    /// Rejection sampling budget per query
    #[serde(default = "defaults::max_sample_attempts")]
    pub max_sample_attempts: usize,

    /// RNG seed (absent = seeded from the OS)
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for DatasetSection {
    fn default() -> Self {
        Self {
            count: defaults::query_count(),
            output: defaults::output(),
            arena_width: defaults::arena_width(),
            arena_height: defaults::arena_height(),
            max_sample_attempts: defaults::max_sample_attempts(),
            seed: None,
        }
    }
}
