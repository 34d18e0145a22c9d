//! Planner configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::pathfinding::AStarConfig;

/// A* settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlannerSection {
    /// Reject out-of-grid or blocked endpoints up front
    #[serde(default)]
    pub validate_endpoints: bool,

    /// Maximum nodes to expand (absent = unlimited)
    #[serde(default)]
    pub max_iterations: Option<usize>,

    /// Report every expansion to the search observer
    #[serde(default)]
    pub show_expansions: bool,

    /// Heuristic weight (1.0 keeps paths optimal)
    #[serde(default = "defaults::heuristic_weight")]
    pub heuristic_weight: f32,
}

impl Default for PlannerSection {
    fn default() -> Self {
        Self {
            validate_endpoints: false,
            max_iterations: None,
            show_expansions: false,
            heuristic_weight: defaults::heuristic_weight(),
        }
    }
}

impl PlannerSection {
    /// Convert to the runtime planner config
    pub fn to_astar_config(&self) -> AStarConfig {
        AStarConfig {
            validate_endpoints: self.validate_endpoints,
            max_iterations: self.max_iterations,
            show_expansions: self.show_expansions,
            heuristic_weight: self.heuristic_weight,
        }
    }
}
