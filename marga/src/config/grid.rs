//! Grid configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Occupancy grid settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridSection {
    /// World units per cell
    #[serde(default = "defaults::resolution")]
    pub resolution: f32,

    /// Minimum distance between agent center and any obstacle point
    #[serde(default = "defaults::clearance_radius")]
    pub clearance_radius: f32,
}

impl Default for GridSection {
    fn default() -> Self {
        Self {
            resolution: defaults::resolution(),
            clearance_radius: defaults::clearance_radius(),
        }
    }
}
