//! Grid construction errors.

use thiserror::Error;

/// Configuration errors rejected before any search can run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridBuildError {
    #[error("obstacle point set is empty, grid bounds are undefined")]
    EmptyObstacles,

    #[error("resolution must be positive and finite, got {0}")]
    InvalidResolution(f32),

    #[error("clearance radius must be non-negative and finite, got {0}")]
    InvalidClearance(f32),

    #[error("obstacle coordinate lists differ in length: {xs} x values, {ys} y values")]
    LengthMismatch { xs: usize, ys: usize },

    #[error("obstacle extent yields an empty grid ({width_x} x {width_y} cells)")]
    DegenerateExtent { width_x: usize, width_y: usize },
}
