//! Occupancy grid construction from obstacle sample points.

use log::debug;

use super::error::GridBuildError;
use super::storage::OccupancyGrid;
use crate::core::WorldPoint;

impl OccupancyGrid {
    /// Build a grid from obstacle sample points.
    ///
    /// The bounding box is the rounded min/max over all points. A cell is
    /// blocked iff some point lies within `clearance_radius` (inclusive) of
    /// the cell's world-space center.
    ///
    /// Cost is O(width_x × width_y × points); the grid is meant to be built
    /// once per map and shared across queries.
    pub fn build(
        obstacle_points: &[WorldPoint],
        resolution: f32,
        clearance_radius: f32,
    ) -> Result<Self, GridBuildError> {
        if obstacle_points.is_empty() {
            return Err(GridBuildError::EmptyObstacles);
        }
        if !resolution.is_finite() || resolution <= 0.0 {
            return Err(GridBuildError::InvalidResolution(resolution));
        }
        if !clearance_radius.is_finite() || clearance_radius < 0.0 {
            return Err(GridBuildError::InvalidClearance(clearance_radius));
        }

        let (mut lo_x, mut lo_y) = (f32::INFINITY, f32::INFINITY);
        let (mut hi_x, mut hi_y) = (f32::NEG_INFINITY, f32::NEG_INFINITY);
        for p in obstacle_points {
            lo_x = lo_x.min(p.x);
            lo_y = lo_y.min(p.y);
            hi_x = hi_x.max(p.x);
            hi_y = hi_y.max(p.y);
        }

        let min_x = lo_x.round_ties_even() as i32;
        let min_y = lo_y.round_ties_even() as i32;
        let max_x = hi_x.round_ties_even() as i32;
        let max_y = hi_y.round_ties_even() as i32;
        debug!(
            "[Grid] bounds: min=({}, {}) max=({}, {})",
            min_x, min_y, max_x, max_y
        );

        let width_x = ((max_x - min_x) as f32 / resolution).round_ties_even() as usize;
        let width_y = ((max_y - min_y) as f32 / resolution).round_ties_even() as usize;
        debug!("[Grid] size: {} x {} cells", width_x, width_y);

        if width_x == 0 || width_y == 0 {
            return Err(GridBuildError::DegenerateExtent { width_x, width_y });
        }

        let mut grid = OccupancyGrid {
            cells: vec![false; width_x * width_y],
            resolution,
            clearance_radius,
            min_x,
            min_y,
            max_x,
            max_y,
            width_x,
            width_y,
        };

        for ix in 0..width_x {
            let x = grid.calc_grid_position(ix as i32, min_x);
            for iy in 0..width_y {
                let y = grid.calc_grid_position(iy as i32, min_y);
                let center = WorldPoint::new(x, y);
                if obstacle_points
                    .iter()
                    .any(|p| p.distance(&center) <= clearance_radius)
                {
                    grid.cells[ix * width_y + iy] = true;
                }
            }
        }

        debug!(
            "[Grid] {} of {} cells blocked (clearance {:.2})",
            grid.blocked_count(),
            grid.cell_count(),
            clearance_radius
        );

        Ok(grid)
    }

    /// Build from parallel x / y coordinate lists.
    pub fn from_xy(
        ox: &[f32],
        oy: &[f32],
        resolution: f32,
        clearance_radius: f32,
    ) -> Result<Self, GridBuildError> {
        if ox.len() != oy.len() {
            return Err(GridBuildError::LengthMismatch {
                xs: ox.len(),
                ys: oy.len(),
            });
        }
        Self::build(&WorldPoint::from_xy(ox, oy), resolution, clearance_radius)
    }
}
