//! Occupancy grid storage and coordinate conversion.

use crate::core::{GridCoord, WorldPoint};

/// Integer cell identifier used as the key of the search frontier sets.
pub type CellId = i64;

/// Immutable boolean occupancy grid.
///
/// The grid uses a coordinate system where:
/// - Cell (ix, iy) is centered at `(ix * resolution + min_x, iy * resolution + min_y)`
/// - Bounds `min_x..max_x`, `min_y..max_y` are the rounded extent of the obstacle points
/// - `true` marks a cell as blocked (within clearance radius of an obstacle point)
///
/// Cells are stored column-major (`ix * width_y + iy`). The grid is never
/// mutated after [`build`](OccupancyGrid::build), so a single instance can
/// back any number of planners.
#[derive(Clone, Debug)]
pub struct OccupancyGrid {
    pub(super) cells: Vec<bool>,
    pub(super) resolution: f32,
    pub(super) clearance_radius: f32,
    pub(super) min_x: i32,
    pub(super) min_y: i32,
    pub(super) max_x: i32,
    pub(super) max_y: i32,
    pub(super) width_x: usize,
    pub(super) width_y: usize,
}

impl OccupancyGrid {
    /// World units per cell
    #[inline]
    pub fn resolution(&self) -> f32 {
        self.resolution
    }

    /// Clearance radius used to inflate obstacles
    #[inline]
    pub fn clearance_radius(&self) -> f32 {
        self.clearance_radius
    }

    /// Rounded lower X bound in world units
    #[inline]
    pub fn min_x(&self) -> i32 {
        self.min_x
    }

    /// Rounded lower Y bound in world units
    #[inline]
    pub fn min_y(&self) -> i32 {
        self.min_y
    }

    /// Rounded upper X bound in world units (exclusive for traversal)
    #[inline]
    pub fn max_x(&self) -> i32 {
        self.max_x
    }

    /// Rounded upper Y bound in world units (exclusive for traversal)
    #[inline]
    pub fn max_y(&self) -> i32 {
        self.max_y
    }

    /// Number of cells along X
    #[inline]
    pub fn width_x(&self) -> usize {
        self.width_x
    }

    /// Number of cells along Y
    #[inline]
    pub fn width_y(&self) -> usize {
        self.width_y
    }

    /// Total number of cells
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width_x * self.width_y
    }

    /// Number of blocked cells
    pub fn blocked_count(&self) -> usize {
        self.cells.iter().filter(|&&b| b).count()
    }

    /// World bounds: (min_point, max_point)
    pub fn bounds(&self) -> (WorldPoint, WorldPoint) {
        (
            WorldPoint::new(self.min_x as f32, self.min_y as f32),
            WorldPoint::new(self.max_x as f32, self.max_y as f32),
        )
    }

    /// Check if grid indices fall inside the cell array
    #[inline]
    pub fn contains(&self, coord: GridCoord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.width_x
            && (coord.y as usize) < self.width_y
    }

    /// Whether a cell is blocked. Cells outside the array count as blocked.
    #[inline]
    pub fn is_blocked(&self, coord: GridCoord) -> bool {
        if !self.contains(coord) {
            return true;
        }
        self.cells[coord.x as usize * self.width_y + coord.y as usize]
    }

    /// World position to grid index along one axis.
    ///
    /// Ties round to even, so `0.5` maps to index 0 and `1.5` to index 2.
    /// Returns `None` for non-finite positions and for indices that do not
    /// fit in an `i32`; nothing is clamped.
    #[inline]
    pub fn calc_xy_index(&self, position: f32, min_pos: i32) -> Option<i32> {
        let index = ((f64::from(position) - f64::from(min_pos)) / f64::from(self.resolution))
            .round_ties_even();
        (index.is_finite() && index >= f64::from(i32::MIN) && index <= f64::from(i32::MAX))
            .then_some(index as i32)
    }

    /// Grid index to world position along one axis
    #[inline]
    pub fn calc_grid_position(&self, index: i32, min_pos: i32) -> f32 {
        index as f32 * self.resolution + min_pos as f32
    }

    /// Convert world coordinates to grid indices (no clamping).
    ///
    /// `None` when either axis is not representable, see [`calc_xy_index`](Self::calc_xy_index).
    #[inline]
    pub fn world_to_grid(&self, point: WorldPoint) -> Option<GridCoord> {
        Some(GridCoord::new(
            self.calc_xy_index(point.x, self.min_x)?,
            self.calc_xy_index(point.y, self.min_y)?,
        ))
    }

    /// Convert grid indices to world coordinates (cell center)
    #[inline]
    pub fn grid_to_world(&self, coord: GridCoord) -> WorldPoint {
        WorldPoint::new(
            self.calc_grid_position(coord.x, self.min_x),
            self.calc_grid_position(coord.y, self.min_y),
        )
    }

    /// Unique identifier of a cell, injective over in-grid coordinates
    #[inline]
    pub fn calc_grid_index(&self, coord: GridCoord) -> CellId {
        coord.y as CellId * self.width_x as CellId + coord.x as CellId
    }

    /// Check that a cell's world position lies in `[min, max)` on both axes
    /// and that the cell is free.
    pub fn verify_node(&self, coord: GridCoord) -> bool {
        let p = self.grid_to_world(coord);

        if p.x < self.min_x as f32 || p.y < self.min_y as f32 {
            return false;
        }
        if p.x >= self.max_x as f32 || p.y >= self.max_y as f32 {
            return false;
        }

        !self.is_blocked(coord)
    }

    /// Iterate over all blocked cells as grid coordinates
    pub fn blocked_cells(&self) -> impl Iterator<Item = GridCoord> + '_ {
        self.cells.iter().enumerate().filter_map(|(i, &blocked)| {
            blocked.then(|| GridCoord::new((i / self.width_y) as i32, (i % self.width_y) as i32))
        })
    }
}
