//! 8-connected motion model.

use super::GridCoord;

/// A single motion primitive: index offset plus step cost
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    pub dx: i32,
    pub dy: i32,
    pub cost: f32,
}

impl Motion {
    const fn new(dx: i32, dy: i32, cost: f32) -> Self {
        Self { dx, dy, cost }
    }

    /// Apply this motion to a coordinate, `None` if an index would overflow
    #[inline]
    pub fn apply(&self, from: GridCoord) -> Option<GridCoord> {
        Some(GridCoord::new(
            from.x.checked_add(self.dx)?,
            from.y.checked_add(self.dy)?,
        ))
    }

    /// True for the four diagonal primitives
    #[inline]
    pub fn is_diagonal(&self) -> bool {
        self.dx != 0 && self.dy != 0
    }
}

/// Axis-aligned unit steps cost 1, diagonal steps cost sqrt(2).
///
/// Order matters only for neighbor visiting order; selection ties are
/// broken by cell id, not by this order.
pub const MOTION_MODEL: [Motion; 8] = [
    Motion::new(1, 0, 1.0),
    Motion::new(0, 1, 1.0),
    Motion::new(-1, 0, 1.0),
    Motion::new(0, -1, 1.0),
    Motion::new(-1, -1, std::f32::consts::SQRT_2),
    Motion::new(-1, 1, std::f32::consts::SQRT_2),
    Motion::new(1, -1, std::f32::consts::SQRT_2),
    Motion::new(1, 1, std::f32::consts::SQRT_2),
];
