//! Point and coordinate types.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// Grid coordinates (integer cell indices, already shifted by the grid minimum)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridCoord {
    /// X index (column)
    pub x: i32,
    /// Y index (row)
    pub y: i32,
}

impl GridCoord {
    /// Create a new grid coordinate
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Per-axis absolute index deltas, widened so any pair of indices fits
    #[inline]
    fn abs_delta(&self, other: &GridCoord) -> (f64, f64) {
        (
            (f64::from(self.x) - f64::from(other.x)).abs(),
            (f64::from(self.y) - f64::from(other.y)).abs(),
        )
    }

    /// Euclidean distance in index space
    #[inline]
    pub fn euclidean_distance(&self, other: &GridCoord) -> f32 {
        let (dx, dy) = self.abs_delta(other);
        dx.hypot(dy) as f32
    }

    /// Octile distance: exact shortest 8-connected cost on an empty grid
    #[inline]
    pub fn octile_distance(&self, other: &GridCoord) -> f32 {
        let (dx, dy) = self.abs_delta(other);
        let min = dx.min(dy);
        let max = dx.max(dy);
        (min * std::f64::consts::SQRT_2 + (max - min)) as f32
    }
}

impl Add for GridCoord {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        GridCoord::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for GridCoord {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        GridCoord::new(self.x - other.x, self.y - other.y)
    }
}

/// World coordinates (f32)
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct WorldPoint {
    pub x: f32,
    pub y: f32,
}

impl WorldPoint {
    /// Create a new world point
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Zero point (origin)
    pub const ZERO: WorldPoint = WorldPoint { x: 0.0, y: 0.0 };

    /// Euclidean distance to another point
    #[inline]
    pub fn distance(&self, other: &WorldPoint) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Zip parallel coordinate lists into points.
    ///
    /// Extra entries in the longer list are ignored.
    pub fn from_xy(xs: &[f32], ys: &[f32]) -> Vec<WorldPoint> {
        xs.iter()
            .zip(ys)
            .map(|(&x, &y)| WorldPoint::new(x, y))
            .collect()
    }
}

impl Add for WorldPoint {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        WorldPoint::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for WorldPoint {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        WorldPoint::new(self.x - other.x, self.y - other.y)
    }
}
