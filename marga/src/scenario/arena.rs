//! The reference 120 x 60 arena.
//!
//! Obstacles are described twice:
//! - [`boundary_points`]: unit-spaced samples tracing every obstacle edge,
//!   fed to the grid builder and used as the arena polygon
//! - [`FOOTPRINTS`]: filled rectangles, used only for rendering

use crate::core::WorldPoint;

pub const ARENA_WIDTH: i32 = 120;
pub const ARENA_HEIGHT: i32 = 60;

/// A straight run of unit-spaced samples along one axis.
///
/// `start..stop` by `step`, stop excluded.
#[derive(Clone, Copy, Debug)]
struct Run {
    horizontal: bool,
    fixed: i32,
    start: i32,
    stop: i32,
    step: i32,
}

const fn h(y: i32, start: i32, stop: i32, step: i32) -> Run {
    Run {
        horizontal: true,
        fixed: y,
        start,
        stop,
        step,
    }
}

const fn v(x: i32, start: i32, stop: i32, step: i32) -> Run {
    Run {
        horizontal: false,
        fixed: x,
        start,
        stop,
        step,
    }
}

impl Run {
    fn samples(self) -> impl Iterator<Item = WorldPoint> {
        let mut i = self.start;
        std::iter::from_fn(move || {
            let more = if self.step > 0 {
                i < self.stop
            } else {
                i > self.stop
            };
            if !more {
                return None;
            }
            let (along, fixed) = (i as f32, self.fixed as f32);
            i += self.step;
            Some(if self.horizontal {
                WorldPoint::new(along, fixed)
            } else {
                WorldPoint::new(fixed, along)
            })
        })
    }
}

/// Traced in drawing order; the sequence doubles as the arena polygon.
const RUNS: [Run; 51] = [
    // outer wall
    h(0, 0, 120, 1),
    v(120, 0, 60, 1),
    h(60, 120, -1, -1),
    v(0, 60, -1, -1),
    // west block
    h(40, 0, 8, 1),
    v(7, 40, 29, -1),
    h(30, 7, -1, -1),
    h(40, 15, 21, 1),
    v(20, 60, 40, -1),
    v(15, 40, 29, -1),
    v(21, 60, 39, -1),
    h(40, 21, 27, 1),
    v(15, 40, 39, -1),
    h(30, 15, 27, 1),
    v(26, 40, 29, -1),
    // central blocks
    v(40, 60, 54, -1),
    v(40, 40, 48, 1),
    h(40, 40, 33, -1),
    v(34, 40, 29, -1),
    h(30, 34, 37, 1),
    v(36, 30, 28, -1),
    h(28, 36, 43, 1),
    v(42, 28, 34, 1),
    h(33, 42, 63, 1),
    v(62, 33, 29, -1),
    v(62, 21, 12, -1),
    h(30, 62, 69, 1),
    h(13, 62, 41, -1),
    v(42, 13, 21, 1),
    h(20, 42, 35, -1),
    h(21, 62, 69, 1),
    v(68, 30, 48, 1),
    h(47, 68, 39, -1),
    v(36, 20, 9, -1),
    v(36, 0, 4, 1),
    h(10, 36, 69, 1),
    v(68, 10, 22, 1),
    h(3, 36, 69, 1),
    v(68, 3, -1, -1),
    h(55, 40, 69, 1),
    v(68, 55, 57, 1),
    h(56, 68, 116, 1),
    // east blocks
    h(20, 76, 89, 1),
    v(88, 0, 20, 1),
    v(76, 20, 25, 1),
    v(100, 0, 25, 1),
    h(24, 76, 101, 1),
    h(24, 109, 121, 1),
    v(116, 56, 29, -1),
    v(109, 24, 31, 1),
    h(30, 109, 117, 1),
];

/// Obstacle boundary samples of the reference arena, in drawing order
pub fn boundary_points() -> Vec<WorldPoint> {
    RUNS.iter().flat_map(|run| run.samples()).collect()
}

/// Axis-aligned filled obstacle rectangle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Footprint {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

const fn rect(min_x: f32, max_x: f32, min_y: f32, max_y: f32) -> Footprint {
    Footprint {
        min_x,
        min_y,
        max_x,
        max_y,
    }
}

impl Footprint {
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }
}

/// Solid obstacles of the reference arena
pub const FOOTPRINTS: [Footprint; 19] = [
    rect(0.0, 7.0, 30.0, 40.0),
    rect(15.0, 26.0, 30.0, 40.0),
    rect(20.0, 21.0, 40.0, 60.0),
    rect(34.0, 40.0, 30.0, 40.0),
    rect(36.0, 40.0, 28.0, 30.0),
    rect(40.0, 42.0, 28.0, 33.0),
    rect(40.0, 42.0, 33.0, 47.0),
    rect(42.0, 68.0, 33.0, 47.0),
    rect(62.0, 68.0, 30.0, 33.0),
    rect(42.0, 62.0, 10.0, 13.0),
    rect(62.0, 68.0, 10.0, 21.0),
    rect(36.0, 42.0, 10.0, 20.0),
    rect(36.0, 68.0, 0.0, 3.0),
    rect(76.0, 100.0, 20.0, 24.0),
    rect(88.0, 100.0, 0.0, 20.0),
    rect(109.0, 120.0, 24.0, 30.0),
    rect(116.0, 120.0, 30.0, 60.0),
    rect(68.0, 116.0, 56.0, 60.0),
    rect(40.0, 68.0, 55.0, 60.0),
];

/// Even-odd point-in-polygon test.
///
/// The polygon is the vertex sequence closed back to its first vertex.
/// Points exactly on an edge may land on either side.
pub fn contains_point(polygon: &[WorldPoint], p: WorldPoint) -> bool {
    let Some(mut prev) = polygon.last().copied() else {
        return false;
    };

    let mut inside = false;
    for &cur in polygon {
        if (cur.y > p.y) != (prev.y > p.y) {
            let x_cross = cur.x + (p.y - cur.y) * (prev.x - cur.x) / (prev.y - cur.y);
            if p.x < x_cross {
                inside = !inside;
            }
        }
        prev = cur;
    }
    inside
}
