//! Random start/goal sampling inside the arena.

use log::trace;
use rand::Rng;
use thiserror::Error;

use super::arena::contains_point;
use crate::core::WorldPoint;
use crate::grid::OccupancyGrid;

/// A start/goal query
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QueryPair {
    pub start: WorldPoint,
    pub goal: WorldPoint,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SampleError {
    #[error("no valid start/goal pair after {attempts} attempts")]
    Exhausted { attempts: usize },
}

/// Rejection sampler for integer start/goal positions.
///
/// A candidate is accepted when it lies inside the arena polygon, inside the
/// grid's `[min, max)` bounds, and on a free cell.
pub struct ScenarioSampler<'a, R: Rng> {
    grid: &'a OccupancyGrid,
    region: &'a [WorldPoint],
    width: i32,
    height: i32,
    max_attempts: usize,
    rng: R,
}

impl<'a, R: Rng> ScenarioSampler<'a, R> {
    /// Sample x from `0..=width` and y from `0..=height`
    pub fn new(
        grid: &'a OccupancyGrid,
        region: &'a [WorldPoint],
        width: i32,
        height: i32,
        rng: R,
    ) -> Self {
        Self {
            grid,
            region,
            width,
            height,
            max_attempts: 10_000,
            rng,
        }
    }

    /// Override the rejection budget
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Whether a position is an acceptable start or goal
    pub fn is_valid(&self, p: WorldPoint) -> bool {
        if !contains_point(self.region, p) {
            return false;
        }

        let (min, max) = self.grid.bounds();
        if p.x < min.x || p.x >= max.x || p.y < min.y || p.y >= max.y {
            return false;
        }

        self.grid
            .world_to_grid(p)
            .is_some_and(|cell| !self.grid.is_blocked(cell))
    }

    /// Draw one valid start/goal pair
    pub fn sample(&mut self) -> Result<QueryPair, SampleError> {
        for attempt in 1..=self.max_attempts {
            let start = self.random_point();
            let goal = self.random_point();

            if self.is_valid(start) && self.is_valid(goal) {
                trace!(
                    "[Sampler] accepted ({}, {}) -> ({}, {}) after {} attempts",
                    start.x, start.y, goal.x, goal.y, attempt
                );
                return Ok(QueryPair { start, goal });
            }
        }

        Err(SampleError::Exhausted {
            attempts: self.max_attempts,
        })
    }

    fn random_point(&mut self) -> WorldPoint {
        let x = self.rng.random_range(0..=self.width);
        let y = self.rng.random_range(0..=self.height);
        WorldPoint::new(x as f32, y as f32)
    }
}
