//! Search observers.
//!
//! An observer is a side channel into a running search: it can watch
//! expansions (for visualization) and request cooperative cancellation.
//! Observers have no error path, so a failing sink cannot abort a search.

use std::sync::atomic::{AtomicBool, Ordering};

use super::types::PathResult;
use crate::core::{GridCoord, WorldPoint};

/// Snapshot taken after a node has been closed and its neighbors processed
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExpansionEvent {
    pub coord: GridCoord,
    pub world: WorldPoint,
    /// Accumulated cost of the expanded node
    pub cost: f32,
    pub open_len: usize,
    pub closed_len: usize,
}

/// Hooks invoked by [`AStarPlanner::plan_with`](super::AStarPlanner::plan_with).
pub trait SearchObserver {
    /// Called after each expansion when `AStarConfig::show_expansions` is set
    fn on_expand(&mut self, _event: &ExpansionEvent) {}

    /// Called once with the final result, success or not
    fn on_finish(&mut self, _result: &PathResult) {}

    /// Polled before every expansion
    fn should_cancel(&self) -> bool {
        false
    }
}

/// Observer that does nothing
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

/// Counts expansions and remembers the final outcome
#[derive(Clone, Debug, Default)]
pub struct ExpansionCounter {
    pub expansions: usize,
    pub finished: bool,
    pub success: bool,
}

impl SearchObserver for ExpansionCounter {
    fn on_expand(&mut self, _event: &ExpansionEvent) {
        self.expansions += 1;
    }

    fn on_finish(&mut self, result: &PathResult) {
        self.finished = true;
        self.success = result.success;
    }
}

/// A shared flag can cancel a search from another owner
impl SearchObserver for AtomicBool {
    fn should_cancel(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}
