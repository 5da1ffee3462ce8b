//! Scheduling context for dispatching rule evaluation.

use crate::models::Tick;

/// Runtime scheduling state passed to dispatching rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchedulingContext {
    /// Current simulation clock.
    pub current_time: Tick,
}

impl SchedulingContext {
    /// Creates a context at the given tick.
    pub fn at_time(current_time: Tick) -> Self {
        Self { current_time }
    }
}
