//! Dispatching rules and rule engine for CPU selection.
//!
//! Each scheduling policy picks the next process by ranking candidates
//! with one or more rules (shortest burst, shortest remaining time,
//! earliest arrival) and a final tie-breaker. The [`SchedulingContext`]
//! carries the clock, which decides who is ready to compete.
//!
//! # Usage
//!
//! ```
//! use u_cpu_schedule::dispatching::{RuleEngine, SchedulingContext, TieBreaker};
//! use u_cpu_schedule::dispatching::rules;
//! use u_cpu_schedule::models::{ProcessSpec, ProcessState};
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::ShortestBurst)
//!     .with_rule(rules::EarliestArrival)
//!     .with_final_tie_breaker(TieBreaker::ById);
//!
//! let processes = ProcessState::from_specs(&[
//!     ProcessSpec::new(1, 0, 6),
//!     ProcessSpec::new(2, 0, 2),
//! ]);
//! let context = SchedulingContext::at_time(0);
//! assert_eq!(engine.select_best(&processes, [0, 1], &context), Some(1));
//! ```

mod context;
mod engine;
pub mod rules;

pub use context::SchedulingContext;
pub use engine::{RuleEngine, TieBreaker};

use crate::models::ProcessState;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (dispatched first). Scores are compared
/// exactly, so rules keyed on ticks keep full `i64` precision.
pub type RuleScore = i64;

/// A dispatching rule that ranks processes competing for the CPU.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules should return smaller values
/// for processes that should run first.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF", "SRTF").
    fn name(&self) -> &'static str;

    /// Evaluates the priority of a process at the current tick.
    ///
    /// Returns a score where lower = higher priority.
    fn evaluate(&self, process: &ProcessState, context: &SchedulingContext) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
