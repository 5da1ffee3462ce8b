//! First-Come, First-Served.
//!
//! # Algorithm
//!
//! 1. Order processes by arrival (ties by lowest ID).
//! 2. For each, idle until it arrives if the CPU is ahead of it.
//! 3. Run it to completion.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the pass.

use super::{SchedulingPolicy, TimelineBuilder};
use crate::dispatching::{rules, RuleEngine, SchedulingContext, TieBreaker};
use crate::models::ProcessState;

/// Non-preemptive arrival-order scheduler.
#[derive(Debug, Clone)]
pub struct Fcfs {
    engine: RuleEngine,
}

impl Fcfs {
    /// Creates an FCFS policy.
    pub fn new() -> Self {
        Self {
            engine: RuleEngine::new()
                .with_rule(rules::EarliestArrival)
                .with_final_tie_breaker(TieBreaker::ById),
        }
    }
}

impl Default for Fcfs {
    fn default() -> Self {
        Self::new()
    }
}

impl SchedulingPolicy for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn run(&self, processes: &mut [ProcessState], builder: &mut TimelineBuilder) {
        let context = SchedulingContext::at_time(builder.now());
        let order = self.engine.sort_indices(processes, &context);

        for idx in order {
            let process = &mut processes[idx];
            builder.idle_until(process.arrival());
            let burst = process.remaining;
            builder.execute(process, burst);
        }
    }
}
