//! Shortest Remaining Time First (preemptive SJF).
//!
//! # Algorithm
//!
//! Every tick:
//! 1. Among processes that have arrived and are incomplete, pick the one
//!    with the least remaining work (ties: lowest ID).
//! 2. Run it for exactly one tick. A newly arrived shorter process
//!    therefore preempts at its arrival tick.
//! 3. If nothing is ready, idle until the next arrival.
//!
//! Consecutive ticks of the same process are merged by the timeline.
//!
//! # Complexity
//! O(T · n) where T is the makespan.

use super::{SchedulingPolicy, TimelineBuilder};
use crate::dispatching::{rules, RuleEngine, SchedulingContext, TieBreaker};
use crate::models::{next_arrival_after, ProcessState, SimulationEvent};

/// Preemptive shortest-remaining-time scheduler.
#[derive(Debug, Clone)]
pub struct Srtf {
    engine: RuleEngine,
}

impl Srtf {
    /// Creates an SRTF policy.
    pub fn new() -> Self {
        Self {
            engine: RuleEngine::new()
                .with_rule(rules::ShortestRemaining)
                .with_final_tie_breaker(TieBreaker::ById),
        }
    }
}

impl Default for Srtf {
    fn default() -> Self {
        Self::new()
    }
}

impl SchedulingPolicy for Srtf {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn run(&self, processes: &mut [ProcessState], builder: &mut TimelineBuilder) {
        let mut running: Option<usize> = None;

        loop {
            let clock = builder.now();
            let context = SchedulingContext::at_time(clock);

            let Some(idx) = self.engine.select_ready(processes, &context) else {
                running = None;
                match next_arrival_after(processes, clock) {
                    Some(arrival) => {
                        builder.idle_until(arrival);
                        continue;
                    }
                    None => break,
                }
            };

            if let Some(prev) = running.filter(|&prev| prev != idx) {
                builder.record(SimulationEvent::Preempted {
                    process: processes[prev].id(),
                    at: clock,
                    remaining: processes[prev].remaining,
                });
            }

            let completed = builder.execute(&mut processes[idx], 1);
            running = if completed { None } else { Some(idx) };
        }
    }
}
