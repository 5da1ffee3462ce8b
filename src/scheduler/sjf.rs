//! Shortest Job First (non-preemptive).
//!
//! # Algorithm
//!
//! 1. Among processes that have arrived and are incomplete, pick the one
//!    with the smallest burst (ties: earliest arrival, then lowest ID).
//! 2. Run it to completion. A shorter job arriving meanwhile waits.
//! 3. If nothing is ready, idle until the next arrival.
//!
//! # Complexity
//! O(n²): one candidate scan per completion.

use super::{SchedulingPolicy, TimelineBuilder};
use crate::dispatching::{rules, RuleEngine, SchedulingContext, TieBreaker};
use crate::models::{next_arrival_after, ProcessState};

/// Non-preemptive shortest-burst scheduler.
#[derive(Debug, Clone)]
pub struct Sjf {
    engine: RuleEngine,
}

impl Sjf {
    /// Creates an SJF policy.
    pub fn new() -> Self {
        Self {
            engine: RuleEngine::new()
                .with_rule(rules::ShortestBurst)
                .with_rule(rules::EarliestArrival)
                .with_final_tie_breaker(TieBreaker::ById),
        }
    }
}

impl Default for Sjf {
    fn default() -> Self {
        Self::new()
    }
}

impl SchedulingPolicy for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn run(&self, processes: &mut [ProcessState], builder: &mut TimelineBuilder) {
        loop {
            let clock = builder.now();
            let context = SchedulingContext::at_time(clock);

            match self.engine.select_ready(processes, &context) {
                Some(idx) => {
                    let burst = processes[idx].remaining;
                    builder.execute(&mut processes[idx], burst);
                }
                None => match next_arrival_after(processes, clock) {
                    Some(arrival) => builder.idle_until(arrival),
                    None => break,
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExecutionInterval, ProcessSpec, Timeline};

    fn run(specs: &[ProcessSpec]) -> (Vec<ProcessState>, Timeline) {
        let mut processes = ProcessState::from_specs(specs);
        let mut builder = TimelineBuilder::new();
        Sjf::new().run(&mut processes, &mut builder);
        let (timeline, _) = builder.finish();
        (processes, timeline)
    }

    #[test]
    fn test_sjf_running_job_is_not_interrupted() {
        let (_, timeline) = run(&[
            ProcessSpec::new(1, 0, 6),
            ProcessSpec::new(2, 2, 2),
            ProcessSpec::new(3, 4, 1),
        ]);

        assert_eq!(
            timeline.executions(),
            vec![
                ExecutionInterval::new(1, 0, 6),
                ExecutionInterval::new(3, 6, 7),
                ExecutionInterval::new(2, 7, 9),
            ]
        );
    }

    #[test]
    fn test_sjf_tie_breaks_by_arrival_then_id() {
        let (_, timeline) = run(&[
            ProcessSpec::new(1, 0, 4),
            ProcessSpec::new(4, 2, 3),
            ProcessSpec::new(3, 1, 3),
            ProcessSpec::new(2, 1, 3),
        ]);

        let order: Vec<u32> = timeline.executions().iter().map(|e| e.process_id).collect();
        assert_eq!(order, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_sjf_idles_until_arrival() {
        let (processes, timeline) =
            run(&[ProcessSpec::new(1, 3, 2), ProcessSpec::new(2, 10, 1)]);

        assert_eq!(timeline.idle_time(), 3 + 5);
        assert_eq!(processes[1].start_time, Some(10));
        assert_eq!(processes[1].completion_time, Some(11));
    }
}
