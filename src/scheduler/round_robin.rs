//! Round Robin with a fixed time quantum.
//!
//! # Algorithm
//!
//! 1. Admit every process with `arrival <= clock` to a FIFO ready queue,
//!    in arrival order (ties: lowest ID).
//! 2. Dequeue the head and run it for `min(quantum, remaining)`.
//! 3. Admit processes that arrived during that slice.
//! 4. Only then, if the process still has work, append it to the tail.
//! 5. If the queue is empty, idle until the next arrival.
//!
//! Steps 3 and 4 are ordered: a process arriving while another runs is
//! queued ahead of the one it interrupted.
//!
//! # Complexity
//! O(Σ burst / quantum + n log n).

use std::collections::VecDeque;

use super::{SchedulingPolicy, TimelineBuilder};
use crate::dispatching::{rules, RuleEngine, SchedulingContext, TieBreaker};
use crate::models::{ProcessState, SimulationEvent, Tick};

/// Preemptive time-sliced scheduler.
#[derive(Debug, Clone)]
pub struct RoundRobin {
    quantum: Tick,
    admission: RuleEngine,
}

impl RoundRobin {
    /// Creates a Round Robin policy. `quantum` must be at least 1.
    pub fn new(quantum: Tick) -> Self {
        debug_assert!(quantum >= 1, "quantum must be at least 1, got {quantum}");
        Self {
            quantum: quantum.max(1),
            admission: RuleEngine::new()
                .with_rule(rules::EarliestArrival)
                .with_final_tie_breaker(TieBreaker::ById),
        }
    }

    /// Time slice granted per dispatch.
    pub fn quantum(&self) -> Tick {
        self.quantum
    }
}

impl SchedulingPolicy for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn run(&self, processes: &mut [ProcessState], builder: &mut TimelineBuilder) {
        let context = SchedulingContext::at_time(builder.now());
        let mut ready = ReadyQueue::new(self.admission.sort_indices(processes, &context));

        loop {
            ready.admit_arrivals(processes, builder);

            let Some(current) = ready.pop() else {
                match ready.next_arrival(processes) {
                    Some(arrival) => {
                        builder.idle_until(arrival);
                        continue;
                    }
                    None => break,
                }
            };

            let completed = builder.execute(&mut processes[current], self.quantum);

            // Admit-then-requeue: arrivals during the slice go first.
            ready.admit_arrivals(processes, builder);
            if !completed {
                builder.record(SimulationEvent::Preempted {
                    process: processes[current].id(),
                    at: builder.now(),
                    remaining: processes[current].remaining,
                });
                ready.push(current, processes, builder);
            }
        }
    }
}

/// FIFO ready queue fed from a fixed arrival order.
#[derive(Debug)]
struct ReadyQueue {
    arrival_order: Vec<usize>,
    next_admission: usize,
    queue: VecDeque<usize>,
}

impl ReadyQueue {
    fn new(arrival_order: Vec<usize>) -> Self {
        Self {
            arrival_order,
            next_admission: 0,
            queue: VecDeque::new(),
        }
    }

    /// Enqueues every not-yet-admitted process that has arrived by now.
    fn admit_arrivals(&mut self, processes: &[ProcessState], builder: &mut TimelineBuilder) {
        while let Some(&idx) = self.arrival_order.get(self.next_admission) {
            if processes[idx].arrival() > builder.now() {
                break;
            }
            self.next_admission += 1;
            self.push(idx, processes, builder);
        }
    }

    fn push(&mut self, idx: usize, processes: &[ProcessState], builder: &mut TimelineBuilder) {
        self.queue.push_back(idx);
        builder.record(SimulationEvent::Enqueued {
            process: processes[idx].id(),
            at: builder.now(),
        });
    }

    fn pop(&mut self) -> Option<usize> {
        self.queue.pop_front()
    }

    /// Arrival tick of the next process not yet admitted.
    fn next_arrival(&self, processes: &[ProcessState]) -> Option<Tick> {
        self.arrival_order
            .get(self.next_admission)
            .map(|&idx| processes[idx].arrival())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExecutionInterval, ProcessSpec, Timeline};

    fn run(specs: &[ProcessSpec], quantum: Tick) -> (Vec<ProcessState>, Timeline) {
        let mut processes = ProcessState::from_specs(specs);
        let mut builder = TimelineBuilder::new();
        RoundRobin::new(quantum).run(&mut processes, &mut builder);
        let (timeline, _) = builder.finish();
        (processes, timeline)
    }

    #[test]
    fn test_rr_interleaving() {
        let (processes, timeline) =
            run(&[ProcessSpec::new(1, 0, 5), ProcessSpec::new(2, 1, 3)], 2);

        assert_eq!(
            timeline.executions(),
            vec![
                ExecutionInterval::new(1, 0, 2),
                ExecutionInterval::new(2, 2, 4),
                ExecutionInterval::new(1, 4, 6),
                ExecutionInterval::new(2, 6, 7),
                ExecutionInterval::new(1, 7, 8),
            ]
        );
        assert_eq!(processes[0].completion_time, Some(8));
        assert_eq!(processes[1].completion_time, Some(7));
        assert_eq!(processes[1].start_time, Some(2));
    }

    #[test]
    fn test_rr_admits_arrivals_before_requeue() {
        // P2 arrives exactly when P1's slice ends; it must run before P1 resumes.
        let (_, timeline) = run(&[ProcessSpec::new(1, 0, 4), ProcessSpec::new(2, 2, 2)], 2);

        let order: Vec<u32> = timeline.executions().iter().map(|e| e.process_id).collect();
        assert_eq!(order, vec![1, 2, 1]);
    }

    #[test]
    fn test_rr_arrival_mid_slice_goes_ahead_of_preempted() {
        // P2 arrives during P1's first slice, P3 during P2's.
        let (_, timeline) = run(
            &[
                ProcessSpec::new(1, 0, 6),
                ProcessSpec::new(2, 1, 4),
                ProcessSpec::new(3, 5, 2),
            ],
            3,
        );

        assert_eq!(
            timeline.executions(),
            vec![
                ExecutionInterval::new(1, 0, 3),
                ExecutionInterval::new(2, 3, 6),
                ExecutionInterval::new(1, 6, 9),
                ExecutionInterval::new(3, 9, 11),
                ExecutionInterval::new(2, 11, 12),
            ]
        );
    }

    #[test]
    fn test_rr_sole_process_gets_consecutive_slices() {
        let (processes, timeline) = run(&[ProcessSpec::new(1, 0, 5)], 2);
        assert_eq!(timeline.executions(), vec![ExecutionInterval::new(1, 0, 5)]);
        assert_eq!(processes[0].completion_time, Some(5));
    }

    #[test]
    fn test_rr_waits_for_late_first_arrival() {
        let (processes, timeline) =
            run(&[ProcessSpec::new(1, 4, 1), ProcessSpec::new(2, 2, 1)], 2);

        assert_eq!(timeline.idle_time(), 3);
        assert_eq!(processes[1].start_time, Some(2));
        assert_eq!(processes[0].start_time, Some(4));
    }

    #[test]
    fn test_rr_slices_sum_to_burst() {
        let specs = [
            ProcessSpec::new(1, 0, 7),
            ProcessSpec::new(2, 2, 4),
            ProcessSpec::new(3, 3, 9),
        ];
        let (_, timeline) = run(&specs, 3);

        for spec in &specs {
            assert_eq!(timeline.execution_time_of(spec.id), spec.burst);
        }
        assert_eq!(timeline.busy_time(), 20);
    }
}
