//! Per-process and aggregate scheduling metrics.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | completion - arrival |
//! | Response | first execution - arrival |
//! | Waiting | turnaround - burst |
//! | Makespan | end of the last timeline segment |
//! | CPU Utilization | executed time / makespan |
//! | Throughput | processes / makespan |
//!
//! Averages are arithmetic means over all processes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{ProcessId, ProcessSpec, ProcessState, Tick, Timeline};

/// Metrics of a single finished process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    /// Process identifier.
    pub process_id: ProcessId,
    /// Arrival tick.
    pub arrival: Tick,
    /// Total CPU requirement.
    pub burst: Tick,
    /// First execution tick.
    pub start: Tick,
    /// Completion tick.
    pub completion: Tick,
    /// Completion minus arrival.
    pub turnaround: Tick,
    /// Start minus arrival.
    pub response: Tick,
    /// Turnaround minus burst.
    pub waiting: Tick,
}

impl ProcessMetrics {
    /// Derives metrics from a process and its start/completion ticks.
    pub fn from_times(spec: ProcessSpec, start: Tick, completion: Tick) -> Self {
        let turnaround = completion - spec.arrival;
        Self {
            process_id: spec.id,
            arrival: spec.arrival,
            burst: spec.burst,
            start,
            completion,
            turnaround,
            response: start - spec.arrival,
            waiting: turnaround - spec.burst,
        }
    }

    /// Derives metrics from a working record.
    ///
    /// Returns `None` if the process never started or never completed.
    pub fn from_state(state: &ProcessState) -> Option<Self> {
        match (state.start_time, state.completion_time) {
            (Some(start), Some(completion)) => Some(Self::from_times(state.spec, start, completion)),
            _ => None,
        }
    }
}

/// Aggregate simulation metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationMetrics {
    /// Per-process metrics keyed by process ID.
    pub per_process: BTreeMap<ProcessId, ProcessMetrics>,
    /// Mean turnaround time.
    pub avg_turnaround: f64,
    /// Mean response time.
    pub avg_response: f64,
    /// Mean waiting time.
    pub avg_waiting: f64,
    /// End of the timeline.
    pub makespan: Tick,
    /// Fraction of the makespan spent executing processes (0.0..1.0).
    pub cpu_utilization: f64,
    /// Completed processes per tick.
    pub throughput: f64,
}

impl SimulationMetrics {
    /// Computes metrics from finished working records and their timeline.
    ///
    /// Every process is expected to have started and completed; one that
    /// has not is left out of the averages.
    pub fn calculate(processes: &[ProcessState], timeline: &Timeline) -> Self {
        let per_process: BTreeMap<ProcessId, ProcessMetrics> = processes
            .iter()
            .filter_map(ProcessMetrics::from_state)
            .map(|m| (m.process_id, m))
            .collect();
        debug_assert_eq!(
            per_process.len(),
            processes.len(),
            "every process must have start and completion times"
        );

        let counted = per_process.len();
        let mean = |f: fn(&ProcessMetrics) -> Tick| -> f64 {
            if counted == 0 {
                0.0
            } else {
                per_process.values().map(|m| f(m) as f64).sum::<f64>() / counted as f64
            }
        };
        let avg_turnaround = mean(|m| m.turnaround);
        let avg_response = mean(|m| m.response);
        let avg_waiting = mean(|m| m.waiting);

        let makespan = timeline.end_time();
        let (cpu_utilization, throughput) = if makespan > 0 {
            (
                timeline.busy_time() as f64 / makespan as f64,
                counted as f64 / makespan as f64,
            )
        } else {
            (0.0, 0.0)
        };

        Self {
            per_process,
            avg_turnaround,
            avg_response,
            avg_waiting,
            makespan,
            cpu_utilization,
            throughput,
        }
    }

    /// Metrics of one process.
    pub fn get(&self, process_id: ProcessId) -> Option<&ProcessMetrics> {
        self.per_process.get(&process_id)
    }
}
