//! Simulation entry point.
//!
//! Validates a request, runs the selected policy over a fresh copy of the
//! process set, and derives metrics from the result. Runs share no state,
//! so independent requests may be simulated concurrently.

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{
    Fcfs, RoundRobin, SchedulingPolicy, SimulationMetrics, Sjf, Srtf, TimelineBuilder,
};
use crate::models::{ExecutionInterval, ProcessSpec, ProcessState, SimulationEvent, Tick, Timeline};
use crate::validation::{validate_input, ValidationError};

/// Scheduling discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// First-Come, First-Served.
    Fcfs,
    /// Shortest Job First (non-preemptive).
    Sjf,
    /// Shortest Remaining Time First (preemptive).
    Srtf,
    /// Round Robin with a fixed quantum.
    RoundRobin,
}

impl Algorithm {
    /// All supported algorithms.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::Srtf,
        Algorithm::RoundRobin,
    ];

    /// Short name ("FCFS", "SJF", "SRTF", "RR").
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Sjf => "SJF",
            Algorithm::Srtf => "SRTF",
            Algorithm::RoundRobin => "RR",
        }
    }

    /// Whether a running process can lose the CPU before finishing.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Algorithm::Srtf | Algorithm::RoundRobin)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Input container for a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Scheduling discipline.
    pub algorithm: Algorithm,
    /// Processes to schedule.
    pub processes: Vec<ProcessSpec>,
    /// Time slice for Round Robin. Ignored by other algorithms.
    #[serde(default)]
    pub quantum: Option<Tick>,
    /// Delay paid when the CPU switches to a different process.
    #[serde(default)]
    pub context_switch: Tick,
}

impl SimulationRequest {
    /// Creates a request with no quantum and no context-switch delay.
    pub fn new(algorithm: Algorithm, processes: Vec<ProcessSpec>) -> Self {
        Self {
            algorithm,
            processes,
            quantum: None,
            context_switch: 0,
        }
    }

    /// Sets the Round Robin quantum.
    pub fn with_quantum(mut self, quantum: Tick) -> Self {
        self.quantum = Some(quantum);
        self
    }

    /// Sets the context-switch delay.
    pub fn with_context_switch(mut self, delay: Tick) -> Self {
        self.context_switch = delay;
        self
    }

    /// Validates and runs this request.
    pub fn simulate(&self) -> Result<Simulation, Vec<ValidationError>> {
        simulate(self)
    }

    fn policy(&self) -> Box<dyn SchedulingPolicy> {
        match self.algorithm {
            Algorithm::Fcfs => Box::new(Fcfs::new()),
            Algorithm::Sjf => Box::new(Sjf::new()),
            Algorithm::Srtf => Box::new(Srtf::new()),
            Algorithm::RoundRobin => Box::new(RoundRobin::new(self.quantum.unwrap_or(1))),
        }
    }
}

/// Result of a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Simulation {
    /// Discipline that produced this run.
    pub algorithm: Algorithm,
    /// CPU activity over time.
    pub timeline: Timeline,
    /// Finished working records, in input order.
    pub processes: Vec<ProcessState>,
    /// Per-process and aggregate metrics.
    pub metrics: SimulationMetrics,
    /// Step-by-step trace.
    pub events: Vec<SimulationEvent>,
}

impl Simulation {
    /// Execution intervals of the timeline (idle and switches omitted).
    pub fn executions(&self) -> Vec<ExecutionInterval> {
        self.timeline.executions()
    }
}

/// Validates `request` and simulates it.
///
/// # Errors
/// Returns every validation problem found. No simulation work is done
/// when validation fails.
pub fn simulate(request: &SimulationRequest) -> Result<Simulation, Vec<ValidationError>> {
    if let Err(errors) = validate_input(
        request.algorithm,
        &request.processes,
        request.quantum,
        request.context_switch,
    ) {
        debug!(
            "rejected {} request with {} validation error(s)",
            request.algorithm,
            errors.len()
        );
        return Err(errors);
    }

    let policy = request.policy();
    debug!(
        "simulating {} over {} process(es)",
        policy.name(),
        request.processes.len()
    );

    let mut processes = ProcessState::from_specs(&request.processes);
    let mut builder = TimelineBuilder::new().with_context_switch(request.context_switch);
    policy.run(&mut processes, &mut builder);
    let (timeline, events) = builder.finish();

    debug_assert!(
        processes.iter().all(ProcessState::is_complete),
        "{} left processes incomplete",
        policy.name()
    );

    let metrics = SimulationMetrics::calculate(&processes, &timeline);
    debug!(
        "{} finished at t={} (avg turnaround {:.2}, avg response {:.2})",
        policy.name(),
        metrics.makespan,
        metrics.avg_turnaround,
        metrics.avg_response
    );

    Ok(Simulation {
        algorithm: request.algorithm,
        timeline,
        processes,
        metrics,
        events,
    })
}
