//! Process model.
//!
//! A process is a CPU-bound unit of work with an arrival time and a total
//! burst. `ProcessSpec` is the immutable input; `ProcessState` is the working
//! record a single simulation run mutates.
//!
//! # Time Representation
//! All times are integer ticks relative to the simulation epoch (t=0).

use serde::{Deserialize, Serialize};

/// Simulation time unit.
pub type Tick = i64;

/// Process identifier, unique within a run.
pub type ProcessId = u32;

/// Input description of a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    /// Unique process identifier.
    pub id: ProcessId,
    /// Tick at which the process becomes ready.
    pub arrival: Tick,
    /// Total CPU time required.
    pub burst: Tick,
}

impl ProcessSpec {
    /// Creates a process spec.
    pub fn new(id: ProcessId, arrival: Tick, burst: Tick) -> Self {
        Self { id, arrival, burst }
    }
}

/// Working record of a process during one simulation run.
///
/// Created fresh from a [`ProcessSpec`] for every run. `start_time` and
/// `completion_time` are each set exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessState {
    /// The input this state was created from.
    pub spec: ProcessSpec,
    /// CPU time still owed. Zero means complete.
    pub remaining: Tick,
    /// First tick at which the process executed.
    pub start_time: Option<Tick>,
    /// Tick at which `remaining` reached zero.
    pub completion_time: Option<Tick>,
}

impl ProcessState {
    /// Creates an unstarted working record.
    pub fn new(spec: ProcessSpec) -> Self {
        Self {
            spec,
            remaining: spec.burst,
            start_time: None,
            completion_time: None,
        }
    }

    /// Clones a fresh working set from input specs.
    pub fn from_specs(specs: &[ProcessSpec]) -> Vec<Self> {
        specs.iter().copied().map(Self::new).collect()
    }

    #[inline]
    pub fn id(&self) -> ProcessId {
        self.spec.id
    }

    #[inline]
    pub fn arrival(&self) -> Tick {
        self.spec.arrival
    }

    #[inline]
    pub fn burst(&self) -> Tick {
        self.spec.burst
    }

    /// Whether all CPU time has been delivered.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.remaining == 0
    }

    /// Whether the process has arrived by `clock` and still needs CPU time.
    #[inline]
    pub fn is_ready(&self, clock: Tick) -> bool {
        self.spec.arrival <= clock && !self.is_complete()
    }

    /// Completion minus arrival. `None` until complete.
    pub fn turnaround_time(&self) -> Option<Tick> {
        self.completion_time.map(|c| c - self.spec.arrival)
    }

    /// First execution minus arrival. `None` until started.
    pub fn response_time(&self) -> Option<Tick> {
        self.start_time.map(|s| s - self.spec.arrival)
    }

    /// Time spent ready but not running.
    pub fn waiting_time(&self) -> Option<Tick> {
        self.turnaround_time().map(|t| t - self.spec.burst)
    }
}

/// Earliest arrival among incomplete processes that arrive after `clock`.
pub(crate) fn next_arrival_after(processes: &[ProcessState], clock: Tick) -> Option<Tick> {
    processes
        .iter()
        .filter(|p| !p.is_complete() && p.arrival() > clock)
        .map(ProcessState::arrival)
        .min()
}
