//! Scheduling policies, timeline construction and metrics.
//!
//! # Policies
//!
//! | Policy | Preemptive | Selection |
//! |--------|-----------|-----------|
//! | `Fcfs` | no | earliest arrival |
//! | `Sjf` | no | shortest burst |
//! | `Srtf` | yes, every tick | shortest remaining time |
//! | `RoundRobin` | yes, every quantum | FIFO ready queue |
//!
//! Every policy drives a shared [`TimelineBuilder`], which owns the clock,
//! idle gaps, context switches and first-start/completion bookkeeping.
//! [`simulate`] is the validated entry point.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod builder;
mod fcfs;
mod metrics;
mod round_robin;
mod simulate;
mod sjf;
mod srtf;

pub use builder::TimelineBuilder;
pub use fcfs::Fcfs;
pub use metrics::{ProcessMetrics, SimulationMetrics};
pub use round_robin::RoundRobin;
pub use simulate::{simulate, Algorithm, Simulation, SimulationRequest};
pub use sjf::Sjf;
pub use srtf::Srtf;

use crate::models::ProcessState;
use std::fmt::Debug;

/// A CPU scheduling discipline.
///
/// Implementations choose which process runs and for how long; the
/// [`TimelineBuilder`] advances time and records the outcome. `run` must
/// return only once every process is complete.
pub trait SchedulingPolicy: Debug {
    /// Policy name (e.g., "FCFS", "RR").
    fn name(&self) -> &'static str;

    /// Runs all `processes` to completion.
    fn run(&self, processes: &mut [ProcessState], builder: &mut TimelineBuilder);
}
