//! Built-in dispatching rules.
//!
//! | Rule | Policy | Score |
//! |------|--------|-------|
//! | `EarliestArrival` | FCFS, RR admission | arrival tick |
//! | `ShortestBurst` | SJF | total burst |
//! | `ShortestRemaining` | SRTF | remaining work |
//!
//! # Score Convention
//! All rules return lower scores for higher priority processes.

use super::{DispatchingRule, RuleScore, SchedulingContext};
use crate::models::ProcessState;

/// Earliest Arrival (First Come, First Served).
///
/// Prioritizes processes that entered the system first.
#[derive(Debug, Clone, Copy)]
pub struct EarliestArrival;

impl DispatchingRule for EarliestArrival {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn evaluate(&self, process: &ProcessState, _context: &SchedulingContext) -> RuleScore {
        process.arrival()
    }

    fn description(&self) -> &'static str {
        "First Come, First Served"
    }
}

/// Shortest Burst (Shortest Job First).
///
/// Prioritizes processes with the smallest total CPU requirement.
/// Minimizes average waiting time among non-preemptive policies.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl DispatchingRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, process: &ProcessState, _context: &SchedulingContext) -> RuleScore {
        process.burst()
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Shortest Remaining Time.
///
/// Prioritizes the process closest to completion. Re-evaluated every tick
/// this gives preemptive SRTF.
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl DispatchingRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn evaluate(&self, process: &ProcessState, _context: &SchedulingContext) -> RuleScore {
        process.remaining
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time First"
    }
}
