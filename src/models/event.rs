//! Simulation trace events.
//!
//! A run records what happened, in order, so a front end can replay the
//! simulation one step at a time.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{ProcessId, Tick};

/// A single step in a simulation trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimulationEvent {
    /// Process joined the Round Robin ready queue.
    Enqueued { process: ProcessId, at: Tick },
    /// Process executed for the first time.
    Started { process: ProcessId, at: Tick },
    /// Process was given the CPU.
    Dispatched { process: ProcessId, at: Tick },
    /// Process lost the CPU with work left.
    Preempted {
        process: ProcessId,
        at: Tick,
        remaining: Tick,
    },
    /// Process finished its burst.
    Completed { process: ProcessId, at: Tick },
    /// CPU waited for the next arrival.
    Idle { start: Tick, end: Tick },
    /// CPU switched to `to`.
    ContextSwitch { to: ProcessId, start: Tick, end: Tick },
}

impl SimulationEvent {
    /// Tick at which the event begins.
    pub fn time(&self) -> Tick {
        match *self {
            Self::Enqueued { at, .. }
            | Self::Started { at, .. }
            | Self::Dispatched { at, .. }
            | Self::Preempted { at, .. }
            | Self::Completed { at, .. } => at,
            Self::Idle { start, .. } | Self::ContextSwitch { start, .. } => start,
        }
    }
}

impl fmt::Display for SimulationEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Enqueued { process, at } => {
                write!(f, "t={at}: P{process} joins the ready queue")
            }
            Self::Started { process, at } => write!(f, "t={at}: P{process} starts execution"),
            Self::Dispatched { process, at } => write!(f, "t={at}: P{process} dispatched"),
            Self::Preempted {
                process,
                at,
                remaining,
            } => write!(f, "t={at}: P{process} preempted ({remaining} remaining)"),
            Self::Completed { process, at } => write!(f, "t={at}: P{process} completed"),
            Self::Idle { start, end } => write!(f, "t={start}: CPU idle until {end}"),
            Self::ContextSwitch { to, start, end } => {
                write!(f, "t={start}: context switch to P{to} until {end}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_time() {
        assert_eq!(SimulationEvent::Completed { process: 1, at: 9 }.time(), 9);
        assert_eq!(SimulationEvent::Idle { start: 2, end: 4 }.time(), 2);
    }

    #[test]
    fn test_event_display() {
        let event = SimulationEvent::Preempted {
            process: 1,
            at: 1,
            remaining: 7,
        };
        assert_eq!(event.to_string(), "t=1: P1 preempted (7 remaining)");
    }
}
