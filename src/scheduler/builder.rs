//! Shared clock and timeline bookkeeping for every policy.
//!
//! Policies decide *which* process runs; the builder owns *when*: it
//! advances the clock, records idle gaps and context switches, stamps
//! first-execution and completion times, and emits trace events.

use log::trace;

use crate::models::{ProcessState, SegmentKind, SimulationEvent, Tick, Timeline};

/// Clock, timeline and trace for one simulation run.
#[derive(Debug, Clone, Default)]
pub struct TimelineBuilder {
    clock: Tick,
    context_switch: Tick,
    timeline: Timeline,
    events: Vec<SimulationEvent>,
}

impl TimelineBuilder {
    /// Creates a builder at t=0 with no context-switch cost.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the delay paid before switching to a different process.
    pub fn with_context_switch(mut self, delay: Tick) -> Self {
        self.context_switch = delay.max(0);
        self
    }

    /// Current simulation time.
    #[inline]
    pub fn now(&self) -> Tick {
        self.clock
    }

    /// The timeline recorded so far.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Appends a policy-level event to the trace.
    pub fn record(&mut self, event: SimulationEvent) {
        trace!("{event}");
        self.events.push(event);
    }

    /// Leaves the CPU idle until `until`. No-op if the clock is already there.
    pub fn idle_until(&mut self, until: Tick) {
        if until <= self.clock {
            return;
        }
        let start = self.clock;
        self.timeline.push(SegmentKind::Idle, start, until);
        self.clock = until;
        self.record(SimulationEvent::Idle { start, end: until });
    }

    /// Runs `process` for up to `duration` ticks.
    ///
    /// Pays the context-switch delay first when the CPU was not already
    /// running this process. Returns `true` if the process completed.
    pub fn execute(&mut self, process: &mut ProcessState, duration: Tick) -> bool {
        let id = process.id();
        let duration = duration.min(process.remaining);
        debug_assert!(duration > 0, "P{id} dispatched with nothing to run");
        debug_assert!(
            process.arrival() <= self.clock,
            "P{id} dispatched at t={} before its arrival",
            self.clock
        );

        let continuing = matches!(
            self.timeline.last(),
            Some(s) if s.kind == SegmentKind::Execution(id) && s.end == self.clock
        );
        if !continuing {
            if self.context_switch > 0 && self.clock > 0 {
                let start = self.clock;
                let end = start + self.context_switch;
                self.timeline.push(SegmentKind::ContextSwitch, start, end);
                self.clock = end;
                self.record(SimulationEvent::ContextSwitch { to: id, start, end });
            }
            self.record(SimulationEvent::Dispatched {
                process: id,
                at: self.clock,
            });
        }

        if process.start_time.is_none() {
            process.start_time = Some(self.clock);
            self.record(SimulationEvent::Started {
                process: id,
                at: self.clock,
            });
        }

        let start = self.clock;
        self.clock += duration;
        self.timeline
            .push(SegmentKind::Execution(id), start, self.clock);
        process.remaining -= duration;

        if process.is_complete() {
            process.completion_time = Some(self.clock);
            self.record(SimulationEvent::Completed {
                process: id,
                at: self.clock,
            });
            true
        } else {
            false
        }
    }

    /// Consumes the builder, returning the timeline and event trace.
    pub fn finish(self) -> (Timeline, Vec<SimulationEvent>) {
        (self.timeline, self.events)
    }
}
