//! Timeline (Gantt) model.
//!
//! A timeline is the time-ordered record of what the CPU did during a run:
//! execute a process, sit idle waiting for an arrival, or pay a context
//! switch. Segments are half-open `[start, end)` and never overlap.

use serde::{Deserialize, Serialize};

use super::{ProcessId, Tick};

/// What the CPU was doing during a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SegmentKind {
    /// Running the given process.
    Execution(ProcessId),
    /// No process was ready.
    Idle,
    /// Switching between processes.
    ContextSwitch,
}

/// A contiguous span of CPU activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Activity during the span.
    pub kind: SegmentKind,
    /// First tick (inclusive).
    pub start: Tick,
    /// Last tick (exclusive).
    pub end: Tick,
}

impl Segment {
    /// Creates a segment.
    pub fn new(kind: SegmentKind, start: Tick, end: Tick) -> Self {
        Self { kind, start, end }
    }

    /// Length in ticks.
    #[inline]
    pub fn duration(&self) -> Tick {
        self.end - self.start
    }

    /// The executing process, if this is an execution segment.
    pub fn process_id(&self) -> Option<ProcessId> {
        match self.kind {
            SegmentKind::Execution(id) => Some(id),
            _ => None,
        }
    }
}

/// A span during which a process held the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionInterval {
    /// Executing process.
    pub process_id: ProcessId,
    /// First tick (inclusive).
    pub start: Tick,
    /// Last tick (exclusive).
    pub end: Tick,
}

impl ExecutionInterval {
    /// Creates an interval.
    pub fn new(process_id: ProcessId, start: Tick, end: Tick) -> Self {
        Self {
            process_id,
            start,
            end,
        }
    }

    /// Length in ticks.
    #[inline]
    pub fn duration(&self) -> Tick {
        self.end - self.start
    }
}

/// Ordered sequence of CPU activity segments.
///
/// Appending a segment that continues the previous one with the same kind
/// extends it instead of adding a new entry, so consecutive single-tick
/// executions of one process read as one block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    segments: Vec<Segment>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `[start, end)` with the given kind.
    ///
    /// Empty spans are ignored. `start` must not precede the end of the
    /// current last segment.
    pub fn push(&mut self, kind: SegmentKind, start: Tick, end: Tick) {
        if end <= start {
            return;
        }
        debug_assert!(
            self.end_time() <= start,
            "segment [{start}, {end}) overlaps timeline ending at {}",
            self.end_time()
        );
        if let Some(last) = self.segments.last_mut() {
            if last.kind == kind && last.end == start {
                last.end = end;
                return;
            }
        }
        self.segments.push(Segment::new(kind, start, end));
    }

    /// All segments in time order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The most recent segment.
    pub fn last(&self) -> Option<&Segment> {
        self.segments.last()
    }

    /// Execution intervals only, in time order.
    pub fn executions(&self) -> Vec<ExecutionInterval> {
        self.segments
            .iter()
            .filter_map(|s| {
                s.process_id()
                    .map(|id| ExecutionInterval::new(id, s.start, s.end))
            })
            .collect()
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether no activity was recorded.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// End of the last segment (0 if empty).
    pub fn end_time(&self) -> Tick {
        self.segments.last().map(|s| s.end).unwrap_or(0)
    }

    /// Total ticks spent executing processes.
    pub fn busy_time(&self) -> Tick {
        self.time_where(|k| matches!(k, SegmentKind::Execution(_)))
    }

    /// Total ticks spent idle.
    pub fn idle_time(&self) -> Tick {
        self.time_where(|k| k == SegmentKind::Idle)
    }

    /// Total ticks spent switching context.
    pub fn context_switch_time(&self) -> Tick {
        self.time_where(|k| k == SegmentKind::ContextSwitch)
    }

    /// Total ticks the given process executed.
    pub fn execution_time_of(&self, process_id: ProcessId) -> Tick {
        self.time_where(|k| k == SegmentKind::Execution(process_id))
    }

    fn time_where(&self, pred: impl Fn(SegmentKind) -> bool) -> Tick {
        self.segments
            .iter()
            .filter(|s| pred(s.kind))
            .map(Segment::duration)
            .sum()
    }
}
