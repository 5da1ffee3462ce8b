//! CPU scheduling domain models.
//!
//! Provides the data types shared by every scheduling policy: the process
//! input and working record, the Gantt timeline, and the event trace.
//!
//! # Domain Mappings
//!
//! | u-cpu-schedule | Textbook term |
//! |----------------|---------------|
//! | ProcessSpec | Process (arrival, burst) |
//! | ProcessState | Process control block |
//! | Timeline | Gantt chart |
//! | SimulationEvent | Scheduler trace |

mod event;
mod process;
mod timeline;

pub use event::SimulationEvent;
pub(crate) use process::next_arrival_after;
pub use process::{ProcessId, ProcessSpec, ProcessState, Tick};
pub use timeline::{ExecutionInterval, Segment, SegmentKind, Timeline};
