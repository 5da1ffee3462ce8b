//! Input validation for scheduling simulations.
//!
//! Checks a process set and run configuration before any simulation work
//! starts. Detects:
//! - Empty process sets
//! - Negative arrival times
//! - Non-positive burst times
//! - Duplicate process IDs
//! - Missing or non-positive Round Robin quantum
//! - Process ID 0
//! - Negative context-switch delay
//! - Workloads whose timeline would not fit in a [`Tick`]
//!
//! Every problem found is reported, not just the first.

use std::collections::HashSet;
use std::fmt;

use crate::models::{ProcessSpec, Tick};
use crate::scheduler::Algorithm;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No processes were supplied.
    InvalidProcessCount,
    /// A burst time is zero or negative.
    InvalidBurstTime,
    /// An arrival time is negative.
    InvalidArrivalTime,
    /// Two processes share the same ID.
    DuplicateProcessId,
    /// A process ID is 0; IDs start at 1.
    InvalidProcessId,
    /// Round Robin quantum is missing or below 1.
    InvalidQuantum,
    /// Context-switch delay is negative.
    InvalidContextSwitch,
    /// A line of textual input could not be parsed.
    MalformedInputLine,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a process set.
///
/// Checks:
/// 1. At least one process
/// 2. No negative arrival times
/// 3. No non-positive burst times
/// 4. No duplicate or zero IDs
pub fn validate_processes(processes: &[ProcessSpec]) -> ValidationResult {
    let mut errors = Vec::new();
    check_processes(processes, &mut errors);
    into_result(errors)
}

/// Validates a Round Robin quantum.
pub fn validate_quantum(quantum: Option<Tick>) -> ValidationResult {
    let mut errors = Vec::new();
    check_quantum(quantum, &mut errors);
    into_result(errors)
}

/// Validates everything a simulation run needs.
///
/// The quantum is only checked for [`Algorithm::RoundRobin`]; other
/// algorithms ignore it.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    algorithm: Algorithm,
    processes: &[ProcessSpec],
    quantum: Option<Tick>,
    context_switch: Tick,
) -> ValidationResult {
    let mut errors = Vec::new();

    check_processes(processes, &mut errors);

    if algorithm == Algorithm::RoundRobin {
        check_quantum(quantum, &mut errors);
    }

    if context_switch < 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidContextSwitch,
            format!("Context-switch delay must be non-negative, got {context_switch}"),
        ));
    }

    // The bound is only meaningful over otherwise valid values.
    let horizon = timeline_horizon(algorithm, processes, quantum, context_switch);
    if errors.is_empty() && horizon.is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidBurstTime,
            format!(
                "Workload does not fit the clock: latest arrival plus total burst \
                 and context switches exceeds {}",
                Tick::MAX
            ),
        ));
    }

    into_result(errors)
}

/// Upper bound on the time the last process completes, or `None` if it
/// overflows a [`Tick`].
///
/// The CPU only idles while waiting for an arrival, so the run ends by
/// the latest arrival plus all bursts plus one context switch per dispatch.
/// Non-preemptive policies dispatch each process once; SRTF resumes a
/// process at most once per arrival or completion; Round Robin dispatches
/// once per slice.
fn timeline_horizon(
    algorithm: Algorithm,
    processes: &[ProcessSpec],
    quantum: Option<Tick>,
    context_switch: Tick,
) -> Option<Tick> {
    let latest_arrival = processes.iter().map(|p| p.arrival).max().unwrap_or(0);
    let total_burst = processes
        .iter()
        .try_fold(0 as Tick, |acc, p| acc.checked_add(p.burst))?;
    let count = Tick::try_from(processes.len()).ok()?;

    let dispatches = match algorithm {
        Algorithm::Fcfs | Algorithm::Sjf => count,
        Algorithm::Srtf => count.checked_mul(2)?,
        Algorithm::RoundRobin => {
            let quantum = quantum.unwrap_or(1).max(1);
            processes.iter().try_fold(0 as Tick, |acc, p| {
                acc.checked_add(p.burst / quantum + Tick::from(p.burst % quantum != 0))
            })?
        }
    };

    latest_arrival
        .checked_add(total_burst)?
        .checked_add(dispatches.checked_mul(context_switch)?)
}

fn check_processes(processes: &[ProcessSpec], errors: &mut Vec<ValidationError>) {
    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidProcessCount,
            "At least one process is required",
        ));
    }

    let mut ids = HashSet::new();
    for p in processes {
        if p.id == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidProcessId,
                "Process IDs must be positive, got 0",
            ));
        }

        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateProcessId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidArrivalTime,
                format!(
                    "Process {} has negative arrival time {}",
                    p.id, p.arrival
                ),
            ));
        }

        if p.burst <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidBurstTime,
                format!(
                    "Process {} has non-positive burst time {}",
                    p.id, p.burst
                ),
            ));
        }
    }
}

fn check_quantum(quantum: Option<Tick>, errors: &mut Vec<ValidationError>) {
    match quantum {
        None => errors.push(ValidationError::new(
            ValidationErrorKind::InvalidQuantum,
            "Round Robin requires a time quantum",
        )),
        Some(q) if q < 1 => errors.push(ValidationError::new(
            ValidationErrorKind::InvalidQuantum,
            format!("Time quantum must be at least 1, got {q}"),
        )),
        Some(_) => {}
    }
}

fn into_result(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_processes() -> Vec<ProcessSpec> {
        vec![
            ProcessSpec::new(1, 0, 5),
            ProcessSpec::new(2, 1, 3),
            ProcessSpec::new(3, 4, 1),
        ]
    }

    #[test]
    fn test_valid_input() {
        let processes = sample_processes();
        assert!(validate_input(Algorithm::Fcfs, &processes, None, 0).is_ok());
        assert!(validate_input(Algorithm::RoundRobin, &processes, Some(2), 1).is_ok());
    }

    #[test]
    fn test_empty_process_set() {
        let errors = validate_processes(&[]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidProcessCount));
    }

    #[test]
    fn test_duplicate_process_id() {
        let processes = vec![ProcessSpec::new(1, 0, 5), ProcessSpec::new(1, 2, 3)];

        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateProcessId && e.message.contains('1')));
    }

    #[test]
    fn test_negative_arrival() {
        let processes = vec![ProcessSpec::new(1, -1, 5)];

        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidArrivalTime);
    }

    #[test]
    fn test_non_positive_burst() {
        let processes = vec![ProcessSpec::new(1, 0, 0), ProcessSpec::new(2, 0, -3)];

        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::InvalidBurstTime)
                .count(),
            2
        );
    }

    #[test]
    fn test_quantum_required_for_round_robin() {
        let processes = sample_processes();

        let errors = validate_input(Algorithm::RoundRobin, &processes, None, 0).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidQuantum);

        let errors = validate_input(Algorithm::RoundRobin, &processes, Some(0), 0).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidQuantum);

        assert!(validate_quantum(Some(-2)).is_err());
        assert!(validate_quantum(Some(1)).is_ok());
    }

    #[test]
    fn test_quantum_ignored_for_other_algorithms() {
        let processes = sample_processes();
        assert!(validate_input(Algorithm::Srtf, &processes, Some(0), 0).is_ok());
    }

    #[test]
    fn test_negative_context_switch() {
        let errors = validate_input(Algorithm::Sjf, &sample_processes(), None, -1).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidContextSwitch);
    }

    #[test]
    fn test_multiple_errors() {
        // Duplicate ID + negative arrival + zero burst + bad quantum
        let processes = vec![ProcessSpec::new(1, 0, 2), ProcessSpec::new(1, -5, 0)];

        let errors = validate_input(Algorithm::RoundRobin, &processes, Some(0), 0).unwrap_err();
        assert!(errors.len() >= 4);
    }

    #[test]
    fn test_zero_process_id() {
        let processes = vec![ProcessSpec::new(0, 0, 1)];

        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidProcessId);
    }

    #[test]
    fn test_clock_overflow_rejected() {
        let late = vec![ProcessSpec::new(1, Tick::MAX - 1, 5)];
        let errors = validate_input(Algorithm::Fcfs, &late, None, 0).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidBurstTime);

        let huge = vec![ProcessSpec::new(1, 0, Tick::MAX), ProcessSpec::new(2, 0, 1)];
        assert!(validate_input(Algorithm::Sjf, &huge, None, 0).is_err());

        // Exactly reaching Tick::MAX is fine.
        let edge = vec![ProcessSpec::new(1, Tick::MAX - 5, 5)];
        assert!(validate_input(Algorithm::Fcfs, &edge, None, 0).is_ok());
    }

    #[test]
    fn test_clock_overflow_counts_context_switches() {
        let processes = vec![ProcessSpec::new(1, 0, 10), ProcessSpec::new(2, 0, 10)];
        let delay = Tick::MAX / 4;

        // Two dispatches fit, twenty single-tick slices do not.
        assert!(validate_input(Algorithm::Fcfs, &processes, None, delay).is_ok());
        assert!(validate_input(Algorithm::RoundRobin, &processes, Some(1), delay).is_err());
        assert!(validate_input(Algorithm::RoundRobin, &processes, Some(10), delay).is_ok());
    }

    #[test]
    fn test_error_display() {
        let err = ValidationError::new(ValidationErrorKind::InvalidQuantum, "bad");
        assert_eq!(err.to_string(), "InvalidQuantum: bad");
    }
}
