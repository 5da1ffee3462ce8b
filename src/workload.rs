//! Workload acquisition: textual input and random generation.
//!
//! Front ends collect processes either as typed "arrival burst" pairs or
//! as a random preview set. Both paths produce plain [`ProcessSpec`]s with
//! IDs `1..=n` in input order; range checks are left to
//! [`validation`](crate::validation).

use rand::Rng;

use crate::models::{ProcessId, ProcessSpec, Tick};
use crate::validation::{ValidationError, ValidationErrorKind};

/// Parses one "arrival burst" pair per line.
///
/// Blank lines are skipped. Each remaining line must hold exactly two
/// integers separated by whitespace. IDs are assigned 1, 2, ... in line
/// order.
///
/// # Errors
/// One `MalformedInputLine` error per unparseable line.
///
/// # Example
/// ```
/// use u_cpu_schedule::workload::parse_processes;
///
/// let specs = parse_processes("0 5\n1 3\n").unwrap();
/// assert_eq!(specs.len(), 2);
/// assert_eq!((specs[1].id, specs[1].arrival, specs[1].burst), (2, 1, 3));
/// ```
pub fn parse_processes(text: &str) -> Result<Vec<ProcessSpec>, Vec<ValidationError>> {
    let mut specs = Vec::new();
    let mut errors = Vec::new();
    let mut next_id: ProcessId = 1;

    for (line_idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_pair(line) {
            Some((arrival, burst)) => specs.push(ProcessSpec::new(next_id, arrival, burst)),
            None => errors.push(ValidationError::new(
                ValidationErrorKind::MalformedInputLine,
                format!(
                    "Line {}: expected \"arrival burst\", got \"{line}\"",
                    line_idx + 1
                ),
            )),
        }
        next_id += 1;
    }

    if errors.is_empty() {
        Ok(specs)
    } else {
        Err(errors)
    }
}

fn parse_pair(line: &str) -> Option<(Tick, Tick)> {
    let mut fields = line.split_whitespace();
    let arrival = fields.next()?.parse().ok()?;
    let burst = fields.next()?.parse().ok()?;
    if fields.next().is_some() {
        return None;
    }
    Some((arrival, burst))
}

/// Random workload generator.
///
/// Arrivals are drawn uniformly from `0..=max_arrival` and bursts from
/// `1..=max_burst`.
#[derive(Debug, Clone, Copy)]
pub struct WorkloadGenerator {
    /// Latest possible arrival tick.
    pub max_arrival: Tick,
    /// Longest possible burst.
    pub max_burst: Tick,
}

impl WorkloadGenerator {
    /// Creates a generator with arrivals in `0..=9` and bursts in `1..=10`.
    pub fn new() -> Self {
        Self {
            max_arrival: 9,
            max_burst: 10,
        }
    }

    /// Sets the latest possible arrival tick.
    pub fn with_max_arrival(mut self, max_arrival: Tick) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the longest possible burst.
    pub fn with_max_burst(mut self, max_burst: Tick) -> Self {
        self.max_burst = max_burst;
        self
    }

    /// Draws `count` processes with IDs `1..=count`.
    pub fn generate<R: Rng>(&self, count: usize, rng: &mut R) -> Vec<ProcessSpec> {
        let max_arrival = self.max_arrival.max(0);
        let max_burst = self.max_burst.max(1);
        (1..=count)
            .map(|id| {
                ProcessSpec::new(
                    id as ProcessId,
                    rng.random_range(0..=max_arrival),
                    rng.random_range(1..=max_burst),
                )
            })
            .collect()
    }
}

impl Default for WorkloadGenerator {
    fn default() -> Self {
        Self::new()
    }
}
