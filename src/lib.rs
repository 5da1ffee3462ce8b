//! CPU scheduling simulator.
//!
//! Given processes with arrival and burst times, computes an execution
//! timeline and per-process metrics under First-Come-First-Served,
//! Shortest-Job-First, Shortest-Remaining-Time-First or Round Robin.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ProcessSpec`, `ProcessState`, `Timeline`,
//!   `Segment`, `ExecutionInterval`, `SimulationEvent`
//! - **`validation`**: Input integrity checks (process count, times, IDs, quantum)
//! - **`dispatching`**: Selection rules and the rule engine policies rank with
//! - **`scheduler`**: The four policies, timeline builder, metrics and `simulate`
//! - **`workload`**: "arrival burst" text parsing and random workloads
//! - **`report`**: Plain-text Gantt chart and metrics table
//!
//! # Example
//!
//! ```
//! use u_cpu_schedule::models::{ExecutionInterval, ProcessSpec};
//! use u_cpu_schedule::scheduler::{simulate, Algorithm, SimulationRequest};
//!
//! let request = SimulationRequest::new(
//!     Algorithm::Fcfs,
//!     vec![ProcessSpec::new(1, 0, 5), ProcessSpec::new(2, 1, 3)],
//! );
//! let sim = simulate(&request).unwrap();
//! assert_eq!(sim.executions()[1], ExecutionInterval::new(2, 5, 8));
//! assert!((sim.metrics.avg_turnaround - 6.0).abs() < 1e-10);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod dispatching;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;
pub mod workload;
