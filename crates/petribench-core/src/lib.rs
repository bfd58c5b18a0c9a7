//! # petribench-core
//!
//! Deterministic workloads for profiling memory and CPU samplers: a Fibonacci
//! generator, a Sieve of Eratosthenes, and bounded datasets sized to produce
//! measurable but modest memory pressure.

pub mod constants;
pub mod dataset;
pub mod error;
pub mod fibonacci;
pub mod fizzbuzz;
pub mod sieve;
pub mod workload;

// Re-exports
pub use constants::{exit_codes, FIB_TERMS, MAX_FIB_TERMS, PRIME_LIMIT};
pub use error::BenchError;
pub use fibonacci::{fibonacci, FibSequence};
pub use fizzbuzz::{fizzbuzz, FizzBuzz};
pub use sieve::prime_sieve;
pub use workload::{run_memory_workload, Variant, Workload, WorkloadReport};
