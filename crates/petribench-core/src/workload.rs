//! The memory workload: allocate bounded datasets, run fibonacci and the
//! prime sieve, and summarize what was produced.

use std::fmt;
use std::hint::black_box;
use std::str::FromStr;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::constants::{FIB_TERMS, PRIME_LIMIT};
use crate::dataset::{build_labels, build_nested, build_records};
use crate::error::BenchError;
use crate::fibonacci::fibonacci;
use crate::sieve::prime_sieve;

/// Shape of the allocated datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// 1000 `DataEntry` records (canonical).
    #[default]
    Records,
    /// 1000 flat labels plus 100 nested lists.
    Nested,
}

impl Variant {
    /// All variants, canonical first.
    pub const ALL: [Variant; 2] = [Variant::Records, Variant::Nested];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Records => "records",
            Self::Nested => "nested",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "records" | "a" => Ok(Self::Records),
            "nested" | "b" => Ok(Self::Nested),
            other => Err(BenchError::Config(format!("unknown variant: {other}"))),
        }
    }
}

/// Which workload the binary runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Workload {
    #[default]
    Memory,
    FizzBuzz,
}

impl FromStr for Workload {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "fizzbuzz" => Ok(Self::FizzBuzz),
            other => Err(BenchError::Config(format!("unknown workload: {other}"))),
        }
    }
}

/// Counts derived from one run of the memory workload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadReport {
    pub variant: Variant,
    /// Top-level data entries generated.
    pub entries: usize,
    /// Nested lists created (`nested` variant only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nested: Option<usize>,
    /// Fibonacci terms requested.
    pub fib_terms: usize,
    pub fib_count: usize,
    pub fib_last: u64,
    /// Inclusive upper bound of the sieve.
    pub prime_limit: usize,
    pub prime_count: usize,
    pub largest_prime: usize,
    /// Sum of every produced collection length.
    pub total_operations: usize,
}

impl WorkloadReport {
    fn new(
        variant: Variant,
        entries: usize,
        nested: Option<usize>,
        fib: &[u64],
        primes: &[usize],
    ) -> Result<Self, BenchError> {
        let fib_last = *fib.last().ok_or(BenchError::EmptySequence("fibonacci"))?;
        let largest_prime = *primes.last().ok_or(BenchError::EmptySequence("primes"))?;
        let total_operations = entries + nested.unwrap_or(0) + fib.len() + primes.len();

        Ok(Self {
            variant,
            entries,
            nested,
            fib_terms: FIB_TERMS,
            fib_count: fib.len(),
            fib_last,
            prime_limit: PRIME_LIMIT,
            prime_count: primes.len(),
            largest_prime,
            total_operations,
        })
    }
}

/// Run the memory workload for `variant`.
///
/// Every dataset is dropped before this returns; only the counts survive.
pub fn run_memory_workload(variant: Variant) -> Result<WorkloadReport, BenchError> {
    let start = Instant::now();

    let (entries, nested) = match variant {
        Variant::Records => {
            let records = build_records();
            black_box(&records);
            (records.len(), None)
        }
        Variant::Nested => {
            let labels = build_labels();
            let nested = build_nested();
            black_box((&labels, &nested));
            (labels.len(), Some(nested.len()))
        }
    };
    tracing::debug!(%variant, entries, ?nested, elapsed = ?start.elapsed(), "datasets allocated");

    let fib = fibonacci(FIB_TERMS)?;
    tracing::debug!(terms = fib.len(), elapsed = ?start.elapsed(), "fibonacci computed");

    let primes = prime_sieve(PRIME_LIMIT);
    tracing::debug!(found = primes.len(), elapsed = ?start.elapsed(), "primes sieved");

    WorkloadReport::new(variant, entries, nested, &fib, &primes)
}
