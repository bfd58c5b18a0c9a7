//! Workload sizes and limits.
//!
//! Every size here is fixed so that a run allocates the same amount of memory
//! every time; harnesses compare runs across language runtimes.

/// Number of top-level data entries built by the memory workload.
pub const ENTRY_COUNT: usize = 1000;

/// Length of the inner value list carried by every entry.
pub const ENTRY_VALUES_LEN: usize = 10;

/// Number of nested lists built by the `nested` variant.
pub const NESTED_COUNT: usize = 100;

/// Length of each nested list.
pub const NESTED_LEN: usize = 10;

/// Multiplier used to derive an entry label from its id.
pub const LABEL_FACTOR: usize = 42;

/// Number of Fibonacci terms generated per run.
pub const FIB_TERMS: usize = 50;

/// Upper bound (inclusive) of the prime sieve.
pub const PRIME_LIMIT: usize = 1000;

/// Upper bound (inclusive) of the FizzBuzz workload.
pub const FIZZBUZZ_LIMIT: usize = 100;

/// Maximum number of Fibonacci terms representable in a `u64`.
///
/// F(93) = 12200160415121876738 is the last term that fits, so the
/// sequence F(0)..=F(93) holds 94 terms.
pub const MAX_FIB_TERMS: usize = 94;

/// Exit codes reported by the binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}
