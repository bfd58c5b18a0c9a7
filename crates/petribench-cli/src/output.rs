//! Text formatting for benchmark output.
//!
//! The wording of every line is parsed by external harnesses and must not
//! change.

use std::fmt;
use std::str::FromStr;

use petribench_core::{BenchError, WorkloadReport};

/// First banner line.
pub const BANNER: &str = "PetriBench Memory Benchmark";

/// Final line of a successful run.
pub const COMPLETION: &str = "Benchmark completed successfully";

/// Width of the separator under the banner.
const SEPARATOR_WIDTH: usize = 30;

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Fixed human-readable lines.
    #[default]
    Text,
    /// One JSON document.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(BenchError::Config(format!("unknown output format: {other}"))),
        }
    }
}

/// The separator line printed under the banner.
#[must_use]
pub fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

/// Banner lines printed before the workload runs.
#[must_use]
pub fn banner_lines() -> [String; 2] {
    [BANNER.to_string(), separator()]
}

/// Summary lines for one memory workload report.
#[must_use]
pub fn summary_lines(report: &WorkloadReport) -> Vec<String> {
    let mut lines = Vec::with_capacity(5);
    lines.push(format!("Generated {} data entries", report.entries));
    if let Some(nested) = report.nested {
        lines.push(format!("Created {nested} nested data structures"));
    }
    lines.push(format!(
        "Fibonacci({}): {} numbers, last value: {}",
        report.fib_terms, report.fib_count, report.fib_last
    ));
    lines.push(format!(
        "Primes up to {}: {} found",
        report.prime_limit, report.prime_count
    ));
    lines.push(format!("Largest prime: {}", report.largest_prime));
    lines
}

/// Closing lines printed after the workload returns.
#[must_use]
pub fn completion_lines(total: usize) -> [String; 2] {
    [format!("Total operations: {total}"), COMPLETION.to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use petribench_core::{run_memory_workload, Variant};

    #[test]
    fn separator_is_thirty_dashes() {
        assert_eq!(separator(), "------------------------------");
    }

    #[test]
    fn records_summary() {
        let report = run_memory_workload(Variant::Records).unwrap();
        assert_eq!(
            summary_lines(&report),
            [
                "Generated 1000 data entries",
                "Fibonacci(50): 50 numbers, last value: 7778742049",
                "Primes up to 1000: 168 found",
                "Largest prime: 997",
            ]
        );
    }

    #[test]
    fn nested_summary_has_extra_line() {
        let report = run_memory_workload(Variant::Nested).unwrap();
        let lines = summary_lines(&report);
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[1], "Created 100 nested data structures");
    }

    #[test]
    fn completion() {
        assert_eq!(
            completion_lines(1218),
            [
                "Total operations: 1218".to_string(),
                "Benchmark completed successfully".to_string()
            ]
        );
    }

    #[test]
    fn parse_format() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
