//! Error type shared by every workload.

/// Error type for benchmark workloads.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BenchError {
    /// More Fibonacci terms were requested than fit in a `u64`.
    #[error("fibonacci overflow: {requested} terms requested, at most {max} fit in u64")]
    Overflow {
        /// Number of terms asked for.
        requested: usize,
        /// Largest supported number of terms.
        max: usize,
    },

    /// Configuration error (unknown variant, workload or format).
    #[error("configuration error: {0}")]
    Config(String),

    /// A summary value was requested from an empty sequence.
    #[error("empty sequence: {0}")]
    EmptySequence(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overflow_message() {
        let err = BenchError::Overflow {
            requested: 100,
            max: 94,
        };
        assert_eq!(
            err.to_string(),
            "fibonacci overflow: 100 terms requested, at most 94 fit in u64"
        );
    }

    #[test]
    fn config_message() {
        let err = BenchError::Config("unknown variant: c".into());
        assert_eq!(err.to_string(), "configuration error: unknown variant: c");
    }
}
