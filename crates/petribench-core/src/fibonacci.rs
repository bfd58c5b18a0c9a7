//! Fibonacci sequence generation over `u64`.

use std::iter::FusedIterator;

use crate::constants::MAX_FIB_TERMS;
use crate::error::BenchError;

/// Lazy iterator over the Fibonacci sequence in `u64`.
///
/// Yields F(0), F(1), ... and stops after F(93), the last term that fits.
///
/// # Example
/// ```
/// use petribench_core::fibonacci::FibSequence;
/// let fibs: Vec<u64> = FibSequence::new().take(7).collect();
/// assert_eq!(fibs, [0, 1, 1, 2, 3, 5, 8]);
/// ```
#[derive(Debug, Clone)]
pub struct FibSequence {
    current: Option<u64>,
    following: Option<u64>,
}

impl FibSequence {
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: Some(0),
            following: Some(1),
        }
    }
}

impl Default for FibSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FibSequence {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let value = self.current?;
        self.current = self.following;
        // None once the next term no longer fits.
        self.following = self.following.and_then(|b| b.checked_add(value));
        Some(value)
    }
}

impl FusedIterator for FibSequence {}

/// Generate the first `n` Fibonacci terms, seeded with `[0, 1]`.
///
/// The two seeds are always present, so `n < 2` yields `[0, 1]`.
///
/// # Errors
///
/// Returns [`BenchError::Overflow`] when `n` exceeds [`MAX_FIB_TERMS`].
///
/// # Example
/// ```
/// let seq = petribench_core::fibonacci(10).unwrap();
/// assert_eq!(seq, [0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
/// ```
pub fn fibonacci(n: usize) -> Result<Vec<u64>, BenchError> {
    if n > MAX_FIB_TERMS {
        return Err(BenchError::Overflow {
            requested: n,
            max: MAX_FIB_TERMS,
        });
    }

    let len = n.max(2);
    let mut sequence = Vec::with_capacity(len);
    sequence.extend(FibSequence::new().take(len));
    Ok(sequence)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_terms_are_the_seeds() {
        assert_eq!(fibonacci(2).unwrap(), [0, 1]);
    }

    #[test]
    fn first_ten() {
        assert_eq!(
            fibonacci(10).unwrap(),
            [0, 1, 1, 2, 3, 5, 8, 13, 21, 34]
        );
    }

    #[test]
    fn short_requests_keep_the_seeds() {
        assert_eq!(fibonacci(0).unwrap(), [0, 1]);
        assert_eq!(fibonacci(1).unwrap(), [0, 1]);
    }

    #[test]
    fn fifty_terms() {
        let seq = fibonacci(50).unwrap();
        assert_eq!(seq.len(), 50);
        assert_eq!(seq.last(), Some(&7_778_742_049));
    }

    #[test]
    fn largest_u64_term() {
        let seq = fibonacci(MAX_FIB_TERMS).unwrap();
        assert_eq!(seq.len(), 94);
        assert_eq!(seq[93], 12_200_160_415_121_876_738);
    }

    #[test]
    fn overflow_is_an_error() {
        assert_eq!(
            fibonacci(95),
            Err(BenchError::Overflow {
                requested: 95,
                max: 94
            })
        );
    }

    #[test]
    fn iterator_stops_before_overflow() {
        let mut seq = FibSequence::new();
        assert_eq!(seq.by_ref().count(), MAX_FIB_TERMS);
        assert_eq!(seq.next(), None);
    }

    #[test]
    fn recurrence_holds() {
        let seq = fibonacci(MAX_FIB_TERMS).unwrap();
        for i in 2..seq.len() {
            assert_eq!(seq[i], seq[i - 1] + seq[i - 2], "F({i})");
        }
    }
}
