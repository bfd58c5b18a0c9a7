//! Sieve of Eratosthenes.

/// Return every prime `<= limit` in ascending order.
///
/// Composites are cleared starting at `i * i` for each prime `i` with
/// `i * i <= limit`, stepping by `i`.
///
/// # Example
/// ```
/// assert_eq!(petribench_core::prime_sieve(10), [2, 3, 5, 7]);
/// ```
#[must_use]
pub fn prime_sieve(limit: usize) -> Vec<usize> {
    let mut sieve = vec![true; limit + 1];
    sieve[0] = false;
    if limit > 0 {
        sieve[1] = false;
    }

    let mut i = 2;
    while i * i <= limit {
        if sieve[i] {
            let mut j = i * i;
            while j <= limit {
                sieve[j] = false;
                j += i;
            }
        }
        i += 1;
    }

    sieve
        .into_iter()
        .enumerate()
        .filter_map(|(n, is_prime)| is_prime.then_some(n))
        .collect()
}
