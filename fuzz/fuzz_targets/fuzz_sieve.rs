#![no_main]

use libfuzzer_sys::fuzz_target;

use petribench_core::prime_sieve;

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // First 2 bytes as the limit, keeps each run fast
    let limit = u16::from_le_bytes([data[0], data[1]]) as usize;
    let primes = prime_sieve(limit);

    assert!(primes.windows(2).all(|w| w[0] < w[1]));
    for &p in &primes {
        assert!(p >= 2 && p <= limit);
        let mut d = 2;
        while d * d <= p {
            assert_ne!(p % d, 0, "{p} reported prime but divisible by {d}");
            d += 1;
        }
    }
});
