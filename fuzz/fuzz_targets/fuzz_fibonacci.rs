#![no_main]

use libfuzzer_sys::fuzz_target;

use petribench_core::{fibonacci, MAX_FIB_TERMS};

fuzz_target!(|data: &[u8]| {
    let Some(&first) = data.first() else {
        return;
    };
    let n = first as usize;

    // Should never panic: either a valid sequence or an overflow error
    match fibonacci(n) {
        Ok(seq) => {
            assert!(n <= MAX_FIB_TERMS);
            assert_eq!(seq.len(), n.max(2));
            for i in 2..seq.len() {
                assert_eq!(seq[i], seq[i - 1] + seq[i - 2]);
            }
        }
        Err(_) => assert!(n > MAX_FIB_TERMS),
    }
});
