//! FizzBuzz, the lightweight companion workload.

use std::fmt;

/// One FizzBuzz line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FizzBuzz {
    Fizz,
    Buzz,
    FizzBuzz,
    Number(usize),
}

impl FizzBuzz {
    #[must_use]
    pub fn of(i: usize) -> Self {
        if i % 15 == 0 {
            Self::FizzBuzz
        } else if i % 3 == 0 {
            Self::Fizz
        } else if i % 5 == 0 {
            Self::Buzz
        } else {
            Self::Number(i)
        }
    }
}

impl fmt::Display for FizzBuzz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fizz => f.write_str("Fizz"),
            Self::Buzz => f.write_str("Buzz"),
            Self::FizzBuzz => f.write_str("FizzBuzz"),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

/// FizzBuzz for `1..=limit`.
pub fn fizzbuzz(limit: usize) -> impl Iterator<Item = FizzBuzz> {
    (1..=limit).map(FizzBuzz::of)
}
