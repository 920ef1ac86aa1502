//! Number guessing: a secret in 1..=100 and ten attempts to find it.

use std::cmp::Ordering;
use std::ops::RangeInclusive;

use rand::Rng;

pub const RANGE: RangeInclusive<u32> = 1..=100;
pub const MAX_ATTEMPTS: u32 = 10;

/// One round of the guessing game. Created on `guess`, destroyed by the
/// session on a win or when the attempts run out.
#[derive(Debug)]
pub struct GuessGame {
    secret: u32,
    attempts: u32,
}

/// What a submitted token did to the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Not an integer in range. Costs nothing.
    Invalid,
    Correct {
        attempts: u32,
    },
    /// `exhausted` marks the attempt that burned the last try.
    TooLow {
        attempts: u32,
        exhausted: bool,
    },
    TooHigh {
        attempts: u32,
        exhausted: bool,
    },
}

impl GuessGame {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        Self {
            secret: rng.gen_range(RANGE),
            attempts: 0,
        }
    }

    /// Fixed-secret constructor for deterministic callers.
    pub fn with_secret(secret: u32) -> Self {
        debug_assert!(RANGE.contains(&secret));
        Self { secret, attempts: 0 }
    }

    /// Judges one guess token. Only parseable in-range numbers consume an
    /// attempt, so a typo never costs a try.
    pub fn evaluate(&mut self, token: &str) -> GuessOutcome {
        let value = match token.parse::<u32>() {
            Ok(v) if RANGE.contains(&v) => v,
            _ => return GuessOutcome::Invalid,
        };

        self.attempts += 1;
        let attempts = self.attempts;
        let exhausted = attempts >= MAX_ATTEMPTS;

        match value.cmp(&self.secret) {
            Ordering::Equal => GuessOutcome::Correct { attempts },
            Ordering::Less => GuessOutcome::TooLow { attempts, exhausted },
            Ordering::Greater => GuessOutcome::TooHigh { attempts, exhausted },
        }
    }

    pub fn secret(&self) -> u32 {
        self.secret
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }
}
