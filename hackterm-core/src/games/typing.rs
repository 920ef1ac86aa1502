//! Typing speed test: one reference phrase, one submission, a verdict.
//!
//! Accuracy compares characters position by position across the longer of
//! the two strings; missing positions count as wrong. The denominator is
//! the reference length, which keeps the score in 0..=100 and rewards
//! finishing the phrase. That asymmetry is intentional.

use std::time::{Duration, Instant};

use rand::Rng;

use crate::flavor;

/// One typing round. Single-shot: the session destroys it after the first
/// graded submission.
#[derive(Debug)]
pub struct TypingGame {
    phrase: &'static str,
    started_at: Instant,
}

/// Numbers for the verdict lines.
#[derive(Debug, Clone, PartialEq)]
pub struct TypingReport {
    pub wpm: u32,
    /// Rounded percentage, always 0..=100.
    pub accuracy: u32,
    /// Positions typed correctly.
    pub correct: usize,
    pub reference_len: usize,
    pub seconds: f64,
}

impl TypingGame {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        Self::with_phrase(flavor::pick(rng, flavor::TYPING_PHRASES))
    }

    /// Fixed-phrase constructor for deterministic callers.
    pub fn with_phrase(phrase: &'static str) -> Self {
        Self {
            phrase,
            started_at: Instant::now(),
        }
    }

    pub fn phrase(&self) -> &'static str {
        self.phrase
    }

    /// Grades a submission against the wall clock.
    pub fn grade(&self, typed: &str) -> TypingReport {
        self.grade_after(self.started_at.elapsed(), typed)
    }

    /// Grades with an explicit elapsed duration. This is the whole formula;
    /// [`TypingGame::grade`] only supplies the clock.
    pub fn grade_after(&self, elapsed: Duration, typed: &str) -> TypingReport {
        let reference: Vec<char> = self.phrase.chars().collect();
        let typed_chars: Vec<char> = typed.chars().collect();

        let span = reference.len().max(typed_chars.len());
        let correct = (0..span)
            .filter(|&i| reference.get(i) == typed_chars.get(i))
            .count();

        // Sub-millisecond submissions would divide by zero; clamp instead.
        let seconds = elapsed.as_secs_f64().max(0.001);
        let words = typed_chars.len() as f64 / 5.0;
        let wpm = (words / (seconds / 60.0)).round() as u32;
        let accuracy = ((correct as f64 / reference.len() as f64) * 100.0).round() as u32;

        TypingReport {
            wpm,
            accuracy,
            correct,
            reference_len: reference.len(),
            seconds,
        }
    }
}
