//! Secret verb-combination detection.
//!
//! The session keeps a short window of recently dispatched verbs and checks
//! it after every command. Matching is token-wise over whole verbs, so
//! `decode lover coffeeshop` does not smuggle in `code love coffee`.

use std::collections::VecDeque;

const WINDOW_CAPACITY: usize = 5;

/// A hidden achievement unlocked by typing the right commands in a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combo {
    /// `code`, `love`, `coffee` back to back.
    TrueDeveloper,
    /// `midnight`, `coffee`, `code` back to back.
    NightOwl,
    /// `universe`, `matrix`, `hack` back to back.
    CosmicHacker,
    /// `tori` right after any other command.
    Tori,
}

const RUNS: [(Combo, [&str; 3]); 3] = [
    (Combo::TrueDeveloper, ["code", "love", "coffee"]),
    (Combo::NightOwl, ["midnight", "coffee", "code"]),
    (Combo::CosmicHacker, ["universe", "matrix", "hack"]),
];

/// Fixed-capacity FIFO of the verbs most recently dispatched.
#[derive(Debug, Default)]
pub struct SequenceTracker {
    window: VecDeque<String>,
}

impl SequenceTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a successfully dispatched verb, evicting the oldest past
    /// capacity. Unknown verbs never reach here.
    pub fn note(&mut self, verb: &str) {
        if self.window.len() == WINDOW_CAPACITY {
            self.window.pop_front();
        }
        self.window.push_back(verb.to_string());
    }

    /// Checks the window for a combo. On a hit the window is cleared so the
    /// same streak cannot fire twice; the first matching combo in
    /// declaration order wins.
    pub fn take_match(&mut self) -> Option<Combo> {
        let combo = self.detect()?;
        self.window.clear();
        Some(combo)
    }

    fn detect(&self) -> Option<Combo> {
        let verbs: Vec<&str> = self.window.iter().map(String::as_str).collect();

        for (combo, run) in RUNS {
            if verbs.windows(run.len()).any(|w| w == run) {
                return Some(combo);
            }
        }

        // The personal one: "tori" typed right after some other command.
        if verbs.len() >= 2
            && verbs[verbs.len() - 1] == "tori"
            && verbs[verbs.len() - 2] != "tori"
        {
            return Some(Combo::Tori);
        }

        None
    }

    pub fn verbs(&self) -> impl Iterator<Item = &str> {
        self.window.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.window.len()
    }

    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker_with(verbs: &[&str]) -> SequenceTracker {
        let mut tracker = SequenceTracker::new();
        for verb in verbs {
            tracker.note(verb);
        }
        tracker
    }

    #[test]
    fn test_contiguous_run_matches() {
        let mut tracker = tracker_with(&["help", "code", "love", "coffee"]);
        assert_eq!(tracker.take_match(), Some(Combo::TrueDeveloper));
        assert!(tracker.is_empty());
    }

    #[test]
    fn test_match_clears_window() {
        let mut tracker = tracker_with(&["universe", "matrix", "hack"]);
        assert_eq!(tracker.take_match(), Some(Combo::CosmicHacker));
        // A second check right after must find nothing.
        assert_eq!(tracker.take_match(), None);
    }

    #[test]
    fn test_intervening_verb_breaks_run() {
        let mut tracker = tracker_with(&["code", "love", "help", "coffee"]);
        assert_eq!(tracker.take_match(), None);
    }

    #[test]
    fn test_order_matters() {
        let mut tracker = tracker_with(&["coffee", "love", "code"]);
        assert_eq!(tracker.take_match(), None);
    }

    #[test]
    fn test_window_evicts_oldest_past_capacity() {
        let mut tracker = tracker_with(&["code", "love", "a", "b", "c", "d"]);
        let verbs: Vec<&str> = tracker.verbs().collect();
        assert_eq!(verbs, vec!["love", "a", "b", "c", "d"]);
        assert_eq!(tracker.len(), 5);
    }

    #[test]
    fn test_tori_needs_a_preceding_command() {
        let mut tracker = tracker_with(&["tori"]);
        assert_eq!(tracker.take_match(), None);

        let mut tracker = tracker_with(&["help", "tori"]);
        assert_eq!(tracker.take_match(), Some(Combo::Tori));
    }

    #[test]
    fn test_tori_twice_in_a_row_does_not_fire() {
        let mut tracker = tracker_with(&["tori", "tori"]);
        assert_eq!(tracker.take_match(), None);
    }

    #[test]
    fn test_night_owl_run() {
        let mut tracker = tracker_with(&["midnight", "coffee", "code"]);
        assert_eq!(tracker.take_match(), Some(Combo::NightOwl));
    }
}
