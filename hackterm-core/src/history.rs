//! Command history: the recorded log behind the `history` verb and the
//! up/down recall cursor.

const MAX_ENTRIES: usize = 100;

/// Ordered log of submitted command lines plus a navigation cursor.
///
/// Entries run oldest to newest. The cursor is detached (`None`) until the
/// user starts recalling; recording anything snaps it back to detached.
#[derive(Debug, Default)]
pub struct CommandHistory {
    entries: Vec<String>,
    cursor: Option<usize>,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a submitted line and resets navigation.
    ///
    /// The caller filters out empty submissions; everything that reaches
    /// here is kept, typos included, so recall can fix them.
    pub fn record(&mut self, line: impl Into<String>) {
        if self.entries.len() == MAX_ENTRIES {
            self.entries.remove(0);
        }
        self.entries.push(line.into());
        self.cursor = None;
    }

    /// Steps toward older entries. Sticks at the oldest.
    pub fn prev(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        let next_pos = match self.cursor {
            None => self.entries.len() - 1,
            Some(i) => i.saturating_sub(1),
        };
        self.cursor = Some(next_pos);
        Some(&self.entries[next_pos])
    }

    /// Steps back toward newer entries; walking past the newest detaches
    /// the cursor and yields `None` so the caller can restore its draft.
    pub fn next(&mut self) -> Option<&str> {
        match self.cursor {
            Some(i) if i + 1 < self.entries.len() => {
                self.cursor = Some(i + 1);
                Some(&self.entries[i + 1])
            }
            Some(_) => {
                self.cursor = None;
                None
            }
            None => None,
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prev_walks_newest_to_oldest() {
        let mut history = CommandHistory::new();
        history.record("first");
        history.record("second");
        history.record("third");

        assert_eq!(history.prev(), Some("third"));
        assert_eq!(history.prev(), Some("second"));
        assert_eq!(history.prev(), Some("first"));
        // Sticks at the oldest entry.
        assert_eq!(history.prev(), Some("first"));
    }

    #[test]
    fn test_next_returns_none_past_newest() {
        let mut history = CommandHistory::new();
        history.record("one");
        history.record("two");

        history.prev();
        history.prev();
        assert_eq!(history.next(), Some("two"));
        assert_eq!(history.next(), None);
        // Detached cursor stays detached.
        assert_eq!(history.next(), None);
    }

    #[test]
    fn test_record_resets_cursor() {
        let mut history = CommandHistory::new();
        history.record("alpha");
        history.prev();
        history.record("beta");
        assert_eq!(history.prev(), Some("beta"));
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut history = CommandHistory::new();
        for i in 0..(MAX_ENTRIES + 5) {
            history.record(format!("cmd{i}"));
        }
        assert_eq!(history.entries().len(), MAX_ENTRIES);
        assert_eq!(history.entries()[0], "cmd5");
    }

    #[test]
    fn test_prev_on_empty_history() {
        let mut history = CommandHistory::new();
        assert_eq!(history.prev(), None);
        assert_eq!(history.next(), None);
    }
}
