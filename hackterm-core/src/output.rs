//! Append-only output transcript with severity-tagged lines.
//!
//! Everything the session says to the user goes through here. The core
//! never renders; the TUI draws the transcript each frame and the headless
//! driver prints whatever appeared since the last command.

/// Visual weight of a transcript line. The renderer maps each variant to a
/// theme style; the core only picks the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Ordinary body text.
    Plain,
    /// The echoed prompt line (`guest@hackterm:~$ …`).
    CommandEcho,
    Info,
    Success,
    Warning,
    Error,
}

/// One immutable line of session output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    pub severity: Severity,
    pub content: String,
}

/// Append-ordered log of everything printed so far.
///
/// Lines never change once appended; the only destructive operation is
/// [`Transcript::clear`], which drops the whole log.
#[derive(Debug, Default)]
pub struct Transcript {
    lines: Vec<OutputLine>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, severity: Severity, content: impl Into<String>) {
        self.lines.push(OutputLine {
            severity,
            content: content.into(),
        });
    }

    /// Appends each line of a multi-line block under one severity.
    pub fn push_block(&mut self, severity: Severity, block: &str) {
        for line in block.lines() {
            self.push(severity, line);
        }
    }

    /// Discards the entire log. Safe to call on an empty transcript.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[OutputLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
