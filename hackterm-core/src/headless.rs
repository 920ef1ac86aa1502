//! Headless driver: lines in, transcript lines out.
//!
//! Powers `hackterm --headless` and the integration tests. Same shell,
//! same session; the only difference from the TUI is that timed visuals
//! are flattened into immediate output.

use crate::flavor;
use crate::output::OutputLine;
use crate::session::EffectRequest;
use crate::shell::{Shell, ShellConfig};

pub struct HeadlessShell {
    shell: Shell,
    seen: usize,
}

impl HeadlessShell {
    pub fn new() -> Self {
        Self::with_config(ShellConfig::default())
    }

    pub fn with_config(config: ShellConfig) -> Self {
        Self {
            shell: Shell::with_config(config),
            seen: 0,
        }
    }

    /// Feeds one line through the shell and returns everything it printed.
    pub fn send(&mut self, line: &str) -> Vec<OutputLine> {
        self.shell.submit_line(line);
        self.expand_effects();
        self.drain_new()
    }

    /// Lines appended since the last drain. Right after construction this
    /// is the banner, if configured.
    pub fn drain_new(&mut self) -> Vec<OutputLine> {
        let lines = self.shell.session().lines();
        // `clear` can shrink the log below the watermark.
        let from = self.seen.min(lines.len());
        let fresh = lines[from..].to_vec();
        self.seen = lines.len();
        fresh
    }

    fn expand_effects(&mut self) {
        let Some(effect) = self.shell.session_mut().take_effect() else {
            return;
        };
        match effect {
            EffectRequest::HackSequence => {
                // The TUI staggers these on a timer; here the rest of the
                // script lands at once.
                for (severity, content) in &flavor::HACK_SCRIPT[1..] {
                    self.shell.session_mut().append(*severity, *content);
                }
            }
            // Purely visual; nothing to print.
            EffectRequest::MatrixRain => {}
        }
    }

    pub fn quit_requested(&self) -> bool {
        self.shell.session().quit_requested()
    }

    pub fn shell(&self) -> &Shell {
        &self.shell
    }

    pub fn shell_mut(&mut self) -> &mut Shell {
        &mut self.shell
    }
}

impl Default for HeadlessShell {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::Severity;

    fn quiet() -> HeadlessShell {
        HeadlessShell::with_config(ShellConfig::new().with_banner(false).with_seed(1))
    }

    #[test]
    fn test_send_returns_only_new_lines() {
        let mut driver = quiet();
        let first = driver.send("whoami");
        assert_eq!(first.len(), 2); // echo + answer
        assert_eq!(first[1].content, "guest");

        let second = driver.send("pwd");
        assert_eq!(second.len(), 2);
        assert_eq!(second[1].content, "/home/guest");
    }

    #[test]
    fn test_banner_arrives_via_drain() {
        let mut driver = HeadlessShell::with_config(ShellConfig::new().with_seed(1));
        let banner = driver.drain_new();
        assert!(!banner.is_empty());
        // A second drain with nothing new is empty.
        assert!(driver.drain_new().is_empty());
    }

    #[test]
    fn test_hack_script_is_flattened() {
        let mut driver = quiet();
        let lines = driver.send("hack");
        let texts: Vec<&str> = lines.iter().map(|l| l.content.as_str()).collect();
        assert!(texts.iter().any(|t| t.contains("INITIATING")));
        assert!(texts.iter().any(|t| t.contains("JUST KIDDING")));
    }

    #[test]
    fn test_clear_resets_the_watermark() {
        let mut driver = quiet();
        driver.send("help");
        let after_clear = driver.send("clear");
        assert!(after_clear.is_empty());

        let next = driver.send("whoami");
        assert_eq!(next.len(), 2);
    }

    #[test]
    fn test_exit_flags_quit() {
        let mut driver = quiet();
        let lines = driver.send("exit");
        assert!(driver.quit_requested());
        assert!(lines.iter().any(|l| l.severity == Severity::Success));
    }
}
