//! The shell ties capture, routing and session state together: echo the
//! prompt line, record history, normalize the verb, dispatch, then let the
//! combo tracker have a look.

use tracing::debug;

use crate::command::CommandRegistry;
use crate::flavor;
use crate::output::Severity;
use crate::session::{Session, ThemeName};

/// Construction knobs for a [`Shell`].
#[derive(Debug, Clone)]
pub struct ShellConfig {
    prompt: String,
    banner: bool,
    theme: ThemeName,
    seed: Option<u64>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: flavor::PROMPT.to_string(),
            banner: true,
            theme: ThemeName::default(),
            seed: None,
        }
    }
}

impl ShellConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Suppress or keep the startup banner block.
    pub fn with_banner(mut self, banner: bool) -> Self {
        self.banner = banner;
        self
    }

    pub fn with_theme(mut self, theme: ThemeName) -> Self {
        self.theme = theme;
        self
    }

    /// Seeds the session RNG for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// One interactive terminal: a command registry plus the session it drives.
pub struct Shell {
    registry: CommandRegistry,
    session: Session,
    prompt: String,
}

impl Shell {
    pub fn new() -> Self {
        Self::with_config(ShellConfig::default())
    }

    pub fn with_config(config: ShellConfig) -> Self {
        let mut session = match config.seed {
            Some(seed) => Session::with_seed(seed),
            None => Session::new(),
        };
        session.set_theme(config.theme);
        if config.banner {
            session.append_block(Severity::Success, flavor::BANNER);
            session.append_lines(flavor::WELCOME);
        }
        Self {
            registry: CommandRegistry::builtin(),
            session,
            prompt: config.prompt,
        }
    }

    /// Handles one submitted line end to end. Empty and whitespace-only
    /// input vanishes without a trace: no echo, no history, no window entry.
    pub fn submit_line(&mut self, raw: &str) {
        let line = raw.trim();
        if line.is_empty() {
            return;
        }
        self.session
            .append(Severity::CommandEcho, format!("{} {line}", self.prompt));
        self.session.record_history(line);
        self.dispatch(line);
    }

    fn dispatch(&mut self, line: &str) {
        let mut tokens = line.split_whitespace();
        let Some(first) = tokens.next() else {
            return;
        };
        // Verb matching is case-insensitive; argument tokens keep their
        // case because game input flows through them.
        let verb = first.to_lowercase();
        let args: Vec<&str> = tokens.collect();

        debug!(%verb, argc = args.len(), "dispatch");
        match self.registry.lookup(&verb) {
            Some(command) => {
                command.execute(&mut self.session, &args);
                self.session.note_verb(&verb);
            }
            None => {
                self.session.append(
                    Severity::Error,
                    format!("Command not found: {verb}. Type 'help' for available commands."),
                );
            }
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}
