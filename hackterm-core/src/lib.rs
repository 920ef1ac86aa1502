//! Engine for the hackterm terminal playground.
//!
//! Everything that makes the terminal tick lives here, free of any
//! rendering assumptions: the severity-tagged transcript, command history,
//! the verb registry, the three mini-games (snake, guess, typing) and the
//! combo tracker behind the hidden achievements. Frontends drive a
//! [`Shell`] (or a [`HeadlessShell`]) and decide how to draw what comes
//! back.
//!
//! A seeded shell is fully deterministic, which is how the tests pin down
//! secrets, phrases and food placement.

pub mod combos;
pub mod command;
pub mod flavor;
pub mod games;
pub mod headless;
pub mod history;
pub mod output;
pub mod session;
pub mod shell;

pub use combos::{Combo, SequenceTracker};
pub use command::{Command, CommandRegistry};
pub use games::guess::{GuessGame, GuessOutcome};
pub use games::snake::{Direction, Point, SnakeGame, StopCause, TickOutcome};
pub use games::typing::{TypingGame, TypingReport};
pub use games::{ActiveGame, GameError, GameKind};
pub use headless::HeadlessShell;
pub use history::CommandHistory;
pub use output::{OutputLine, Severity, Transcript};
pub use session::{EffectRequest, Session, ThemeName};
pub use shell::{Shell, ShellConfig};
