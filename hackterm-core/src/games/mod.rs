//! Mini-game engines and the error taxonomy shared by all of them.
//!
//! One modal game at a time: the session holds an [`ActiveGame`] slot and
//! refuses to start a second game while it is occupied. Collisions and
//! game-overs are normal state transitions, not errors; everything in
//! [`GameError`] ends up as a visible transcript line, never a panic.

pub mod guess;
pub mod snake;
pub mod typing;

use std::fmt;

use thiserror::Error;

/// Which mini-game. Display form doubles as the start verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKind {
    Snake,
    Guess,
    Typing,
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameKind::Snake => "snake",
            GameKind::Guess => "guess",
            GameKind::Typing => "type",
        };
        write!(f, "{name}")
    }
}

/// Everything that can go wrong with game input. All recoverable; the
/// session renders each as one line and moves on.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A second modal game was requested while one is running. The running
    /// game is left untouched.
    #[error("A '{0}' game is already running. Finish it first!")]
    AlreadyActive(GameKind),

    /// Game input arrived with no matching game active.
    #[error("No active '{0}' game! Type '{0}' to start one.")]
    NotActive(GameKind),

    /// Malformed game input; the message tells the user what would work.
    /// Never consumes an attempt.
    #[error("{0}")]
    InvalidInput(String),
}

/// The one modal game a session may be running.
#[derive(Debug)]
pub enum ActiveGame {
    Snake(snake::SnakeGame),
    Guess(guess::GuessGame),
    Typing(typing::TypingGame),
}

impl ActiveGame {
    pub fn kind(&self) -> GameKind {
        match self {
            ActiveGame::Snake(_) => GameKind::Snake,
            ActiveGame::Guess(_) => GameKind::Guess,
            ActiveGame::Typing(_) => GameKind::Typing,
        }
    }
}
