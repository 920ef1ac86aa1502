//! Widgets for the terminal frontend

pub mod board;
pub mod input;
pub mod transcript;

pub use board::BoardWidget;
pub use input::InputWidget;
pub use transcript::TranscriptWidget;
