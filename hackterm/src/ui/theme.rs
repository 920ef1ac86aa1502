//! Color palettes for the terminal UI.
//!
//! One palette per session theme. The shell only knows theme *names*; the
//! mapping to actual colors happens here.

use hackterm_core::{Severity, ThemeName};
use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone)]
pub struct TermTheme {
    pub background: Color,
    pub border: Color,
    pub border_focused: Color,

    // Transcript severities
    pub plain: Color,
    pub echo: Color,
    pub info: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,

    // Input line
    pub prompt: Color,
    pub cursor: Color,

    // Snake board
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,

    // Matrix rain
    pub rain_head: Color,
    pub rain_body: Color,
    pub rain_tail: Color,
}

impl TermTheme {
    pub fn for_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Matrix => Self::matrix(),
            ThemeName::Hacker => Self::hacker(),
            ThemeName::Retro => Self::retro(),
        }
    }

    pub fn matrix() -> Self {
        Self {
            background: Color::Reset,
            border: Color::DarkGray,
            border_focused: Color::Green,

            plain: Color::Green,
            echo: Color::DarkGray,
            info: Color::Cyan,
            success: Color::LightGreen,
            warning: Color::Yellow,
            error: Color::LightRed,

            prompt: Color::LightGreen,
            cursor: Color::LightGreen,

            snake_head: Color::LightGreen,
            snake_body: Color::Green,
            food: Color::LightRed,

            rain_head: Color::White,
            rain_body: Color::LightGreen,
            rain_tail: Color::Green,
        }
    }

    pub fn hacker() -> Self {
        Self {
            background: Color::Reset,
            border: Color::DarkGray,
            border_focused: Color::Red,

            plain: Color::LightRed,
            echo: Color::DarkGray,
            info: Color::Magenta,
            success: Color::LightGreen,
            warning: Color::Yellow,
            error: Color::Red,

            prompt: Color::Red,
            cursor: Color::LightRed,

            snake_head: Color::LightRed,
            snake_body: Color::Red,
            food: Color::White,

            rain_head: Color::White,
            rain_body: Color::LightRed,
            rain_tail: Color::Red,
        }
    }

    pub fn retro() -> Self {
        Self {
            background: Color::Reset,
            border: Color::DarkGray,
            border_focused: Color::Yellow,

            plain: Color::Yellow,
            echo: Color::DarkGray,
            info: Color::LightYellow,
            success: Color::LightGreen,
            warning: Color::LightMagenta,
            error: Color::LightRed,

            prompt: Color::LightYellow,
            cursor: Color::LightYellow,

            snake_head: Color::LightYellow,
            snake_body: Color::Yellow,
            food: Color::LightRed,

            rain_head: Color::White,
            rain_body: Color::LightYellow,
            rain_tail: Color::Yellow,
        }
    }

    /// Style for one transcript line.
    pub fn severity_style(&self, severity: Severity) -> Style {
        match severity {
            Severity::Plain => Style::default().fg(self.plain),
            Severity::CommandEcho => Style::default().fg(self.echo).add_modifier(Modifier::DIM),
            Severity::Info => Style::default().fg(self.info),
            Severity::Success => Style::default()
                .fg(self.success)
                .add_modifier(Modifier::BOLD),
            Severity::Warning => Style::default().fg(self.warning),
            Severity::Error => Style::default().fg(self.error).add_modifier(Modifier::BOLD),
        }
    }

    pub fn prompt_style(&self) -> Style {
        Style::default().fg(self.prompt).add_modifier(Modifier::BOLD)
    }

    pub fn cursor_style(&self) -> Style {
        Style::default()
            .fg(self.cursor)
            .add_modifier(Modifier::UNDERLINED | Modifier::BOLD)
    }

    pub fn border_style(&self, focused: bool) -> Style {
        Style::default().fg(if focused {
            self.border_focused
        } else {
            self.border
        })
    }

    /// Rain glyph style by depth from the falling head: 0 is the head
    /// itself, deeper rows fade out.
    pub fn rain_style(&self, depth: u16, len: u16) -> Style {
        if depth == 0 {
            Style::default()
                .fg(self.rain_head)
                .add_modifier(Modifier::BOLD)
        } else if depth < len / 2 {
            Style::default().fg(self.rain_body)
        } else {
            Style::default().fg(self.rain_tail).add_modifier(Modifier::DIM)
        }
    }
}
