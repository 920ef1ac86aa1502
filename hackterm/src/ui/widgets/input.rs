//! Input line widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::ui::theme::TermTheme;

/// The editable command line, with a block cursor drawn as a styled cell.
pub struct InputWidget<'a> {
    content: &'a str,
    /// Byte offset into `content`, always on a char boundary.
    cursor_position: usize,
    prompt: &'a str,
    theme: &'a TermTheme,
    /// A running snake swallows the arrow keys, so say so in the title.
    game_hint: bool,
}

impl<'a> InputWidget<'a> {
    pub fn new(content: &'a str, prompt: &'a str, theme: &'a TermTheme) -> Self {
        Self {
            content,
            cursor_position: content.len(),
            prompt,
            theme,
            game_hint: false,
        }
    }

    pub fn cursor_position(mut self, pos: usize) -> Self {
        self.cursor_position = pos.min(self.content.len());
        self
    }

    pub fn game_hint(mut self, on: bool) -> Self {
        self.game_hint = on;
        self
    }
}

impl Widget for InputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = if self.game_hint {
            " arrows/wasd steer · ESC ends the game "
        } else {
            " type 'help' for commands "
        };

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(!self.game_hint));

        let inner = block.inner(area);
        block.render(area, buf);

        let before = &self.content[..self.cursor_position];
        let mut rest = self.content[self.cursor_position..].chars();
        let at = rest.next().map_or_else(|| " ".to_string(), String::from);
        let after: String = rest.collect();

        let line = Line::from(vec![
            Span::styled(self.prompt, self.theme.prompt_style()),
            Span::raw(" "),
            Span::raw(before),
            Span::styled(at, self.theme.cursor_style()),
            Span::raw(after),
        ]);

        Paragraph::new(line).render(inner, buf);
    }
}
