//! Snake board widget

use hackterm_core::games::snake::{GRID_HEIGHT, GRID_WIDTH};
use hackterm_core::{Point, SnakeGame};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Widget},
};

use crate::ui::theme::TermTheme;

/// Renders the 19x19 snake grid. Each cell is two terminal columns wide
/// so the board comes out roughly square.
pub struct BoardWidget<'a> {
    game: &'a SnakeGame,
    theme: &'a TermTheme,
}

impl<'a> BoardWidget<'a> {
    pub fn new(game: &'a SnakeGame, theme: &'a TermTheme) -> Self {
        Self { game, theme }
    }

    /// Outer size the widget wants, borders included.
    pub fn desired_size() -> (u16, u16) {
        (GRID_WIDTH as u16 * 2 + 2, GRID_HEIGHT as u16 + 2)
    }
}

impl Widget for BoardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" snake · score {} ", self.game.score());
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(true));

        let inner = block.inner(area);
        block.render(area, buf);

        let mut draw = |point: Point, glyph: char, style: Style| {
            if point.x < 0 || point.y < 0 {
                return;
            }
            let x = inner.x + (point.x as u16) * 2;
            let y = inner.y + point.y as u16;
            if y >= inner.y + inner.height || x + 1 >= inner.x + inner.width {
                return;
            }
            buf[(x, y)].set_char(glyph).set_style(style);
            buf[(x + 1, y)].set_char(glyph).set_style(style);
        };

        let head = self.game.head();
        for segment in self.game.body() {
            let (glyph, style) = if segment == head {
                (
                    '█',
                    Style::default()
                        .fg(self.theme.snake_head)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ('█', Style::default().fg(self.theme.snake_body))
            };
            draw(segment, glyph, style);
        }

        draw(
            self.game.food(),
            '▒',
            Style::default()
                .fg(self.theme.food)
                .add_modifier(Modifier::BOLD),
        );

        if !self.game.started() {
            let hint = " press an arrow key to move ";
            let hint_y = inner.y + inner.height.saturating_sub(1);
            let start_x = inner.x + (inner.width.saturating_sub(hint.len() as u16)) / 2;
            let hint_style = Style::default()
                .fg(self.theme.border_focused)
                .add_modifier(Modifier::DIM);
            for (i, ch) in hint.chars().enumerate() {
                let x = start_x + i as u16;
                if x < inner.x + inner.width {
                    buf[(x, hint_y)].set_char(ch).set_style(hint_style);
                }
            }
        }
    }
}
