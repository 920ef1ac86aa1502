//! Transcript display widget

use hackterm_core::OutputLine;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::scrollbar,
    text::{Line, Span},
    widgets::{
        Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
        StatefulWidget, Widget,
    },
};

use crate::ui::theme::TermTheme;

/// Scrollable view over the session transcript. Sticks to the bottom
/// unless the user has scrolled up.
pub struct TranscriptWidget<'a> {
    lines: &'a [OutputLine],
    theme: &'a TermTheme,
    /// Lines scrolled up from the newest output.
    offset_from_bottom: u16,
}

impl<'a> TranscriptWidget<'a> {
    pub fn new(lines: &'a [OutputLine], theme: &'a TermTheme) -> Self {
        Self {
            lines,
            theme,
            offset_from_bottom: 0,
        }
    }

    pub fn scroll(mut self, offset_from_bottom: u16) -> Self {
        self.offset_from_bottom = offset_from_bottom;
        self
    }
}

impl Widget for TranscriptWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = if self.offset_from_bottom > 0 {
            " hackterm [PgDn to follow] "
        } else {
            " hackterm "
        };

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(false));

        let inner = block.inner(area);
        block.render(area, buf);

        let visible_height = usize::from(inner.height);
        let total = self.lines.len();
        let max_scroll = total.saturating_sub(visible_height);
        // Offset is kept relative to the bottom so new lines do not move
        // the view while the user reads old ones.
        let scroll = max_scroll.saturating_sub(usize::from(self.offset_from_bottom));

        let rendered: Vec<Line> = self
            .lines
            .iter()
            .skip(scroll)
            .take(visible_height)
            .map(|line| {
                Line::from(Span::styled(
                    line.content.clone(),
                    self.theme.severity_style(line.severity),
                ))
            })
            .collect();

        Paragraph::new(rendered).render(inner, buf);

        if total > visible_height {
            let scrollbar_area = Rect {
                x: inner.x + inner.width.saturating_sub(1),
                y: inner.y,
                width: 1,
                height: inner.height,
            };

            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .symbols(scrollbar::VERTICAL)
                .thumb_style(Style::default().fg(Color::DarkGray))
                .track_style(Style::default().fg(Color::Black))
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"));

            let mut scrollbar_state = ScrollbarState::new(max_scroll).position(scroll);
            scrollbar.render(scrollbar_area, buf, &mut scrollbar_state);

            if scroll < max_scroll {
                let below = max_scroll - scroll;
                let hint = format!(" ↓{below} more ");
                let hint_y = inner.y + inner.height.saturating_sub(1);
                let hint_style = Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::DIM);
                for (i, ch) in hint.chars().enumerate() {
                    let x = inner.x + (i as u16);
                    if x < inner.x + inner.width.saturating_sub(2) {
                        buf[(x, hint_y)].set_char(ch).set_style(hint_style);
                    }
                }
            }
        }
    }
}
