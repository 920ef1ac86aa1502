//! Frame composition: transcript over input, with the snake board and the
//! matrix rain layered on top when active.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
    Frame,
};

use crate::app::App;
use crate::effects::EffectState;
use crate::ui::theme::TermTheme;
use crate::ui::widgets::{BoardWidget, InputWidget, TranscriptWidget};

pub fn draw(frame: &mut Frame, app: &App) {
    let theme = TermTheme::for_name(app.shell.session().theme());
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(3)])
        .split(area);

    let transcript = TranscriptWidget::new(app.shell.session().lines(), &theme)
        .scroll(app.scroll_offset);
    frame.render_widget(transcript, chunks[0]);

    let input = InputWidget::new(&app.input_buffer, app.shell.prompt(), &theme)
        .cursor_position(app.cursor_position)
        .game_hint(app.snake_running());
    frame.render_widget(input, chunks[1]);

    if let Some(game) = app.shell.session().snake() {
        let (width, height) = BoardWidget::desired_size();
        let overlay = centered_rect(width, height, chunks[0]);
        frame.render_widget(Clear, overlay);
        frame.render_widget(BoardWidget::new(game, &theme), overlay);
    }

    match &app.effect {
        Some(EffectState::MatrixRain { columns, .. }) => {
            frame.render_widget(Clear, area);
            render_rain(frame, area, columns, &theme);
        }
        Some(EffectState::KonamiFlash { ticks_left }) => {
            render_flash(frame, area, *ticks_left, &theme);
        }
        _ => {}
    }
}

fn render_rain(
    frame: &mut Frame,
    area: Rect,
    columns: &[crate::effects::RainColumn],
    theme: &TermTheme,
) {
    let buf = frame.buffer_mut();
    for column in columns {
        if column.x >= area.width {
            continue;
        }
        for depth in 0..column.len {
            let y = column.head - i32::from(depth);
            if y < 0 || y >= i32::from(area.height) {
                continue;
            }
            let glyph = column.glyphs[usize::from(depth)];
            let cell = &mut buf[(area.x + column.x, area.y + y as u16)];
            cell.set_char(glyph)
                .set_style(theme.rain_style(depth, column.len));
        }
    }

    let hint = Line::from(Span::styled(
        " ESC to wake up ",
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM),
    ));
    let hint_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };
    Paragraph::new(hint)
        .right_aligned()
        .render(hint_area, frame.buffer_mut());
}

fn render_flash(frame: &mut Frame, area: Rect, ticks_left: u16, theme: &TermTheme) {
    let style = if ticks_left % 2 == 0 {
        Style::default()
            .fg(Color::Black)
            .bg(theme.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(theme.border_focused)
            .add_modifier(Modifier::BOLD)
    };
    let banner = Line::from(Span::styled("*** KONAMI CODE ***", style));
    let banner_area = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: 1,
    };
    Paragraph::new(banner)
        .centered()
        .render(banner_area, frame.buffer_mut());
}

/// Center a fixed-size rectangle inside `area`, shrinking it if the
/// terminal is too small.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fits_inside_the_parent() {
        let parent = Rect::new(2, 3, 40, 20);
        let rect = centered_rect(10, 6, parent);
        assert_eq!(rect, Rect::new(17, 10, 10, 6));
    }

    #[test]
    fn test_centered_rect_clamps_to_small_terminals() {
        let parent = Rect::new(0, 0, 20, 10);
        let rect = centered_rect(40, 23, parent);
        assert_eq!(rect.width, 20);
        assert_eq!(rect.height, 10);
    }
}
