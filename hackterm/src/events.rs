//! Translates terminal events into application actions.
//!
//! While a snake game holds the session, arrow keys and WASD steer it and
//! never reach the input line. Everything else is ordinary line editing.

use std::collections::VecDeque;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use hackterm_core::{Direction, Severity};

use crate::app::App;
use crate::effects::EffectState;

pub enum EventResult {
    Continue,
    Quit,
}

const KONAMI: [KeyCode; 10] = [
    KeyCode::Up,
    KeyCode::Up,
    KeyCode::Down,
    KeyCode::Down,
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::Char('b'),
    KeyCode::Char('a'),
];

/// Watches the raw key stream for the classic cheat code. Keys keep their
/// normal meaning while being counted.
#[derive(Default)]
pub struct KonamiTracker {
    recent: VecDeque<KeyCode>,
}

impl KonamiTracker {
    pub fn note(&mut self, code: KeyCode) -> bool {
        self.recent.push_back(code);
        if self.recent.len() > KONAMI.len() {
            self.recent.pop_front();
        }
        if self.recent.iter().eq(KONAMI.iter()) {
            self.recent.clear();
            return true;
        }
        false
    }
}

pub fn handle_event(app: &mut App, event: Event) -> EventResult {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        _ => EventResult::Continue,
    }
}

fn handle_key(app: &mut App, key: KeyEvent) -> EventResult {
    if app.konami.note(key.code) {
        tracing::debug!("konami code entered");
        app.shell.session_mut().append(
            Severity::Success,
            "KONAMI CODE ACCEPTED. +30 lives. Spend them wisely.",
        );
        app.effect = Some(EffectState::konami_flash());
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('d') => return EventResult::Quit,
            KeyCode::Char('l') => {
                app.shell.session_mut().clear_transcript();
                return EventResult::Continue;
            }
            _ => {}
        }
    }

    if app.snake_running() {
        match key.code {
            KeyCode::Up | KeyCode::Char('w') => {
                app.steer_snake(Direction::Up);
                return EventResult::Continue;
            }
            KeyCode::Down | KeyCode::Char('s') => {
                app.steer_snake(Direction::Down);
                return EventResult::Continue;
            }
            KeyCode::Left | KeyCode::Char('a') => {
                app.steer_snake(Direction::Left);
                return EventResult::Continue;
            }
            KeyCode::Right | KeyCode::Char('d') => {
                app.steer_snake(Direction::Right);
                return EventResult::Continue;
            }
            KeyCode::Esc => {
                app.quit_snake();
                return EventResult::Continue;
            }
            _ => {}
        }
    }

    match key.code {
        KeyCode::Enter => app.submit_input(),
        KeyCode::Up => app.history_up(),
        KeyCode::Down => app.history_down(),
        KeyCode::Left => app.move_cursor_left(),
        KeyCode::Right => app.move_cursor_right(),
        KeyCode::Home => app.move_cursor_home(),
        KeyCode::End => app.move_cursor_end(),
        KeyCode::Backspace => app.delete_char_backward(),
        KeyCode::Delete => app.delete_char_forward(),
        KeyCode::PageUp => app.scroll_up(),
        KeyCode::PageDown => app.scroll_down(),
        KeyCode::Esc => {
            if app.has_effect() {
                app.dismiss_effect();
            }
        }
        KeyCode::Char(c) => app.insert_char(c),
        _ => {}
    }
    EventResult::Continue
}
