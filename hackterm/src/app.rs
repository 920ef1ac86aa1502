//! Application state for the TUI: the shell plus everything the frontend
//! owns itself (input line, scroll, running visual effect, quit flag).

use hackterm_core::{Direction, Shell};

use crate::effects::EffectState;
use crate::events::KonamiTracker;

pub struct App {
    pub shell: Shell,
    /// The line being edited. Byte-indexed cursor, always on a char
    /// boundary.
    pub input_buffer: String,
    pub cursor_position: usize,
    /// Draft stashed away while the user walks through history.
    saved_input: Option<String>,
    /// Lines scrolled up from the bottom of the transcript.
    pub scroll_offset: u16,
    pub effect: Option<EffectState>,
    pub konami: KonamiTracker,
    should_quit: bool,
}

impl App {
    pub fn new(shell: Shell) -> Self {
        Self {
            shell,
            input_buffer: String::new(),
            cursor_position: 0,
            saved_input: None,
            scroll_offset: 0,
            effect: None,
            konami: KonamiTracker::default(),
            should_quit: false,
        }
    }

    // ==================== Input editing ====================

    pub fn insert_char(&mut self, c: char) {
        self.input_buffer.insert(self.cursor_position, c);
        self.cursor_position += c.len_utf8();
    }

    pub fn delete_char_backward(&mut self) {
        if self.cursor_position == 0 {
            return;
        }
        let prev = self.input_buffer[..self.cursor_position]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i);
        self.input_buffer.remove(prev);
        self.cursor_position = prev;
    }

    pub fn delete_char_forward(&mut self) {
        if self.cursor_position < self.input_buffer.len() {
            self.input_buffer.remove(self.cursor_position);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_position = self.input_buffer[..self.cursor_position]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i);
    }

    pub fn move_cursor_right(&mut self) {
        if let Some(c) = self.input_buffer[self.cursor_position..].chars().next() {
            self.cursor_position += c.len_utf8();
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_position = self.input_buffer.len();
    }

    fn set_input(&mut self, text: String) {
        self.cursor_position = text.len();
        self.input_buffer = text;
    }

    // ==================== History recall ====================

    pub fn history_up(&mut self) {
        if self.saved_input.is_none() {
            self.saved_input = Some(self.input_buffer.clone());
        }
        if let Some(entry) = self.shell.session_mut().history_prev() {
            self.set_input(entry);
        }
    }

    pub fn history_down(&mut self) {
        match self.shell.session_mut().history_next() {
            Some(entry) => self.set_input(entry),
            None => {
                if let Some(draft) = self.saved_input.take() {
                    self.set_input(draft);
                }
            }
        }
    }

    // ==================== Submission ====================

    pub fn submit_input(&mut self) {
        let line = std::mem::take(&mut self.input_buffer);
        self.cursor_position = 0;
        self.saved_input = None;
        self.scroll_offset = 0;

        self.shell.submit_line(&line);

        if let Some(request) = self.shell.session_mut().take_effect() {
            self.effect = Some(EffectState::begin(request));
        }
        if self.shell.session().quit_requested() {
            self.should_quit = true;
        }
    }

    // ==================== Snake ====================

    pub fn snake_running(&self) -> bool {
        self.shell.session().raw_input_captured()
    }

    pub fn steer_snake(&mut self, dir: Direction) {
        self.shell.session_mut().steer_snake(dir);
    }

    pub fn quit_snake(&mut self) {
        self.shell.session_mut().quit_snake();
    }

    pub fn on_snake_tick(&mut self) {
        self.shell.session_mut().snake_tick();
    }

    // ==================== Effects ====================

    pub fn has_effect(&self) -> bool {
        self.effect.is_some()
    }

    pub fn on_ui_tick(&mut self, width: u16, height: u16) {
        let done = match &mut self.effect {
            Some(effect) => {
                effect.advance(self.shell.session_mut(), width, height);
                effect.finished()
            }
            None => false,
        };
        if done {
            self.effect = None;
        }
    }

    pub fn dismiss_effect(&mut self) {
        self.effect = None;
    }

    // ==================== Scrolling ====================

    pub fn scroll_up(&mut self) {
        let total = self.shell.session().lines().len() as u16;
        self.scroll_offset = (self.scroll_offset + 5).min(total.saturating_sub(1));
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(5);
    }

    // ==================== Quit ====================

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
