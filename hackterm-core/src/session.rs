//! Session state: the single owner of everything one terminal shows and
//! runs. All mutation funnels through `&mut Session`, so two sessions can
//! never share or leak state into each other.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::combos::{Combo, SequenceTracker};
use crate::flavor;
use crate::games::guess::{GuessGame, GuessOutcome, MAX_ATTEMPTS};
use crate::games::snake::{Direction, SnakeGame, StopCause, TickOutcome};
use crate::games::typing::TypingGame;
use crate::games::{ActiveGame, GameError, GameKind};
use crate::history::CommandHistory;
use crate::output::{OutputLine, Severity, Transcript};

/// Color scheme name. The core only stores the selection; mapping it to
/// actual colors is the renderer's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeName {
    #[default]
    Matrix,
    Hacker,
    Retro,
}

impl ThemeName {
    pub const ALL: [ThemeName; 3] = [ThemeName::Matrix, ThemeName::Hacker, ThemeName::Retro];

    pub fn parse(token: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| token.eq_ignore_ascii_case(t.label()))
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemeName::Matrix => "matrix",
            ThemeName::Hacker => "hacker",
            ThemeName::Retro => "retro",
        }
    }
}

/// A visual the core wants the frontend to play. Purely cosmetic; the
/// headless driver is free to ignore or flatten these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectRequest {
    MatrixRain,
    HackSequence,
}

/// Per-terminal state. Owns the transcript, history, recent-verb window,
/// the one active game slot, the theme and the RNG.
#[derive(Debug)]
pub struct Session {
    transcript: Transcript,
    history: CommandHistory,
    recent_verbs: SequenceTracker,
    active_game: Option<ActiveGame>,
    theme: ThemeName,
    rng: StdRng,
    quit_requested: bool,
    pending_effect: Option<EffectRequest>,
}

impl Session {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Seeded construction: every random draw (guess secret, typing phrase,
    /// food placement, flavor picks) becomes reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            transcript: Transcript::new(),
            history: CommandHistory::new(),
            recent_verbs: SequenceTracker::new(),
            active_game: None,
            theme: ThemeName::default(),
            rng,
            quit_requested: false,
            pending_effect: None,
        }
    }

    // ==================== Output ====================

    pub fn append(&mut self, severity: Severity, content: impl Into<String>) {
        self.transcript.push(severity, content);
    }

    pub fn append_block(&mut self, severity: Severity, block: &str) {
        self.transcript.push_block(severity, block);
    }

    pub fn append_lines(&mut self, lines: &[(Severity, &str)]) {
        for (severity, content) in lines {
            self.transcript.push(*severity, *content);
        }
    }

    pub fn lines(&self) -> &[OutputLine] {
        self.transcript.lines()
    }

    pub fn clear_transcript(&mut self) {
        self.transcript.clear();
    }

    /// Renders a game error as the one visible line it is supposed to be.
    pub fn report(&mut self, err: GameError) {
        let severity = match err {
            GameError::AlreadyActive(_) => Severity::Warning,
            GameError::NotActive(_) | GameError::InvalidInput(_) => Severity::Error,
        };
        self.append(severity, err.to_string());
    }

    /// Random pick out of a fixed flavor table.
    pub fn pick(&mut self, table: &[&'static str]) -> &'static str {
        flavor::pick(&mut self.rng, table)
    }

    // ==================== History ====================

    pub fn record_history(&mut self, line: &str) {
        self.history.record(line);
    }

    pub fn history_prev(&mut self) -> Option<String> {
        self.history.prev().map(str::to_string)
    }

    pub fn history_next(&mut self) -> Option<String> {
        self.history.next().map(str::to_string)
    }

    pub fn history_entries(&self) -> &[String] {
        self.history.entries()
    }

    // ==================== Recent verbs / combos ====================

    /// Records a successfully dispatched verb and fires any combo it
    /// completes. Unknown verbs must not be passed in.
    pub fn note_verb(&mut self, verb: &str) {
        self.recent_verbs.note(verb);
        if let Some(combo) = self.recent_verbs.take_match() {
            debug!(?combo, "combo unlocked");
            let lines = match combo {
                Combo::TrueDeveloper => flavor::COMBO_TRUE_DEVELOPER,
                Combo::NightOwl => flavor::COMBO_NIGHT_OWL,
                Combo::CosmicHacker => flavor::COMBO_COSMIC_HACKER,
                Combo::Tori => flavor::TORI_POEM,
            };
            self.append_lines(lines);
        }
    }

    pub fn recent_verbs(&self) -> impl Iterator<Item = &str> {
        self.recent_verbs.verbs()
    }

    // ==================== Theme / quit / effects ====================

    pub fn theme(&self) -> ThemeName {
        self.theme
    }

    pub fn set_theme(&mut self, theme: ThemeName) {
        self.theme = theme;
    }

    pub fn request_quit(&mut self) {
        self.quit_requested = true;
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn request_effect(&mut self, effect: EffectRequest) {
        self.pending_effect = Some(effect);
    }

    /// Hands the pending visual to the frontend, clearing it.
    pub fn take_effect(&mut self) -> Option<EffectRequest> {
        self.pending_effect.take()
    }

    // ==================== Game lifecycle ====================

    pub fn active_game_kind(&self) -> Option<GameKind> {
        self.active_game.as_ref().map(ActiveGame::kind)
    }

    /// True while Snake holds the input gate: the frontend must forward
    /// directional keys and Escape instead of editing or history.
    pub fn raw_input_captured(&self) -> bool {
        matches!(self.active_game, Some(ActiveGame::Snake(_)))
    }

    pub fn snake(&self) -> Option<&SnakeGame> {
        match &self.active_game {
            Some(ActiveGame::Snake(game)) => Some(game),
            _ => None,
        }
    }

    fn ensure_idle(&mut self) -> bool {
        if let Some(game) = &self.active_game {
            let kind = game.kind();
            self.report(GameError::AlreadyActive(kind));
            return false;
        }
        true
    }

    pub fn start_snake(&mut self) {
        if !self.ensure_idle() {
            return;
        }
        debug!("snake started");
        self.append_lines(flavor::SNAKE_INTRO);
        self.active_game = Some(ActiveGame::Snake(SnakeGame::new()));
    }

    pub fn start_guess(&mut self) {
        if !self.ensure_idle() {
            return;
        }
        let game = GuessGame::new(&mut self.rng);
        debug!("guess started");
        self.append_lines(flavor::GUESS_INTRO);
        self.active_game = Some(ActiveGame::Guess(game));
    }

    pub fn start_typing(&mut self) {
        if !self.ensure_idle() {
            return;
        }
        let game = TypingGame::new(&mut self.rng);
        debug!("typing test started");
        self.append(Severity::Success, "Typing test! Your phrase:");
        self.append(Severity::Plain, format!("  \"{}\"", game.phrase()));
        self.append(
            Severity::Info,
            "Submit it with: type <the phrase, exactly as shown>",
        );
        self.active_game = Some(ActiveGame::Typing(game));
    }

    // ==================== Guess ====================

    pub fn submit_guess(&mut self, token: &str) {
        let evaluated = match &mut self.active_game {
            Some(ActiveGame::Guess(game)) => Some((game.evaluate(token), game.secret())),
            _ => None,
        };
        let Some((outcome, secret)) = evaluated else {
            self.report(GameError::NotActive(GameKind::Guess));
            return;
        };

        match outcome {
            GuessOutcome::Invalid => {
                self.report(GameError::InvalidInput(
                    "Enter a whole number between 1 and 100.".into(),
                ));
            }
            GuessOutcome::Correct { attempts } => {
                self.active_game = None;
                self.append(
                    Severity::Success,
                    format!("Correct! The number was {secret}."),
                );
                let tries = if attempts == 1 { "attempt" } else { "attempts" };
                self.append(Severity::Info, format!("You got it in {attempts} {tries}."));
            }
            GuessOutcome::TooLow { attempts, exhausted } => {
                self.append(
                    Severity::Warning,
                    format!("Too low! Try higher. (attempt {attempts}/{MAX_ATTEMPTS})"),
                );
                if exhausted {
                    self.end_guess_exhausted(secret);
                }
            }
            GuessOutcome::TooHigh { attempts, exhausted } => {
                self.append(
                    Severity::Warning,
                    format!("Too high! Try lower. (attempt {attempts}/{MAX_ATTEMPTS})"),
                );
                if exhausted {
                    self.end_guess_exhausted(secret);
                }
            }
        }
    }

    fn end_guess_exhausted(&mut self, secret: u32) {
        self.active_game = None;
        self.append(
            Severity::Error,
            format!("Out of attempts! The number was {secret}."),
        );
        self.append(Severity::Info, "Type 'guess' for a rematch.");
    }

    // ==================== Typing ====================

    pub fn submit_typing(&mut self, text: &str) {
        let graded = match &self.active_game {
            Some(ActiveGame::Typing(game)) => Some((game.grade(text), game.phrase())),
            _ => None,
        };
        let Some((report, phrase)) = graded else {
            self.report(GameError::NotActive(GameKind::Typing));
            return;
        };
        // Single-shot: one submission ends the test no matter the score.
        self.active_game = None;

        self.append(Severity::Info, format!("Expected:  \"{phrase}\""));
        self.append(Severity::Plain, format!("You typed: \"{text}\""));
        self.append(
            Severity::Info,
            format!("Time: {:.2}s  |  Speed: {} WPM", report.seconds, report.wpm),
        );
        self.append(
            Severity::Info,
            format!(
                "Accuracy: {}% ({}/{} characters)",
                report.accuracy, report.correct, report.reference_len
            ),
        );

        let verdict = match report.accuracy {
            100 => (Severity::Success, "PERFECT! Absolutely flawless."),
            91..=99 => (Severity::Success, "Excellent! Your fingers know the way."),
            71..=90 => (Severity::Info, "Good job. A little more coffee and you're there."),
            _ => (Severity::Warning, "Keep practicing. The keyboard forgives."),
        };
        self.append(verdict.0, verdict.1);
    }

    // ==================== Snake ====================

    pub fn steer_snake(&mut self, dir: Direction) {
        if let Some(ActiveGame::Snake(game)) = &mut self.active_game {
            game.steer(dir);
        }
    }

    /// Advances Snake one step if it is running. A tick that fires after
    /// teardown lands in the `_` arm and does nothing, which is what makes
    /// quit-before-next-tick safe.
    pub fn snake_tick(&mut self) -> TickOutcome {
        let outcome = match &mut self.active_game {
            Some(ActiveGame::Snake(game)) => game.tick(&mut self.rng),
            _ => return TickOutcome::Idle,
        };
        if let TickOutcome::Stopped(cause) = outcome {
            self.finish_snake(cause);
        }
        outcome
    }

    /// Escape pressed: end the run immediately. The gate is released before
    /// any queued tick gets a chance to run.
    pub fn quit_snake(&mut self) {
        if self.raw_input_captured() {
            self.finish_snake(StopCause::UserQuit);
        }
    }

    fn finish_snake(&mut self, cause: StopCause) {
        let score = match &self.active_game {
            Some(ActiveGame::Snake(game)) => game.score(),
            _ => 0,
        };
        self.active_game = None;
        debug!(?cause, score, "snake finished");

        let severity = match cause {
            StopCause::UserQuit => Severity::Info,
            _ => Severity::Error,
        };
        self.append(severity, cause.message());
        self.append(Severity::Success, format!("Final score: {score}"));
        self.append(Severity::Info, "Type 'snake' to play again.");
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn last_line(session: &Session) -> &OutputLine {
        session.lines().last().expect("transcript has lines")
    }

    #[test]
    fn test_second_game_is_refused() {
        let mut session = Session::with_seed(1);
        session.start_guess();
        session.start_snake();

        assert_eq!(session.active_game_kind(), Some(GameKind::Guess));
        let line = last_line(&session);
        assert_eq!(line.severity, Severity::Warning);
        assert!(line.content.contains("already running"));
    }

    #[test]
    fn test_guess_without_game_is_an_error() {
        let mut session = Session::with_seed(1);
        session.submit_guess("50");
        let line = last_line(&session);
        assert_eq!(line.severity, Severity::Error);
        assert!(line.content.contains("No active 'guess' game"));
    }

    #[test]
    fn test_guess_win_destroys_the_game() {
        let mut session = Session::with_seed(1);
        session.active_game = Some(ActiveGame::Guess(GuessGame::with_secret(42)));

        session.submit_guess("42");
        assert_eq!(session.active_game_kind(), None);
        assert!(session
            .lines()
            .iter()
            .any(|l| l.content.contains("Correct! The number was 42")));
    }

    #[test]
    fn test_guess_exhaustion_reveals_secret() {
        let mut session = Session::with_seed(1);
        session.active_game = Some(ActiveGame::Guess(GuessGame::with_secret(100)));

        for _ in 0..10 {
            session.submit_guess("1");
        }
        assert_eq!(session.active_game_kind(), None);
        assert!(session
            .lines()
            .iter()
            .any(|l| l.content.contains("The number was 100")));
    }

    #[test]
    fn test_invalid_guess_keeps_game_alive() {
        let mut session = Session::with_seed(1);
        session.active_game = Some(ActiveGame::Guess(GuessGame::with_secret(42)));

        session.submit_guess("abc");
        session.submit_guess("150");
        assert_eq!(session.active_game_kind(), Some(GameKind::Guess));
    }

    #[test]
    fn test_snake_gate_and_quit() {
        let mut session = Session::with_seed(1);
        session.start_snake();
        assert!(session.raw_input_captured());

        session.steer_snake(Direction::Up);
        session.quit_snake();
        assert!(!session.raw_input_captured());
        assert!(session
            .lines()
            .iter()
            .any(|l| l.content.contains("Final score: 0")));
    }

    #[test]
    fn test_tick_after_quit_is_a_noop() {
        let mut session = Session::with_seed(1);
        session.start_snake();
        session.steer_snake(Direction::Up);
        session.quit_snake();

        let before = session.lines().len();
        assert_eq!(session.snake_tick(), TickOutcome::Idle);
        assert_eq!(session.lines().len(), before);
    }

    #[test]
    fn test_typing_is_single_shot() {
        let mut session = Session::with_seed(1);
        session.active_game = Some(ActiveGame::Typing(TypingGame::with_phrase("abc")));

        session.submit_typing("abc");
        assert_eq!(session.active_game_kind(), None);
        assert!(session
            .lines()
            .iter()
            .any(|l| l.content.contains("Accuracy: 100%")));

        session.submit_typing("abc");
        assert!(last_line(&session).content.contains("No active 'type' game"));
    }

    #[test]
    fn test_combo_fires_once_and_resets() {
        let mut session = Session::with_seed(1);
        session.note_verb("code");
        session.note_verb("love");
        session.note_verb("coffee");

        let unlocked = session
            .lines()
            .iter()
            .filter(|l| l.content.contains("True Developer"))
            .count();
        assert_eq!(unlocked, 1);
        assert_eq!(session.recent_verbs().count(), 0);
    }

    #[test]
    fn test_sessions_do_not_share_state() {
        let mut a = Session::with_seed(1);
        let b = Session::with_seed(1);

        a.append(Severity::Info, "only in a");
        a.start_snake();
        assert!(b.lines().is_empty());
        assert!(!b.raw_input_captured());
    }

    #[test]
    fn test_theme_parse() {
        assert_eq!(ThemeName::parse("matrix"), Some(ThemeName::Matrix));
        assert_eq!(ThemeName::parse("HACKER"), Some(ThemeName::Hacker));
        assert_eq!(ThemeName::parse("neon"), None);
    }
}
