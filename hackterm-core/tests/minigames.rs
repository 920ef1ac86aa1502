//! The three mini-games driven through the public `Shell` API, the way a
//! frontend would: command lines in, transcript lines and session handles
//! out.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use hackterm_core::{Direction, GameKind, Severity, Shell, ShellConfig, TickOutcome};

const SEED: u64 = 11;

fn shell() -> Shell {
    Shell::with_config(ShellConfig::new().with_banner(false).with_seed(SEED))
}

fn contents(shell: &Shell) -> Vec<String> {
    shell
        .session()
        .lines()
        .iter()
        .map(|l| l.content.clone())
        .collect()
}

/// The guess secret is the session's first random draw, so a twin RNG
/// seeded the same way lands on the same number.
fn derived_secret() -> u32 {
    StdRng::seed_from_u64(SEED).gen_range(1..=100)
}

// ==================== Guess ====================

#[test]
fn test_guess_full_round_with_hints() {
    let mut term = shell();
    term.submit_line("guess");
    assert_eq!(term.session().active_game_kind(), Some(GameKind::Guess));

    let secret = derived_secret();
    if secret > 1 {
        term.submit_line(&format!("guess {}", secret - 1));
        assert!(contents(&term).iter().any(|l| l.contains("Too low")));
    }
    if secret < 100 {
        term.submit_line(&format!("guess {}", secret + 1));
        assert!(contents(&term).iter().any(|l| l.contains("Too high")));
    }

    term.submit_line(&format!("guess {secret}"));
    assert_eq!(term.session().active_game_kind(), None);
    assert!(contents(&term)
        .iter()
        .any(|l| l.contains(&format!("The number was {secret}"))));
}

#[test]
fn test_guess_invalid_tokens_cost_nothing() {
    let mut term = shell();
    term.submit_line("guess");

    term.submit_line("guess abc");
    term.submit_line("guess 150");
    term.submit_line("guess 0");

    // Still active, and ten real attempts remain.
    assert_eq!(term.session().active_game_kind(), Some(GameKind::Guess));
    let wrong = if derived_secret() == 1 { 2 } else { 1 };
    for _ in 0..9 {
        term.submit_line(&format!("guess {wrong}"));
        assert_eq!(term.session().active_game_kind(), Some(GameKind::Guess));
    }
    term.submit_line(&format!("guess {wrong}"));
    assert_eq!(term.session().active_game_kind(), None);
}

#[test]
fn test_guess_exhaustion_reveals_the_secret() {
    let mut term = shell();
    term.submit_line("guess");

    let secret = derived_secret();
    let wrong = if secret == 1 { 2 } else { 1 };
    for _ in 0..10 {
        term.submit_line(&format!("guess {wrong}"));
    }
    assert_eq!(term.session().active_game_kind(), None);
    assert!(contents(&term)
        .iter()
        .any(|l| l.contains(&format!("Out of attempts! The number was {secret}"))));
}

#[test]
fn test_guess_without_active_game() {
    let mut term = shell();
    term.submit_line("guess 50");
    let last = term.session().lines().last().cloned().expect("line");
    assert_eq!(last.severity, Severity::Error);
    assert!(last.content.contains("No active 'guess' game"));
}

// ==================== Snake ====================

#[test]
fn test_snake_eats_the_first_food() {
    let mut term = shell();
    term.submit_line("snake");
    assert!(term.session().raw_input_captured());

    let session = term.session_mut();
    session.steer_snake(Direction::Right);
    for _ in 0..4 {
        assert_eq!(session.snake_tick(), TickOutcome::Moved);
    }
    assert_eq!(session.snake_tick(), TickOutcome::Ate);

    let snake = session.snake().expect("snake is running");
    assert_eq!(snake.score(), 10);
    assert_eq!(snake.len(), 2);
    let body: Vec<_> = snake.body().collect();
    assert!(!body.contains(&snake.food()));
}

#[test]
fn test_snake_wall_crash_releases_the_gate() {
    let mut term = shell();
    term.submit_line("snake");

    let session = term.session_mut();
    session.steer_snake(Direction::Up);
    loop {
        match session.snake_tick() {
            TickOutcome::Moved => continue,
            TickOutcome::Stopped(_) => break,
            other => panic!("unexpected outcome {other:?}"),
        }
    }
    assert!(!term.session().raw_input_captured());

    let lines = contents(&term);
    assert!(lines.iter().any(|l| l.contains("hit the wall")));
    assert!(lines.iter().any(|l| l.contains("Final score: 0")));
    assert!(lines.iter().any(|l| l.contains("play again")));
}

#[test]
fn test_starting_a_game_while_snake_runs_is_refused() {
    let mut term = shell();
    term.submit_line("snake");
    term.submit_line("guess");

    let warning = term
        .session()
        .lines()
        .iter()
        .find(|l| l.severity == Severity::Warning)
        .expect("a warning line");
    assert!(warning.content.contains("'snake' game is already running"));
    assert_eq!(term.session().active_game_kind(), Some(GameKind::Snake));
}

#[test]
fn test_escape_quits_before_the_next_tick() {
    let mut term = shell();
    term.submit_line("snake");

    let session = term.session_mut();
    session.steer_snake(Direction::Left);
    session.snake_tick();
    session.quit_snake();

    // A tick already queued behind the quit must do nothing.
    assert_eq!(session.snake_tick(), TickOutcome::Idle);
    assert!(!session.raw_input_captured());
    assert!(contents(&term).iter().any(|l| l.contains("Game ended.")));
}

// ==================== Typing ====================

/// Pulls the quoted phrase out of the start text so the test does not
/// depend on which phrase the RNG picked.
fn shown_phrase(term: &Shell) -> String {
    let line = term
        .session()
        .lines()
        .iter()
        .find(|l| l.content.trim_start().starts_with('"'))
        .expect("phrase line");
    line.content.trim().trim_matches('"').to_string()
}

#[test]
fn test_typing_perfect_round() {
    let mut term = shell();
    term.submit_line("type");
    assert_eq!(term.session().active_game_kind(), Some(GameKind::Typing));

    let phrase = shown_phrase(&term);
    term.submit_line(&format!("type {phrase}"));

    assert_eq!(term.session().active_game_kind(), None);
    let lines = contents(&term);
    assert!(lines.iter().any(|l| l.contains("Accuracy: 100%")));
    assert!(lines.iter().any(|l| l.contains("PERFECT")));
}

#[test]
fn test_typing_is_single_shot_even_on_a_miss() {
    let mut term = shell();
    term.submit_line("type");
    term.submit_line("type not even close");

    assert_eq!(term.session().active_game_kind(), None);
    term.submit_line("type again");
    assert!(contents(&term)
        .iter()
        .any(|l| l.contains("No active 'type' game")));
}

#[test]
fn test_typing_without_active_game() {
    let mut term = shell();
    term.submit_line("type whatever");
    let last = term.session().lines().last().cloned().expect("line");
    assert_eq!(last.severity, Severity::Error);
    assert!(last.content.contains("No active 'type' game"));
}
