//! End-to-end command flows through the public `Shell` API: routing,
//! normalization, history, combos, housekeeping.

use hackterm_core::{Severity, Shell, ShellConfig};

fn shell() -> Shell {
    Shell::with_config(ShellConfig::new().with_banner(false).with_seed(42))
}

fn contents(shell: &Shell) -> Vec<String> {
    shell
        .session()
        .lines()
        .iter()
        .map(|l| l.content.clone())
        .collect()
}

// ==================== Routing ====================

#[test]
fn test_unknown_verb_yields_one_error_and_no_state_change() {
    let mut term = shell();
    term.submit_line("selfdestruct now");

    let errors: Vec<_> = term
        .session()
        .lines()
        .iter()
        .filter(|l| l.severity == Severity::Error)
        .collect();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].content.contains("selfdestruct"));

    assert_eq!(term.session().active_game_kind(), None);
    assert_eq!(term.session().recent_verbs().count(), 0);
}

#[test]
fn test_verb_case_insensitive_args_case_preserved() {
    let mut term = shell();
    term.submit_line("ECHO Mixed Case Stays");
    assert!(contents(&term).contains(&"Mixed Case Stays".to_string()));
}

#[test]
fn test_alias_routing() {
    let mut term = shell();
    term.submit_line("caffeine");
    // Aliases land in the window under the alias the user typed.
    let noted: Vec<_> = term.session().recent_verbs().collect();
    assert_eq!(noted, vec!["caffeine"]);
    assert_eq!(term.session().lines().len(), 2); // echo + quote
}

#[test]
fn test_empty_and_whitespace_lines_vanish() {
    let mut term = shell();
    term.submit_line("");
    term.submit_line("   \t  ");
    assert!(term.session().lines().is_empty());
    assert!(term.session().history_entries().is_empty());
}

// ==================== History ====================

#[test]
fn test_history_command_lists_numbered_entries() {
    let mut term = shell();
    term.submit_line("whoami");
    term.submit_line("pwd");
    term.submit_line("history");

    let listing = contents(&term);
    assert!(listing.iter().any(|l| l.contains("1") && l.contains("whoami")));
    assert!(listing.iter().any(|l| l.contains("2") && l.contains("pwd")));
    // The history command itself was recorded before it ran.
    assert!(listing.iter().any(|l| l.contains("3") && l.contains("history")));
}

#[test]
fn test_history_navigation_round_trip() {
    let mut term = shell();
    term.submit_line("whoami");
    term.submit_line("pwd");

    let session = term.session_mut();
    assert_eq!(session.history_prev().as_deref(), Some("pwd"));
    assert_eq!(session.history_prev().as_deref(), Some("whoami"));
    assert_eq!(session.history_next().as_deref(), Some("pwd"));
    assert_eq!(session.history_next(), None);
}

// ==================== Combos ====================

#[test]
fn test_true_developer_combo_fires_exactly_once() {
    let mut term = shell();
    term.submit_line("code");
    term.submit_line("love");
    term.submit_line("coffee");

    let hits = contents(&term)
        .iter()
        .filter(|l| l.contains("True Developer"))
        .count();
    assert_eq!(hits, 1);
    assert_eq!(term.session().recent_verbs().count(), 0);

    // The streak was consumed; the same three again re-arm it from scratch.
    term.submit_line("code");
    term.submit_line("love");
    term.submit_line("coffee");
    let hits = contents(&term)
        .iter()
        .filter(|l| l.contains("True Developer"))
        .count();
    assert_eq!(hits, 2);
}

#[test]
fn test_intervening_command_breaks_the_streak() {
    let mut term = shell();
    term.submit_line("code");
    term.submit_line("love");
    term.submit_line("pwd");
    term.submit_line("coffee");
    assert!(!contents(&term).iter().any(|l| l.contains("True Developer")));
}

#[test]
fn test_night_owl_and_cosmic_hacker_runs() {
    let mut term = shell();
    term.submit_line("midnight");
    term.submit_line("coffee");
    term.submit_line("code");
    assert!(contents(&term).iter().any(|l| l.contains("Night Owl")));

    term.submit_line("universe");
    term.submit_line("matrix");
    term.submit_line("hack");
    assert!(contents(&term).iter().any(|l| l.contains("Cosmic Hacker")));
}

#[test]
fn test_tori_after_another_command_unlocks_the_poem() {
    let mut term = shell();
    term.submit_line("tori");
    assert!(!contents(&term).iter().any(|l| l.contains("For Tori")));

    term.submit_line("help");
    term.submit_line("tori");
    assert!(contents(&term).iter().any(|l| l.contains("For Tori")));
}

// ==================== Housekeeping ====================

#[test]
fn test_clear_twice_is_safe_and_total() {
    let mut term = shell();
    term.submit_line("help");
    assert!(!term.session().lines().is_empty());

    term.submit_line("clear");
    assert!(term.session().lines().is_empty());
    term.submit_line("clear");
    assert!(term.session().lines().is_empty());
}

#[test]
fn test_theme_round_trip() {
    use hackterm_core::ThemeName;

    let mut term = shell();
    assert_eq!(term.session().theme(), ThemeName::Matrix);
    term.submit_line("theme retro");
    assert_eq!(term.session().theme(), ThemeName::Retro);

    term.submit_line("theme disco");
    assert_eq!(term.session().theme(), ThemeName::Retro);
    assert!(contents(&term).iter().any(|l| l.contains("Unknown theme")));
}

#[test]
fn test_exit_sets_quit_flag_after_goodbye() {
    let mut term = shell();
    term.submit_line("exit");
    assert!(term.session().quit_requested());
    assert!(contents(&term).iter().any(|l| l.contains("Logging out")));
}

#[test]
fn test_two_shells_are_isolated() {
    let mut a = shell();
    let b = shell();
    a.submit_line("snake");
    assert!(a.session().raw_input_captured());
    assert!(!b.session().raw_input_captured());
    assert!(b.session().lines().is_empty());
}
