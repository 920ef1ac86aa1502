//! The verb table. Commands implement the [`Command`] trait and are
//! registered under a primary name plus aliases; the shell normalizes the
//! verb, looks it up here and hands the handler the session and the raw
//! argument tokens (case preserved, games depend on that).

use std::collections::HashMap;

use chrono::Local;

use crate::flavor;
use crate::output::Severity;
use crate::session::{EffectRequest, Session, ThemeName};

pub trait Command {
    /// Primary verb, already lowercase.
    fn name(&self) -> &'static str;

    /// Extra verbs that reach the same handler.
    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }

    fn execute(&self, session: &mut Session, args: &[&str]);
}

/// Verb -> handler map with alias support.
#[derive(Default)]
pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
    index: HashMap<&'static str, usize>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every built-in the terminal ships with.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(Help));
        registry.register(Box::new(About));
        registry.register(Box::new(Projects));
        registry.register(Box::new(Me));
        registry.register(Box::new(Play));
        registry.register(Box::new(Snake));
        registry.register(Box::new(Guess));
        registry.register(Box::new(TypeTest));
        registry.register(Box::new(Theme));
        registry.register(Box::new(Clear));
        registry.register(Box::new(History));
        registry.register(Box::new(Echo));
        registry.register(Box::new(Whoami));
        registry.register(Box::new(Pwd));
        registry.register(Box::new(Ls));
        registry.register(Box::new(Date));
        registry.register(Box::new(Matrix));
        registry.register(Box::new(Hack));
        registry.register(Box::new(Love));
        registry.register(Box::new(Code));
        registry.register(Box::new(Coffee));
        registry.register(Box::new(Midnight));
        registry.register(Box::new(Universe));
        registry.register(Box::new(Netflix));
        registry.register(Box::new(Garfield));
        registry.register(Box::new(JohnWick));
        registry.register(Box::new(Tori));
        registry.register(Box::new(Exit));
        registry
    }

    pub fn register(&mut self, command: Box<dyn Command>) {
        let slot = self.commands.len();
        self.index.insert(command.name(), slot);
        for alias in command.aliases() {
            self.index.insert(alias, slot);
        }
        self.commands.push(command);
    }

    pub fn lookup(&self, verb: &str) -> Option<&dyn Command> {
        self.index.get(verb).map(|&slot| self.commands[slot].as_ref())
    }

    /// Primary names, registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.iter().map(|c| c.name())
    }
}

// ==================== Information ====================

struct Help;
impl Command for Help {
    fn name(&self) -> &'static str {
        "help"
    }
    fn execute(&self, session: &mut Session, _args: &[&str]) {
        session.append_lines(flavor::HELP);
    }
}

struct About;
impl Command for About {
    fn name(&self) -> &'static str {
        "about"
    }
    fn execute(&self, session: &mut Session, _args: &[&str]) {
        session.append_lines(flavor::ABOUT);
    }
}

struct Projects;
impl Command for Projects {
    fn name(&self) -> &'static str {
        "projects"
    }
    fn execute(&self, session: &mut Session, _args: &[&str]) {
        session.append_lines(flavor::PROJECTS);
    }
}

struct Me;
impl Command for Me {
    fn name(&self) -> &'static str {
        "me"
    }
    fn aliases(&self) -> &'static [&'static str] {
        &["dime", "about-dime"]
    }
    fn execute(&self, session: &mut Session, _args: &[&str]) {
        session.append_lines(flavor::ME);
    }
}

struct Play;
impl Command for Play {
    fn name(&self) -> &'static str {
        "play"
    }
    fn execute(&self, session: &mut Session, _args: &[&str]) {
        session.append_lines(flavor::PLAY);
    }
}

// ==================== Games ====================

struct Snake;
impl Command for Snake {
    fn name(&self) -> &'static str {
        "snake"
    }
    fn execute(&self, session: &mut Session, _args: &[&str]) {
        session.start_snake();
    }
}

struct Guess;
impl Command for Guess {
    fn name(&self) -> &'static str {
        "guess"
    }
    fn execute(&self, session: &mut Session, args: &[&str]) {
        // With an argument the token goes straight to the engine; bare
        // `guess` starts a round.
        match args.first() {
            Some(token) => session.submit_guess(token),
            None => session.start_guess(),
        }
    }
}

struct TypeTest;
impl Command for TypeTest {
    fn name(&self) -> &'static str {
        "type"
    }
    fn execute(&self, session: &mut Session, args: &[&str]) {
        if args.is_empty() {
            session.start_typing();
        } else {
            session.submit_typing(&args.join(" "));
        }
    }
}

// ==================== Terminal housekeeping ====================

struct Theme;
impl Command for Theme {
    fn name(&self) -> &'static str {
        "theme"
    }
    fn execute(&self, session: &mut Session, args: &[&str]) {
        let Some(wanted) = args.first() else {
            let current = session.theme().label();
            session.append(Severity::Info, "Themes: matrix, hacker, retro");
            session.append(Severity::Plain, format!("Current: {current}"));
            return;
        };
        match ThemeName::parse(wanted) {
            Some(theme) => {
                session.set_theme(theme);
                session.append(
                    Severity::Success,
                    format!("Theme switched to {}.", theme.label()),
                );
            }
            None => {
                session.append(
                    Severity::Error,
                    format!("Unknown theme '{wanted}'. Themes: matrix, hacker, retro"),
                );
            }
        }
    }
}

struct Clear;
impl Command for Clear {
    fn name(&self) -> &'static str {
        "clear"
    }
    fn execute(&self, session: &mut Session, _args: &[&str]) {
        session.clear_transcript();
    }
}

struct History;
impl Command for History {
    fn name(&self) -> &'static str {
        "history"
    }
    fn execute(&self, session: &mut Session, _args: &[&str]) {
        if session.history_entries().is_empty() {
            session.append(Severity::Info, "No commands in history yet.");
            return;
        }
        let listing: Vec<String> = session
            .history_entries()
            .iter()
            .enumerate()
            .map(|(i, entry)| format!("  {:>3}  {entry}", i + 1))
            .collect();
        for line in listing {
            session.append(Severity::Plain, line);
        }
    }
}

struct Echo;
impl Command for Echo {
    fn name(&self) -> &'static str {
        "echo"
    }
    fn execute(&self, session: &mut Session, args: &[&str]) {
        session.append(Severity::Plain, args.join(" "));
    }
}

struct Whoami;
impl Command for Whoami {
    fn name(&self) -> &'static str {
        "whoami"
    }
    fn execute(&self, session: &mut Session, _args: &[&str]) {
        session.append(Severity::Success, flavor::WHOAMI);
    }
}

struct Pwd;
impl Command for Pwd {
    fn name(&self) -> &'static str {
        "pwd"
    }
    fn execute(&self, session: &mut Session, _args: &[&str]) {
        session.append(Severity::Plain, flavor::PWD);
    }
}

struct Ls;
impl Command for Ls {
    fn name(&self) -> &'static str {
        "ls"
    }
    fn execute(&self, session: &mut Session, _args: &[&str]) {
        session.append(Severity::Plain, flavor::LS_LISTING);
    }
}

struct Date;
impl Command for Date {
    fn name(&self) -> &'static str {
        "date"
    }
    fn execute(&self, session: &mut Session, _args: &[&str]) {
        let now = Local::now().format("%a %b %e %Y %H:%M:%S");
        session.append(Severity::Plain, now.to_string());
    }
}

// ==================== Showpieces ====================

struct Matrix;
impl Command for Matrix {
    fn name(&self) -> &'static str {
        "matrix"
    }
    fn execute(&self, session: &mut Session, _args: &[&str]) {
        session.append_lines(flavor::MATRIX_INTRO);
        session.request_effect(EffectRequest::MatrixRain);
    }
}

struct Hack;
impl Command for Hack {
    fn name(&self) -> &'static str {
        "hack"
    }
    fn execute(&self, session: &mut Session, _args: &[&str]) {
        // First line lands now; the frontend paces out the rest.
        if let Some((severity, content)) = flavor::HACK_SCRIPT.first() {
            session.append(*severity, *content);
        }
        session.request_effect(EffectRequest::HackSequence);
    }
}

// ==================== Easter eggs ====================

struct Love;
impl Command for Love {
    fn name(&self) -> &'static str {
        "love"
    }
    fn execute(&self, session: &mut Session, _args: &[&str]) {
        let line = session.pick(flavor::LOVE_MESSAGES);
        session.append(Severity::Success, line);
    }
}

struct Code;
impl Command for Code {
    fn name(&self) -> &'static str {
        "code"
    }
    fn aliases(&self) -> &'static [&'static str] {
        &["programming", "developer"]
    }
    fn execute(&self, session: &mut Session, _args: &[&str]) {
        let line = session.pick(flavor::DEV_FACTS);
        session.append(Severity::Info, line);
    }
}

struct Coffee;
impl Command for Coffee {
    fn name(&self) -> &'static str {
        "coffee"
    }
    fn aliases(&self) -> &'static [&'static str] {
        &["caffeine"]
    }
    fn execute(&self, session: &mut Session, _args: &[&str]) {
        let line = session.pick(flavor::COFFEE_QUOTES);
        session.append(Severity::Warning, line);
    }
}

struct Midnight;
impl Command for Midnight {
    fn name(&self) -> &'static str {
        "midnight"
    }
    fn aliases(&self) -> &'static [&'static str] {
        &["night"]
    }
    fn execute(&self, session: &mut Session, _args: &[&str]) {
        let line = session.pick(flavor::MIDNIGHT_QUOTES);
        session.append(Severity::Info, line);
    }
}

struct Universe;
impl Command for Universe {
    fn name(&self) -> &'static str {
        "universe"
    }
    fn aliases(&self) -> &'static [&'static str] {
        &["cosmos"]
    }
    fn execute(&self, session: &mut Session, _args: &[&str]) {
        let line = session.pick(flavor::UNIVERSE_QUOTES);
        session.append(Severity::Info, line);
    }
}

struct Netflix;
impl Command for Netflix {
    fn name(&self) -> &'static str {
        "netflix"
    }
    fn execute(&self, session: &mut Session, _args: &[&str]) {
        let line = session.pick(flavor::NETFLIX_SHOWS);
        session.append(Severity::Plain, line);
    }
}

struct Garfield;
impl Command for Garfield {
    fn name(&self) -> &'static str {
        "garfield"
    }
    fn aliases(&self) -> &'static [&'static str] {
        &["lasagna"]
    }
    fn execute(&self, session: &mut Session, _args: &[&str]) {
        session.append_lines(flavor::GARFIELD);
    }
}

struct JohnWick;
impl Command for JohnWick {
    fn name(&self) -> &'static str {
        "johnwick"
    }
    fn aliases(&self) -> &'static [&'static str] {
        &["john-wick", "pencil"]
    }
    fn execute(&self, session: &mut Session, _args: &[&str]) {
        session.append_lines(flavor::JOHN_WICK);
    }
}

struct Tori;
impl Command for Tori {
    fn name(&self) -> &'static str {
        "tori"
    }
    fn execute(&self, session: &mut Session, _args: &[&str]) {
        // The poem itself is gated behind the verb-sequence rule.
        session.append_lines(flavor::TORI_TEASER);
    }
}

struct Exit;
impl Command for Exit {
    fn name(&self) -> &'static str {
        "exit"
    }
    fn execute(&self, session: &mut Session, _args: &[&str]) {
        session.append_lines(flavor::GOODBYE);
        session.request_quit();
    }
}
