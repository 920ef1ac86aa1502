//! hackterm terminal application.
//!
//! A retro hacker-terminal playground: a command shell with easter eggs and
//! three built-in minigames, rendered as a TUI.
//!
//! # Headless Mode
//!
//! Run with `--headless` for a line-based interface suitable for scripting
//! and automated testing:
//!
//! ```bash
//! cargo run -p hackterm -- --headless --seed 42 < script.txt
//! ```

mod app;
mod effects;
mod events;
mod ui;

use std::io::{self, BufRead, Write};
use std::panic;
use std::time::Duration;

use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use hackterm_core::{HeadlessShell, Severity, Shell, ShellConfig, ThemeName};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::time::{interval, MissedTickBehavior};

use app::App;
use events::{handle_event, EventResult};

/// Snake advances one cell per tick.
const SNAKE_TICK: Duration = Duration::from_millis(150);
/// Cadence for visual effects (matrix rain frames, hack script reveal).
const UI_TICK: Duration = Duration::from_millis(80);

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut config = ShellConfig::new();
    let mut headless = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--headless" => headless = true,
            "--no-banner" => config = config.with_banner(false),
            "--seed" => {
                let value = iter.next().ok_or("--seed requires a value")?;
                config = config.with_seed(value.parse()?);
            }
            "--theme" => {
                let value = iter.next().ok_or("--theme requires a value")?;
                let theme = ThemeName::parse(value)
                    .ok_or_else(|| format!("unknown theme '{value}' (matrix, hacker, retro)"))?;
                config = config.with_theme(theme);
            }
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            other => return Err(format!("unknown argument '{other}' (try --help)").into()),
        }
    }

    if headless {
        return run_headless(config);
    }
    tracing::debug!("starting TUI mode");

    // Restore the terminal before the default panic handler prints, or the
    // message is lost to the alternate screen.
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let app = App::new(Shell::with_config(config));
    let result = run_app(&mut terminal, app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;
    println!("Connection to hackterm closed.");
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
) -> io::Result<()> {
    let mut event_stream = EventStream::new();

    let mut snake_tick = interval(SNAKE_TICK);
    snake_tick.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut ui_tick = interval(UI_TICK);
    ui_tick.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        terminal.draw(|frame| ui::render::draw(frame, &app))?;

        tokio::select! {
            maybe_event = event_stream.next() => {
                let Some(event) = maybe_event else { break };
                if let EventResult::Quit = handle_event(&mut app, event?) {
                    break;
                }
            }
            // Only armed while a snake game holds the session.
            _ = snake_tick.tick(), if app.snake_running() => {
                app.on_snake_tick();
            }
            _ = ui_tick.tick(), if app.has_effect() => {
                let size = terminal.size()?;
                app.on_ui_tick(size.width, size.height);
            }
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

fn run_headless(config: ShellConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut driver = HeadlessShell::with_config(config);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in driver.drain_new() {
        writeln!(out, "[{}] {}", severity_tag(line.severity), line.content)?;
    }

    let stdin = io::stdin();
    for input in stdin.lock().lines() {
        let input = input?;
        for line in driver.send(&input) {
            writeln!(out, "[{}] {}", severity_tag(line.severity), line.content)?;
        }
        if driver.quit_requested() {
            break;
        }
    }
    Ok(())
}

fn severity_tag(severity: Severity) -> &'static str {
    match severity {
        Severity::Plain => "plain",
        Severity::CommandEcho => "echo",
        Severity::Info => "info",
        Severity::Success => "ok",
        Severity::Warning => "warn",
        Severity::Error => "err",
    }
}

fn print_help() {
    println!("hackterm - retro terminal playground");
    println!();
    println!("USAGE:");
    println!("  hackterm [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  -h, --help       Show this help message");
    println!("  --headless       Line mode: read commands from stdin, print tagged output");
    println!("  --no-banner      Skip the startup banner");
    println!("  --seed <N>       Seed the session RNG for reproducible games");
    println!("  --theme <NAME>   Starting color theme: matrix, hacker, retro");
    println!();
    println!("KEYS (TUI mode):");
    println!("  Enter            Run the typed command");
    println!("  Up/Down          Walk command history (or steer the snake)");
    println!("  PgUp/PgDn        Scroll the transcript");
    println!("  Esc              End the snake game / dismiss the rain");
    println!("  Ctrl+L           Clear the screen");
    println!("  Ctrl+C           Quit");
    println!();
    println!("EXAMPLES:");
    println!("  hackterm                                 # Interactive TUI");
    println!("  echo 'guess 50' | hackterm --headless    # Scripted session");
}
