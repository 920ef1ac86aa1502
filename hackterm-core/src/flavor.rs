//! Static text tables: banner, help, easter eggs, game intros.
//!
//! Handlers pull from here and pick severities; nothing in this module has
//! behavior beyond random selection out of a fixed table.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::output::Severity;

/// Picks one entry from a fixed table. Tables in this module are never
/// empty; the fallback only exists to keep the function total.
pub fn pick<'a, R: Rng>(rng: &mut R, table: &[&'a str]) -> &'a str {
    table.choose(rng).copied().unwrap_or("")
}

pub const PROMPT: &str = "guest@hackterm:~$";

pub const BANNER: &str = r"
 _   _    _    ____ _  _______ _____ ____  __  __
| | | |  / \  / ___| |/ / ____|_   _|  _ \|  \/  |
| |_| | / _ \| |   | ' /|  _|   | | | |_) | |\/| |
|  _  |/ ___ \ |___| . \| |___  | | |  _ <| |  | |
|_| |_/_/   \_\____|_|\_\_____| |_| |_| \_\_|  |_|
";

pub const WELCOME: &[(Severity, &str)] = &[
    (Severity::Success, "Welcome to hackterm v1.0"),
    (Severity::Plain, "A terminal playground. Nothing here is load-bearing."),
    (Severity::Info, "Type 'help' to see available commands."),
];

pub const HELP: &[(Severity, &str)] = &[
    (Severity::Success, "Available commands:"),
    (Severity::Plain, "  help      - show this help message"),
    (Severity::Plain, "  about     - what this thing is"),
    (Severity::Plain, "  projects  - stuff I have built"),
    (Severity::Plain, "  me        - about the author"),
    (Severity::Plain, "  theme     - switch color theme (matrix/hacker/retro)"),
    (Severity::Plain, "  history   - list commands you have typed"),
    (Severity::Plain, "  clear     - wipe the screen"),
    (Severity::Plain, "  exit      - leave the terminal"),
    (Severity::Info, "Games:"),
    (Severity::Plain, "  play      - list the games"),
    (Severity::Plain, "  snake     - classic snake, arrow keys or WASD"),
    (Severity::Plain, "  guess     - guess my number, 1 to 100"),
    (Severity::Plain, "  type      - typing speed test"),
    (Severity::Info, "For show:"),
    (Severity::Plain, "  matrix    - follow the white rabbit"),
    (Severity::Plain, "  hack      - totally real hacking"),
    (Severity::Warning, "Psst. There are hidden commands. Try exploring."),
];

pub const ABOUT: &[(Severity, &str)] = &[
    (Severity::Success, "hackterm"),
    (Severity::Plain, "A fake terminal that takes itself exactly as seriously"),
    (Severity::Plain, "as it should: not at all. Commands, mini-games, secrets."),
    (Severity::Info, "Built with Rust, ratatui and too much coffee."),
];

pub const PROJECTS: &[(Severity, &str)] = &[
    (Severity::Success, "Projects:"),
    (Severity::Plain, "  hackterm        - you are soaking in it"),
    (Severity::Plain, "  dotfiles        - the usual over-engineered shrine"),
    (Severity::Plain, "  side-projects/  - 47 directories, 3 finished"),
    (Severity::Info, "Source and contact live in the usual places."),
];

pub const ME: &[(Severity, &str)] = &[
    (Severity::Success, "Dime"),
    (Severity::Plain, "Developer. Night owl. Professional overthinker."),
    (Severity::Plain, "Loves: clean diffs, cold brew, terminals with attitude."),
    (Severity::Plain, "Tolerates: YAML."),
];

pub const PLAY: &[(Severity, &str)] = &[
    (Severity::Success, "Pick your game:"),
    (Severity::Plain, "  snake  - arrow keys or WASD, ESC to bail out"),
    (Severity::Plain, "  guess  - I pick 1..100, you get 10 attempts"),
    (Severity::Plain, "  type   - type the phrase, get judged"),
];

pub const LS_LISTING: &str = "projects/  about.txt  skills.md  contact.info  .secrets/";
pub const WHOAMI: &str = "guest";
pub const PWD: &str = "/home/guest";

pub const GOODBYE: &[(Severity, &str)] = &[
    (Severity::Success, "Logging out..."),
    (Severity::Plain, "Thanks for visiting. The terminal will miss you."),
];

// ==================== Random flavor tables ====================

pub const LOVE_MESSAGES: &[&str] = &[
    "I love the smell of fresh code in the morning.",
    "Love is temporary. Git blame is forever.",
    "Roses are red, my screen is black, I write in Rust and I'm not coming back.",
    "Some people chase sunsets. I chase green test suites.",
    "My longest relationship is with my terminal emulator.",
];

pub const DEV_FACTS: &[&str] = &[
    "A 'temporary fix' has a half-life of six years.",
    "The bug is never where you are looking. That is why it is called looking.",
    "There are two hard problems: cache invalidation, naming, and off-by-one errors.",
    "Every codebase has a file nobody dares to open. This one has three.",
    "Real programmers count from 0. Real real programmers count from -1, just in case.",
    "It works on my machine is a valid deployment strategy nowhere.",
];

pub const COFFEE_QUOTES: &[&str] = &[
    "Coffee: the official compiler of the human brain.",
    "Behind every great commit is an empty mug.",
    "Espresso yourself.",
    "Decaf? I don't ship untested changes either.",
];

pub const MIDNIGHT_QUOTES: &[&str] = &[
    "Nothing good gets written before midnight. Nothing readable after 3am.",
    "The night shift: just you, the cursor, and questionable decisions.",
    "Sleep is a feature flag I keep forgetting to enable.",
    "2am: when all variable names become 'thing2'.",
];

pub const UNIVERSE_QUOTES: &[&str] = &[
    "The universe is a simulation and the frame rate is suspicious.",
    "Somewhere out there, an alien is also fighting a borrow checker.",
    "The cosmos compiles without warnings. Show-off.",
    "Dark matter is just the universe's unused dependencies.",
];

pub const NETFLIX_SHOWS: &[&str] = &[
    "Tonight's pick: Black Mirror. Again. For research.",
    "Tonight's pick: a documentary you will fall asleep to in 9 minutes.",
    "Tonight's pick: Mr. Robot, so you can feel things about terminals.",
    "Tonight's pick: whatever autoplays first. You know it's true.",
    "Tonight's pick: The Office. The algorithm gave up on you.",
];

pub const GARFIELD: &[(Severity, &str)] = &[
    (Severity::Warning, " /\\_/\\   GARFIELD MODE"),
    (Severity::Warning, "( o.o )  I hate Mondays."),
    (Severity::Warning, " > ^ <   I love lasagna."),
    (Severity::Plain, "That is the whole philosophy. It holds up."),
];

pub const JOHN_WICK: &[(Severity, &str)] = &[
    (Severity::Error, "Yeah... I'm thinking I'm back."),
    (Severity::Plain, "A man once ended three careers with a pencil."),
    (Severity::Plain, "Imagine what he could do with a mechanical keyboard."),
];

pub const TORI_TEASER: &[(Severity, &str)] = &[
    (Severity::Info, "tori?"),
    (Severity::Plain, "Some names unlock things when the moment is right."),
];

pub const TORI_POEM: &[(Severity, &str)] = &[
    (Severity::Success, "For Tori:"),
    (Severity::Plain, "  Between the prompts and the replies,"),
    (Severity::Plain, "  past every screen's unblinking light,"),
    (Severity::Plain, "  one name still renders in my eyes"),
    (Severity::Plain, "  at full brightness, every night."),
    (Severity::Info, "Hidden where only the curious look. Like you."),
];

// ==================== Effects scripts ====================

pub const MATRIX_INTRO: &[(Severity, &str)] = &[
    (Severity::Success, "Wake up, Neo..."),
    (Severity::Plain, "The Matrix has you."),
    (Severity::Info, "Follow the white rabbit."),
];

/// Staged fake-hack script. The TUI reveals one line per beat; the
/// headless driver dumps them all at once.
pub const HACK_SCRIPT: &[(Severity, &str)] = &[
    (Severity::Error, "INITIATING HACK SEQUENCE..."),
    (Severity::Warning, "Bypassing firewall... [####------] 40%"),
    (Severity::Warning, "Cracking mainframe password... [#######---] 70%"),
    (Severity::Success, "ACCESS GRANTED"),
    (Severity::Info, "Downloading secret files... done."),
    (Severity::Success, "JUST KIDDING."),
    (Severity::Plain, "This is a toy terminal, not a cybercrime kit."),
];

// ==================== Combo rewards ====================

pub const COMBO_TRUE_DEVELOPER: &[(Severity, &str)] = &[
    (Severity::Success, "ACHIEVEMENT UNLOCKED: True Developer"),
    (Severity::Plain, "You found the sacred trinity: code, love and coffee."),
];

pub const COMBO_NIGHT_OWL: &[(Severity, &str)] = &[
    (Severity::Success, "ACHIEVEMENT UNLOCKED: Night Owl"),
    (Severity::Plain, "Midnight, coffee, code. The classic stack trace of a life."),
];

pub const COMBO_COSMIC_HACKER: &[(Severity, &str)] = &[
    (Severity::Success, "ACHIEVEMENT UNLOCKED: Cosmic Hacker"),
    (Severity::Plain, "Universe, matrix, hack. Reality files a bug report."),
];

// ==================== Game text ====================

pub const SNAKE_INTRO: &[(Severity, &str)] = &[
    (Severity::Success, "Starting Snake..."),
    (Severity::Plain, "Arrow keys or WASD to steer, ESC to quit."),
    (Severity::Info, "The snake waits for your first move."),
];

pub const GUESS_INTRO: &[(Severity, &str)] = &[
    (Severity::Success, "I'm thinking of a number between 1 and 100."),
    (Severity::Plain, "You get 10 attempts. Type 'guess <number>' to play."),
];

pub const TYPING_PHRASES: &[&str] = &[
    "The quick brown fox jumps over the lazy dog",
    "Programming is thinking, not typing",
    "Code is like humor. When you have to explain it, it is bad",
    "First, solve the problem. Then, write the code",
    "Experience is the name everyone gives to their mistakes",
    "The best error message is the one that never shows up",
    "Simplicity is the soul of efficiency",
    "Talk is cheap. Show me the code",
];
