//! Daily Word - CLI
//!
//! One secret word per calendar day, with a persistent win streak. Terminal UI
//! by default, plus a line-oriented mode and a statistics report.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;
use wordle_daily::{
    commands::{DailyGame, run_simple, run_stats},
    config::{GameConfig, default_history_path, default_log_path, parse_date},
    core::Rules,
    game::{DEFAULT_MAX_TRIES, today_utc},
    history::{JsonFileStore, StreakLedger},
    logging::init_tracing,
    wordlists::{ALLOWED, ANSWERS, WordList},
};

#[derive(Parser)]
#[command(
    name = "wordle_daily",
    about = "Guess the daily five-letter word and keep your streak going",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Attempts allowed per day
    #[arg(short = 'm', long, global = true, default_value_t = DEFAULT_MAX_TRIES)]
    max_tries: usize,

    /// Scoring rules: membership (default) or standard (duplicate-aware)
    #[arg(
        short,
        long,
        global = true,
        default_value = "membership",
        value_parser = ["membership", "standard", "classic"]
    )]
    rules: String,

    /// Word list file replacing the built-in answers and accepted guesses
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// History file (default: per-user data directory)
    #[arg(long, global = true)]
    history: Option<PathBuf>,

    /// Day to play, as YYYY-MM-DD (default: today, UTC)
    #[arg(short, long, global = true)]
    date: Option<String>,

    /// Log file (default: next to the history file)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand, PartialEq, Eq)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,

    /// Show played games, win rate, streaks and guess distribution
    Stats,
}

/// Load word lists based on the -w flag
///
/// Returns (`answers`, `allowed`). A custom file serves as both.
fn load_wordlists(path: Option<&Path>) -> Result<(WordList, WordList)> {
    match path {
        None => Ok((WordList::from_slice(ANSWERS), WordList::from_slice(ALLOWED))),
        Some(path) => {
            let words = WordList::load(path)
                .with_context(|| format!("failed to read word list {}", path.display()))?;
            Ok((words.clone(), words))
        }
    }
}

fn build_config(cli: &Cli) -> Result<GameConfig> {
    let date = match &cli.date {
        Some(text) => parse_date(text)?,
        None => today_utc(),
    };

    let config = GameConfig {
        max_tries: cli.max_tries,
        rules: Rules::from_name(&cli.rules),
        date,
        history_path: cli.history.clone().unwrap_or_else(default_history_path),
        log_path: cli.log_file.clone().unwrap_or_else(default_log_path),
        wordlist: cli.wordlist.clone(),
        ..GameConfig::default()
    };
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&cli)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    init_tracing(&config.log_path, command != Commands::Play);
    info!(
        date = %config.date,
        history = %config.history_path.display(),
        "starting"
    );

    let ledger = StreakLedger::open(JsonFileStore::new(&config.history_path));

    match command {
        Commands::Play => run_play_command(&config, ledger),
        Commands::Simple => run_simple_command(&config, ledger),
        Commands::Stats => {
            run_stats(&ledger, config.date, config.max_tries);
            Ok(())
        }
    }
}

fn start_game(
    config: &GameConfig,
    ledger: StreakLedger<JsonFileStore>,
) -> Result<DailyGame<JsonFileStore>> {
    let (answers, allowed) = load_wordlists(config.wordlist.as_deref())?;
    Ok(DailyGame::start(config, &answers, allowed, ledger)?)
}

fn run_simple_command(config: &GameConfig, ledger: StreakLedger<JsonFileStore>) -> Result<()> {
    let mut game = start_game(config, ledger)?;
    run_simple(&mut game, &config.theme)
}

fn run_play_command(config: &GameConfig, ledger: StreakLedger<JsonFileStore>) -> Result<()> {
    use wordle_daily::interactive::{App, run_tui};

    let game = start_game(config, ledger)?;
    run_tui(App::new(game, config.theme))
}
