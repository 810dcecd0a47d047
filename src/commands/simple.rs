//! Simple interactive CLI mode
//!
//! Text-based game without the TUI: one guess per line.

use super::daily::DailyGame;
use crate::config::Theme;
use crate::core::LetterScore;
use crate::game::Outcome;
use crate::history::HistoryStore;
use crate::output::formatters::score_color;
use crate::output::{print_board, print_game_result};
use anyhow::Result;
use colored::{ColoredString, Colorize};
use std::io::{self, BufRead, Write};

/// Run the simple interactive mode on stdin
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_simple<S: HistoryStore>(game: &mut DailyGame<S>, theme: &Theme) -> Result<()> {
    let stdin = io::stdin();
    play_lines(game, theme, &mut stdin.lock())
}

/// Play from any line source until the game ends, the input ends, or the
/// player quits
///
/// # Errors
///
/// Returns an error on I/O failure.
pub fn play_lines<S: HistoryStore, R: BufRead>(
    game: &mut DailyGame<S>,
    theme: &Theme,
    input: &mut R,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════╗");
    println!("║        Daily Word - {}       ║", game.session().date());
    println!("╚══════════════════════════════════════╝");

    if game.finished_earlier() {
        println!("\nYou have already played today. Come back tomorrow!");
        print_board(game.session(), theme);
        print_game_result(game.session(), game.won(), game.streak());
        return Ok(());
    }

    println!(
        "\nGuess the {}-letter word in {} tries. Type 'quit' to leave.",
        crate::core::WORD_LENGTH,
        game.session().max_tries()
    );
    println!("{}", legend(theme));
    if !game.session().guesses().is_empty() {
        println!("\nResuming today's game.");
    }

    loop {
        print_board(game.session(), theme);

        let attempt = game.session().guesses().len() + 1;
        let prompt = format!("Guess {attempt}/{}", game.session().max_tries());
        let Some(line) = read_line(input, &prompt)? else {
            println!("\n👋 See you tomorrow!\n");
            return Ok(());
        };

        match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 See you tomorrow!\n");
                return Ok(());
            }
            text => match game.submit(text) {
                Ok(submission) => {
                    if let Some(err) = &submission.save_error {
                        println!("{} {err}", "⚠ History not saved:".yellow());
                    }
                    if submission.state != Outcome::Playing {
                        print_board(game.session(), theme);
                        print_game_result(game.session(), game.won(), game.streak());
                        return Ok(());
                    }
                }
                Err(rejection) => println!("{} {rejection}", "❌".red()),
            },
        }
    }
}

/// Colour key for the tiles
fn legend(theme: &Theme) -> String {
    format!(
        "{} right spot   {} wrong spot   {} not in word",
        swatch(LetterScore::Correct, theme),
        swatch(LetterScore::Present, theme),
        swatch(LetterScore::Absent, theme)
    )
}

fn swatch(score: LetterScore, theme: &Theme) -> ColoredString {
    let (r, g, b) = score_color(score, theme);
    "■".truecolor(r, g, b)
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_line<R: BufRead>(input: &mut R, prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
