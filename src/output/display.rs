//! Display functions for the line-oriented front end

use super::formatters::{create_progress_bar, empty_row, guess_row};
use crate::config::Theme;
use crate::core::Evaluator;
use crate::game::{GameSession, Outcome};
use crate::history::Statistics;
use colored::Colorize;

/// Print every guess, padded with empty rows up to the attempt limit
pub fn print_board<E: Evaluator>(session: &GameSession<E>, theme: &Theme) {
    println!();
    for guess in session.guesses() {
        println!("  {}", guess_row(guess, theme));
    }
    for _ in 0..session.remaining_attempts() {
        println!("  {}", empty_row().bright_black());
    }
    println!();
}

/// Print the end-of-game summary
pub fn print_game_result<E: Evaluator>(session: &GameSession<E>, won: bool, streak: u32) {
    println!("{}", "─".repeat(40).cyan());
    if won {
        println!("{}", "🎉 You win!".green().bold());
    } else {
        println!("{}", "❌ You lose!".red().bold());
    }
    println!(
        "The word was: {}",
        session.secret().text().to_uppercase().bright_yellow().bold()
    );
    if won && !session.guesses().is_empty() {
        let count = session.guesses().len();
        println!(
            "You made {count} {}",
            if count == 1 { "guess" } else { "guesses" }
        );
    }
    println!("Current streak: {}", streak.to_string().bright_cyan().bold());
    println!("{}", "─".repeat(40).cyan());

    if !session.guesses().is_empty() {
        println!("\n{}\n", session.share_text());
    }
}

/// Print played/won totals, streaks and the guess distribution
pub fn print_statistics(stats: &Statistics) {
    println!("\n{}", "═".repeat(50).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(50).cyan());

    println!("\n📊 {}", "Summary:".bright_cyan().bold());
    println!("   Played:          {}", stats.played);
    println!(
        "   Win %:           {}",
        format!("{:.0}", stats.win_percentage()).bright_yellow().bold()
    );
    println!(
        "   Current streak:  {}",
        stats.current_streak.to_string().green()
    );
    println!("   Max streak:      {}", stats.max_streak.to_string().yellow());

    println!("\n📈 {}", "Guess distribution:".bright_cyan().bold());
    let max = stats.max_bucket() as f64;
    for (i, &count) in stats.distribution.iter().enumerate() {
        let bar = create_progress_bar(count as f64, max, 30);
        let (filled, rest) = bar.split_at(bar.find('░').unwrap_or(bar.len()));
        println!(
            "   {}: {}{} {count}",
            i + 1,
            filled.green(),
            rest.bright_black()
        );
    }
    println!();
}
