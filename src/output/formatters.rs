//! Formatting utilities for terminal output

use crate::config::Theme;
use crate::core::{Guess, LetterScore};
use colored::{ColoredString, Colorize};

/// Colour for a letter score
#[must_use]
pub const fn score_color(score: LetterScore, theme: &Theme) -> (u8, u8, u8) {
    match score {
        LetterScore::Correct => Theme::rgb(theme.correct),
        LetterScore::Present => Theme::rgb(theme.present),
        LetterScore::Absent => Theme::rgb(theme.absent),
    }
}

/// A single letter drawn as a coloured tile, e.g. " A "
#[must_use]
pub fn letter_tile(letter: char, score: LetterScore, theme: &Theme) -> ColoredString {
    let (r, g, b) = score_color(score, theme);
    format!(" {} ", letter.to_ascii_uppercase())
        .bold()
        .white()
        .on_truecolor(r, g, b)
}

/// A whole guess as a row of tiles
#[must_use]
pub fn guess_row(guess: &Guess, theme: &Theme) -> String {
    guess
        .letters()
        .map(|(letter, score)| letter_tile(letter, score, theme).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Placeholder row for an attempt not yet used
#[must_use]
pub fn empty_row() -> String {
    vec![" _ "; crate::core::WORD_LENGTH].join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn score_colors_follow_theme() {
        let theme = Theme::default();
        assert_eq!(score_color(LetterScore::Correct, &theme), (0x04, 0xB5, 0x75));
        assert_eq!(score_color(LetterScore::Present, &theme), (0xFF, 0x81, 0x00));
    }

    #[test]
    fn tile_contains_uppercase_letter() {
        let tile = letter_tile('a', LetterScore::Absent, &Theme::default());
        assert_eq!(tile.input, " A ");
        assert_eq!(
            tile.bgcolor,
            Some(colored::Color::TrueColor {
                r: 0x58,
                g: 0x58,
                b: 0x58
            })
        );
    }

    #[test]
    fn empty_row_has_five_slots() {
        assert_eq!(empty_row(), " _   _   _   _   _ ");
    }
}
