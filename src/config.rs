//! Runtime configuration
//!
//! [`GameConfig`] collects everything the front ends need; [`Theme`] carries
//! the tile colours and is handed explicitly to whichever front end renders.

use crate::core::Rules;
use crate::error::GameError;
use crate::game::{DEFAULT_MAX_TRIES, today_utc};
use chrono::NaiveDate;
use directories::ProjectDirs;
use ratatui::style::Color;
use std::path::PathBuf;

const HISTORY_FILE: &str = "history.json";
const LOG_FILE: &str = "wordle_daily.log";

/// Settings for one run of the game
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub max_tries: usize,
    pub rules: Rules,
    /// Calendar day being played
    pub date: NaiveDate,
    pub history_path: PathBuf,
    pub log_path: PathBuf,
    /// Custom word list replacing the embedded ones
    pub wordlist: Option<PathBuf>,
    pub theme: Theme,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_tries: DEFAULT_MAX_TRIES,
            rules: Rules::default(),
            date: today_utc(),
            history_path: default_history_path(),
            log_path: default_log_path(),
            wordlist: None,
            theme: Theme::default(),
        }
    }
}

impl GameConfig {
    /// Check values that cannot be expressed in the types
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidInput` if `max_tries` is zero.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.max_tries == 0 {
            return Err(GameError::invalid_input("max tries must be at least 1"));
        }
        Ok(())
    }
}

/// Per-user data directory, if the platform has one
#[must_use]
pub fn data_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "wordle_daily").map(|dirs| dirs.data_dir().to_path_buf())
}

/// Default history file: `<data_dir>/history.json`, or the working directory
#[must_use]
pub fn default_history_path() -> PathBuf {
    data_dir().map_or_else(|| PathBuf::from(HISTORY_FILE), |dir| dir.join(HISTORY_FILE))
}

/// Default log file next to the history
#[must_use]
pub fn default_log_path() -> PathBuf {
    data_dir().map_or_else(|| PathBuf::from(LOG_FILE), |dir| dir.join(LOG_FILE))
}

/// Parse a `YYYY-MM-DD` calendar date
///
/// # Errors
///
/// Returns `GameError::DateParseError` if `text` is not a valid date.
pub fn parse_date(text: &str) -> Result<NaiveDate, GameError> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").map_err(|e| GameError::DateParseError {
        value: text.to_string(),
        reason: e.to_string(),
    })
}

/// Tile and accent colours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Letter in the right position
    pub correct: Color,
    /// Letter elsewhere in the word
    pub present: Color,
    /// Letter not in the word
    pub absent: Color,
    pub accent: Color,
    pub muted: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            correct: Color::Rgb(0x04, 0xB5, 0x75),
            present: Color::Rgb(0xFF, 0x81, 0x00),
            absent: Color::Rgb(0x58, 0x58, 0x58),
            accent: Color::Cyan,
            muted: Color::DarkGray,
        }
    }
}

impl Theme {
    /// RGB triple for true-colour terminal output
    ///
    /// Named colours map to their usual xterm values.
    #[must_use]
    pub const fn rgb(color: Color) -> (u8, u8, u8) {
        match color {
            Color::Rgb(r, g, b) => (r, g, b),
            Color::Black => (0, 0, 0),
            Color::Red => (205, 0, 0),
            Color::Green => (0, 205, 0),
            Color::Yellow => (205, 205, 0),
            Color::Blue => (0, 0, 238),
            Color::Magenta => (205, 0, 205),
            Color::Cyan => (0, 205, 205),
            Color::Gray => (229, 229, 229),
            Color::DarkGray => (127, 127, 127),
            _ => (255, 255, 255),
        }
    }
}
