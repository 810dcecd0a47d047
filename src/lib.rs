//! Daily Word
//!
//! A daily five-letter word game: the secret word is derived from the
//! calendar date, guesses are scored letter by letter, and a persistent
//! ledger tracks the win streak across days.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use wordle_daily::game::{GameSession, Outcome, select_word};
//! use wordle_daily::core::Rules;
//! use wordle_daily::wordlists::WordList;
//!
//! let words = WordList::from_slice(&["apple", "table"]);
//! let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//!
//! // Same date, same word
//! let secret = select_word(words.words(), date).unwrap().clone();
//! let mut session = GameSession::new(secret, date, 6, Rules::default()).unwrap();
//!
//! let guess = session.submit_guess("table", &words).unwrap();
//! println!("{}", guess.to_emoji());
//! assert!(session.state() != Outcome::Lose);
//! ```

// Core domain types: words, scores, evaluation rules
pub mod core;

// Word selection and the per-day state machine
pub mod game;

// Results across days
pub mod history;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

pub mod config;
pub mod error;
pub mod logging;
