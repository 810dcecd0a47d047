//! Terminal output formatting
//!
//! Display utilities for the line-oriented front end and the stats command.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_game_result, print_statistics};
