//! Word lists for the daily game
//!
//! Provides embedded word lists compiled into the binary: the answer pool the
//! daily secret is drawn from, and the larger set of accepted guesses.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};
pub use loader::{WordList, WordValidator};
