//! Core domain types for the game
//!
//! Words, per-letter feedback and the evaluation rules that produce it.
//! Everything here is pure and free of I/O.

mod evaluator;
mod feedback;
mod word;

pub use evaluator::{Evaluator, MembershipRule, Rules, StandardRule};
pub use feedback::{Guess, LetterScore};
pub use word::{WORD_LENGTH, Word, WordError};
