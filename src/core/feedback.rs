//! Per-letter feedback for a submitted guess
//!
//! A [`Guess`] keeps the submitted word together with the positions scored
//! "correct" and "present elsewhere". Every other position is absent.

use super::word::{WORD_LENGTH, Word};

/// Classification of a single letter in a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterScore {
    /// Letter does not occur in the secret
    Absent,
    /// Letter occurs in the secret at another position
    Present,
    /// Letter matches the secret at this position
    Correct,
}

impl LetterScore {
    /// Emoji square used in share grids
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// One evaluated attempt
///
/// Created by an [`Evaluator`](super::Evaluator) and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    word: Word,
    exact: bool,
    correct: Vec<usize>,
    present: Vec<usize>,
}

impl Guess {
    /// Build a guess from its classified positions
    ///
    /// Positions are kept in ascending order.
    pub(crate) fn new(
        word: Word,
        exact: bool,
        mut correct: Vec<usize>,
        mut present: Vec<usize>,
    ) -> Self {
        correct.sort_unstable();
        present.sort_unstable();
        Self {
            word,
            exact,
            correct,
            present,
        }
    }

    /// The submitted word
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    /// The submitted text
    #[must_use]
    pub fn text(&self) -> &str {
        self.word.text()
    }

    /// Whether the guess equals the secret
    #[must_use]
    pub const fn is_exact(&self) -> bool {
        self.exact
    }

    /// Positions where the letter matches the secret
    #[must_use]
    pub fn correct_positions(&self) -> &[usize] {
        &self.correct
    }

    /// Positions whose letter appears elsewhere in the secret
    #[must_use]
    pub fn present_positions(&self) -> &[usize] {
        &self.present
    }

    /// Score of the letter at `position`
    #[must_use]
    pub fn score_at(&self, position: usize) -> LetterScore {
        if self.correct.binary_search(&position).is_ok() {
            LetterScore::Correct
        } else if self.present.binary_search(&position).is_ok() {
            LetterScore::Present
        } else {
            LetterScore::Absent
        }
    }

    /// Scores for every position, left to right
    #[must_use]
    pub fn scores(&self) -> [LetterScore; WORD_LENGTH] {
        std::array::from_fn(|i| self.score_at(i))
    }

    /// Letters paired with their scores
    pub fn letters(&self) -> impl Iterator<Item = (char, LetterScore)> + '_ {
        self.word
            .chars()
            .iter()
            .enumerate()
            .map(|(i, &ch)| (char::from(ch), self.score_at(i)))
    }

    /// Emoji row such as "🟩🟨⬜⬜⬜"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.scores().iter().map(|s| s.emoji()).collect()
    }
}
