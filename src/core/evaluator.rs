//! Guess evaluation rules
//!
//! Two rules are provided:
//! - [`MembershipRule`]: a letter that is not in place is "present" whenever it
//!   occurs anywhere in the secret. Repeated guess letters are all marked
//!   present even if the secret holds the letter once. This is the default.
//! - [`StandardRule`]: each secret letter is consumed at most once, exact
//!   matches first, then present letters from left to right.

use super::feedback::Guess;
use super::word::{WORD_LENGTH, Word};
use tracing::trace;

/// Compares a guess against the secret word
pub trait Evaluator {
    /// Classify every position of `guess` against `secret`
    fn evaluate(&self, secret: &Word, guess: &Word) -> Guess;
}

/// Enum wrapper for all evaluation rules
///
/// Allows runtime selection of the rule while maintaining static dispatch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Rules {
    /// Letter membership anywhere in the secret (default)
    #[default]
    Membership,
    /// Duplicate-aware letter accounting
    Standard,
}

impl Evaluator for Rules {
    fn evaluate(&self, secret: &Word, guess: &Word) -> Guess {
        match self {
            Self::Membership => MembershipRule.evaluate(secret, guess),
            Self::Standard => StandardRule.evaluate(secret, guess),
        }
    }
}

impl Rules {
    /// Create rules from name string
    ///
    /// Supported names: "membership", "standard", "classic".
    /// Defaults to membership if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "standard" | "classic" => Self::Standard,
            _ => Self::Membership,
        }
    }

    /// Canonical name of the rule
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Membership => "membership",
            Self::Standard => "standard",
        }
    }
}

/// Present-anywhere evaluation
#[derive(Debug, Clone, Copy, Default)]
pub struct MembershipRule;

impl Evaluator for MembershipRule {
    fn evaluate(&self, secret: &Word, guess: &Word) -> Guess {
        if guess == secret {
            return Guess::new(guess.clone(), true, (0..WORD_LENGTH).collect(), Vec::new());
        }

        let mut correct = Vec::new();
        let mut present = Vec::new();

        for (i, &letter) in guess.chars().iter().enumerate() {
            if letter == secret.char_at(i) {
                correct.push(i);
            } else if secret.has_letter(letter) {
                present.push(i);
            }
        }

        trace!(guess = %guess, correct = ?correct, present = ?present, "membership evaluation");
        Guess::new(guess.clone(), false, correct, present)
    }
}

/// Duplicate-aware evaluation
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRule;

impl Evaluator for StandardRule {
    fn evaluate(&self, secret: &Word, guess: &Word) -> Guess {
        if guess == secret {
            return Guess::new(guess.clone(), true, (0..WORD_LENGTH).collect(), Vec::new());
        }

        let mut available = secret.char_counts();
        let mut correct = Vec::new();
        let mut present = Vec::new();

        // First pass: exact matches consume their letter
        for (i, &letter) in guess.chars().iter().enumerate() {
            if letter == secret.char_at(i) {
                correct.push(i);
                if let Some(count) = available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: remaining letters, left to right
        for (i, &letter) in guess.chars().iter().enumerate() {
            if correct.contains(&i) {
                continue;
            }
            if let Some(count) = available.get_mut(&letter)
                && *count > 0
            {
                present.push(i);
                *count -= 1;
            }
        }

        trace!(guess = %guess, correct = ?correct, present = ?present, "standard evaluation");
        Guess::new(guess.clone(), false, correct, present)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterScore::{Absent, Correct, Present};

    fn eval<E: Evaluator>(rule: &E, secret: &str, guess: &str) -> Guess {
        rule.evaluate(&Word::new(secret).unwrap(), &Word::new(guess).unwrap())
    }

    #[test]
    fn exact_match_marks_every_position_correct() {
        for rule in [Rules::Membership, Rules::Standard] {
            let g = eval(&rule, "apple", "apple");
            assert!(g.is_exact());
            assert_eq!(g.correct_positions(), &[0, 1, 2, 3, 4]);
            assert!(g.present_positions().is_empty());
        }
    }

    #[test]
    fn apple_vs_alert() {
        let g = eval(&MembershipRule, "apple", "alert");
        assert!(!g.is_exact());
        assert_eq!(g.scores(), [Correct, Present, Present, Absent, Absent]);
    }

    #[test]
    fn membership_marks_every_repeated_letter_present() {
        // One 'l' in the secret, but both guess positions are present
        let g = eval(&MembershipRule, "world", "llama");
        assert_eq!(g.scores(), [Present, Present, Absent, Absent, Absent]);

        let g = eval(&MembershipRule, "apple", "ppppp");
        assert_eq!(g.correct_positions(), &[1, 2]);
        assert_eq!(g.present_positions(), &[0, 3, 4]);
    }

    #[test]
    fn membership_paper_against_apple() {
        let g = eval(&MembershipRule, "apple", "paper");
        assert_eq!(g.scores(), [Present, Present, Correct, Present, Absent]);
    }

    #[test]
    fn standard_consumes_letters_once() {
        let g = eval(&StandardRule, "world", "llama");
        assert_eq!(g.scores(), [Present, Absent, Absent, Absent, Absent]);

        let g = eval(&StandardRule, "apple", "ppppp");
        assert_eq!(g.correct_positions(), &[1, 2]);
        assert!(g.present_positions().is_empty());
    }

    #[test]
    fn standard_prefers_exact_matches() {
        // ROBOT vs FLOOR: second O is in place, first O takes the remaining one
        let g = eval(&StandardRule, "floor", "robot");
        assert_eq!(g.scores(), [Present, Present, Absent, Correct, Absent]);
    }

    #[test]
    fn evaluation_is_deterministic() {
        for rule in [Rules::Membership, Rules::Standard] {
            let first = eval(&rule, "crane", "nacre");
            let second = eval(&rule, "crane", "nacre");
            assert_eq!(first, second);
        }
    }

    #[test]
    fn rules_from_name() {
        assert_eq!(Rules::from_name("standard"), Rules::Standard);
        assert_eq!(Rules::from_name("classic"), Rules::Standard);
        assert_eq!(Rules::from_name("membership"), Rules::Membership);
        assert_eq!(Rules::from_name("unknown"), Rules::Membership);
        assert_eq!(Rules::Standard.name(), "standard");
    }
}
