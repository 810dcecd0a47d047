//! Game session state machine
//!
//! A session starts in [`Outcome::Playing`] and moves forward exactly once,
//! to `Win` on an exact match or to `Lose` when the last attempt misses.
//! Terminal sessions are frozen: later submissions are rejected.

use crate::core::{Evaluator, Guess, LetterScore, Rules, WORD_LENGTH, Word};
use crate::error::GameError;
use crate::wordlists::WordValidator;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::fmt::Write;
use thiserror::Error;
use tracing::{debug, info};

/// Default number of attempts per day
pub const DEFAULT_MAX_TRIES: usize = 6;

/// Current outcome of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Playing,
    Win,
    Lose,
}

impl Outcome {
    /// Whether no further guesses are accepted
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Win | Self::Lose)
    }
}

/// Why a submitted guess was refused
///
/// A rejection never changes the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("The game is already over")]
    GameOver,
    #[error("Guess must be exactly {WORD_LENGTH} letters, got {0}")]
    InvalidLength(usize),
    #[error("Guess must contain only letters")]
    InvalidCharacters,
    #[error("'{0}' is not in the word list")]
    NotInWordList(String),
}

/// One calendar day of play
///
/// Generic over the evaluation rule, defaulting to runtime-selectable
/// [`Rules`].
#[derive(Debug, Clone)]
pub struct GameSession<E: Evaluator = Rules> {
    secret: Word,
    date: NaiveDate,
    max_tries: usize,
    guesses: Vec<Guess>,
    state: Outcome,
    evaluator: E,
}

impl<E: Evaluator> GameSession<E> {
    /// Start a fresh session
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidInput` if `max_tries` is zero.
    pub fn new(
        secret: Word,
        date: NaiveDate,
        max_tries: usize,
        evaluator: E,
    ) -> Result<Self, GameError> {
        if max_tries == 0 {
            return Err(GameError::invalid_input("max tries must be at least 1"));
        }

        Ok(Self {
            secret,
            date,
            max_tries,
            guesses: Vec::with_capacity(max_tries),
            state: Outcome::Playing,
            evaluator,
        })
    }

    /// Rebuild a session by replaying previously submitted guesses
    ///
    /// Stored guesses skip word-list validation; malformed entries and
    /// entries past a terminal state are ignored.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidInput` if `max_tries` is zero.
    pub fn resume<S: AsRef<str>>(
        secret: Word,
        date: NaiveDate,
        max_tries: usize,
        evaluator: E,
        previous: &[S],
    ) -> Result<Self, GameError> {
        let mut session = Self::new(secret, date, max_tries, evaluator)?;
        let accept_all = |_: &str| true;

        for text in previous {
            if let Err(rejection) = session.submit_guess(text.as_ref(), &accept_all) {
                debug!(guess = text.as_ref(), %rejection, "skipped stored guess");
            }
        }

        Ok(session)
    }

    /// Submit a guess
    ///
    /// On acceptance the guess is evaluated and appended, and the state is
    /// recomputed.
    ///
    /// # Errors
    ///
    /// Returns a [`Rejection`] without changing the session if the game is
    /// over, the text is not five letters, or the validator refuses it.
    pub fn submit_guess(
        &mut self,
        text: &str,
        validator: &impl WordValidator,
    ) -> Result<&Guess, Rejection> {
        if self.state.is_terminal() {
            return Err(Rejection::GameOver);
        }

        let len = text.trim().chars().count();
        if len != WORD_LENGTH {
            return Err(Rejection::InvalidLength(len));
        }

        let word = Word::new(text).map_err(|_| Rejection::InvalidCharacters)?;
        if !validator.is_valid_word(word.text()) {
            return Err(Rejection::NotInWordList(word.text().to_string()));
        }

        let guess = self.evaluator.evaluate(&self.secret, &word);
        self.guesses.push(guess);
        self.state = self.next_state();

        debug!(
            guess = word.text(),
            attempt = self.guesses.len(),
            state = ?self.state,
            "guess accepted"
        );
        if self.state.is_terminal() {
            info!(date = %self.date, state = ?self.state, guesses = self.guesses.len(), "game finished");
        }

        Ok(&self.guesses[self.guesses.len() - 1])
    }

    fn next_state(&self) -> Outcome {
        if self.guesses.last().is_some_and(Guess::is_exact) {
            Outcome::Win
        } else if self.guesses.len() >= self.max_tries {
            Outcome::Lose
        } else {
            Outcome::Playing
        }
    }

    #[must_use]
    pub const fn state(&self) -> Outcome {
        self.state
    }

    /// Guesses in submission order
    #[must_use]
    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        self.max_tries - self.guesses.len()
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub const fn max_tries(&self) -> usize {
        self.max_tries
    }

    #[must_use]
    pub const fn evaluator(&self) -> &E {
        &self.evaluator
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    /// Submitted words, for persistence
    #[must_use]
    pub fn guess_texts(&self) -> Vec<String> {
        self.guesses.iter().map(|g| g.text().to_string()).collect()
    }

    /// Best known score for every guessed letter
    ///
    /// Correct beats present beats absent.
    #[must_use]
    pub fn letter_hints(&self) -> BTreeMap<char, LetterScore> {
        let mut hints = BTreeMap::new();
        for (letter, score) in self.guesses.iter().flat_map(Guess::letters) {
            hints
                .entry(letter)
                .and_modify(|best: &mut LetterScore| *best = (*best).max(score))
                .or_insert(score);
        }
        hints
    }

    /// Spoiler-free summary: a header line and one emoji row per guess
    #[must_use]
    pub fn share_text(&self) -> String {
        let attempts = match self.state {
            Outcome::Lose => "X".to_string(),
            Outcome::Win | Outcome::Playing => self.guesses.len().to_string(),
        };

        let mut text = format!("{} {attempts}/{}", self.date, self.max_tries);
        for guess in &self.guesses {
            let _ = write!(text, "\n{}", guess.to_emoji());
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MembershipRule, StandardRule};
    use crate::wordlists::WordList;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn session(secret: &str, max_tries: usize) -> GameSession {
        GameSession::new(Word::new(secret).unwrap(), day(), max_tries, Rules::Membership).unwrap()
    }

    fn accept_all(_: &str) -> bool {
        true
    }

    #[test]
    fn new_session_is_playing() {
        let s = session("apple", 6);
        assert_eq!(s.state(), Outcome::Playing);
        assert!(s.guesses().is_empty());
        assert_eq!(s.remaining_attempts(), 6);
    }

    #[test]
    fn zero_max_tries_is_invalid() {
        let result = GameSession::new(Word::new("apple").unwrap(), day(), 0, MembershipRule);
        assert!(matches!(result, Err(GameError::InvalidInput(_))));
    }

    #[test]
    fn exact_match_wins() {
        let mut s = session("apple", 6);
        let guess = s.submit_guess("APPLE", &accept_all).unwrap();
        assert!(guess.is_exact());
        assert_eq!(guess.correct_positions(), &[0, 1, 2, 3, 4]);
        assert_eq!(s.state(), Outcome::Win);
        assert_eq!(s.remaining_attempts(), 5);
    }

    #[test]
    fn six_misses_lose() {
        let mut s = session("apple", 6);
        for word in ["alert", "table", "hello", "world", "globe", "water"] {
            assert_eq!(s.state(), Outcome::Playing);
            s.submit_guess(word, &accept_all).unwrap();
        }
        assert_eq!(s.state(), Outcome::Lose);
        assert_eq!(s.guesses().len(), 6);
        assert_eq!(s.remaining_attempts(), 0);
    }

    #[test]
    fn win_on_last_attempt_is_win() {
        let mut s = session("apple", 2);
        s.submit_guess("alert", &accept_all).unwrap();
        s.submit_guess("apple", &accept_all).unwrap();
        assert_eq!(s.state(), Outcome::Win);
    }

    #[test]
    fn terminal_session_rejects_further_guesses() {
        let mut s = session("apple", 1);
        s.submit_guess("table", &accept_all).unwrap();
        assert_eq!(s.state(), Outcome::Lose);

        assert_eq!(s.submit_guess("apple", &accept_all), Err(Rejection::GameOver));
        assert_eq!(s.guesses().len(), 1);
        assert_eq!(s.state(), Outcome::Lose);

        let mut s = session("apple", 6);
        s.submit_guess("apple", &accept_all).unwrap();
        assert_eq!(s.submit_guess("table", &accept_all), Err(Rejection::GameOver));
        assert_eq!(s.guesses().len(), 1);
    }

    #[test]
    fn malformed_guesses_are_rejected_without_change() {
        let mut s = session("apple", 6);
        assert_eq!(s.submit_guess("app", &accept_all), Err(Rejection::InvalidLength(3)));
        assert_eq!(s.submit_guess("apples", &accept_all), Err(Rejection::InvalidLength(6)));
        assert_eq!(s.submit_guess("ap9le", &accept_all), Err(Rejection::InvalidCharacters));
        assert!(s.guesses().is_empty());
        assert_eq!(s.state(), Outcome::Playing);
    }

    #[test]
    fn word_list_membership_gates_guesses() {
        let list = WordList::from_slice(&["apple", "table"]);
        let mut s = session("apple", 6);

        assert_eq!(
            s.submit_guess("zzzzz", &list),
            Err(Rejection::NotInWordList("zzzzz".to_string()))
        );
        assert!(s.guesses().is_empty());

        s.submit_guess("table", &list).unwrap();
        assert_eq!(s.guesses().len(), 1);
    }

    #[test]
    fn evaluator_is_swappable() {
        let mut membership =
            GameSession::new(Word::new("apple").unwrap(), day(), 6, MembershipRule).unwrap();
        let mut standard =
            GameSession::new(Word::new("apple").unwrap(), day(), 6, StandardRule).unwrap();

        let m = membership.submit_guess("ppppp", &accept_all).unwrap();
        assert_eq!(m.present_positions(), &[0, 3, 4]);
        let s = standard.submit_guess("ppppp", &accept_all).unwrap();
        assert!(s.present_positions().is_empty());
    }

    #[test]
    fn resume_replays_stored_guesses() {
        let s = GameSession::resume(
            Word::new("apple").unwrap(),
            day(),
            6,
            Rules::Membership,
            &["alert", "bad", "table"],
        )
        .unwrap();
        assert_eq!(s.guess_texts(), ["alert", "table"]);
        assert_eq!(s.state(), Outcome::Playing);

        let s = GameSession::resume(
            Word::new("apple").unwrap(),
            day(),
            6,
            Rules::Membership,
            &["apple", "table"],
        )
        .unwrap();
        assert_eq!(s.state(), Outcome::Win);
        assert_eq!(s.guesses().len(), 1);
    }

    #[test]
    fn letter_hints_keep_best_score() {
        let mut s = session("apple", 6);
        s.submit_guess("paper", &accept_all).unwrap();
        s.submit_guess("alert", &accept_all).unwrap();

        let hints = s.letter_hints();
        assert_eq!(hints[&'a'], LetterScore::Correct);
        assert_eq!(hints[&'p'], LetterScore::Correct);
        assert_eq!(hints[&'l'], LetterScore::Present);
        assert_eq!(hints[&'r'], LetterScore::Absent);
        assert!(!hints.contains_key(&'z'));
    }

    #[test]
    fn share_text_lists_rows() {
        let mut s = session("apple", 6);
        s.submit_guess("alert", &accept_all).unwrap();
        s.submit_guess("apple", &accept_all).unwrap();
        assert_eq!(s.share_text(), "2024-01-01 2/6\n🟩🟨🟨⬜⬜\n🟩🟩🟩🟩🟩");

        let mut s = session("apple", 1);
        s.submit_guess("table", &accept_all).unwrap();
        assert!(s.share_text().starts_with("2024-01-01 X/1\n"));
    }
}
