//! Daily game orchestration
//!
//! Ties the engine to the ledger: picks or restores today's word, replays any
//! guesses saved earlier in the day, and persists after every accepted guess.
//! Both front ends drive the game through [`DailyGame`].

use crate::config::GameConfig;
use crate::core::{Guess, Word};
use crate::error::GameError;
use crate::game::{GameSession, Outcome, Rejection, select_word};
use crate::history::{HistoryStore, StreakLedger};
use crate::wordlists::WordList;
use tracing::{info, warn};

/// Result of an accepted guess
#[derive(Debug)]
pub struct Submission {
    pub guess: Guess,
    pub state: Outcome,
    /// Streak recorded when the guess ended the game
    pub streak: Option<u32>,
    /// Set when the history could not be saved; the game itself is unaffected
    pub save_error: Option<GameError>,
}

/// Today's game plus its history
#[derive(Debug)]
pub struct DailyGame<S: HistoryStore> {
    session: GameSession,
    ledger: StreakLedger<S>,
    allowed: WordList,
    already_played: bool,
}

impl<S: HistoryStore> DailyGame<S> {
    /// Start or resume the game for `config.date`
    ///
    /// A stored record for the day fixes the secret word and supplies the
    /// guesses to replay. A replay that ends the game is recorded as that
    /// day's result.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidInput` if the answer list is empty or the
    /// configuration is invalid.
    pub fn start(
        config: &GameConfig,
        answers: &WordList,
        allowed: WordList,
        mut ledger: StreakLedger<S>,
    ) -> Result<Self, GameError> {
        config.validate()?;

        let stored = ledger.record_for(config.date);
        let stored_secret = stored.and_then(|r| Word::new(&r.word).ok());
        let previous: Vec<String> = stored.map(|r| r.guesses.clone()).unwrap_or_default();

        let secret = match stored_secret {
            Some(word) => word,
            None => select_word(answers.words(), config.date)?.clone(),
        };

        let session = GameSession::resume(
            secret,
            config.date,
            config.max_tries,
            config.rules,
            &previous,
        )?;

        // Replay can end the game, e.g. when max_tries shrank since the last run
        if session.is_over() && !ledger.has_played_today(config.date) {
            match ledger.record_session(&session) {
                Ok(streak) => {
                    info!(date = %config.date, streak, "recorded game finished by replay");
                }
                Err(err) => warn!(%err, "history not saved"),
            }
        }
        let already_played = ledger.has_played_today(config.date);

        info!(
            date = %config.date,
            rules = config.rules.name(),
            resumed = !previous.is_empty(),
            already_played,
            "daily game ready"
        );

        Ok(Self {
            session,
            ledger,
            allowed,
            already_played,
        })
    }

    /// Submit a guess and persist the new state
    ///
    /// # Errors
    ///
    /// Returns a [`Rejection`] if the guess is refused, including when today's
    /// game was already finished in an earlier run.
    pub fn submit(&mut self, text: &str) -> Result<Submission, Rejection> {
        if self.already_played {
            return Err(Rejection::GameOver);
        }

        let guess = self.session.submit_guess(text, &self.allowed)?.clone();
        let state = self.session.state();

        let (streak, save_result) = if state.is_terminal() {
            match self.ledger.record_session(&self.session) {
                Ok(streak) => (Some(streak), Ok(())),
                Err(err) => (None, Err(err)),
            }
        } else {
            (None, self.ledger.record_progress(&self.session))
        };

        let save_error = save_result.err();
        if let Some(err) = &save_error {
            warn!(%err, "history not saved");
        }

        Ok(Submission {
            guess,
            state,
            streak,
            save_error,
        })
    }

    #[must_use]
    pub const fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub const fn ledger(&self) -> &StreakLedger<S> {
        &self.ledger
    }

    /// Whether today's game is over, in this run or an earlier one
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.already_played || self.session.is_over()
    }

    /// Whether the day was finished before this run started
    #[must_use]
    pub const fn finished_earlier(&self) -> bool {
        self.already_played
    }

    /// Streak as of the game's date
    #[must_use]
    pub fn streak(&self) -> u32 {
        self.ledger.current_streak(self.session.date())
    }

    /// Whether today was won
    #[must_use]
    pub fn won(&self) -> bool {
        match self.session.state() {
            Outcome::Win => true,
            Outcome::Lose => false,
            Outcome::Playing => self
                .ledger
                .record_for(self.session.date())
                .is_some_and(|r| r.finished && r.won),
        }
    }
}
