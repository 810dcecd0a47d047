//! Streak ledger
//!
//! Keeps the day-by-day history in memory on top of a [`HistoryStore`],
//! computes streaks and writes the full history back after every change.
//!
//! Streak rules:
//! - a loss scores 0;
//! - a win scores the previous day's streak plus one when a record exists
//!   for exactly the previous calendar day;
//! - any other win scores 1.

use super::record::HistoryRecord;
use super::store::HistoryStore;
use crate::core::Evaluator;
use crate::error::GameError;
use crate::game::{GameSession, Outcome};
use chrono::NaiveDate;
use tracing::{info, warn};

/// Persisted history of daily outcomes
#[derive(Debug)]
pub struct StreakLedger<S: HistoryStore> {
    store: S,
    records: Vec<HistoryRecord>,
}

impl<S: HistoryStore> StreakLedger<S> {
    /// Open the ledger, treating an unreadable store as empty history
    #[must_use]
    pub fn open(store: S) -> Self {
        let mut ledger = Self {
            store,
            records: Vec::new(),
        };

        if let Err(err) = ledger.load() {
            warn!(%err, "starting with empty history");
        }
        ledger
    }

    /// Reload records from the store
    ///
    /// On failure the in-memory history is cleared.
    ///
    /// # Errors
    ///
    /// Returns `GameError::PersistenceUnavailable` if the store cannot be read.
    pub fn load(&mut self) -> Result<&[HistoryRecord], GameError> {
        match self.store.load() {
            Ok(records) => {
                self.records = records;
                Ok(&self.records)
            }
            Err(err) => {
                self.records.clear();
                Err(err)
            }
        }
    }

    /// All records, oldest first
    #[must_use]
    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// The record stored for `date`, finished or not
    #[must_use]
    pub fn record_for(&self, date: NaiveDate) -> Option<&HistoryRecord> {
        self.records
            .binary_search_by_key(&date, |r| r.date)
            .ok()
            .map(|i| &self.records[i])
    }

    /// Whether `date` already has a finished game
    #[must_use]
    pub fn has_played_today(&self, date: NaiveDate) -> bool {
        self.record_for(date).is_some_and(|r| r.finished)
    }

    /// Streak as of `date`
    ///
    /// Taken from the latest finished record at or before `date`; a record
    /// older than the previous day means the streak has lapsed.
    #[must_use]
    pub fn current_streak(&self, date: NaiveDate) -> u32 {
        current_streak(&self.records, date)
    }

    /// Streak a result on `date` would score
    #[must_use]
    pub fn streak_for(&self, date: NaiveDate, won: bool) -> u32 {
        if !won {
            return 0;
        }

        date.pred_opt()
            .and_then(|previous| self.record_for(previous))
            .map_or(1, |previous| previous.streak.saturating_add(1))
    }

    /// Record a finished day and persist the whole history
    ///
    /// Replaces any existing record for `date`, keeping its stored guesses.
    /// Returns the computed streak.
    ///
    /// # Errors
    ///
    /// Returns `GameError::PersistenceWriteFailed` if saving fails. The
    /// in-memory history still holds the new record.
    pub fn record_result(
        &mut self,
        date: NaiveDate,
        word: &str,
        guess_count: usize,
        won: bool,
    ) -> Result<u32, GameError> {
        let guesses = self
            .record_for(date)
            .map(|r| r.guesses.clone())
            .unwrap_or_default();
        self.record_finished(date, word, guess_count, won, guesses)
    }

    /// Record a finished session, including its guesses
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidInput` if the session is still being played,
    /// or `GameError::PersistenceWriteFailed` if saving fails.
    pub fn record_session<E: Evaluator>(
        &mut self,
        session: &GameSession<E>,
    ) -> Result<u32, GameError> {
        if !session.is_over() {
            return Err(GameError::invalid_input("session is still in progress"));
        }

        self.record_finished(
            session.date(),
            session.secret().text(),
            session.guesses().len(),
            session.state() == Outcome::Win,
            session.guess_texts(),
        )
    }

    /// Save an unfinished session so it can be resumed
    ///
    /// Finished sessions are recorded as results instead. A finished record
    /// for the same date is never overwritten by progress.
    ///
    /// # Errors
    ///
    /// Returns `GameError::PersistenceWriteFailed` if saving fails.
    pub fn record_progress<E: Evaluator>(
        &mut self,
        session: &GameSession<E>,
    ) -> Result<(), GameError> {
        if session.is_over() {
            return self.record_session(session).map(|_| ());
        }
        if self.has_played_today(session.date()) {
            return Ok(());
        }

        self.upsert(HistoryRecord {
            date: session.date(),
            word: session.secret().text().to_string(),
            guess_count: session.guesses().len(),
            won: false,
            streak: 0,
            guesses: session.guess_texts(),
            finished: false,
        });
        self.persist()
    }

    fn record_finished(
        &mut self,
        date: NaiveDate,
        word: &str,
        guess_count: usize,
        won: bool,
        guesses: Vec<String>,
    ) -> Result<u32, GameError> {
        let streak = self.streak_for(date, won);
        info!(%date, word, guess_count, won, streak, "recording result");

        self.upsert(HistoryRecord {
            date,
            word: word.to_string(),
            guess_count,
            won,
            streak,
            guesses,
            finished: true,
        });
        self.persist()?;
        Ok(streak)
    }

    /// Insert or replace the record for its date, keeping date order
    fn upsert(&mut self, record: HistoryRecord) {
        match self.records.binary_search_by_key(&record.date, |r| r.date) {
            Ok(i) => self.records[i] = record,
            Err(i) => self.records.insert(i, record),
        }
    }

    fn persist(&mut self) -> Result<(), GameError> {
        self.store.save(&self.records)
    }
}

/// Streak of the latest finished record at or before `date`
pub(crate) fn current_streak(records: &[HistoryRecord], date: NaiveDate) -> u32 {
    let Some(latest) = records
        .iter()
        .rev()
        .find(|r| r.finished && r.date <= date)
    else {
        return 0;
    };

    let lapsed = date
        .pred_opt()
        .is_some_and(|previous| latest.date < previous);
    if lapsed { 0 } else { latest.streak }
}
