//! Daily word selection
//!
//! The secret word is a pure function of the calendar date and the word list.
//! The date is turned into a seed with [`date_to_seed`] and fed to a seeded
//! `StdRng`, so every run picks the same word on the same day.

use crate::core::Word;
use crate::error::GameError;
use chrono::{NaiveDate, NaiveTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Today's calendar date in UTC
///
/// This is the only place the wall clock is read; everything downstream takes
/// an explicit date.
#[must_use]
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// Seed for a calendar date: Unix seconds of UTC midnight on that day
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use wordle_daily::game::date_to_seed;
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// assert_eq!(date_to_seed(date), 1_704_067_200);
/// ```
#[must_use]
pub fn date_to_seed(date: NaiveDate) -> u64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp() as u64
}

/// Index into a list of `len` words for `date`
///
/// # Errors
///
/// Returns `GameError::InvalidInput` if `len` is zero.
pub fn select_index(len: usize, date: NaiveDate) -> Result<usize, GameError> {
    if len == 0 {
        return Err(GameError::invalid_input("word list is empty"));
    }

    let mut rng = StdRng::seed_from_u64(date_to_seed(date));
    Ok(rng.random_range(0..len))
}

/// Pick the secret word for `date`
///
/// # Errors
///
/// Returns `GameError::InvalidInput` if `words` is empty.
pub fn select_word(words: &[Word], date: NaiveDate) -> Result<&Word, GameError> {
    let index = select_index(words.len(), date)?;
    debug!(%date, index, pool = words.len(), "selected daily word");
    Ok(&words[index])
}
