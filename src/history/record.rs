//! Persisted daily outcome
//!
//! On disk every record is a camelCase JSON object:
//!
//! ```json
//! {"date": "2024-01-01", "word": "apple", "guessCount": 3, "won": true, "streak": 2,
//!  "guesses": ["alert", "table", "apple"], "finished": true}
//! ```
//!
//! `guesses` and `finished` are optional when reading.

use crate::error::GameError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Outcome of one calendar day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRecord {
    pub date: NaiveDate,
    pub word: String,
    pub guess_count: usize,
    pub won: bool,
    /// Consecutive-win streak as of this day
    pub streak: u32,
    /// Words submitted that day, oldest first
    pub guesses: Vec<String>,
    /// False while the day is still being played
    pub finished: bool,
}

impl HistoryRecord {
    /// A completed day
    #[must_use]
    pub fn finished(
        date: NaiveDate,
        word: impl Into<String>,
        guess_count: usize,
        won: bool,
        streak: u32,
    ) -> Self {
        Self {
            date,
            word: word.into(),
            guess_count,
            won,
            streak,
            guesses: Vec::new(),
            finished: true,
        }
    }
}

/// Wire form of a record, with the date kept as text
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StoredRecord {
    date: String,
    word: String,
    guess_count: usize,
    won: bool,
    streak: u32,
    #[serde(default)]
    guesses: Vec<String>,
    #[serde(default = "default_finished")]
    finished: bool,
}

const fn default_finished() -> bool {
    true
}

impl From<&HistoryRecord> for StoredRecord {
    fn from(record: &HistoryRecord) -> Self {
        Self {
            date: record.date.format(DATE_FORMAT).to_string(),
            word: record.word.clone(),
            guess_count: record.guess_count,
            won: record.won,
            streak: record.streak,
            guesses: record.guesses.clone(),
            finished: record.finished,
        }
    }
}

impl TryFrom<StoredRecord> for HistoryRecord {
    type Error = GameError;

    fn try_from(stored: StoredRecord) -> Result<Self, Self::Error> {
        let date = NaiveDate::parse_from_str(&stored.date, DATE_FORMAT).map_err(|e| {
            GameError::DateParseError {
                value: stored.date.clone(),
                reason: e.to_string(),
            }
        })?;

        Ok(Self {
            date,
            word: stored.word,
            guess_count: stored.guess_count,
            won: stored.won,
            streak: stored.streak,
            guesses: stored.guesses,
            finished: stored.finished,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_and_iso_date() {
        let record = HistoryRecord::finished(
            NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
            "apple",
            4,
            true,
            2,
        );
        let json = serde_json::to_value(StoredRecord::from(&record)).unwrap();

        assert_eq!(json["date"], "2024-03-09");
        assert_eq!(json["word"], "apple");
        assert_eq!(json["guessCount"], 4);
        assert_eq!(json["won"], true);
        assert_eq!(json["streak"], 2);
        assert_eq!(json["finished"], true);
    }

    #[test]
    fn base_fields_only_parse_as_finished() {
        let stored: StoredRecord = serde_json::from_str(
            r#"{"date":"2024-01-01","word":"apple","guessCount":3,"won":true,"streak":1}"#,
        )
        .unwrap();
        let record = HistoryRecord::try_from(stored).unwrap();

        assert!(record.finished);
        assert!(record.guesses.is_empty());
        assert_eq!(record.guess_count, 3);
    }

    #[test]
    fn malformed_date_is_date_parse_error() {
        let stored: StoredRecord = serde_json::from_str(
            r#"{"date":"01/02/2024","word":"apple","guessCount":3,"won":true,"streak":1}"#,
        )
        .unwrap();

        let err = HistoryRecord::try_from(stored).unwrap_err();
        assert!(matches!(err, GameError::DateParseError { ref value, .. } if value == "01/02/2024"));
    }
}
