//! History persistence
//!
//! [`HistoryStore`] is the seam between the ledger and the storage format.
//! [`JsonFileStore`] keeps the full history as one JSON array and rewrites it
//! atomically on every save; [`MemoryStore`] keeps it in memory.

use super::record::{HistoryRecord, StoredRecord};
use crate::error::GameError;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Load and save the complete history
pub trait HistoryStore {
    /// Read every record, ordered by date ascending
    ///
    /// # Errors
    ///
    /// Returns `GameError::PersistenceUnavailable` if the store is missing or
    /// unreadable.
    fn load(&self) -> Result<Vec<HistoryRecord>, GameError>;

    /// Replace the stored history with `records`
    ///
    /// # Errors
    ///
    /// Returns `GameError::PersistenceWriteFailed` if the write fails.
    fn save(&mut self, records: &[HistoryRecord]) -> Result<(), GameError>;
}

/// History kept in a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the history file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn unavailable(&self, reason: impl ToString) -> GameError {
        GameError::PersistenceUnavailable {
            path: self.path.clone(),
            reason: reason.to_string(),
        }
    }

    fn write_failed(&self, reason: impl ToString) -> GameError {
        GameError::PersistenceWriteFailed {
            path: self.path.clone(),
            reason: reason.to_string(),
        }
    }
}

impl HistoryStore for JsonFileStore {
    fn load(&self) -> Result<Vec<HistoryRecord>, GameError> {
        let content = fs::read_to_string(&self.path).map_err(|e| self.unavailable(e))?;
        let stored: Vec<StoredRecord> =
            serde_json::from_str(&content).map_err(|e| self.unavailable(e))?;

        let mut records = Vec::with_capacity(stored.len());
        for entry in stored {
            match HistoryRecord::try_from(entry) {
                Ok(record) => records.push(record),
                Err(err) => warn!(path = %self.path.display(), %err, "skipping history record"),
            }
        }

        debug!(path = %self.path.display(), count = records.len(), "loaded history");
        Ok(normalize(records))
    }

    fn save(&mut self, records: &[HistoryRecord]) -> Result<(), GameError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| self.write_failed(e))?;
        }

        let stored: Vec<StoredRecord> = records.iter().map(StoredRecord::from).collect();
        let json = serde_json::to_string_pretty(&stored).map_err(|e| self.write_failed(e))?;

        // Write to a sibling temp file, then rename over the target
        let tmp_path = self.path.with_extension("json.tmp");
        let mut tmp_file = File::create(&tmp_path).map_err(|e| self.write_failed(e))?;
        tmp_file
            .write_all(json.as_bytes())
            .map_err(|e| self.write_failed(e))?;
        tmp_file.sync_all().map_err(|e| self.write_failed(e))?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path).map_err(|e| self.write_failed(e))?;

        debug!(path = %self.path.display(), count = records.len(), "saved history");
        Ok(())
    }
}

/// History kept in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Vec<HistoryRecord>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_records(records: Vec<HistoryRecord>) -> Self {
        Self {
            records: normalize(records),
        }
    }

    #[must_use]
    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }
}

impl HistoryStore for MemoryStore {
    fn load(&self) -> Result<Vec<HistoryRecord>, GameError> {
        Ok(self.records.clone())
    }

    fn save(&mut self, records: &[HistoryRecord]) -> Result<(), GameError> {
        self.records = records.to_vec();
        Ok(())
    }
}

/// Sort by date and keep only the last record for each date
fn normalize(mut records: Vec<HistoryRecord>) -> Vec<HistoryRecord> {
    // Stable sort keeps file order among equal dates
    records.sort_by_key(|r| r.date);

    let mut unique: Vec<HistoryRecord> = Vec::with_capacity(records.len());
    for record in records {
        match unique.last_mut() {
            Some(last) if last.date == record.date => *last = record,
            _ => unique.push(record),
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn sample() -> Vec<HistoryRecord> {
        let mut in_progress = HistoryRecord::finished(date(3), "table", 2, false, 0);
        in_progress.finished = false;
        in_progress.guesses = vec!["alert".to_string(), "hello".to_string()];

        vec![
            HistoryRecord::finished(date(1), "apple", 3, true, 1),
            HistoryRecord::finished(date(2), "globe", 6, false, 0),
            in_progress,
        ]
    }

    #[test]
    fn round_trip_preserves_every_field() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("history.json"));

        store.save(&sample()).unwrap();
        assert_eq!(store.load().unwrap(), sample());
    }

    #[test]
    fn save_creates_parent_directories_and_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("history.json");
        let mut store = JsonFileStore::new(&path);

        store.save(&sample()).unwrap();
        store.save(&sample()[..1]).unwrap();

        assert_eq!(store.load().unwrap().len(), 1);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn missing_file_is_unavailable() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("absent.json"));

        assert!(matches!(
            store.load(),
            Err(GameError::PersistenceUnavailable { .. })
        ));
    }

    #[test]
    fn corrupt_file_is_unavailable() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            JsonFileStore::new(&path).load(),
            Err(GameError::PersistenceUnavailable { .. })
        ));
    }

    #[test]
    fn bad_dates_are_skipped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.json");
        fs::write(
            &path,
            r#"[
                {"date":"2024-01-01","word":"apple","guessCount":3,"won":true,"streak":1},
                {"date":"yesterday","word":"table","guessCount":2,"won":true,"streak":2}
            ]"#,
        )
        .unwrap();

        let records = JsonFileStore::new(&path).load().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].word, "apple");
    }

    #[test]
    fn load_sorts_and_deduplicates_dates() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.json");
        fs::write(
            &path,
            r#"[
                {"date":"2024-01-02","word":"table","guessCount":2,"won":true,"streak":2},
                {"date":"2024-01-01","word":"apple","guessCount":3,"won":true,"streak":1},
                {"date":"2024-01-02","word":"table","guessCount":4,"won":true,"streak":2}
            ]"#,
        )
        .unwrap();

        let records = JsonFileStore::new(&path).load().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].date, date(1));
        assert_eq!(records[1].guess_count, 4);
    }

    #[test]
    fn write_failure_is_reported() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("not_a_dir");
        fs::write(&blocker, "").unwrap();
        let mut store = JsonFileStore::new(blocker.join("history.json"));

        assert!(matches!(
            store.save(&sample()),
            Err(GameError::PersistenceWriteFailed { .. })
        ));
    }

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert!(store.load().unwrap().is_empty());

        store.save(&sample()).unwrap();
        assert_eq!(store.load().unwrap(), sample());
        assert_eq!(store.records().len(), 3);
    }
}
