//! Aggregate statistics over the history

use super::ledger::current_streak;
use super::record::HistoryRecord;
use chrono::NaiveDate;

/// Played/won totals, streaks and the winning guess distribution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub played: usize,
    pub wins: usize,
    pub current_streak: u32,
    pub max_streak: u32,
    /// `distribution[n - 1]` counts wins in `n` guesses
    pub distribution: Vec<usize>,
}

impl Statistics {
    /// Summarize finished records as of `today`
    ///
    /// Wins taking more than `max_tries` guesses (recorded under a larger
    /// limit) are counted in the last bucket.
    #[must_use]
    pub fn from_records(records: &[HistoryRecord], today: NaiveDate, max_tries: usize) -> Self {
        let mut stats = Self {
            played: 0,
            wins: 0,
            current_streak: current_streak(records, today),
            max_streak: 0,
            distribution: vec![0; max_tries.max(1)],
        };

        for record in records.iter().filter(|r| r.finished) {
            stats.played += 1;
            stats.max_streak = stats.max_streak.max(record.streak);

            if record.won && record.guess_count > 0 {
                stats.wins += 1;
                let bucket = record.guess_count.min(stats.distribution.len()) - 1;
                stats.distribution[bucket] += 1;
            }
        }

        stats
    }

    /// Percentage of finished games won, 0 when nothing has been played
    #[must_use]
    pub fn win_percentage(&self) -> f64 {
        if self.played == 0 {
            0.0
        } else {
            self.wins as f64 / self.played as f64 * 100.0
        }
    }

    /// Largest bucket of the distribution
    #[must_use]
    pub fn max_bucket(&self) -> usize {
        self.distribution.iter().copied().max().unwrap_or(0)
    }
}
