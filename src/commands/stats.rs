//! Statistics command

use crate::history::{HistoryStore, Statistics, StreakLedger};
use crate::output::print_statistics;
use chrono::NaiveDate;

/// Summarize the ledger as of `today` and print it
pub fn run_stats<S: HistoryStore>(
    ledger: &StreakLedger<S>,
    today: NaiveDate,
    max_tries: usize,
) -> Statistics {
    let stats = Statistics::from_records(ledger.records(), today, max_tries);
    print_statistics(&stats);
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::{HistoryRecord, MemoryStore};

    #[test]
    fn summarizes_ledger_records() {
        let day = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
        let ledger = StreakLedger::open(MemoryStore::with_records(vec![
            HistoryRecord::finished(day(1), "apple", 2, true, 1),
            HistoryRecord::finished(day(2), "table", 5, true, 2),
        ]));

        let stats = run_stats(&ledger, day(2), 6);
        assert_eq!(stats.played, 2);
        assert_eq!(stats.current_streak, 2);
        assert_eq!(stats.distribution, vec![0, 1, 0, 0, 1, 0]);
    }
}
