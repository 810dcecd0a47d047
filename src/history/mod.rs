//! Persistent daily history
//!
//! Records one outcome per calendar day and derives streaks and statistics
//! from them.

mod ledger;
mod record;
mod stats;
mod store;

pub use ledger::StreakLedger;
pub use record::HistoryRecord;
pub use stats::Statistics;
pub use store::{HistoryStore, JsonFileStore, MemoryStore};
