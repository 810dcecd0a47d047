//! Command implementations

pub mod daily;
pub mod simple;
pub mod stats;

pub use daily::{DailyGame, Submission};
pub use simple::run_simple;
pub use stats::run_stats;
