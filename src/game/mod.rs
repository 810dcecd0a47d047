//! Daily game engine
//!
//! Date-seeded word selection and the per-day session state machine.

mod selector;
mod session;

pub use selector::{date_to_seed, select_index, select_word, today_utc};
pub use session::{DEFAULT_MAX_TRIES, GameSession, Outcome, Rejection};
