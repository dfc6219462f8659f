//! # Services Layer
//!
//! Operations with side effects, kept out of the reducer:
//! - `fetch`: the outbound GET and its background delivery
//! - `journal`: recording and replaying dispatched actions

pub mod fetch;
pub mod journal;

pub use fetch::{build_url, FetchError, FetchMessage, FetchService, DEFAULT_BASE_URL};
pub use journal::{read_journal, replay, ActionJournal};
