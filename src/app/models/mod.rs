//! # Models
//!
//! Plain data and the pure state transitions over it.

pub mod action;
pub mod fetch_status;
pub mod route;
pub mod ui_state;

pub use action::{Action, KNOWN_ACTION_TYPES};
pub use fetch_status::{FetchStatus, FETCH_ERROR_MESSAGE};
pub use route::Route;
pub use ui_state::{reduce, UiState};
