//! # View Models
//!
//! The view model owns the session state, funnels every change through the
//! reducer, and keeps the derived display data the view needs.

pub mod core;

pub use self::core::{FetchTicket, ViewModel, FRAME_CHROME_ROWS};
