//! # Controllers Module
//!
//! The interactive event loop and the headless entry points.

pub mod app_controller;
pub mod headless;

// Re-export main types for convenience
pub use app_controller::AppController;
pub use headless::{replay_journal, run_once};
