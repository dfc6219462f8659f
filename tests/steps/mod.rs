//! Step definitions for Cucumber tests
//!
//! - `application` - API mocks and application startup
//! - `input` - key presses and typing
//! - `fetch` - waiting for fetches and checking the state
//! - `screen` - what the terminal shows

pub mod application;
pub mod fetch;
pub mod input;
pub mod screen;
