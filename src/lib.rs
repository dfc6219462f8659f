//! # Routeline - Terminal Client for JSONPlaceholder Resources
//!
//! Pick a resource route, optionally type an identifier, fetch it and read
//! the pretty printed JSON, with loading and error states.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐    Events    ┌──────────────┐   Actions    ┌──────────┐
//! │    View     │◄─────────────│  ViewModel   │─────────────▶│ Reducer  │
//! │             │              │              │◄─────────────│          │
//! │ - Frame     │              │ - UiState    │  next state  │ - pure   │
//! │ - Painting  │              │ - Journal    │              │          │
//! └─────────────┘              └──────────────┘              └──────────┘
//!                                      ▲
//!                                      │ Command events / fetch outcomes
//!                                      │
//!                               ┌──────────────┐    spawn    ┌──────────┐
//!                               │  Controller  │────────────▶│  Fetch   │
//!                               │ - Key input  │◄────────────│ Service  │
//!                               │ - Event loop │   channel   └──────────┘
//!                               └──────────────┘
//! ```

pub mod app;
pub mod cmd_args;
pub mod config;
pub mod logging;

// Re-export main types for easy access
pub use app::*;
