//! # Application
//!
//! MVVM layout:
//! - `models`: state, actions and the reducer
//! - `services`: the outbound fetch and the action journal
//! - `view_models`: session state plus derived display data
//! - `views`: frame composition and terminal painting
//! - `commands`: key bindings producing command events
//! - `controllers`: event loop and headless runs
//! - `io`: terminal input/output abstractions

pub mod commands;
pub mod controllers;
pub mod events;
pub mod io;
pub mod models;
pub mod services;
pub mod view_models;
pub mod views;

// Re-export core types
pub use controllers::{replay_journal, run_once, AppController};
pub use events::{Focus, ViewEvent};
pub use io::{EventStream, RenderStream, TerminalEventStream, TerminalRenderStream};
pub use models::{reduce, Action, FetchStatus, Route, UiState};
pub use view_models::ViewModel;
