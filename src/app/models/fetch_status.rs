//! # Fetch Status Model
//!
//! Lifecycle of a single fetch as seen by the UI: nothing requested yet,
//! waiting on the network, showing data, or showing the failure message.

use serde_json::Value;

/// The only message ever shown for a failed fetch
pub const FETCH_ERROR_MESSAGE: &str = "Error fetching data";

/// Where the current fetch stands
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Success(Value),
    Error(String),
}

impl FetchStatus {
    /// Whether a request is in flight
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchStatus::Loading)
    }

    /// Error message, empty when the last fetch did not fail
    pub fn error(&self) -> &str {
        match self {
            FetchStatus::Error(message) => message,
            _ => "",
        }
    }

    /// Payload of the last successful fetch
    pub fn data(&self) -> Option<&Value> {
        match self {
            FetchStatus::Success(data) => Some(data),
            _ => None,
        }
    }

    /// Short name for logs and the status line
    pub fn name(&self) -> &'static str {
        match self {
            FetchStatus::Idle => "idle",
            FetchStatus::Loading => "loading",
            FetchStatus::Success(_) => "success",
            FetchStatus::Error(_) => "error",
        }
    }
}
