//! # UI State and Reducer
//!
//! The single state container for a session and the pure function that
//! moves it forward. Nothing here performs I/O.

use super::action::Action;
use super::fetch_status::{FetchStatus, FETCH_ERROR_MESSAGE};
use super::route::Route;
use serde_json::Value;

/// Everything the view needs to draw a frame
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UiState {
    /// Selected resource collection
    pub route: Route,
    /// Identifier typed by the user, stored verbatim
    pub number: String,
    /// Fetch lifecycle
    pub status: FetchStatus,
    /// Generation of the most recent fetch start
    pub request: u64,
}

impl UiState {
    /// Create state with the given inputs and no fetch history
    pub fn with_inputs(route: Route, number: impl Into<String>) -> Self {
        Self {
            route,
            number: number.into(),
            ..Self::default()
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status.is_loading()
    }

    pub fn error(&self) -> &str {
        self.status.error()
    }

    pub fn data(&self) -> Option<&Value> {
        self.status.data()
    }

    /// Whether an outcome for this generation is the one still loading
    fn awaits(&self, request: u64) -> bool {
        self.status.is_loading() && request == self.request
    }
}

/// Apply an action to a state, producing the next state
///
/// Outcomes tagged with a generation other than the latest start are stale
/// and leave the state untouched, as do outcomes arriving while no fetch is
/// loading and [`Action::Unknown`].
pub fn reduce(state: &UiState, action: &Action) -> UiState {
    match action {
        Action::SetRoute(route) => UiState {
            route: *route,
            ..state.clone()
        },
        Action::SetNumber(number) => UiState {
            number: number.clone(),
            ..state.clone()
        },
        Action::FetchDataStart => UiState {
            status: FetchStatus::Loading,
            request: state.request.wrapping_add(1),
            ..state.clone()
        },
        Action::FetchDataSuccess { request, data } if state.awaits(*request) => UiState {
            status: FetchStatus::Success(data.clone()),
            ..state.clone()
        },
        Action::FetchDataError { request } if state.awaits(*request) => UiState {
            status: FetchStatus::Error(FETCH_ERROR_MESSAGE.to_string()),
            ..state.clone()
        },
        Action::FetchDataSuccess { request, .. } | Action::FetchDataError { request } => {
            tracing::debug!(
                "Discarding stale {} for request {} (latest is {}, {})",
                action.type_name(),
                request,
                state.request,
                state.status.name()
            );
            state.clone()
        }
        Action::Unknown => state.clone(),
    }
}
