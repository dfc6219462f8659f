//! # Actions
//!
//! Named state transitions understood by the reducer. Actions serialize as
//! `{"type": "SET_ROUTE", "payload": "todos"}` so they can be journaled and
//! replayed.

use super::route::Route;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Wire names of the actions the reducer handles
pub const KNOWN_ACTION_TYPES: [&str; 5] = [
    "SET_ROUTE",
    "SET_NUMBER",
    "FETCH_DATA_START",
    "FETCH_DATA_SUCCESS",
    "FETCH_DATA_ERROR",
];

/// A state transition request
///
/// `request` on the terminal fetch actions is the generation handed out by
/// the `FetchDataStart` that triggered the fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    SetRoute(Route),
    SetNumber(String),
    FetchDataStart,
    FetchDataSuccess { request: u64, data: Value },
    FetchDataError { request: u64 },
    #[serde(other)]
    Unknown,
}

impl Action {
    /// Wire name of this action
    pub fn type_name(&self) -> &'static str {
        match self {
            Action::SetRoute(_) => "SET_ROUTE",
            Action::SetNumber(_) => "SET_NUMBER",
            Action::FetchDataStart => "FETCH_DATA_START",
            Action::FetchDataSuccess { .. } => "FETCH_DATA_SUCCESS",
            Action::FetchDataError { .. } => "FETCH_DATA_ERROR",
            Action::Unknown => "UNKNOWN",
        }
    }

    /// Decode an action from its JSON form
    ///
    /// Any `type` the reducer does not know becomes [`Action::Unknown`],
    /// whatever its payload. A known type with a malformed payload is an error.
    pub fn from_json(value: Value) -> Result<Action> {
        let type_name = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| anyhow::anyhow!("Action is missing a string 'type' field"))?;

        if !KNOWN_ACTION_TYPES.contains(&type_name) {
            return Ok(Action::Unknown);
        }

        let type_name = type_name.to_string();
        serde_json::from_value(value)
            .map_err(|e| anyhow::anyhow!("Malformed {type_name} action: {e}"))
    }
}
