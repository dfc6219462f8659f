//! # Headless Runs
//!
//! Paths that never take over the terminal: a single fetch printed as JSON
//! (`--once`, or whenever stdout is not a terminal) and journal replay.

use crate::app::models::UiState;
use crate::app::services::{read_journal, replay, ActionJournal, FetchService};
use crate::app::view_models::ViewModel;
use crate::app::views::compose_report;
use crate::config::Settings;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

/// Fetch once with the configured inputs and write the pretty JSON to `out`
///
/// The fetch goes through the same actions and reducer as the interactive
/// session, so a journal records it too. Returns the final state; on failure
/// nothing is written and the state carries the error message.
pub async fn run_once<W: Write>(
    settings: &Settings,
    journal: Option<ActionJournal>,
    out: &mut W,
) -> Result<UiState> {
    let mut view_model = ViewModel::with_state(UiState::default());
    view_model.set_base_url(settings.base_url.clone());
    if let Some(journal) = journal {
        view_model.set_journal(journal);
    }

    view_model.seed_inputs(settings.route, &settings.number);

    let mut fetch_service = FetchService::new(settings.base_url.clone())?;
    let ticket = view_model.begin_fetch();
    tracing::info!("Fetching {}", view_model.request_url());
    fetch_service.execute_async(ticket.request, ticket.route, &ticket.number);

    let message = fetch_service
        .next_response()
        .await
        .context("Fetch task ended without a response")?;
    view_model.dispatch(message.into_action());

    let state = view_model.state().clone();
    if let Some(data) = state.data() {
        writeln!(out, "{}", serde_json::to_string_pretty(data)?)?;
        out.flush()?;
    }
    Ok(state)
}

/// Fold a journal through the reducer and write a report of the final state
pub fn replay_journal<W: Write>(path: &Path, out: &mut W) -> Result<UiState> {
    let actions = read_journal(path)?;
    tracing::info!("Replaying {} actions from {}", actions.len(), path.display());

    let state = replay(UiState::default(), &actions);
    out.write_all(compose_report(&state).as_bytes())?;
    out.flush()?;
    Ok(state)
}
