//! # Action Journal
//!
//! Records every dispatched action as one JSON line so a session can be
//! inspected or replayed through the reducer later.

use crate::app::models::{reduce, Action, UiState};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

/// One journal line
#[derive(Debug, Serialize, Deserialize)]
struct JournalEntry {
    at: DateTime<Utc>,
    action: Value,
}

/// Append-only writer of dispatched actions
pub struct ActionJournal {
    file: File,
}

impl ActionJournal {
    /// Open (or create) a journal file for appending
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open journal '{}'", path.display()))?;

        tracing::debug!("Recording actions to {}", path.display());
        Ok(Self { file })
    }

    /// Append an action
    pub fn record(&mut self, action: &Action) -> Result<()> {
        let entry = JournalEntry {
            at: Utc::now(),
            action: serde_json::to_value(action)?,
        };
        let mut line = serde_json::to_string(&entry)?;
        line.push('\n');
        self.file.write_all(line.as_bytes())?;
        self.file.flush()?;
        Ok(())
    }
}

/// Read back the actions of a journal file
///
/// Lines that are not valid entries are skipped with a warning; unknown
/// action types come back as [`Action::Unknown`].
pub fn read_journal(path: impl AsRef<Path>) -> Result<Vec<Action>> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open journal '{}'", path.display()))?;

    let mut actions = Vec::new();
    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let decoded = serde_json::from_str::<JournalEntry>(&line)
            .map_err(anyhow::Error::from)
            .and_then(|entry| Action::from_json(entry.action));

        match decoded {
            Ok(action) => actions.push(action),
            Err(e) => tracing::warn!("Skipping journal line {}: {}", index + 1, e),
        }
    }

    tracing::debug!("Read {} actions from {}", actions.len(), path.display());
    Ok(actions)
}

/// Fold actions through the reducer
pub fn replay<'a>(initial: UiState, actions: impl IntoIterator<Item = &'a Action>) -> UiState {
    actions
        .into_iter()
        .fold(initial, |state, action| reduce(&state, action))
}
