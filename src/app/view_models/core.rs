//! # Core ViewModel
//!
//! Central coordinator between input commands, the reducer and the view.

use crate::app::events::{Focus, ViewEvent};
use crate::app::models::{reduce, Action, Route, UiState};
use crate::app::services::{build_url, ActionJournal, DEFAULT_BASE_URL};

/// Rows of a frame that are not data lines (form, blank lines, data title, footer)
pub const FRAME_CHROME_ROWS: usize = 8;

/// What a fetch needs once `FETCH_DATA_START` has been dispatched
#[derive(Debug, Clone, PartialEq)]
pub struct FetchTicket {
    pub request: u64,
    pub route: Route,
    pub number: String,
}

/// Session view model
pub struct ViewModel {
    state: UiState,
    focus: Focus,
    base_url: String,
    /// Pretty printed lines of the current data, rebuilt when the status changes
    data_lines: Vec<String>,
    data_scroll: usize,
    terminal_size: (u16, u16),
    pending_view_events: Vec<ViewEvent>,
    journal: Option<ActionJournal>,
}

impl ViewModel {
    pub fn new() -> Self {
        Self::with_state(UiState::default())
    }

    /// Create a view model starting from a given state
    pub fn with_state(state: UiState) -> Self {
        let mut view_model = Self {
            state,
            focus: Focus::default(),
            base_url: DEFAULT_BASE_URL.to_string(),
            data_lines: Vec::new(),
            data_scroll: 0,
            terminal_size: (80, 24),
            pending_view_events: Vec::new(),
            journal: None,
        };
        view_model.rebuild_data_lines();
        view_model
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: Focus) {
        if self.focus != focus {
            tracing::debug!("Focus {:?} -> {:?}", self.focus, focus);
            self.focus = focus;
            self.emit_view_event(ViewEvent::FrameUpdateRequired);
        }
    }

    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.base_url = base_url.into();
    }

    /// URL the next fetch would hit
    pub fn request_url(&self) -> String {
        build_url(&self.base_url, self.state.route, &self.state.number)
    }

    /// Record every dispatched action to a journal
    pub fn set_journal(&mut self, journal: ActionJournal) {
        self.journal = Some(journal);
    }

    /// Run an action through the reducer
    pub fn dispatch(&mut self, action: Action) {
        if let Some(journal) = self.journal.as_mut() {
            if let Err(e) = journal.record(&action) {
                tracing::warn!("Failed to journal {}: {}", action.type_name(), e);
            }
        }

        let next = reduce(&self.state, &action);
        if next == self.state {
            tracing::trace!("{} left state unchanged", action.type_name());
            return;
        }

        tracing::debug!(
            "{}: status {} -> {}, request {}",
            action.type_name(),
            self.state.status.name(),
            next.status.name(),
            next.request
        );

        let status_changed = next.status != self.state.status;
        self.state = next;
        if status_changed {
            self.rebuild_data_lines();
        }
        self.emit_view_event(ViewEvent::FrameUpdateRequired);
    }

    pub fn select_route(&mut self, route: Route) {
        self.dispatch(Action::SetRoute(route));
    }

    pub fn set_number(&mut self, number: impl Into<String>) {
        self.dispatch(Action::SetNumber(number.into()));
    }

    /// Move the inputs to their startup values through the reducer
    ///
    /// Only values differing from the current state are dispatched, so a
    /// journal attached beforehand replays from the default state.
    pub fn seed_inputs(&mut self, route: Route, number: &str) {
        if route != self.state.route {
            self.select_route(route);
        }
        if number != self.state.number {
            self.set_number(number);
        }
    }

    /// Dispatch `FETCH_DATA_START` and hand back what the fetch needs
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.dispatch(Action::FetchDataStart);
        FetchTicket {
            request: self.state.request,
            route: self.state.route,
            number: self.state.number.clone(),
        }
    }

    fn rebuild_data_lines(&mut self) {
        self.data_lines = match self.state.data() {
            Some(data) => serde_json::to_string_pretty(data)
                .unwrap_or_else(|_| data.to_string())
                .lines()
                .map(str::to_string)
                .collect(),
            None => Vec::new(),
        };
        self.data_scroll = 0;
    }

    pub fn data_lines(&self) -> &[String] {
        &self.data_lines
    }

    pub fn data_scroll(&self) -> usize {
        self.data_scroll
    }

    /// Number of data lines visible at once
    pub fn data_page_size(&self) -> usize {
        (self.terminal_size.1 as usize)
            .saturating_sub(FRAME_CHROME_ROWS)
            .max(1)
    }

    /// Scroll the data panel, clamped so the last page stays full
    pub fn scroll_data(&mut self, delta: isize) {
        let max_scroll = self.data_lines.len().saturating_sub(self.data_page_size());
        let new_scroll = self
            .data_scroll
            .saturating_add_signed(delta)
            .min(max_scroll);

        if new_scroll != self.data_scroll {
            tracing::trace!("Data scroll {} -> {}", self.data_scroll, new_scroll);
            self.data_scroll = new_scroll;
            self.emit_view_event(ViewEvent::FrameUpdateRequired);
        }
    }

    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    pub fn update_terminal_size(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
        // Re-clamp the scroll offset for the new page size
        self.scroll_data(0);
        self.emit_view_event(ViewEvent::FullRedrawRequired);
    }

    pub fn emit_view_event(&mut self, event: ViewEvent) {
        if !self.pending_view_events.contains(&event) {
            self.pending_view_events.push(event);
        }
    }

    /// Take the view events accumulated since the last call
    pub fn collect_pending_view_events(&mut self) -> Vec<ViewEvent> {
        std::mem::take(&mut self.pending_view_events)
    }
}

impl Default for ViewModel {
    fn default() -> Self {
        Self::new()
    }
}
