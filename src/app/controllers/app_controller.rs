//! # Application Controller
//!
//! Orchestrates the components and owns the event loop: key presses go
//! through the command registry, the resulting command events are applied
//! to the view model, finished fetches are fed back as actions, and pending
//! view events are painted.

use crate::app::{
    commands::{CommandContext, CommandEvent, CommandRegistry, ViewModelSnapshot},
    events::ViewEvent,
    io::{EventStream, RenderStream},
    models::UiState,
    services::{ActionJournal, FetchService},
    view_models::ViewModel,
    views::{TerminalRenderer, ViewRenderer},
};
use crate::config::Settings;
use anyhow::Result;
use crossterm::event::{Event, KeyEvent};
use std::time::Duration;

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// The main application controller that orchestrates the MVVM pattern
pub struct AppController<ES: EventStream, RS: RenderStream> {
    view_model: ViewModel,
    view_renderer: TerminalRenderer<RS>,
    command_registry: CommandRegistry,
    fetch_service: FetchService,
    event_stream: ES,
    should_quit: bool,
}

impl<ES: EventStream, RS: RenderStream> AppController<ES, RS> {
    /// Create new application controller with injected I/O streams
    ///
    /// The journal, when given, is attached before the startup inputs are
    /// dispatched so that replaying it reproduces the session.
    pub fn with_io_streams(
        settings: &Settings,
        journal: Option<ActionJournal>,
        event_stream: ES,
        render_stream: RS,
    ) -> Result<Self> {
        tracing::debug!("Starting with {:?}", settings);

        let mut view_model = ViewModel::with_state(UiState::default());
        view_model.set_base_url(settings.base_url.clone());
        if let Some(journal) = journal {
            view_model.set_journal(journal);
        }
        view_model.seed_inputs(settings.route, &settings.number);

        // Pass RenderStream ownership to the View layer
        let view_renderer = TerminalRenderer::with_render_stream(render_stream)?;
        let (width, height) = view_renderer.terminal_size();
        view_model.update_terminal_size(width, height);

        let fetch_service = FetchService::new(settings.base_url.clone())?;

        Ok(Self {
            view_model,
            view_renderer,
            command_registry: CommandRegistry::new(),
            fetch_service,
            event_stream,
            should_quit: false,
        })
    }

    pub fn view_model(&self) -> &ViewModel {
        &self.view_model
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Run the main application loop
    pub async fn run(&mut self) -> Result<()> {
        self.view_renderer.initialize()?;
        self.view_renderer.render_full(&self.view_model)?;
        self.view_model.collect_pending_view_events();

        let result = self.event_loop();

        // Restore the terminal even when the loop failed
        self.view_renderer.cleanup()?;
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        while !self.should_quit {
            if self.event_stream.poll(EVENT_POLL_TIMEOUT)? {
                let event = self.event_stream.read()?;
                self.handle_event(event)?;
            }
            self.process_fetch_responses();
            self.render_pending()?;
        }
        Ok(())
    }

    /// Apply one terminal event
    pub fn handle_event(&mut self, event: Event) -> Result<()> {
        match event {
            Event::Key(key_event) => self.handle_key(key_event),
            Event::Resize(width, height) => {
                tracing::debug!("Terminal resized to {}x{}", width, height);
                self.view_model.update_terminal_size(width, height);
                self.view_renderer.update_size(width, height);
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn handle_key(&mut self, key_event: KeyEvent) -> Result<()> {
        let context = CommandContext::new(ViewModelSnapshot::from_view_model(&self.view_model));

        match self.command_registry.process_event(key_event, &context) {
            Ok(events) => {
                if !events.is_empty() {
                    tracing::debug!("Command events generated: {:?}", events);
                }
                for event in events {
                    self.apply_command_event(event);
                }
            }
            Err(e) => tracing::warn!("Command failed for {:?}: {}", key_event.code, e),
        }
        Ok(())
    }

    /// Apply a command event to the view model
    fn apply_command_event(&mut self, event: CommandEvent) {
        match event {
            CommandEvent::FocusChangeRequested { focus } => self.view_model.set_focus(focus),
            CommandEvent::RouteSelectRequested { route } => self.view_model.select_route(route),
            CommandEvent::NumberEditRequested { number } => self.view_model.set_number(number),
            CommandEvent::FetchRequested => self.start_fetch(),
            CommandEvent::DataScrollRequested { delta } => self.view_model.scroll_data(delta),
            CommandEvent::QuitRequested => {
                tracing::debug!("Quit requested");
                self.should_quit = true;
            }
        }
    }

    fn start_fetch(&mut self) {
        let ticket = self.view_model.begin_fetch();
        tracing::info!(
            "Fetch #{} started for {}",
            ticket.request,
            self.view_model.request_url()
        );
        self.fetch_service
            .execute_async(ticket.request, ticket.route, &ticket.number);
    }

    /// Feed finished fetches back through the reducer; returns how many arrived
    pub fn process_fetch_responses(&mut self) -> usize {
        let mut processed = 0;
        while let Some(message) = self.fetch_service.poll_response() {
            tracing::info!("Fetch #{} finished", message.request());
            self.view_model.dispatch(message.into_action());
            processed += 1;
        }
        processed
    }

    /// Wait until no fetch is loading, applying outcomes as they arrive
    ///
    /// Returns false if the timeout elapsed first.
    pub async fn wait_for_fetch(&mut self, timeout: Duration) -> Result<bool> {
        let deadline = tokio::time::Instant::now() + timeout;
        while self.view_model.state().is_loading() {
            match tokio::time::timeout_at(deadline, self.fetch_service.next_response()).await {
                Ok(Some(message)) => self.view_model.dispatch(message.into_action()),
                Ok(None) => break,
                Err(_) => {
                    tracing::warn!("Timed out waiting for fetch #{}", self.view_model.state().request);
                    return Ok(false);
                }
            }
        }
        self.render_pending()?;
        Ok(true)
    }

    /// Paint whatever the view model asked for since the last render
    pub fn render_pending(&mut self) -> Result<()> {
        let view_events = self.view_model.collect_pending_view_events();
        if view_events.is_empty() || self.should_quit {
            return Ok(());
        }

        let event = if view_events.contains(&ViewEvent::FullRedrawRequired) {
            ViewEvent::FullRedrawRequired
        } else {
            ViewEvent::FrameUpdateRequired
        };
        self.view_renderer
            .handle_view_event(&event, &self.view_model)
    }
}
