//! # Command Pattern Infrastructure
//!
//! Commands map key presses to semantic [`CommandEvent`]s. Each command
//! decides on its own whether a key is meant for it (`is_relevant`) and the
//! registry runs the first one that says yes. Commands never touch the view
//! model; the controller applies the events they return.

use crate::app::events::Focus;
use crate::app::models::Route;
use crate::app::view_models::ViewModel;
use anyhow::Result;
use crossterm::event::{KeyEvent, KeyEventKind};

pub mod app;
pub mod fetch;
pub mod focus;
pub mod number;
pub mod route;
pub mod scroll;

pub use app::QuitCommand;
pub use fetch::FetchCommand;
pub use focus::{FocusNextCommand, FocusPreviousCommand};
pub use number::{NumberBackspaceCommand, NumberInputCommand};
pub use route::{NextRouteCommand, PreviousRouteCommand};
pub use scroll::ScrollDataCommand;

/// Semantic events produced by commands
#[derive(Debug, Clone, PartialEq)]
pub enum CommandEvent {
    FocusChangeRequested { focus: Focus },
    RouteSelectRequested { route: Route },
    NumberEditRequested { number: String },
    FetchRequested,
    DataScrollRequested { delta: isize },
    QuitRequested,
}

/// Read-only snapshot of ViewModel state for commands
#[derive(Debug, Clone)]
pub struct ViewModelSnapshot {
    pub focus: Focus,
    pub route: Route,
    pub number: String,
    pub data_page_size: usize,
}

impl ViewModelSnapshot {
    pub fn from_view_model(view_model: &ViewModel) -> Self {
        Self {
            focus: view_model.focus(),
            route: view_model.state().route,
            number: view_model.state().number.clone(),
            data_page_size: view_model.data_page_size(),
        }
    }
}

/// Context handed to every command
pub struct CommandContext {
    pub state: ViewModelSnapshot,
}

impl CommandContext {
    pub fn new(state: ViewModelSnapshot) -> Self {
        Self { state }
    }
}

/// A key binding together with the events it produces
pub trait Command: Send + Sync {
    /// Whether this command handles the key in the current context
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool;

    /// Produce the events for the key
    fn execute(&self, event: KeyEvent, context: &CommandContext) -> Result<Vec<CommandEvent>>;

    /// Command name for debugging
    fn name(&self) -> &'static str;
}

/// Registry of all commands, consulted in registration order
pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
}

impl CommandRegistry {
    /// Create a registry with the default key bindings
    pub fn new() -> Self {
        let mut registry = Self {
            commands: Vec::new(),
        };

        // Quit goes first so Ctrl+C always wins; text entry before the
        // single letter shortcuts so typing into the number field is literal.
        registry.add_command(Box::new(QuitCommand));
        registry.add_command(Box::new(NumberInputCommand));
        registry.add_command(Box::new(NumberBackspaceCommand));
        registry.add_command(Box::new(FocusNextCommand));
        registry.add_command(Box::new(FocusPreviousCommand));
        registry.add_command(Box::new(NextRouteCommand));
        registry.add_command(Box::new(PreviousRouteCommand));
        registry.add_command(Box::new(FetchCommand));
        registry.add_command(Box::new(ScrollDataCommand));

        registry
    }

    pub fn add_command(&mut self, command: Box<dyn Command>) {
        self.commands.push(command);
    }

    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Run the first relevant command for a key event
    ///
    /// Key releases and unbound keys produce no events.
    pub fn process_event(
        &self,
        event: KeyEvent,
        context: &CommandContext,
    ) -> Result<Vec<CommandEvent>> {
        if event.kind == KeyEventKind::Release {
            return Ok(Vec::new());
        }

        match self
            .commands
            .iter()
            .find(|command| command.is_relevant(context, &event))
        {
            Some(command) => {
                tracing::debug!("Key {:?} handled by {}", event.code, command.name());
                command.execute(event, context)
            }
            None => {
                tracing::trace!("No command bound to {:?}", event.code);
                Ok(Vec::new())
            }
        }
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
