//! # Fetch Command

use super::{Command, CommandContext, CommandEvent};
use crate::app::events::Focus;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Trigger a fetch (Enter anywhere, `f` outside the number field)
///
/// A fetch may be triggered while another is still loading; the newer one
/// wins.
pub struct FetchCommand;

impl Command for FetchCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        match event.code {
            KeyCode::Enter => true,
            KeyCode::Char('f') => {
                context.state.focus != Focus::Number && event.modifiers.is_empty()
            }
            _ => false,
        }
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::FetchRequested])
    }

    fn name(&self) -> &'static str {
        "Fetch"
    }
}
