//! # Focus Commands
//!
//! Moving between the route selector, the number field and the fetch button.

use super::{Command, CommandContext, CommandEvent};
use crate::app::events::Focus;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Move focus forward (Tab, or Esc to leave the number field)
pub struct FocusNextCommand;

impl Command for FocusNextCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        match event.code {
            KeyCode::Tab => true,
            KeyCode::Esc => context.state.focus == Focus::Number,
            _ => false,
        }
    }

    fn execute(&self, _event: KeyEvent, context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::FocusChangeRequested {
            focus: context.state.focus.next(),
        }])
    }

    fn name(&self) -> &'static str {
        "FocusNext"
    }
}

/// Move focus backward (Shift+Tab)
pub struct FocusPreviousCommand;

impl Command for FocusPreviousCommand {
    fn is_relevant(&self, _context: &CommandContext, event: &KeyEvent) -> bool {
        matches!(event.code, KeyCode::BackTab)
    }

    fn execute(&self, _event: KeyEvent, context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::FocusChangeRequested {
            focus: context.state.focus.previous(),
        }])
    }

    fn name(&self) -> &'static str {
        "FocusPrevious"
    }
}
