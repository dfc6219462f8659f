//! # Number Field Commands
//!
//! Text entry for the resource identifier. Input is stored as typed; nothing
//! checks that it is numeric.

use super::{Command, CommandContext, CommandEvent};
use crate::app::events::Focus;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Append a typed character to the number field
pub struct NumberInputCommand;

impl Command for NumberInputCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.state.focus == Focus::Number
            && matches!(event.code, KeyCode::Char(_))
            && !event
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    }

    fn execute(&self, event: KeyEvent, context: &CommandContext) -> Result<Vec<CommandEvent>> {
        let KeyCode::Char(ch) = event.code else {
            return Ok(Vec::new());
        };

        let mut number = context.state.number.clone();
        number.push(ch);
        Ok(vec![CommandEvent::NumberEditRequested { number }])
    }

    fn name(&self) -> &'static str {
        "NumberInput"
    }
}

/// Remove the last character of the number field
pub struct NumberBackspaceCommand;

impl Command for NumberBackspaceCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.state.focus == Focus::Number && event.code == KeyCode::Backspace
    }

    fn execute(&self, _event: KeyEvent, context: &CommandContext) -> Result<Vec<CommandEvent>> {
        if context.state.number.is_empty() {
            return Ok(Vec::new());
        }

        let mut number = context.state.number.clone();
        number.pop();
        Ok(vec![CommandEvent::NumberEditRequested { number }])
    }

    fn name(&self) -> &'static str {
        "NumberBackspace"
    }
}
