//! # Data Panel Scrolling

use super::{Command, CommandContext, CommandEvent};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Scroll the JSON dump (Up/Down by line, PageUp/PageDown by page)
pub struct ScrollDataCommand;

impl Command for ScrollDataCommand {
    fn is_relevant(&self, _context: &CommandContext, event: &KeyEvent) -> bool {
        matches!(
            event.code,
            KeyCode::Up | KeyCode::Down | KeyCode::PageUp | KeyCode::PageDown
        )
    }

    fn execute(&self, event: KeyEvent, context: &CommandContext) -> Result<Vec<CommandEvent>> {
        let page = context.state.data_page_size.max(1) as isize;
        let delta = match event.code {
            KeyCode::Up => -1,
            KeyCode::Down => 1,
            KeyCode::PageUp => -page,
            KeyCode::PageDown => page,
            _ => return Ok(Vec::new()),
        };
        Ok(vec![CommandEvent::DataScrollRequested { delta }])
    }

    fn name(&self) -> &'static str {
        "ScrollData"
    }
}
