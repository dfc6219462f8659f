//! # Mock I/O Implementations for Testing
//!
//! In-memory EventStream and RenderStream. The render stream keeps a
//! character grid of what a real terminal would show, shared through a
//! [`ScreenHandle`] so tests can inspect it after handing the stream over.

use super::{EventStream, RenderStream, TerminalSize};
use anyhow::Result;
use crossterm::event::Event;
use crossterm::style::{Attribute, Color};
use std::collections::VecDeque;
use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use unicode_width::UnicodeWidthChar;

/// Mock event stream with pre-programmed events
pub struct MockEventStream {
    events: VecDeque<Event>,
}

impl MockEventStream {
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn push_event(&mut self, event: Event) {
        self.events.push_back(event);
    }
}

impl EventStream for MockEventStream {
    fn poll(&mut self, _timeout: Duration) -> Result<bool> {
        Ok(!self.events.is_empty())
    }

    fn read(&mut self) -> Result<Event> {
        self.events
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("No events available"))
    }
}

/// Recorded non-text render command
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    ClearScreen,
    ClearLine,
    MoveCursor(u16, u16),
    HideCursor,
    ShowCursor,
    SetForeground(Color),
    SetAttribute(Attribute),
    ResetStyle,
    EnterAlternateScreen,
    LeaveAlternateScreen,
    EnableRawMode,
    DisableRawMode,
    Flush,
}

/// Simulated terminal contents
#[derive(Debug)]
pub struct MockScreen {
    size: TerminalSize,
    cells: Vec<Vec<char>>,
    cursor: (u16, u16),
    commands: Vec<RenderCommand>,
    pub cursor_visible: bool,
    pub raw_mode: bool,
    pub alternate_screen: bool,
}

impl MockScreen {
    fn new(size: TerminalSize) -> Self {
        Self {
            size,
            cells: vec![vec![' '; size.0 as usize]; size.1 as usize],
            cursor: (0, 0),
            commands: Vec::new(),
            cursor_visible: true,
            raw_mode: false,
            alternate_screen: false,
        }
    }

    fn put_text(&mut self, text: &str) {
        for ch in text.chars() {
            let width = ch.width().unwrap_or(0);
            if width == 0 {
                continue;
            }
            let (x, y) = (self.cursor.0 as usize, self.cursor.1 as usize);
            if let Some(row) = self.cells.get_mut(y) {
                if x < row.len() {
                    row[x] = ch;
                }
                // Trailing half of a wide character stays blank
                for offset in 1..width {
                    if x + offset < row.len() {
                        row[x + offset] = '\0';
                    }
                }
            }
            self.cursor.0 = self.cursor.0.saturating_add(width as u16);
        }
    }

    fn clear_line(&mut self) {
        let (x, y) = (self.cursor.0 as usize, self.cursor.1 as usize);
        if let Some(row) = self.cells.get_mut(y) {
            for cell in row.iter_mut().skip(x) {
                *cell = ' ';
            }
        }
    }

    fn clear(&mut self) {
        for row in &mut self.cells {
            row.fill(' ');
        }
    }

    /// Text of one row with trailing blanks removed
    pub fn row_text(&self, row: usize) -> String {
        self.cells
            .get(row)
            .map(|cells| {
                cells
                    .iter()
                    .filter(|c| **c != '\0')
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .unwrap_or_default()
    }

    /// Whole screen as newline separated rows
    pub fn text(&self) -> String {
        (0..self.cells.len())
            .map(|row| self.row_text(row))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn contains(&self, needle: &str) -> bool {
        (0..self.cells.len()).any(|row| self.row_text(row).contains(needle))
    }

    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }
}

/// Shared view of a [`MockRenderStream`]'s screen
#[derive(Debug, Clone)]
pub struct ScreenHandle(Arc<Mutex<MockScreen>>);

impl ScreenHandle {
    pub fn lock(&self) -> MutexGuard<'_, MockScreen> {
        // A poisoned lock only means a test already panicked
        self.0.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn text(&self) -> String {
        self.lock().text()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lock().contains(needle)
    }
}

/// Mock render stream that maintains an in-memory screen
pub struct MockRenderStream {
    screen: ScreenHandle,
}

impl MockRenderStream {
    pub fn new() -> Self {
        Self::with_size((80, 24))
    }

    pub fn with_size(size: TerminalSize) -> Self {
        Self {
            screen: ScreenHandle(Arc::new(Mutex::new(MockScreen::new(size)))),
        }
    }

    /// Handle for inspecting the screen after the stream is moved away
    pub fn screen_handle(&self) -> ScreenHandle {
        self.screen.clone()
    }

    fn record(&self, command: RenderCommand) {
        self.screen.lock().commands.push(command);
    }
}

impl Write for MockRenderStream {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let text = String::from_utf8_lossy(buf);
        self.screen.lock().put_text(&text);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.record(RenderCommand::Flush);
        Ok(())
    }
}

impl RenderStream for MockRenderStream {
    fn clear_screen(&mut self) -> Result<()> {
        let mut screen = self.screen.lock();
        screen.commands.push(RenderCommand::ClearScreen);
        screen.clear();
        Ok(())
    }

    fn clear_line(&mut self) -> Result<()> {
        let mut screen = self.screen.lock();
        screen.commands.push(RenderCommand::ClearLine);
        screen.clear_line();
        Ok(())
    }

    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()> {
        let mut screen = self.screen.lock();
        screen.commands.push(RenderCommand::MoveCursor(x, y));
        screen.cursor = (x, y);
        Ok(())
    }

    fn hide_cursor(&mut self) -> Result<()> {
        let mut screen = self.screen.lock();
        screen.commands.push(RenderCommand::HideCursor);
        screen.cursor_visible = false;
        Ok(())
    }

    fn show_cursor(&mut self) -> Result<()> {
        let mut screen = self.screen.lock();
        screen.commands.push(RenderCommand::ShowCursor);
        screen.cursor_visible = true;
        Ok(())
    }

    fn set_foreground(&mut self, color: Color) -> Result<()> {
        self.record(RenderCommand::SetForeground(color));
        Ok(())
    }

    fn set_attribute(&mut self, attribute: Attribute) -> Result<()> {
        self.record(RenderCommand::SetAttribute(attribute));
        Ok(())
    }

    fn reset_style(&mut self) -> Result<()> {
        self.record(RenderCommand::ResetStyle);
        Ok(())
    }

    fn get_size(&self) -> Result<TerminalSize> {
        Ok(self.screen.lock().size)
    }

    fn enter_alternate_screen(&mut self) -> Result<()> {
        let mut screen = self.screen.lock();
        screen.commands.push(RenderCommand::EnterAlternateScreen);
        screen.alternate_screen = true;
        Ok(())
    }

    fn leave_alternate_screen(&mut self) -> Result<()> {
        let mut screen = self.screen.lock();
        screen.commands.push(RenderCommand::LeaveAlternateScreen);
        screen.alternate_screen = false;
        Ok(())
    }

    fn enable_raw_mode(&mut self) -> Result<()> {
        let mut screen = self.screen.lock();
        screen.commands.push(RenderCommand::EnableRawMode);
        screen.raw_mode = true;
        Ok(())
    }

    fn disable_raw_mode(&mut self) -> Result<()> {
        let mut screen = self.screen.lock();
        screen.commands.push(RenderCommand::DisableRawMode);
        screen.raw_mode = false;
        Ok(())
    }
}

impl Default for MockEventStream {
    fn default() -> Self {
        Self::empty()
    }
}

impl Default for MockRenderStream {
    fn default() -> Self {
        Self::new()
    }
}
