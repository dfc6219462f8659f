//! # I/O Abstraction Layer
//!
//! Trait abstractions for terminal input and output so the controller can
//! run against a real terminal or against in-memory streams in tests.
//!
//! ```text
//! Production:  AppController ──▶ TerminalEventStream ──▶ crossterm::event::read()
//!                            ──▶ TerminalRenderStream ──▶ crossterm::execute!()
//!
//! Testing:     AppController ──▶ MockEventStream     ──▶ VecDeque<Event>
//!                            ──▶ MockRenderStream    ──▶ in-memory screen grid
//! ```

use anyhow::Result;
use crossterm::event::Event;
use crossterm::style::{Attribute, Color};
use std::io::Write;
use std::time::Duration;

pub mod mock;
pub mod terminal;

pub use mock::{MockEventStream, MockRenderStream, RenderCommand, ScreenHandle};
pub use terminal::{TerminalEventStream, TerminalRenderStream};

/// Type alias for terminal size (width, height)
pub type TerminalSize = (u16, u16);

/// Input event stream abstraction
pub trait EventStream: Send {
    /// Check if events are available within the timeout
    fn poll(&mut self, timeout: Duration) -> Result<bool>;

    /// Read the next available event
    ///
    /// Only call after `poll()` returned true.
    fn read(&mut self) -> Result<Event>;
}

/// Output render stream abstraction
///
/// Plain text goes through `Write`; everything else is an explicit method so
/// implementations never have to parse escape sequences.
pub trait RenderStream: Write + Send {
    /// Clear the entire screen
    fn clear_screen(&mut self) -> Result<()>;

    /// Clear from the cursor to the end of the current line
    fn clear_line(&mut self) -> Result<()>;

    /// Move cursor to (column, row)
    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()>;

    fn hide_cursor(&mut self) -> Result<()>;

    fn show_cursor(&mut self) -> Result<()>;

    /// Set the foreground color for following text
    fn set_foreground(&mut self, color: Color) -> Result<()>;

    /// Turn on a text attribute (bold, reverse, dim...)
    fn set_attribute(&mut self, attribute: Attribute) -> Result<()>;

    /// Reset colors and attributes
    fn reset_style(&mut self) -> Result<()>;

    /// Get terminal size as (width, height)
    fn get_size(&self) -> Result<TerminalSize>;

    fn enter_alternate_screen(&mut self) -> Result<()>;

    fn leave_alternate_screen(&mut self) -> Result<()>;

    fn enable_raw_mode(&mut self) -> Result<()>;

    fn disable_raw_mode(&mut self) -> Result<()>;
}
