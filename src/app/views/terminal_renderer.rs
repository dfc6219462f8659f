//! # Terminal Renderer
//!
//! Paints composed frames onto a [`RenderStream`]. Keeps the last painted
//! frame so ordinary updates only rewrite rows that changed.

use super::frame::{compose_frame, cursor_position, Frame, FrameLine, SpanStyle};
use crate::app::events::ViewEvent;
use crate::app::io::{RenderStream, TerminalSize};
use crate::app::view_models::ViewModel;
use anyhow::Result;
use crossterm::style::{Attribute, Color};

/// Trait for rendering views
pub trait ViewRenderer {
    /// Prepare the terminal (alternate screen, raw mode)
    fn initialize(&mut self) -> Result<()>;

    /// Clear and paint everything
    fn render_full(&mut self, view_model: &ViewModel) -> Result<()>;

    /// Paint only rows that differ from the previous frame
    fn render_update(&mut self, view_model: &ViewModel) -> Result<()>;

    /// Handle a view event
    fn handle_view_event(&mut self, event: &ViewEvent, view_model: &ViewModel) -> Result<()> {
        match event {
            ViewEvent::FullRedrawRequired => self.render_full(view_model),
            ViewEvent::FrameUpdateRequired => self.render_update(view_model),
        }
    }

    /// Restore the terminal on exit
    fn cleanup(&mut self) -> Result<()>;
}

/// Renderer over any render stream
pub struct TerminalRenderer<RS: RenderStream> {
    render_stream: RS,
    terminal_size: TerminalSize,
    last_frame: Option<Frame>,
}

impl<RS: RenderStream> TerminalRenderer<RS> {
    /// Create a renderer owning the given stream
    pub fn with_render_stream(render_stream: RS) -> Result<Self> {
        let terminal_size = render_stream.get_size()?;
        Ok(Self {
            render_stream,
            terminal_size,
            last_frame: None,
        })
    }

    pub fn update_size(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
        self.last_frame = None;
    }

    pub fn terminal_size(&self) -> TerminalSize {
        self.terminal_size
    }

    fn apply_style(&mut self, style: SpanStyle) -> Result<()> {
        match style {
            SpanStyle::Plain | SpanStyle::Data => {}
            SpanStyle::Title => self.render_stream.set_attribute(Attribute::Bold)?,
            SpanStyle::Selected => {
                self.render_stream.set_attribute(Attribute::Bold)?;
                self.render_stream.set_foreground(Color::Cyan)?;
            }
            SpanStyle::Focused => self.render_stream.set_attribute(Attribute::Reverse)?,
            SpanStyle::Loading => self.render_stream.set_foreground(Color::Yellow)?,
            SpanStyle::Error => self.render_stream.set_foreground(Color::Red)?,
            SpanStyle::Footer => self.render_stream.set_attribute(Attribute::Dim)?,
        }
        Ok(())
    }

    fn paint_line(&mut self, row: u16, line: &FrameLine) -> Result<()> {
        self.render_stream.move_cursor(0, row)?;
        for span in &line.spans {
            self.apply_style(span.style)?;
            self.render_stream.write_all(span.text.as_bytes())?;
            if span.style != SpanStyle::Plain && span.style != SpanStyle::Data {
                self.render_stream.reset_style()?;
            }
        }
        self.render_stream.clear_line()?;
        Ok(())
    }

    fn place_cursor(&mut self, view_model: &ViewModel) -> Result<()> {
        match cursor_position(view_model) {
            Some((x, y)) => {
                self.render_stream.move_cursor(x, y)?;
                self.render_stream.show_cursor()?;
            }
            None => self.render_stream.hide_cursor()?,
        }
        Ok(())
    }

    fn paint(&mut self, frame: Frame, full: bool, view_model: &ViewModel) -> Result<()> {
        self.render_stream.hide_cursor()?;
        if full {
            self.render_stream.clear_screen()?;
        }

        let previous = if full { None } else { self.last_frame.take() };
        let mut painted = 0;
        for (row, line) in frame.lines.iter().enumerate() {
            let unchanged = previous
                .as_ref()
                .and_then(|prev| prev.lines.get(row))
                .is_some_and(|prev| prev == line);
            if !unchanged {
                self.paint_line(row as u16, line)?;
                painted += 1;
            }
        }
        tracing::trace!("Painted {} of {} rows", painted, frame.lines.len());

        self.place_cursor(view_model)?;
        self.render_stream.flush()?;
        self.last_frame = Some(frame);
        Ok(())
    }
}

impl<RS: RenderStream> ViewRenderer for TerminalRenderer<RS> {
    fn initialize(&mut self) -> Result<()> {
        self.render_stream.enter_alternate_screen()?;
        self.render_stream.enable_raw_mode()?;
        self.render_stream.hide_cursor()?;
        self.render_stream.clear_screen()?;
        Ok(())
    }

    fn render_full(&mut self, view_model: &ViewModel) -> Result<()> {
        let frame = compose_frame(view_model);
        self.paint(frame, true, view_model)
    }

    fn render_update(&mut self, view_model: &ViewModel) -> Result<()> {
        if self.last_frame.is_none() {
            return self.render_full(view_model);
        }
        let frame = compose_frame(view_model);
        self.paint(frame, false, view_model)
    }

    fn cleanup(&mut self) -> Result<()> {
        self.render_stream.reset_style()?;
        self.render_stream.show_cursor()?;
        self.render_stream.disable_raw_mode()?;
        self.render_stream.leave_alternate_screen()?;
        self.render_stream.flush()?;
        Ok(())
    }
}
