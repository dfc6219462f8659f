//! # Views
//!
//! Frame composition and terminal painting.

pub mod frame;
pub mod terminal_renderer;

pub use frame::{
    compose_frame, compose_report, cursor_position, Frame, FrameLine, Span, SpanStyle,
    DATA_TITLE, FETCH_BUTTON, LOADING_TEXT, TITLE,
};
pub use terminal_renderer::{TerminalRenderer, ViewRenderer};
