//! # Events
//!
//! Shared UI types: which control has focus and what the view has to
//! repaint after the view model changed.

/// Control that receives typed input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Route,
    Number,
    Fetch,
}

impl Focus {
    /// Next control in tab order
    pub fn next(&self) -> Focus {
        match self {
            Focus::Route => Focus::Number,
            Focus::Number => Focus::Fetch,
            Focus::Fetch => Focus::Route,
        }
    }

    /// Previous control in tab order
    pub fn previous(&self) -> Focus {
        match self {
            Focus::Route => Focus::Fetch,
            Focus::Number => Focus::Route,
            Focus::Fetch => Focus::Number,
        }
    }
}

/// Events emitted when the screen needs updating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent {
    /// Clear and repaint everything (startup, resize)
    FullRedrawRequired,

    /// Repaint only the lines that differ from the last frame
    FrameUpdateRequired,
}
