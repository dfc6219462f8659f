//! # Frame Composition
//!
//! Pure mapping from view model to the rows of text the terminal shows.
//! No I/O happens here; [`TerminalRenderer`](super::TerminalRenderer) paints
//! the result.

use crate::app::events::Focus;
use crate::app::models::{Route, UiState};
use crate::app::view_models::ViewModel;
use unicode_width::UnicodeWidthChar;

pub const TITLE: &str = "JSONPlaceholder API Data";
pub const LOADING_TEXT: &str = "Loading...";
pub const DATA_TITLE: &str = "Data:";
pub const FETCH_BUTTON: &str = "[ Fetch Data ]";
const KEY_HINTS: &str = "Tab focus | ←/→ route | Enter fetch | ↑/↓ scroll | q quit";
const NUMBER_FIELD_WIDTH: usize = 8;
const NUMBER_ROW: usize = 3;

/// How a span of text is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanStyle {
    Plain,
    Title,
    /// Selected route option
    Selected,
    /// Control that currently has focus
    Focused,
    Loading,
    Error,
    Data,
    Footer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: SpanStyle,
}

impl Span {
    pub fn new(text: impl Into<String>, style: SpanStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, SpanStyle::Plain)
    }
}

/// One terminal row
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrameLine {
    pub spans: Vec<Span>,
}

impl FrameLine {
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn single(text: impl Into<String>, style: SpanStyle) -> Self {
        Self {
            spans: vec![Span::new(text, style)],
        }
    }

    pub fn text(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }

    /// Cut the line to a display width, dropping what does not fit
    fn truncated(mut self, width: usize) -> Self {
        let mut remaining = width;
        let mut spans = Vec::with_capacity(self.spans.len());
        for span in self.spans.drain(..) {
            if remaining == 0 {
                break;
            }
            let (text, used) = truncate_to_width(&span.text, remaining);
            remaining -= used;
            if !text.is_empty() {
                spans.push(Span::new(text, span.style));
            }
        }
        Self { spans }
    }
}

/// A full screen of rows, top to bottom
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Frame {
    pub lines: Vec<FrameLine>,
}

impl Frame {
    /// Plain text of the frame, one row per line
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(FrameLine::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Longest prefix of `text` fitting in `width` columns, and its width
fn truncate_to_width(text: &str, width: usize) -> (String, usize) {
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > width {
            break;
        }
        used += ch_width;
        out.push(ch);
    }
    (out, used)
}

fn focus_style(focused: bool) -> SpanStyle {
    if focused {
        SpanStyle::Focused
    } else {
        SpanStyle::Plain
    }
}

fn route_line(selected: Route, focused: bool) -> FrameLine {
    let mut spans = vec![Span::plain("Route:  ")];
    for route in Route::all() {
        if route == selected {
            let style = if focused {
                SpanStyle::Focused
            } else {
                SpanStyle::Selected
            };
            spans.push(Span::new(format!("[{}]", route.label()), style));
        } else {
            spans.push(Span::plain(format!(" {} ", route.label())));
        }
        spans.push(Span::plain(" "));
    }
    FrameLine { spans }
}

fn number_line(number: &str, focused: bool) -> FrameLine {
    let field = format!("[{:<width$}]", number, width = NUMBER_FIELD_WIDTH);
    FrameLine {
        spans: vec![Span::plain("Number: "), Span::new(field, focus_style(focused))],
    }
}

/// The conditional block under the form: loading, error, or data title
fn status_line(state: &UiState) -> FrameLine {
    if state.is_loading() {
        FrameLine::single(LOADING_TEXT, SpanStyle::Loading)
    } else if !state.error().is_empty() {
        FrameLine::single(state.error(), SpanStyle::Error)
    } else if state.data().is_some() {
        FrameLine::single(DATA_TITLE, SpanStyle::Title)
    } else {
        FrameLine::blank()
    }
}

fn footer_line(view_model: &ViewModel) -> FrameLine {
    FrameLine::single(
        format!("GET {}  |  {}", view_model.request_url(), KEY_HINTS),
        SpanStyle::Footer,
    )
}

/// Compose the screen for the current view model
///
/// The frame has exactly as many rows as the terminal is tall (the footer
/// is dropped on terminals too short to hold the form) and every row fits
/// the terminal width.
pub fn compose_frame(view_model: &ViewModel) -> Frame {
    let (width, height) = view_model.terminal_size();
    let (width, height) = (width as usize, height as usize);
    let state = view_model.state();
    let focus = view_model.focus();

    let mut lines = vec![
        FrameLine::single(TITLE, SpanStyle::Title),
        FrameLine::blank(),
        route_line(state.route, focus == Focus::Route),
        number_line(&state.number, focus == Focus::Number),
        FrameLine::single(FETCH_BUTTON, focus_style(focus == Focus::Fetch)),
        FrameLine::blank(),
        status_line(state),
    ];

    lines.extend(
        view_model
            .data_lines()
            .iter()
            .skip(view_model.data_scroll())
            .take(view_model.data_page_size())
            .map(|line| FrameLine::single(line.as_str(), SpanStyle::Data)),
    );

    let body_rows = height.saturating_sub(1);
    if lines.len() < body_rows {
        lines.resize(body_rows, FrameLine::blank());
    }
    lines.push(footer_line(view_model));
    lines.truncate(height);

    Frame {
        lines: lines
            .into_iter()
            .map(|line| line.truncated(width))
            .collect(),
    }
}

/// Where the text cursor belongs: after the last character of the number
/// field while it has focus, hidden otherwise
pub fn cursor_position(view_model: &ViewModel) -> Option<(u16, u16)> {
    if view_model.focus() != Focus::Number {
        return None;
    }

    let number_width: usize = view_model
        .state()
        .number
        .chars()
        .map(|ch| ch.width().unwrap_or(0))
        .sum();
    let column = "Number: [".len() + number_width;
    let (width, height) = view_model.terminal_size();

    if column < width as usize && NUMBER_ROW < height as usize {
        Some((column as u16, NUMBER_ROW as u16))
    } else {
        None
    }
}

/// Plain text summary of a state, with the complete JSON dump
///
/// Used by the headless modes where there is no screen to scroll.
pub fn compose_report(state: &UiState) -> String {
    let mut report = format!(
        "Route: {}\nNumber: {}\n",
        state.route.label(),
        state.number
    );

    if state.is_loading() {
        report.push_str(LOADING_TEXT);
        report.push('\n');
    }
    if !state.error().is_empty() {
        report.push_str(state.error());
        report.push('\n');
    }
    if let Some(data) = state.data() {
        report.push_str(DATA_TITLE);
        report.push('\n');
        report.push_str(&serde_json::to_string_pretty(data).unwrap_or_else(|_| data.to_string()));
        report.push('\n');
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::{Action, FetchStatus, FETCH_ERROR_MESSAGE};
    use serde_json::json;

    fn row(frame: &Frame, index: usize) -> String {
        frame.lines[index].text()
    }

    #[test]
    fn idle_frame_should_show_form_without_status() {
        let vm = ViewModel::new();
        let frame = compose_frame(&vm);

        assert_eq!(frame.lines.len(), 24);
        assert_eq!(row(&frame, 0), TITLE);
        assert!(row(&frame, 2).starts_with("Route:  [Posts]  Todos   Users"));
        assert_eq!(row(&frame, 3), "Number: [        ]");
        assert_eq!(row(&frame, 4), FETCH_BUTTON);
        assert_eq!(row(&frame, 6), "");
        assert!(row(&frame, 23).starts_with("GET https://jsonplaceholder.typicode.com/posts"));
    }

    #[test]
    fn focused_control_should_be_highlighted() {
        let mut vm = ViewModel::new();
        let frame = compose_frame(&vm);
        assert_eq!(frame.lines[2].spans[1].style, SpanStyle::Focused);
        assert_eq!(frame.lines[4].spans[0].style, SpanStyle::Plain);

        vm.set_focus(Focus::Fetch);
        let frame = compose_frame(&vm);
        assert_eq!(frame.lines[2].spans[1].style, SpanStyle::Selected);
        assert_eq!(frame.lines[4].spans[0].style, SpanStyle::Focused);
    }

    #[test]
    fn loading_frame_should_show_loading_indicator() {
        let mut vm = ViewModel::new();
        vm.begin_fetch();
        let frame = compose_frame(&vm);

        assert_eq!(row(&frame, 6), LOADING_TEXT);
        assert_eq!(frame.lines[6].spans[0].style, SpanStyle::Loading);
        assert_eq!(row(&frame, 7), "");
    }

    #[test]
    fn error_frame_should_show_message_only() {
        let mut vm = ViewModel::new();
        let ticket = vm.begin_fetch();
        vm.dispatch(Action::FetchDataError {
            request: ticket.request,
        });
        let frame = compose_frame(&vm);

        assert_eq!(row(&frame, 6), FETCH_ERROR_MESSAGE);
        assert_eq!(frame.lines[6].spans[0].style, SpanStyle::Error);
        assert!(!frame.text().contains(DATA_TITLE));
    }

    #[test]
    fn success_frame_should_show_pretty_json() {
        let mut vm = ViewModel::new();
        vm.select_route(Route::Todos);
        vm.set_number("3");
        let ticket = vm.begin_fetch();
        vm.dispatch(Action::FetchDataSuccess {
            request: ticket.request,
            data: json!({"id": 3}),
        });
        let frame = compose_frame(&vm);

        assert_eq!(row(&frame, 6), DATA_TITLE);
        assert_eq!(row(&frame, 7), "{");
        assert_eq!(row(&frame, 8), "  \"id\": 3");
        assert_eq!(row(&frame, 9), "}");
        assert!(row(&frame, 23).starts_with("GET https://jsonplaceholder.typicode.com/todos/3"));
    }

    #[test]
    fn falsy_json_values_should_still_be_shown() {
        let mut vm = ViewModel::new();
        let ticket = vm.begin_fetch();
        vm.dispatch(Action::FetchDataSuccess {
            request: ticket.request,
            data: json!(0),
        });
        let frame = compose_frame(&vm);

        assert_eq!(row(&frame, 6), DATA_TITLE);
        assert_eq!(row(&frame, 7), "0");
    }

    #[test]
    fn data_should_be_clipped_to_page_and_scrolled() {
        let mut vm = ViewModel::new();
        vm.update_terminal_size(40, 12); // page size 4
        let ticket = vm.begin_fetch();
        vm.dispatch(Action::FetchDataSuccess {
            request: ticket.request,
            data: json!([1, 2, 3, 4, 5, 6]),
        });

        let frame = compose_frame(&vm);
        assert_eq!(frame.lines.len(), 12);
        assert_eq!(row(&frame, 7), "[");
        assert_eq!(row(&frame, 10), "  3,");
        assert!(row(&frame, 11).starts_with("GET"));

        vm.scroll_data(2);
        let frame = compose_frame(&vm);
        assert_eq!(row(&frame, 7), "  2,");
    }

    #[test]
    fn rows_should_fit_terminal_width() {
        let mut vm = ViewModel::new();
        vm.update_terminal_size(10, 24);
        let frame = compose_frame(&vm);

        assert_eq!(row(&frame, 0), "JSONPlaceh");
        for line in &frame.lines {
            assert!(line.text().chars().count() <= 10);
        }
    }

    #[test]
    fn cursor_should_follow_number_field_only_when_focused() {
        let mut vm = ViewModel::new();
        assert_eq!(cursor_position(&vm), None);

        vm.set_focus(Focus::Number);
        assert_eq!(cursor_position(&vm), Some((9, 3)));

        vm.set_number("42");
        assert_eq!(cursor_position(&vm), Some((11, 3)));
    }

    #[test]
    fn truncate_should_respect_wide_characters() {
        assert_eq!(truncate_to_width("日本語", 5), ("日本".to_string(), 4));
        assert_eq!(truncate_to_width("abc", 5), ("abc".to_string(), 3));
    }

    #[test]
    fn report_should_include_full_json() {
        let state = UiState {
            route: Route::Users,
            number: "5".to_string(),
            status: FetchStatus::Success(json!({"id": 5})),
            request: 1,
        };

        assert_eq!(
            compose_report(&state),
            "Route: Users\nNumber: 5\nData:\n{\n  \"id\": 5\n}\n"
        );
    }

    #[test]
    fn report_should_show_error_message() {
        let state = UiState {
            status: FetchStatus::Error(FETCH_ERROR_MESSAGE.to_string()),
            ..UiState::default()
        };

        assert_eq!(
            compose_report(&state),
            "Route: Posts\nNumber: \nError fetching data\n"
        );
    }
}
