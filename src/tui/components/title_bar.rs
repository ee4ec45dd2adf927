//! # TitleBar Component
//!
//! Top status bar: application name, a spinner while the collection is being
//! fetched, and the current status message.
//!
//! Stateless. All props come from the parent:
//! - `status_message`: Core App state (loading progress, fetch outcome)
//! - `is_loading`: Core App state
//! - `spinner_frame`: TUI animation clock
//!
//! The title text changes based on state:
//!
//! 1. **Loading**: `"Roster | ⠙ Loading characters... 20/82 (page 2)"`
//! 2. **Status message**: `"Roster | Loaded 82 characters"`
//! 3. **Default**: `"Roster"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct TitleBar {
    pub status_message: String,
    pub is_loading: bool,
    pub spinner_frame: usize,
}

impl TitleBar {
    pub fn new(status_message: String, is_loading: bool, spinner_frame: usize) -> Self {
        Self {
            status_message,
            is_loading,
            spinner_frame,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            "Roster",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )];

        if self.is_loading {
            let spinner = SPINNER[self.spinner_frame % SPINNER.len()];
            spans.push(Span::raw(format!(" | {} {}", spinner, self.status_message)));
        } else if !self.status_message.is_empty() {
            spans.push(Span::raw(format!(" | {}", self.status_message)));
        }

        frame.render_widget(Line::from(spans), area);
    }
}
