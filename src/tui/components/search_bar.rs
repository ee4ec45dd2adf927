//! # SearchBar Component
//!
//! Single-line text input for the name filter.
//!
//! ## Responsibilities
//!
//! - Capture text input (typing, paste, backspace, delete, cursor movement)
//! - Emit the buffer on Enter. Filtering happens only on submission, never
//!   while typing.
//! - Show the currently applied filter in the border title
//!
//! Unlike a chat input, the buffer is kept after submission so the user can
//! refine the query. Submitting an empty buffer clears the filter.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const PLACEHOLDER: &str = "Search for a character...";

/// High-level events emitted by the SearchBar
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    /// User pressed Enter with this text
    Submit(String),
    /// Text or cursor changed
    ContentChanged,
}

pub struct SearchBar {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Filter currently applied to the table (Prop)
    pub active_query: String,
    /// Cursor as byte offset into `buffer`
    cursor: usize,
}

impl SearchBar {
    pub fn new(initial: &str) -> Self {
        Self {
            buffer: initial.to_string(),
            active_query: initial.to_string(),
            cursor: initial.len(),
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn insert_str(&mut self, text: &str) {
        self.buffer.insert_str(self.cursor, text);
        self.cursor += text.len();
    }
}

fn prev_char_boundary(s: &str, pos: usize) -> usize {
    s[..pos].char_indices().next_back().map(|(i, _)| i).unwrap_or(0)
}

fn next_char_boundary(s: &str, pos: usize) -> usize {
    s[pos..]
        .chars()
        .next()
        .map(|c| pos + c.len_utf8())
        .unwrap_or(s.len())
}

impl Component for SearchBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title(" Search (Enter to apply) ");
        if !self.active_query.is_empty() {
            block = block.title(Line::from(format!(" filter: \"{}\" ", self.active_query)).right_aligned());
        }

        let inner_width = area.width.saturating_sub(2);
        let cursor_col = u16::try_from(self.buffer[..self.cursor].width()).unwrap_or(u16::MAX);
        // Keep the cursor inside the box by scrolling horizontally
        let scroll = cursor_col.saturating_sub(inner_width.saturating_sub(1));

        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(PLACEHOLDER).style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(self.buffer.as_str())
                .style(Style::default().fg(Color::Green))
                .scroll((0, scroll))
        };

        frame.render_widget(paragraph.block(block), area);

        if area.width > 2 && area.height > 2 {
            let cursor_x = area
                .x
                .saturating_add(1)
                .saturating_add(cursor_col.saturating_sub(scroll));
            frame.set_cursor_position((cursor_x, area.y + 1));
        }
    }
}

impl EventHandler for SearchBar {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                Some(SearchEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                // Single-line input: fold line breaks into spaces
                let flattened: String = text
                    .chars()
                    .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
                    .collect();
                self.insert_str(&flattened);
                Some(SearchEvent::ContentChanged)
            }
            TuiEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(prev..self.cursor);
                    self.cursor = prev;
                    Some(SearchEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(self.cursor..next);
                    Some(SearchEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => (self.cursor > 0).then(|| {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                SearchEvent::ContentChanged
            }),
            TuiEvent::CursorRight => (self.cursor < self.buffer.len()).then(|| {
                self.cursor = next_char_boundary(&self.buffer, self.cursor);
                SearchEvent::ContentChanged
            }),
            TuiEvent::CursorHome => (self.cursor != 0).then(|| {
                self.cursor = 0;
                SearchEvent::ContentChanged
            }),
            TuiEvent::CursorEnd => (self.cursor != self.buffer.len()).then(|| {
                self.cursor = self.buffer.len();
                SearchEvent::ContentChanged
            }),
            TuiEvent::Submit => Some(SearchEvent::Submit(self.buffer.clone())),
            _ => None,
        }
    }
}
