//! # Page Size Picker Component
//!
//! Centered overlay for choosing how many rows a page holds. Opened with Ctrl+P.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `PageSizePickerState` lives in `TuiState` while the overlay is open
//! - `PageSizePicker` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding};

use crate::core::view::PageSize;
use crate::tui::event::TuiEvent;

/// Persistent state for the page size overlay.
pub struct PageSizePickerState {
    pub selected: usize,
    pub list_state: ListState,
}

impl PageSizePickerState {
    /// Opens with the current size highlighted.
    pub fn new(current: PageSize) -> Self {
        let selected = PageSize::ALL
            .iter()
            .position(|size| *size == current)
            .unwrap_or(0);
        let mut list_state = ListState::default();
        list_state.select(Some(selected));
        Self {
            selected,
            list_state,
        }
    }

    /// Handle a key event, returning a PageSizeEvent if the overlay should act.
    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<PageSizeEvent> {
        match event {
            TuiEvent::Escape => Some(PageSizeEvent::Dismiss),
            TuiEvent::RowUp | TuiEvent::ScrollUp => {
                self.selected = self.selected.saturating_sub(1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::RowDown | TuiEvent::ScrollDown => {
                self.selected = (self.selected + 1).min(PageSize::ALL.len() - 1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::Submit => PageSize::ALL
                .get(self.selected)
                .map(|size| PageSizeEvent::Select(*size)),
            _ => None,
        }
    }
}

/// Events emitted by the page size picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSizeEvent {
    Select(PageSize),
    Dismiss,
}

/// Transient render wrapper for the page size overlay.
pub struct PageSizePicker<'a> {
    state: &'a mut PageSizePickerState,
    current: PageSize,
}

impl<'a> PageSizePicker<'a> {
    pub fn new(state: &'a mut PageSizePickerState, current: PageSize) -> Self {
        Self { state, current }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(30, 40, area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Page size ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Enter Select  Esc Back ").centered())
            .padding(Padding::horizontal(1));

        let items: Vec<ListItem> = PageSize::ALL
            .iter()
            .enumerate()
            .map(|(i, size)| {
                let is_active = *size == self.current;
                let style = if i == self.state.selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else if is_active {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default().fg(Color::Gray)
                };
                let marker = if is_active { " *" } else { "" };
                ListItem::new(Line::from(Span::styled(
                    format!("{:>3} items{}", size.get(), marker),
                    style,
                )))
            })
            .collect();

        let list = List::new(items).block(block);

        frame.render_stateful_widget(list, overlay, &mut self.state.list_state);
    }
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
