use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use log::warn;

use crate::core::view::SortColumn;

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq)]
pub enum TuiEvent {
    // Always honoured
    ForceQuit, // Ctrl+C
    Escape,
    Resize,

    // Search box editing
    InputChar(char),
    Paste(String), // Bracketed paste
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    Submit,

    // Table and paging
    RowUp,
    RowDown,
    PreviousPage, // PageUp / Alt+Left
    NextPage,     // PageDown / Alt+Right
    Sort(SortColumn),
    OpenPageSizePicker, // Ctrl+P
    Reload,             // Ctrl+R

    // Mouse
    MouseClick(u16, u16),
    ScrollUp,
    ScrollDown,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`
pub fn poll_event_timeout(timeout: Duration) -> Option<TuiEvent> {
    match event::poll(timeout) {
        Ok(true) => {}
        Ok(false) => return None,
        Err(e) => {
            warn!("Event poll failed: {}", e);
            return None;
        }
    }
    match event::read() {
        Ok(raw) => translate(raw),
        Err(e) => {
            warn!("Event read failed: {}", e);
            None
        }
    }
}

fn translate(raw: Event) -> Option<TuiEvent> {
    match raw {
        Event::Key(key_event) => translate_key(key_event),
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(TuiEvent::MouseClick(mouse_event.column, mouse_event.row))
            }
            MouseEventKind::ScrollUp => Some(TuiEvent::ScrollUp),
            MouseEventKind::ScrollDown => Some(TuiEvent::ScrollDown),
            _ => None,
        },
        Event::Paste(data) => Some(TuiEvent::Paste(data)),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

fn translate_key(key_event: KeyEvent) -> Option<TuiEvent> {
    // Windows reports releases too
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    log::debug!(
        "Key event: {:?} with modifiers {:?}",
        key_event.code,
        key_event.modifiers
    );
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
        (KeyModifiers::CONTROL, KeyCode::Char('p')) => Some(TuiEvent::OpenPageSizePicker),
        (KeyModifiers::CONTROL, KeyCode::Char('r')) => Some(TuiEvent::Reload),
        (KeyModifiers::ALT, KeyCode::Left) => Some(TuiEvent::PreviousPage),
        (KeyModifiers::ALT, KeyCode::Right) => Some(TuiEvent::NextPage),
        (_, KeyCode::F(1)) => Some(TuiEvent::Sort(SortColumn::Name)),
        (_, KeyCode::F(2)) => Some(TuiEvent::Sort(SortColumn::EyeColor)),
        (_, KeyCode::F(3)) => Some(TuiEvent::Sort(SortColumn::Created)),
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            Some(TuiEvent::InputChar(c))
        }
        (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
        (_, KeyCode::Delete) => Some(TuiEvent::Delete),
        (_, KeyCode::Left) => Some(TuiEvent::CursorLeft),
        (_, KeyCode::Right) => Some(TuiEvent::CursorRight),
        (_, KeyCode::Home) => Some(TuiEvent::CursorHome),
        (_, KeyCode::End) => Some(TuiEvent::CursorEnd),
        (_, KeyCode::Enter) => Some(TuiEvent::Submit),
        (_, KeyCode::Esc) => Some(TuiEvent::Escape),
        (_, KeyCode::Up) => Some(TuiEvent::RowUp),
        (_, KeyCode::Down) => Some(TuiEvent::RowDown),
        (_, KeyCode::PageUp) => Some(TuiEvent::PreviousPage),
        (_, KeyCode::PageDown) => Some(TuiEvent::NextPage),
        _ => None,
    }
}
