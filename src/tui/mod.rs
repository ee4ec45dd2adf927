//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Loading**: draws every ~80ms so the spinner and progress stay live.
//! - **Idle**: sleeps up to 500ms, only redraws on events, background actions
//!   or terminal resize.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call, making blinking cursors appear erratic during continuous redraws.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::widgets::TableState;
use tokio::task::AbortHandle;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::core::view::PageSize;
use crate::swapi::{FetchProgress, PageSource, SwapiClient, fetch_all};
use crate::tui::component::EventHandler;
use crate::tui::components::{PageSizeEvent, PageSizePickerState, SearchBar, SearchEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent component states
    pub search_bar: SearchBar,
    pub table_state: TableState,
    // Page size overlay (None = hidden)
    pub page_size_picker: Option<PageSizePickerState>,
}

impl TuiState {
    pub fn new(initial_search: &str) -> Self {
        Self {
            search_bar: SearchBar::new(initial_search),
            table_state: TableState::default(),
            page_size_picker: None,
        }
    }

    pub fn open_page_size_picker(&mut self, current: PageSize) {
        self.page_size_picker = Some(PageSizePickerState::new(current));
    }

    /// Drops the row highlight after the visible page changed underneath it.
    fn reset_table(&mut self) {
        self.table_state = TableState::default();
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,                        // Show cursor for the search box
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from continuous redraws
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide // Hide cursor on exit
        );
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let client = SwapiClient::new(Duration::from_secs(config.timeout_secs))
        .map_err(std::io::Error::other)?;
    let source: Arc<dyn PageSource> = Arc::new(client);

    let mut app = App::from_config(&config);
    let mut tui = TuiState::new(&config.initial_search);

    let mut terminal = ratatui::init();
    let terminal_mode_guard = TerminalModeGuard::new();
    if let Err(e) = &terminal_mode_guard {
        warn!("Failed to enable terminal modes: {}", e);
    }

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    // Abort handles for the fetch in flight (aborted on exit)
    let mut active_abort_handles: Vec<AbortHandle> = Vec::new();

    dispatch(&mut app, Action::StartFetch, &source, &tx, &mut active_abort_handles);

    // Animation timer
    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    'event_loop: loop {
        let animating = app.is_loading;
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // ForceQuit (Ctrl+C) always quits, overlay or not
            if matches!(event, TuiEvent::ForceQuit) {
                if dispatch(&mut app, Action::Quit, &source, &tx, &mut active_abort_handles) {
                    break 'event_loop;
                }
                continue;
            }

            // When the page size picker is open, route all events to it
            if let Some(ref mut picker) = tui.page_size_picker {
                match picker.handle_event(&event) {
                    Some(PageSizeEvent::Select(size)) => {
                        tui.page_size_picker = None;
                        dispatch(&mut app, Action::SetPageSize(size), &source, &tx, &mut active_abort_handles);
                        tui.reset_table();
                    }
                    Some(PageSizeEvent::Dismiss) => {
                        tui.page_size_picker = None;
                    }
                    None => {}
                }
                continue;
            }

            let action = match event {
                TuiEvent::Escape => Some(Action::Quit),
                TuiEvent::OpenPageSizePicker => {
                    tui.open_page_size_picker(app.view.window.size);
                    None
                }
                TuiEvent::Reload => Some(Action::StartFetch),
                TuiEvent::Sort(column) => Some(Action::SortBy(column)),
                TuiEvent::PreviousPage => Some(Action::PreviousPage),
                TuiEvent::NextPage => Some(Action::NextPage),
                TuiEvent::RowUp | TuiEvent::ScrollUp => {
                    tui.table_state.select_previous();
                    None
                }
                TuiEvent::RowDown | TuiEvent::ScrollDown => {
                    tui.table_state.select_next();
                    None
                }
                TuiEvent::MouseClick(x, y) => {
                    let frame_area = terminal.get_frame().area();
                    ui::hit_test_header(frame_area, x, y).map(Action::SortBy)
                }
                _ => match tui.search_bar.handle_event(&event) {
                    Some(SearchEvent::Submit(text)) => Some(Action::SubmitSearch(text)),
                    Some(SearchEvent::ContentChanged) | None => None,
                },
            };

            let Some(action) = action else {
                continue;
            };
            let changes_view = matches!(
                action,
                Action::SubmitSearch(_)
                    | Action::SortBy(_)
                    | Action::NextPage
                    | Action::PreviousPage
            );
            if dispatch(&mut app, action, &source, &tx, &mut active_abort_handles) {
                break 'event_loop;
            }
            if changes_view {
                tui.reset_table();
            }
        }

        // Handle background task actions (fetch progress and outcome)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", summarize(&action));
            if dispatch(&mut app, action, &source, &tx, &mut active_abort_handles) {
                break 'event_loop;
            }
        }
    }

    for handle in active_abort_handles.drain(..) {
        handle.abort();
    }

    drop(terminal_mode_guard);
    ratatui::restore();
    info!("Roster shutting down");
    Ok(())
}

/// Runs `update` and carries out the effect. Returns true when the loop should exit.
fn dispatch(
    app: &mut App,
    action: Action,
    source: &Arc<dyn PageSource>,
    tx: &mpsc::Sender<Action>,
    active_abort_handles: &mut Vec<AbortHandle>,
) -> bool {
    match update(app, action) {
        Effect::Quit => true,
        Effect::SpawnFetch => {
            *active_abort_handles = spawn_fetch(source.clone(), app.base_url.clone(), tx.clone());
            false
        }
        Effect::None => false,
    }
}

/// Log-friendly form of an action; a completed fetch carries the whole collection.
fn summarize(action: &Action) -> String {
    match action {
        Action::FetchCompleted(characters) => format!("FetchCompleted({} characters)", characters.len()),
        other => format!("{:?}", other),
    }
}

fn spawn_fetch(
    source: Arc<dyn PageSource>,
    base_url: String,
    tx: mpsc::Sender<Action>,
) -> Vec<AbortHandle> {
    info!("Spawning fetch from {}", base_url);

    // Async channel for per-page progress
    let (progress_tx, mut progress_rx) = tokio::sync::mpsc::channel::<FetchProgress>(16);

    // Clone tx for the fetch task
    let tx_fetch = tx.clone();

    let fetch_handle = tokio::spawn(async move {
        let started = std::time::Instant::now();
        let result = fetch_all(source.as_ref(), &base_url, Some(&progress_tx)).await;
        let action = match result {
            Ok(characters) => {
                info!(
                    "Fetch finished: {} characters in {}ms",
                    characters.len(),
                    started.elapsed().as_millis()
                );
                Action::FetchCompleted(characters)
            }
            Err(e) => Action::FetchFailed(e.to_string()),
        };
        if tx_fetch.send(action).is_err() {
            warn!("Failed to send fetch outcome: receiver dropped");
        }
    });

    // Forward progress reports to the Action channel
    let forward_handle = tokio::spawn(async move {
        while let Some(progress) = progress_rx.recv().await {
            if tx.send(Action::FetchProgress(progress)).is_err() {
                warn!("Failed to forward FetchProgress: receiver dropped");
                return;
            }
        }
    });

    vec![fetch_handle.abort_handle(), forward_handle.abort_handle()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ScriptedSource, page};

    #[test]
    fn test_tui_state_new() {
        let tui = TuiState::new("sky");
        assert_eq!(tui.search_bar.buffer, "sky");
        assert_eq!(tui.search_bar.active_query, "sky");
        assert!(tui.page_size_picker.is_none());
        assert_eq!(tui.table_state.selected(), None);
    }

    #[test]
    fn test_summarize_hides_collection() {
        let action = Action::FetchCompleted(crate::test_support::trio());
        assert_eq!(summarize(&action), "FetchCompleted(3 characters)");
        assert_eq!(summarize(&Action::NextPage), "NextPage");
    }

    #[tokio::test]
    async fn test_spawn_fetch_reports_completion() {
        let source: Arc<dyn PageSource> = Arc::new(
            ScriptedSource::new()
                .with_page(
                    "http://localhost/p1",
                    page(2, Some("http://localhost/p2"), &[("Luke Skywalker", "blue", "2014-12-09T13:50:51.644000Z")]),
                )
                .with_page(
                    "http://localhost/p2",
                    page(2, None, &[("C-3PO", "yellow", "2014-12-10T15:10:51.357000Z")]),
                ),
        );
        let (tx, rx) = mpsc::channel();

        let handles = spawn_fetch(source, "http://localhost/p1".to_string(), tx);
        assert_eq!(handles.len(), 2);

        let mut app = App::new("http://localhost/p1".to_string());
        update(&mut app, Action::StartFetch);
        let outcome = tokio::time::timeout(Duration::from_secs(5), async {
            loop {
                match rx.try_recv() {
                    Ok(Action::FetchCompleted(characters)) => return characters,
                    Ok(other) => {
                        update(&mut app, other);
                    }
                    Err(_) => tokio::task::yield_now().await,
                }
            }
        })
        .await
        .expect("fetch did not complete");

        let names: Vec<_> = outcome.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Luke Skywalker", "C-3PO"]);
    }

    #[tokio::test]
    async fn test_spawn_fetch_reports_failure() {
        let source: Arc<dyn PageSource> = Arc::new(ScriptedSource::new());
        let (tx, rx) = mpsc::channel();

        spawn_fetch(source, "http://localhost/missing".to_string(), tx);

        let detail = tokio::time::timeout(Duration::from_secs(5), async {
            loop {
                match rx.try_recv() {
                    Ok(Action::FetchFailed(detail)) => return detail,
                    Ok(_) => {}
                    Err(_) => tokio::task::yield_now().await,
                }
            }
        })
        .await
        .expect("fetch did not fail");

        assert!(detail.contains("404"));
    }
}
