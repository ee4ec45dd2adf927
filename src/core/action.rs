//! # Actions
//!
//! Everything that can happen in Roster becomes an `Action`.
//! User submits a search? That's `Action::SubmitSearch(text)`.
//! The fetch task finishes? That's `Action::FetchCompleted(characters)`.
//!
//! The `update()` function applies an action to the state and returns the
//! `Effect` the adapter must carry out. No I/O here. Every action that touches
//! the view state triggers exactly one transform pass.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::core::state::App;
use crate::core::view::{PageSize, SortColumn};
use crate::swapi::{Character, FetchProgress};

/// Message shown to the user for any fetch failure. Details go to the log.
pub const FETCH_ERROR_MESSAGE: &str = "Error fetching characters";

#[derive(Debug)]
pub enum Action {
    /// Begin (or retry) retrieving the full collection.
    StartFetch,
    FetchProgress(FetchProgress),
    FetchCompleted(Vec<Character>),
    /// Carries the error detail for logging.
    FetchFailed(String),
    SubmitSearch(String),
    SetPageSize(PageSize),
    SortBy(SortColumn),
    NextPage,
    PreviousPage,
    Quit,
}

/// Side effects requested by `update()`, performed by the adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    SpawnFetch,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::StartFetch => {
            if app.is_loading {
                debug!("Fetch already in flight, ignoring StartFetch");
                return Effect::None;
            }
            app.is_loading = true;
            app.error = None;
            app.progress = None;
            app.status_message = String::from("Loading characters...");
            Effect::SpawnFetch
        }
        Action::FetchProgress(progress) => {
            if app.is_loading {
                app.progress = Some(progress);
                app.status_message = if progress.total > 0 {
                    format!(
                        "Loading characters... {}/{} (page {})",
                        progress.loaded, progress.total, progress.pages
                    )
                } else {
                    format!(
                        "Loading characters... {} (page {})",
                        progress.loaded, progress.pages
                    )
                };
            }
            Effect::None
        }
        Action::FetchCompleted(characters) => {
            info!("Publishing collection of {} characters", characters.len());
            app.is_loading = false;
            app.progress = None;
            app.error = None;
            app.status_message = format!("Loaded {} characters", characters.len());
            app.publish_collection(characters);
            Effect::None
        }
        Action::FetchFailed(detail) => {
            warn!("Fetch failed: {}", detail);
            app.is_loading = false;
            app.progress = None;
            app.error = Some(FETCH_ERROR_MESSAGE.to_string());
            app.status_message = String::from("Fetch failed (Ctrl+R to retry)");
            Effect::None
        }
        Action::SubmitSearch(text) => {
            app.view = app.view.with_search(&text);
            app.recompute();
            Effect::None
        }
        Action::SetPageSize(size) => {
            app.view = app.view.with_page_size(size);
            app.recompute();
            Effect::None
        }
        Action::SortBy(column) => {
            app.view = app.view.with_sort_on(column);
            app.recompute();
            Effect::None
        }
        Action::NextPage => {
            if app.has_next_page() {
                app.view = app.view.next_page();
                app.recompute();
            }
            Effect::None
        }
        Action::PreviousPage => {
            if app.has_previous_page() {
                app.view = app.view.previous_page();
                app.recompute();
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
