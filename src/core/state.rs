//! # Application State
//!
//! Core business state for Roster. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── base_url: String              // first page of the listing
//! ├── characters: Vec<Character>    // full collection, write-once per fetch
//! ├── view: ViewState               // search, sort, page window
//! ├── page_items: Vec<Character>    // rows of the current page
//! ├── total_filtered: usize         // filtered+sorted length
//! ├── is_loading: bool              // fetch in flight
//! ├── progress: Option<FetchProgress>
//! ├── error: Option<String>         // user-facing error message
//! └── status_message: String        // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::config::ResolvedConfig;
use crate::core::view::{self, ViewState};
use crate::swapi::{Character, FetchProgress};

pub struct App {
    pub base_url: String,
    pub characters: Vec<Character>,
    pub view: ViewState,
    pub page_items: Vec<Character>,
    pub total_filtered: usize,
    pub is_loading: bool,
    pub progress: Option<FetchProgress>,
    pub error: Option<String>,
    pub status_message: String,
}

impl App {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            characters: Vec::new(),
            view: ViewState::default(),
            page_items: Vec::new(),
            total_filtered: 0,
            is_loading: false,
            progress: None,
            error: None,
            status_message: String::from("Welcome to Roster!"),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        let mut app = Self::new(config.base_url.clone());
        app.view = ViewState::default()
            .with_page_size(config.page_size)
            .with_search(&config.initial_search);
        app
    }

    /// Replaces the full collection and recomputes the visible page.
    pub fn publish_collection(&mut self, characters: Vec<Character>) {
        self.characters = characters;
        self.recompute();
    }

    /// Runs the view transform against the cached collection.
    pub fn recompute(&mut self) {
        let page = view::apply(&self.characters, &self.view);
        self.total_filtered = page.total;
        self.page_items = page.items.into_iter().cloned().collect();
    }

    pub fn has_next_page(&self) -> bool {
        !self.is_loading && self.view.window.has_next(self.total_filtered)
    }

    pub fn has_previous_page(&self) -> bool {
        !self.is_loading && self.view.window.has_previous()
    }

    pub fn page_count(&self) -> usize {
        self.view.window.page_count(self.total_filtered)
    }
}
