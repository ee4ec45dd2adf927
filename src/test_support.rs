//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::core::state::App;
use crate::swapi::{Character, FetchError, PageSource, PeoplePage};

/// In-memory page source keyed by URL. Unknown URLs answer 404.
pub struct ScriptedSource {
    pages: HashMap<String, PeoplePage>,
    requested: Mutex<Vec<String>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self {
            pages: HashMap::new(),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn with_page(mut self, url: &str, page: PeoplePage) -> Self {
        self.pages.insert(url.to_string(), page);
        self
    }

    /// URLs requested so far, in order.
    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageSource for ScriptedSource {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn fetch_page(&self, url: &str) -> Result<PeoplePage, FetchError> {
        self.requested.lock().unwrap().push(url.to_string());
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::Status {
                status: 404,
                message: format!("no page scripted for {url}"),
            })
    }
}

/// Builds a page from `(name, eye_color, created)` triples.
pub fn page(count: usize, next: Option<&str>, rows: &[(&str, &str, &str)]) -> PeoplePage {
    PeoplePage {
        count,
        next: next.map(str::to_string),
        previous: None,
        results: rows
            .iter()
            .map(|(name, eye, created)| Character::new(name, eye, created))
            .collect(),
    }
}

/// Luke, Vader and Leia with distinct timestamps on the same day.
pub fn trio() -> Vec<Character> {
    vec![
        Character::new("Luke Skywalker", "blue", "1977-05-25T22:00:00.000Z"),
        Character::new("Darth Vader", "yellow", "1977-05-25T12:00:00.000Z"),
        Character::new("Leia Organa", "brown", "1977-05-25T00:00:00.000Z"),
    ]
}

/// `n` characters named `Person 000`, `Person 001`, ... with alternating eye colours.
pub fn numbered(n: usize) -> Vec<Character> {
    (0..n)
        .map(|i| {
            let eye = if i % 2 == 0 { "brown" } else { "blue" };
            let created = format!("2014-12-{:02}T10:00:00Z", (i % 28) + 1);
            Character::new(&format!("Person {i:03}"), eye, &created)
        })
        .collect()
}

/// Creates a test App whose collection has already been loaded.
pub fn loaded_app(characters: Vec<Character>) -> App {
    let mut app = App::new("http://localhost/api/people/".to_string());
    app.publish_collection(characters);
    app
}
