pub mod client;
pub mod fetch;
pub mod source;
pub mod types;

pub use client::SwapiClient;
pub use fetch::{DEFAULT_BASE_URL, fetch_all};
pub use source::{FetchError, PageSource};
pub use types::{Character, FetchProgress, PeoplePage};
