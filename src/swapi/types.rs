use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// ISO 8601 date-times carrying an offset (`Z`, `+02`, `+0200`, `+02:00`).
const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M%#z", "%Y-%m-%dT%H:%M:%S%.f%#z"];

/// ISO 8601 date-times without an offset.
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// A single person record from the upstream `people` collection.
///
/// Only the fields Roster displays are kept; serde drops the rest of the
/// upstream payload (height, homeworld, films, ...).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Character {
    pub name: String,
    pub eye_color: String,
    pub created: String,
}

impl Character {
    pub fn new(name: &str, eye_color: &str, created: &str) -> Self {
        Self {
            name: name.to_string(),
            eye_color: eye_color.to_string(),
            created: created.to_string(),
        }
    }

    /// Parses `created` into milliseconds since the Unix epoch.
    ///
    /// Accepts RFC 3339 and the looser ISO 8601 forms the upstream data uses:
    /// minutes-only times (`1977-05-25T22:00Z`), optional fractional seconds
    /// and offsets with or without a colon. A date-time without any offset is
    /// read as UTC, as is a bare `YYYY-MM-DD` (UTC midnight).
    /// Returns `None` for anything else.
    pub fn created_millis(&self) -> Option<i64> {
        let raw = self.created.trim();
        if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
            return Some(instant.timestamp_millis());
        }
        let with_offset = OFFSET_FORMATS
            .iter()
            .find_map(|format| DateTime::parse_from_str(raw, format).ok())
            .map(|instant| instant.timestamp_millis());
        if with_offset.is_some() {
            return with_offset;
        }
        let naive = NAIVE_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
            .or_else(|| {
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .ok()
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
            });
        naive.map(|utc| utc.and_utc().timestamp_millis())
    }

    pub fn has_blue_eyes(&self) -> bool {
        self.eye_color == "blue"
    }
}

/// One page of the upstream `people` listing.
#[derive(Deserialize, Debug, Clone)]
pub struct PeoplePage {
    /// Total number of records across all pages, as reported by the server.
    #[serde(default)]
    pub count: usize,
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<Character>,
}

impl PeoplePage {
    /// The continuation URL, treating an empty string the same as `null`.
    pub fn next_url(&self) -> Option<&str> {
        self.next.as_deref().filter(|url| !url.is_empty())
    }
}

/// Progress report emitted after each page is consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchProgress {
    /// Pages fetched so far.
    pub pages: usize,
    /// Characters accumulated so far.
    pub loaded: usize,
    /// Server-reported total record count (0 if unknown).
    pub total: usize,
}
