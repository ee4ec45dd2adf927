//! # View Transform
//!
//! Turns the full character collection plus the current [`ViewState`] into the
//! rows on screen. Three steps, always in this order:
//!
//! ```text
//! collection ─► filter(search) ─► sort(spec) ─► paginate(window) ─► ViewPage
//!                                      │
//!                                      └─► total (for next/prev enablement)
//! ```
//!
//! Everything here is pure and total. The reducer calls [`apply`] once per
//! state change; nothing is cached between calls.
//!
//! ## Timestamps
//!
//! `created` values that do not parse compare greater than every valid
//! instant: they sort last ascending and first descending. Two unparseable
//! values compare equal, so the stable sort keeps their input order.

use std::cmp::Ordering;

use crate::swapi::Character;

// ============================================================================
// Sort Specification
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Name,
    EyeColor,
    Created,
}

impl SortColumn {
    /// Display order of the table columns.
    pub const ALL: [SortColumn; 3] = [SortColumn::Name, SortColumn::EyeColor, SortColumn::Created];

    pub fn label(self) -> &'static str {
        match self {
            SortColumn::Name => "Name",
            SortColumn::EyeColor => "Eye Color",
            SortColumn::Created => "Created",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    Desc,
    /// Built-in ordering: blue eyes first, then name or creation date.
    #[default]
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    /// Ignored when `order` is `Default`. `None` with Asc/Desc leaves input order.
    pub column: Option<SortColumn>,
    pub order: SortOrder,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            column: Some(SortColumn::Name),
            order: SortOrder::Default,
        }
    }
}

impl SortSpec {
    /// Header activation: same column flips Asc/Desc, another column starts at Asc.
    pub fn toggled(self, column: SortColumn) -> Self {
        if self.column == Some(column) {
            let order = match self.order {
                SortOrder::Asc => SortOrder::Desc,
                SortOrder::Desc | SortOrder::Default => SortOrder::Asc,
            };
            Self { order, ..self }
        } else {
            Self {
                column: Some(column),
                order: SortOrder::Asc,
            }
        }
    }

    /// Arrow shown next to a column header.
    pub fn indicator(self, column: SortColumn) -> &'static str {
        if self.column != Some(column) {
            return "";
        }
        match self.order {
            SortOrder::Asc => "↑",
            SortOrder::Desc => "↓",
            SortOrder::Default => "",
        }
    }
}

// ============================================================================
// Page Window
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    #[default]
    TwentyFive,
    Fifty,
    Hundred,
    HundredFifty,
}

impl PageSize {
    pub const ALL: [PageSize; 4] = [
        PageSize::TwentyFive,
        PageSize::Fifty,
        PageSize::Hundred,
        PageSize::HundredFifty,
    ];

    pub fn get(self) -> usize {
        match self {
            PageSize::TwentyFive => 25,
            PageSize::Fifty => 50,
            PageSize::Hundred => 100,
            PageSize::HundredFifty => 150,
        }
    }
}

impl TryFrom<usize> for PageSize {
    type Error = usize;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        PageSize::ALL
            .into_iter()
            .find(|size| size.get() == value)
            .ok_or(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub size: PageSize,
    /// 1-based.
    pub number: usize,
}

impl Default for PageWindow {
    fn default() -> Self {
        Self {
            size: PageSize::default(),
            number: 1,
        }
    }
}

impl PageWindow {
    /// Half-open index range `[start, end)` this window covers.
    pub fn bounds(&self) -> (usize, usize) {
        let size = self.size.get();
        let start = self.number.saturating_sub(1).saturating_mul(size);
        (start, start.saturating_add(size))
    }

    pub fn has_next(&self, total: usize) -> bool {
        self.number.saturating_mul(self.size.get()) < total
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    /// Number of pages needed for `total` rows (at least one).
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.size.get()).max(1)
    }
}

// ============================================================================
// View State
// ============================================================================

/// Everything the user controls about what is displayed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    pub search: String,
    pub sort: SortSpec,
    pub window: PageWindow,
}

impl ViewState {
    /// New search text. Resets to page 1 only if the text actually changed.
    pub fn with_search(&self, search: &str) -> Self {
        if self.search == search {
            return self.clone();
        }
        Self {
            search: search.to_string(),
            sort: self.sort,
            window: PageWindow {
                number: 1,
                ..self.window
            },
        }
    }

    /// New page size, always back to page 1.
    pub fn with_page_size(&self, size: PageSize) -> Self {
        Self {
            window: PageWindow { size, number: 1 },
            ..self.clone()
        }
    }

    /// Header activation. The page number is kept.
    pub fn with_sort_on(&self, column: SortColumn) -> Self {
        Self {
            sort: self.sort.toggled(column),
            ..self.clone()
        }
    }

    /// Unclamped: callers gate this on [`PageWindow::has_next`].
    pub fn next_page(&self) -> Self {
        Self {
            window: PageWindow {
                number: self.window.number.saturating_add(1),
                ..self.window
            },
            ..self.clone()
        }
    }

    pub fn previous_page(&self) -> Self {
        Self {
            window: PageWindow {
                number: self.window.number.saturating_sub(1).max(1),
                ..self.window
            },
            ..self.clone()
        }
    }
}

// ============================================================================
// Transform
// ============================================================================

/// Result of one transform pass.
#[derive(Debug, PartialEq)]
pub struct ViewPage<'a> {
    pub items: Vec<&'a Character>,
    /// Size of the filtered+sorted sequence before slicing.
    pub total: usize,
}

/// Keeps characters whose name contains `search`, ignoring case.
pub fn filter<'a>(characters: &'a [Character], search: &str) -> Vec<&'a Character> {
    let needle = search.to_lowercase();
    characters
        .iter()
        .filter(|c| c.name.to_lowercase().contains(&needle))
        .collect()
}

/// Ascending comparison on creation instant; unparseable values go last.
fn compare_created(a: &Character, b: &Character) -> Ordering {
    match (a.created_millis(), b.created_millis()) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// The built-in ordering used for `SortOrder::Default`.
pub fn compare_default(a: &Character, b: &Character) -> Ordering {
    match (a.has_blue_eyes(), b.has_blue_eyes()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (true, true) => a.name.cmp(&b.name),
        (false, false) => compare_created(a, b),
    }
}

/// Ascending comparison on a single column.
pub fn compare_column(a: &Character, b: &Character, column: SortColumn) -> Ordering {
    match column {
        SortColumn::Name => a.name.cmp(&b.name),
        SortColumn::EyeColor => a.eye_color.cmp(&b.eye_color),
        SortColumn::Created => compare_created(a, b),
    }
}

/// Stable in-place sort according to `spec`.
pub fn sort(items: &mut [&Character], spec: SortSpec) {
    match (spec.order, spec.column) {
        (SortOrder::Default, _) => items.sort_by(|a, b| compare_default(a, b)),
        (SortOrder::Asc, Some(column)) => items.sort_by(|a, b| compare_column(a, b, column)),
        (SortOrder::Desc, Some(column)) => items.sort_by(|a, b| compare_column(b, a, column)),
        (SortOrder::Asc | SortOrder::Desc, None) => {}
    }
}

/// The slice of `items` covered by `window`; empty past the end.
pub fn paginate<T>(items: &[T], window: PageWindow) -> &[T] {
    let (start, end) = window.bounds();
    let start = start.min(items.len());
    let end = end.min(items.len());
    &items[start..end]
}

/// Filter, sort and paginate `characters` for `view`.
pub fn apply<'a>(characters: &'a [Character], view: &ViewState) -> ViewPage<'a> {
    let mut matched = filter(characters, &view.search);
    sort(&mut matched, view.sort);
    let total = matched.len();
    let items = paginate(&matched, view.window).to_vec();
    ViewPage { items, total }
}
