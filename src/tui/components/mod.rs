//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as props:
//! - `TitleBar`: Top status bar with loading spinner
//! - `PaginationBar`: Previous/next controls and page position
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `SearchBar`: Name filter input, emits on Enter
//! - `CharacterTable`: Current page with sortable headers (borrows `TableState`)
//! - `PageSizePicker`: Overlay for 25/50/100/150 rows per page
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as props, never by reaching into `App`.
//!
//! ```rust,ignore
//! // Good: dependencies are explicit
//! TitleBar::new(app.status_message.clone(), app.is_loading, frame).render(f, area);
//!
//! // Bad: hidden dependency on global state
//! title_bar.render(f, area); // reads from global App
//! ```

pub mod character_table;
pub mod page_size_picker;
pub mod pagination_bar;
pub mod search_bar;
mod title_bar;

pub use character_table::CharacterTable;
pub use page_size_picker::{PageSizeEvent, PageSizePicker, PageSizePickerState};
pub use pagination_bar::PaginationBar;
pub use search_bar::{SearchBar, SearchEvent};
pub use title_bar::TitleBar;
