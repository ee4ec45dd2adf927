//! # CharacterTable Component
//!
//! Renders the current page as a three-column table with sortable headers.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `TableState` (row highlight) lives in `TuiState`
//! - `CharacterTable` is created each frame with borrowed state and props
//!
//! Header cells double as click targets; [`column_at`] maps a screen position
//! back to the column using the same layout the table itself uses.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Cell, HighlightSpacing, Paragraph, Row, Table, TableState};

use crate::core::view::{SortColumn, SortSpec};
use crate::swapi::Character;
use crate::tui::component::Component;

/// Column widths, in `SortColumn::ALL` order.
const WIDTHS: [Constraint; 3] = [
    Constraint::Percentage(40),
    Constraint::Percentage(25),
    Constraint::Percentage(35),
];
const COLUMN_SPACING: u16 = 1;

pub struct CharacterTable<'a> {
    items: &'a [Character],
    sort: SortSpec,
    state: &'a mut TableState,
}

impl<'a> CharacterTable<'a> {
    pub fn new(items: &'a [Character], sort: SortSpec, state: &'a mut TableState) -> Self {
        Self { items, sort, state }
    }
}

/// Header text for a column, e.g. `Name ↑`.
pub fn header_label(column: SortColumn, sort: SortSpec) -> String {
    let indicator = sort.indicator(column);
    if indicator.is_empty() {
        column.label().to_string()
    } else {
        format!("{} {}", column.label(), indicator)
    }
}

/// Which header cell (if any) is at screen position `(x, y)` for a table
/// rendered into `area`.
pub fn column_at(area: Rect, x: u16, y: u16) -> Option<SortColumn> {
    let inner = area.inner(Margin::new(1, 1));
    if inner.width == 0 || inner.height == 0 || y != inner.y {
        return None;
    }
    let header = Rect { height: 1, ..inner };
    let cells = Layout::horizontal(WIDTHS)
        .spacing(COLUMN_SPACING)
        .split(header);
    cells
        .iter()
        .position(|cell| x >= cell.x && x < cell.x + cell.width)
        .map(|index| SortColumn::ALL[index])
}

impl Component for CharacterTable<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let items = self.items;
        let sort = self.sort;
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Characters ")
            .title_bottom(Line::from(" F1 Name  F2 Eye Color  F3 Created ").centered());

        let header = Row::new(SortColumn::ALL.map(|column| {
            let style = if !sort.indicator(column).is_empty() {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            Cell::from(header_label(column, sort)).style(style)
        }));

        let rows = items.iter().map(|character| {
            Row::new([
                Cell::from(character.name.as_str()),
                Cell::from(character.eye_color.as_str()),
                Cell::from(character.created.as_str()),
            ])
        });

        if items.is_empty() {
            self.state.select(None);
        } else if let Some(selected) = self.state.selected()
            && selected >= items.len()
        {
            self.state.select(Some(items.len() - 1));
        }

        let table = Table::new(rows, WIDTHS)
            .header(header)
            .column_spacing(COLUMN_SPACING)
            .highlight_spacing(HighlightSpacing::Never)
            .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .block(block);

        frame.render_stateful_widget(table, area, self.state);

        if items.is_empty() {
            let inner = area.inner(Margin::new(1, 1));
            let body = Rect {
                y: inner.y.saturating_add(2),
                height: inner.height.saturating_sub(2),
                ..inner
            };
            let empty = Paragraph::new("No matching characters")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(empty, body);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::view::SortOrder;
    use crate::test_support::trio;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_header_label() {
        let asc = SortSpec {
            column: Some(SortColumn::Created),
            order: SortOrder::Asc,
        };
        assert_eq!(header_label(SortColumn::Created, asc), "Created ↑");
        assert_eq!(header_label(SortColumn::Name, asc), "Name");
        assert_eq!(header_label(SortColumn::Name, SortSpec::default()), "Name");
    }

    #[test]
    fn test_column_at_maps_header_cells() {
        let area = Rect::new(0, 0, 102, 20);
        // Inner area starts at x=1, header row at y=1
        assert_eq!(column_at(area, 1, 1), Some(SortColumn::Name));
        assert_eq!(column_at(area, 50, 1), Some(SortColumn::EyeColor));
        assert_eq!(column_at(area, 90, 1), Some(SortColumn::Created));
        // Border and body rows are not headers
        assert_eq!(column_at(area, 50, 0), None);
        assert_eq!(column_at(area, 50, 2), None);
        assert_eq!(column_at(area, 0, 1), None);
    }

    #[test]
    fn test_render_rows_and_headers() {
        let backend = TestBackend::new(100, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        let items = trio();
        let mut state = TableState::default();
        let sort = SortSpec {
            column: Some(SortColumn::Name),
            order: SortOrder::Desc,
        };

        terminal
            .draw(|f| CharacterTable::new(&items, sort, &mut state).render(f, f.area()))
            .unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Name ↓"));
        assert!(text.contains("Eye Color"));
        assert!(text.contains("Luke Skywalker"));
        assert!(text.contains("yellow"));
        assert!(text.contains("1977-05-25T00:00:00.000Z"));
    }

    #[test]
    fn test_render_empty_page() {
        let backend = TestBackend::new(80, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = TableState::default();
        state.select(Some(4));

        terminal
            .draw(|f| CharacterTable::new(&[], SortSpec::default(), &mut state).render(f, f.area()))
            .unwrap();

        assert!(screen_text(&terminal).contains("No matching characters"));
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_selection_clamped_to_page() {
        let backend = TestBackend::new(80, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        let items = trio();
        let mut state = TableState::default();
        state.select(Some(10));

        terminal
            .draw(|f| CharacterTable::new(&items, SortSpec::default(), &mut state).render(f, f.area()))
            .unwrap();

        assert_eq!(state.selected(), Some(2));
    }
}
