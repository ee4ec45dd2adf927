//! # PaginationBar Component
//!
//! One-line footer with previous/next controls and the page position.
//! Stateless: the parent decides whether each control is enabled, and a
//! disabled control is drawn dimmed.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

const PREVIOUS_LABEL: &str = "◀ Prev (PgUp)";
const NEXT_LABEL: &str = "Next (PgDn) ▶";

pub struct PaginationBar {
    pub page_number: usize,
    pub page_count: usize,
    pub total: usize,
    pub page_size: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

impl PaginationBar {
    pub fn summary(&self) -> String {
        let noun = if self.total == 1 { "match" } else { "matches" };
        format!(
            "Page {}/{} · {} {} · {} per page (Ctrl+P)",
            self.page_number, self.page_count, self.total, noun, self.page_size
        )
    }
}

fn control_style(enabled: bool) -> Style {
    if enabled {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
    }
}

impl Component for PaginationBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [prev_area, summary_area, next_area] = Layout::horizontal([
            Constraint::Length(PREVIOUS_LABEL.chars().count() as u16),
            Constraint::Min(0),
            Constraint::Length(NEXT_LABEL.chars().count() as u16),
        ])
        .areas(area);

        frame.render_widget(
            Span::styled(PREVIOUS_LABEL, control_style(self.has_previous)),
            prev_area,
        );
        frame.render_widget(
            Paragraph::new(self.summary())
                .centered()
                .style(Style::default().fg(Color::Gray)),
            summary_area,
        );
        frame.render_widget(
            Span::styled(NEXT_LABEL, control_style(self.has_next)),
            next_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn bar(page_number: usize, has_previous: bool, has_next: bool) -> PaginationBar {
        PaginationBar {
            page_number,
            page_count: 4,
            total: 82,
            page_size: 25,
            has_previous,
            has_next,
        }
    }

    #[test]
    fn test_summary() {
        assert_eq!(bar(2, true, true).summary(), "Page 2/4 · 82 matches · 25 per page (Ctrl+P)");

        let single = PaginationBar {
            total: 1,
            page_count: 1,
            ..bar(1, false, false)
        };
        assert!(single.summary().contains("1 match ·"));
    }

    #[test]
    fn test_disabled_controls_are_dimmed() {
        let backend = TestBackend::new(90, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut first_page = bar(1, false, true);

        terminal.draw(|f| first_page.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Prev (PgUp)"));
        assert!(text.contains("Page 1/4"));
        assert!(text.contains("Next (PgDn)"));

        let prev_cell = buffer.cell((0, 0)).unwrap();
        assert!(prev_cell.modifier.contains(Modifier::DIM));
        let next_cell = buffer.cell((89, 0)).unwrap();
        assert!(!next_cell.modifier.contains(Modifier::DIM));
        assert!(next_cell.modifier.contains(Modifier::BOLD));
    }
}
