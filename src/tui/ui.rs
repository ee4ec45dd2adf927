use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{CharacterTable, PageSizePicker, PaginationBar, TitleBar, character_table};
use crate::core::view::SortColumn;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

const HELP_TEXT: &str =
    "Enter search · F1-F3/click sort · PgUp/PgDn page · Ctrl+P page size · Ctrl+R reload · Esc quit";

/// Splits the frame into title, search, main, pagination and help rows.
fn layout(area: Rect) -> [Rect; 5] {
    use Constraint::{Length, Min};
    Layout::vertical([Length(1), Length(3), Min(0), Length(1), Length(1)]).areas(area)
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    let [title_area, search_area, main_area, pagination_area, help_area] = layout(frame.area());

    TitleBar::new(app.status_message.clone(), app.is_loading, spinner_frame)
        .render(frame, title_area);

    tui.search_bar.active_query = app.view.search.clone();
    tui.search_bar.render(frame, search_area);

    if app.is_loading {
        draw_loading_view(frame, main_area, app, spinner_frame);
    } else if let Some(error_msg) = &app.error
        && app.characters.is_empty()
    {
        draw_error_view(frame, main_area, error_msg);
    } else {
        CharacterTable::new(&app.page_items, app.view.sort, &mut tui.table_state)
            .render(frame, main_area);
    }

    PaginationBar {
        page_number: app.view.window.number,
        page_count: app.page_count(),
        total: app.total_filtered,
        page_size: app.view.window.size.get(),
        has_previous: app.has_previous_page(),
        has_next: app.has_next_page(),
    }
    .render(frame, pagination_area);

    frame.render_widget(
        Paragraph::new(HELP_TEXT).style(Style::default().fg(Color::DarkGray)),
        help_area,
    );

    // Overlay last so it sits on top of everything
    if let Some(ref mut picker) = tui.page_size_picker {
        PageSizePicker::new(picker, app.view.window.size).render(frame, frame.area());
    }
}

fn draw_loading_view(frame: &mut Frame, area: Rect, app: &App, spinner_frame: usize) {
    const SPINNER: [&str; 4] = ["·  ", "·· ", "···", " ··"];
    let detail = match app.progress {
        Some(progress) => format!(
            "{} of {} characters ({} pages)",
            progress.loaded, progress.total, progress.pages
        ),
        None => String::from("Contacting the archive"),
    };

    let lines = vec![
        Line::from(Span::styled(
            format!("Loading characters {}", SPINNER[spinner_frame % SPINNER.len()]),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(detail, Style::default().fg(Color::Gray))),
    ];

    let inner_height = area.height.saturating_sub(2);
    let top_padding = inner_height.saturating_sub(lines.len() as u16) / 2;
    let mut padded = vec![Line::default(); top_padding as usize];
    padded.extend(lines);

    let paragraph = Paragraph::new(padded)
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_error_view(frame: &mut Frame, area: Rect, error_msg: &str) {
    let lines = vec![
        Line::from(Span::styled(error_msg, Style::default().fg(Color::Red))),
        Line::default(),
        Line::from(Span::styled(
            "Press Ctrl+R to try again",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let error_paragraph = Paragraph::new(lines)
        .block(Block::bordered().title("ERROR"))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(error_paragraph, area);
}

/// Hit test: given a screen position, find which sortable header (if any) is
/// under it.
pub fn hit_test_header(frame_area: Rect, x: u16, y: u16) -> Option<SortColumn> {
    let [_, _, main_area, _, _] = layout(frame_area);
    character_table::column_at(main_area, x, y)
}
