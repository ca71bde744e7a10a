use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::{AppState, Modal};
use super::components::{
    CardsComponent, Component, FooterComponent, StatTilesComponent, render_confirm_modal,
    render_detail_modal, render_form_modal,
};

pub(crate) fn draw(f: &mut Frame, state: &mut AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Length(5), // Stat tiles
            Constraint::Length(3), // Toolbar (search / filter / sort)
            Constraint::Min(5),    // Tour cards
            Constraint::Length(2), // Footer (keys + toast)
        ])
        .split(f.area());

    render_title_bar(f, chunks[0]);

    let tiles = StatTilesComponent;
    tiles.render(f, chunks[1], state);

    render_toolbar(f, chunks[2], state);

    let cards = CardsComponent;
    cards.render(f, chunks[3], state);

    let footer = FooterComponent;
    footer.render(f, chunks[4], state);

    match &state.modal {
        Modal::None => {}
        Modal::Detail(record) => render_detail_modal(f, record, &state.view),
        Modal::ConfirmDelete(record) => render_confirm_modal(f, record),
        Modal::Form(editor) => render_form_modal(f, editor, &state.catalog),
    }
}

fn render_title_bar(f: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled(
            "━━ ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Tourdesk",
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" → travel agency admin", Style::default().fg(Color::White)),
        Span::styled(
            " ━━",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(title), area);
}

fn render_toolbar(f: &mut Frame, area: Rect, state: &AppState) {
    let search_style = if state.search_active {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let search_text = if state.search_buffer.is_empty() && !state.search_active {
        "(/ to search)".to_string()
    } else {
        state.search_buffer.clone()
    };

    let line = Line::from(vec![
        Span::styled("Search: ", Style::default().fg(Color::Gray)),
        Span::styled(search_text, search_style),
        Span::raw("  │  "),
        Span::styled("Type: ", Style::default().fg(Color::Gray)),
        Span::styled(
            state.filter_label(),
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  │  "),
        Span::styled("Sort: ", Style::default().fg(Color::Gray)),
        Span::styled(
            state.sort_label(),
            Style::default()
                .fg(Color::LightMagenta)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    f.render_widget(Paragraph::new(line).block(block), area);
}

/// Centered overlay rect for modals.
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
