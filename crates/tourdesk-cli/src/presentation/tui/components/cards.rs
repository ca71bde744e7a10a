//! The tour card table. Hidden cards (filtered or searched away) are kept
//! by the controller but not drawn.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Row, Table},
};

use super::Component;
use crate::presentation::presenters;
use crate::presentation::tui::app::AppState;

pub(crate) struct CardsComponent;

impl Component for CardsComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let visible = state.visible_records();
        let refs: Vec<_> = visible.iter().collect();
        let cards = presenters::build_cards(&refs, &state.view.currency_suffix);

        let title = format!(
            " Tours ({} of {}) ",
            state.controller.visible_len(),
            state.controller.total_len()
        );
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Span::styled(
                title,
                Style::default()
                    .fg(Color::LightCyan)
                    .add_modifier(Modifier::BOLD),
            ));

        let header = Row::new(vec!["ID", "TOUR", "LOCATION", "DAYS", "TYPE", "PRICE"]).style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );

        let rows: Vec<Row> = cards
            .iter()
            .map(|card| {
                Row::new(vec![
                    card.id.to_string(),
                    card.title.clone(),
                    card.location.clone(),
                    card.duration.clone(),
                    card.tour_type.clone(),
                    card.price.clone(),
                ])
            })
            .collect();

        let widths = [
            Constraint::Length(4),
            Constraint::Min(20),
            Constraint::Min(18),
            Constraint::Length(8),
            Constraint::Length(14),
            Constraint::Length(14),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .row_highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol(">> ");

        state.table_state.select(if cards.is_empty() {
            None
        } else {
            Some(state.selected.min(cards.len() - 1))
        });

        f.render_stateful_widget(table, area, &mut state.table_state);
    }
}
