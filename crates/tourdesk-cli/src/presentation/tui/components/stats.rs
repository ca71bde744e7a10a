//! The four stat tiles with animated counters.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::Component;
use crate::presentation::formatters::group_thousands;
use crate::presentation::tui::app::AppState;

pub(crate) struct StatTilesComponent;

impl Component for StatTilesComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        if state.tiles.is_empty() {
            let placeholder = Paragraph::new(Line::from(Span::styled(
                "Loading statistics...",
                Style::default().fg(Color::DarkGray),
            )))
            .block(Block::default().borders(Borders::ALL));
            f.render_widget(placeholder, area);
            return;
        }

        let constraints = vec![Constraint::Ratio(1, state.tiles.len() as u32); state.tiles.len()];
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(area);

        let colors = [Color::Cyan, Color::Green, Color::Yellow, Color::Magenta];
        for (i, tile) in state.tiles.iter().enumerate() {
            let color = colors[i % colors.len()];
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(Span::styled(
                    format!(" {} ", tile.label),
                    Style::default().fg(color),
                ));

            let displayed = group_thousands(tile.counter.displayed());
            let value = if tile.suffix.is_empty() {
                displayed
            } else {
                format!("{} {}", displayed, tile.suffix)
            };

            let number = Paragraph::new(Line::from(Span::styled(
                value,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )))
            .block(block);

            f.render_widget(number, chunks[i]);
        }
    }
}
