//! Key help plus the latest toast notification.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::presentation::tui::app::{AppState, ToastLevel};

pub(crate) struct FooterComponent;

impl Component for FooterComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let mut lines = Vec::new();

        let toast_line = match state.latest_toast() {
            Some(toast) => {
                let (icon, color) = match toast.level {
                    ToastLevel::Success => ("✔", Color::Green),
                    ToastLevel::Warning => ("⚠", Color::Yellow),
                    ToastLevel::Error => ("✖", Color::Red),
                };
                Line::from(vec![
                    Span::styled(
                        format!("{} ", icon),
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(toast.message.clone(), Style::default().fg(color)),
                ])
            }
            None => Line::from(""),
        };
        lines.push(toast_line);

        lines.push(Line::from(Span::styled(
            "/ search · f filter · s sort · a add · e edit · d delete · enter details · r refresh · q quit",
            Style::default().fg(Color::DarkGray),
        )));

        f.render_widget(Paragraph::new(lines), area);
    }
}
