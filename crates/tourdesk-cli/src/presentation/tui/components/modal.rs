//! Modal overlays: tour detail, delete confirmation, and the add/edit form.

use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use tourdesk_engine::{Field, FormMode, FormPhase};
use tourdesk_types::{Catalog, TourRecord};

use crate::presentation::presenters;
use crate::presentation::tui::app::{FormEditor, ViewConfig};
use crate::presentation::tui::ui::centered_rect;

pub(crate) fn render_detail_modal(f: &mut Frame, record: &TourRecord, view: &ViewConfig) {
    let card = presenters::build_card(record, &view.currency_suffix);
    let area = centered_rect(64, 14, f.area());

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Span::styled(
            format!(" {} (#{}) ", card.title, card.id),
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ));

    let label = Style::default().fg(Color::Gray);
    let lines = vec![
        Line::from(vec![Span::styled("Where  ", label), Span::raw(card.location)]),
        Line::from(vec![Span::styled("When   ", label), Span::raw(card.dates)]),
        Line::from(vec![
            Span::styled("What   ", label),
            Span::raw(format!("{}, {}", card.tour_type, card.duration)),
        ]),
        Line::from(vec![Span::styled("Hotel  ", label), Span::raw(card.hotel)]),
        Line::from(vec![Span::styled("Group  ", label), Span::raw(card.capacity)]),
        Line::from(vec![
            Span::styled("Price  ", label),
            Span::styled(card.price, Style::default().add_modifier(Modifier::BOLD)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            card.description,
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Esc to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    f.render_widget(Clear, area);
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }).block(block), area);
}

pub(crate) fn render_confirm_modal(f: &mut Frame, record: &TourRecord) {
    let area = centered_rect(50, 7, f.area());

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(Span::styled(
            " Delete tour ",
            Style::default().fg(Color::LightRed).add_modifier(Modifier::BOLD),
        ));

    let lines = vec![
        Line::from(""),
        Line::from(Span::raw(format!(
            "Are you sure you want to delete \"{}\"?",
            record.name
        ))),
        Line::from(""),
        Line::from(vec![
            Span::styled("y", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            Span::raw(" delete   "),
            Span::styled("n", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
            Span::raw(" keep it"),
        ]),
    ];

    f.render_widget(Clear, area);
    f.render_widget(Paragraph::new(lines).block(block), area);
}

pub(crate) fn render_form_modal(f: &mut Frame, editor: &FormEditor, catalog: &Catalog) {
    let area = centered_rect(66, 19, f.area());

    let title = match editor.form.mode() {
        FormMode::Add => " Add tour ".to_string(),
        FormMode::Edit(id) => format!(" Edit tour #{} ", id),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Span::styled(
            title,
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ));

    let mut lines = Vec::new();
    for (i, field) in Field::all().iter().enumerate() {
        lines.push(field_line(editor, catalog, *field, i == editor.focus));
    }

    lines.push(Line::from(""));
    match editor.form.phase() {
        FormPhase::Submitting => {
            lines.push(Line::from(Span::styled(
                "Saving...",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )));
        }
        FormPhase::Idle => {
            if editor.form.errors().is_empty() {
                lines.push(Line::from(Span::styled(
                    "↑↓ field · ←→ choose · Enter save · Esc cancel",
                    Style::default().fg(Color::DarkGray),
                )));
            } else {
                for error in editor.form.errors().iter().take(3) {
                    lines.push(Line::from(Span::styled(
                        format!("✖ {}", error),
                        Style::default().fg(Color::Red),
                    )));
                }
            }
        }
    }

    f.render_widget(Clear, area);
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn field_line<'a>(
    editor: &'a FormEditor,
    catalog: &Catalog,
    field: Field,
    focused: bool,
) -> Line<'a> {
    let value = editor.form.value(field);
    let select = matches!(
        field,
        Field::Country | Field::City | Field::Hotel | Field::TourType
    );

    let label_style = if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let shown = if value.is_empty() {
        if select {
            match field {
                Field::Country => format!("◂ choose ({} options) ▸", catalog.countries().len()),
                Field::City => format!("◂ choose ({} options) ▸", editor.form.city_options().len()),
                Field::Hotel => {
                    format!("◂ choose ({} options) ▸", editor.form.hotel_options().len())
                }
                _ => "◂ choose ▸".to_string(),
            }
        } else {
            String::new()
        }
    } else if select {
        format!("◂ {} ▸", value)
    } else {
        value.to_string()
    };

    let value_style = if value.is_empty() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    };

    let cursor = if focused && !select { "_" } else { "" };

    Line::from(vec![
        Span::styled(format!("{:<16}", field.label()), label_style),
        Span::styled(shown, value_style),
        Span::styled(cursor, Style::default().fg(Color::Yellow)),
    ])
}
