use ratatui::{
    layout::Rect,
    prelude::*,
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::state::{App, Row};

pub fn render_detail_panel(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let palette = app.palette();
    let details_block = Block::default()
        .title(" Details ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.panel))
        .style(Style::default().bg(palette.bg));
    let details_inner = details_block.inner(area);
    frame.render_widget(details_block, area);

    let label = |text: &'static str| Span::styled(text, Style::default().fg(palette.muted));

    let mut lines = match app.current_row() {
        Some(row @ Row::App { .. }) => match (app.row_app(row), app.row_category(row)) {
            (Some(entry), Some(category)) => vec![
                Line::from(vec![
                    label("Name: "),
                    Span::styled(
                        entry.name.clone(),
                        Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(vec![
                    label("ID: "),
                    Span::styled(entry.id.clone(), Style::default().fg(palette.text)),
                ]),
                Line::from(vec![
                    label("Category: "),
                    Span::styled(category.name.clone(), Style::default().fg(palette.text)),
                ]),
                Line::from(vec![
                    label("Script: "),
                    Span::styled(entry.script_path.clone(), Style::default().fg(palette.primary)),
                ]),
                Line::from(vec![
                    label("Runs on: "),
                    Span::styled(
                        entry.compatibility.join(", "),
                        Style::default().fg(palette.text),
                    ),
                ]),
                Line::from(""),
                Line::from(Span::styled(
                    entry.description.clone(),
                    Style::default().fg(palette.text),
                )),
            ],
            _ => Vec::new(),
        },
        Some(row @ Row::Category(_)) => match app.row_category(row) {
            Some(category) => vec![
                Line::from(Span::styled(
                    category.name.clone(),
                    Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    category.description.clone(),
                    Style::default().fg(palette.muted),
                )),
                Line::from(""),
                Line::from(label("Enter expands, Space on an app selects it.")),
            ],
            None => Vec::new(),
        },
        None => vec![Line::from(label(
            "No applications available for this distribution.",
        ))],
    };

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        app.summary(),
        Style::default().fg(palette.primary).add_modifier(Modifier::BOLD),
    )));

    let incompatible = app.incompatible_selected();
    if !incompatible.is_empty() {
        let names = incompatible
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(Line::from(Span::styled(
            format!("Not supported by this distro but still selected: {names}"),
            Style::default().fg(palette.warning),
        )));
    }

    let details_widget = Paragraph::new(lines).wrap(Wrap { trim: true });
    frame.render_widget(details_widget, details_inner);
}
