use ratatui::{
    layout::Rect,
    prelude::*,
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, List, ListItem},
    Frame,
};

use crate::app::state::{App, Row};
use crate::catalog::compatible_apps;
use crate::utils::truncate_with_ellipsis;

pub fn render_category_list(frame: &mut Frame<'_>, area: Rect, app: &mut App) {
    let palette = app.palette();
    let block = Block::default()
        .title(" Choose Your Applications ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.panel))
        .style(Style::default().bg(palette.bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width as usize;
    let desc_width = width.saturating_sub(34).max(12);
    let distro = app.selection.selected_distro();

    let items: Vec<ListItem> = app
        .rows
        .iter()
        .filter_map(|row| match *row {
            Row::Category(idx) => {
                let category = app.catalog.categories().get(idx)?;
                let expanded = app.selection.active_category() == Some(category.id.as_str());
                let compatible = compatible_apps(&app.catalog, category, distro);
                let chosen = compatible
                    .iter()
                    .filter(|a| app.selection.is_selected(&a.id))
                    .count();
                let arrow = if expanded { "▾" } else { "▸" };
                Some(ListItem::new(Line::from(vec![
                    Span::styled(format!("{arrow} "), Style::default().fg(palette.primary)),
                    Span::styled(
                        category.name.clone(),
                        Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  {}/{}  ", chosen, compatible.len()),
                        Style::default().fg(palette.success),
                    ),
                    Span::styled(
                        truncate_with_ellipsis(&category.description, desc_width),
                        Style::default().fg(palette.muted),
                    ),
                ])))
            }
            Row::App { .. } => {
                let entry = app.row_app(*row)?;
                let selected = app.selection.is_selected(&entry.id);
                let checkbox = if selected { "[x]" } else { "[ ]" };
                Some(ListItem::new(Line::from(vec![
                    Span::styled(format!("    {checkbox} "), Style::default().fg(palette.primary)),
                    Span::styled(
                        format!("{:<22}", truncate_with_ellipsis(&entry.name, 21)),
                        Style::default().fg(if selected { palette.success } else { palette.text }),
                    ),
                    Span::styled(
                        truncate_with_ellipsis(&entry.description, desc_width),
                        Style::default().fg(palette.muted),
                    ),
                ])))
            }
        })
        .collect();

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .bg(palette.highlight)
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ")
        .repeat_highlight_symbol(true);

    frame.render_stateful_widget(list, inner, &mut app.list_state);
}
