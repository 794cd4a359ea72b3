use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    prelude::*,
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::app::state::{App, SystemFocus};
use crate::ui::theme::Palette;

struct Choice<'a> {
    id: &'a str,
    name: &'a str,
    description: &'a str,
}

pub fn render_system_picker(frame: &mut Frame<'_>, area: Rect, app: &mut App) {
    let palette = app.palette();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let distros: Vec<Choice> = app
        .catalog
        .distros()
        .iter()
        .map(|d| Choice {
            id: &d.id,
            name: &d.name,
            description: &d.description,
        })
        .collect();
    let desktops: Vec<Choice> = app
        .catalog
        .desktops()
        .iter()
        .map(|d| Choice {
            id: &d.id,
            name: &d.name,
            description: &d.description,
        })
        .collect();

    render_column(
        frame,
        columns[0],
        palette,
        " Linux Distribution ",
        &distros,
        app.selection.selected_distro(),
        app.system_focus == SystemFocus::Distro,
        &mut app.distro_state,
    );
    render_column(
        frame,
        columns[1],
        palette,
        " Desktop Environment ",
        &desktops,
        app.selection.selected_desktop(),
        app.system_focus == SystemFocus::Desktop,
        &mut app.desktop_state,
    );
}

#[allow(clippy::too_many_arguments)]
fn render_column(
    frame: &mut Frame<'_>,
    area: Rect,
    palette: &Palette,
    title: &str,
    choices: &[Choice<'_>],
    chosen: Option<&str>,
    focused: bool,
    state: &mut ListState,
) {
    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused {
            palette.primary
        } else {
            palette.panel
        }))
        .style(Style::default().bg(palette.bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(inner);

    let items: Vec<ListItem> = choices
        .iter()
        .map(|choice| {
            let is_chosen = chosen == Some(choice.id);
            let marker = if is_chosen { "(•)" } else { "( )" };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{marker} "), Style::default().fg(palette.primary)),
                Span::styled(
                    choice.name.to_string(),
                    if is_chosen {
                        Style::default().fg(palette.success).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(palette.text)
                    },
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .bg(palette.highlight)
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(if focused { ">> " } else { "   " });
    frame.render_stateful_widget(list, parts[0], state);

    // description of the chosen entry, else the highlighted one
    let described = chosen
        .and_then(|id| choices.iter().find(|c| c.id == id))
        .or_else(|| state.selected().and_then(|idx| choices.get(idx)));
    let description = Paragraph::new(described.map(|c| c.description).unwrap_or_default())
        .style(Style::default().fg(palette.muted))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(palette.panel)),
        );
    frame.render_widget(description, parts[1]);
}
