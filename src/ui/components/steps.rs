use ratatui::{
    layout::Rect,
    prelude::*,
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Tabs},
    Frame,
};

use crate::app::state::App;

const STEPS: [&str; 3] = ["Select System", "Choose Apps", "Generate Script"];

pub fn render_steps(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let palette = app.palette();
    let current = app.selection.phase().step();

    let titles = STEPS
        .iter()
        .enumerate()
        .map(|(idx, title)| {
            let number = idx + 1;
            let marker = if number < current {
                "✓".to_string()
            } else {
                number.to_string()
            };
            Line::from(format!("{marker} {title}"))
        })
        .collect::<Vec<_>>();

    let tabs = Tabs::new(titles)
        .select(current - 1)
        .block(
            Block::default()
                .title(" omari ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(palette.panel)),
        )
        .style(Style::default().fg(palette.muted))
        .highlight_style(
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider(" ── ");
    frame.render_widget(tabs, area);
}
