use ratatui::{
    layout::{Constraint, Direction, Layout},
    prelude::*,
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::state::{App, Screen};
use crate::ui::components::{
    category_list::render_category_list, detail_panel::render_detail_panel,
    footer::render_footer, script_panel::render_script_panel, steps::render_steps,
    system_picker::render_system_picker,
};
use crate::ui::layout::centered_rect;

pub fn ui(frame: &mut Frame<'_>, app: &mut App) {
    let palette = app.palette();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.bg)),
        frame.area(),
    );

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(4),
        ])
        .split(frame.area());

    render_steps(frame, vertical[0], app);

    match app.screen() {
        Screen::System => render_system_picker(frame, vertical[1], app),
        Screen::Apps => {
            let body = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
                .split(vertical[1]);
            render_category_list(frame, body[0], app);
            render_detail_panel(frame, body[1], app);
        }
        Screen::Script => render_script_panel(frame, vertical[1], app),
    }

    render_footer(frame, vertical[2], app);

    if app.show_help {
        let area = centered_rect(60, 50, frame.area());
        frame.render_widget(Clear, area);

        let key = |k: &'static str, text: &'static str| {
            Line::from(vec![
                Span::styled(
                    format!("{k:<10}"),
                    Style::default().fg(palette.primary).add_modifier(Modifier::BOLD),
                ),
                Span::styled(text, Style::default().fg(palette.text)),
            ])
        };
        let help = Paragraph::new(vec![
            key("Enter", "choose distro/desktop, expand a category"),
            key("Space", "select or unselect an app"),
            key("Tab", "switch between distro and desktop"),
            key("E", "change distro or desktop later"),
            key("G", "continue to the generated script"),
            key("Y / S", "copy to clipboard / save to file"),
            key("B", "back to the app list"),
            key("T", "cycle dark / light / system theme"),
            key("Q", "quit"),
        ])
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Keys ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(palette.panel))
                .style(Style::default().bg(palette.bg)),
        );
        frame.render_widget(help, area);
    }
}
