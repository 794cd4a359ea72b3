use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    prelude::*,
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::state::App;
use crate::compiler::SCRIPT_FILE_NAME;

pub fn render_script_panel(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let palette = app.palette();
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(6),
            Constraint::Length(5),
        ])
        .split(area);

    let notice = Paragraph::new(vec![
        Line::from(Span::styled(
            "Important Security Notice",
            Style::default().fg(palette.warning).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Always review scripts before running them. This script will download and execute code from the internet.",
            Style::default().fg(palette.warning),
        )),
    ])
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.warning)),
    );
    frame.render_widget(notice, parts[0]);

    let script_text = app
        .script
        .as_deref()
        .unwrap_or("Press r to generate your installation script...");
    let script = Paragraph::new(script_text)
        .style(Style::default().fg(palette.text))
        .scroll((app.script_scroll, 0))
        .block(
            Block::default()
                .title(" Generated Script ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(palette.panel))
                .style(Style::default().bg(palette.bg)),
        );
    frame.render_widget(script, parts[1]);

    let step = |n: &str, text: String| {
        Line::from(vec![
            Span::styled(format!("{n}. "), Style::default().fg(palette.muted)),
            Span::styled(text, Style::default().fg(palette.text)),
        ])
    };
    let run = if app.platform.runs_scripts() {
        format!("Run the script: ./{SCRIPT_FILE_NAME}")
    } else {
        format!("Run it inside WSL: wsl ./{SCRIPT_FILE_NAME}")
    };
    let usage = Paragraph::new(vec![
        step("1", format!("Save the script with s (writes {SCRIPT_FILE_NAME})")),
        step("2", format!("Make it executable: chmod +x {SCRIPT_FILE_NAME}")),
        step("3", run),
    ])
    .block(
        Block::default()
            .title(" Usage Instructions ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.panel)),
    );
    frame.render_widget(usage, parts[2]);
}
