use ratatui::{
    layout::Rect,
    prelude::*,
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::state::{App, LogLevel, Screen};

fn key_hints(screen: Screen) -> &'static [(&'static str, &'static str)] {
    match screen {
        Screen::System => &[
            ("Move ", "↑/↓ j/k"),
            ("  Column ", "Tab"),
            ("  Choose ", "Enter"),
            ("  Theme ", "T"),
            ("  Help ", "?"),
            ("  Quit ", "Q"),
        ],
        Screen::Apps => &[
            ("Move ", "↑/↓ j/k"),
            ("  Expand ", "Enter"),
            ("  Select ", "Space"),
            ("  Clear ", "C"),
            ("  System ", "E"),
            ("  Generate ", "G"),
            ("  Theme ", "T"),
            ("  Quit ", "Q"),
        ],
        Screen::Script => &[
            ("Scroll ", "↑/↓"),
            ("  Copy ", "Y"),
            ("  Save ", "S"),
            ("  Regenerate ", "R"),
            ("  Back ", "B"),
            ("  Theme ", "T"),
            ("  Quit ", "Q"),
        ],
    }
}

pub fn render_footer(frame: &mut Frame<'_>, area: Rect, app: &mut App) {
    let palette = app.palette();
    let now = std::time::Instant::now();
    app.logs
        .retain(|l| now.duration_since(l.created_at) < std::time::Duration::from_secs(3));

    let hints: Vec<Span> = key_hints(app.screen())
        .iter()
        .flat_map(|(label, key)| {
            [
                Span::styled(*label, Style::default().fg(palette.muted)),
                Span::styled(
                    *key,
                    Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
                ),
            ]
        })
        .collect();

    let mut second_line: Vec<Span> = vec![Span::styled(
        app.status.clone(),
        Style::default().fg(palette.muted),
    )];
    for l in &app.logs {
        let color = match l.level {
            LogLevel::Success => palette.success,
            LogLevel::Error => palette.warning,
            LogLevel::Info => palette.primary,
        };
        second_line.push(Span::styled("  ", Style::default()));
        second_line.push(Span::styled(l.message.clone(), Style::default().fg(color)));
    }

    let footer = Paragraph::new(vec![Line::from(hints), Line::from(second_line)]).block(
        Block::default()
            .title(format!(" Command Bar [{}] ", app.platform))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.panel)),
    );
    frame.render_widget(footer, area);
}
