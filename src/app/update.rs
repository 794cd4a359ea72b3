use std::io::Stdout;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{backend::CrosstermBackend, Terminal};

use super::actions::{copy_script, save_current_script};
use super::state::{App, Screen};
use crate::ui::draw::ui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub fn run(app: &mut App, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    loop {
        terminal.draw(|frame| ui(frame, app))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if handle_key(app, key) == Flow::Quit {
                break;
            }
        }
    }

    Ok(())
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> Flow {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Flow::Quit;
    }

    if app.show_help {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
            app.show_help = false;
        }
        return Flow::Continue;
    }

    match key.code {
        KeyCode::Char('q') => return Flow::Quit,
        KeyCode::Char('?') => {
            app.show_help = true;
            return Flow::Continue;
        }
        KeyCode::Char('t') | KeyCode::Char('T') => {
            app.cycle_theme();
            return Flow::Continue;
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.move_down();
            return Flow::Continue;
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.move_up();
            return Flow::Continue;
        }
        _ => {}
    }

    match app.screen() {
        Screen::System => match key.code {
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => {
                app.switch_system_focus()
            }
            KeyCode::Enter | KeyCode::Char(' ') => app.choose_system_item(),
            KeyCode::Esc if app.editing_system => app.finish_editing_system(),
            _ => {}
        },
        Screen::Apps => match key.code {
            KeyCode::Enter => app.activate_current(),
            KeyCode::Char(' ') => app.toggle_current(),
            KeyCode::Char('c') | KeyCode::Char('C') => app.clear_selection(),
            KeyCode::Char('e') | KeyCode::Char('E') => app.edit_system(),
            KeyCode::Char('g') | KeyCode::Char('G') | KeyCode::Right => app.continue_to_script(),
            _ => {}
        },
        Screen::Script => match key.code {
            KeyCode::Char('b') | KeyCode::Char('B') | KeyCode::Backspace | KeyCode::Left => {
                app.back_to_apps()
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                app.regenerate();
                app.set_status("Script regenerated.");
            }
            KeyCode::Char('y') | KeyCode::Char('Y') => copy_script(app),
            KeyCode::Char('s') | KeyCode::Char('S') => save_current_script(app),
            _ => {}
        },
    }

    Flow::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures;
    use crate::compiler::{ScriptOptions, SCRIPT_FILE_NAME};
    use crate::prefs::MemoryStore;
    use crate::selection::{Phase, SelectionState};

    fn press(app: &mut App, code: KeyCode) -> Flow {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn app_in(dir: &std::path::Path) -> App {
        App::new(
            fixtures::catalog(),
            SelectionState::new(),
            ScriptOptions::default(),
            Box::new(MemoryStore::new()),
            dir.to_path_buf(),
        )
    }

    #[test]
    fn keyboard_walkthrough_to_saved_script() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path());

        // ubuntu, then gnome
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.selection.phase(), Phase::SystemSelected);

        // expand Browsers, select Firefox
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char(' '));
        assert!(app.selection.is_selected("firefox"));

        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.selection.phase(), Phase::ScriptGenerated);

        press(&mut app, KeyCode::Char('s'));
        let saved = std::fs::read_to_string(dir.path().join(SCRIPT_FILE_NAME)).unwrap();
        assert_eq!(Some(saved.as_str()), app.script.as_deref());
        assert!(saved.contains("curl -fsSL \"$REPO_BASE/browsers/firefox.sh\" -o /tmp/firefox.sh"));

        press(&mut app, KeyCode::Char('b'));
        assert_eq!(app.selection.phase(), Phase::AppsSelected);
        assert!(app.selection.is_selected("firefox"));
    }

    #[test]
    fn quit_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path());
        assert_eq!(press(&mut app, KeyCode::Char('q')), Flow::Quit);
        assert_eq!(
            handle_key(
                &mut app,
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
            ),
            Flow::Quit
        );
    }

    #[test]
    fn help_overlay_swallows_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path());
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);

        assert_eq!(press(&mut app, KeyCode::Enter), Flow::Continue);
        assert!(app.selection.selected_distro().is_none());

        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
    }

    #[test]
    fn tab_switches_between_distro_and_desktop() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path());
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.selection.selected_desktop(), Some("kde"));
        assert!(app.selection.selected_distro().is_none());
        assert_eq!(app.selection.phase(), Phase::Unconfigured);
    }

    #[test]
    fn copy_without_script_only_sets_status() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path());
        copy_script(&mut app);
        assert_eq!(app.status, "Nothing generated yet.");
    }
}
