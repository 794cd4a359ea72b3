use std::path::PathBuf;

use chrono::Local;
use ratatui::widgets::ListState;

use crate::catalog::{compatible_apps, visible_categories, AppEntry, Catalog, Category};
use crate::compiler::{compile_with, ScriptOptions};
use crate::error::SelectionError;
use crate::prefs::PreferenceStore;
use crate::selection::{Phase, SelectionState};
use crate::system::os::Platform;
use crate::ui::theme::{Palette, Theme};

#[derive(Clone)]
pub struct LogEntry {
    pub message: String,
    pub level: LogLevel,
    pub created_at: std::time::Instant,
}

#[derive(Clone, Copy)]
pub enum LogLevel {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    System,
    Apps,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemFocus {
    Distro,
    Desktop,
}

/// One line of the category accordion, as indices into the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row {
    Category(usize),
    App { category: usize, app: usize },
}

pub struct App {
    pub catalog: Catalog,
    pub selection: SelectionState,
    pub options: ScriptOptions,
    pub script: Option<String>,
    pub platform: Platform,
    pub theme: Theme,
    pub prefs: Box<dyn PreferenceStore>,
    pub export_dir: PathBuf,
    pub editing_system: bool,
    pub system_focus: SystemFocus,
    pub distro_state: ListState,
    pub desktop_state: ListState,
    pub rows: Vec<Row>,
    pub list_state: ListState,
    pub script_scroll: u16,
    pub show_help: bool,
    pub status: String,
    pub logs: Vec<LogEntry>,
}

impl App {
    pub fn new(
        catalog: Catalog,
        selection: SelectionState,
        options: ScriptOptions,
        prefs: Box<dyn PreferenceStore>,
        export_dir: PathBuf,
    ) -> Self {
        let theme = Theme::load(prefs.as_ref());
        let mut distro_state = ListState::default();
        let mut desktop_state = ListState::default();
        if !catalog.distros().is_empty() {
            distro_state.select(Some(0));
        }
        if !catalog.desktops().is_empty() {
            desktop_state.select(Some(0));
        }

        let mut app = Self {
            catalog,
            selection,
            options,
            script: None,
            platform: Platform::detect(),
            theme,
            prefs,
            export_dir,
            editing_system: false,
            system_focus: SystemFocus::Distro,
            distro_state,
            desktop_state,
            rows: Vec::new(),
            list_state: ListState::default(),
            script_scroll: 0,
            show_help: false,
            status: "Pick a distribution and a desktop environment. Enter to choose.".to_string(),
            logs: Vec::new(),
        };
        app.refresh_rows();
        app
    }

    pub fn palette(&self) -> &'static Palette {
        self.theme.palette()
    }

    pub fn log(&mut self, message: String, level: LogLevel) {
        let now = std::time::Instant::now();
        self.logs
            .retain(|l| now.duration_since(l.created_at) < std::time::Duration::from_secs(3));
        self.logs.push(LogEntry {
            message: format!("[{}] {}", Local::now().format("%H:%M:%S"), message),
            level,
            created_at: now,
        });
        if self.logs.len() > 3 {
            self.logs.remove(0);
        }
    }

    pub fn set_status<S: Into<String>>(&mut self, message: S) {
        self.status = message.into();
    }

    pub fn screen(&self) -> Screen {
        match self.selection.phase() {
            Phase::Unconfigured => Screen::System,
            _ if self.editing_system => Screen::System,
            Phase::SystemSelected | Phase::AppsSelected => Screen::Apps,
            Phase::ScriptGenerated => Screen::Script,
        }
    }

    /// Rebuilds the accordion: every category with compatible apps, and the
    /// apps of the active one beneath it.
    pub fn refresh_rows(&mut self) {
        let distro = self.selection.selected_distro();
        let active = self.selection.active_category();
        let mut rows = Vec::new();

        for category in visible_categories(&self.catalog, distro) {
            let Some(category_idx) = self
                .catalog
                .categories()
                .iter()
                .position(|c| c.id == category.id)
            else {
                continue;
            };
            rows.push(Row::Category(category_idx));
            if active != Some(category.id.as_str()) {
                continue;
            }
            let compatible = compatible_apps(&self.catalog, category, distro);
            for (app_idx, app) in category.apps.iter().enumerate() {
                if compatible.iter().any(|c| c.id == app.id) {
                    rows.push(Row::App {
                        category: category_idx,
                        app: app_idx,
                    });
                }
            }
        }

        self.rows = rows;
        let new_idx = match self.list_state.selected() {
            Some(idx) if idx < self.rows.len() => Some(idx),
            _ if self.rows.is_empty() => None,
            _ => Some(0),
        };
        self.list_state.select(new_idx);
    }

    pub fn current_row(&self) -> Option<Row> {
        let idx = self.list_state.selected()?;
        self.rows.get(idx).copied()
    }

    pub fn row_category(&self, row: Row) -> Option<&Category> {
        let idx = match row {
            Row::Category(idx) => idx,
            Row::App { category, .. } => category,
        };
        self.catalog.categories().get(idx)
    }

    pub fn row_app(&self, row: Row) -> Option<&AppEntry> {
        match row {
            Row::Category(_) => None,
            Row::App { category, app } => self.catalog.categories().get(category)?.apps.get(app),
        }
    }

    pub fn move_down(&mut self) {
        match self.screen() {
            Screen::System => {
                let (state, len) = self.focused_system_list();
                step_list(state, len, true);
            }
            Screen::Apps => step_list(&mut self.list_state, self.rows.len(), true),
            Screen::Script => self.script_scroll = self.script_scroll.saturating_add(1),
        }
    }

    pub fn move_up(&mut self) {
        match self.screen() {
            Screen::System => {
                let (state, len) = self.focused_system_list();
                step_list(state, len, false);
            }
            Screen::Apps => step_list(&mut self.list_state, self.rows.len(), false),
            Screen::Script => self.script_scroll = self.script_scroll.saturating_sub(1),
        }
    }

    fn focused_system_list(&mut self) -> (&mut ListState, usize) {
        match self.system_focus {
            SystemFocus::Distro => (&mut self.distro_state, self.catalog.distros().len()),
            SystemFocus::Desktop => (&mut self.desktop_state, self.catalog.desktops().len()),
        }
    }

    pub fn switch_system_focus(&mut self) {
        self.system_focus = match self.system_focus {
            SystemFocus::Distro => SystemFocus::Desktop,
            SystemFocus::Desktop => SystemFocus::Distro,
        };
    }

    /// Applies the highlighted distro or desktop to the selection.
    pub fn choose_system_item(&mut self) {
        let result = match self.system_focus {
            SystemFocus::Distro => {
                let Some(id) = self
                    .distro_state
                    .selected()
                    .and_then(|idx| self.catalog.distros().get(idx))
                    .map(|d| d.id.clone())
                else {
                    return;
                };
                self.selection.set_distro(&self.catalog, &id)
            }
            SystemFocus::Desktop => {
                let Some(id) = self
                    .desktop_state
                    .selected()
                    .and_then(|idx| self.catalog.desktops().get(idx))
                    .map(|d| d.id.clone())
                else {
                    return;
                };
                self.selection.set_desktop(&self.catalog, &id)
            }
        };

        match result {
            Ok(()) => {
                self.refresh_rows();
                if self.selection.selected_distro().is_none() {
                    self.system_focus = SystemFocus::Distro;
                } else if self.selection.selected_desktop().is_none() {
                    self.system_focus = SystemFocus::Desktop;
                }
                if self.screen() == Screen::Apps {
                    self.set_status(format!("{}. Enter expands a category, Space selects.", self.summary()));
                } else {
                    self.set_status(self.summary());
                }
            }
            Err(e) => self.report(e),
        }
    }

    /// Enter on the accordion: expand/collapse a category or toggle an app.
    pub fn activate_current(&mut self) {
        let Some(row) = self.current_row() else {
            return;
        };
        match row {
            Row::Category(_) => {
                let Some(id) = self.row_category(row).map(|c| c.id.clone()) else {
                    return;
                };
                match self.selection.set_active_category(&self.catalog, &id) {
                    Ok(()) => {
                        self.refresh_rows();
                        self.focus_category(&id);
                    }
                    Err(e) => self.report(e),
                }
            }
            Row::App { .. } => self.toggle_current(),
        }
    }

    pub fn toggle_current(&mut self) {
        let Some(row) = self.current_row() else {
            return;
        };
        let Some(app_id) = self.row_app(row).map(|a| a.id.clone()) else {
            self.activate_current();
            return;
        };
        if let Err(e) = self.selection.toggle_app(&self.catalog, &app_id) {
            self.report(e);
            return;
        }
        self.set_status(self.summary());
    }

    fn focus_category(&mut self, id: &str) {
        let position = self.rows.iter().position(|row| {
            matches!(row, Row::Category(idx) if self.catalog.categories()[*idx].id == id)
        });
        if position.is_some() {
            self.list_state.select(position);
        }
    }

    pub fn clear_selection(&mut self) {
        let chosen: Vec<String> = self.selection.selected_apps().iter().cloned().collect();
        for id in chosen {
            if let Err(e) = self.selection.toggle_app(&self.catalog, &id) {
                self.report(e);
                return;
            }
        }
        self.set_status("Selection cleared.");
    }

    /// Moves from the app list to the script view, compiling on the way.
    pub fn continue_to_script(&mut self) {
        if self.selection.phase() == Phase::SystemSelected {
            if let Err(e) = self.selection.advance_to_apps_selected(&self.catalog) {
                self.report(e);
                return;
            }
        }
        self.regenerate();
        if let Err(e) = self.selection.advance_to_script_generated(&self.catalog) {
            self.report(e);
            return;
        }
        self.script_scroll = 0;
        self.set_status("Review the script before running it. y copy, s save, b back.");
    }

    pub fn regenerate(&mut self) {
        self.script = Some(compile_with(&self.catalog, &self.selection, &self.options));
        // ids missing from the catalog are skipped by the compiler
        let count = self
            .selection
            .selected_apps()
            .iter()
            .filter(|id| self.catalog.app(id).is_some())
            .count();
        self.log(format!("Script generated for {count} app(s)"), LogLevel::Info);
    }

    pub fn back_to_apps(&mut self) {
        match self.selection.retreat_to_apps_selected(&self.catalog) {
            Ok(()) => self.set_status(self.summary()),
            Err(e) => self.report(e),
        }
    }

    pub fn edit_system(&mut self) {
        self.editing_system = true;
        self.set_status("Change distro or desktop. Esc returns to the app list.");
    }

    pub fn finish_editing_system(&mut self) {
        self.editing_system = false;
        self.refresh_rows();
        self.set_status(self.summary());
    }

    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        let message = format!("Theme: {}", self.theme.as_str());
        match self.theme.save(self.prefs.as_mut()) {
            Ok(()) => self.log(message, LogLevel::Info),
            Err(e) => {
                tracing::warn!(error = %e, "theme kept for this session only");
                self.log(format!("{message} (not saved: {e})"), LogLevel::Error);
            }
        }
    }

    /// "Selected N applications for <distro> with <desktop>".
    pub fn summary(&self) -> String {
        let distro = self
            .selection
            .selected_distro()
            .and_then(|id| self.catalog.distro(id))
            .map(|d| d.name.as_str())
            .unwrap_or("no distro");
        let desktop = self
            .selection
            .selected_desktop()
            .and_then(|id| self.catalog.desktop(id))
            .map(|d| d.name.as_str())
            .unwrap_or("no desktop");
        format!(
            "Selected {} applications for {} with {}",
            self.selection.selected_apps().len(),
            distro,
            desktop
        )
    }

    /// Chosen apps the current distro does not support.
    pub fn incompatible_selected(&self) -> Vec<&AppEntry> {
        let Some(distro) = self.selection.selected_distro() else {
            return Vec::new();
        };
        self.catalog
            .apps()
            .filter(|app| self.selection.is_selected(&app.id) && !app.supports(distro))
            .collect()
    }

    fn report(&mut self, err: SelectionError) {
        self.log(format!("Error: {err}"), LogLevel::Error);
        self.set_status(err.to_string());
    }
}

fn step_list(state: &mut ListState, len: usize, forward: bool) {
    if len == 0 {
        state.select(None);
        return;
    }
    let next = match (state.selected(), forward) {
        (Some(i), true) if i + 1 < len => i + 1,
        (_, true) => 0,
        (Some(0) | None, false) => len - 1,
        (Some(i), false) => i - 1,
    };
    state.select(Some(next));
}
