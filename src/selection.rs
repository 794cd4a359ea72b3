//! Selection state machine.
//!
//! ```text
//! ┌──────────────┐ distro+desktop ┌────────────────┐ advance ┌──────────────┐
//! │ Unconfigured │───────────────▶│ SystemSelected │────────▶│ AppsSelected │
//! └──────────────┘   (automatic)  └────────────────┘         └──────────────┘
//!                                                          advance │   ▲ retreat
//!                                                                  ▼   │
//!                                                          ┌─────────────────┐
//!                                                          │ ScriptGenerated │
//!                                                          └─────────────────┘
//! ```
//!
//! Every change goes through [`transition`], a pure function of the current
//! state, the catalog and an [`Action`]. A rejected action leaves the state as
//! it was.

use std::collections::BTreeSet;
use std::fmt;

use crate::catalog::Catalog;
use crate::error::SelectionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Unconfigured,
    SystemSelected,
    AppsSelected,
    ScriptGenerated,
}

impl Phase {
    /// Wizard step shown for this phase, 1-based.
    pub const fn step(&self) -> usize {
        match self {
            Self::Unconfigured => 1,
            Self::SystemSelected | Self::AppsSelected => 2,
            Self::ScriptGenerated => 3,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Unconfigured => "unconfigured",
            Self::SystemSelected => "system selected",
            Self::AppsSelected => "apps selected",
            Self::ScriptGenerated => "script generated",
        };
        f.write_str(text)
    }
}

/// What happens to chosen apps when the distro changes afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistroChangePolicy {
    /// Keep every chosen app, even ones the new distro does not support.
    #[default]
    KeepSelection,
    /// Drop catalog apps the new distro does not support.
    PruneIncompatible,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetDistro(String),
    SetDesktop(String),
    ToggleApp(String),
    SetActiveCategory(String),
    AdvanceToAppsSelected,
    AdvanceToScriptGenerated,
    RetreatToAppsSelected,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionState {
    selected_distro: Option<String>,
    selected_desktop: Option<String>,
    selected_apps: BTreeSet<String>,
    active_category: Option<String>,
    phase: Phase,
    policy: DistroChangePolicy,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: DistroChangePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn selected_distro(&self) -> Option<&str> {
        self.selected_distro.as_deref()
    }

    pub fn selected_desktop(&self) -> Option<&str> {
        self.selected_desktop.as_deref()
    }

    pub fn selected_apps(&self) -> &BTreeSet<String> {
        &self.selected_apps
    }

    pub fn is_selected(&self, app_id: &str) -> bool {
        self.selected_apps.contains(app_id)
    }

    pub fn active_category(&self) -> Option<&str> {
        self.active_category.as_deref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn policy(&self) -> DistroChangePolicy {
        self.policy
    }

    /// Runs `action` through [`transition`] and keeps the result on success.
    pub fn apply(&mut self, catalog: &Catalog, action: Action) -> Result<(), SelectionError> {
        let next = match transition(catalog, self, action) {
            Ok(next) => next,
            Err(err) => {
                tracing::debug!(error = %err, "selection change rejected");
                return Err(err);
            }
        };
        if next.phase != self.phase {
            tracing::info!(from = %self.phase, to = %next.phase, "phase changed");
        }
        *self = next;
        Ok(())
    }

    pub fn set_distro(&mut self, catalog: &Catalog, id: &str) -> Result<(), SelectionError> {
        self.apply(catalog, Action::SetDistro(id.to_string()))
    }

    pub fn set_desktop(&mut self, catalog: &Catalog, id: &str) -> Result<(), SelectionError> {
        self.apply(catalog, Action::SetDesktop(id.to_string()))
    }

    pub fn toggle_app(&mut self, catalog: &Catalog, id: &str) -> Result<(), SelectionError> {
        self.apply(catalog, Action::ToggleApp(id.to_string()))
    }

    pub fn set_active_category(
        &mut self,
        catalog: &Catalog,
        id: &str,
    ) -> Result<(), SelectionError> {
        self.apply(catalog, Action::SetActiveCategory(id.to_string()))
    }

    pub fn advance_to_apps_selected(&mut self, catalog: &Catalog) -> Result<(), SelectionError> {
        self.apply(catalog, Action::AdvanceToAppsSelected)
    }

    pub fn advance_to_script_generated(
        &mut self,
        catalog: &Catalog,
    ) -> Result<(), SelectionError> {
        self.apply(catalog, Action::AdvanceToScriptGenerated)
    }

    pub fn retreat_to_apps_selected(&mut self, catalog: &Catalog) -> Result<(), SelectionError> {
        self.apply(catalog, Action::RetreatToAppsSelected)
    }
}

/// Next state after `action`, or why it was refused.
pub fn transition(
    catalog: &Catalog,
    state: &SelectionState,
    action: Action,
) -> Result<SelectionState, SelectionError> {
    let mut next = state.clone();

    match action {
        Action::SetDistro(id) => {
            if catalog.distro(&id).is_none() {
                return Err(SelectionError::UnknownDistro(id));
            }
            if next.policy == DistroChangePolicy::PruneIncompatible {
                next.selected_apps.retain(|app_id| {
                    catalog
                        .app(app_id)
                        .map_or(true, |app| app.supports(&id))
                });
            }
            next.selected_distro = Some(id);
        }
        Action::SetDesktop(id) => {
            if catalog.desktop(&id).is_none() {
                return Err(SelectionError::UnknownDesktop(id));
            }
            next.selected_desktop = Some(id);
        }
        Action::ToggleApp(id) => {
            if !next.selected_apps.remove(&id) {
                next.selected_apps.insert(id);
            }
        }
        Action::SetActiveCategory(id) => {
            if catalog.category(&id).is_none() {
                return Err(SelectionError::UnknownCategory(id));
            }
            next.active_category = if next.active_category.as_deref() == Some(id.as_str()) {
                None
            } else {
                Some(id)
            };
        }
        Action::AdvanceToAppsSelected => {
            next.phase = move_phase(state.phase, Phase::SystemSelected, Phase::AppsSelected)?;
        }
        Action::AdvanceToScriptGenerated => {
            next.phase = move_phase(state.phase, Phase::AppsSelected, Phase::ScriptGenerated)?;
        }
        Action::RetreatToAppsSelected => {
            next.phase = move_phase(state.phase, Phase::ScriptGenerated, Phase::AppsSelected)?;
        }
    }

    if next.phase == Phase::Unconfigured
        && next.selected_distro.is_some()
        && next.selected_desktop.is_some()
    {
        next.phase = Phase::SystemSelected;
    }

    Ok(next)
}

fn move_phase(current: Phase, required: Phase, to: Phase) -> Result<Phase, SelectionError> {
    if current == required {
        Ok(to)
    } else {
        Err(SelectionError::InvalidTransition { from: current, to })
    }
}
