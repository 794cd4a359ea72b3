//! Renders a selection into an installer script.

use std::collections::HashSet;

use crate::catalog::validate::has_shell_metachar;
use crate::catalog::{AppEntry, Catalog};
use crate::selection::SelectionState;

pub const DEFAULT_REPO_BASE: &str = "https://raw.githubusercontent.com/ashupal86/omari/main/scripts";

/// Name the exporter gives the script on disk.
pub const SCRIPT_FILE_NAME: &str = "omari-install.sh";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptOptions {
    pub repo_base: String,
}

/// Accepts a repository base that can sit inside `REPO_BASE="..."`.
/// Used as the clap value parser for `--repo-base`.
pub fn parse_repo_base(value: &str) -> Result<String, String> {
    if value.trim().is_empty() {
        return Err("repository base must not be empty".to_string());
    }
    if value.chars().any(char::is_whitespace) || has_shell_metachar(value) {
        return Err(format!(
            "repository base {value:?} contains whitespace or shell metacharacters"
        ));
    }
    Ok(value.to_string())
}

impl Default for ScriptOptions {
    fn default() -> Self {
        Self {
            repo_base: DEFAULT_REPO_BASE.to_string(),
        }
    }
}

/// [`compile_with`] using the default repository base.
pub fn compile(catalog: &Catalog, selection: &SelectionState) -> String {
    compile_with(catalog, selection, &ScriptOptions::default())
}

/// Groups the chosen apps by category in catalog order and emits a
/// fetch/chmod/run block per app. Ids the catalog does not know are skipped.
/// The same inputs always produce the same bytes.
pub fn compile_with(catalog: &Catalog, selection: &SelectionState, options: &ScriptOptions) -> String {
    let mut lines = vec![
        "#!/usr/bin/env bash".to_string(),
        "set -e".to_string(),
        format!("REPO_BASE=\"{}\"", options.repo_base.trim_end_matches('/')),
        String::new(),
        "echo \"Installing selected applications...\"".to_string(),
        String::new(),
    ];

    let chosen = selection.selected_apps();
    let mut emitted: HashSet<&str> = HashSet::new();
    let mut app_count = 0usize;

    for category in catalog.categories() {
        let group: Vec<&AppEntry> = category
            .apps
            .iter()
            .filter(|app| chosen.contains(&app.id))
            .filter(|app| emitted.insert(app.id.as_str()))
            .collect();
        if group.is_empty() {
            continue;
        }

        lines.push(format!("echo \"Installing {} applications...\"", category.name));
        for app in group {
            let local = format!("/tmp/{}.sh", app.id);
            lines.push(format!(
                "curl -fsSL \"$REPO_BASE/{}\" -o {}",
                app.script_path, local
            ));
            lines.push(format!("chmod +x {local}"));
            lines.push(format!("sudo {local}"));
            lines.push(String::new());
            app_count += 1;
        }
    }

    lines.push("echo \"Installation complete!\"".to_string());

    tracing::debug!(
        selected = chosen.len(),
        emitted = app_count,
        "script compiled"
    );
    lines.join("\n")
}
