use super::state::{App, LogLevel};
use crate::system::clipboard::copy_to_clipboard;
use crate::system::export::save_script;

/// Hands the generated script to the system clipboard.
pub fn copy_script(app: &mut App) {
    let Some(script) = app.script.clone() else {
        app.set_status("Nothing generated yet.");
        return;
    };
    match copy_to_clipboard(&script, app.platform) {
        Ok(helper) => {
            app.log(format!("Copied via {helper}"), LogLevel::Success);
            app.set_status("Script copied to clipboard.");
        }
        Err(e) => {
            tracing::warn!(error = %e, "copy failed");
            app.log(format!("Error: {e}"), LogLevel::Error);
            app.set_status(format!("Copy failed: {e}. Use s to save it instead."));
        }
    }
}

/// Writes the generated script into the export directory.
pub fn save_current_script(app: &mut App) {
    let Some(script) = app.script.clone() else {
        app.set_status("Nothing generated yet.");
        return;
    };
    match save_script(&app.export_dir, &script) {
        Ok(path) => {
            app.log(format!("Saved {}", path.display()), LogLevel::Success);
            app.set_status(format!("Saved to {}. Review it before running.", path.display()));
        }
        Err(e) => {
            tracing::warn!(error = %e, "save failed");
            app.log(format!("Error: {e}"), LogLevel::Error);
            app.set_status(format!("Save failed: {e}"));
        }
    }
}
