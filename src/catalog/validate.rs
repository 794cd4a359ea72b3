use std::collections::{HashMap, HashSet};

use super::model::CatalogSource;
use super::Catalog;
use crate::error::{CatalogError, IntegrityKind};

/// Checks referential and structural integrity and hands back a usable catalog.
///
/// Scans distros, then desktop environments, then categories and their apps,
/// all in declaration order, and reports the first violation found.
pub fn validate(source: CatalogSource) -> Result<Catalog, CatalogError> {
    if let Err(err) = check(&source) {
        tracing::error!(error = %err, "catalog rejected");
        return Err(err);
    }
    Ok(Catalog::from_source(source))
}

fn check(source: &CatalogSource) -> Result<(), CatalogError> {
    let mut distro_ids = HashSet::new();
    for distro in &source.distros {
        require_id(&distro.id)?;
        if !distro_ids.insert(distro.id.as_str()) {
            return Err(CatalogError::integrity(
                IntegrityKind::DuplicateDistro,
                &distro.id,
            ));
        }
    }

    let mut desktop_ids = HashSet::new();
    for desktop in &source.desktop_environments {
        require_id(&desktop.id)?;
        if !desktop_ids.insert(desktop.id.as_str()) {
            return Err(CatalogError::integrity(
                IntegrityKind::DuplicateDesktop,
                &desktop.id,
            ));
        }
    }

    let mut category_ids = HashSet::new();
    // app id -> declaring category id
    let mut owners: HashMap<&str, &str> = HashMap::new();
    for category in &source.categories {
        require_id(&category.id)?;
        if !category_ids.insert(category.id.as_str()) {
            return Err(CatalogError::integrity(
                IntegrityKind::DuplicateCategory,
                &category.id,
            ));
        }
        if has_shell_metachar(&category.name) {
            return Err(CatalogError::integrity(
                IntegrityKind::UnsafeCategoryName,
                &category.id,
            ));
        }

        for app in &category.apps {
            require_id(&app.id)?;
            if let Some(owner) = owners.insert(app.id.as_str(), category.id.as_str()) {
                let kind = if owner == category.id {
                    IntegrityKind::DuplicateApp
                } else {
                    IntegrityKind::AppInMultipleCategories
                };
                return Err(CatalogError::integrity(kind, &app.id));
            }
            if !is_safe_app_id(&app.id) {
                return Err(CatalogError::integrity(IntegrityKind::UnsafeAppId, &app.id));
            }
            if let Some(unknown) = app
                .compatibility
                .iter()
                .find(|id| !distro_ids.contains(id.as_str()))
            {
                return Err(CatalogError::integrity(
                    IntegrityKind::UnknownCompatibilityDistro,
                    unknown,
                ));
            }
            if !is_safe_script_path(&app.script_path) {
                return Err(CatalogError::integrity(
                    IntegrityKind::UnsafeScriptPath,
                    &app.id,
                ));
            }
        }
    }

    Ok(())
}

fn require_id(id: &str) -> Result<(), CatalogError> {
    if id.trim().is_empty() {
        return Err(CatalogError::integrity(IntegrityKind::EmptyId, id));
    }
    Ok(())
}

/// App ids end up in `/tmp/<id>.sh`.
fn is_safe_app_id(id: &str) -> bool {
    id.chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

/// Characters that end or expand inside a double-quoted shell word.
pub(crate) fn has_shell_metachar(text: &str) -> bool {
    text.chars()
        .any(|c| c.is_control() || matches!(c, '"' | '$' | '`' | '\\'))
}

/// Script paths are interpolated into a double-quoted shell word.
fn is_safe_script_path(path: &str) -> bool {
    if path.is_empty() || path.starts_with('/') {
        return false;
    }
    if path.split('/').any(|segment| segment == "..") {
        return false;
    }
    !path.chars().any(char::is_whitespace) && !has_shell_metachar(path)
}
