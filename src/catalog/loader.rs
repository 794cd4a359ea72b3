use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::model::CatalogSource;
use super::validate::validate;
use super::Catalog;
use crate::error::CatalogError;

/// Catalog shipped with the binary.
pub const BUILTIN_CATALOG: &str = include_str!("../../data/apps.json");

pub fn parse(text: &str) -> Result<CatalogSource, CatalogError> {
    Ok(serde_json::from_str(text)?)
}

/// Parses and validates in one step.
pub fn load(text: &str) -> Result<Catalog, CatalogError> {
    let source = parse(text)?;
    let catalog = validate(source)?;
    tracing::debug!(
        distros = catalog.distros().len(),
        desktops = catalog.desktops().len(),
        categories = catalog.categories().len(),
        "catalog loaded"
    );
    Ok(catalog)
}

pub fn load_file(path: impl AsRef<Path>) -> Result<Catalog> {
    let file = fs::read_to_string(path.as_ref())
        .with_context(|| format!("failed to read {}", path.as_ref().display()))?;
    let catalog = load(&file)
        .with_context(|| format!("invalid catalog in {}", path.as_ref().display()))?;
    Ok(catalog)
}

pub fn load_builtin() -> Result<Catalog> {
    load(BUILTIN_CATALOG).context("built-in catalog is invalid")
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = load_builtin().unwrap();
        assert!(catalog.distro("ubuntu").is_some());
        assert!(catalog.app("firefox").is_some());
    }

    #[test]
    fn missing_field_is_a_format_error() {
        let text = r#"{
            "distros": [{ "id": "ubuntu", "name": "Ubuntu" }],
            "desktopEnvironments": [],
            "categories": []
        }"#;
        let err = load(text).unwrap_err();
        assert!(matches!(err, CatalogError::Format(_)));
        assert!(err.offending_id().is_none());
    }

    #[test]
    fn mistyped_compatibility_is_a_format_error() {
        let text = r#"{
            "distros": [{ "id": "ubuntu", "name": "Ubuntu", "description": "" }],
            "desktopEnvironments": [],
            "categories": [{
                "id": "browsers", "name": "Browsers", "description": "",
                "apps": [{ "id": "firefox", "name": "Firefox", "description": "",
                           "compatibility": "ubuntu", "scriptPath": "browsers/firefox.sh" }]
            }]
        }"#;
        assert!(matches!(load(text), Err(CatalogError::Format(_))));
    }

    #[test]
    fn load_file_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(BUILTIN_CATALOG.as_bytes()).unwrap();
        let catalog = load_file(file.path()).unwrap();
        assert_eq!(catalog.distros().len(), 5);
    }

    #[test]
    fn load_file_reports_path_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        let err = load_file(&missing).unwrap_err();
        assert!(format!("{err}").contains("nope.json"));
    }
}
