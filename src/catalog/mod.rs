//! Distros, desktop environments and categorized apps.
//!
//! A [`Catalog`] can only be obtained through [`validate`], so everything that
//! takes one may rely on unique ids and resolvable compatibility references.

pub mod compat;
pub mod loader;
pub mod model;
pub mod validate;

pub use compat::{compatible_apps, visible_categories};
pub use loader::{load, load_builtin, load_file, parse};
pub use model::{AppEntry, CatalogSource, Category, DesktopEnvironment, Distro};
pub use validate::validate;

#[derive(Debug, Clone)]
pub struct Catalog {
    distros: Vec<Distro>,
    desktops: Vec<DesktopEnvironment>,
    categories: Vec<Category>,
}

impl Catalog {
    pub(crate) fn from_source(source: CatalogSource) -> Self {
        Self {
            distros: source.distros,
            desktops: source.desktop_environments,
            categories: source.categories,
        }
    }

    /// Builds a catalog without integrity checks. Test-only.
    #[cfg(test)]
    pub(crate) fn unchecked(source: CatalogSource) -> Self {
        Self::from_source(source)
    }

    pub fn distros(&self) -> &[Distro] {
        &self.distros
    }

    pub fn desktops(&self) -> &[DesktopEnvironment] {
        &self.desktops
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn distro(&self, id: &str) -> Option<&Distro> {
        self.distros.iter().find(|d| d.id == id)
    }

    pub fn desktop(&self, id: &str) -> Option<&DesktopEnvironment> {
        self.desktops.iter().find(|d| d.id == id)
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn app(&self, id: &str) -> Option<&AppEntry> {
        self.apps().find(|app| app.id == id)
    }

    /// Category declaring the app, first in declaration order.
    pub fn category_of(&self, app_id: &str) -> Option<&Category> {
        self.categories
            .iter()
            .find(|c| c.apps.iter().any(|app| app.id == app_id))
    }

    /// Every app in declaration order.
    pub fn apps(&self) -> impl Iterator<Item = &AppEntry> {
        self.categories.iter().flat_map(|c| c.apps.iter())
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures;

    #[test]
    fn lookups_resolve_declared_entities() {
        let catalog = fixtures::catalog();
        assert_eq!(catalog.distro("fedora").map(|d| d.id.as_str()), Some("fedora"));
        assert_eq!(catalog.desktop("kde").map(|d| d.id.as_str()), Some("kde"));
        assert_eq!(
            catalog.category_of("vscode").map(|c| c.id.as_str()),
            Some("development")
        );
        assert!(catalog.app("nope").is_none());
        assert!(catalog.category("nope").is_none());
    }

    #[test]
    fn apps_iterate_in_declaration_order() {
        let catalog = fixtures::catalog();
        let ids: Vec<_> = catalog.apps().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["firefox", "chromium", "git", "vscode", "steam"]);
    }
}
