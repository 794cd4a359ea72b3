use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Distro {
    pub id: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DesktopEnvironment {
    pub id: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppEntry {
    pub id: String,
    pub name: String,
    pub description: String,
    pub compatibility: Vec<String>,
    pub script_path: String,
}

impl AppEntry {
    pub fn supports(&self, distro_id: &str) -> bool {
        self.compatibility.iter().any(|id| id == distro_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: String,
    pub apps: Vec<AppEntry>,
}

/// Catalog exactly as declared in the source, before integrity checks.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSource {
    pub distros: Vec<Distro>,
    pub desktop_environments: Vec<DesktopEnvironment>,
    pub categories: Vec<Category>,
}
