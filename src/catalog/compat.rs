use super::model::{AppEntry, Category};
use super::Catalog;

/// Apps in `category` that support `distro_id`, in catalog order.
///
/// Empty when no distro is given or the distro is not in the catalog.
pub fn compatible_apps<'a>(
    catalog: &Catalog,
    category: &'a Category,
    distro_id: Option<&str>,
) -> Vec<&'a AppEntry> {
    let Some(distro_id) = distro_id.filter(|id| catalog.distro(id).is_some()) else {
        return Vec::new();
    };
    category
        .apps
        .iter()
        .filter(|app| app.supports(distro_id))
        .collect()
}

/// Categories with at least one compatible app. The rest stay in the catalog
/// but are not offered.
pub fn visible_categories<'a>(catalog: &'a Catalog, distro_id: Option<&str>) -> Vec<&'a Category> {
    catalog
        .categories()
        .iter()
        .filter(|category| !compatible_apps(catalog, category, distro_id).is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures;

    fn ids(apps: &[&AppEntry]) -> Vec<String> {
        apps.iter().map(|a| a.id.clone()).collect()
    }

    #[test]
    fn keeps_only_supported_apps_in_order() {
        let catalog = fixtures::catalog();
        let browsers = catalog.category("browsers").unwrap();
        assert_eq!(
            ids(&compatible_apps(&catalog, browsers, Some("ubuntu"))),
            ["firefox", "chromium"]
        );
        assert_eq!(
            ids(&compatible_apps(&catalog, browsers, Some("fedora"))),
            ["firefox"]
        );
    }

    #[test]
    fn no_or_unknown_distro_yields_nothing() {
        let catalog = fixtures::catalog();
        let browsers = catalog.category("browsers").unwrap();
        assert!(compatible_apps(&catalog, browsers, None).is_empty());
        assert!(compatible_apps(&catalog, browsers, Some("plan9")).is_empty());
    }

    #[test]
    fn categories_without_compatible_apps_are_hidden() {
        let catalog = fixtures::catalog();
        let visible: Vec<_> = visible_categories(&catalog, Some("windows"))
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(visible, ["development"]);
        assert!(catalog.category("gaming").is_some());
        assert!(visible_categories(&catalog, None).is_empty());
    }
}
