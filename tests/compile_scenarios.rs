use omari::catalog::{self, compatible_apps};
use omari::{compile, CatalogError, IntegrityKind, Phase, SelectionState};
use proptest::prelude::*;

const SINGLE_BROWSER: &str = r#"{
    "distros": [{ "id": "ubuntu", "name": "Ubuntu", "description": "Ubuntu" }],
    "desktopEnvironments": [{ "id": "gnome", "name": "GNOME", "description": "GNOME" }],
    "categories": [{
        "id": "browsers",
        "name": "Browsers",
        "description": "Web browsers",
        "apps": [{
            "id": "firefox",
            "name": "Firefox",
            "description": "Web browser",
            "compatibility": ["ubuntu"],
            "scriptPath": "browsers/firefox.sh"
        }]
    }]
}"#;

#[test]
fn single_browser_end_to_end() {
    let catalog = catalog::load(SINGLE_BROWSER).unwrap();
    let mut selection = SelectionState::new();
    selection.set_distro(&catalog, "ubuntu").unwrap();
    selection.toggle_app(&catalog, "firefox").unwrap();

    let script = compile(&catalog, &selection);
    let lines: Vec<&str> = script.lines().collect();
    let banner = lines
        .iter()
        .position(|l| *l == "echo \"Installing Browsers applications...\"")
        .expect("category banner");

    assert_eq!(
        &lines[banner + 1..banner + 4],
        [
            "curl -fsSL \"$REPO_BASE/browsers/firefox.sh\" -o /tmp/firefox.sh",
            "chmod +x /tmp/firefox.sh",
            "sudo /tmp/firefox.sh",
        ]
    );
    assert_eq!(lines.first(), Some(&"#!/usr/bin/env bash"));
    assert_eq!(lines.last(), Some(&"echo \"Installation complete!\""));
}

#[test]
fn duplicate_app_across_categories_fails_to_load() {
    let text = r#"{
        "distros": [{ "id": "ubuntu", "name": "Ubuntu", "description": "" }],
        "desktopEnvironments": [],
        "categories": [
            { "id": "a", "name": "A", "description": "", "apps": [
                { "id": "vlc", "name": "VLC", "description": "", "compatibility": ["ubuntu"], "scriptPath": "a/vlc.sh" }
            ]},
            { "id": "b", "name": "B", "description": "", "apps": [
                { "id": "vlc", "name": "VLC", "description": "", "compatibility": ["ubuntu"], "scriptPath": "b/vlc.sh" }
            ]}
        ]
    }"#;

    match catalog::load(text) {
        Err(CatalogError::Integrity { kind, id }) => {
            assert_eq!(kind, IntegrityKind::AppInMultipleCategories);
            assert_eq!(id, "vlc");
        }
        other => panic!("expected integrity error, got {other:?}"),
    }
}

#[test]
fn category_name_with_command_substitution_fails_to_load() {
    let text = SINGLE_BROWSER.replace(
        r#""name": "Browsers""#,
        r#""name": "Web \"$(touch /tmp/owned)\"""#,
    );
    assert_ne!(text, SINGLE_BROWSER);

    match catalog::load(&text) {
        Err(CatalogError::Integrity { kind, id }) => {
            assert_eq!(kind, IntegrityKind::UnsafeCategoryName);
            assert_eq!(id, "browsers");
        }
        other => panic!("expected integrity error, got {other:?}"),
    }
}

#[test]
fn builtin_catalog_filters_by_distro() {
    let catalog = catalog::load_builtin().unwrap();
    let media = catalog.category("media").unwrap();

    let on_debian: Vec<_> = compatible_apps(&catalog, media, Some("debian"))
        .iter()
        .map(|a| a.id.as_str())
        .collect();
    assert_eq!(on_debian, ["vlc", "gimp"]);
    assert!(compatible_apps(&catalog, media, None).is_empty());
}

#[test]
fn distro_change_after_choosing_apps_keeps_them_in_the_script() {
    let catalog = catalog::load_builtin().unwrap();
    let mut selection = SelectionState::new();
    selection.set_distro(&catalog, "ubuntu").unwrap();
    selection.set_desktop(&catalog, "gnome").unwrap();
    selection.toggle_app(&catalog, "steam").unwrap();

    selection.set_distro(&catalog, "windows").unwrap();

    assert_eq!(selection.phase(), Phase::SystemSelected);
    assert!(compile(&catalog, &selection).contains("sudo /tmp/steam.sh"));
}

proptest! {
    #[test]
    fn compiling_is_deterministic(picks in proptest::collection::vec(0usize..21, 0..12)) {
        let catalog = catalog::load_builtin().unwrap();
        let ids: Vec<String> = catalog.apps().map(|a| a.id.clone()).collect();
        let mut selection = SelectionState::new();
        for pick in picks {
            let id = &ids[pick % ids.len()];
            selection.toggle_app(&catalog, id).unwrap();
        }

        let first = compile(&catalog, &selection);
        let second = compile(&catalog, &selection.clone());
        prop_assert_eq!(&first, &second);

        let triples = first.lines().filter(|l| l.starts_with("sudo ")).count();
        prop_assert_eq!(triples, selection.selected_apps().len());
    }
}
