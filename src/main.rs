use std::collections::BTreeSet;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use omari::app::{self, App};
use omari::catalog::{self, compatible_apps, visible_categories, Catalog, Category};
use omari::config::{Cli, Command, Settings};
use omari::selection::SelectionState;
use omari::system::export::save_script_as;
use omari::{compile_with, logging, prefs};

fn load_catalog(settings: &Settings) -> Result<Catalog> {
    match &settings.catalog {
        Some(path) => catalog::load_file(path),
        None => catalog::load_builtin(),
    }
}

fn cmd_generate(
    settings: &Settings,
    distro: &str,
    desktop: &str,
    apps: &[String],
    output: Option<PathBuf>,
) -> Result<()> {
    let catalog = load_catalog(settings)?;
    let mut selection = SelectionState::with_policy(settings.distro_change_policy());
    selection.set_distro(&catalog, distro)?;
    selection.set_desktop(&catalog, desktop)?;

    // toggling twice would unselect, so repeat ids count once
    let requested: BTreeSet<&str> = apps.iter().map(String::as_str).collect();
    for id in requested {
        match catalog.app(id) {
            None => tracing::warn!(app = id, "not in catalog, skipped"),
            Some(entry) if !entry.supports(distro) => {
                tracing::warn!(app = id, distro, "app does not list this distro")
            }
            Some(_) => {}
        }
        selection.toggle_app(&catalog, id)?;
    }

    selection.advance_to_apps_selected(&catalog)?;
    let script = compile_with(&catalog, &selection, &settings.script_options());
    selection.advance_to_script_generated(&catalog)?;

    match output {
        Some(path) => save_script_as(&path, &script)?,
        None => println!("{script}"),
    }
    Ok(())
}

fn cmd_list(settings: &Settings, distro: Option<&str>) -> Result<()> {
    let catalog = load_catalog(settings)?;

    println!("Distributions:");
    for d in catalog.distros() {
        println!("  {:<12} {}", d.id, d.name);
    }
    println!("Desktop environments:");
    for d in catalog.desktops() {
        println!("  {:<12} {}", d.id, d.name);
    }

    let categories: Vec<&Category> = match distro {
        Some(_) => visible_categories(&catalog, distro),
        None => catalog.categories().iter().collect(),
    };
    for category in categories {
        let apps: Vec<_> = match distro {
            Some(_) => compatible_apps(&catalog, category, distro),
            None => category.apps.iter().collect(),
        };
        println!("{} ({}):", category.name, category.id);
        for entry in apps {
            println!("  {:<12} {:<22} {}", entry.id, entry.name, entry.compatibility.join(","));
        }
    }
    Ok(())
}

fn run_tui(settings: &Settings) -> Result<()> {
    let catalog = load_catalog(settings)?;
    let selection = SelectionState::with_policy(settings.distro_change_policy());
    let store = prefs::open(prefs::default_path());
    let export_dir = std::env::current_dir().context("failed to resolve current directory")?;
    let mut app = App::new(
        catalog,
        selection,
        settings.script_options(),
        store,
        export_dir,
    );

    enable_raw_mode().context("failed to enable raw mode")?;
    execute!(io::stdout(), EnterAlternateScreen).context("failed to enter alt screen")?;

    struct TerminalGuard;
    impl Drop for TerminalGuard {
        fn drop(&mut self) {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
        }
    }
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend).context("failed to init terminal")?;

    app::run(&mut app, &mut terminal)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = cli.settings;

    match cli.command {
        Some(Command::Generate {
            distro,
            desktop,
            apps,
            output,
        }) => {
            logging::init_stderr(settings.verbose);
            cmd_generate(&settings, &distro, &desktop, &apps, output)
        }
        Some(Command::List { distro }) => {
            logging::init_stderr(settings.verbose);
            cmd_list(&settings, distro.as_deref())
        }
        None => {
            logging::init_file(&settings.log_file(), settings.verbose)?;
            tracing::info!("starting interactive session");
            run_tui(&settings)
        }
    }
}
