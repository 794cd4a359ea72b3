use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::compiler::{parse_repo_base, ScriptOptions, DEFAULT_REPO_BASE};
use crate::selection::DistroChangePolicy;

#[derive(Debug, Parser)]
#[command(name = "omari")]
#[command(version, about = "Pick a distro, desktop and apps, get one installer script", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub settings: Settings,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Args)]
pub struct Settings {
    /// Catalog JSON to use instead of the built-in one
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Base URL the generated script downloads app scripts from
    #[arg(
        long,
        global = true,
        value_name = "URL",
        default_value = DEFAULT_REPO_BASE,
        value_parser = parse_repo_base
    )]
    pub repo_base: String,

    /// Drop chosen apps the newly selected distro does not support
    #[arg(long, global = true)]
    pub prune_incompatible: bool,

    /// Where the interactive session writes its log
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the installer script for a selection without the TUI
    Generate {
        #[arg(long)]
        distro: String,

        #[arg(long)]
        desktop: String,

        /// App id, repeatable
        #[arg(long = "app", value_name = "ID")]
        apps: Vec<String>,

        /// Write to this file instead of stdout
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// List catalog contents
    List {
        /// Only show apps compatible with this distro
        #[arg(long)]
        distro: Option<String>,
    },
}

impl Settings {
    pub fn script_options(&self) -> ScriptOptions {
        ScriptOptions {
            repo_base: self.repo_base.clone(),
        }
    }

    pub fn distro_change_policy(&self) -> DistroChangePolicy {
        if self.prune_incompatible {
            DistroChangePolicy::PruneIncompatible
        } else {
            DistroChangePolicy::KeepSelection
        }
    }

    pub fn log_file(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("omari.log"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_arguments() {
        let cli = Cli::try_parse_from(["omari"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.settings.repo_base, DEFAULT_REPO_BASE);
        assert_eq!(
            cli.settings.distro_change_policy(),
            DistroChangePolicy::KeepSelection
        );
        assert!(cli.settings.log_file().ends_with("omari.log"));
    }

    #[test]
    fn generate_collects_repeated_apps() {
        let cli = Cli::try_parse_from([
            "omari", "generate", "--distro", "ubuntu", "--desktop", "gnome", "--app", "git",
            "--app", "vlc", "--prune-incompatible",
        ])
        .unwrap();

        match cli.command {
            Some(Command::Generate { distro, apps, output, .. }) => {
                assert_eq!(distro, "ubuntu");
                assert_eq!(apps, ["git", "vlc"]);
                assert!(output.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert_eq!(
            cli.settings.distro_change_policy(),
            DistroChangePolicy::PruneIncompatible
        );
    }

    #[test]
    fn generate_requires_a_system() {
        assert!(Cli::try_parse_from(["omari", "generate", "--distro", "ubuntu"]).is_err());
    }

    #[test]
    fn repo_base_with_shell_syntax_is_refused() {
        let parsed = Cli::try_parse_from([
            "omari",
            "generate",
            "--distro",
            "ubuntu",
            "--desktop",
            "gnome",
            "--repo-base",
            "https://x\"; id; \"",
        ]);
        assert!(parsed.is_err());

        let cli = Cli::try_parse_from(["omari", "--repo-base", "https://mirror.example/omari"]).unwrap();
        assert_eq!(cli.settings.script_options().repo_base, "https://mirror.example/omari");
    }
}
