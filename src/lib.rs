//! Turns a distro, desktop environment and set of catalog apps into a single
//! installer script.

pub mod app;
pub mod catalog;
pub mod compiler;
pub mod config;
pub mod error;
pub mod logging;
pub mod prefs;
pub mod selection;
pub mod system;
pub mod ui;
pub mod utils;

pub use catalog::Catalog;
pub use compiler::{compile, compile_with, ScriptOptions, SCRIPT_FILE_NAME};
pub use error::{CatalogError, ExportError, IntegrityKind, SelectionError};
pub use selection::{Action, DistroChangePolicy, Phase, SelectionState};
