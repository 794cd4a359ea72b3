use std::fmt;
use std::path::PathBuf;

use crate::selection::Phase;

/// Failure to turn a catalog source into a usable catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("malformed catalog: {0}")]
    Format(#[from] serde_json::Error),

    #[error("catalog integrity violation: {kind} ({id})")]
    Integrity { kind: IntegrityKind, id: String },
}

impl CatalogError {
    pub(crate) fn integrity(kind: IntegrityKind, id: impl Into<String>) -> Self {
        Self::Integrity {
            kind,
            id: id.into(),
        }
    }

    /// Offending id for integrity violations.
    pub fn offending_id(&self) -> Option<&str> {
        match self {
            Self::Integrity { id, .. } => Some(id),
            Self::Format(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrityKind {
    EmptyId,
    DuplicateDistro,
    DuplicateDesktop,
    DuplicateCategory,
    DuplicateApp,
    AppInMultipleCategories,
    UnknownCompatibilityDistro,
    UnsafeCategoryName,
    UnsafeAppId,
    UnsafeScriptPath,
}

impl fmt::Display for IntegrityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::EmptyId => "empty id",
            Self::DuplicateDistro => "duplicate distro id",
            Self::DuplicateDesktop => "duplicate desktop environment id",
            Self::DuplicateCategory => "duplicate category id",
            Self::DuplicateApp => "duplicate app id",
            Self::AppInMultipleCategories => "app declared in more than one category",
            Self::UnknownCompatibilityDistro => "compatibility references unknown distro",
            Self::UnsafeCategoryName => "category name contains shell metacharacters",
            Self::UnsafeAppId => "app id is not usable as a file name",
            Self::UnsafeScriptPath => "script path is not a safe relative path",
        };
        f.write_str(text)
    }
}

/// Rejected selection change. The selection is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("unknown distro: {0}")]
    UnknownDistro(String),

    #[error("unknown desktop environment: {0}")]
    UnknownDesktop(String),

    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("cannot move from {from} to {to}")]
    InvalidTransition { from: Phase, to: Phase },
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no clipboard helper found (tried {0})")]
    ClipboardUnavailable(String),

    #[error("clipboard helper {program} failed: {reason}")]
    ClipboardFailed { program: String, reason: String },
}
