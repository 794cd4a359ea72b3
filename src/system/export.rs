use std::fs;
use std::path::{Path, PathBuf};

use crate::compiler::SCRIPT_FILE_NAME;
use crate::error::ExportError;

/// Writes `script` to `dir/omari-install.sh` and returns the full path.
pub fn save_script(dir: &Path, script: &str) -> Result<PathBuf, ExportError> {
    save_script_as(&dir.join(SCRIPT_FILE_NAME), script)?;
    Ok(dir.join(SCRIPT_FILE_NAME))
}

/// Writes `script` to `path` verbatim, marking it executable on unix.
pub fn save_script_as(path: &Path, script: &str) -> Result<(), ExportError> {
    let io_err = |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };

    fs::write(path, script).map_err(io_err)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o755)).map_err(io_err)?;
    }

    tracing::info!(path = %path.display(), bytes = script.len(), "script saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_exact_bytes_under_fixed_name() {
        let dir = tempfile::tempdir().unwrap();
        let script = "#!/usr/bin/env bash\nset -e\necho \"Installation complete!\"";

        let path = save_script(dir.path(), script).unwrap();

        assert_eq!(path.file_name().unwrap(), SCRIPT_FILE_NAME);
        assert_eq!(fs::read_to_string(&path).unwrap(), script);
    }

    #[cfg(unix)]
    #[test]
    fn saved_script_is_executable() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = save_script(dir.path(), "echo hi").unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o111, 0o111);
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = save_script(&dir.path().join("missing"), "echo hi").unwrap_err();
        assert!(matches!(err, ExportError::Io { .. }));
    }
}
