use std::io::Write;
use std::process::{Command, Stdio};

use which::which;

use super::os::Platform;
use crate::error::ExportError;

/// Helper program and its arguments, reading the text from stdin.
pub type Helper = (&'static str, &'static [&'static str]);

/// Clipboard helpers worth trying on `platform`, most preferred first.
pub fn helpers_for_platform(platform: Platform) -> &'static [Helper] {
    match platform {
        Platform::Mac => &[("pbcopy", &[])],
        Platform::Windows => &[("clip", &[])],
        Platform::Wsl => &[
            ("clip.exe", &[]),
            ("wl-copy", &[]),
            ("xclip", &["-selection", "clipboard"]),
        ],
        Platform::Linux | Platform::Unknown => &[
            ("wl-copy", &[]),
            ("xclip", &["-selection", "clipboard"]),
            ("xsel", &["--clipboard", "--input"]),
        ],
    }
}

/// First helper for `platform` that is on `PATH`.
pub fn find_helper(platform: Platform) -> Option<Helper> {
    helpers_for_platform(platform)
        .iter()
        .copied()
        .find(|(program, _)| which(program).is_ok())
}

/// Hands `text` to the system clipboard and returns the helper used.
pub fn copy_to_clipboard(text: &str, platform: Platform) -> Result<&'static str, ExportError> {
    let Some((program, args)) = find_helper(platform) else {
        let tried = helpers_for_platform(platform)
            .iter()
            .map(|(program, _)| *program)
            .collect::<Vec<_>>()
            .join(", ");
        return Err(ExportError::ClipboardUnavailable(tried));
    };
    pipe_to(program, args, text)?;
    tracing::info!(helper = program, bytes = text.len(), "script copied to clipboard");
    Ok(program)
}

fn pipe_to(program: &'static str, args: &[&str], text: &str) -> Result<(), ExportError> {
    let failed = |reason: String| ExportError::ClipboardFailed {
        program: program.to_string(),
        reason,
    };

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| failed(e.to_string()))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| failed(e.to_string()))?;
    }

    let status = child.wait().map_err(|e| failed(e.to_string()))?;
    if !status.success() {
        return Err(failed(format!("exited with {status}")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_platform_has_a_helper_list() {
        for platform in [
            Platform::Linux,
            Platform::Wsl,
            Platform::Mac,
            Platform::Windows,
            Platform::Unknown,
        ] {
            assert!(!helpers_for_platform(platform).is_empty());
        }
    }

    #[test]
    fn wsl_prefers_the_windows_clipboard() {
        assert_eq!(helpers_for_platform(Platform::Wsl)[0].0, "clip.exe");
    }

    #[cfg(unix)]
    #[test]
    fn failing_helper_is_reported() {
        let err = pipe_to("false", &[], "text").unwrap_err();
        assert!(matches!(err, ExportError::ClipboardFailed { ref program, .. } if program == "false"));
    }

    #[cfg(unix)]
    #[test]
    fn helper_receives_the_text() {
        pipe_to("cat", &[], "#!/usr/bin/env bash").unwrap();
    }
}
