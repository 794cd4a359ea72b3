use std::fmt;
use std::fs;

/// Host the session runs on. Decides which clipboard helpers are tried and
/// is shown in the command bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Linux,
    Wsl,
    Mac,
    Windows,
    Unknown,
}

impl Platform {
    pub fn detect() -> Self {
        let kernel = fs::read_to_string("/proc/version").ok();
        let wsl_env = std::env::var_os("WSL_DISTRO_NAME").is_some()
            || std::env::var_os("WSL_INTEROP").is_some();
        Self::classify(std::env::consts::OS, wsl_env, kernel.as_deref())
    }

    fn classify(os: &str, wsl_env: bool, kernel: Option<&str>) -> Self {
        match os {
            "windows" => Self::Windows,
            "macos" => Self::Mac,
            "linux" if wsl_env || kernel.is_some_and(is_microsoft_kernel) => Self::Wsl,
            "linux" => Self::Linux,
            _ => Self::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Platform::Linux => "Linux",
            Platform::Wsl => "WSL",
            Platform::Mac => "macOS",
            Platform::Windows => "Windows",
            Platform::Unknown => "Unknown",
        }
    }

    /// Generated scripts need bash and sudo, which a plain Windows host lacks.
    pub fn runs_scripts(&self) -> bool {
        !matches!(self, Platform::Windows)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn is_microsoft_kernel(version: &str) -> bool {
    version.to_ascii_lowercase().contains("microsoft")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wsl_is_detected_from_env_or_kernel() {
        assert_eq!(Platform::classify("linux", true, None), Platform::Wsl);
        assert_eq!(
            Platform::classify(
                "linux",
                false,
                Some("Linux version 5.15.90.1-microsoft-standard-WSL2")
            ),
            Platform::Wsl
        );
        assert_eq!(
            Platform::classify("linux", false, Some("Linux version 6.8.0-generic")),
            Platform::Linux
        );
    }

    #[test]
    fn non_linux_hosts() {
        assert_eq!(Platform::classify("macos", false, None), Platform::Mac);
        assert_eq!(Platform::classify("windows", true, None), Platform::Windows);
        assert_eq!(Platform::classify("freebsd", false, None), Platform::Unknown);
        assert!(!Platform::Windows.runs_scripts());
        assert_eq!(Platform::Wsl.to_string(), "WSL");
    }
}
