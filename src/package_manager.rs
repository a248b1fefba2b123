//! Package manager detection and command formatting.

use std::fmt;

/// Package managers the follow-up instructions can be written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PackageManager {
    #[default]
    Npm,
    Yarn,
    Pnpm,
}

impl PackageManager {
    /// Detects the package manager from the path of the executable that
    /// launched us (the `npm_execpath` variable set by all three tools).
    /// Preference order is pnpm, yarn, npm.
    pub fn detect(npm_execpath: Option<&str>) -> Self {
        match npm_execpath {
            Some(path) if path.contains("pnpm") => Self::Pnpm,
            Some(path) if path.contains("yarn") => Self::Yarn,
            _ => Self::Npm,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Yarn => "yarn",
            Self::Pnpm => "pnpm",
        }
    }

    /// Shell command running `script` with this package manager.
    pub fn command(&self, script: &str) -> String {
        match (self, script) {
            (Self::Yarn, "install") => "yarn".to_string(),
            (_, "install") => format!("{} install", self),
            (Self::Npm, _) => format!("npm run {script}"),
            _ => format!("{} {}", self, script),
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
