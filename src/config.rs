//! Run configuration for create-vanilla.
//! Everything read from the process (working directory, environment,
//! executable location) is resolved here once, so the render and rewrite
//! steps only ever see explicit values.

use crate::cli::Args;
use crate::constants::{
    CODE_TEMPLATES, DEFAULT_VARIANT, ENTRY_TEMPLATES, TEMPLATE_DIR_NAME, TYPESCRIPT_VARIANT,
};
use crate::error::{Error, Result};
use crate::package_manager::PackageManager;
use log::debug;
use std::path::{Path, PathBuf};

/// Resolved environment of a run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory the project path is resolved against
    pub cwd: PathBuf,
    /// Directory holding the `base`, `config`, `code` and `entry` templates
    pub template_root: PathBuf,
    /// Package manager the instructions and README are written for
    pub package_manager: PackageManager,
}

impl Config {
    /// Builds the configuration from parsed arguments.
    ///
    /// # Errors
    /// * `Error::NotFoundError` if the template root does not exist
    /// * `Error::IoError` if the working directory cannot be read
    pub fn from_args(args: &Args) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let template_root = match &args.templates {
            Some(dir) => cwd.join(dir),
            None => default_template_root(),
        };

        if !template_root.is_dir() {
            return Err(Error::NotFoundError { path: template_root.display().to_string() });
        }
        debug!("Using templates from {}", template_root.display());

        Ok(Self {
            cwd,
            template_root,
            package_manager: PackageManager::detect(args.npm_execpath.as_deref()),
        })
    }
}

/// Template root used when none is given: a `template` directory next to the
/// executable, falling back to the one shipped with the crate sources.
pub fn default_template_root() -> PathBuf {
    let beside_exe = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(TEMPLATE_DIR_NAME)))
        .filter(|dir| dir.is_dir());

    beside_exe.unwrap_or_else(|| Path::new(env!("CARGO_MANIFEST_DIR")).join(TEMPLATE_DIR_NAME))
}

/// Answers collected before anything is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectOptions {
    /// Project name, also the project directory relative to the working directory
    pub project_name: String,
    /// Value of the manifest `name` field
    pub package_name: String,
    pub needs_typescript: bool,
}

impl ProjectOptions {
    /// Absolute project directory for a given working directory.
    /// `.` components are dropped, so `.` resolves to `cwd` itself.
    pub fn project_root<P: AsRef<Path>>(&self, cwd: P) -> PathBuf {
        cwd.as_ref().join(&self.project_name).components().collect()
    }

    /// Name of the `code` and `entry` template variant to render.
    pub fn variant(&self) -> &'static str {
        if self.needs_typescript {
            TYPESCRIPT_VARIANT
        } else {
            DEFAULT_VARIANT
        }
    }

    pub fn code_template(&self) -> String {
        format!("{CODE_TEMPLATES}/{}", self.variant())
    }

    pub fn entry_template(&self) -> String {
        format!("{ENTRY_TEMPLATES}/{}", self.variant())
    }
}
