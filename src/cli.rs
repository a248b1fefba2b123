//! Command-line interface implementation for create-vanilla.
//! Provides argument parsing and help text formatting using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::constants::TEMPLATES_ENV;
use crate::prompt::Presets;

/// Command-line arguments structure for create-vanilla.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "create-vanilla: scaffold a vanilla JavaScript or TypeScript web project",
    long_about = None
)]
pub struct Args {
    /// Directory, relative to the current one, where the project is created.
    /// Prompted for when omitted.
    #[arg(value_name = "PROJECT_DIR")]
    pub project_dir: Option<String>,

    /// Add TypeScript support and skip the feature prompts
    #[arg(long, alias = "ts")]
    pub typescript: bool,

    /// Use the default feature set and skip the feature prompts
    #[arg(long)]
    pub default: bool,

    /// Directory containing the project templates
    #[arg(long, value_name = "DIR", env = TEMPLATES_ENV)]
    pub templates: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Path of the package manager executable that launched this command
    #[arg(long, env = "npm_execpath", hide = true)]
    pub npm_execpath: Option<String>,
}

impl Args {
    /// Choices already made on the command line.
    pub fn presets(&self) -> Presets {
        Presets {
            project_dir: self.project_dir.clone(),
            typescript: self.typescript,
            default: self.default,
        }
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling for invalid arguments
pub fn get_args() -> Args {
    Args::parse()
}
