//! Conversion of a rendered JavaScript project into its TypeScript variant.
//! Runs once, after every template has been rendered.

use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

use crate::{
    constants::{
        ENTRY_HTML_FILE, TYPED_CONFIG_FILE, TYPED_ENTRY_SCRIPT, TYPED_EXTENSION,
        UNTYPED_CONFIG_FILE, UNTYPED_ENTRY_SCRIPT, UNTYPED_EXTENSION,
    },
    error::{Error, Result},
    traverse::traverse,
};

/// Returns the TypeScript name for a file, or `None` if it keeps its name.
pub fn typed_file_name(path: &Path) -> Option<PathBuf> {
    if path.extension().is_some_and(|ext| ext == UNTYPED_EXTENSION) {
        Some(path.with_extension(TYPED_EXTENSION))
    } else if path.file_name().is_some_and(|name| name == UNTYPED_CONFIG_FILE) {
        Some(path.with_file_name(TYPED_CONFIG_FILE))
    } else {
        None
    }
}

/// Points the entry document at the TypeScript entry script.
/// Only the first reference is rewritten.
pub fn rewrite_entry_script(content: &str) -> String {
    content.replacen(UNTYPED_ENTRY_SCRIPT, TYPED_ENTRY_SCRIPT, 1)
}

fn rename(from: &Path, to: &Path) -> Result<()> {
    if to.exists() {
        return Err(Error::RenameCollisionError {
            from: from.display().to_string(),
            to: to.display().to_string(),
        });
    }
    debug!("Renaming {} to {}", from.display(), to.display());
    fs::rename(from, to)?;
    Ok(())
}

/// Renames `.js` sources to `.ts`, `jsconfig.json` to `tsconfig.json`, and
/// rewrites the script reference in the root `index.html`.
///
/// # Errors
/// * `Error::NotFoundError` if `project_root` or its `index.html` is missing
/// * `Error::RenameCollisionError` if a renamed file would replace another
/// * `Error::IoError` for any other filesystem failure
pub fn convert_to_typescript<P: AsRef<Path>>(project_root: P) -> Result<()> {
    let project_root = project_root.as_ref();

    let mut renames = Vec::new();
    traverse(
        project_root,
        |_| Ok(()),
        |file| {
            if let Some(target) = typed_file_name(file) {
                renames.push((file.to_path_buf(), target));
            }
            Ok(())
        },
    )?;

    for (from, to) in &renames {
        rename(from, to)?;
    }

    let entry_path = project_root.join(ENTRY_HTML_FILE);
    if !entry_path.is_file() {
        return Err(Error::NotFoundError { path: entry_path.display().to_string() });
    }

    let content = fs::read_to_string(&entry_path)?;
    let rewritten = rewrite_entry_script(&content);
    if rewritten.contains(UNTYPED_ENTRY_SCRIPT) {
        warn!(
            "{} still references '{}' after the first occurrence was rewritten",
            entry_path.display(),
            UNTYPED_ENTRY_SCRIPT
        );
    }
    fs::write(&entry_path, rewritten)?;

    Ok(())
}
