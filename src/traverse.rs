//! Deterministic pre-order directory traversal.
//! Directories are reported before their children, siblings in file name
//! order, and version-control metadata directories are never entered.

use crate::constants::METADATA_DIR;
use crate::error::{Error, Result};
use log::debug;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

fn is_metadata_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_type().is_dir() && entry.file_name() == METADATA_DIR
}

/// Walks `root`, calling `on_directory` for `root` and every directory below
/// it (pre-order) and `on_file` for every regular file.
///
/// Symbolic links are not followed and are skipped.
///
/// # Errors
/// * `Error::NotFoundError` if `root` does not exist
/// * `Error::IoError` if an entry cannot be read
/// * Any error returned by a visitor, which stops the walk
pub fn traverse<P, D, F>(root: P, on_directory: D, on_file: F) -> Result<()>
where
    P: AsRef<Path>,
    D: FnMut(&Path) -> Result<()>,
    F: FnMut(&Path) -> Result<()>,
{
    walk(root.as_ref(), false, on_directory, on_file)
}

/// Same as [`traverse`], but symbolic links are resolved: a link is visited
/// as whatever it points to, under the link's own path.
///
/// # Errors
/// * `Error::IoError` for dangling links and link cycles, in addition to the
///   errors of [`traverse`]
pub fn traverse_following_links<P, D, F>(root: P, on_directory: D, on_file: F) -> Result<()>
where
    P: AsRef<Path>,
    D: FnMut(&Path) -> Result<()>,
    F: FnMut(&Path) -> Result<()>,
{
    walk(root.as_ref(), true, on_directory, on_file)
}

fn walk<D, F>(root: &Path, follow_links: bool, mut on_directory: D, mut on_file: F) -> Result<()>
where
    D: FnMut(&Path) -> Result<()>,
    F: FnMut(&Path) -> Result<()>,
{
    if !root.exists() {
        return Err(Error::NotFoundError { path: root.display().to_string() });
    }

    let walker = WalkDir::new(root)
        .follow_links(follow_links)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_metadata_dir(entry));

    for entry in walker {
        let entry = entry.map_err(|e| Error::IoError(e.into()))?;
        let file_type = entry.file_type();

        if file_type.is_dir() {
            on_directory(entry.path())?;
        } else if file_type.is_file() {
            on_file(entry.path())?;
        } else {
            debug!("Skipping non-regular entry: {}", entry.path().display());
        }
    }

    Ok(())
}
