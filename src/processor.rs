//! Template rendering: copies one template directory onto a project
//! directory, restoring aliased file names and merging files that several
//! templates contribute to.

use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{
    constants::RENAMED_FILES,
    error::{Error, Result},
    merge::{merge_json_documents, merge_lines, merge_strategy, MergeStrategy},
    traverse::traverse_following_links,
};

/// Maps a template basename to the basename it gets in the project.
pub fn remap_file_name(file_name: &str) -> &str {
    RENAMED_FILES
        .iter()
        .find(|(alias, _)| *alias == file_name)
        .map(|(_, name)| *name)
        .unwrap_or(file_name)
}

/// Resolves the destination of a template file given its path relative to
/// the template directory. Only the basename is remapped.
pub fn resolve_target_path<P: AsRef<Path>, Q: AsRef<Path>>(relative_path: P, dest_dir: Q) -> PathBuf {
    let relative_path = relative_path.as_ref();
    let target = dest_dir.as_ref().join(relative_path);

    match relative_path.file_name().and_then(|n| n.to_str()) {
        Some(file_name) => target.with_file_name(remap_file_name(file_name)),
        None => target,
    }
}

fn relative_to<'a>(path: &'a Path, base: &Path) -> Result<&'a Path> {
    path.strip_prefix(base).map_err(|e| Error::TemplateError(e.to_string()))
}

fn merge_file(source: &Path, target: &Path, strategy: MergeStrategy) -> Result<()> {
    let existing = fs::read_to_string(target)?;
    let incoming = fs::read_to_string(source)?;

    let merged = match strategy {
        MergeStrategy::Lines => merge_lines(&existing, &incoming),
        MergeStrategy::Json => merge_json_documents(&existing, &incoming)?,
    };

    debug!("Merging file: {}", target.display());
    fs::write(target, merged)?;
    Ok(())
}

fn render_file(source: &Path, target: &Path) -> Result<()> {
    let strategy = target.file_name().and_then(|n| n.to_str()).and_then(merge_strategy);

    match strategy {
        Some(strategy) if target.is_file() => merge_file(source, target, strategy),
        _ => {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            debug!("Copying file: {}", target.display());
            fs::copy(source, target)?;
            Ok(())
        }
    }
}

/// Renders `template_dir` onto `dest_dir`.
///
/// Directories are created as they are encountered, so empty template
/// directories are reproduced. Files are copied verbatim unless their
/// destination name is mergeable and the destination already exists.
/// Symbolic links in the template are copied as the content they point to.
///
/// # Errors
/// * `Error::NotFoundError` if `template_dir` does not exist
/// * `Error::IoError` if a file cannot be read or written, or a link is dangling
/// * `Error::JsonError` if a mergeable JSON file is malformed
///
/// A failure part way through leaves the files rendered so far in place.
pub fn render_template<P: AsRef<Path>, Q: AsRef<Path>>(template_dir: P, dest_dir: Q) -> Result<()> {
    let template_dir = template_dir.as_ref();
    let dest_dir = dest_dir.as_ref();

    if !template_dir.is_dir() {
        return Err(Error::NotFoundError { path: template_dir.display().to_string() });
    }

    debug!("Rendering template {} into {}", template_dir.display(), dest_dir.display());
    fs::create_dir_all(dest_dir)?;

    traverse_following_links(
        template_dir,
        |dir| {
            let target = dest_dir.join(relative_to(dir, template_dir)?);
            fs::create_dir_all(&target)?;
            Ok(())
        },
        |file| {
            let target = resolve_target_path(relative_to(file, template_dir)?, dest_dir);
            render_file(file, &target)
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remap_file_name() {
        assert_eq!(remap_file_name("_gitignore"), ".gitignore");
        assert_eq!(remap_file_name("gitignore"), "gitignore");
        assert_eq!(remap_file_name("_gitignore.bak"), "_gitignore.bak");
    }

    #[test]
    fn test_resolve_target_path() {
        assert_eq!(
            resolve_target_path("nested/_gitignore", "out"),
            PathBuf::from("out/nested/.gitignore")
        );
        assert_eq!(
            resolve_target_path("_gitignore/app.js", "out"),
            PathBuf::from("out/_gitignore/app.js")
        );
        assert_eq!(resolve_target_path("index.html", "out"), PathBuf::from("out/index.html"));
    }
}
