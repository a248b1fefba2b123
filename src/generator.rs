//! Project generation: renders the selected templates, converts the result
//! to TypeScript when asked to, and writes the generated files.

use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

use crate::{
    config::{Config, ProjectOptions},
    constants::{BASE_TEMPLATE, README_FILE, TYPESCRIPT_CONFIG_TEMPLATE},
    error::Result,
    manifest::write_manifest,
    package_manager::PackageManager,
    processor::render_template,
    readme::generate_readme,
    renderer::TemplateRenderer,
    typed::convert_to_typescript,
};

/// Names of the templates rendered for `options`, in render order.
pub fn selected_templates(options: &ProjectOptions) -> Vec<String> {
    let mut templates = vec![BASE_TEMPLATE.to_string()];
    if options.needs_typescript {
        templates.push(TYPESCRIPT_CONFIG_TEMPLATE.to_string());
    }
    templates.push(options.code_template());
    templates.push(options.entry_template());
    templates
}

/// Generates the project described by `options` and returns its root.
///
/// Each step completes before the next starts; the TypeScript pass only
/// runs once every template has been rendered.
pub fn generate(
    options: &ProjectOptions,
    config: &Config,
    engine: &dyn TemplateRenderer,
) -> Result<PathBuf> {
    let root = options.project_root(&config.cwd);
    fs::create_dir_all(&root)?;

    for template in selected_templates(options) {
        debug!("Rendering template '{template}'");
        render_template(config.template_root.join(&template), &root)?;
    }

    if options.needs_typescript {
        convert_to_typescript(&root)?;
    }

    write_manifest(&root, &options.package_name)?;

    let readme = generate_readme(
        engine,
        &options.project_name,
        config.package_manager,
        options.needs_typescript,
    )?;
    fs::write(root.join(README_FILE), readme)?;

    info!("Generated project in {}", root.display());
    Ok(root)
}

/// Commands the user runs next, in order.
pub fn next_steps<P: AsRef<Path>, Q: AsRef<Path>>(
    root: P,
    cwd: Q,
    package_manager: PackageManager,
) -> Vec<String> {
    let (root, cwd) = (root.as_ref(), cwd.as_ref());
    let mut steps = Vec::new();

    if root != cwd {
        let target = root.strip_prefix(cwd).unwrap_or(root);
        steps.push(format!("cd {}", target.display()));
    }
    steps.push(package_manager.command("install"));
    steps.push(package_manager.command("dev"));
    steps
}
