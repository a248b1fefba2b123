//! README generation for new projects.

use crate::error::Result;
use crate::package_manager::PackageManager;
use crate::renderer::TemplateRenderer;

const README_TEMPLATE: &str = r#"# {{ project_name }}

## Project Setup

```sh
{{ install }}
```

### Compile and Hot-Reload for Development

```sh
{{ dev }}
```

### {% if needs_typescript %}Type-Check, {% endif %}Compile and Minify for Production

```sh
{{ build }}
```
"#;

/// Renders the README of a generated project.
pub fn generate_readme(
    engine: &dyn TemplateRenderer,
    project_name: &str,
    package_manager: PackageManager,
    needs_typescript: bool,
) -> Result<String> {
    let context = serde_json::json!({
        "project_name": project_name,
        "needs_typescript": needs_typescript,
        "install": package_manager.command("install"),
        "dev": package_manager.command("dev"),
        "build": package_manager.command("build"),
    });

    engine.render(README_TEMPLATE, &context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::MiniJinjaRenderer;

    #[test]
    fn test_generate_readme_npm() {
        let engine = MiniJinjaRenderer::new();
        let readme = generate_readme(&engine, "my-app", PackageManager::Npm, false).unwrap();

        let expected = "# my-app\n\n## Project Setup\n\n```sh\nnpm install\n```\n\n\
### Compile and Hot-Reload for Development\n\n```sh\nnpm run dev\n```\n\n\
### Compile and Minify for Production\n\n```sh\nnpm run build\n```\n";
        assert_eq!(readme, expected);
    }

    #[test]
    fn test_generate_readme_typescript_yarn() {
        let engine = MiniJinjaRenderer::new();
        let readme = generate_readme(&engine, "my-app", PackageManager::Yarn, true).unwrap();

        assert!(readme.contains("```sh\nyarn\n```"));
        assert!(readme.contains("```sh\nyarn dev\n```"));
        assert!(readme.contains("### Type-Check, Compile and Minify for Production"));
        assert!(readme.contains("```sh\nyarn build\n```"));
    }
}
