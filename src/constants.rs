//! Common constants used throughout create-vanilla.

/// Version-control directory excluded from every traversal.
pub const METADATA_DIR: &str = ".git";

/// Template basenames restored to their real names at render time.
/// Dot-files are stored under an alias so packaging tools do not drop them.
pub const RENAMED_FILES: [(&str, &str); 1] = [("_gitignore", ".gitignore")];

/// Destination basenames merged line by line instead of overwritten.
pub const LINE_MERGE_FILES: [&str; 1] = [".gitignore"];

/// Destination basenames deep-merged as JSON instead of overwritten.
pub const JSON_MERGE_FILES: [&str; 1] = [MANIFEST_FILE];

/// Template rendered for every project.
pub const BASE_TEMPLATE: &str = "base";

/// Extra configuration rendered when TypeScript is requested.
pub const TYPESCRIPT_CONFIG_TEMPLATE: &str = "config/typescript";

/// Parent directories of the variant-specific templates.
pub const CODE_TEMPLATES: &str = "code";
pub const ENTRY_TEMPLATES: &str = "entry";

pub const DEFAULT_VARIANT: &str = "default";
pub const TYPESCRIPT_VARIANT: &str = "typescript-default";

pub const UNTYPED_EXTENSION: &str = "js";
pub const TYPED_EXTENSION: &str = "ts";

pub const UNTYPED_CONFIG_FILE: &str = "jsconfig.json";
pub const TYPED_CONFIG_FILE: &str = "tsconfig.json";

/// HTML entry document at the project root and the script path it loads.
pub const ENTRY_HTML_FILE: &str = "index.html";
pub const UNTYPED_ENTRY_SCRIPT: &str = "src/app.js";
pub const TYPED_ENTRY_SCRIPT: &str = "src/app.ts";

pub const MANIFEST_FILE: &str = "package.json";
pub const MANIFEST_VERSION: &str = "0.0.0";
pub const README_FILE: &str = "README.md";

pub const DEFAULT_PROJECT_NAME: &str = "default-project";

/// Environment variable naming an alternative template root.
pub const TEMPLATES_ENV: &str = "CREATE_VANILLA_TEMPLATES";

/// Directory name of the template root shipped with the crate.
pub const TEMPLATE_DIR_NAME: &str = "template";
