//! Package name checks used by the prompt flow.

use regex::Regex;
use std::sync::LazyLock;

static PACKAGE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:@[a-z0-9-*~][a-z0-9-*._~]*/)?[a-z0-9-~][a-z0-9-._~]*$")
        .expect("a valid package name pattern")
});
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("a valid whitespace pattern"));
static LEADING_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[._]").expect("a valid leading marker pattern"));
static INVALID_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9-~]+").expect("a valid character class pattern"));

/// Whether `name` is acceptable as the `name` field of a package manifest.
pub fn is_valid_package_name(name: &str) -> bool {
    PACKAGE_NAME.is_match(name)
}

/// Turns a project name into a package name suggestion.
pub fn to_valid_package_name(name: &str) -> String {
    let name = name.trim().to_lowercase();
    let name = WHITESPACE.replace_all(&name, "-");
    let name = LEADING_MARKER.replace(&name, "");
    INVALID_CHARS.replace_all(&name, "-").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_package_name() {
        assert!(is_valid_package_name("my-app"));
        assert!(is_valid_package_name("@scope/my-app"));
        assert!(is_valid_package_name("app.v2"));
        assert!(!is_valid_package_name("My App"));
        assert!(!is_valid_package_name(".hidden"));
        assert!(!is_valid_package_name("_private"));
        assert!(!is_valid_package_name(""));
    }

    #[test]
    fn test_to_valid_package_name() {
        assert_eq!(to_valid_package_name("  My Cool App "), "my-cool-app");
        assert_eq!(to_valid_package_name("_private"), "private");
        assert_eq!(to_valid_package_name("Hello@World!"), "hello-world-");
        assert_eq!(to_valid_package_name("app.v2"), "app-v2");
    }
}
