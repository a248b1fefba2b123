//! The generated `package.json` manifest.

use log::debug;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{MANIFEST_FILE, MANIFEST_VERSION};
use crate::error::{Error, Result};

/// Fields the generator owns in the project manifest.
#[derive(Debug, Serialize)]
pub struct Manifest<'a> {
    pub name: &'a str,
    pub version: &'a str,
}

impl<'a> Manifest<'a> {
    pub fn new(name: &'a str) -> Self {
        Self { name, version: MANIFEST_VERSION }
    }

    /// Serializes the manifest, keeping any other fields of `existing` after
    /// `name` and `version`.
    pub fn to_json(&self, existing: Option<&str>) -> Result<String> {
        let serde_json::Value::Object(mut manifest) = serde_json::to_value(self)? else {
            return Err(Error::TemplateError("manifest must serialize to an object".to_string()));
        };

        if let Some(existing) = existing {
            match serde_json::from_str::<serde_json::Value>(existing)? {
                serde_json::Value::Object(fields) => {
                    for (key, value) in fields {
                        manifest.entry(key).or_insert(value);
                    }
                }
                _ => {
                    return Err(Error::TemplateError(format!(
                        "{MANIFEST_FILE} is not a JSON object"
                    )))
                }
            }
        }

        let mut content = serde_json::to_string_pretty(&manifest)?;
        content.push('\n');
        Ok(content)
    }
}

/// Writes `package.json` at `root`, on top of the one templates produced if
/// there is one.
pub fn write_manifest<P: AsRef<Path>>(root: P, package_name: &str) -> Result<PathBuf> {
    let path = root.as_ref().join(MANIFEST_FILE);
    let existing = if path.is_file() { Some(fs::read_to_string(&path)?) } else { None };

    let content = Manifest::new(package_name).to_json(existing.as_deref())?;
    debug!("Writing manifest: {}", path.display());
    fs::write(&path, content)?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_manifest() {
        let json = Manifest::new("my-app").to_json(None).unwrap();
        assert_eq!(json, "{\n  \"name\": \"my-app\",\n  \"version\": \"0.0.0\"\n}\n");
    }

    #[test]
    fn test_manifest_over_template() {
        let existing = r#"{"private": true, "name": "template", "scripts": {"dev": "vite"}}"#;
        let json = Manifest::new("my-app").to_json(Some(existing)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["name", "version", "private", "scripts"]);
        assert_eq!(value["name"], "my-app");
        assert_eq!(value["scripts"]["dev"], "vite");
    }

    #[test]
    fn test_manifest_over_non_object() {
        let result = Manifest::new("my-app").to_json(Some("[1, 2]"));
        assert!(matches!(result, Err(Error::TemplateError(_))));
    }
}
