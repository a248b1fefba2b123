//! Merge rules for files that several templates contribute to.

use crate::constants::{JSON_MERGE_FILES, LINE_MERGE_FILES};
use crate::error::Result;
use serde_json::Value;

/// How an existing destination file is combined with a template file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeStrategy {
    /// Union of lines, existing lines first.
    Lines,
    /// Recursive merge of JSON objects.
    Json,
}

/// Returns the merge strategy for a destination basename, if it has one.
pub fn merge_strategy(file_name: &str) -> Option<MergeStrategy> {
    if LINE_MERGE_FILES.contains(&file_name) {
        Some(MergeStrategy::Lines)
    } else if JSON_MERGE_FILES.contains(&file_name) {
        Some(MergeStrategy::Json)
    } else {
        None
    }
}

/// Keeps every existing line in place and appends the incoming lines that
/// are not present yet. Blank incoming lines are dropped so repeated merges
/// stay stable.
///
/// The result uses the line ending of `existing`, or of `incoming` when
/// `existing` is empty.
pub fn merge_lines(existing: &str, incoming: &str) -> String {
    let sample = if existing.is_empty() { incoming } else { existing };
    let newline = if sample.contains("\r\n") { "\r\n" } else { "\n" };
    let mut lines: Vec<&str> = existing.lines().collect();

    for line in incoming.lines() {
        if line.trim().is_empty() || lines.contains(&line) {
            continue;
        }
        lines.push(line);
    }

    let mut merged = lines.join(newline);
    merged.push_str(newline);
    merged
}

/// Deep-merges `source` into `target`.
///
/// Objects merge key by key, arrays are concatenated without duplicates and
/// any other value in `source` replaces the one in `target`.
pub fn merge_json(target: &mut Value, source: Value) {
    match (target, source) {
        (Value::Object(target), Value::Object(source)) => {
            for (key, value) in source {
                match target.get_mut(&key) {
                    Some(existing) => merge_json(existing, value),
                    None => {
                        target.insert(key, value);
                    }
                }
            }
        }
        (Value::Array(target), Value::Array(source)) => {
            for value in source {
                if !target.contains(&value) {
                    target.push(value);
                }
            }
        }
        (target, source) => *target = source,
    }
}

/// Merges two JSON documents and returns the pretty-printed result.
pub fn merge_json_documents(existing: &str, incoming: &str) -> Result<String> {
    let mut merged: Value = serde_json::from_str(existing)?;
    let incoming: Value = serde_json::from_str(incoming)?;
    merge_json(&mut merged, incoming);

    let mut content = serde_json::to_string_pretty(&merged)?;
    content.push('\n');
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_merge_strategy() {
        assert_eq!(merge_strategy(".gitignore"), Some(MergeStrategy::Lines));
        assert_eq!(merge_strategy("package.json"), Some(MergeStrategy::Json));
        assert_eq!(merge_strategy("_gitignore"), None);
        assert_eq!(merge_strategy("index.html"), None);
    }

    #[test]
    fn test_merge_lines_union() {
        assert_eq!(merge_lines("a\nb\n", "b\nc\n"), "a\nb\nc\n");
    }

    #[test]
    fn test_merge_lines_is_stable() {
        let once = merge_lines("build\n", "node_modules\ndist\n");
        let twice = merge_lines(&once, "node_modules\ndist\n");
        assert_eq!(once, "build\nnode_modules\ndist\n");
        assert_eq!(twice, once);
    }

    #[test]
    fn test_merge_lines_keeps_crlf_endings() {
        assert_eq!(merge_lines("build\r\n# keep\r\n", "dist\n"), "build\r\n# keep\r\ndist\r\n");
        assert_eq!(merge_lines("build\r\n", "build\r\ndist\r\n"), "build\r\ndist\r\n");
        assert_eq!(merge_lines("", "dist\r\n"), "dist\r\n");
        assert_eq!(merge_lines("build\n", "dist\r\n"), "build\ndist\n");
    }

    #[test]
    fn test_merge_lines_keeps_existing_layout() {
        let existing = "# deps\nnode_modules\n\n# output\ndist\n";
        assert_eq!(
            merge_lines(existing, "\n*.local\ndist\n"),
            "# deps\nnode_modules\n\n# output\ndist\n*.local\n"
        );
    }

    #[test]
    fn test_merge_json_objects() {
        let mut target = json!({
            "scripts": { "dev": "vite", "build": "vite build" },
            "devDependencies": { "vite": "^5.4.0" },
            "keywords": ["vanilla"]
        });
        merge_json(
            &mut target,
            json!({
                "scripts": { "build": "tsc && vite build" },
                "devDependencies": { "typescript": "~5.6.0" },
                "keywords": ["vanilla", "typescript"]
            }),
        );

        assert_eq!(
            target,
            json!({
                "scripts": { "dev": "vite", "build": "tsc && vite build" },
                "devDependencies": { "vite": "^5.4.0", "typescript": "~5.6.0" },
                "keywords": ["vanilla", "typescript"]
            })
        );
    }

    #[test]
    fn test_merge_json_documents_preserves_key_order() {
        let merged = merge_json_documents(r#"{"b": 1, "a": 2}"#, r#"{"c": 3, "a": 4}"#).unwrap();
        assert_eq!(merged, "{\n  \"b\": 1,\n  \"a\": 4,\n  \"c\": 3\n}\n");
    }

    #[test]
    fn test_merge_json_documents_invalid() {
        assert!(merge_json_documents("{", "{}").is_err());
    }
}
