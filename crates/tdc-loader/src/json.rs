//! JSON translation files.

use std::fs;
use std::io;
use std::path::Path;

use serde_json::Value;
use tdc_types::Tree;
use tracing::debug;

use crate::error::{LoadError, LoadResult};

/// Read `path` and parse it into a tree.
pub fn load_tree(path: &Path) -> LoadResult<Tree> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => LoadError::ResourceNotFound {
            path: path.to_path_buf(),
        },
        io::ErrorKind::InvalidData => LoadError::MalformedResource {
            path: path.to_path_buf(),
            reason: "file is not valid UTF-8".into(),
        },
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let tree = parse_tree(&content, path)?;
    debug!(path = %path.display(), keys = tree.len(), "loaded translation file");
    Ok(tree)
}

/// Parse resource text. `path` is only used to label errors.
pub fn parse_tree(content: &str, path: &Path) -> LoadResult<Tree> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let cleaned = strip_json_comments(content);

    let root: Value = serde_json::from_str(&cleaned).map_err(|e| LoadError::MalformedResource {
        path: path.to_path_buf(),
        reason: format!("invalid JSON syntax: {e}"),
    })?;

    match root {
        Value::Object(tree) => Ok(tree),
        other => Err(LoadError::MalformedResource {
            path: path.to_path_buf(),
            reason: format!("expected a JSON object at the top level, found {}", kind_name(&other)),
        }),
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Remove `//` and `/* */` comments outside of string literals.
///
/// Newlines inside comments are kept so serde_json error positions still
/// match the original file.
fn strip_json_comments(content: &str) -> String {
    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();
    let mut in_string = false;
    let mut escape_next = false;

    while let Some(ch) = chars.next() {
        if escape_next {
            result.push(ch);
            escape_next = false;
            continue;
        }

        if in_string {
            match ch {
                '\\' => escape_next = true,
                '"' => in_string = false,
                _ => {}
            }
            result.push(ch);
            continue;
        }

        let next = chars.peek().copied();
        match (ch, next) {
            ('"', _) => {
                in_string = true;
                result.push(ch);
            }
            ('/', Some('/')) => {
                for c in chars.by_ref() {
                    if c == '\n' {
                        result.push('\n');
                        break;
                    }
                }
            }
            ('/', Some('*')) => {
                chars.next();
                let mut prev = ' ';
                for c in chars.by_ref() {
                    if prev == '*' && c == '/' {
                        break;
                    }
                    if c == '\n' {
                        result.push('\n');
                    }
                    prev = c;
                }
            }
            _ => result.push(ch),
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    #[test]
    fn loads_nested_object() {
        let file = write_temp(r#"{"HELLO": "Hello", "NESTED": {"KEY1": "Nested Key 1"}}"#);
        let tree = load_tree(file.path()).unwrap();
        assert_eq!(tree.len(), 2);
        assert_eq!(tree["NESTED"], json!({"KEY1": "Nested Key 1"}));
    }

    #[test]
    fn keeps_document_order() {
        let file = write_temp(r#"{"z": "1", "a": "2", "m": "3"}"#);
        let tree = load_tree(file.path()).unwrap();
        let keys: Vec<_> = tree.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn missing_file_is_resource_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = load_tree(&path).unwrap_err();
        assert!(matches!(err, LoadError::ResourceNotFound { .. }));
        assert_eq!(err.path(), path.as_path());
        assert_eq!(err.kind(), "resource_not_found");
        assert!(err.to_string().contains("absent.json"));
    }

    #[test]
    fn invalid_json_is_malformed() {
        let file = write_temp(r#"{"a": "b",,}"#);
        let err = load_tree(file.path()).unwrap_err();
        match &err {
            LoadError::MalformedResource { reason, .. } => assert!(reason.contains("invalid JSON")),
            other => panic!("expected MalformedResource, got {other:?}"),
        }
    }

    #[test]
    fn non_object_root_is_malformed() {
        let file = write_temp(r#"["a", "b"]"#);
        let err = load_tree(file.path()).unwrap_err();
        match &err {
            LoadError::MalformedResource { reason, .. } => assert!(reason.contains("an array")),
            other => panic!("expected MalformedResource, got {other:?}"),
        }
    }

    #[test]
    fn non_utf8_is_malformed() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[b'{', 0xff, 0xfe, b'}']).unwrap();
        let err = load_tree(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::MalformedResource { .. }));
    }

    #[test]
    fn comments_are_ignored() {
        let file = write_temp(
            "{\n  // greeting\n  \"hello\": \"Hello\", /* block\n comment */\n  \"url\": \"http://x\"\n}",
        );
        let tree = load_tree(file.path()).unwrap();
        assert_eq!(tree["hello"], json!("Hello"));
        assert_eq!(tree["url"], json!("http://x"));
    }

    #[test]
    fn escaped_quotes_do_not_end_strings() {
        let tree = parse_tree(r#"{"q": "say \"//hi\""}"#, Path::new("inline.json")).unwrap();
        assert_eq!(tree["q"], json!("say \"//hi\""));
    }

    #[test]
    fn byte_order_mark_is_skipped() {
        let tree = parse_tree("\u{feff}{\"a\": \"b\"}", Path::new("bom.json")).unwrap();
        assert_eq!(tree["a"], json!("b"));
    }

    #[test]
    fn empty_object_is_valid() {
        let tree = parse_tree("{}", Path::new("empty.json")).unwrap();
        assert!(tree.is_empty());
    }
}
