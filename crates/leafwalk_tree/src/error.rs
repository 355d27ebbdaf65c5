//! Tree error types.

use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while reading or walking a tree.
#[derive(Debug, Error)]
pub enum TreeError {
    /// A node does not have the shape its position requires.
    ///
    /// Raised where a forest (an array of nodes) was expected and something
    /// else was found, e.g. a branch whose value is a bare string.
    #[error("Invalid structure at '{path}': expected {expected}, found {found}")]
    InvalidStructure {
        /// JSON pointer to the offending value (empty for the root).
        path: String,
        /// What the position requires.
        expected: &'static str,
        /// What was actually there.
        found: &'static str,
    },

    /// The input text is not valid JSON.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl TreeError {
    /// Creates an invalid structure error for a value that should have been a forest.
    pub fn expected_forest(path: impl Into<String>, found: &Value) -> Self {
        Self::InvalidStructure {
            path: path.into(),
            expected: "an array of nodes",
            found: kind_of(found),
        }
    }

    /// Returns the JSON pointer of the offending value, if this is a structure error.
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::InvalidStructure { path, .. } => Some(path),
            Self::Json(_) => None,
        }
    }
}

/// Human-readable name of a JSON value's kind.
pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Appends a reference token to a JSON pointer, escaping `~` and `/` (RFC 6901).
pub(crate) fn push_pointer(base: &str, token: &str) -> String {
    let escaped = token.replace('~', "~0").replace('/', "~1");
    format!("{}/{}", base, escaped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn test_expected_forest_message() {
        let err = TreeError::expected_forest("/0/docs", &json!("readme.md"));

        assert_eq!(
            err.to_string(),
            "Invalid structure at '/0/docs': expected an array of nodes, found a string"
        );
        assert_eq!(err.path(), Some("/0/docs"));
    }

    #[test]
    fn test_json_error_has_no_path() {
        let json_err = serde_json::from_str::<Value>("[").unwrap_err();
        let err = TreeError::from(json_err);

        assert!(err.to_string().starts_with("Invalid JSON"));
        assert!(err.path().is_none());
    }

    #[rstest]
    #[case::null(json!(null), "null")]
    #[case::boolean(json!(true), "a boolean")]
    #[case::number(json!(1.5), "a number")]
    #[case::string(json!("x"), "a string")]
    #[case::array(json!([]), "an array")]
    #[case::object(json!({}), "an object")]
    fn test_kind_of(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(kind_of(&value), expected);
    }

    #[rstest]
    #[case::plain("", "docs", "/docs")]
    #[case::index("/0", "1", "/0/1")]
    #[case::slash("", "a/b", "/a~1b")]
    #[case::tilde("/0", "~home", "/0/~0home")]
    fn test_push_pointer(#[case] base: &str, #[case] token: &str, #[case] expected: &str) {
        assert_eq!(push_pointer(base, token), expected);
    }
}
