//! Building typed forests from JSON.
//!
//! A forest is a JSON array. Strings become [`Node::Leaf`], objects become
//! [`Node::Branch`] (each value must itself be an array), and everything else
//! becomes [`Node::Other`].

use serde_json::Value;
use tracing::debug;

use crate::error::push_pointer;
use crate::{Branch, Forest, Node, TreeError};

/// Parses JSON text into a forest.
///
/// # Errors
///
/// Returns [`TreeError::Json`] for malformed JSON and
/// [`TreeError::InvalidStructure`] when the document is not a forest.
pub fn forest_from_str(json: &str) -> Result<Forest, TreeError> {
    let value: Value = serde_json::from_str(json)?;
    forest_from_value(&value)
}

/// Converts an untyped JSON value into a forest.
///
/// Object key order is kept as-is.
///
/// # Errors
///
/// Returns [`TreeError::InvalidStructure`] for the first position that needs
/// an array and holds something else.
///
/// # Example
///
/// ```rust
/// use leafwalk_tree::{Node, parse::forest_from_value};
/// use serde_json::json;
///
/// let forest = forest_from_value(&json!(["a", {"d": ["b"]}, 3])).unwrap();
///
/// assert_eq!(forest[0], Node::leaf("a"));
/// assert!(forest[1].is_branch());
/// assert_eq!(forest[2], Node::other(3));
/// ```
pub fn forest_from_value(value: &Value) -> Result<Forest, TreeError> {
    let forest = parse_forest(value, "")?;
    debug!("Parsed forest with {} top-level nodes", forest.len());
    Ok(forest)
}

fn parse_forest(value: &Value, path: &str) -> Result<Forest, TreeError> {
    let Value::Array(elements) = value else {
        return Err(TreeError::expected_forest(path, value));
    };

    elements
        .iter()
        .enumerate()
        .map(|(index, element)| parse_node(element, &push_pointer(path, &index.to_string())))
        .collect()
}

fn parse_node(value: &Value, path: &str) -> Result<Node, TreeError> {
    match value {
        Value::String(leaf) => Ok(Node::Leaf(leaf.clone())),
        Value::Object(entries) => entries
            .iter()
            .map(|(key, forest)| {
                parse_forest(forest, &push_pointer(path, key)).map(|forest| (key.clone(), forest))
            })
            .collect::<Result<Branch, TreeError>>()
            .map(Node::Branch),
        other => Ok(Node::Other(other.clone())),
    }
}
