//! Walking untyped JSON.

use serde_json::Value;
use tracing::debug;

use crate::TreeError;
use crate::error::push_pointer;

/// Calls `visit` on every string leaf of an untyped JSON forest.
///
/// Follows the same rules as [`walk`](crate::walk): strings are visited,
/// objects are descended into value by value, anything else is skipped. The
/// value itself, and every object value, must be an array.
///
/// Structure is checked lazily. Leaves reached before a malformed node have
/// already been visited when the error comes back.
///
/// # Errors
///
/// Returns [`TreeError::InvalidStructure`] at the first position that needs
/// an array and holds something else.
///
/// # Example
///
/// ```rust
/// use leafwalk_tree::{TreeError, walk_value};
/// use serde_json::json;
///
/// let mut seen = Vec::new();
/// let result = walk_value(&json!(["a", {"docs": "oops"}, "b"]), |leaf| {
///     seen.push(leaf.to_string())
/// });
///
/// assert_eq!(seen, ["a"]);
/// assert!(matches!(result, Err(TreeError::InvalidStructure { ref path, .. }) if path == "/1/docs"));
/// ```
pub fn walk_value<F>(value: &Value, mut visit: F) -> Result<(), TreeError>
where
    F: FnMut(&str),
{
    walk_array(value, "", &mut visit)
}

fn walk_array<F>(value: &Value, path: &str, visit: &mut F) -> Result<(), TreeError>
where
    F: FnMut(&str),
{
    let Value::Array(elements) = value else {
        let err = TreeError::expected_forest(path, value);
        debug!("walk_value: {}", err);
        return Err(err);
    };

    for (index, element) in elements.iter().enumerate() {
        match element {
            Value::String(leaf) => visit(leaf.as_str()),
            Value::Object(entries) => {
                let element_path = push_pointer(path, &index.to_string());
                for (key, forest) in entries {
                    walk_array(forest, &push_pointer(&element_path, key), visit)?;
                }
            }
            _ => {}
        }
    }

    Ok(())
}
