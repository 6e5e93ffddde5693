//! Dot-path access into a JSON state tree.
//!
//! Writes never touch the input tree: they rebuild the objects along the
//! path and clone everything beside it.

use crate::path::dot_segments;
use serde_json::{Map, Value};

/// Look up the value at a dot-path.
///
/// Numeric segments index into arrays. An empty path returns the root.
///
/// # Examples
///
/// ```
/// use pathfold::tree::get_in;
/// use serde_json::json;
///
/// let state = json!({"cities": {"SF": {"tags": ["fog", "hills"]}}});
/// assert_eq!(get_in(&state, "cities.SF.tags.1"), Some(&json!("hills")));
/// assert_eq!(get_in(&state, "cities.LA"), None);
/// ```
#[must_use]
pub fn get_in<'a>(state: &'a Value, path: &str) -> Option<&'a Value> {
    dot_segments(path)
        .into_iter()
        .try_fold(state, |node, segment| match node {
            Value::Object(fields) => fields.get(segment),
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?),
            _ => None,
        })
}

/// Return a new tree with `value` stored at a dot-path.
///
/// Numeric segments address array elements: an in-range index replaces that
/// element and an index equal to the length appends. Missing intermediate
/// objects are created; any other intermediate is replaced by an object.
/// An empty path returns `value` itself.
///
/// # Examples
///
/// ```
/// use pathfold::tree::set_in;
/// use serde_json::json;
///
/// let state = json!({"cities": {"LA": {"name": "Los Angeles"}}});
/// let next = set_in(&state, "cities.SF", json!({"name": "San Francisco"}));
/// assert_eq!(next["cities"]["SF"]["name"], "San Francisco");
/// assert_eq!(next["cities"]["LA"]["name"], "Los Angeles");
/// assert!(state["cities"].get("SF").is_none());
/// ```
pub fn set_in(state: &Value, path: &str, value: Value) -> Value {
    let segments = dot_segments(path);
    log::trace!("setting state at '{}'", segments.join("."));
    set_segments(Some(state), &segments, value)
}

/// Return a new tree without the value at a dot-path.
///
/// Paths that do not resolve, including the empty path, yield an equal copy.
pub fn remove_in(state: &Value, path: &str) -> Value {
    let segments = dot_segments(path);
    log::trace!("removing state at '{}'", segments.join("."));
    remove_segments(state, &segments)
}

fn set_segments(node: Option<&Value>, segments: &[&str], value: Value) -> Value {
    let Some((head, rest)) = segments.split_first() else {
        return value;
    };

    if let Some(Value::Array(items)) = node {
        if let Some(index) = head.parse::<usize>().ok().filter(|i| *i <= items.len()) {
            let child = set_segments(items.get(index), rest, value);
            let mut rebuilt = items.clone();
            if index == items.len() {
                rebuilt.push(child);
            } else {
                rebuilt[index] = child;
            }
            return Value::Array(rebuilt);
        }
    }

    let fields = match node {
        Some(Value::Object(fields)) => Some(fields),
        _ => None,
    };
    let child = set_segments(fields.and_then(|f| f.get(*head)), rest, value);

    let mut rebuilt = Map::new();
    if let Some(fields) = fields {
        for (key, existing) in fields {
            if key != head {
                rebuilt.insert(key.clone(), existing.clone());
            }
        }
    }
    rebuilt.insert(head.to_string(), child);
    Value::Object(rebuilt)
}

fn remove_segments(node: &Value, segments: &[&str]) -> Value {
    let (Value::Object(fields), Some((head, rest))) = (node, segments.split_first()) else {
        return node.clone();
    };

    let mut rebuilt = Map::new();
    for (key, existing) in fields {
        if key != head {
            rebuilt.insert(key.clone(), existing.clone());
        } else if !rest.is_empty() {
            rebuilt.insert(key.clone(), remove_segments(existing, rest));
        }
    }
    Value::Object(rebuilt)
}
