//! Deciding what survives when a branch of state is reset or overwritten.

use crate::error::{Error, Result};
use crate::merge::update_object;
use crate::path::dot_segments;
use serde::Deserialize;
use serde_json::{Map, Value};

/// A caller-supplied merge of prior state and the candidate next state.
///
/// # Examples
///
/// ```
/// use pathfold::PreserveFn;
/// use serde_json::{json, Value};
///
/// fn keep_prior(prior: &Value, _next: Option<&Value>) -> Value {
///     prior.clone()
/// }
///
/// let policy: PreserveFn = keep_prior;
/// assert_eq!(policy(&json!({"a": 1}), None), json!({"a": 1}));
/// ```
pub type PreserveFn = fn(&Value, Option<&Value>) -> Value;

/// How much of the prior state a state-replacing action keeps.
///
/// Hosts usually read this from JSON configuration, where `true`, `false`
/// and arrays of field names are accepted:
///
/// ```
/// use pathfold::PreserveSetting;
///
/// let setting: PreserveSetting = serde_json::from_str(r#"["profile", "auth.uid"]"#).unwrap();
/// assert!(matches!(setting, PreserveSetting::Fields(ref f) if f.len() == 2));
/// assert!(serde_json::from_str::<PreserveSetting>("42").is_err());
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "Value")]
pub enum PreserveSetting {
    /// `true` keeps the prior state under the next one; `false` keeps nothing.
    Bool(bool),
    /// Keep only these fields of the prior state. Dot-paths reach nested fields.
    Fields(Vec<String>),
    /// Delegate entirely to a function.
    With(PreserveFn),
}

impl TryFrom<&Value> for PreserveSetting {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::Bool(flag) => Ok(PreserveSetting::Bool(*flag)),
            Value::Array(entries) => entries
                .iter()
                .map(|entry| entry.as_str().map(str::to_string))
                .collect::<Option<Vec<_>>>()
                .map(PreserveSetting::Fields)
                .ok_or_else(|| invalid(value)),
            _ => Err(invalid(value)),
        }
    }
}

impl TryFrom<Value> for PreserveSetting {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        PreserveSetting::try_from(&value)
    }
}

impl From<bool> for PreserveSetting {
    fn from(flag: bool) -> Self {
        PreserveSetting::Bool(flag)
    }
}

impl From<PreserveFn> for PreserveSetting {
    fn from(f: PreserveFn) -> Self {
        PreserveSetting::With(f)
    }
}

impl<S: Into<String>> FromIterator<S> for PreserveSetting {
    fn from_iter<I: IntoIterator<Item = S>>(fields: I) -> Self {
        PreserveSetting::Fields(fields.into_iter().map(Into::into).collect())
    }
}

fn invalid(value: &Value) -> Error {
    Error::InvalidPreserveSetting {
        found: value.to_string(),
    }
}

/// Compute the state that results from resetting `prior`, keeping what
/// `setting` asks for.
///
/// - [`PreserveSetting::With`] returns `f(prior, next)` untouched.
/// - `Bool(true)` merges `next` over `prior` when both are objects, returns
///   `next` when either is not, and returns `prior` when `next` is absent.
/// - `Bool(false)` keeps nothing: `next`, or an empty object.
/// - `Fields` returns a new object with only the listed fields of `prior`
///   that exist. Missing fields are omitted, not set to null. Dot-paths
///   through arrays keep the array, with unpicked elements set to null.
///
/// # Examples
///
/// ```
/// use pathfold::{preserve_values_from_state, PreserveSetting};
/// use serde_json::json;
///
/// let prior = json!({"a": 1, "b": 2});
/// let only_a = PreserveSetting::Fields(vec!["a".to_string()]);
/// let kept = preserve_values_from_state(&prior, &only_a, None);
/// assert_eq!(kept, json!({"a": 1}));
///
/// let merged = preserve_values_from_state(&prior, &PreserveSetting::Bool(true), Some(&json!({"b": 3})));
/// assert_eq!(merged, json!({"a": 1, "b": 3}));
/// ```
pub fn preserve_values_from_state(
    prior: &Value,
    setting: &PreserveSetting,
    next: Option<&Value>,
) -> Value {
    match setting {
        PreserveSetting::With(f) => {
            log::debug!("preserving state through caller function");
            f(prior, next)
        }
        PreserveSetting::Bool(true) => {
            log::debug!("preserving all prior state");
            match next {
                Some(next) if prior.is_object() && next.is_object() => update_object(prior, next),
                Some(next) => next.clone(),
                None => prior.clone(),
            }
        }
        PreserveSetting::Bool(false) => {
            log::debug!("preserving no prior state");
            next.cloned().unwrap_or_else(|| Value::Object(Map::new()))
        }
        PreserveSetting::Fields(fields) => {
            log::debug!("preserving fields {fields:?}");
            pick(prior, fields)
        }
    }
}

/// Like [`preserve_values_from_state`], for a setting that is still raw JSON.
///
/// # Errors
///
/// Returns [`Error::InvalidPreserveSetting`] unless `setting` is a boolean
/// or an array of strings.
///
/// # Examples
///
/// ```
/// use pathfold::{preserve_values_from_json, Error};
/// use serde_json::json;
///
/// let err = preserve_values_from_json(&json!({}), &json!(42), None).unwrap_err();
/// assert!(matches!(err, Error::InvalidPreserveSetting { .. }));
/// ```
pub fn preserve_values_from_json(
    prior: &Value,
    setting: &Value,
    next: Option<&Value>,
) -> Result<Value> {
    let setting = PreserveSetting::try_from(setting)?;
    Ok(preserve_values_from_state(prior, &setting, next))
}

fn pick(prior: &Value, fields: &[String]) -> Value {
    let mut picked = Value::Object(Map::new());
    if !prior.is_object() {
        return picked;
    }
    for field in fields {
        if let Some(value) = prior.get(field.as_str()) {
            if let Value::Object(out) = &mut picked {
                out.insert(field.clone(), value.clone());
            }
            continue;
        }
        let segments = dot_segments(field);
        if segments.len() > 1 {
            if let Some(merged) = pick_path(prior, &segments, &picked) {
                picked = merged;
            }
        }
    }
    picked
}

/// Copy the value at `segments` from `source` into `picked`, mirroring the
/// containers of `source` along the way. `None` if the path does not resolve.
fn pick_path(source: &Value, segments: &[&str], picked: &Value) -> Option<Value> {
    let Some((head, rest)) = segments.split_first() else {
        return Some(source.clone());
    };

    match source {
        Value::Object(fields) => {
            let child = fields.get(*head)?;
            let existing = picked.get(*head).unwrap_or(&Value::Null);
            let value = pick_path(child, rest, existing)?;
            let mut out = match picked {
                Value::Object(out) => out.clone(),
                _ => Map::new(),
            };
            out.insert(head.to_string(), value);
            Some(Value::Object(out))
        }
        Value::Array(items) => {
            let index = head.parse::<usize>().ok()?;
            let child = items.get(index)?;
            let existing = picked.get(index).unwrap_or(&Value::Null);
            let value = pick_path(child, rest, existing)?;
            let mut out = match picked {
                Value::Array(out) if out.len() == items.len() => out.clone(),
                _ => vec![Value::Null; items.len()],
            };
            out[index] = value;
            Some(Value::Array(out))
        }
        _ => None,
    }
}
