use crate::error::Result;
use crate::meta::{ActionMeta, path_from_meta};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A change dispatched to the reducers.
///
/// The `payload` field is intentionally untyped ([`serde_json::Value`]).
/// Reducers give it meaning. `meta` says where in the state tree the
/// payload belongs.
///
/// # Examples
///
/// ```
/// use pathfold::{Action, ActionMeta};
/// use serde_json::json;
///
/// let action = Action::new("DOCUMENT_ADDED")
///     .with_payload(json!({"name": "San Francisco"}))
///     .with_meta(ActionMeta::collection("cities").with_doc("SF"));
/// assert_eq!(action.action_type, "DOCUMENT_ADDED");
/// assert_eq!(action.path().unwrap(), "cities.SF");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[non_exhaustive]
pub struct Action {
    /// The action type identifier (e.g. `"LISTENER_RESPONSE"`).
    ///
    /// Serialized as `"type"` in JSON.
    #[serde(rename = "type")]
    pub action_type: String,

    /// Arbitrary JSON payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,

    /// Location of the affected data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<ActionMeta>,
}

impl Action {
    /// Create an action with no payload and no metadata.
    pub fn new(action_type: &str) -> Self {
        Action {
            action_type: action_type.to_string(),
            payload: None,
            meta: None,
        }
    }

    /// Attach a payload.
    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Attach metadata.
    pub fn with_meta(mut self, meta: ActionMeta) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Dot-path of the state this action affects.
    ///
    /// # Errors
    ///
    /// Same as [`path_from_meta`](crate::path_from_meta).
    pub fn path(&self) -> Result<String> {
        path_from_meta(self.meta.as_ref())
    }
}
