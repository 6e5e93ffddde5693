//! Action metadata and the path it resolves to in the state tree.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Where an action's data lives in the state tree.
///
/// Serialized in the camelCase shape the dispatch layer produces:
///
/// ```text
/// { "collection": "cities", "doc": "SF",
///   "subcollections": [{ "collection": "zipcodes" }],
///   "storeAs": "sfZips" }
/// ```
///
/// Empty strings are treated the same as absent fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionMeta {
    /// Top-level collection name. Required unless `store_as` is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection: Option<String>,

    /// Document id within the collection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,

    /// Nested collections below `doc`, outermost first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subcollections: Vec<ActionMeta>,

    /// Explicit tree key overriding the collection/doc hierarchy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_as: Option<String>,
}

impl ActionMeta {
    /// Metadata addressing a whole collection.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathfold::ActionMeta;
    ///
    /// let meta = ActionMeta::collection("cities").with_doc("SF");
    /// assert_eq!(meta.path().unwrap(), "cities.SF");
    /// ```
    pub fn collection(name: impl Into<String>) -> Self {
        ActionMeta {
            collection: Some(name.into()),
            ..Default::default()
        }
    }

    /// Metadata stored under an explicit key, outside the collection hierarchy.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathfold::ActionMeta;
    ///
    /// assert_eq!(ActionMeta::store_as("recent").path().unwrap(), "recent");
    /// ```
    pub fn store_as(key: impl Into<String>) -> Self {
        ActionMeta {
            store_as: Some(key.into()),
            ..Default::default()
        }
    }

    /// Set the document id.
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Append a nested subcollection.
    pub fn with_subcollection(mut self, sub: ActionMeta) -> Self {
        self.subcollections.push(sub);
        self
    }

    /// Resolve this metadata to a dot-path. See [`path_from_meta`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingCollection`] if this entry, or any nested
    /// subcollection, has neither `store_as` nor `collection`.
    pub fn path(&self) -> Result<String> {
        let path = resolve(self)?;
        log::trace!("resolved meta path '{path}'");
        Ok(path)
    }
}

/// Derive the dot-path of the state tree an action's data belongs to.
///
/// A non-empty `store_as` is returned verbatim and everything else on that
/// entry is ignored. Otherwise the path is `collection`, then `doc` if set,
/// then every subcollection resolved by the same rules, flattened in order.
///
/// # Errors
///
/// [`Error::MissingMeta`] if `meta` is `None`; [`Error::MissingCollection`]
/// if any entry lacks both `store_as` and `collection`. No partial path is
/// returned when a nested entry is malformed.
///
/// # Examples
///
/// ```
/// use pathfold::{path_from_meta, ActionMeta};
///
/// let meta = ActionMeta::collection("cities")
///     .with_doc("SF")
///     .with_subcollection(ActionMeta::collection("zipcodes").with_doc("94103"));
/// assert_eq!(path_from_meta(Some(&meta)).unwrap(), "cities.SF.zipcodes.94103");
/// ```
pub fn path_from_meta(meta: Option<&ActionMeta>) -> Result<String> {
    meta.ok_or(Error::MissingMeta)?.path()
}

fn resolve(meta: &ActionMeta) -> Result<String> {
    if let Some(key) = non_empty(&meta.store_as) {
        return Ok(key.to_string());
    }

    let collection = non_empty(&meta.collection).ok_or(Error::MissingCollection)?;
    let mut path = collection.to_string();
    if let Some(doc) = non_empty(&meta.doc) {
        path.push('.');
        path.push_str(doc);
    }

    if meta.subcollections.is_empty() {
        return Ok(path);
    }

    let nested = meta
        .subcollections
        .iter()
        .map(resolve)
        .collect::<Result<Vec<_>>>()?;
    path.push('.');
    path.push_str(&nested.join("."));
    Ok(path)
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}
