//! Non-mutating update primitives.
//!
//! Every function borrows its inputs and returns a newly allocated value.

use serde_json::{Map, Value};
use std::rc::Rc;
use std::sync::Arc;

/// Shallow-merge `new_values` over `old`.
///
/// The result has every key of `old`, overwritten or extended by the keys
/// of `new_values`. Arguments that are not objects contribute no keys.
///
/// # Examples
///
/// ```
/// use pathfold::update_object;
/// use serde_json::json;
///
/// let old = json!({"x": 1, "y": 2});
/// let merged = update_object(&old, &json!({"y": 3, "z": 4}));
/// assert_eq!(merged, json!({"x": 1, "y": 3, "z": 4}));
/// assert_eq!(old, json!({"x": 1, "y": 2}));
/// ```
pub fn update_object(old: &Value, new_values: &Value) -> Value {
    let mut merged = Map::new();
    for source in [old, new_values] {
        if let Value::Object(fields) = source {
            for (key, value) in fields {
                merged.insert(key.clone(), value.clone());
            }
        }
    }
    Value::Object(merged)
}

/// A record with a stable identifier used for targeted updates.
pub trait Identified {
    /// The identifier type.
    type Id: PartialEq + ?Sized;

    /// The identifier, or `None` if the record has none.
    fn id(&self) -> Option<&Self::Id>;
}

/// JSON records are identified by their `"id"` field.
impl Identified for Value {
    type Id = Value;

    fn id(&self) -> Option<&Value> {
        self.get("id")
    }
}

impl<T: Identified + ?Sized> Identified for Rc<T> {
    type Id = T::Id;

    fn id(&self) -> Option<&T::Id> {
        (**self).id()
    }
}

impl<T: Identified + ?Sized> Identified for Arc<T> {
    type Id = T::Id;

    fn id(&self) -> Option<&T::Id> {
        (**self).id()
    }
}

/// Replace the item(s) whose id equals `id` with `update(item)`.
///
/// Length and order are preserved. Every other item is cloned through
/// unchanged, so items shared behind [`Rc`] or [`Arc`] keep their identity.
/// Items without an id never match. A miss returns an equal copy.
///
/// # Examples
///
/// ```
/// use pathfold::update_item_in_array;
/// use serde_json::json;
///
/// let items = vec![json!({"id": 1, "v": "a"}), json!({"id": 2, "v": "b"})];
/// let updated = update_item_in_array(&items, &json!(2), |item| {
///     pathfold::update_object(item, &json!({"v": "c"}))
/// });
/// assert_eq!(updated, vec![json!({"id": 1, "v": "a"}), json!({"id": 2, "v": "c"})]);
/// ```
pub fn update_item_in_array<T, F>(items: &[T], id: &T::Id, mut update: F) -> Vec<T>
where
    T: Identified + Clone,
    F: FnMut(&T) -> T,
{
    items
        .iter()
        .map(|item| match item.id() {
            Some(item_id) if item_id == id => update(item),
            _ => item.clone(),
        })
        .collect()
}
