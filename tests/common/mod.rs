#![allow(dead_code)]

use pathfold::tree::{get_in, remove_in, set_in};
use pathfold::{
    Action, ActionMeta, PreserveSetting, ReduceFn, ReducerMap, preserve_values_from_state,
    update_item_in_array, update_object,
};
use serde_json::{Value, json};

pub fn city_meta(doc: &str) -> ActionMeta {
    ActionMeta::collection("cities").with_doc(doc)
}

pub fn doc_added(doc: &str, data: Value) -> Action {
    Action::new("DOCUMENT_ADDED")
        .with_payload(data)
        .with_meta(city_meta(doc))
}

/// Branch reducers of the document cache, in declaration order.
pub const CACHE_REDUCERS: [(&str, ReduceFn); 3] = [
    ("data", data_reducer),
    ("listeners", listeners_reducer),
    ("status", last_type_reducer),
];

pub fn cache_reducer_map() -> ReducerMap {
    CACHE_REDUCERS
        .into_iter()
        .fold(ReducerMap::new(), |map, (key, reducer)| map.reducer(key, reducer))
}

pub fn counter_reducer(state: Option<&Value>, _action: &Action) -> Value {
    json!(state.and_then(Value::as_u64).unwrap_or(0) + 1)
}

pub fn last_type_reducer(_state: Option<&Value>, action: &Action) -> Value {
    json!(action.action_type)
}

/// A keyed document store: documents live at the path their meta resolves to.
pub fn data_reducer(state: Option<&Value>, action: &Action) -> Value {
    let state = state.cloned().unwrap_or_else(|| json!({}));
    let Ok(path) = action.path() else {
        return state;
    };
    match action.action_type.as_str() {
        "DOCUMENT_ADDED" => {
            let payload = action.payload.clone().unwrap_or(Value::Null);
            set_in(&state, &path, payload)
        }
        "DOCUMENT_MODIFIED" => {
            let current = get_in(&state, &path).cloned().unwrap_or(Value::Null);
            let payload = action.payload.clone().unwrap_or(Value::Null);
            set_in(&state, &path, update_object(&current, &payload))
        }
        "DOCUMENT_REMOVED" => remove_in(&state, &path),
        "CLEAR_DATA" => {
            preserve_values_from_state(&state, &PreserveSetting::Fields(vec!["pinned".into()]), None)
        }
        _ => state,
    }
}

/// An ordered list of listeners, updated by id.
pub fn listeners_reducer(state: Option<&Value>, action: &Action) -> Value {
    let items = state
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    match action.action_type.as_str() {
        "SET_LISTENER" => {
            let mut items = items;
            if let Some(payload) = &action.payload {
                items.push(payload.clone());
            }
            Value::Array(items)
        }
        "LISTENER_ERROR" => {
            let id = action
                .payload
                .as_ref()
                .and_then(|p| p.get("id"))
                .cloned()
                .unwrap_or(Value::Null);
            Value::Array(update_item_in_array(&items, &id, |item| {
                update_object(item, &json!({"status": "error"}))
            }))
        }
        _ => Value::Array(items),
    }
}
