//! Minimal document cache: a root reducer mirroring document changes into a tree.

use pathfold::tree::{get_in, remove_in, set_in};
use pathfold::{
    Action, ActionMeta, PreserveSetting, Reducer, ReducerMap, combine_reducers,
    preserve_values_from_state, update_object,
};
use serde_json::{Value, json};

fn data_reducer(state: Option<&Value>, action: &Action) -> Value {
    let state = state.cloned().unwrap_or_else(|| json!({}));
    let path = match action.path() {
        Ok(path) => path,
        Err(_) => return state,
    };
    let payload = action.payload.clone().unwrap_or(Value::Null);
    match action.action_type.as_str() {
        "DOCUMENT_ADDED" => set_in(&state, &path, payload),
        "DOCUMENT_MODIFIED" => {
            let current = get_in(&state, &path).cloned().unwrap_or(Value::Null);
            set_in(&state, &path, update_object(&current, &payload))
        }
        "DOCUMENT_REMOVED" => remove_in(&state, &path),
        "CLEAR_DATA" => {
            let preserve = PreserveSetting::Fields(vec!["settings".to_string()]);
            preserve_values_from_state(&state, &preserve, None)
        }
        _ => state,
    }
}

fn status_reducer(_state: Option<&Value>, action: &Action) -> Value {
    json!({"last": action.action_type})
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let root = combine_reducers(
        ReducerMap::new()
            .reducer("data", data_reducer)
            .reducer("status", status_reducer),
    );

    let sf = ActionMeta::collection("cities").with_doc("SF");
    let zip = sf
        .clone()
        .with_subcollection(ActionMeta::collection("zipcodes").with_doc("94103"));

    let actions = [
        Action::new("DOCUMENT_ADDED")
            .with_payload(json!({"theme": "dark"}))
            .with_meta(ActionMeta::store_as("settings")),
        Action::new("DOCUMENT_ADDED")
            .with_payload(json!({"name": "San Francisco"}))
            .with_meta(sf.clone()),
        Action::new("DOCUMENT_MODIFIED")
            .with_payload(json!({"population": 870000}))
            .with_meta(sf),
        Action::new("DOCUMENT_ADDED")
            .with_payload(json!({"district": "SoMa"}))
            .with_meta(zip),
    ];

    let mut state = root.reduce(None, &Action::new("INIT"));
    for action in &actions {
        println!("{} -> {}", action.action_type, action.path()?);
        state = root.reduce(Some(&state), action);
    }
    println!("\nState:\n{}", serde_json::to_string_pretty(&state)?);

    let clear = Action::new("CLEAR_DATA").with_meta(ActionMeta::store_as("all"));
    state = root.reduce(Some(&state), &clear);
    println!("\nAfter clear:\n{}", serde_json::to_string_pretty(&state)?);

    Ok(())
}
