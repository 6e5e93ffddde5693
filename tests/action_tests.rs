mod common;

use common::{city_meta, doc_added};
use pathfold::{Action, ActionMeta, Error};
use serde_json::json;

#[test]
fn test_round_trip() {
    let action = doc_added("SF", json!({"name": "San Francisco"}));
    let json = serde_json::to_string(&action).unwrap();
    let deserialized: Action = serde_json::from_str(&json).unwrap();
    assert_eq!(action, deserialized);
}

#[test]
fn test_type_field_renamed() {
    let value = serde_json::to_value(Action::new("CLEAR_DATA")).unwrap();
    assert_eq!(value, json!({"type": "CLEAR_DATA"}));
}

#[test]
fn test_deserialize_dispatch_shape() {
    let action: Action = serde_json::from_value(json!({
        "type": "LISTENER_RESPONSE",
        "payload": {"data": {"SF": {"name": "San Francisco"}}},
        "meta": {"collection": "cities", "storeAs": "westCoast"}
    }))
    .unwrap();
    assert_eq!(action.action_type, "LISTENER_RESPONSE");
    assert_eq!(action.payload.as_ref().unwrap()["data"]["SF"]["name"], "San Francisco");
    assert_eq!(action.path().unwrap(), "westCoast");
}

#[test]
fn test_missing_optional_fields() {
    let action: Action = serde_json::from_value(json!({"type": "INIT"})).unwrap();
    assert_eq!(action.payload, None);
    assert_eq!(action.meta, None);
}

#[test]
fn test_path_without_meta() {
    assert_eq!(Action::new("INIT").path(), Err(Error::MissingMeta));
}

#[test]
fn test_path_with_meta() {
    let action = Action::new("DOCUMENT_REMOVED").with_meta(
        city_meta("SF").with_subcollection(ActionMeta::collection("zipcodes").with_doc("94103")),
    );
    assert_eq!(action.path().unwrap(), "cities.SF.zipcodes.94103");
}
