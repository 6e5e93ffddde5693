use pathfold::{ActionMeta, Error, path_from_meta};
use serde_json::json;

#[test]
fn test_store_as_wins() {
    let meta = ActionMeta {
        collection: Some("ignored".to_string()),
        store_as: Some("x".to_string()),
        ..Default::default()
    };
    assert_eq!(path_from_meta(Some(&meta)).unwrap(), "x");
}

#[test]
fn test_store_as_ignores_subcollections() {
    let meta = ActionMeta::store_as("recent").with_subcollection(ActionMeta::default());
    assert_eq!(path_from_meta(Some(&meta)).unwrap(), "recent");
}

#[test]
fn test_store_as_verbatim() {
    let meta = ActionMeta::store_as("a/b.c");
    assert_eq!(meta.path().unwrap(), "a/b.c");
}

#[test]
fn test_collection_only() {
    let meta = ActionMeta::collection("c");
    assert_eq!(path_from_meta(Some(&meta)).unwrap(), "c");
}

#[test]
fn test_collection_and_doc() {
    let meta = ActionMeta::collection("c").with_doc("d");
    assert_eq!(path_from_meta(Some(&meta)).unwrap(), "c.d");
}

#[test]
fn test_subcollections_flatten_in_order() {
    let meta = ActionMeta::collection("c")
        .with_doc("d")
        .with_subcollection(ActionMeta::collection("s1"))
        .with_subcollection(ActionMeta::collection("s2").with_doc("d2"));
    assert_eq!(path_from_meta(Some(&meta)).unwrap(), "c.d.s1.s2.d2");
}

#[test]
fn test_nested_subcollections() {
    let meta = ActionMeta::collection("a").with_subcollection(
        ActionMeta::collection("b").with_subcollection(ActionMeta::collection("c").with_doc("d")),
    );
    assert_eq!(meta.path().unwrap(), "a.b.c.d");
}

#[test]
fn test_subcollection_store_as() {
    let meta = ActionMeta::collection("c")
        .with_doc("d")
        .with_subcollection(ActionMeta::store_as("alias"));
    assert_eq!(meta.path().unwrap(), "c.d.alias");
}

#[test]
fn test_missing_meta() {
    assert_eq!(path_from_meta(None), Err(Error::MissingMeta));
}

#[test]
fn test_missing_collection() {
    let meta = ActionMeta::default();
    assert_eq!(path_from_meta(Some(&meta)), Err(Error::MissingCollection));
}

#[test]
fn test_empty_strings_count_as_absent() {
    let meta = ActionMeta {
        collection: Some(String::new()),
        store_as: Some(String::new()),
        ..Default::default()
    };
    assert_eq!(meta.path(), Err(Error::MissingCollection));

    let meta = ActionMeta::collection("c").with_doc("");
    assert_eq!(meta.path().unwrap(), "c");
}

#[test]
fn test_malformed_subcollection_propagates() {
    let meta = ActionMeta::collection("c")
        .with_doc("d")
        .with_subcollection(ActionMeta::collection("ok"))
        .with_subcollection(ActionMeta::default().with_doc("orphan"));
    assert_eq!(meta.path(), Err(Error::MissingCollection));
}

#[test]
fn test_deserialize_camel_case() {
    let meta: ActionMeta = serde_json::from_value(json!({
        "collection": "cities",
        "doc": "SF",
        "subcollections": [{"collection": "zipcodes", "doc": "94103"}]
    }))
    .unwrap();
    assert_eq!(meta.path().unwrap(), "cities.SF.zipcodes.94103");

    let meta: ActionMeta = serde_json::from_value(json!({"storeAs": "mine"})).unwrap();
    assert_eq!(meta.store_as.as_deref(), Some("mine"));
}

#[test]
fn test_serialize_omits_absent_fields() {
    let value = serde_json::to_value(ActionMeta::collection("cities")).unwrap();
    assert_eq!(value, json!({"collection": "cities"}));

    let value = serde_json::to_value(ActionMeta::store_as("k")).unwrap();
    assert_eq!(value, json!({"storeAs": "k"}));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        Error::MissingMeta.to_string(),
        "action meta is required to build path for reducers"
    );
    assert_eq!(
        Error::MissingCollection.to_string(),
        "collection is required to construct reducer path"
    );
}
