use nodedit::tree::{get, set};
use nodedit::{EditError, Path, path};
use serde_json::json;

#[test]
fn get_missing_key_and_index() {
    let doc = json!({"a": {"b": [10, 20]}});
    assert_eq!(get(&doc, &path!("a", "c")), None);
    assert_eq!(get(&doc, &path!("a", "b", 2)), None);
    assert_eq!(get(&doc, &path!("a", "b", 1)), Some(&json!(20)));
}

#[test]
fn get_through_scalar_or_null_is_none() {
    let doc = json!({"a": 1, "n": null});
    assert_eq!(get(&doc, &path!("a", "b")), None);
    assert_eq!(get(&doc, &path!("n", 0)), None);
}

#[test]
fn set_root_replaces_document() -> Result<(), Box<dyn std::error::Error>> {
    let doc = json!({"a": 1});
    assert_eq!(set(&doc, &Path::root(), json!([1, 2]))?, json!([1, 2]));
    assert_eq!(set(&doc, &Path::root(), json!(null))?, json!(null));
    Ok(())
}

#[test]
fn set_leaves_input_untouched() -> Result<(), Box<dyn std::error::Error>> {
    let doc = json!({"a": {"b": 1}, "sibling": [1, 2, 3]});
    let before = doc.clone();
    let out = set(&doc, &path!("a", "b"), json!(2))?;

    assert_eq!(doc, before);
    assert_eq!(out, json!({"a": {"b": 2}, "sibling": [1, 2, 3]}));
    Ok(())
}

#[test]
fn set_creates_missing_objects_and_arrays() -> Result<(), Box<dyn std::error::Error>> {
    let doc = json!({});
    let out = set(&doc, &path!("a", "list", 0, "name"), json!("x"))?;
    assert_eq!(out, json!({"a": {"list": [{"name": "x"}]}}));
    Ok(())
}

#[test]
fn set_index_at_len_appends() -> Result<(), Box<dyn std::error::Error>> {
    let doc = json!({"items": [1, 2]});
    let out = set(&doc, &path!("items", 2), json!(3))?;
    assert_eq!(out, json!({"items": [1, 2, 3]}));

    let out = set(&doc, &path!("items", 0), json!(9))?;
    assert_eq!(out, json!({"items": [9, 2]}));
    Ok(())
}

#[test]
fn set_index_past_len_is_rejected() {
    let doc = json!({"items": [1, 2]});
    let err = set(&doc, &path!("items", 5), json!(3)).unwrap_err();
    match err {
        EditError::IndexOutOfBounds { path, index, len } => {
            assert_eq!(path, path!("items"));
            assert_eq!(index, 5);
            assert_eq!(len, 2);
        }
        other => panic!("unexpected error: {other}"),
    }

    let err = set(&doc, &path!("items", 4, "deep"), json!(3)).unwrap_err();
    assert!(matches!(err, EditError::IndexOutOfBounds { index: 4, .. }));
}

#[test]
fn set_never_coerces_existing_values() {
    let doc = json!({"list": [1], "scalar": "s", "nothing": null});

    let err = set(&doc, &path!("list", "key"), json!(1)).unwrap_err();
    assert!(matches!(
        err,
        EditError::PathTypeMismatch { expected: "object", found: "array", .. }
    ));

    let err = set(&doc, &path!("scalar", 0), json!(1)).unwrap_err();
    assert!(matches!(
        err,
        EditError::PathTypeMismatch { expected: "array", found: "string", .. }
    ));

    let err = set(&doc, &path!("nothing", "x"), json!(1)).unwrap_err();
    assert!(matches!(
        err,
        EditError::PathTypeMismatch { expected: "object", found: "null", .. }
    ));
}

#[test]
fn set_on_scalar_root_is_mismatch() {
    let doc = json!(42);
    let err = set(&doc, &path!("a"), json!(1)).unwrap_err();
    match err {
        EditError::PathTypeMismatch { path, .. } => assert_eq!(path, Path::root()),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn write_then_read() -> Result<(), Box<dyn std::error::Error>> {
    let doc = json!({"customer": [{"name": "Ada", "tags": ["a"]}]});
    let p = path!("customer", 0, "tags");
    let out = set(&doc, &p, json!({"replaced": true}))?;
    assert_eq!(get(&out, &p), Some(&json!({"replaced": true})));
    Ok(())
}
