//! Merge-or-replace decision for an edited subtree.
//!
//! Objects merge key by key, recursively. Arrays and scalars always replace,
//! including arrays nested inside a merge: element positions carry no identity,
//! so two arrays are never combined.

use crate::node::{JsonObject, JsonValue};
use tracing::debug;

/// New value for a node given what is there now and what the user proposed.
///
/// Only an existing object receiving a proposed object is merged; every other
/// combination takes `proposed` as is.
pub fn resolve(existing: Option<&JsonValue>, proposed: JsonValue) -> JsonValue {
    match (existing, proposed) {
        (Some(JsonValue::Object(target)), JsonValue::Object(source)) => {
            debug!(keys = source.len(), "merging into existing object");
            JsonValue::Object(deep_merge(target.clone(), source))
        }
        (_, proposed) => {
            debug!("replacing value");
            proposed
        }
    }
}

/// Right-biased recursive merge of `source` into `target`.
///
/// Keys only in `target` are kept, keys only in `source` are added. Where both
/// sides hold an object the two are merged; otherwise the source value wins.
pub fn deep_merge(mut target: JsonObject, source: JsonObject) -> JsonObject {
    for (key, incoming) in source {
        let merged = match (target.get_mut(&key), incoming) {
            (Some(JsonValue::Object(existing)), JsonValue::Object(nested)) => {
                let existing = std::mem::take(existing);
                JsonValue::Object(deep_merge(existing, nested))
            }
            (_, incoming) => incoming,
        };
        target.insert(key, merged);
    }
    target
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(v: JsonValue) -> JsonObject {
        match v {
            JsonValue::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn empty_source_is_identity() {
        let a = obj(json!({"a": 1, "b": {"c": [1, 2]}}));
        assert_eq!(deep_merge(a.clone(), JsonObject::new()), a);
    }

    #[test]
    fn scalars_are_right_biased() {
        let out = deep_merge(obj(json!({"a": 1})), obj(json!({"a": 2})));
        assert_eq!(JsonValue::Object(out), json!({"a": 2}));
    }

    #[test]
    fn arrays_replace() {
        let out = deep_merge(obj(json!({"a": [1, 2]})), obj(json!({"a": [3]})));
        assert_eq!(JsonValue::Object(out), json!({"a": [3]}));
    }

    #[test]
    fn arrays_of_objects_still_replace() {
        let out = deep_merge(
            obj(json!({"a": [{"x": 1, "y": 2}]})),
            obj(json!({"a": [{"x": 9}]})),
        );
        assert_eq!(JsonValue::Object(out), json!({"a": [{"x": 9}]}));
    }

    #[test]
    fn merged_key_keeps_its_position() {
        let out = deep_merge(
            obj(json!({"first": {"k": 1}, "second": 2})),
            obj(json!({"first": {"j": 2}})),
        );
        let keys: Vec<&str> = out.keys().map(String::as_str).collect();
        assert_eq!(keys, ["first", "second"]);
    }

    #[test]
    fn resolve_replaces_when_existing_missing() {
        assert_eq!(resolve(None, json!({"a": 1})), json!({"a": 1}));
    }
}
