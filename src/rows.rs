use crate::node::{JsonObject, JsonValue, Row};

/// Editable value for a node built from its rows.
///
/// A single unkeyed row is the node itself (a bare scalar). Otherwise only keyed
/// scalar rows are collected; nested containers appear as their own nodes in the
/// graph and are left out of the flat form.
pub fn normalize(rows: &[Row]) -> JsonValue {
    if let [only] = rows {
        if only.key.is_none() {
            return only.value.clone();
        }
    }

    let fields: JsonObject = rows
        .iter()
        .filter(|row| !row.kind.is_container())
        .filter_map(|row| Some((row.key.clone()?, row.value.clone())))
        .collect();
    JsonValue::Object(fields)
}

/// Text shown in the node panel: the normalized value as 2-space indented JSON.
pub fn to_text(rows: &[Row]) -> String {
    format!("{:#}", normalize(rows))
}
