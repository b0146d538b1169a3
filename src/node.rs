use crate::path::Path;
use serde::{Deserialize, Serialize};

/// Document values. Object key order follows insertion for serialization only.
pub type JsonValue = serde_json::Value;

pub type JsonObject = serde_json::Map<String, JsonValue>;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RowKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl RowKind {
    pub fn of(value: &JsonValue) -> Self {
        match value {
            JsonValue::Null => RowKind::Null,
            JsonValue::Bool(_) => RowKind::Boolean,
            JsonValue::Number(_) => RowKind::Number,
            JsonValue::String(_) => RowKind::String,
            JsonValue::Array(_) => RowKind::Array,
            JsonValue::Object(_) => RowKind::Object,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RowKind::Null => "null",
            RowKind::Boolean => "boolean",
            RowKind::Number => "number",
            RowKind::String => "string",
            RowKind::Array => "array",
            RowKind::Object => "object",
        }
    }

    pub fn is_container(self) -> bool {
        matches!(self, RowKind::Array | RowKind::Object)
    }
}

/// One direct child of a rendered node, as the graph renderer describes it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Row {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub value: JsonValue,
    #[serde(rename = "type")]
    pub kind: RowKind,
}

impl Row {
    pub fn keyed(key: impl Into<String>, value: JsonValue) -> Self {
        let kind = RowKind::of(&value);
        Self {
            key: Some(key.into()),
            value,
            kind,
        }
    }

    pub fn unkeyed(value: JsonValue) -> Self {
        let kind = RowKind::of(&value);
        Self {
            key: None,
            value,
            kind,
        }
    }
}

/// The node a user selected: where it lives and what the renderer shows for it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NodeData {
    #[serde(default)]
    pub path: Path,
    #[serde(default, rename = "text")]
    pub rows: Vec<Row>,
}

impl NodeData {
    pub fn new(path: Path, rows: Vec<Row>) -> Self {
        Self { path, rows }
    }

    /// Select the node at `path` in `document`, projecting its rows.
    pub fn select(document: &JsonValue, path: Path) -> Option<Self> {
        let value = crate::tree::get(document, &path)?;
        Some(Self {
            rows: rows_for(value),
            path,
        })
    }
}

/// Project a value's direct children into rows the way the graph view lists them.
pub fn rows_for(value: &JsonValue) -> Vec<Row> {
    match value {
        JsonValue::Object(map) => map
            .iter()
            .map(|(k, v)| Row::keyed(k.clone(), v.clone()))
            .collect(),
        JsonValue::Array(items) => items.iter().cloned().map(Row::unkeyed).collect(),
        scalar => vec![Row::unkeyed(scalar.clone())],
    }
}

/// Lowercase type name of a value, for error messages.
pub fn kind_name(value: &JsonValue) -> &'static str {
    RowKind::of(value).name()
}
