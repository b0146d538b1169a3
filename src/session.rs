//! Applying edited text to a document, and the edit panel's lifecycle around it.

use crate::error::EditError;
use crate::merge;
use crate::node::{JsonObject, JsonValue, NodeData};
use crate::path::Path;
use crate::rows;
use crate::storage::DocumentStore;
use crate::tree;
use tracing::{debug, info, warn};

/// Output layout for document text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    /// 2-space indented.
    #[default]
    Pretty,
    Compact,
}

/// Parse stored document text. Blank text is the empty object.
pub fn parse_document(text: &str) -> Result<JsonValue, EditError> {
    if text.trim().is_empty() {
        return Ok(JsonValue::Object(JsonObject::new()));
    }
    serde_json::from_str(text).map_err(EditError::InvalidDocument)
}

pub fn to_document_text(value: &JsonValue, format: Format) -> String {
    match format {
        Format::Pretty => format!("{:#}", value),
        Format::Compact => value.to_string(),
    }
}

/// Text-in, text-out form of [`EditSession::apply`].
pub fn apply_text(
    document: &str,
    path: &Path,
    edited_text: &str,
    format: Format,
) -> Result<String, EditError> {
    let document = parse_document(document)?;
    let updated = EditSession::apply(&document, path, edited_text)?;
    Ok(to_document_text(&updated, format))
}

/// Edit state for one selected node.
///
/// Outside editing the buffer mirrors the node's normalized text. A failed save
/// keeps the session in editing with the buffer as typed so it can be fixed.
#[derive(Debug, Clone)]
pub struct EditSession {
    node: NodeData,
    buffer: String,
    editing: bool,
}

impl EditSession {
    /// New document with `edited_text` merged into or replacing the node at `path`.
    ///
    /// Pure: `document` is left as is whether or not the edit succeeds.
    pub fn apply(
        document: &JsonValue,
        path: &Path,
        edited_text: &str,
    ) -> Result<JsonValue, EditError> {
        let proposed: JsonValue = serde_json::from_str(edited_text).map_err(|e| {
            warn!(path = %path, error = %e, "edited text is not valid JSON");
            EditError::InvalidJson(e)
        })?;

        let existing = tree::get(document, path);
        debug!(path = %path, found = existing.is_some(), "resolving edit");
        let merged = merge::resolve(existing, proposed);
        tree::set(document, path, merged)
    }

    pub fn new(node: NodeData) -> Self {
        let buffer = rows::to_text(&node.rows);
        Self {
            node,
            buffer,
            editing: false,
        }
    }

    pub fn node(&self) -> &NodeData {
        &self.node
    }

    /// Read-only text for the node.
    pub fn content(&self) -> String {
        rows::to_text(&self.node.rows)
    }

    pub fn json_path(&self) -> String {
        self.node.path.to_display_string()
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn begin_edit(&mut self) {
        self.editing = true;
    }

    pub fn set_buffer(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
    }

    /// Leave editing and drop unsaved text.
    pub fn cancel(&mut self) {
        self.editing = false;
        self.buffer = self.content();
    }

    /// Follow a new selection. Ignored while editing so unsaved text is never
    /// saved against a different node; returns whether the node was taken.
    pub fn refresh(&mut self, node: NodeData) -> bool {
        if self.editing {
            return false;
        }
        self.buffer = rows::to_text(&node.rows);
        self.node = node;
        true
    }

    /// Write the buffer into the store's document at this node's path.
    ///
    /// On success the session leaves editing and reloads the node from the
    /// updated document. On failure nothing is written and editing continues.
    /// An untouched buffer writes nothing: the flat text of an array node does
    /// not describe the array, so applying it would replace the node.
    pub fn save<S: DocumentStore + ?Sized>(&mut self, store: &mut S) -> Result<(), EditError> {
        if self.buffer == self.content() {
            debug!(path = %self.node.path, "buffer unchanged, nothing to save");
            self.editing = false;
            return Ok(());
        }

        let document = parse_document(&store.get_json()?)?;
        let updated = Self::apply(&document, &self.node.path, &self.buffer)?;
        store.set_json(to_document_text(&updated, Format::Pretty))?;

        if let Some(node) = NodeData::select(&updated, self.node.path.clone()) {
            self.node = node;
        }
        self.editing = false;
        self.buffer = self.content();
        info!(path = %self.node.path, "saved node edit");
        Ok(())
    }
}
