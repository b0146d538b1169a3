use crate::error::EditError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Text of an empty document.
pub const EMPTY_DOCUMENT: &str = "{}";

/// Holder of the canonical document text.
///
/// Edits read a snapshot with `get_json` and hand back a whole new document to
/// `set_json`; the store owns persistence and any view refresh.
pub trait DocumentStore {
    fn get_json(&self) -> Result<String, EditError>;
    fn set_json(&mut self, json: String) -> Result<(), EditError>;
}

#[derive(Debug, Clone)]
pub struct MemoryStore {
    json: String,
}

impl MemoryStore {
    pub fn new(json: impl Into<String>) -> Self {
        Self { json: json.into() }
    }

    pub fn json(&self) -> &str {
        &self.json
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(EMPTY_DOCUMENT)
    }
}

impl DocumentStore for MemoryStore {
    fn get_json(&self) -> Result<String, EditError> {
        Ok(self.json.clone())
    }

    fn set_json(&mut self, json: String) -> Result<(), EditError> {
        self.json = json;
        Ok(())
    }
}

/// Document kept in a file. A missing file reads as the empty document; writes
/// go to a sibling temp file that is then renamed over the target.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

impl DocumentStore for FileStore {
    fn get_json(&self) -> Result<String, EditError> {
        if !self.exists() {
            return Ok(EMPTY_DOCUMENT.to_string());
        }
        Ok(fs::read_to_string(&self.path)?)
    }

    fn set_json(&mut self, json: String) -> Result<(), EditError> {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, json)?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        debug!(path = %self.path.display(), "document written");
        Ok(())
    }
}
