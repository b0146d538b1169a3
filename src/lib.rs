//! Path-addressed editing of JSON documents.
//!
//! A selected node is addressed by a [`Path`]; its rows are normalized into
//! editable text, and edited text is merged into or replaces the node to give a
//! new document. Every operation returns a new value and leaves its input as is.

pub mod error;
pub mod merge;
pub mod node;
pub mod path;
pub mod rows;
pub mod session;
pub mod storage;
pub mod tree;

pub use error::EditError;
pub use node::{JsonValue, NodeData, Row, RowKind};
pub use path::{Path, Seg};
pub use session::{EditSession, Format};
pub use storage::{DocumentStore, FileStore, MemoryStore};
