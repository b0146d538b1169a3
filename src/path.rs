//! Paths locating a node inside a JSON document.
//!
//! A path is the ordered list of object keys and array indices walked from the
//! document root to the node. The empty path is the root itself.
//!
//! The display form is `$` followed by one bracket per segment, e.g.
//! `$["customer"][0]["name"]`. Keys are inserted literally between double quotes
//! with no escaping, so a key containing `"]` cannot be parsed back.

use crate::error::EditError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One step of a path. The kind is chosen by whoever produced the path, based on
/// the container found at that level; it is never inferred from the key's shape.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Seg {
    Key(String),
    Index(usize),
}

impl Seg {
    /// Name of the container kind this segment addresses.
    pub fn container_kind(&self) -> &'static str {
        match self {
            Seg::Key(_) => "object",
            Seg::Index(_) => "array",
        }
    }
}

impl fmt::Display for Seg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seg::Key(k) => write!(f, "[\"{}\"]", k),
            Seg::Index(i) => write!(f, "[{}]", i),
        }
    }
}

impl From<&str> for Seg {
    fn from(k: &str) -> Self {
        Seg::Key(k.to_string())
    }
}

impl From<String> for Seg {
    fn from(k: String) -> Self {
        Seg::Key(k)
    }
}

impl From<usize> for Seg {
    fn from(i: usize) -> Self {
        Seg::Index(i)
    }
}

/// Root-to-leaf sequence of segments. Serializes as the renderer's array form,
/// `["customer", 0, "name"]`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path(Vec<Seg>);

impl Path {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn key(mut self, k: impl Into<String>) -> Self {
        self.0.push(Seg::Key(k.into()));
        self
    }

    pub fn index(mut self, i: usize) -> Self {
        self.0.push(Seg::Index(i));
        self
    }

    pub fn push(&mut self, seg: Seg) {
        self.0.push(seg);
    }

    pub fn segments(&self) -> &[Seg] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// The first `len` segments, used to report where a walk failed.
    pub fn prefix(&self, len: usize) -> Path {
        Path(self.0[..len.min(self.0.len())].to_vec())
    }

    /// Display string for the path (`$` for the root).
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "$")?;
        for seg in &self.0 {
            write!(f, "{}", seg)?;
        }
        Ok(())
    }
}

impl FromStr for Path {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |why: &str| EditError::InvalidPath(format!("{} in {:?}", why, s));

        let mut rest = s
            .trim()
            .strip_prefix('$')
            .ok_or_else(|| invalid("missing leading `$`"))?;
        let mut segments = Vec::new();

        while !rest.is_empty() {
            let inner = rest
                .strip_prefix('[')
                .ok_or_else(|| invalid("expected `[`"))?;

            if let Some(quoted) = inner.strip_prefix('"') {
                let end = quoted
                    .find("\"]")
                    .ok_or_else(|| invalid("unterminated key"))?;
                segments.push(Seg::Key(quoted[..end].to_string()));
                rest = &quoted[end + 2..];
            } else {
                let end = inner.find(']').ok_or_else(|| invalid("unterminated index"))?;
                let index = inner[..end]
                    .parse::<usize>()
                    .map_err(|_| invalid("index must be a non-negative integer"))?;
                segments.push(Seg::Index(index));
                rest = &inner[end + 1..];
            }
        }

        Ok(Path(segments))
    }
}

impl FromIterator<Seg> for Path {
    fn from_iter<I: IntoIterator<Item = Seg>>(iter: I) -> Self {
        Path(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Seg;
    type IntoIter = std::slice::Iter<'a, Seg>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Build a [`Path`]: string expressions become keys, integers become indices.
///
/// ```
/// use nodedit::path;
///
/// let p = path!("customer", 0, "name");
/// assert_eq!(p.to_string(), r#"$["customer"][0]["name"]"#);
/// ```
#[macro_export]
macro_rules! path {
    () => {
        $crate::path::Path::root()
    };
    ($($seg:expr),+ $(,)?) => {{
        let mut p = $crate::path::Path::root();
        $( p.push($crate::path::Seg::from($seg)); )+
        p
    }};
}
