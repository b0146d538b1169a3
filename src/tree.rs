//! Read and write values at a path without touching the input document.

use crate::error::EditError;
use crate::node::{JsonObject, JsonValue, kind_name};
use crate::path::{Path, Seg};
use std::cmp::Ordering;
use tracing::debug;

/// Value at `path`, or `None` when a key or index is absent or a segment does
/// not match the container it lands on. The empty path yields the root.
pub fn get<'a>(root: &'a JsonValue, path: &Path) -> Option<&'a JsonValue> {
    let mut current = root;
    for seg in path {
        current = match (seg, current) {
            (Seg::Key(key), JsonValue::Object(map)) => map.get(key)?,
            (Seg::Index(index), JsonValue::Array(items)) => items.get(*index)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Copy of `root` with `value` stored at `path`.
///
/// Missing intermediate children are created as an object or an array,
/// depending on whether the following segment is a key or an index. A child
/// that exists with the wrong kind is never replaced: the write fails with
/// [`EditError::PathTypeMismatch`]. Writing at index `len` appends; beyond
/// that the write fails with [`EditError::IndexOutOfBounds`].
pub fn set(root: &JsonValue, path: &Path, value: JsonValue) -> Result<JsonValue, EditError> {
    let segments = path.segments();
    let Some((last, parents)) = segments.split_last() else {
        return Ok(value);
    };

    let mut out = root.clone();
    let mut current = &mut out;
    for (depth, seg) in parents.iter().enumerate() {
        current = child_or_create(current, seg, &segments[depth + 1], path, depth)?;
    }
    assign(current, last, value, path, parents.len())?;

    debug!(path = %path, "wrote value");
    Ok(out)
}

fn child_or_create<'a>(
    current: &'a mut JsonValue,
    seg: &Seg,
    next: &Seg,
    path: &Path,
    depth: usize,
) -> Result<&'a mut JsonValue, EditError> {
    let empty = || match next {
        Seg::Key(_) => JsonValue::Object(JsonObject::new()),
        Seg::Index(_) => JsonValue::Array(Vec::new()),
    };

    match (seg, current) {
        (Seg::Key(key), JsonValue::Object(map)) => Ok(map.entry(key.clone()).or_insert_with(empty)),
        (Seg::Index(index), JsonValue::Array(items)) => {
            let len = items.len();
            if *index == len {
                items.push(empty());
            }
            items
                .get_mut(*index)
                .ok_or_else(|| EditError::IndexOutOfBounds {
                    path: path.prefix(depth),
                    index: *index,
                    len,
                })
        }
        (seg, other) => Err(mismatch(path, depth, seg, other)),
    }
}

fn assign(
    container: &mut JsonValue,
    seg: &Seg,
    value: JsonValue,
    path: &Path,
    depth: usize,
) -> Result<(), EditError> {
    match (seg, container) {
        (Seg::Key(key), JsonValue::Object(map)) => {
            map.insert(key.clone(), value);
            Ok(())
        }
        (Seg::Index(index), JsonValue::Array(items)) => {
            let len = items.len();
            match index.cmp(&len) {
                Ordering::Less => items[*index] = value,
                Ordering::Equal => items.push(value),
                Ordering::Greater => {
                    return Err(EditError::IndexOutOfBounds {
                        path: path.prefix(depth),
                        index: *index,
                        len,
                    });
                }
            }
            Ok(())
        }
        (seg, other) => Err(mismatch(path, depth, seg, other)),
    }
}

fn mismatch(path: &Path, depth: usize, seg: &Seg, found: &JsonValue) -> EditError {
    EditError::PathTypeMismatch {
        path: path.prefix(depth),
        expected: seg.container_kind(),
        found: kind_name(found),
    }
}
