//! JSON Patch (RFC 6902) interpreter over `serde_json::Value`.
//!
//! Used by partial updates: the current state is rendered as a JSON object,
//! the client's operations are applied to it, and the merged result is then
//! validated like any other input. A document is applied atomically: if
//! any operation fails, the target value is left untouched.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A single patch operation, tagged by its `op` member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum PatchOperation {
    Add { path: String, value: Value },
    Remove { path: String },
    Replace { path: String, value: Value },
    Move { from: String, path: String },
    Copy { from: String, path: String },
    Test { path: String, value: Value },
}

/// An ordered list of patch operations, as sent in a PATCH request body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatchDocument(pub Vec<PatchOperation>);

impl PatchDocument {
    /// Apply every operation to `target`, or none of them.
    pub fn apply(&self, target: &mut Value) -> Result<(), PatchError> {
        apply_patch(target, &self.0)
    }
}

/// Why a patch document could not be applied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatchError {
    #[error("'{0}' is not a valid JSON pointer")]
    InvalidPointer(String),

    #[error("path '{0}' does not exist")]
    PathNotFound(String),

    #[error("invalid array index in path '{0}'")]
    InvalidIndex(String),

    #[error("test operation failed at path '{0}'")]
    TestFailed(String),

    #[error("cannot move '{from}' into its own child '{path}'")]
    MoveIntoChild { from: String, path: String },

    #[error("the document root cannot be removed")]
    RemoveRoot,
}

// ---------------------------------------------------------------------------
// Application
// ---------------------------------------------------------------------------

/// Apply `ops` in order to a working copy of `target` and commit the result
/// only if all of them succeed.
pub fn apply_patch(target: &mut Value, ops: &[PatchOperation]) -> Result<(), PatchError> {
    let mut working = target.clone();
    for op in ops {
        apply_operation(&mut working, op)?;
    }
    *target = working;
    Ok(())
}

fn apply_operation(doc: &mut Value, op: &PatchOperation) -> Result<(), PatchError> {
    match op {
        PatchOperation::Add { path, value } => add(doc, path, value.clone()),
        PatchOperation::Remove { path } => remove(doc, path).map(drop),
        PatchOperation::Replace { path, value } => replace(doc, path, value.clone()),
        PatchOperation::Move { from, path } => move_value(doc, from, path),
        PatchOperation::Copy { from, path } => {
            check_pointer(from)?;
            let value = doc
                .pointer(from)
                .cloned()
                .ok_or_else(|| PatchError::PathNotFound(from.clone()))?;
            add(doc, path, value)
        }
        PatchOperation::Test { path, value } => {
            check_pointer(path)?;
            match doc.pointer(path) {
                Some(current) if current == value => Ok(()),
                _ => Err(PatchError::TestFailed(path.clone())),
            }
        }
    }
}

fn add(doc: &mut Value, path: &str, value: Value) -> Result<(), PatchError> {
    check_pointer(path)?;
    if path.is_empty() {
        *doc = value;
        return Ok(());
    }

    let (parent_ptr, key) = split_last(path);
    let parent = doc
        .pointer_mut(parent_ptr)
        .ok_or_else(|| PatchError::PathNotFound(path.to_string()))?;

    match parent {
        Value::Object(map) => {
            map.insert(key, value);
            Ok(())
        }
        Value::Array(items) => {
            if key == "-" {
                items.push(value);
                return Ok(());
            }
            let index = parse_index(&key, path)?;
            if index > items.len() {
                return Err(PatchError::InvalidIndex(path.to_string()));
            }
            items.insert(index, value);
            Ok(())
        }
        _ => Err(PatchError::PathNotFound(path.to_string())),
    }
}

fn remove(doc: &mut Value, path: &str) -> Result<Value, PatchError> {
    check_pointer(path)?;
    if path.is_empty() {
        return Err(PatchError::RemoveRoot);
    }

    let (parent_ptr, key) = split_last(path);
    let parent = doc
        .pointer_mut(parent_ptr)
        .ok_or_else(|| PatchError::PathNotFound(path.to_string()))?;

    match parent {
        Value::Object(map) => map
            .remove(&key)
            .ok_or_else(|| PatchError::PathNotFound(path.to_string())),
        Value::Array(items) => {
            let index = parse_index(&key, path)?;
            if index >= items.len() {
                return Err(PatchError::InvalidIndex(path.to_string()));
            }
            Ok(items.remove(index))
        }
        _ => Err(PatchError::PathNotFound(path.to_string())),
    }
}

fn replace(doc: &mut Value, path: &str, value: Value) -> Result<(), PatchError> {
    check_pointer(path)?;
    let slot = doc
        .pointer_mut(path)
        .ok_or_else(|| PatchError::PathNotFound(path.to_string()))?;
    *slot = value;
    Ok(())
}

fn move_value(doc: &mut Value, from: &str, path: &str) -> Result<(), PatchError> {
    check_pointer(from)?;
    check_pointer(path)?;
    if from == path {
        return doc
            .pointer(from)
            .map(|_| ())
            .ok_or_else(|| PatchError::PathNotFound(from.to_string()));
    }
    if path.starts_with(&format!("{from}/")) {
        return Err(PatchError::MoveIntoChild {
            from: from.to_string(),
            path: path.to_string(),
        });
    }
    let value = remove(doc, from)?;
    add(doc, path, value)
}

// ---------------------------------------------------------------------------
// JSON Pointer helpers (RFC 6901)
// ---------------------------------------------------------------------------

/// Reject pointers that are neither empty nor `/`-prefixed, or that contain
/// a `~` not followed by `0` or `1`.
fn check_pointer(pointer: &str) -> Result<(), PatchError> {
    let invalid = || PatchError::InvalidPointer(pointer.to_string());
    if !pointer.is_empty() && !pointer.starts_with('/') {
        return Err(invalid());
    }
    let mut chars = pointer.chars();
    while let Some(c) = chars.next() {
        if c == '~' && !matches!(chars.next(), Some('0') | Some('1')) {
            return Err(invalid());
        }
    }
    Ok(())
}

/// Split a non-empty pointer into its parent pointer and unescaped last token.
fn split_last(pointer: &str) -> (&str, String) {
    let idx = pointer.rfind('/').unwrap_or(0);
    let token = pointer[idx + 1..].replace("~1", "/").replace("~0", "~");
    (&pointer[..idx], token)
}

fn parse_index(token: &str, path: &str) -> Result<usize, PatchError> {
    let well_formed = !token.is_empty()
        && token.bytes().all(|b| b.is_ascii_digit())
        && (token == "0" || !token.starts_with('0'));
    if !well_formed {
        return Err(PatchError::InvalidIndex(path.to_string()));
    }
    token
        .parse()
        .map_err(|_| PatchError::InvalidIndex(path.to_string()))
}
