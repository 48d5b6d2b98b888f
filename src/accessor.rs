//! Property resolution from a root value.
//!
//! A [`PropertyAccessor`] turns `(root, path)` into the value a validation unit
//! evaluates. Absence (a `null` root or a `null` intermediate) resolves to
//! `None`, which the engine evaluates as `null`. A path that cannot be valid
//! for the value's shape is a [`ConfigError`], never a validation failure.

use serde_json::Value;

use crate::error::{value_kind, ConfigError};
use crate::path::{FieldPath, PathSegment};

/// Resolves property paths against a root value.
///
/// Implementations must be pure: the same `(root, path)` always resolves to
/// the same value or the same error.
pub trait PropertyAccessor: Send + Sync {
    /// Resolves `path` against `root`.
    ///
    /// Returns `Ok(None)` when the value is absent.
    fn resolve<'a>(&self, root: &'a Value, path: &FieldPath)
        -> Result<Option<&'a Value>, ConfigError>;
}

/// The default accessor.
///
/// Treats `null` along the path as absence. Missing object keys and
/// out-of-range indexes are configuration errors: a serialized Rust value
/// always carries every field, so a missing key means the path is mistyped.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictAccessor;

/// An accessor for hand-written documents that omit optional keys.
///
/// Missing keys and out-of-range indexes resolve to absence. Addressing into a
/// scalar is still a configuration error.
#[derive(Debug, Clone, Copy, Default)]
pub struct LenientAccessor;

impl PropertyAccessor for StrictAccessor {
    fn resolve<'a>(
        &self,
        root: &'a Value,
        path: &FieldPath,
    ) -> Result<Option<&'a Value>, ConfigError> {
        walk(root, path, true)
    }
}

impl PropertyAccessor for LenientAccessor {
    fn resolve<'a>(
        &self,
        root: &'a Value,
        path: &FieldPath,
    ) -> Result<Option<&'a Value>, ConfigError> {
        walk(root, path, false)
    }
}

fn walk<'a>(
    root: &'a Value,
    path: &FieldPath,
    strict: bool,
) -> Result<Option<&'a Value>, ConfigError> {
    let mut current = root;

    for segment in path.segments() {
        if current.is_null() {
            return Ok(None);
        }

        let next = match (segment, current) {
            (PathSegment::Field(name), Value::Object(map)) => match map.get(name) {
                Some(v) => v,
                None if strict => {
                    return Err(ConfigError::UnknownProperty {
                        path: path.to_string(),
                        segment: name.clone(),
                    })
                }
                None => return Ok(None),
            },
            (PathSegment::Index(idx), Value::Array(items)) => match items.get(*idx) {
                Some(v) => v,
                None if strict => {
                    return Err(ConfigError::UnknownProperty {
                        path: path.to_string(),
                        segment: format!("[{}]", idx),
                    })
                }
                None => return Ok(None),
            },
            (segment, other) => {
                return Err(ConfigError::Unresolvable {
                    path: path.to_string(),
                    segment: match segment {
                        PathSegment::Field(name) => name.clone(),
                        PathSegment::Index(idx) => format!("[{}]", idx),
                    },
                    found: value_kind(other),
                })
            }
        };

        current = next;
    }

    if current.is_null() {
        Ok(None)
    } else {
        Ok(Some(current))
    }
}
