//! Field validation failure types.
//!
//! This module provides [`FieldError`] for a single validation failure and
//! [`FieldErrors`] for the ordered collection a validation pass produces.

use std::fmt::{self, Display};

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use stillwater::prelude::*;

use crate::path::FieldPath;

/// A single validation failure.
///
/// `FieldError` captures everything a caller needs to render or handle a
/// failure:
/// - **field**: Where in the object graph it occurred (`None` for a failure of
///   the validated object as a whole)
/// - **code**: Machine-readable rule code (e.g. `notEmpty`, `greaterThan`)
/// - **value**: The offending value (`null` when absent)
/// - **params**: Rule parameters, such as the `criterion` of a comparison
///
/// Errors are plain values: two errors are equal when all four parts are equal.
///
/// # Example
///
/// ```rust
/// use verdict::{FieldError, FieldPath};
///
/// let error = FieldError::new("greaterThan")
///     .at(FieldPath::from_field("power"))
///     .with_value(10)
///     .with_param("criterion", 50);
///
/// assert_eq!(error.code, "greaterThan");
/// assert_eq!(error.to_string(), "power: greaterThan (value: 10, criterion: 50)");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    /// The path of the property that failed, or `None` for a whole-object failure.
    pub field: Option<FieldPath>,
    /// Machine-readable failure code.
    pub code: String,
    /// The offending value.
    pub value: Value,
    /// Rule parameters, in insertion order.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub params: IndexMap<String, Value>,
}

impl FieldError {
    /// Creates a fieldless error with the given code, a `null` value and no params.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            field: None,
            code: code.into(),
            value: Value::Null,
            params: IndexMap::new(),
        }
    }

    /// Sets the field path and returns self for chaining.
    pub fn at(mut self, field: FieldPath) -> Self {
        self.field = Some(field);
        self
    }

    /// Sets the offending value and returns self for chaining.
    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = value.into();
        self
    }

    /// Adds a parameter and returns self for chaining.
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Replaces all parameters and returns self for chaining.
    pub fn with_params(mut self, params: IndexMap<String, Value>) -> Self {
        self.params = params;
        self
    }

    /// Returns true if this error is attached to a field.
    pub fn has_field(&self) -> bool {
        self.field.is_some()
    }

    /// Returns a copy of this error with its field prefixed by `parent`.
    ///
    /// A fieldless error takes `parent` as its field.
    pub fn prefixed(&self, parent: &FieldPath) -> Self {
        Self {
            field: FieldPath::mix(Some(parent), self.field.as_ref()),
            ..self.clone()
        }
    }
}

impl Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "{}: {}", field, self.code)?,
            None => write!(f, "(root): {}", self.code)?,
        }

        write!(f, " (value: {}", self.value)?;
        for (name, value) in &self.params {
            write!(f, ", {}: {}", name, value)?;
        }
        write!(f, ")")
    }
}

impl std::error::Error for FieldError {}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<FieldError>();
    assert_sync::<FieldError>();
};

/// An ordered collection of validation failures.
///
/// Insertion order is evaluation order: units contribute in registration
/// order and nested validators contribute in their own registration order.
/// An empty collection means "ok". Nothing is ever deduplicated.
///
/// # Combining Errors
///
/// `FieldErrors` implements `Semigroup`, so collections from independent
/// passes can be combined:
///
/// ```rust
/// use verdict::{FieldError, FieldErrors, FieldPath};
/// use stillwater::prelude::*;
///
/// let name = FieldErrors::reject(FieldError::new("notEmpty").at(FieldPath::from_field("name")));
/// let email = FieldErrors::reject(FieldError::new("email").at(FieldPath::from_field("email")));
///
/// let combined = name.combine(email);
/// assert_eq!(combined.len(), 2);
/// assert!(combined.has_errors());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    /// Creates an empty ("ok") collection.
    pub fn ok() -> Self {
        Self(Vec::new())
    }

    /// Creates a collection containing a single error.
    pub fn reject(error: FieldError) -> Self {
        Self(vec![error])
    }

    /// Creates a collection from a `Vec<FieldError>`, keeping its order.
    pub fn from_vec(errors: Vec<FieldError>) -> Self {
        Self(errors)
    }

    /// Appends every error of `other` after the errors already present.
    pub fn add(&mut self, other: FieldErrors) {
        self.0.extend(other.0);
    }

    /// Appends a single error.
    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    /// Returns true if there are no errors.
    pub fn is_ok(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if there is at least one error.
    pub fn has_errors(&self) -> bool {
        !self.0.is_empty()
    }

    /// Returns the number of errors in this collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no errors.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the contained errors.
    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.0.iter()
    }

    /// Returns the first error, if any.
    pub fn first(&self) -> Option<&FieldError> {
        self.0.first()
    }

    /// Returns all errors reported for the specified field.
    pub fn at_field(&self, field: &FieldPath) -> Vec<&FieldError> {
        self.0
            .iter()
            .filter(|e| e.field.as_ref() == Some(field))
            .collect()
    }

    /// Returns all errors with the specified code.
    pub fn with_code(&self, code: &str) -> Vec<&FieldError> {
        self.0.iter().filter(|e| e.code == code).collect()
    }

    /// Returns a new collection with every field prefixed by `parent`.
    pub fn prefixed(&self, parent: &FieldPath) -> Self {
        Self(self.0.iter().map(|e| e.prefixed(parent)).collect())
    }

    /// Returns the errors as a slice.
    pub fn as_slice(&self) -> &[FieldError] {
        &self.0
    }

    /// Converts this collection into a `Vec<FieldError>`.
    pub fn into_vec(self) -> Vec<FieldError> {
        self.0
    }
}

impl Semigroup for FieldErrors {
    fn combine(mut self, other: Self) -> Self {
        self.add(other);
        self
    }
}

impl Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ok() {
            return write!(f, "No validation errors");
        }
        writeln!(f, "Validation failed with {} error(s):", self.len())?;
        for (i, error) in self.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

impl From<FieldError> for FieldErrors {
    fn from(error: FieldError) -> Self {
        Self::reject(error)
    }
}

impl FromIterator<FieldError> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for FieldErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a FieldErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<FieldErrors>();
    assert_sync::<FieldErrors>();
};
