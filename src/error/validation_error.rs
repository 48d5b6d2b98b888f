//! The opt-in "fail on errors" value.

use std::fmt::{self, Debug, Display};

use super::FieldErrors;

/// A failed validation converted into an error value.
///
/// Produced by [`ValidationResult::into_result`](crate::ValidationResult::into_result)
/// and [`ValidationResult::ok_or_fail`](crate::ValidationResult::ok_or_fail) for
/// call sites that prefer `?`-propagation over inspecting a result. It always
/// carries the complete set of accumulated errors, not just the first.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError<R> {
    root: R,
    errors: FieldErrors,
}

impl<R> ValidationError<R> {
    /// Creates a validation error for `root`.
    pub fn new(root: R, errors: FieldErrors) -> Self {
        Self { root, errors }
    }

    /// Returns the validated root value.
    pub fn root(&self) -> &R {
        &self.root
    }

    /// Returns every accumulated field error.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Splits the error into the root value and its field errors.
    pub fn into_parts(self) -> (R, FieldErrors) {
        (self.root, self.errors)
    }

    /// Drops the root, keeping only the field errors.
    pub fn into_errors(self) -> FieldErrors {
        self.errors
    }
}

impl<R> Display for ValidationError<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.errors)
    }
}

impl<R: Debug> std::error::Error for ValidationError<R> {}
