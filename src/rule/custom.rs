//! Results returned by custom rule callbacks.

use crate::error::{FieldError, FieldErrors};
use crate::validator::ValidationResult;

/// The outcome of a custom rule callback.
///
/// A custom rule either succeeds or carries one or more field errors. Errors
/// without a field are attributed to the property the rule is bound to; errors
/// with a field are nested below it.
///
/// # Example
///
/// ```rust
/// use verdict::CustomResult;
///
/// let taken = ["Gazprom"];
/// let check = |name: &str| {
///     if taken.contains(&name) {
///         CustomResult::failure("notUnique")
///     } else {
///         CustomResult::success()
///     }
/// };
///
/// assert!(check("Averta").is_ok());
/// assert!(check("Gazprom").has_errors());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CustomResult {
    errors: FieldErrors,
}

impl CustomResult {
    /// A successful result.
    pub fn success() -> Self {
        Self {
            errors: FieldErrors::ok(),
        }
    }

    /// A failure with a single fieldless error carrying `code`.
    pub fn failure(code: impl Into<String>) -> Self {
        Self::failure_with(FieldError::new(code))
    }

    /// A failure with a single error.
    pub fn failure_with(error: FieldError) -> Self {
        Self {
            errors: FieldErrors::reject(error),
        }
    }

    /// A result carrying `errors`; successful if `errors` is empty.
    pub fn failure_errors(errors: FieldErrors) -> Self {
        Self { errors }
    }

    /// Returns true if the callback reported no errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_ok()
    }

    /// Returns true if the callback reported at least one error.
    pub fn has_errors(&self) -> bool {
        self.errors.has_errors()
    }

    /// Returns the reported errors.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Consumes the result, returning the reported errors.
    pub fn into_errors(self) -> FieldErrors {
        self.errors
    }
}

impl<R> From<ValidationResult<R>> for CustomResult {
    fn from(result: ValidationResult<R>) -> Self {
        Self::failure_errors(result.into_errors())
    }
}

impl From<FieldErrors> for CustomResult {
    fn from(errors: FieldErrors) -> Self {
        Self::failure_errors(errors)
    }
}
