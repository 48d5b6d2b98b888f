//! The validation engine.
//!
//! A [`Validator`] is an immutable, ordered list of bindings, each pairing a
//! property path (or the root itself) with a [`ValidationUnit`]. Validating a
//! root resolves every binding's value, evaluates its unit and concatenates
//! the failures in registration order.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use rayon::prelude::*;
use serde::Serialize;
use serde_json::Value;
use stillwater::Validation;
use tracing::debug;

use crate::accessor::{PropertyAccessor, StrictAccessor};
use crate::builder::ValidatorBuilder;
use crate::error::{ConfigError, FieldErrors, ValidationError};
use crate::path::FieldPath;
use crate::unit::ValidationUnit;

static NULL: Value = Value::Null;

/// A unit bound to a property; `None` binds the unit to the root.
#[derive(Debug, Clone)]
pub(crate) struct Binding {
    pub(crate) property: Option<FieldPath>,
    pub(crate) unit: ValidationUnit,
}

/// A compiled validator for roots of type `R`.
///
/// Validators are built with [`Validator::builder`], are immutable once
/// built, and can be shared freely: cloning is cheap and concurrent calls to
/// [`validate`](Validator::validate) never interfere. No state survives
/// between calls.
///
/// The root type is a typing aid only. Rules run over the root's
/// `serde_json` representation, so a `Validator<Employee>` can also be used as
/// the sub-validator of a `Company` field holding an `Employee`.
///
/// # Example
///
/// ```rust
/// use serde::Serialize;
/// use verdict::Validator;
///
/// #[derive(Serialize)]
/// struct User {
///     email: String,
///     age: u32,
/// }
///
/// let validator = Validator::<User>::builder()
///     .string("email").not_blank().email().and()
///     .number("age").greater_or_equal(18).and()
///     .build()
///     .unwrap();
///
/// let user = User { email: "trololo".to_string(), age: 16 };
/// let result = validator.validate(&user).unwrap();
///
/// let codes: Vec<_> = result.errors().iter().map(|e| e.code.as_str()).collect();
/// assert_eq!(codes, vec!["email", "greaterOrEqual"]);
/// ```
pub struct Validator<R = Value> {
    bindings: Arc<[Binding]>,
    fail_fast: bool,
    accessor: Arc<dyn PropertyAccessor>,
    _root: PhantomData<fn(&R)>,
}

impl<R> Validator<R> {
    /// Starts building a validator for roots of type `R`.
    pub fn builder() -> ValidatorBuilder<R> {
        ValidatorBuilder::new()
    }

    pub(crate) fn from_parts(
        bindings: Vec<Binding>,
        fail_fast: bool,
        accessor: Arc<dyn PropertyAccessor>,
    ) -> Self {
        Self {
            bindings: bindings.into(),
            fail_fast,
            accessor,
            _root: PhantomData,
        }
    }

    /// Returns true if evaluation stops after the first failing binding.
    pub fn is_fail_fast(&self) -> bool {
        self.fail_fast
    }

    /// Returns the number of bindings, the root unit included.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns true if the validator has no bindings.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Returns the same validator typed over the dynamic value model.
    pub fn erase(&self) -> Validator<Value> {
        self.retype()
    }

    pub(crate) fn retype<S>(&self) -> Validator<S> {
        Validator {
            bindings: Arc::clone(&self.bindings),
            fail_fast: self.fail_fast,
            accessor: Arc::clone(&self.accessor),
            _root: PhantomData,
        }
    }

    /// Validates an already dynamic value and returns its failures.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a path cannot be resolved against the
    /// value or a rule is misapplied.
    pub fn validate_value(&self, root: &Value) -> Result<FieldErrors, ConfigError> {
        let mut errors = FieldErrors::ok();

        for binding in self.bindings.iter() {
            let value = match &binding.property {
                Some(path) => self.accessor.resolve(root, path)?.unwrap_or(&NULL),
                None => root,
            };

            let failures = binding
                .unit
                .evaluate(root, binding.property.as_ref(), value)?;

            if failures.has_errors() {
                errors.add(failures);
                if self.fail_fast {
                    debug!(
                        property = %crate::rule::describe(binding.property.as_ref()),
                        "fail-fast: skipping remaining bindings"
                    );
                    break;
                }
            }
        }

        if errors.has_errors() {
            debug!(errors = errors.len(), "validation produced failures");
        }

        Ok(errors)
    }
}

impl<R: Serialize> Validator<R> {
    /// Validates `root`.
    ///
    /// A failing validation is not an error: it is a [`ValidationResult`]
    /// carrying the failures. The `Err` case is reserved for a misconfigured
    /// validator.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the root cannot be serialized, a path
    /// cannot be resolved, a rule is applied to a value of the wrong kind or
    /// a custom callback faults.
    pub fn validate<'r>(&self, root: &'r R) -> Result<ValidationResult<&'r R>, ConfigError> {
        let value = serde_json::to_value(root)?;
        let errors = self.validate_value(&value)?;
        Ok(ValidationResult::new(root, errors))
    }
}

impl<R: Serialize + Sync> Validator<R> {
    /// Validates many roots in parallel, returning results in input order.
    pub fn validate_all<'r>(
        &self,
        roots: &'r [R],
    ) -> Vec<Result<ValidationResult<&'r R>, ConfigError>> {
        roots.par_iter().map(|root| self.validate(root)).collect()
    }
}

impl<R> Clone for Validator<R> {
    fn clone(&self) -> Self {
        self.retype()
    }
}

impl<R> fmt::Debug for Validator<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("bindings", &self.bindings)
            .field("fail_fast", &self.fail_fast)
            .finish_non_exhaustive()
    }
}

impl Default for Validator<Value> {
    fn default() -> Self {
        Self::from_parts(Vec::new(), false, Arc::new(StrictAccessor))
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Validator>();
    assert_sync::<Validator>();
};

/// The outcome of a validation: the validated root and its failures.
///
/// An empty failure list means success.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult<R> {
    root: R,
    errors: FieldErrors,
}

impl<R> ValidationResult<R> {
    pub fn new(root: R, errors: FieldErrors) -> Self {
        Self { root, errors }
    }

    pub fn success(root: R) -> Self {
        Self::new(root, FieldErrors::ok())
    }

    pub fn failure(root: R, errors: FieldErrors) -> Self {
        Self::new(root, errors)
    }

    pub fn is_ok(&self) -> bool {
        self.errors.is_ok()
    }

    pub fn has_errors(&self) -> bool {
        self.errors.has_errors()
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn into_errors(self) -> FieldErrors {
        self.errors
    }

    pub fn root(&self) -> &R {
        &self.root
    }

    pub fn into_parts(self) -> (R, FieldErrors) {
        (self.root, self.errors)
    }

    /// Replaces the root, keeping the failures.
    pub fn map_root<S>(self, f: impl FnOnce(R) -> S) -> ValidationResult<S> {
        ValidationResult::new(f(self.root), self.errors)
    }

    /// Returns the root on success, or a [`ValidationError`] carrying every failure.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::Validator;
    /// use serde_json::json;
    ///
    /// let validator = Validator::<serde_json::Value>::builder()
    ///     .string("name").not_empty().and()
    ///     .build()
    ///     .unwrap();
    ///
    /// let root = json!({"name": ""});
    /// let err = validator.validate(&root).unwrap().into_result().unwrap_err();
    /// assert_eq!(err.errors().len(), 1);
    /// ```
    pub fn into_result(self) -> Result<R, ValidationError<R>> {
        if self.errors.is_ok() {
            Ok(self.root)
        } else {
            Err(ValidationError::new(self.root, self.errors))
        }
    }

    /// Returns `f(root)` on success, or a [`ValidationError`] carrying every failure.
    pub fn ok_or_fail<T>(self, f: impl FnOnce(R) -> T) -> Result<T, ValidationError<R>> {
        self.into_result().map(f)
    }

    /// Converts into a stillwater [`Validation`] for composition with other
    /// accumulating checks.
    pub fn into_validation(self) -> Validation<R, FieldErrors> {
        if self.errors.is_ok() {
            Validation::Success(self.root)
        } else {
            Validation::Failure(self.errors)
        }
    }
}
