//! Rules: the units of evaluation bound to a property.
//!
//! A [`Rule`] evaluates `(root, property, value)` to a possibly empty set of
//! field errors. Leaf rules implement the [`Check`] trait and yield at most one
//! error. Delegating rules run another [`Validator`] (on the value or on each
//! item of it) or a caller-supplied callback, and re-root the errors they get
//! back under the property they are bound to.

mod base;
mod collection;
mod custom;
mod numeric;
mod string;
#[cfg(feature = "temporal")]
mod temporal;

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value;

use crate::builder::ValidatorBuilder;
use crate::error::{value_kind, ConfigError, FieldError, FieldErrors};
use crate::path::FieldPath;
use crate::validator::Validator;

pub use base::{Eq, EqWith, NotEq, NotEqWith, NotNull, ValuePredicate};
pub use collection::{CollectionNotEmpty, SizeComparison};
pub use custom::CustomResult;
pub use numeric::{Bound, IntoBound, NumberComparison};
pub use string::{
    Email, IsBoolean, IsNumeric, LengthComparison, Matches, NotBlank, NotEmpty, NumericKind, Url,
};
#[cfg(feature = "temporal")]
pub use temporal::{Between, BoundSupplier, TemporalComparison, TemporalValue};

/// A guard predicate over `(root, value)`.
pub type Guard = Arc<dyn Fn(&Value, &Value) -> bool + Send + Sync>;

/// A value transformation applied before guards and rules.
pub type Mapper = Arc<dyn Fn(&Value) -> Value + Send + Sync>;

/// A custom rule callback over `(root, value)`.
pub type CustomFn = Arc<dyn Fn(&Value, &Value) -> CustomResult + Send + Sync>;

/// A custom rule callback that also receives a fresh builder for an inline validator.
pub type CustomWithBuilderFn = Arc<
    dyn Fn(&Value, &Value, ValidatorBuilder<Value>) -> Result<CustomResult, ConfigError>
        + Send
        + Sync,
>;

/// A value of the wrong kind for a rule family.
///
/// Returned by [`Check::is_valid`] when, for example, a string rule meets a
/// number. The engine reports it as [`ConfigError::TypeMismatch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    /// What the rule family accepts.
    pub expected: &'static str,
    /// What it found instead.
    pub found: String,
}

impl Mismatch {
    /// Creates a mismatch describing `value` by its JSON kind.
    pub fn new(expected: &'static str, value: &Value) -> Self {
        Self {
            expected,
            found: value_kind(value).to_string(),
        }
    }
}

/// A leaf predicate.
///
/// A check that returns `Ok(false)` produces exactly one [`FieldError`] with
/// the check's code and params, the bound property as its field and the
/// offending value. Checks decide their own `null` policy; the built-in
/// comparisons accept `null`.
///
/// # Example
///
/// ```rust
/// use serde_json::Value;
/// use verdict::rule::{Check, Mismatch};
///
/// struct Even;
///
/// impl Check for Even {
///     fn code(&self) -> &str {
///         "even"
///     }
///
///     fn is_valid(&self, _root: &Value, value: &Value) -> Result<bool, Mismatch> {
///         match value {
///             Value::Null => Ok(true),
///             Value::Number(n) => Ok(n.as_i64().map_or(false, |n| n % 2 == 0)),
///             other => Err(Mismatch::new("a number", other)),
///         }
///     }
/// }
/// ```
pub trait Check: Send + Sync {
    /// Machine-readable failure code.
    fn code(&self) -> &str;

    /// Parameters reported with a failure.
    fn params(&self) -> IndexMap<String, Value> {
        IndexMap::new()
    }

    /// Returns whether `value` satisfies the check.
    fn is_valid(&self, root: &Value, value: &Value) -> Result<bool, Mismatch>;
}

/// An ordering requirement shared by length, size, number and temporal rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    /// `value > criterion`, code `greaterThan`.
    GreaterThan,
    /// `value >= criterion`, code `greaterOrEqual`.
    GreaterOrEqual,
    /// `value < criterion`, code `lessThan`.
    LessThan,
    /// `value <= criterion`, code `lessOrEqual`.
    LessOrEqual,
}

impl Comparison {
    /// The failure code reported by rules using this comparison.
    pub fn code(self) -> &'static str {
        match self {
            Comparison::GreaterThan => "greaterThan",
            Comparison::GreaterOrEqual => "greaterOrEqual",
            Comparison::LessThan => "lessThan",
            Comparison::LessOrEqual => "lessOrEqual",
        }
    }

    /// Returns whether `value.cmp(criterion) == ordering` satisfies the comparison.
    pub fn accepts(self, ordering: Ordering) -> bool {
        match self {
            Comparison::GreaterThan => ordering == Ordering::Greater,
            Comparison::GreaterOrEqual => ordering != Ordering::Less,
            Comparison::LessThan => ordering == Ordering::Less,
            Comparison::LessOrEqual => ordering != Ordering::Greater,
        }
    }
}

/// A rule bound to a property inside a validation unit.
#[derive(Clone)]
pub enum Rule {
    /// A leaf predicate.
    Check(Arc<dyn Check>),
    /// Validates the value with a sub-validator; errors nest under the property.
    Validator(Validator),
    /// Validates each item of a collection; errors nest under `property[i]`.
    Items(Validator),
    /// A callback over `(root, value)`.
    Custom(CustomFn),
    /// A callback that builds an inline validator.
    CustomWithBuilder(CustomWithBuilderFn),
}

impl Rule {
    /// Wraps a [`Check`] into a rule.
    pub fn check(check: impl Check + 'static) -> Self {
        Rule::Check(Arc::new(check))
    }

    /// Evaluates the rule. An empty result means the rule passed.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the rule is misapplied (wrong value
    /// kind, item validator on a non-collection) or a callback faults.
    pub fn evaluate(
        &self,
        root: &Value,
        property: Option<&FieldPath>,
        value: &Value,
    ) -> Result<FieldErrors, ConfigError> {
        match self {
            Rule::Check(check) => evaluate_check(check.as_ref(), root, property, value),
            Rule::Validator(validator) => {
                let errors = validator.validate_value(value)?;
                Ok(match property {
                    Some(parent) => errors.prefixed(parent),
                    None => errors,
                })
            }
            Rule::Items(validator) => evaluate_items(validator, property, value),
            Rule::Custom(callback) => {
                let result = callback(root, value);
                Ok(attribute_custom(result, property, value))
            }
            Rule::CustomWithBuilder(callback) => {
                let result = callback(root, value, ValidatorBuilder::new())?;
                Ok(attribute_custom(result, property, value))
            }
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Check(check) => write!(f, "Check({})", check.code()),
            Rule::Validator(v) => f.debug_tuple("Validator").field(v).finish(),
            Rule::Items(v) => f.debug_tuple("Items").field(v).finish(),
            Rule::Custom(_) => write!(f, "Custom"),
            Rule::CustomWithBuilder(_) => write!(f, "CustomWithBuilder"),
        }
    }
}

pub(crate) fn describe(property: Option<&FieldPath>) -> String {
    property
        .map(ToString::to_string)
        .unwrap_or_else(|| "(root)".to_string())
}

fn evaluate_check(
    check: &dyn Check,
    root: &Value,
    property: Option<&FieldPath>,
    value: &Value,
) -> Result<FieldErrors, ConfigError> {
    match check.is_valid(root, value) {
        Ok(true) => Ok(FieldErrors::ok()),
        Ok(false) => Ok(FieldErrors::reject(FieldError {
            field: property.cloned(),
            code: check.code().to_string(),
            value: value.clone(),
            params: check.params(),
        })),
        Err(mismatch) => Err(ConfigError::TypeMismatch {
            property: describe(property),
            expected: mismatch.expected,
            found: mismatch.found,
        }),
    }
}

fn evaluate_items(
    validator: &Validator,
    property: Option<&FieldPath>,
    value: &Value,
) -> Result<FieldErrors, ConfigError> {
    let items = match value {
        Value::Null => return Ok(FieldErrors::ok()),
        Value::Array(items) => items,
        other => {
            return Err(ConfigError::NotACollection {
                property: describe(property),
                found: value_kind(other),
            })
        }
    };

    let mut errors = FieldErrors::ok();
    for (index, item) in items.iter().enumerate() {
        let item_errors = validator.validate_value(item)?;
        if item_errors.has_errors() {
            let parent = match property {
                Some(p) => p.push_index(index),
                None => FieldPath::from_index(index),
            };
            errors.add(item_errors.prefixed(&parent));
        }
    }
    Ok(errors)
}

/// Nests custom rule errors under the bound property.
///
/// Fieldless errors become errors of the property itself and, unless they
/// carry a value of their own, report the property's value.
fn attribute_custom(
    result: CustomResult,
    property: Option<&FieldPath>,
    value: &Value,
) -> FieldErrors {
    result
        .into_errors()
        .into_iter()
        .map(|error| {
            let field = FieldPath::mix(property, error.field.as_ref());
            let value = if error.field.is_none() && error.value.is_null() {
                value.clone()
            } else {
                error.value
            };
            FieldError {
                field,
                code: error.code,
                value,
                params: error.params,
            }
        })
        .collect()
}
