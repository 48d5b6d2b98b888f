//! Fluent construction of validators.
//!
//! A [`ValidatorBuilder`] collects property units and root-level rules. Each
//! property unit is started with a kind-specific entry point
//! ([`string`](ValidatorBuilder::string), [`number`](ValidatorBuilder::number),
//! [`collection`](ValidatorBuilder::collection),
//! [`object`](ValidatorBuilder::object), the temporal entry points, or
//! [`itself`](ValidatorBuilder::itself)) and registered by its terminal
//! [`and`](UnitBuilder::and). Builders are consumed and returned by every
//! call, so an unfinished unit cannot reach [`build`](ValidatorBuilder::build).
//!
//! Configuration mistakes made while building (a malformed property path, a
//! pattern that does not compile) are recorded and reported by `build()`.

mod collection;
mod number;
mod string;
#[cfg(feature = "temporal")]
mod temporal;
mod unit;

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::accessor::{PropertyAccessor, StrictAccessor};
use crate::error::ConfigError;
use crate::path::FieldPath;
use crate::rule::{CustomResult, NotNull, Rule};
use crate::unit::ValidationUnit;
use crate::validator::{Binding, Validator};

pub use unit::{CollectionKind, NumberKind, ObjectKind, SelfSelector, StringKind, UnitBuilder};
#[cfg(feature = "temporal")]
pub use temporal::TemporalKind;

/// Builds a [`Validator`] for roots of type `R`.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use verdict::{CustomResult, Validator};
///
/// let validator = Validator::<serde_json::Value>::builder()
///     .string("name").not_blank().and()
///     .number("power").greater_than(50).and()
///     .custom(|root, _| {
///         if root["name"] == root["alias"] {
///             CustomResult::failure("aliasSameAsName")
///         } else {
///             CustomResult::success()
///         }
///     })
///     .build()
///     .unwrap();
///
/// let errors = validator
///     .validate_value(&json!({"name": "Ford", "alias": "Ford", "power": 100}))
///     .unwrap();
/// assert_eq!(errors.first().unwrap().code, "aliasSameAsName");
/// ```
pub struct ValidatorBuilder<R = Value> {
    scope: Option<FieldPath>,
    bindings: Vec<Binding>,
    root: ValidationUnit,
    not_null: bool,
    fail_fast: bool,
    accessor: Arc<dyn PropertyAccessor>,
    error: Option<ConfigError>,
    _root: PhantomData<fn(&R)>,
}

impl<R> ValidatorBuilder<R> {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self {
            scope: None,
            bindings: Vec::new(),
            root: ValidationUnit::new(),
            not_null: false,
            fail_fast: false,
            accessor: Arc::new(StrictAccessor),
            error: None,
            _root: PhantomData,
        }
    }

    /// Creates a builder whose property paths are all relative to `scope`.
    ///
    /// `ValidatorBuilder::scoped("address").string("city")` validates
    /// `address.city` of the root.
    pub fn scoped(scope: &str) -> Self {
        let mut builder = Self::new();
        match FieldPath::parse(scope) {
            Ok(path) => builder.scope = Some(path),
            Err(e) => builder.record(e),
        }
        builder
    }

    /// Stops validation after the first binding that produces failures.
    pub fn fail_fast(mut self) -> Self {
        self.fail_fast = true;
        self
    }

    /// Rejects an absent root with a fieldless `notNull` error.
    ///
    /// The check runs before every other binding; the remaining units still
    /// run and see absent properties.
    pub fn not_null(mut self) -> Self {
        self.not_null = true;
        self
    }

    /// Uses `accessor` to resolve property paths.
    pub fn accessor(mut self, accessor: impl PropertyAccessor + 'static) -> Self {
        self.accessor = Arc::new(accessor);
        self
    }

    /// Guards the root-level rules; they are skipped unless `guard(root)` holds.
    pub fn when(mut self, guard: impl Fn(&Value) -> bool + Send + Sync + 'static) -> Self {
        self.root
            .add_when(Arc::new(move |root: &Value, _: &Value| guard(root)));
        self
    }

    /// Skips the root-level rules when `guard(root)` holds.
    pub fn unless(mut self, guard: impl Fn(&Value) -> bool + Send + Sync + 'static) -> Self {
        self.root
            .set_unless(Arc::new(move |root: &Value, _: &Value| guard(root)));
        self
    }

    /// Validates the whole root with another validator; its errors keep their fields.
    pub fn validator<S>(mut self, validator: Validator<S>) -> Self {
        self.root.add_rule(Rule::Validator(validator.erase()));
        self
    }

    /// Adds a root-level custom rule. Both arguments are the root.
    pub fn custom(
        mut self,
        rule: impl Fn(&Value, &Value) -> CustomResult + Send + Sync + 'static,
    ) -> Self {
        self.root.add_rule(Rule::Custom(Arc::new(rule)));
        self
    }

    /// Adds a root-level custom rule that builds an inline validator.
    pub fn custom_with_builder(
        mut self,
        rule: impl Fn(&Value, &Value, ValidatorBuilder<Value>) -> Result<CustomResult, ConfigError>
            + Send
            + Sync
            + 'static,
    ) -> Self {
        self.root.add_rule(Rule::CustomWithBuilder(Arc::new(rule)));
        self
    }

    /// Replaces the code of every root-level failure with `message`.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.root.set_message(message.into());
        self
    }

    /// Starts a unit for a string property.
    pub fn string(self, path: &str) -> UnitBuilder<R, StringKind> {
        self.unit(path)
    }

    /// Starts a unit for a numeric property.
    pub fn number(self, path: &str) -> UnitBuilder<R, NumberKind> {
        self.unit(path)
    }

    /// Starts a unit for a collection (array) property.
    pub fn collection(self, path: &str) -> UnitBuilder<R, CollectionKind> {
        self.unit(path)
    }

    /// Starts a unit for a nested object property.
    pub fn object(self, path: &str) -> UnitBuilder<R, ObjectKind> {
        self.unit(path)
    }

    /// Starts a unit bound to the root itself (or to the scope of a scoped builder).
    pub fn itself(self) -> SelfSelector<R> {
        let property = self.scope.clone();
        SelfSelector::new(self, property)
    }

    /// Finishes the validator.
    ///
    /// The root-level `not_null` check, if requested, is the first binding;
    /// the property units follow in registration order and the root-level
    /// rules come last.
    ///
    /// # Errors
    ///
    /// Returns the first configuration error recorded while building.
    pub fn build(self) -> Result<Validator<R>, ConfigError> {
        if let Some(error) = self.error {
            return Err(error);
        }

        let mut bindings = Vec::with_capacity(self.bindings.len() + 2);
        if self.not_null {
            let mut unit = ValidationUnit::new();
            unit.add_rule(Rule::check(NotNull));
            bindings.push(Binding {
                property: None,
                unit,
            });
        }
        bindings.extend(self.bindings);
        if !self.root.is_empty() {
            bindings.push(Binding {
                property: None,
                unit: self.root,
            });
        }

        debug!(
            bindings = bindings.len(),
            fail_fast = self.fail_fast,
            "validator built"
        );
        Ok(Validator::from_parts(bindings, self.fail_fast, self.accessor))
    }

    fn unit<K>(mut self, path: &str) -> UnitBuilder<R, K> {
        let property = match FieldPath::parse(path) {
            Ok(path) => Some(match &self.scope {
                Some(scope) => scope.join(&path),
                None => path,
            }),
            Err(e) => {
                self.record(e);
                None
            }
        };
        UnitBuilder::new(self, property)
    }

    pub(crate) fn record(&mut self, error: ConfigError) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }

    pub(crate) fn push(&mut self, property: Option<FieldPath>, unit: ValidationUnit) {
        self.bindings.push(Binding { property, unit });
    }
}

impl<R> Default for ValidatorBuilder<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> fmt::Debug for ValidatorBuilder<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorBuilder")
            .field("scope", &self.scope)
            .field("bindings", &self.bindings)
            .field("root", &self.root)
            .field("not_null", &self.not_null)
            .field("fail_fast", &self.fail_fast)
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}
