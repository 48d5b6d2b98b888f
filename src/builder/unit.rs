//! The per-property unit builder and the rules every kind shares.

use std::marker::PhantomData;
use std::sync::Arc;

use serde_json::Value;

use super::ValidatorBuilder;
use crate::error::ConfigError;
use crate::path::FieldPath;
use crate::rule::{Check, CustomResult, Eq, EqWith, NotEq, NotEqWith, NotNull, Rule};
use crate::unit::ValidationUnit;
use crate::validator::Validator;

/// Marker for string units.
#[derive(Debug)]
pub struct StringKind;

/// Marker for numeric units.
#[derive(Debug)]
pub struct NumberKind;

/// Marker for collection units.
#[derive(Debug)]
pub struct CollectionKind;

/// Marker for nested object units.
#[derive(Debug)]
pub struct ObjectKind;

/// Builds one [`ValidationUnit`] bound to a property.
///
/// `K` selects the rule family available on the unit. Rules run in the order
/// they are added and the first failing rule decides the unit's result.
/// Calling [`and`](UnitBuilder::and) registers the unit and returns the parent
/// builder.
#[derive(Debug)]
pub struct UnitBuilder<R, K> {
    parent: ValidatorBuilder<R>,
    property: Option<FieldPath>,
    unit: ValidationUnit,
    _kind: PhantomData<K>,
}

impl<R, K> UnitBuilder<R, K> {
    pub(super) fn new(parent: ValidatorBuilder<R>, property: Option<FieldPath>) -> Self {
        Self {
            parent,
            property,
            unit: ValidationUnit::new(),
            _kind: PhantomData,
        }
    }

    pub(super) fn rule(mut self, rule: Rule) -> Self {
        self.unit.add_rule(rule);
        self
    }

    pub(super) fn record(mut self, error: ConfigError) -> Self {
        self.parent.record(error);
        self
    }

    /// Adds a leaf rule.
    pub fn check(self, check: impl Check + 'static) -> Self {
        self.rule(Rule::check(check))
    }

    /// Fails with `notNull` when the property is absent.
    pub fn not_null(self) -> Self {
        self.check(NotNull)
    }

    /// Fails with `eq` unless the property equals `expected`.
    pub fn eq(self, expected: impl Into<Value>) -> Self {
        self.check(Eq::new(expected))
    }

    /// Fails with `eq` unless `predicate` accepts the property.
    pub fn eq_with(self, predicate: impl Fn(&Value) -> bool + Send + Sync + 'static) -> Self {
        self.check(EqWith::new(predicate))
    }

    /// Fails with `notEq` when the property equals `forbidden`.
    pub fn not_eq(self, forbidden: impl Into<Value>) -> Self {
        self.check(NotEq::new(forbidden))
    }

    /// Fails with `notEq` when `is_equal` reports the property as equal.
    pub fn not_eq_with(self, is_equal: impl Fn(&Value) -> bool + Send + Sync + 'static) -> Self {
        self.check(NotEqWith::new(is_equal))
    }

    /// Validates the property with `validator`; its errors nest under the property.
    pub fn validator<S>(self, validator: Validator<S>) -> Self {
        self.rule(Rule::Validator(validator.erase()))
    }

    /// Adds a custom rule over `(root, value)`.
    ///
    /// Fieldless errors are reported on this property with its value; errors
    /// with a field are nested below it.
    pub fn custom(
        self,
        rule: impl Fn(&Value, &Value) -> CustomResult + Send + Sync + 'static,
    ) -> Self {
        self.rule(Rule::Custom(Arc::new(rule)))
    }

    /// Adds a custom rule that receives a fresh builder for an inline validator.
    pub fn custom_with_builder(
        self,
        rule: impl Fn(&Value, &Value, ValidatorBuilder<Value>) -> Result<CustomResult, ConfigError>
            + Send
            + Sync
            + 'static,
    ) -> Self {
        self.rule(Rule::CustomWithBuilder(Arc::new(rule)))
    }

    /// Applies the unit only if `guard(root, value)` holds. Guards accumulate.
    pub fn when(mut self, guard: impl Fn(&Value, &Value) -> bool + Send + Sync + 'static) -> Self {
        self.unit.add_when(Arc::new(guard));
        self
    }

    /// Applies the unit only if `guard(root)` holds.
    pub fn when_root(mut self, guard: impl Fn(&Value) -> bool + Send + Sync + 'static) -> Self {
        self.unit
            .add_when(Arc::new(move |root: &Value, _: &Value| guard(root)));
        self
    }

    /// Skips the unit when `guard(root, value)` holds.
    pub fn unless(
        mut self,
        guard: impl Fn(&Value, &Value) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.unit.set_unless(Arc::new(guard));
        self
    }

    /// Replaces the code of the unit's failures with `message`.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.unit.set_message(message.into());
        self
    }

    /// Transforms the resolved value before guards and rules see it.
    pub fn map_from(mut self, mapper: impl Fn(&Value) -> Value + Send + Sync + 'static) -> Self {
        self.unit.set_mapper(Arc::new(mapper));
        self
    }

    /// Registers the unit and returns the parent builder.
    pub fn and(self) -> ValidatorBuilder<R> {
        let mut parent = self.parent;
        parent.push(self.property, self.unit);
        parent
    }
}

/// Chooses the kind of a unit bound to the root, started by
/// [`ValidatorBuilder::itself`].
#[derive(Debug)]
pub struct SelfSelector<R> {
    parent: ValidatorBuilder<R>,
    property: Option<FieldPath>,
}

impl<R> SelfSelector<R> {
    pub(super) fn new(parent: ValidatorBuilder<R>, property: Option<FieldPath>) -> Self {
        Self { parent, property }
    }

    pub fn string(self) -> UnitBuilder<R, StringKind> {
        UnitBuilder::new(self.parent, self.property)
    }

    pub fn number(self) -> UnitBuilder<R, NumberKind> {
        UnitBuilder::new(self.parent, self.property)
    }

    pub fn collection(self) -> UnitBuilder<R, CollectionKind> {
        UnitBuilder::new(self.parent, self.property)
    }

    pub fn object(self) -> UnitBuilder<R, ObjectKind> {
        UnitBuilder::new(self.parent, self.property)
    }

    #[cfg(feature = "temporal")]
    pub(super) fn into_parts(self) -> (ValidatorBuilder<R>, Option<FieldPath>) {
        (self.parent, self.property)
    }
}
