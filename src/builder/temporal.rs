//! Date and time unit rules.

use std::fmt;
use std::marker::PhantomData;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use super::unit::{SelfSelector, UnitBuilder};
use super::ValidatorBuilder;
use crate::rule::{Between, Comparison, TemporalComparison, TemporalValue};

/// Marker for temporal units over `T`.
pub struct TemporalKind<T>(PhantomData<fn() -> T>);

impl<T> fmt::Debug for TemporalKind<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TemporalKind<{}>", std::any::type_name::<T>())
    }
}

impl<R> ValidatorBuilder<R> {
    /// Starts a unit for a temporal property of type `T`.
    pub fn temporal<T: TemporalValue>(self, path: &str) -> UnitBuilder<R, TemporalKind<T>> {
        self.unit(path)
    }

    /// Starts a unit for a [`NaiveDate`] property.
    pub fn date(self, path: &str) -> UnitBuilder<R, TemporalKind<NaiveDate>> {
        self.temporal(path)
    }

    /// Starts a unit for a [`NaiveTime`] property.
    pub fn time(self, path: &str) -> UnitBuilder<R, TemporalKind<NaiveTime>> {
        self.temporal(path)
    }

    /// Starts a unit for a [`NaiveDateTime`] property.
    pub fn local_date_time(self, path: &str) -> UnitBuilder<R, TemporalKind<NaiveDateTime>> {
        self.temporal(path)
    }

    /// Starts a unit for a [`DateTime<Utc>`] property.
    pub fn date_time(self, path: &str) -> UnitBuilder<R, TemporalKind<DateTime<Utc>>> {
        self.temporal(path)
    }
}

impl<R> SelfSelector<R> {
    pub fn temporal<T: TemporalValue>(self) -> UnitBuilder<R, TemporalKind<T>> {
        let (parent, property) = self.into_parts();
        UnitBuilder::new(parent, property)
    }

    pub fn date(self) -> UnitBuilder<R, TemporalKind<NaiveDate>> {
        self.temporal()
    }

    pub fn time(self) -> UnitBuilder<R, TemporalKind<NaiveTime>> {
        self.temporal()
    }

    pub fn local_date_time(self) -> UnitBuilder<R, TemporalKind<NaiveDateTime>> {
        self.temporal()
    }

    pub fn date_time(self) -> UnitBuilder<R, TemporalKind<DateTime<Utc>>> {
        self.temporal()
    }
}

impl<R, T: TemporalValue + Clone> UnitBuilder<R, TemporalKind<T>> {
    pub fn less_than(self, bound: T) -> Self {
        self.check(TemporalComparison::fixed(Comparison::LessThan, bound))
    }

    pub fn less_or_equal(self, bound: T) -> Self {
        self.check(TemporalComparison::fixed(Comparison::LessOrEqual, bound))
    }

    pub fn greater_than(self, bound: T) -> Self {
        self.check(TemporalComparison::fixed(Comparison::GreaterThan, bound))
    }

    pub fn greater_or_equal(self, bound: T) -> Self {
        self.check(TemporalComparison::fixed(Comparison::GreaterOrEqual, bound))
    }

    /// Requires `after < value < before`.
    pub fn between(self, after: T, before: T) -> Self {
        self.check(Between::fixed(after, before))
    }
}

impl<R, T: TemporalValue> UnitBuilder<R, TemporalKind<T>> {
    /// Like [`less_than`](Self::less_than), with the bound produced at check time.
    pub fn less_than_with(self, bound: impl Fn() -> T + Send + Sync + 'static) -> Self {
        self.check(TemporalComparison::supplied(Comparison::LessThan, bound))
    }

    pub fn less_or_equal_with(self, bound: impl Fn() -> T + Send + Sync + 'static) -> Self {
        self.check(TemporalComparison::supplied(Comparison::LessOrEqual, bound))
    }

    pub fn greater_than_with(self, bound: impl Fn() -> T + Send + Sync + 'static) -> Self {
        self.check(TemporalComparison::supplied(Comparison::GreaterThan, bound))
    }

    pub fn greater_or_equal_with(self, bound: impl Fn() -> T + Send + Sync + 'static) -> Self {
        self.check(TemporalComparison::supplied(Comparison::GreaterOrEqual, bound))
    }

    pub fn between_with(
        self,
        after: impl Fn() -> T + Send + Sync + 'static,
        before: impl Fn() -> T + Send + Sync + 'static,
    ) -> Self {
        self.check(Between::supplied(after, before))
    }
}
