//! Numeric unit rules.

use super::unit::{NumberKind, UnitBuilder};
use crate::rule::{Comparison, IntoBound, NumberComparison};

impl<R> UnitBuilder<R, NumberKind> {
    pub fn greater_than(self, bound: impl IntoBound) -> Self {
        self.check(NumberComparison::new(Comparison::GreaterThan, bound))
    }

    pub fn greater_or_equal(self, bound: impl IntoBound) -> Self {
        self.check(NumberComparison::new(Comparison::GreaterOrEqual, bound))
    }

    pub fn less_than(self, bound: impl IntoBound) -> Self {
        self.check(NumberComparison::new(Comparison::LessThan, bound))
    }

    pub fn less_or_equal(self, bound: impl IntoBound) -> Self {
        self.check(NumberComparison::new(Comparison::LessOrEqual, bound))
    }
}
