//! String unit rules.

use super::unit::{StringKind, UnitBuilder};
use crate::rule::{
    Comparison, Email, IsBoolean, IsNumeric, LengthComparison, Matches, NotBlank, NotEmpty,
    NumericKind, Url,
};

impl<R> UnitBuilder<R, StringKind> {
    /// Fails with `notEmpty` for an absent or empty string.
    pub fn not_empty(self) -> Self {
        self.check(NotEmpty)
    }

    /// Fails with `notBlank` for an absent or whitespace-only string.
    pub fn not_blank(self) -> Self {
        self.check(NotBlank)
    }

    pub fn email(self) -> Self {
        self.check(Email)
    }

    pub fn url(self) -> Self {
        self.check(Url)
    }

    /// Fails with `isBoolean` unless the string is present and reads `true`
    /// or `false`.
    pub fn is_boolean(self) -> Self {
        self.check(IsBoolean)
    }

    pub fn is_byte(self) -> Self {
        self.check(IsNumeric::new(NumericKind::Byte))
    }

    pub fn is_short(self) -> Self {
        self.check(IsNumeric::new(NumericKind::Short))
    }

    pub fn is_integer(self) -> Self {
        self.check(IsNumeric::new(NumericKind::Integer))
    }

    pub fn is_long(self) -> Self {
        self.check(IsNumeric::new(NumericKind::Long))
    }

    pub fn is_float(self) -> Self {
        self.check(IsNumeric::new(NumericKind::Float))
    }

    pub fn is_double(self) -> Self {
        self.check(IsNumeric::new(NumericKind::Double))
    }

    /// Requires more than `len` characters.
    pub fn greater_than(self, len: usize) -> Self {
        self.check(LengthComparison::new(Comparison::GreaterThan, len))
    }

    /// Requires at least `len` characters.
    pub fn greater_or_equal(self, len: usize) -> Self {
        self.check(LengthComparison::new(Comparison::GreaterOrEqual, len))
    }

    /// Requires fewer than `len` characters.
    pub fn less_than(self, len: usize) -> Self {
        self.check(LengthComparison::new(Comparison::LessThan, len))
    }

    /// Requires at most `len` characters.
    pub fn less_or_equal(self, len: usize) -> Self {
        self.check(LengthComparison::new(Comparison::LessOrEqual, len))
    }

    /// Requires the whole string to match `pattern`.
    ///
    /// An invalid pattern is reported by
    /// [`build`](crate::ValidatorBuilder::build).
    pub fn matches(self, pattern: &str) -> Self {
        match Matches::new(pattern) {
            Ok(rule) => self.check(rule),
            Err(e) => self.record(e),
        }
    }
}
