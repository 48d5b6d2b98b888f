//! Date and time rules, backed by `chrono`.
//!
//! Values are read in the form `chrono`'s serde support writes them:
//! `2024-05-01` for [`NaiveDate`], `10:30:00` for [`NaiveTime`],
//! `2024-05-01T10:30:00` for [`NaiveDateTime`] and RFC 3339 for
//! [`DateTime<Utc>`]. Bounds are suppliers evaluated on every check, so
//! "before now" rules stay current. None of these rules report params.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{Check, Comparison, Mismatch};

/// Produces a temporal bound at check time.
pub type BoundSupplier<T> = Arc<dyn Fn() -> T + Send + Sync>;

/// A temporal type the date/time rules can compare.
pub trait TemporalValue: DeserializeOwned + Ord + Send + Sync + 'static {
    /// Human-readable description of the accepted form.
    const EXPECTED: &'static str;

    /// Reads the value; `null` is absence.
    fn read(value: &Value) -> Result<Option<Self>, Mismatch> {
        match value {
            Value::Null => Ok(None),
            Value::String(s) => serde_json::from_value(value.clone())
                .map(Some)
                .map_err(|_| Mismatch {
                    expected: Self::EXPECTED,
                    found: format!("string {:?}", s),
                }),
            other => Err(Mismatch::new(Self::EXPECTED, other)),
        }
    }
}

impl TemporalValue for NaiveDate {
    const EXPECTED: &'static str = "a date (YYYY-MM-DD)";
}

impl TemporalValue for NaiveTime {
    const EXPECTED: &'static str = "a time (HH:MM:SS)";
}

impl TemporalValue for NaiveDateTime {
    const EXPECTED: &'static str = "a local date-time (YYYY-MM-DDTHH:MM:SS)";
}

impl TemporalValue for DateTime<Utc> {
    const EXPECTED: &'static str = "an RFC 3339 date-time";
}

/// Compares a temporal value against a supplied bound.
pub struct TemporalComparison<T> {
    comparison: Comparison,
    bound: BoundSupplier<T>,
}

impl<T: TemporalValue + Clone> TemporalComparison<T> {
    /// Compares against a fixed bound.
    pub fn fixed(comparison: Comparison, bound: T) -> Self {
        Self::supplied(comparison, move || bound.clone())
    }
}

impl<T: TemporalValue> TemporalComparison<T> {
    /// Compares against a bound produced on every check.
    pub fn supplied(comparison: Comparison, bound: impl Fn() -> T + Send + Sync + 'static) -> Self {
        Self {
            comparison,
            bound: Arc::new(bound),
        }
    }
}

impl<T: TemporalValue> Check for TemporalComparison<T> {
    fn code(&self) -> &str {
        self.comparison.code()
    }

    fn is_valid(&self, _root: &Value, value: &Value) -> Result<bool, Mismatch> {
        Ok(T::read(value)?.map_or(true, |v| self.comparison.accepts(v.cmp(&(self.bound)()))))
    }
}

/// Fails with `between` unless the value lies strictly between two bounds.
pub struct Between<T> {
    after: BoundSupplier<T>,
    before: BoundSupplier<T>,
}

impl<T: TemporalValue + Clone> Between<T> {
    /// Requires `after < value < before`.
    pub fn fixed(after: T, before: T) -> Self {
        Self::supplied(move || after.clone(), move || before.clone())
    }
}

impl<T: TemporalValue> Between<T> {
    pub fn supplied(
        after: impl Fn() -> T + Send + Sync + 'static,
        before: impl Fn() -> T + Send + Sync + 'static,
    ) -> Self {
        Self {
            after: Arc::new(after),
            before: Arc::new(before),
        }
    }
}

impl<T: TemporalValue> Check for Between<T> {
    fn code(&self) -> &str {
        "between"
    }

    fn is_valid(&self, _root: &Value, value: &Value) -> Result<bool, Mismatch> {
        Ok(T::read(value)?.map_or(true, |v| v > (self.after)() && v < (self.before)()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn valid(check: &dyn Check, value: Value) -> bool {
        check.is_valid(&Value::Null, &value).unwrap()
    }

    #[test]
    fn test_date_less_than() {
        let rule = TemporalComparison::fixed(Comparison::LessThan, date(2024, 1, 1));
        assert!(valid(&rule, json!("2023-12-31")));
        assert!(!valid(&rule, json!("2024-01-01")));
        assert!(valid(&rule, Value::Null));
        assert_eq!(rule.code(), "lessThan");
        assert!(rule.params().is_empty());
    }

    #[test]
    fn test_time_greater_or_equal() {
        let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        let rule = TemporalComparison::fixed(Comparison::GreaterOrEqual, nine);
        assert!(valid(&rule, json!("09:00:00")));
        assert!(!valid(&rule, json!("08:59:59")));
    }

    #[test]
    fn test_supplied_bound_is_evaluated_per_check() {
        let rule: TemporalComparison<DateTime<Utc>> =
            TemporalComparison::supplied(Comparison::LessThan, Utc::now);
        assert!(valid(&rule, json!("2000-01-01T00:00:00Z")));
        assert!(!valid(&rule, json!("2999-01-01T00:00:00Z")));
    }

    #[test]
    fn test_between_is_exclusive() {
        let rule = Between::fixed(date(2024, 1, 1), date(2024, 12, 31));
        assert!(valid(&rule, json!("2024-06-15")));
        assert!(!valid(&rule, json!("2024-01-01")));
        assert!(!valid(&rule, json!("2024-12-31")));
        assert!(valid(&rule, Value::Null));
    }

    #[test]
    fn test_utc_date_time() {
        let noon = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let rule = TemporalComparison::fixed(Comparison::GreaterThan, noon);
        assert!(valid(&rule, json!("2024-05-01T12:00:01Z")));
        assert!(!valid(&rule, json!("2024-05-01T11:59:59Z")));
    }

    #[test]
    fn test_malformed_value_is_mismatch() {
        let rule = TemporalComparison::fixed(Comparison::LessThan, date(2024, 1, 1));

        let malformed = json!("2024-13-45");
        let err = rule.is_valid(&Value::Null, &malformed).unwrap_err();
        assert_eq!(err.expected, "a date (YYYY-MM-DD)");
        assert_eq!(err.found, "string \"2024-13-45\"");

        let err = rule.is_valid(&Value::Null, &json!(20240101)).unwrap_err();
        assert_eq!(err.found, "number");
    }
}
