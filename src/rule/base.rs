//! Rules available on every unit kind.

use std::sync::Arc;

use serde_json::Value;

use super::{Check, Mismatch};

/// Predicate over a property value, used by [`EqWith`] and [`NotEqWith`].
pub type ValuePredicate = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// Fails with `notNull` when the value is absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotNull;

impl Check for NotNull {
    fn code(&self) -> &str {
        "notNull"
    }

    fn is_valid(&self, _root: &Value, value: &Value) -> Result<bool, Mismatch> {
        Ok(!value.is_null())
    }
}

/// Fails with `eq` unless the value equals the expected value. Absence passes.
#[derive(Debug, Clone)]
pub struct Eq {
    expected: Value,
}

impl Eq {
    pub fn new(expected: impl Into<Value>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl Check for Eq {
    fn code(&self) -> &str {
        "eq"
    }

    fn is_valid(&self, _root: &Value, value: &Value) -> Result<bool, Mismatch> {
        Ok(value.is_null() || *value == self.expected)
    }
}

/// Fails with `eq` unless the predicate accepts the value.
///
/// The predicate also sees absent values, as `null`.
#[derive(Clone)]
pub struct EqWith {
    predicate: ValuePredicate,
}

impl EqWith {
    pub fn new(predicate: impl Fn(&Value) -> bool + Send + Sync + 'static) -> Self {
        Self {
            predicate: Arc::new(predicate),
        }
    }
}

impl Check for EqWith {
    fn code(&self) -> &str {
        "eq"
    }

    fn is_valid(&self, _root: &Value, value: &Value) -> Result<bool, Mismatch> {
        Ok((self.predicate)(value))
    }
}

/// Fails with `notEq` when the value equals the forbidden value.
#[derive(Debug, Clone)]
pub struct NotEq {
    forbidden: Value,
}

impl NotEq {
    pub fn new(forbidden: impl Into<Value>) -> Self {
        Self {
            forbidden: forbidden.into(),
        }
    }
}

impl Check for NotEq {
    fn code(&self) -> &str {
        "notEq"
    }

    fn is_valid(&self, _root: &Value, value: &Value) -> Result<bool, Mismatch> {
        Ok(value.is_null() || *value != self.forbidden)
    }
}

/// Fails with `notEq` when the predicate reports the value as equal.
#[derive(Clone)]
pub struct NotEqWith {
    is_equal: ValuePredicate,
}

impl NotEqWith {
    pub fn new(is_equal: impl Fn(&Value) -> bool + Send + Sync + 'static) -> Self {
        Self {
            is_equal: Arc::new(is_equal),
        }
    }
}

impl Check for NotEqWith {
    fn code(&self) -> &str {
        "notEq"
    }

    fn is_valid(&self, _root: &Value, value: &Value) -> Result<bool, Mismatch> {
        Ok(!(self.is_equal)(value))
    }
}
