//! Number rules.
//!
//! Bounds keep the representation they were given in: an integer bound is
//! compared exactly against integer values and is reported as an integer
//! `criterion`, a float bound as a float.

use std::cmp::Ordering;

use indexmap::IndexMap;
use serde_json::{Number, Value};

use super::{Check, Comparison, Mismatch};

/// A numeric criterion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    /// A signed integer bound.
    Int(i64),
    /// An unsigned integer bound beyond `i64::MAX` or given as unsigned.
    UInt(u64),
    /// A floating point bound.
    Float(f64),
}

impl Bound {
    /// The bound as a JSON value; a non-finite float renders as `null`.
    pub fn to_value(self) -> Value {
        match self {
            Bound::Int(n) => Value::from(n),
            Bound::UInt(n) => Value::from(n),
            Bound::Float(f) => Number::from_f64(f).map_or(Value::Null, Value::Number),
        }
    }

    fn as_i128(self) -> Option<i128> {
        match self {
            Bound::Int(n) => Some(n as i128),
            Bound::UInt(n) => Some(n as i128),
            Bound::Float(_) => None,
        }
    }

    fn as_f64(self) -> f64 {
        match self {
            Bound::Int(n) => n as f64,
            Bound::UInt(n) => n as f64,
            Bound::Float(f) => f,
        }
    }

    /// Orders `number` relative to this bound; `None` when incomparable (NaN bound).
    pub fn compare(self, number: &Number) -> Option<Ordering> {
        let exact = number
            .as_i64()
            .map(i128::from)
            .or_else(|| number.as_u64().map(i128::from));

        match (exact, self.as_i128()) {
            (Some(value), Some(bound)) => Some(value.cmp(&bound)),
            _ => number.as_f64()?.partial_cmp(&self.as_f64()),
        }
    }
}

/// Conversion of Rust numeric types into a [`Bound`].
pub trait IntoBound {
    fn into_bound(self) -> Bound;
}

impl IntoBound for Bound {
    fn into_bound(self) -> Bound {
        self
    }
}

macro_rules! into_bound {
    ($variant:ident as $target:ty: $($t:ty),+) => {
        $(
            impl IntoBound for $t {
                fn into_bound(self) -> Bound {
                    Bound::$variant(self as $target)
                }
            }
        )+
    };
}

into_bound!(Int as i64: i8, i16, i32, i64, isize);
into_bound!(UInt as u64: u8, u16, u32, u64, usize);
into_bound!(Float as f64: f32, f64);

/// Compares a number against a [`Bound`].
#[derive(Debug, Clone, Copy)]
pub struct NumberComparison {
    comparison: Comparison,
    bound: Bound,
}

impl NumberComparison {
    pub fn new(comparison: Comparison, bound: impl IntoBound) -> Self {
        Self {
            comparison,
            bound: bound.into_bound(),
        }
    }
}

impl Check for NumberComparison {
    fn code(&self) -> &str {
        self.comparison.code()
    }

    fn params(&self) -> IndexMap<String, Value> {
        IndexMap::from([("criterion".to_string(), self.bound.to_value())])
    }

    fn is_valid(&self, _root: &Value, value: &Value) -> Result<bool, Mismatch> {
        match value {
            Value::Null => Ok(true),
            Value::Number(n) => {
                let ordering = self.bound.compare(n);
                Ok(ordering.is_some_and(|ordering| self.comparison.accepts(ordering)))
            }
            other => Err(Mismatch::new("a number", other)),
        }
    }
}
