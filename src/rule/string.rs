//! String rules.
//!
//! Every rule here expects a JSON string. Absence (`null`) passes the format
//! and length rules but fails [`NotEmpty`], [`NotBlank`], [`IsBoolean`] and
//! [`IsNumeric`]. Lengths are counted in Unicode scalar values, not bytes.

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;
use serde_json::Value;

use crate::error::ConfigError;

use super::{Check, Comparison, Mismatch};

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9_!#$%&'*+/=?`{|}~^-]+(?:\.[A-Za-z0-9_!#$%&'*+/=?`{|}~^-]+)*@(?:[a-zA-Z0-9-]+\.)+[a-zA-Z]{2,6}$",
    )
    .expect("email pattern is valid")
});

fn as_str(value: &Value) -> Result<Option<&str>, Mismatch> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        other => Err(Mismatch::new("a string", other)),
    }
}

/// Fails with `notEmpty` for an absent or zero-length string.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotEmpty;

impl Check for NotEmpty {
    fn code(&self) -> &str {
        "notEmpty"
    }

    fn is_valid(&self, _root: &Value, value: &Value) -> Result<bool, Mismatch> {
        Ok(as_str(value)?.is_some_and(|s| !s.is_empty()))
    }
}

/// Fails with `notBlank` for an absent string or one made only of whitespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotBlank;

impl Check for NotBlank {
    fn code(&self) -> &str {
        "notBlank"
    }

    fn is_valid(&self, _root: &Value, value: &Value) -> Result<bool, Mismatch> {
        Ok(as_str(value)?.is_some_and(|s| !s.trim().is_empty()))
    }
}

/// Fails with `email` unless the string looks like a mail address.
#[derive(Debug, Clone, Copy, Default)]
pub struct Email;

impl Check for Email {
    fn code(&self) -> &str {
        "email"
    }

    fn is_valid(&self, _root: &Value, value: &Value) -> Result<bool, Mismatch> {
        Ok(as_str(value)?.map_or(true, |s| EMAIL.is_match(s)))
    }
}

/// Fails with `url` unless the string parses as an absolute URL.
#[derive(Debug, Clone, Copy, Default)]
pub struct Url;

impl Check for Url {
    fn code(&self) -> &str {
        "url"
    }

    fn is_valid(&self, _root: &Value, value: &Value) -> Result<bool, Mismatch> {
        Ok(as_str(value)?.map_or(true, |s| url::Url::parse(s).is_ok()))
    }
}

fn is_boolean_literal(s: &str) -> bool {
    s.eq_ignore_ascii_case("true") || s.eq_ignore_ascii_case("false")
}

/// Fails with `isBoolean` unless the string is `true` or `false`, ignoring case.
/// An absent string fails too.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsBoolean;

impl Check for IsBoolean {
    fn code(&self) -> &str {
        "isBoolean"
    }

    fn is_valid(&self, _root: &Value, value: &Value) -> Result<bool, Mismatch> {
        Ok(as_str(value)?.is_some_and(is_boolean_literal))
    }
}

/// The numeric type a string must parse into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericKind {
    /// 8-bit signed integer, code `isByte`.
    Byte,
    /// 16-bit signed integer, code `isShort`.
    Short,
    /// 32-bit signed integer, code `isInteger`.
    Integer,
    /// 64-bit signed integer, code `isLong`.
    Long,
    /// 32-bit float, code `isFloat`.
    Float,
    /// 64-bit float, code `isDouble`.
    Double,
}

impl NumericKind {
    fn code(self) -> &'static str {
        match self {
            NumericKind::Byte => "isByte",
            NumericKind::Short => "isShort",
            NumericKind::Integer => "isInteger",
            NumericKind::Long => "isLong",
            NumericKind::Float => "isFloat",
            NumericKind::Double => "isDouble",
        }
    }

    fn parses(self, s: &str) -> bool {
        match self {
            NumericKind::Byte => s.parse::<i8>().is_ok(),
            NumericKind::Short => s.parse::<i16>().is_ok(),
            NumericKind::Integer => s.parse::<i32>().is_ok(),
            NumericKind::Long => s.parse::<i64>().is_ok(),
            NumericKind::Float => s.trim().parse::<f32>().is_ok(),
            NumericKind::Double => s.trim().parse::<f64>().is_ok(),
        }
    }
}

/// Fails unless the string is present and parses as the given [`NumericKind`].
#[derive(Debug, Clone, Copy)]
pub struct IsNumeric {
    kind: NumericKind,
}

impl IsNumeric {
    pub fn new(kind: NumericKind) -> Self {
        Self { kind }
    }
}

impl Check for IsNumeric {
    fn code(&self) -> &str {
        self.kind.code()
    }

    fn is_valid(&self, _root: &Value, value: &Value) -> Result<bool, Mismatch> {
        Ok(as_str(value)?.is_some_and(|s| self.kind.parses(s)))
    }
}

/// Compares the string's length against a criterion.
#[derive(Debug, Clone, Copy)]
pub struct LengthComparison {
    comparison: Comparison,
    criterion: usize,
}

impl LengthComparison {
    pub fn new(comparison: Comparison, criterion: usize) -> Self {
        Self {
            comparison,
            criterion,
        }
    }
}

impl Check for LengthComparison {
    fn code(&self) -> &str {
        self.comparison.code()
    }

    fn params(&self) -> IndexMap<String, Value> {
        IndexMap::from([("criterion".to_string(), Value::from(self.criterion))])
    }

    fn is_valid(&self, _root: &Value, value: &Value) -> Result<bool, Mismatch> {
        match as_str(value)? {
            Some(s) => {
                let length = s.chars().count();
                Ok(self.comparison.accepts(length.cmp(&self.criterion)))
            }
            None => Ok(true),
        }
    }
}

/// Fails with `matches` unless the whole string matches a regular expression.
#[derive(Debug, Clone)]
pub struct Matches {
    regex: Regex,
}

impl Matches {
    /// Compiles `pattern`, anchored so that it must match the entire string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPattern`] if the pattern does not compile.
    pub fn new(pattern: &str) -> Result<Self, ConfigError> {
        let regex = Regex::new(&format!("^(?:{})$", pattern)).map_err(|e| {
            ConfigError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            }
        })?;
        Ok(Self { regex })
    }
}

impl Check for Matches {
    fn code(&self) -> &str {
        "matches"
    }

    fn is_valid(&self, _root: &Value, value: &Value) -> Result<bool, Mismatch> {
        Ok(as_str(value)?.map_or(true, |s| self.regex.is_match(s)))
    }
}
