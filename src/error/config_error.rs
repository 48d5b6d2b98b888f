//! Configuration and programming errors.
//!
//! These are distinct from validation failures: a [`ConfigError`] means the
//! validator itself is wired wrong (a malformed path, a rule family applied to
//! a value of the wrong kind, a failing custom callback). It aborts
//! `validate()` and is never reported as a [`FieldError`](crate::FieldError).

use thiserror::Error;

/// Errors raised when a validator is malformed or misapplied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A property path could not be parsed.
    #[error("malformed property path '{path}': {reason}")]
    MalformedPath { path: String, reason: String },

    /// A property path names a property that does not exist on the value.
    #[error("unknown property '{segment}' in path '{path}'")]
    UnknownProperty { path: String, segment: String },

    /// A property path addresses into a value that cannot be traversed.
    #[error("cannot resolve '{segment}' in path '{path}': value is a {found}")]
    Unresolvable {
        path: String,
        segment: String,
        found: &'static str,
    },

    /// A rule family was applied to a value of a different kind.
    #[error("property '{property}' expected {expected} but found {found}")]
    TypeMismatch {
        property: String,
        expected: &'static str,
        found: String,
    },

    /// An item validator was applied to a value that is not a collection.
    #[error("property '{property}' is not a collection (found {found})")]
    NotACollection {
        property: String,
        found: &'static str,
    },

    /// A `matches` pattern failed to compile.
    #[error("invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// The root value could not be converted into the validation value model.
    #[error("failed to serialize root value: {0}")]
    Serialization(String),

    /// A custom rule callback reported a fault.
    #[error("custom rule failed: {0}")]
    Custom(String),
}

impl ConfigError {
    /// Creates a [`ConfigError::Custom`] for faults raised inside custom rules.
    pub fn custom(message: impl Into<String>) -> Self {
        ConfigError::Custom(message.into())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Serialization(err.to_string())
    }
}

/// Returns the JSON type name for a value.
pub(crate) fn value_kind(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;

    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
