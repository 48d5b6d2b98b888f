//! # Verdict
//!
//! A declarative object validation engine that reports failures as data.
//!
//! ## Overview
//!
//! A [`Validator`] is assembled once with a fluent builder and then applied to
//! any number of values. Validation never stops at the first broken property:
//! every failure is collected, in registration order, into [`FieldErrors`].
//! Each [`FieldError`] names the field that failed (composed into paths like
//! `employees[2].address.city` across nested validators), a machine-readable
//! code, the offending value and the rule's parameters.
//!
//! Validation failures are data, not errors. The `Err` side of
//! [`Validator::validate`] is reserved for [`ConfigError`]: a mistyped
//! property path, a rule family applied to a value of the wrong kind, or a
//! failing custom callback.
//!
//! ## Core Types
//!
//! - [`Validator`]: An immutable, shareable, thread-safe validator
//! - [`ValidatorBuilder`]: Fluent construction of validators
//! - [`ValidationResult`]: The validated root together with its failures
//! - [`FieldError`] / [`FieldErrors`]: Reported failures
//! - [`FieldPath`]: Property paths such as `tags[1].en`
//! - [`CustomResult`]: The outcome of a custom rule callback
//! - [`ValidatorRegistry`]: Named validators shared between parents
//!
//! ## Example
//!
//! ```rust
//! use serde::Serialize;
//! use verdict::Validator;
//!
//! #[derive(Serialize)]
//! struct Car {
//!     name: String,
//!     power: u32,
//! }
//!
//! let validator = Validator::<Car>::builder()
//!     .string("name").not_empty().and()
//!     .number("power").greater_than(50).and()
//!     .build()
//!     .unwrap();
//!
//! let car = Car { name: String::new(), power: 10 };
//! let result = validator.validate(&car).unwrap();
//!
//! assert!(result.has_errors());
//! assert_eq!(result.errors().len(), 2);
//! assert_eq!(result.errors().first().unwrap().to_string(), "name: notEmpty (value: \"\")");
//! ```
//!
//! ## Feature flags
//!
//! - `temporal` (default): date and time rules backed by `chrono`

pub mod accessor;
pub mod builder;
pub mod error;
pub mod path;
pub mod registry;
pub mod rule;
pub mod unit;
pub mod validator;

pub use accessor::{LenientAccessor, PropertyAccessor, StrictAccessor};
pub use builder::{SelfSelector, UnitBuilder, ValidatorBuilder};
pub use error::{ConfigError, FieldError, FieldErrors, ValidationError};
pub use path::{FieldPath, PathSegment};
pub use registry::{RegistryError, ValidatorRegistry};
pub use rule::{Check, CustomResult, Rule};
pub use validator::{ValidationResult, Validator};
