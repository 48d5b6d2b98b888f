//! Error types.
//!
//! Two disjoint classes live here: validation failures ([`FieldError`],
//! [`FieldErrors`], and the opt-in [`ValidationError`]) which are ordinary
//! data, and [`ConfigError`], which signals a broken or misapplied validator.

mod config_error;
mod field_error;
mod validation_error;

pub use config_error::ConfigError;
pub(crate) use config_error::value_kind;
pub use field_error::{FieldError, FieldErrors};
pub use validation_error::ValidationError;
