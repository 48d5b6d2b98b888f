//! Validator registry for sharing named validators.
//!
//! This module provides the [`ValidatorRegistry`] type that stores built
//! validators under names so that one validator can be reused as the
//! sub-validator or item validator of many parents, and looked up by name at
//! validation time.

use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use crate::error::{ConfigError, FieldErrors};
use crate::validator::Validator;

/// Type alias for the validator storage map.
type ValidatorMap = Arc<RwLock<HashMap<String, Validator>>>;

/// A thread-safe registry of named validators.
///
/// # Thread Safety
///
/// The registry uses `Arc<RwLock<...>>` for thread-safe access:
/// - Multiple threads can look up and validate concurrently (read-only access)
/// - Registration operations are serialized (write access)
///
/// Clones share the same storage.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use verdict::{Validator, ValidatorRegistry};
///
/// let registry = ValidatorRegistry::new();
///
/// let employee = Validator::<serde_json::Value>::builder()
///     .string("email").email().and()
///     .build()
///     .unwrap();
/// registry.register("Employee", employee).unwrap();
///
/// let company = Validator::<serde_json::Value>::builder()
///     .collection("employees").item_validator(registry.get("Employee").unwrap()).and()
///     .build()
///     .unwrap();
/// registry.register("Company", company).unwrap();
///
/// let errors = registry
///     .validate("Company", &json!({"employees": [{"email": "trololo"}]}))
///     .unwrap();
/// assert_eq!(errors.first().unwrap().field.as_ref().unwrap().to_string(), "employees[0].email");
/// ```
pub struct ValidatorRegistry {
    validators: ValidatorMap,
}

impl ValidatorRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self {
            validators: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Registers a validator under `name`.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateName` if the name is already registered.
    pub fn register<R>(
        &self,
        name: impl Into<String>,
        validator: Validator<R>,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        let mut validators = self.validators.write();

        if validators.contains_key(&name) {
            return Err(RegistryError::DuplicateName(name));
        }

        debug!(name = %name, bindings = validator.len(), "validator registered");
        validators.insert(name, validator.erase());
        Ok(())
    }

    /// Retrieves a validator by name.
    ///
    /// Returns `None` if no validator with the given name is registered.
    pub fn get(&self, name: &str) -> Option<Validator> {
        self.validators.read().get(name).cloned()
    }

    /// Retrieves a validator by name, typed over the root type `R`.
    ///
    /// The registry does not record the root type a validator was built for;
    /// the caller asserts it.
    pub fn get_as<R>(&self, name: &str) -> Option<Validator<R>> {
        self.validators.read().get(name).map(|v| v.retype())
    }

    /// Returns true if a validator is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.validators.read().contains_key(name)
    }

    /// Returns the registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.validators.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Validates a value against a named validator.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::ValidatorNotFound` if the name doesn't exist
    /// and `RegistryError::Config` if the validator is misapplied to `value`.
    pub fn validate(&self, name: &str, value: &Value) -> Result<FieldErrors, RegistryError> {
        let validator = self
            .get(name)
            .ok_or_else(|| RegistryError::ValidatorNotFound(name.to_string()))?;

        Ok(validator.validate_value(value)?)
    }
}

impl Default for ValidatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for ValidatorRegistry {
    fn clone(&self) -> Self {
        Self {
            validators: Arc::clone(&self.validators),
        }
    }
}

/// Errors that can occur during registry operations.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Attempted to register a validator with a name that already exists.
    #[error("validator '{0}' already registered")]
    DuplicateName(String),

    /// Attempted to validate with a validator name that doesn't exist.
    #[error("validator '{0}' not found")]
    ValidatorNotFound(String),

    /// The named validator could not be applied to the value.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[rustfmt::skip]
    fn email_validator() -> Validator {
        Validator::<Value>::builder()
            .string("email").not_blank().email().and()
            .build()
            .unwrap()
    }

    #[test]
    fn test_register_and_get() {
        let registry = ValidatorRegistry::new();
        registry.register("User", email_validator()).unwrap();

        assert!(registry.get("User").is_some());
        assert!(registry.get("Unknown").is_none());
        assert!(registry.contains("User"));
    }

    #[test]
    fn test_duplicate_name() {
        let registry = ValidatorRegistry::new();
        registry.register("User", email_validator()).unwrap();

        let err = registry.register("User", email_validator()).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateName(ref name) if name == "User"));
    }

    #[test]
    fn test_validate_not_found() {
        let registry = ValidatorRegistry::new();
        let err = registry.validate("Missing", &json!({})).unwrap_err();
        assert!(matches!(err, RegistryError::ValidatorNotFound(_)));
        assert_eq!(err.to_string(), "validator 'Missing' not found");
    }

    #[test]
    fn test_validate_config_error() {
        let registry = ValidatorRegistry::new();
        registry.register("User", email_validator()).unwrap();

        let err = registry.validate("User", &json!({"email": 5})).unwrap_err();
        assert!(matches!(err, RegistryError::Config(ConfigError::TypeMismatch { .. })));
    }

    #[test]
    fn test_names_sorted() {
        let registry = ValidatorRegistry::new();
        registry.register("b", email_validator()).unwrap();
        registry.register("a", email_validator()).unwrap();
        assert_eq!(registry.names(), vec!["a", "b"]);
    }

    #[test]
    fn test_clone_shares_storage() {
        let registry = ValidatorRegistry::new();
        let clone = registry.clone();
        registry.register("User", email_validator()).unwrap();
        assert!(clone.contains("User"));
    }

    #[test]
    fn test_get_as_typed() {
        #[derive(serde::Serialize)]
        struct User {
            email: String,
        }

        let registry = ValidatorRegistry::new();
        registry.register("User", email_validator()).unwrap();

        let typed = registry.get_as::<User>("User").unwrap();
        let user = User {
            email: "trololo".to_string(),
        };
        let result = typed.validate(&user).unwrap();
        assert_eq!(result.errors().first().unwrap().code, "email");
    }
}
