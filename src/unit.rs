//! Validation units: ordered rules plus the guards and overlays around them.

use std::fmt;

use serde_json::Value;
use tracing::trace;

use crate::error::{ConfigError, FieldErrors};
use crate::path::FieldPath;
use crate::rule::{describe, Guard, Mapper, Rule};

/// The rules configured for one property, and when they apply.
///
/// Evaluation of `(root, property, value)`:
///
/// 1. the mapper, if any, replaces the resolved value; guards, rules and
///    reported error values all see the mapped value
/// 2. if any `when` guard is false, the unit passes
/// 3. if the `unless` guard is true, the unit passes
/// 4. rules run in order and the first rule that fails decides the unit's
///    failures; later rules are not evaluated
/// 5. a `message` replaces the code of every error the failing rule produced
#[derive(Clone, Default)]
pub struct ValidationUnit {
    rules: Vec<Rule>,
    when: Vec<Guard>,
    unless: Option<Guard>,
    message: Option<String>,
    mapper: Option<Mapper>,
}

impl ValidationUnit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_rule(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    pub fn add_when(&mut self, guard: Guard) {
        self.when.push(guard);
    }

    /// Sets the `unless` guard; a later call replaces an earlier one.
    pub fn set_unless(&mut self, guard: Guard) {
        self.unless = Some(guard);
    }

    pub fn set_message(&mut self, message: String) {
        self.message = Some(message);
    }

    pub fn set_mapper(&mut self, mapper: Mapper) {
        self.mapper = Some(mapper);
    }

    /// Returns true if the unit has no rules, and so can never fail.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Evaluates the unit against a resolved value.
    ///
    /// # Errors
    ///
    /// Propagates the first [`ConfigError`] raised by a rule.
    pub fn evaluate(
        &self,
        root: &Value,
        property: Option<&FieldPath>,
        value: &Value,
    ) -> Result<FieldErrors, ConfigError> {
        let mapped;
        let value = match &self.mapper {
            Some(mapper) => {
                mapped = mapper(value);
                &mapped
            }
            None => value,
        };

        if !self.when.iter().all(|guard| guard(root, value)) {
            trace!(property = %describe(property), "unit skipped by when guard");
            return Ok(FieldErrors::ok());
        }

        if self.unless.as_ref().is_some_and(|guard| guard(root, value)) {
            trace!(property = %describe(property), "unit skipped by unless guard");
            return Ok(FieldErrors::ok());
        }

        for rule in &self.rules {
            let errors = rule.evaluate(root, property, value)?;
            if errors.has_errors() {
                trace!(
                    property = %describe(property),
                    rule = ?rule,
                    errors = errors.len(),
                    "rule failed"
                );
                return Ok(self.overlay(errors));
            }
        }

        Ok(FieldErrors::ok())
    }

    fn overlay(&self, errors: FieldErrors) -> FieldErrors {
        match &self.message {
            Some(message) => errors
                .into_iter()
                .map(|mut error| {
                    error.code = message.clone();
                    error
                })
                .collect(),
            None => errors,
        }
    }
}

impl fmt::Debug for ValidationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationUnit")
            .field("rules", &self.rules)
            .field("when", &self.when.len())
            .field("unless", &self.unless.is_some())
            .field("message", &self.message)
            .field("mapper", &self.mapper.is_some())
            .finish()
    }
}
