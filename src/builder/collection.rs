//! Collection unit rules.

use super::unit::{CollectionKind, UnitBuilder};
use crate::rule::{CollectionNotEmpty, Comparison, Rule, SizeComparison};
use crate::validator::Validator;

impl<R> UnitBuilder<R, CollectionKind> {
    /// Fails with `notEmpty` for an absent or empty collection.
    pub fn not_empty(self) -> Self {
        self.check(CollectionNotEmpty)
    }

    pub fn greater_than(self, size: usize) -> Self {
        self.check(SizeComparison::new(Comparison::GreaterThan, size))
    }

    pub fn greater_or_equal(self, size: usize) -> Self {
        self.check(SizeComparison::new(Comparison::GreaterOrEqual, size))
    }

    pub fn less_than(self, size: usize) -> Self {
        self.check(SizeComparison::new(Comparison::LessThan, size))
    }

    pub fn less_or_equal(self, size: usize) -> Self {
        self.check(SizeComparison::new(Comparison::LessOrEqual, size))
    }

    /// Validates every item with `validator`.
    ///
    /// Failures of item `i` are reported under `property[i]`, accumulated
    /// across all items. An absent collection passes.
    pub fn item_validator<S>(self, validator: Validator<S>) -> Self {
        self.rule(Rule::Items(validator.erase()))
    }
}

#[cfg(test)]
mod tests {
    use crate::error::{ConfigError, FieldError};
    use crate::path::FieldPath;
    use crate::Validator;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    fn field(p: &str) -> FieldPath {
        FieldPath::parse(p).unwrap()
    }

    #[test]
    #[rustfmt::skip]
    fn test_item_errors_accumulate_with_indexes() {
        let tag = Validator::<Value>::builder()
            .string("en").not_empty().and()
            .build()
            .unwrap();
        let validator = Validator::<Value>::builder()
            .collection("tags").not_empty().item_validator(tag).and()
            .build()
            .unwrap();

        let errors = validator
            .validate_value(&json!({"tags": [{"en": ""}, {"en": "ok"}, {"en": ""}]}))
            .unwrap();

        assert_eq!(
            errors.into_vec(),
            vec![
                FieldError::new("notEmpty").at(field("tags[0].en")).with_value(""),
                FieldError::new("notEmpty").at(field("tags[2].en")).with_value(""),
            ]
        );
    }

    #[test]
    #[rustfmt::skip]
    fn test_empty_collection_stops_before_items() {
        let tag = Validator::<Value>::builder()
            .string("en").not_empty().and()
            .build()
            .unwrap();
        let validator = Validator::<Value>::builder()
            .collection("tags").not_empty().item_validator(tag).and()
            .build()
            .unwrap();

        assert_eq!(
            validator.validate_value(&json!({"tags": []})).unwrap().into_vec(),
            vec![FieldError::new("notEmpty").at(field("tags")).with_value(json!([]))]
        );
    }

    #[test]
    #[rustfmt::skip]
    fn test_size_rules() {
        let validator = Validator::<Value>::builder()
            .collection("seats").less_or_equal(2).and()
            .build()
            .unwrap();

        let errors = validator.validate_value(&json!({"seats": [1, 2, 3]})).unwrap();
        assert_eq!(errors.first().unwrap().code, "lessOrEqual");
        assert_eq!(errors.first().unwrap().params.get("criterion"), Some(&json!(2)));
    }

    #[test]
    #[rustfmt::skip]
    fn test_items_of_root_collection() {
        let item = Validator::<Value>::builder()
            .itself().number().greater_than(0).and()
            .build()
            .unwrap();
        let validator = Validator::<Vec<i32>>::builder()
            .itself().collection().item_validator(item).and()
            .build()
            .unwrap();

        let root = vec![1, 0, 5];
        let errors = validator.validate(&root).unwrap().into_errors();
        assert_eq!(
            errors.into_vec(),
            vec![FieldError::new("greaterThan")
                .at(FieldPath::from_index(1))
                .with_value(0)
                .with_param("criterion", 0)]
        );
    }

    #[test]
    #[rustfmt::skip]
    fn test_item_validator_on_non_collection() {
        let item = Validator::<Value>::builder().build().unwrap();
        let validator = Validator::<Value>::builder()
            .collection("tags").item_validator(item).and()
            .build()
            .unwrap();

        let err = validator.validate_value(&json!({"tags": {"en": "x"}})).unwrap_err();
        assert!(matches!(err, ConfigError::NotACollection { .. }));
    }
}
