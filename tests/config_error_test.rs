//! Tests for configuration errors raised while building or applying validators.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{json, Value};
use verdict::{ConfigError, CustomResult, LenientAccessor, Validator};

#[derive(Debug, Serialize)]
struct User {
    name: String,
    age: u32,
}

fn user() -> User {
    User {
        name: "Ann".to_string(),
        age: 30,
    }
}

#[test]
#[rustfmt::skip]
fn test_unknown_property() {
    let validator = Validator::<User>::builder()
        .string("nmae").not_empty().and()
        .build()
        .unwrap();

    let err = validator.validate(&user()).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::UnknownProperty { ref path, ref segment } if path == "nmae" && segment == "nmae"
    ));
}

#[test]
#[rustfmt::skip]
fn test_lenient_accessor_treats_unknown_as_absent() {
    let validator = Validator::<User>::builder()
        .accessor(LenientAccessor)
        .string("nickname").not_empty().and()
        .build()
        .unwrap();

    let errors = validator.validate(&user()).unwrap().into_errors();
    assert_eq!(errors.first().unwrap().code, "notEmpty");
    assert!(errors.first().unwrap().value.is_null());
}

#[test]
#[rustfmt::skip]
fn test_traversal_through_scalar() {
    let validator = Validator::<User>::builder()
        .string("name.first").not_empty().and()
        .build()
        .unwrap();

    let err = validator.validate(&user()).unwrap_err();
    assert!(matches!(err, ConfigError::Unresolvable { .. }));
}

#[test]
#[rustfmt::skip]
fn test_rule_family_type_mismatch() {
    let validator = Validator::<User>::builder()
        .number("name").greater_than(1).and()
        .build()
        .unwrap();

    let err = validator.validate(&user()).unwrap_err();
    match err {
        ConfigError::TypeMismatch {
            property,
            expected,
            found,
        } => {
            assert_eq!(property, "name");
            assert_eq!(expected, "a number");
            assert!(found.contains("string"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
#[rustfmt::skip]
fn test_malformed_path_reported_at_build() {
    let err = Validator::<User>::builder()
        .string("tags[x]").not_empty().and()
        .build()
        .unwrap_err();
    assert!(matches!(err, ConfigError::MalformedPath { .. }));
}

#[test]
#[rustfmt::skip]
fn test_invalid_pattern_reported_at_build() {
    let err = Validator::<User>::builder()
        .string("name").matches("(unclosed").and()
        .build()
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPattern { ref pattern, .. } if pattern == "(unclosed"));
}

#[test]
#[rustfmt::skip]
fn test_custom_fault_propagates() {
    let validator = Validator::<User>::builder()
        .string("name").custom_with_builder(|_, _, _| Err(ConfigError::custom("directory unavailable"))).and()
        .build()
        .unwrap();

    let err = validator.validate(&user()).unwrap_err();
    assert!(matches!(err, ConfigError::Custom(ref message) if message == "directory unavailable"));
}

#[test]
#[rustfmt::skip]
fn test_nested_config_error_propagates() {
    let item = Validator::<Value>::builder()
        .number("qty").greater_than(0).and()
        .build()
        .unwrap();
    let validator = Validator::<Value>::builder()
        .collection("lines").item_validator(item).and()
        .build()
        .unwrap();

    let err = validator
        .validate_value(&json!({"lines": [{"qty": 1}, {"qty": "two"}]}))
        .unwrap_err();
    assert!(matches!(err, ConfigError::TypeMismatch { .. }));
}

#[test]
fn test_root_that_cannot_be_serialized() {
    let validator = Validator::<BTreeMap<(i32, i32), i32>>::builder()
        .custom(|_, _| CustomResult::success())
        .build()
        .unwrap();

    let mut root = BTreeMap::new();
    root.insert((1, 2), 3);
    let err = validator.validate(&root).unwrap_err();
    assert!(matches!(err, ConfigError::Serialization(_)));
}

#[test]
fn test_config_error_display() {
    let err = ConfigError::UnknownProperty {
        path: "address.citty".to_string(),
        segment: "citty".to_string(),
    };
    assert!(err.to_string().contains("citty"));
}
