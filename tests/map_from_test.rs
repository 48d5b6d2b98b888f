//! Tests for mapping a property value before guards and rules see it.

use pretty_assertions::assert_eq;
use serde::Serialize;
use serde_json::Value;
use verdict::{FieldError, FieldPath, Validator};

#[derive(Debug, Serialize)]
struct User {
    email: Option<Email>,
}

#[derive(Debug, Serialize)]
struct Email {
    mail: String,
}

impl Email {
    fn new(mail: &str) -> Self {
        Self {
            mail: mail.to_lowercase(),
        }
    }
}

#[rustfmt::skip]
fn user_validator() -> Validator<User> {
    Validator::<User>::builder()
        .string("email")
            .map_from(|email| email.get("mail").cloned().unwrap_or(Value::Null))
            .not_empty()
            .email()
            .when(|_, email| *email != "abc")
            .and()
        .build()
        .unwrap()
}

fn email_field() -> FieldPath {
    FieldPath::from_field("email")
}

fn errors_of(user: &User) -> Vec<FieldError> {
    let result = user_validator().validate(user).unwrap();
    result.into_errors().into_vec()
}

#[test]
fn test_maps_object_to_string() {
    let absent = User { email: None };
    assert_eq!(
        errors_of(&absent),
        vec![FieldError::new("notEmpty").at(email_field())]
    );

    let invalid = User {
        email: Some(Email::new("123")),
    };
    let error = FieldError::new("email").at(email_field());
    assert_eq!(errors_of(&invalid), vec![error.with_value("123")]);

    let valid = User {
        email: Some(Email::new("A@A.RU")),
    };
    assert!(errors_of(&valid).is_empty());
}

#[test]
fn test_maps_before_when() {
    let user = User {
        email: Some(Email::new("ABC")),
    };
    assert!(errors_of(&user).is_empty());
}
