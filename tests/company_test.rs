//! Tests for nested validators, item validators and custom rules over a company aggregate.

#![cfg(feature = "temporal")]

use std::sync::Arc;

use chrono::NaiveTime;
use pretty_assertions::assert_eq;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use verdict::{CustomResult, FieldError, FieldPath, Validator};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct Company {
    id: i64,
    name: String,
    employees: Vec<Employee>,
    address: Option<Address>,
    working_hours: Option<WorkingHours>,
}

#[derive(Debug, Clone, Serialize)]
struct Employee {
    id: i64,
    email: String,
    name: String,
    age: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
struct Address {
    city: String,
    location: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WorkingHours {
    from: NaiveTime,
    to: NaiveTime,
}

/// Stands in for a lookup of already registered companies.
struct CompanyDao {
    companies: Vec<(i64, String)>,
}

impl CompanyDao {
    fn is_name_unique(&self, name: &str, id: Option<i64>) -> bool {
        match self
            .companies
            .iter()
            .find(|(_, existing)| existing.eq_ignore_ascii_case(name))
        {
            Some((existing_id, _)) => Some(*existing_id) == id,
            None => true,
        }
    }
}

fn field(path: &str) -> FieldPath {
    FieldPath::parse(path).unwrap()
}

fn hms(h: u32, m: u32, s: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, s).unwrap()
}

fn error(code: &str, path: &str, value: impl Into<Value>) -> FieldError {
    FieldError::new(code).at(field(path)).with_value(value)
}

#[rustfmt::skip]
fn employee_validator() -> Validator<Employee> {
    Validator::<Employee>::builder()
        .number("id").greater_than(0).and()
        .string("email").not_empty().email().and()
        .string("name").not_empty().and()
        .number("age").not_null().greater_or_equal(18).and()
        .build()
        .unwrap()
}

#[rustfmt::skip]
fn working_hours_validator() -> Validator<WorkingHours> {
    Validator::<WorkingHours>::builder()
        .time("from").greater_or_equal(hms(2, 0, 0)).less_or_equal(hms(23, 59, 59)).and()
        .time("to").greater_or_equal(hms(2, 0, 0)).less_or_equal(hms(23, 59, 59)).and()
        .custom(|root, _| match serde_json::from_value::<WorkingHours>(root.clone()) {
            Ok(hours) if hours.from >= hours.to => CustomResult::failure("fromShouldBeBeforeTo"),
            _ => CustomResult::success(),
        })
        .build()
        .unwrap()
}

#[rustfmt::skip]
fn company_validator(dao: Arc<CompanyDao>) -> Validator<Company> {
    Validator::<Company>::builder()
        .string("name").not_empty().custom(move |root, value| {
            let unique = value
                .as_str()
                .map_or(true, |name| dao.is_name_unique(name, root["id"].as_i64()));
            if unique {
                CustomResult::success()
            } else {
                CustomResult::failure("notUnique")
            }
        }).and()
        .collection("employees").not_empty().item_validator(employee_validator()).and()
        .object("workingHours").validator(working_hours_validator()).and()
        .object("address").custom_with_builder(|_, value, builder| {
            let inline = builder
                .string("city").not_empty().and()
                .string("location").not_empty().and()
                .build()?;
            Ok(inline.validate_value(value)?.into())
        }).and()
        .build()
        .unwrap()
}

fn dao() -> Arc<CompanyDao> {
    Arc::new(CompanyDao {
        companies: vec![(2, "Gazprom".to_string())],
    })
}

fn errors_of(company: &Company) -> Vec<FieldError> {
    let result = company_validator(dao()).validate(company).unwrap();
    result.into_errors().into_vec()
}

fn valid_company() -> Company {
    Company {
        id: 1,
        name: "Rosneft".to_string(),
        employees: vec![Employee {
            id: 1,
            email: "ivanov@rosneft.ru".to_string(),
            name: "Ivan".to_string(),
            age: Some(30),
        }],
        address: Some(Address {
            city: "Moscow".to_string(),
            location: "Sofiyskaya nab., 26/1".to_string(),
        }),
        working_hours: Some(WorkingHours {
            from: hms(9, 0, 0),
            to: hms(18, 0, 0),
        }),
    }
}

#[test]
fn test_valid_company() {
    let company = valid_company();
    let result = company_validator(dao()).validate(&company).unwrap();
    assert!(result.is_ok());
}

#[test]
fn test_name_not_unique() {
    let company = Company {
        name: "Gazprom".to_string(),
        ..valid_company()
    };

    assert_eq!(
        errors_of(&company),
        vec![error("notUnique", "name", "Gazprom")]
    );
}

#[test]
fn test_own_name_is_unique() {
    let company = Company {
        id: 2,
        name: "GAZPROM".to_string(),
        ..valid_company()
    };
    assert!(errors_of(&company).is_empty());
}

#[test]
fn test_empty_name_stops_before_custom_rule() {
    let company = Company {
        name: String::new(),
        ..valid_company()
    };

    assert_eq!(errors_of(&company), vec![error("notEmpty", "name", "")]);
}

#[test]
fn test_employee_item_errors() {
    let company = Company {
        employees: vec![
            Employee {
                id: -1,
                email: "pupkin".to_string(),
                name: "Fedor".to_string(),
                age: Some(10),
            },
            Employee {
                id: 1,
                email: "lopatkin@gmail.com".to_string(),
                name: String::new(),
                age: None,
            },
        ],
        ..valid_company()
    };

    assert_eq!(
        errors_of(&company),
        vec![
            error("greaterThan", "employees[0].id", -1).with_param("criterion", 0),
            error("email", "employees[0].email", "pupkin"),
            error("greaterOrEqual", "employees[0].age", 10).with_param("criterion", 18),
            error("notEmpty", "employees[1].name", ""),
            FieldError::new("notNull").at(field("employees[1].age")),
        ]
    );
}

#[test]
fn test_no_employees() {
    let company = Company {
        employees: Vec::new(),
        ..valid_company()
    };

    assert_eq!(
        errors_of(&company),
        vec![error("notEmpty", "employees", json!([]))]
    );
}

#[test]
fn test_working_hours() {
    let company = Company {
        working_hours: Some(WorkingHours {
            from: hms(1, 55, 0),
            to: hms(1, 30, 0),
        }),
        ..valid_company()
    };

    let hours = json!({"from": "01:55:00", "to": "01:30:00"});
    assert_eq!(
        errors_of(&company),
        vec![
            error("greaterOrEqual", "workingHours.from", "01:55:00"),
            error("greaterOrEqual", "workingHours.to", "01:30:00"),
            error("fromShouldBeBeforeTo", "workingHours", hours),
        ]
    );
}

#[test]
fn test_absent_working_hours_pass() {
    let company = Company {
        working_hours: None,
        ..valid_company()
    };
    assert!(errors_of(&company).is_empty());
}

#[test]
fn test_address_inline_validator() {
    let company = Company {
        address: Some(Address {
            city: String::new(),
            location: String::new(),
        }),
        ..valid_company()
    };

    assert_eq!(
        errors_of(&company),
        vec![
            error("notEmpty", "address.city", ""),
            error("notEmpty", "address.location", ""),
        ]
    );
}

#[test]
fn test_everything_wrong_keeps_registration_order() {
    let company = Company {
        id: 1,
        name: "gazprom".to_string(),
        employees: Vec::new(),
        address: Some(Address {
            city: String::new(),
            location: "x".to_string(),
        }),
        working_hours: Some(WorkingHours {
            from: hms(12, 0, 0),
            to: hms(11, 0, 0),
        }),
    };

    let errors = errors_of(&company);
    let fields: Vec<String> = errors
        .iter()
        .map(|e| e.field.as_ref().map_or(String::new(), ToString::to_string))
        .collect();
    let codes: Vec<&str> = errors.iter().map(|e| e.code.as_str()).collect();

    assert_eq!(
        fields,
        vec!["name", "employees", "workingHours", "address.city"]
    );
    assert_eq!(
        codes,
        vec!["notUnique", "notEmpty", "fromShouldBeBeforeTo", "notEmpty"]
    );
}

#[derive(Debug, Serialize)]
struct Family {
    parent: Vec<Parent>,
}

#[derive(Debug, Serialize)]
struct Parent {
    child: Child,
}

#[derive(Debug, Serialize)]
struct Child {
    grandchild: String,
}

#[test]
#[rustfmt::skip]
fn test_deeply_nested_field_path() {
    let child = Validator::<Child>::builder()
        .string("grandchild").not_blank().and()
        .build()
        .unwrap();
    let parent = Validator::<Parent>::builder()
        .object("child").validator(child).and()
        .build()
        .unwrap();
    let family = Validator::<Family>::builder()
        .collection("parent").item_validator(parent).and()
        .build()
        .unwrap();

    let person = |name: &str| Parent {
        child: Child {
            grandchild: name.to_string(),
        },
    };
    let root = Family {
        parent: vec![person("a"), person("b"), person("  ")],
    };

    let errors = family.validate(&root).unwrap().into_errors();
    assert_eq!(errors.len(), 1);

    let error = errors.first().unwrap();
    assert_eq!(error.field.as_ref().unwrap().to_string(), "parent[2].child.grandchild");
    assert_eq!(error.code, "notBlank");
    assert_eq!(error.value, Value::from("  "));
}
