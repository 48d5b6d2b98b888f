//! Collection rules. Collections are JSON arrays.

use indexmap::IndexMap;
use serde_json::Value;

use super::{Check, Comparison, Mismatch};

fn as_array(value: &Value) -> Result<Option<&Vec<Value>>, Mismatch> {
    match value {
        Value::Null => Ok(None),
        Value::Array(items) => Ok(Some(items)),
        other => Err(Mismatch::new("a collection", other)),
    }
}

/// Fails with `notEmpty` for an absent or empty collection.
#[derive(Debug, Clone, Copy, Default)]
pub struct CollectionNotEmpty;

impl Check for CollectionNotEmpty {
    fn code(&self) -> &str {
        "notEmpty"
    }

    fn is_valid(&self, _root: &Value, value: &Value) -> Result<bool, Mismatch> {
        Ok(as_array(value)?.is_some_and(|items| !items.is_empty()))
    }
}

/// Compares the number of items against a criterion.
#[derive(Debug, Clone, Copy)]
pub struct SizeComparison {
    comparison: Comparison,
    criterion: usize,
}

impl SizeComparison {
    pub fn new(comparison: Comparison, criterion: usize) -> Self {
        Self {
            comparison,
            criterion,
        }
    }
}

impl Check for SizeComparison {
    fn code(&self) -> &str {
        self.comparison.code()
    }

    fn params(&self) -> IndexMap<String, Value> {
        IndexMap::from([("criterion".to_string(), Value::from(self.criterion))])
    }

    fn is_valid(&self, _root: &Value, value: &Value) -> Result<bool, Mismatch> {
        match as_array(value)? {
            Some(items) => Ok(self.comparison.accepts(items.len().cmp(&self.criterion))),
            None => Ok(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_not_empty() {
        let root = Value::Null;
        assert!(CollectionNotEmpty.is_valid(&root, &json!([1])).unwrap());
        assert!(!CollectionNotEmpty.is_valid(&root, &json!([])).unwrap());
        assert!(!CollectionNotEmpty.is_valid(&root, &Value::Null).unwrap());
    }

    #[test]
    fn test_size_comparison() {
        let root = Value::Null;
        let rule = SizeComparison::new(Comparison::GreaterOrEqual, 2);
        assert!(rule.is_valid(&root, &json!([1, 2])).unwrap());
        assert!(!rule.is_valid(&root, &json!([1])).unwrap());
        assert!(rule.is_valid(&root, &Value::Null).unwrap());
        assert_eq!(rule.code(), "greaterOrEqual");
        assert_eq!(rule.params().get("criterion"), Some(&json!(2)));
    }

    #[test]
    fn test_non_array_is_mismatch() {
        let err = CollectionNotEmpty
            .is_valid(&Value::Null, &json!({"a": 1}))
            .unwrap_err();
        assert_eq!(err.expected, "a collection");
        assert_eq!(err.found, "object");
    }
}
