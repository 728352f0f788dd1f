//! Field access on the record being checked.

use indexmap::IndexMap;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Read access to the fields of a record.
///
/// Rules receive the whole record so they can compare a value against other
/// fields. A missing field and an explicit `null` are both absent.
pub trait Record: Send + Sync {
    /// Returns the raw value of a field.
    fn field(&self, name: &str) -> Option<&Value>;
}

/// A record with no fields, for checking standalone values.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRecord;

impl Record for NoRecord {
    fn field(&self, _name: &str) -> Option<&Value> {
        None
    }
}

impl Record for Value {
    fn field(&self, name: &str) -> Option<&Value> {
        self.as_object().and_then(|map| map.get(name))
    }
}

impl Record for Map<String, Value> {
    fn field(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl<S: BuildHasher + Send + Sync> Record for HashMap<String, Value, S> {
    fn field(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl Record for BTreeMap<String, Value> {
    fn field(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl<S: BuildHasher + Send + Sync> Record for IndexMap<String, Value, S> {
    fn field(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

/// Returns true if the value is missing or `null`.
#[must_use]
pub fn is_absent(value: Option<&Value>) -> bool {
    value.map_or(true, Value::is_null)
}

/// Returns true for the empty string, which optional types skip.
#[must_use]
pub fn is_empty_text(value: &Value) -> bool {
    value.as_str().is_some_and(str::is_empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_record() {
        let record = json!({"name": "ada", "age": 36});
        assert_eq!(record.field("name"), Some(&json!("ada")));
        assert_eq!(record.field("missing"), None);

        let not_an_object = json!([1, 2]);
        assert_eq!(not_an_object.field("0"), None);
    }

    #[test]
    fn test_map_records() {
        let mut hash = HashMap::new();
        hash.insert("a".to_string(), json!(1));
        assert_eq!(hash.field("a"), Some(&json!(1)));

        let mut btree = BTreeMap::new();
        btree.insert("b".to_string(), json!(2));
        assert_eq!(btree.field("b"), Some(&json!(2)));

        let mut ordered = IndexMap::new();
        ordered.insert("c".to_string(), json!(3));
        assert_eq!(Record::field(&ordered, "c"), Some(&json!(3)));

        assert_eq!(NoRecord.field("anything"), None);
    }

    #[test]
    fn test_absence() {
        assert!(is_absent(None));
        assert!(is_absent(Some(&Value::Null)));
        assert!(!is_absent(Some(&json!(""))));
        assert!(!is_absent(Some(&json!(0))));
        assert!(!is_absent(Some(&json!(false))));
    }

    #[test]
    fn test_empty_text() {
        assert!(is_empty_text(&json!("")));
        assert!(!is_empty_text(&json!(" ")));
        assert!(!is_empty_text(&json!(0)));
    }
}
