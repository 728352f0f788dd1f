//! Check result types.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The outcome of checking one value.
///
/// A fresh `CheckResult` is produced by every check. Object and array types
/// also attach the per-field or per-item results they were built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResult<M = String> {
    /// Whether the value failed validation.
    pub has_error: bool,

    /// The message describing the failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<M>,

    /// Nested field results for object types with a shape.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<IndexMap<String, CheckResult<M>>>,

    /// Per-item results for array types with an item type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub array: Option<Vec<CheckResult<M>>>,
}

impl<M> Default for CheckResult<M> {
    fn default() -> Self {
        Self::valid()
    }
}

impl<M> CheckResult<M> {
    /// Creates a passing result.
    #[must_use]
    pub fn valid() -> Self {
        Self {
            has_error: false,
            error_message: None,
            object: None,
            array: None,
        }
    }

    /// Creates a failing result with a message.
    #[must_use]
    pub fn error(message: M) -> Self {
        Self {
            has_error: true,
            error_message: Some(message),
            object: None,
            array: None,
        }
    }

    /// Returns true if the value passed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.has_error
    }

    /// Returns the error message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&M> {
        self.error_message.as_ref()
    }

    /// Index of the first failing item for array results.
    #[must_use]
    pub fn first_error_index(&self) -> Option<usize> {
        self.array
            .as_ref()
            .and_then(|items| items.iter().position(|item| item.has_error))
    }

    /// Returns the nested result for a field of an object result.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&CheckResult<M>> {
        self.object.as_ref().and_then(|fields| fields.get(name))
    }
}

impl<M: Clone> CheckResult<M> {
    /// Builds an array result from per-item results.
    ///
    /// The array fails if any item failed and reports the first failing
    /// item's message.
    #[must_use]
    pub fn from_items(items: Vec<CheckResult<M>>) -> Self {
        let first = items.iter().find(|item| item.has_error);
        Self {
            has_error: first.is_some(),
            error_message: first.and_then(|item| item.error_message.clone()),
            object: None,
            array: Some(items),
        }
    }

    /// Builds an object result from a nested schema result.
    ///
    /// The object fails iff a nested field failed and reports the first
    /// failing field's message.
    #[must_use]
    pub fn from_fields(fields: SchemaCheckResult<M>) -> Self {
        let error_message = fields
            .errors()
            .next()
            .and_then(|(_, result)| result.error_message.clone());
        Self {
            has_error: fields.has_error,
            error_message,
            object: Some(fields.fields),
            array: None,
        }
    }
}

/// The outcome of checking a whole record against a schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaCheckResult<M = String> {
    /// True iff any field failed.
    pub has_error: bool,

    /// Per-field results in schema declaration order.
    pub fields: IndexMap<String, CheckResult<M>>,
}

impl<M> SchemaCheckResult<M> {
    /// Creates a record result from per-field results.
    #[must_use]
    pub fn new(fields: IndexMap<String, CheckResult<M>>) -> Self {
        let has_error = fields.values().any(|result| result.has_error);
        Self { has_error, fields }
    }

    /// Returns the result for a field.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&CheckResult<M>> {
        self.fields.get(field)
    }

    /// Iterates over the failing fields in declaration order.
    pub fn errors(&self) -> impl Iterator<Item = (&String, &CheckResult<M>)> {
        self.fields.iter().filter(|(_, result)| result.has_error)
    }

    /// Returns the number of failing fields.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    /// Returns true if every field passed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.has_error
    }
}
