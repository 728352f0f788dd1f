//! Schemas: named field types checked against a record.
//!
//! A [`Schema`] maps field names to [`Type`]s in declaration order. It can
//! check a single field or a whole record; in both cases every rule sees the
//! whole record so cross-field rules such as
//! [`equal_to`](crate::types::TypeBuilder::equal_to) work.

#[cfg(test)]
mod integration_tests;

use crate::core::{CheckResult, Checked, Record, SchemaCheckResult};
use crate::errors::CheckError;
use crate::messages::ErrorMessage;
use crate::types::Type;
use futures::future::join_all;
use indexmap::IndexMap;
use tracing::debug;

/// A set of named field types.
///
/// ```rust,ignore
/// let schema = Schema::new()
///     .field("email", StringType::new().required().is_email())
///     .field("age", NumberType::new().is_integer().min(18.0));
///
/// let result = schema.check(&record).await?;
/// ```
#[derive(Debug, Clone)]
pub struct Schema<M = String> {
    fields: IndexMap<String, Type<M>>,
}

impl<M: ErrorMessage> Default for Schema<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: ErrorMessage> Schema<M> {
    /// Creates an empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fields: IndexMap::new(),
        }
    }

    /// Declares a field, replacing any earlier declaration of the same name.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, ty: impl Into<Type<M>>) -> Self {
        self.fields.insert(name.into(), ty.into());
        self
    }

    /// Field names in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Returns the type declared for a field.
    #[must_use]
    pub fn field_type(&self, name: &str) -> Option<&Type<M>> {
        self.fields.get(name)
    }

    /// Number of declared fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no fields are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Merges schemas into a new one.
    ///
    /// Later schemas win on name collisions; a field keeps the position of
    /// its first appearance. The inputs are left untouched.
    #[must_use]
    pub fn combine<'s>(schemas: impl IntoIterator<Item = &'s Schema<M>>) -> Self {
        let mut fields = IndexMap::new();
        for schema in schemas {
            for (name, ty) in &schema.fields {
                fields.insert(name.clone(), ty.clone());
            }
        }
        Self { fields }
    }

    /// Checks one field of `record`.
    ///
    /// Fails with [`CheckError::UnknownField`] if the schema does not
    /// declare `field`.
    pub fn check_for_field<'a>(
        &'a self,
        field: &str,
        record: &'a dyn Record,
    ) -> Checked<'a, CheckResult<M>> {
        let Some((name, ty)) = self.fields.get_key_value(field) else {
            debug!(field, "Check requested for undeclared field");
            return Checked::fault(CheckError::unknown_field(field));
        };
        ty.check(record.field(name), record)
            .map_err(move |error| error.within_field(name))
    }

    /// Checks every declared field of `record`.
    ///
    /// Fields that answer synchronously are settled first; fields waiting on
    /// asynchronous rules then run concurrently. Record keys the schema does
    /// not declare are ignored.
    pub fn check<'a>(&'a self, record: &'a dyn Record) -> Checked<'a, SchemaCheckResult<M>> {
        let mut settled: Vec<Option<CheckResult<M>>> = Vec::with_capacity(self.fields.len());
        let mut waiting = Vec::new();

        for (index, name) in self.fields.keys().enumerate() {
            match self.check_for_field(name, record) {
                Checked::Ready(Ok(result)) => settled.push(Some(result)),
                Checked::Ready(Err(error)) => return Checked::fault(error),
                Checked::Pending(pending) => {
                    settled.push(None);
                    waiting.push(async move { (index, pending.await) });
                }
            }
        }

        if waiting.is_empty() {
            return Checked::done(self.assemble(settled.into_iter().flatten()));
        }

        debug!(pending = waiting.len(), "Waiting on asynchronous fields");
        Checked::Pending(Box::pin(async move {
            for (index, result) in join_all(waiting).await {
                settled[index] = Some(result?);
            }
            Ok(self.assemble(settled.into_iter().flatten()))
        }))
    }

    fn assemble(&self, results: impl Iterator<Item = CheckResult<M>>) -> SchemaCheckResult<M> {
        let fields: IndexMap<String, CheckResult<M>> =
            self.fields.keys().cloned().zip(results).collect();
        let result = SchemaCheckResult::new(fields);
        debug!(
            fields = result.fields.len(),
            errors = result.error_count(),
            "Schema check finished"
        );
        result
    }
}

impl<M, N, T> FromIterator<(N, T)> for Schema<M>
where
    M: ErrorMessage,
    N: Into<String>,
    T: Into<Type<M>>,
{
    fn from_iter<I: IntoIterator<Item = (N, T)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |schema, (name, ty)| schema.field(name, ty))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{NumberType, StringType, TypeBuilder};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_declaration_order() {
        let schema: Schema = Schema::new()
            .field("b", StringType::new())
            .field("a", NumberType::new())
            .field("c", StringType::new());
        assert_eq!(schema.keys().collect::<Vec<_>>(), vec!["b", "a", "c"]);
        assert_eq!(schema.len(), 3);
    }

    #[test]
    fn test_from_iterator() {
        let schema: Schema = [
            ("name", Type::from(StringType::new().required())),
            ("age", Type::from(NumberType::new())),
        ]
        .into_iter()
        .collect();
        assert!(schema.field_type("name").unwrap().is_required());
        assert!(!schema.field_type("age").unwrap().is_required());
        assert!(schema.field_type("missing").is_none());
    }

    #[test]
    fn test_combine_later_wins() {
        let base: Schema = Schema::new()
            .field("name", StringType::new())
            .field("age", NumberType::new());
        let extra: Schema = Schema::new()
            .field("email", StringType::new().is_email())
            .field("name", StringType::new().required());

        let combined = Schema::combine([&base, &extra]);
        assert_eq!(
            combined.keys().collect::<Vec<_>>(),
            vec!["name", "age", "email"]
        );
        assert!(combined.field_type("name").unwrap().is_required());
        assert!(!base.field_type("name").unwrap().is_required());
        assert_eq!(base.len(), 2);
    }

    #[test]
    fn test_empty_schema() {
        let schema: Schema = Schema::default();
        assert!(schema.is_empty());
        let result = schema.check(&json!({"extra": 1})).ready().unwrap();
        assert!(!result.has_error);
        assert!(result.fields.is_empty());
    }

    #[test]
    fn test_undeclared_record_keys_ignored() {
        let schema: Schema = Schema::new().field("name", StringType::new());
        let result = schema
            .check(&json!({"name": "Ada", "role": 7}))
            .ready()
            .unwrap();
        assert!(result.is_valid());
        assert_eq!(result.fields.keys().collect::<Vec<_>>(), vec!["name"]);
    }
}
