//! Objects and their nested schemas.

use super::{typed_builder, Type, TypeKind};
use crate::core::{CheckResult, Checked};
use crate::messages::ErrorMessage;
use crate::schema::Schema;
use serde_json::{Map, Value};

/// A type accepting objects, optionally checking them against a schema.
#[derive(Clone)]
pub struct ObjectType<M = String> {
    inner: Type<M>,
}

typed_builder!(ObjectType);

impl<M: ErrorMessage> Default for ObjectType<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: ErrorMessage> ObjectType<M> {
    /// Creates an object type that accepts any object.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Type::new(TypeKind::Object(None)),
        }
    }

    /// Checks the object's fields against `schema`.
    ///
    /// Nested rules see the object itself as their record.
    #[must_use]
    pub fn shape(mut self, schema: Schema<M>) -> Self {
        *self.inner.kind_mut() = TypeKind::Object(Some(schema));
        self
    }
}

pub(crate) fn check_shape<'a, M: ErrorMessage>(
    schema: &'a Schema<M>,
    fields: &'a Map<String, Value>,
) -> Checked<'a, CheckResult<M>> {
    schema.check(fields).map(CheckResult::from_fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::NoRecord;
    use crate::types::{NumberType, StringType, TypeBuilder};
    use serde_json::json;

    fn address() -> ObjectType {
        ObjectType::new().shape(
            Schema::new()
                .field("street", StringType::new().required())
                .field("zip", NumberType::new().is_integer()),
        )
    }

    #[test]
    fn test_kind_check() {
        let ty: ObjectType = ObjectType::new();
        assert!(!ty.check(Some(&json!({})), &NoRecord).ready().unwrap().has_error);
        let result = ty.check(Some(&json!([])), &NoRecord).ready().unwrap();
        assert_eq!(
            result.error_message.as_deref(),
            Some("Please enter a valid object")
        );
    }

    #[test]
    fn test_shape_reports_nested_fields() {
        let ty = address();
        let value = json!({"zip": 1.5});
        let result = ty.check(Some(&value), &NoRecord).ready().unwrap();

        assert!(result.has_error);
        assert_eq!(
            result.error_message.as_deref(),
            Some("This field is required")
        );
        assert!(result.field("street").unwrap().has_error);
        assert_eq!(
            result.field("zip").unwrap().error_message.as_deref(),
            Some("Must be an integer")
        );
    }

    #[test]
    fn test_valid_shape() {
        let ty = address();
        let value = json!({"street": "1 Main St", "zip": 12345});
        let result = ty.check(Some(&value), &NoRecord).ready().unwrap();
        assert!(!result.has_error);
        assert_eq!(result.error_message, None);
        assert_eq!(result.object.map(|fields| fields.len()), Some(2));
    }
}
