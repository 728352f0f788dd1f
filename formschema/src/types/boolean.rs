//! Boolean values.

use super::{typed_builder, Type, TypeKind};
use crate::messages::ErrorMessage;

/// A type accepting exactly `true` or `false`.
#[derive(Clone)]
pub struct BooleanType<M = String> {
    inner: Type<M>,
}

typed_builder!(BooleanType);

impl<M: ErrorMessage> Default for BooleanType<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: ErrorMessage> BooleanType<M> {
    /// Creates a boolean type.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Type::new(TypeKind::Boolean),
        }
    }
}
