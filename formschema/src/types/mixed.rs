//! Values of any kind.

use super::{typed_builder, Type, TypeKind};
use crate::messages::ErrorMessage;

/// A type with no kind check; only its rules and `required` apply.
#[derive(Clone)]
pub struct MixedType<M = String> {
    inner: Type<M>,
}

typed_builder!(MixedType);

impl<M: ErrorMessage> Default for MixedType<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: ErrorMessage> MixedType<M> {
    /// Creates a mixed type.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Type::new(TypeKind::Mixed),
        }
    }
}
