//! Numeric values.

use super::{parse_number, typed_builder, Type, TypeKind};
use crate::messages::{ErrorMessage, MessageKey};
use regex::Regex;
use serde_json::Value;

/// A type accepting numbers and text holding a complete decimal numeral.
#[derive(Clone)]
pub struct NumberType<M = String> {
    inner: Type<M>,
}

typed_builder!(NumberType);

impl<M: ErrorMessage> Default for NumberType<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: ErrorMessage> NumberType<M> {
    /// Creates a number type.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Type::new(TypeKind::Number),
        }
    }

    fn number_rule<F>(mut self, key: MessageKey, predicate: F) -> Self
    where
        F: Fn(f64) -> bool + Send + Sync + 'static,
    {
        self.inner
            .push_fn_rule(key, move |value, _| parse_number(value).is_some_and(&predicate));
        self
    }

    /// Requires a whole number.
    #[must_use]
    pub fn is_integer(self) -> Self {
        self.number_rule(MessageKey::Integer, |n| n.fract() == 0.0)
    }

    /// Requires the number to be at least `min`.
    #[must_use]
    pub fn min(self, min: f64) -> Self {
        self.number_rule(MessageKey::Min { min }, move |n| n >= min)
    }

    /// Requires the number to be at most `max`.
    #[must_use]
    pub fn max(self, max: f64) -> Self {
        self.number_rule(MessageKey::Max { max }, move |n| n <= max)
    }

    /// Requires the number to lie within `min..=max`.
    #[must_use]
    pub fn range(self, min: f64, max: f64) -> Self {
        self.number_rule(MessageKey::Range { min, max }, move |n| (min..=max).contains(&n))
    }

    /// Requires the number to equal one of `values`.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_one_of(self, values: impl IntoIterator<Item = f64>) -> Self {
        let values: Vec<f64> = values.into_iter().collect();
        let key = MessageKey::OneOf {
            values: values
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", "),
        };
        self.number_rule(key, move |n| values.iter().any(|allowed| *allowed == n))
    }

    /// Requires the textual form of the value to match a pattern.
    #[must_use]
    pub fn pattern(mut self, pattern: Regex) -> Self {
        self.inner.push_fn_rule(MessageKey::Pattern, move |value, _| match value {
            Value::String(text) => pattern.is_match(text),
            other => pattern.is_match(&other.to_string()),
        });
        self
    }
}
