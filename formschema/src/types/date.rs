//! Date and time values.

use super::{parse_date, typed_builder, Type, TypeKind};
use crate::messages::{ErrorMessage, MessageKey};
use chrono::{DateTime, Utc};

/// A type accepting dates: RFC 3339 or RFC 2822 strings, plain
/// `YYYY-MM-DD` dates and date-times, or epoch milliseconds.
#[derive(Clone)]
pub struct DateType<M = String> {
    inner: Type<M>,
}

typed_builder!(DateType);

impl<M: ErrorMessage> Default for DateType<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: ErrorMessage> DateType<M> {
    /// Creates a date type.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Type::new(TypeKind::Date),
        }
    }

    fn date_rule<F>(mut self, key: MessageKey, predicate: F) -> Self
    where
        F: Fn(DateTime<Utc>) -> bool + Send + Sync + 'static,
    {
        self.inner
            .push_fn_rule(key, move |value, _| parse_date(value).is_some_and(&predicate));
        self
    }

    /// Rejects dates before `min`.
    #[must_use]
    pub fn min(self, min: DateTime<Utc>) -> Self {
        self.date_rule(MessageKey::DateMin { min }, move |date| date >= min)
    }

    /// Rejects dates after `max`.
    #[must_use]
    pub fn max(self, max: DateTime<Utc>) -> Self {
        self.date_rule(MessageKey::DateMax { max }, move |date| date <= max)
    }

    /// Requires the date to lie within `min..=max`.
    #[must_use]
    pub fn range(self, min: DateTime<Utc>, max: DateTime<Utc>) -> Self {
        self.date_rule(MessageKey::DateRange { min, max }, move |date| {
            (min..=max).contains(&date)
        })
    }
}
