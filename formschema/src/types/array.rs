//! Arrays and their item types.

use super::{typed_builder, Type, TypeKind};
use crate::core::{CheckResult, Checked, Record};
use crate::messages::{ErrorMessage, MessageKey};
use serde_json::Value;
use std::collections::HashSet;

/// A type accepting arrays, optionally checking every item.
#[derive(Clone)]
pub struct ArrayType<M = String> {
    inner: Type<M>,
}

typed_builder!(ArrayType);

impl<M: ErrorMessage> Default for ArrayType<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: ErrorMessage> ArrayType<M> {
    /// Creates an array type that accepts items of any kind.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Type::new(TypeKind::Array(None)),
        }
    }

    /// Checks every item against `item`.
    ///
    /// The array fails if any item fails; per-item results are kept on
    /// [`CheckResult::array`].
    #[must_use]
    pub fn of(mut self, item: impl Into<Type<M>>) -> Self {
        *self.inner.kind_mut() = TypeKind::Array(Some(Box::new(item.into())));
        self
    }

    fn items_rule<F>(mut self, key: MessageKey, predicate: F) -> Self
    where
        F: Fn(&[Value]) -> bool + Send + Sync + 'static,
    {
        self.inner.push_fn_rule(key, move |value, _| {
            value.as_array().is_some_and(|items| predicate(items))
        });
        self
    }

    /// Requires at least `min` items.
    #[must_use]
    pub fn min_length(self, min: usize) -> Self {
        self.items_rule(MessageKey::ArrayMinLength { min }, move |items| {
            items.len() >= min
        })
    }

    /// Allows at most `max` items.
    #[must_use]
    pub fn max_length(self, max: usize) -> Self {
        self.items_rule(MessageKey::ArrayMaxLength { max }, move |items| {
            items.len() <= max
        })
    }

    /// Requires between `min` and `max` items, inclusive.
    #[must_use]
    pub fn range_length(self, min: usize, max: usize) -> Self {
        self.items_rule(MessageKey::ArrayRangeLength { min, max }, move |items| {
            (min..=max).contains(&items.len())
        })
    }

    /// Rejects arrays holding the same item twice.
    ///
    /// Items are compared by their JSON form.
    #[must_use]
    pub fn unrepeatable(self) -> Self {
        self.items_rule(MessageKey::Unrepeatable, |items| {
            let mut seen = HashSet::with_capacity(items.len());
            items.iter().all(|item| seen.insert(item.to_string()))
        })
    }
}

/// Checks items one after another in order.
///
/// An item that suspends delays the items after it; a fault stops the walk
/// and is reported with the item's index.
pub(crate) fn check_items<'a, M: ErrorMessage>(
    item_type: &'a Type<M>,
    items: &'a [Value],
    record: &'a dyn Record,
) -> Checked<'a, CheckResult<M>> {
    collect_items(item_type, items, record, 0, Vec::with_capacity(items.len()))
}

fn collect_items<'a, M: ErrorMessage>(
    item_type: &'a Type<M>,
    items: &'a [Value],
    record: &'a dyn Record,
    start: usize,
    mut results: Vec<CheckResult<M>>,
) -> Checked<'a, CheckResult<M>> {
    for (index, item) in items.iter().enumerate().skip(start) {
        let checked = item_type
            .check(Some(item), record)
            .map_err(move |error| error.within_index(index));
        match checked {
            Checked::Ready(Ok(result)) => results.push(result),
            Checked::Ready(Err(error)) => return Checked::fault(error),
            Checked::Pending(pending) => {
                return Checked::Pending(Box::pin(async move {
                    results.push(pending.await?);
                    collect_items(item_type, items, record, index + 1, results).await
                }));
            }
        }
    }
    Checked::done(CheckResult::from_items(results))
}
