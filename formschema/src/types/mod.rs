//! Types: reusable validators for one value.
//!
//! A [`Type`] is a kind check followed by an ordered chain of rules. The
//! typed builders ([`StringType`], [`NumberType`], ...) add kind-specific
//! rules and convert into `Type` when placed in a [`Schema`](crate::Schema).
//!
//! Checking a value runs through these steps:
//!
//! 1. A missing or `null` value fails if the type is required and passes
//!    otherwise. An empty string passes on types that are not required.
//! 2. The kind check runs, recursing into item types and nested schemas.
//! 3. Rules run in registration order. The first failing rule decides the
//!    result and later rules never run.
//!
//! A rule that returns a future suspends the check; the rules after it run
//! only once it resolves.

mod array;
mod boolean;
mod date;
mod kind;
mod mixed;
mod number;
mod object;
mod string;

pub use array::ArrayType;
pub use boolean::BooleanType;
pub use date::DateType;
pub use kind::{parse_date, parse_number, Kind};
pub use mixed::MixedType;
pub use number::NumberType;
pub use object::ObjectType;
pub use string::StringType;

use crate::core::{is_absent, is_empty_text, CheckResult, Checked, IntoRuleOutcome, Record, RuleOutcome, RuleResult};
use crate::errors::CheckError;
use crate::messages::{ErrorMessage, MessageKey};
use crate::rules::{AsyncFnRule, AsyncRule, AsyncRuleAdapter, Evaluation, FnRule, Rule};
use crate::schema::Schema;
use futures::future::BoxFuture;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// The kind tag of a type, with the nested types that composite kinds
/// recurse into.
#[derive(Clone)]
pub enum TypeKind<M = String> {
    /// Accepts any present value.
    Mixed,
    /// Accepts text.
    String,
    /// Accepts numbers and decimal numerals.
    Number,
    /// Accepts booleans.
    Boolean,
    /// Accepts dates.
    Date,
    /// Accepts arrays, checking each item when an item type is set.
    Array(Option<Box<Type<M>>>),
    /// Accepts objects, checking them against a nested schema when set.
    Object(Option<Schema<M>>),
}

impl<M> TypeKind<M> {
    /// Returns the plain kind.
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            Self::Mixed => Kind::Mixed,
            Self::String => Kind::String,
            Self::Number => Kind::Number,
            Self::Boolean => Kind::Boolean,
            Self::Date => Kind::Date,
            Self::Array(_) => Kind::Array,
            Self::Object(_) => Kind::Object,
        }
    }
}

/// A message bound to a rule: either the caller's payload or a default
/// rendered when the rule fails.
#[derive(Debug, Clone)]
pub(crate) enum BoundMessage<M> {
    Custom(M),
    Default(MessageKey),
}

impl<M: ErrorMessage> BoundMessage<M> {
    fn resolve(&self) -> M {
        match self {
            Self::Custom(message) => message.clone(),
            Self::Default(key) => M::from_key(key),
        }
    }
}

#[derive(Clone)]
struct RuleEntry<M> {
    rule: Arc<dyn Rule<M>>,
    message: Option<BoundMessage<M>>,
}

/// A validator for one value: a kind check plus an ordered rule chain.
///
/// Cloning a type copies its chain; the rules themselves are shared.
#[derive(Clone)]
pub struct Type<M = String> {
    kind: TypeKind<M>,
    rules: Vec<RuleEntry<M>>,
    required: bool,
    required_message: Option<M>,
    type_message: Option<M>,
}

impl<M> std::fmt::Debug for Type<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Type")
            .field("kind", &self.kind.kind())
            .field("rules", &self.rules.len())
            .field("required", &self.required)
            .finish()
    }
}

impl<M: ErrorMessage> Type<M> {
    /// Creates a type of the given kind with no rules.
    #[must_use]
    pub fn new(kind: TypeKind<M>) -> Self {
        Self {
            kind,
            rules: Vec::new(),
            required: false,
            required_message: None,
            type_message: None,
        }
    }

    /// Returns the plain kind.
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind.kind()
    }

    /// Returns the kind tag with its nested types.
    #[must_use]
    pub fn type_kind(&self) -> &TypeKind<M> {
        &self.kind
    }

    /// Returns true if missing values are reported as errors.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Returns the number of rules after the kind check.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    pub(crate) fn push_rule(&mut self, rule: Arc<dyn Rule<M>>, message: Option<BoundMessage<M>>) {
        self.rules.push(RuleEntry { rule, message });
    }

    pub(crate) fn push_fn_rule<F>(&mut self, key: MessageKey, predicate: F)
    where
        F: Fn(&Value, &dyn Record) -> bool + Send + Sync + 'static,
    {
        self.push_rule(
            Arc::new(FnRule::new(predicate)),
            Some(BoundMessage::Default(key)),
        );
    }

    pub(crate) fn kind_mut(&mut self) -> &mut TypeKind<M> {
        &mut self.kind
    }

    fn type_message(&self) -> M {
        self.type_message
            .clone()
            .unwrap_or_else(|| M::from_key(&MessageKey::Invalid { kind: self.kind() }))
    }

    fn required_message(&self) -> M {
        self.required_message
            .clone()
            .unwrap_or_else(|| M::from_key(&MessageKey::Required))
    }

    /// Checks a value taken from `record`.
    ///
    /// `value` is `None` when the field is missing. The record is handed to
    /// every rule for cross-field checks.
    pub fn check<'a>(
        &'a self,
        value: Option<&'a Value>,
        record: &'a dyn Record,
    ) -> Checked<'a, CheckResult<M>> {
        let Some(value) = value.filter(|value| !is_absent(Some(value))) else {
            return Checked::done(if self.required {
                CheckResult::error(self.required_message())
            } else {
                CheckResult::valid()
            });
        };
        if !self.required && is_empty_text(value) {
            return Checked::done(CheckResult::valid());
        }

        match self.check_kind(value, record) {
            Checked::Ready(Ok(base)) if base.has_error => Checked::done(base),
            Checked::Ready(Ok(base)) => self.run_rules(0, value, record, base),
            Checked::Ready(Err(error)) => Checked::fault(error),
            Checked::Pending(pending) => Checked::Pending(Box::pin(async move {
                let base = pending.await?;
                if base.has_error {
                    return Ok(base);
                }
                self.run_rules(0, value, record, base).await
            })),
        }
    }

    fn check_kind<'a>(
        &'a self,
        value: &'a Value,
        record: &'a dyn Record,
    ) -> Checked<'a, CheckResult<M>> {
        let matches = match &self.kind {
            TypeKind::Mixed => true,
            TypeKind::String => value.is_string(),
            TypeKind::Number => parse_number(value).is_some(),
            TypeKind::Boolean => value.is_boolean(),
            TypeKind::Date => parse_date(value).is_some(),
            TypeKind::Array(item) => match (value.as_array(), item) {
                (Some(items), Some(item_type)) => {
                    return array::check_items(item_type, items, record);
                }
                (Some(_), None) => true,
                (None, _) => false,
            },
            TypeKind::Object(shape) => match (value.as_object(), shape) {
                (Some(fields), Some(schema)) => return object::check_shape(schema, fields),
                (Some(_), None) => true,
                (None, _) => false,
            },
        };

        if matches {
            Checked::done(CheckResult::valid())
        } else {
            debug!(kind = %self.kind(), "Value rejected by kind check");
            Checked::done(CheckResult::error(self.type_message()))
        }
    }

    fn run_rules<'a>(
        &'a self,
        start: usize,
        value: &'a Value,
        record: &'a dyn Record,
        base: CheckResult<M>,
    ) -> Checked<'a, CheckResult<M>> {
        for (index, entry) in self.rules.iter().enumerate().skip(start) {
            match entry.rule.evaluate(value, record) {
                Evaluation::Ready(result) => match self.settle(index, entry, result) {
                    Ok(None) => {}
                    Ok(Some(failure)) => return Checked::done(failure),
                    Err(error) => return Checked::fault(error),
                },
                Evaluation::Pending(pending) => {
                    return Checked::Pending(Box::pin(async move {
                        if let Some(failure) = self.settle(index, entry, pending.await)? {
                            return Ok(failure);
                        }
                        self.run_rules(index + 1, value, record, base).await
                    }));
                }
            }
        }
        Checked::done(base)
    }

    /// Turns a rule's answer into `Some(failure)`, `None` for a pass, or a
    /// rule fault.
    fn settle(
        &self,
        index: usize,
        entry: &RuleEntry<M>,
        result: RuleResult<M>,
    ) -> Result<Option<CheckResult<M>>, CheckError> {
        let failure = match result {
            Ok(RuleOutcome::Pass) => None,
            Ok(RuleOutcome::Fail(message)) => Some(CheckResult::error(message.unwrap_or_else(
                || {
                    entry
                        .message
                        .as_ref()
                        .map_or_else(|| self.type_message(), BoundMessage::resolve)
                },
            ))),
            Ok(RuleOutcome::Custom(result)) => result.has_error.then_some(result),
            Err(source) => {
                warn!(
                    kind = %self.kind(),
                    rule = index,
                    error = %source,
                    "Validation rule failed to evaluate"
                );
                return Err(CheckError::rule_fault(index, source));
            }
        };
        if failure.is_some() {
            debug!(kind = %self.kind(), rule = index, "Value rejected by rule");
        }
        Ok(failure)
    }
}

/// The chainable surface shared by [`Type`] and the typed builders.
///
/// Every method consumes and returns the builder, so a chain reads
/// top-to-bottom in evaluation order:
///
/// ```rust,ignore
/// let password = StringType::new()
///     .required_with_message("Password is required".to_string())
///     .min_length(8)
///     .add_rule_with_message(
///         |value, _| value.as_str().is_some_and(|s| s != "password"),
///         "Too easy to guess".to_string(),
///     );
/// ```
pub trait TypeBuilder<M: ErrorMessage>: Sized + Into<Type<M>> {
    /// Returns the type being built.
    fn as_type(&self) -> &Type<M>;

    /// Returns the type being built, mutably.
    fn as_type_mut(&mut self) -> &mut Type<M>;

    /// Appends a synchronous rule that falls back to the type's message.
    #[must_use]
    fn add_rule<F, R>(self, on_valid: F) -> Self
    where
        F: Fn(&Value, &dyn Record) -> R + Send + Sync + 'static,
        R: IntoRuleOutcome<M> + 'static,
    {
        self.with_rule(FnRule::new(on_valid), None)
    }

    /// Appends a synchronous rule with its own failure message.
    #[must_use]
    fn add_rule_with_message<F, R>(self, on_valid: F, message: M) -> Self
    where
        F: Fn(&Value, &dyn Record) -> R + Send + Sync + 'static,
        R: IntoRuleOutcome<M> + 'static,
    {
        self.with_rule(FnRule::new(on_valid), Some(message))
    }

    /// Appends a rule that answers through a future.
    #[must_use]
    fn add_async_rule<F, R>(self, on_valid: F) -> Self
    where
        F: for<'a> Fn(&'a Value, &'a dyn Record) -> BoxFuture<'a, R> + Send + Sync + 'static,
        R: IntoRuleOutcome<M> + Send + 'static,
    {
        self.with_rule(AsyncFnRule::new(on_valid), None)
    }

    /// Appends a rule that answers through a future, with its own message.
    #[must_use]
    fn add_async_rule_with_message<F, R>(self, on_valid: F, message: M) -> Self
    where
        F: for<'a> Fn(&'a Value, &'a dyn Record) -> BoxFuture<'a, R> + Send + Sync + 'static,
        R: IntoRuleOutcome<M> + Send + 'static,
    {
        self.with_rule(AsyncFnRule::new(on_valid), Some(message))
    }

    /// Appends any [`Rule`] implementation.
    #[must_use]
    fn with_rule(mut self, rule: impl Rule<M> + 'static, message: Option<M>) -> Self {
        self.as_type_mut()
            .push_rule(Arc::new(rule), message.map(BoundMessage::Custom));
        self
    }

    /// Appends an [`AsyncRule`] implementation.
    #[must_use]
    fn with_async_rule(self, rule: impl AsyncRule<M> + 'static, message: Option<M>) -> Self {
        self.with_rule(AsyncRuleAdapter(rule), message)
    }

    /// Reports missing values as errors with the default message.
    #[must_use]
    fn required(mut self) -> Self {
        self.as_type_mut().required = true;
        self
    }

    /// Reports missing values as errors with the given message.
    #[must_use]
    fn required_with_message(mut self, message: M) -> Self {
        let ty = self.as_type_mut();
        ty.required = true;
        ty.required_message = Some(message);
        self
    }

    /// Replaces the message reported when the kind check fails.
    ///
    /// Rules bound without a message fall back to it as well.
    #[must_use]
    fn with_message(mut self, message: M) -> Self {
        self.as_type_mut().type_message = Some(message);
        self
    }

    /// Replaces the message of the most recently added rule.
    ///
    /// Without rules this sets the kind-check message instead.
    #[must_use]
    fn rule_message(mut self, message: M) -> Self {
        let ty = self.as_type_mut();
        match ty.rules.last_mut() {
            Some(entry) => entry.message = Some(BoundMessage::Custom(message)),
            None => ty.type_message = Some(message),
        }
        self
    }

    /// Requires the value to equal the raw value of another field.
    #[must_use]
    fn equal_to(mut self, field: impl Into<String>) -> Self {
        let field = field.into();
        let key = MessageKey::EqualTo {
            field: field.clone(),
        };
        self.as_type_mut()
            .push_fn_rule(key, move |value, record| record.field(&field) == Some(value));
        self
    }

    /// Checks a value without building a schema.
    fn check<'a>(
        &'a self,
        value: Option<&'a Value>,
        record: &'a dyn Record,
    ) -> Checked<'a, CheckResult<M>> {
        self.as_type().check(value, record)
    }
}

impl<M: ErrorMessage> TypeBuilder<M> for Type<M> {
    fn as_type(&self) -> &Type<M> {
        self
    }

    fn as_type_mut(&mut self) -> &mut Type<M> {
        self
    }
}

/// Implements the builder plumbing for a typed wrapper around [`Type`].
macro_rules! typed_builder {
    ($name:ident) => {
        impl<M: $crate::messages::ErrorMessage> $crate::types::TypeBuilder<M> for $name<M> {
            fn as_type(&self) -> &$crate::types::Type<M> {
                &self.inner
            }

            fn as_type_mut(&mut self) -> &mut $crate::types::Type<M> {
                &mut self.inner
            }
        }

        impl<M: $crate::messages::ErrorMessage> From<$name<M>> for $crate::types::Type<M> {
            fn from(builder: $name<M>) -> Self {
                builder.inner
            }
        }

        impl<M: $crate::messages::ErrorMessage> std::fmt::Debug for $name<M> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.inner).finish()
            }
        }
    };
}

pub(crate) use typed_builder;
