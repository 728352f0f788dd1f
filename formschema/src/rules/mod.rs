//! Rules attached to types.
//!
//! A rule is a predicate over a value and the record it came from. Rules may
//! answer immediately or return a future; the engine treats both uniformly
//! through [`Evaluation`].

use crate::core::{IntoRuleOutcome, Record, RuleResult};
use async_trait::async_trait;
use futures::future::BoxFuture;
use serde_json::Value;
use std::fmt::Debug;
use std::marker::PhantomData;

/// A rule's answer, available now or later.
pub enum Evaluation<'a, M> {
    /// The rule answered synchronously.
    Ready(RuleResult<M>),
    /// The rule is still running.
    Pending(BoxFuture<'a, RuleResult<M>>),
}

/// Trait for rules.
pub trait Rule<M>: Send + Sync {
    /// Evaluates the rule against a present value.
    fn evaluate<'a>(&'a self, value: &'a Value, record: &'a dyn Record) -> Evaluation<'a, M>;
}

/// Trait for asynchronous rules implemented as types.
///
/// Useful for rules that hold a connection or client, such as a uniqueness
/// lookup.
#[async_trait]
pub trait AsyncRule<M: Send>: Send + Sync {
    /// Validates a present value.
    async fn validate(&self, value: &Value, record: &dyn Record) -> RuleResult<M>;
}

/// A synchronous closure rule.
pub struct FnRule<F, R> {
    func: F,
    _output: PhantomData<fn() -> R>,
}

impl<F, R> FnRule<F, R>
where
    F: Fn(&Value, &dyn Record) -> R + Send + Sync,
{
    /// Wraps a closure.
    pub fn new(func: F) -> Self {
        Self {
            func,
            _output: PhantomData,
        }
    }
}

impl<F, R> Debug for FnRule<F, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnRule").finish_non_exhaustive()
    }
}

impl<M, F, R> Rule<M> for FnRule<F, R>
where
    F: Fn(&Value, &dyn Record) -> R + Send + Sync,
    R: IntoRuleOutcome<M>,
{
    fn evaluate<'a>(&'a self, value: &'a Value, record: &'a dyn Record) -> Evaluation<'a, M> {
        Evaluation::Ready((self.func)(value, record).into_rule_result())
    }
}

/// A closure rule returning a boxed future.
///
/// ```rust,ignore
/// let rule = AsyncFnRule::new(|value, _record| Box::pin(async move {
///     lookup(value).await
/// }));
/// ```
pub struct AsyncFnRule<F, R> {
    func: F,
    _output: PhantomData<fn() -> R>,
}

impl<F, R> AsyncFnRule<F, R>
where
    F: for<'a> Fn(&'a Value, &'a dyn Record) -> BoxFuture<'a, R> + Send + Sync,
{
    /// Wraps a closure.
    pub fn new(func: F) -> Self {
        Self {
            func,
            _output: PhantomData,
        }
    }
}

impl<F, R> Debug for AsyncFnRule<F, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AsyncFnRule").finish_non_exhaustive()
    }
}

impl<M, F, R> Rule<M> for AsyncFnRule<F, R>
where
    M: Send,
    F: for<'a> Fn(&'a Value, &'a dyn Record) -> BoxFuture<'a, R> + Send + Sync,
    R: IntoRuleOutcome<M> + Send,
{
    fn evaluate<'a>(&'a self, value: &'a Value, record: &'a dyn Record) -> Evaluation<'a, M> {
        let pending = (self.func)(value, record);
        Evaluation::Pending(Box::pin(async move { pending.await.into_rule_result() }))
    }
}

/// Adapts an [`AsyncRule`] implementation into a [`Rule`].
#[derive(Debug)]
pub struct AsyncRuleAdapter<T>(pub T);

impl<M, T> Rule<M> for AsyncRuleAdapter<T>
where
    M: Send,
    T: AsyncRule<M>,
{
    fn evaluate<'a>(&'a self, value: &'a Value, record: &'a dyn Record) -> Evaluation<'a, M> {
        Evaluation::Pending(self.0.validate(value, record))
    }
}
