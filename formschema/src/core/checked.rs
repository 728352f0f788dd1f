//! Checks that are either already decided or still waiting on a rule.

use crate::errors::CheckError;
use futures::future::BoxFuture;
use std::future::IntoFuture;

/// The result of a check that may have suspended on an asynchronous rule.
///
/// Checks built only from synchronous rules are `Ready` as soon as the call
/// returns. A check that reaches an asynchronous rule returns `Pending`;
/// nothing is known about it until the future resolves.
///
/// ```rust,ignore
/// let result = schema.check_for_field("email", &record).await?;
/// let result = schema.check_for_field("age", &record).ready()?;
/// ```
pub enum Checked<'a, T> {
    /// The check finished without suspending.
    Ready(Result<T, CheckError>),
    /// The check is waiting on an asynchronous rule.
    Pending(BoxFuture<'a, Result<T, CheckError>>),
}

impl<'a, T: Send + 'a> Checked<'a, T> {
    /// Creates a ready, successful check.
    pub fn done(value: T) -> Self {
        Self::Ready(Ok(value))
    }

    /// Creates a ready check that faulted.
    pub fn fault(error: CheckError) -> Self {
        Self::Ready(Err(error))
    }

    /// Returns true if the check is waiting on an asynchronous rule.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending(_))
    }

    /// Returns the synchronous result.
    ///
    /// A pending check is dropped and reported as [`CheckError::Pending`].
    pub fn ready(self) -> Result<T, CheckError> {
        match self {
            Self::Ready(result) => result,
            Self::Pending(_) => Err(CheckError::Pending),
        }
    }

    /// Waits for the check to finish.
    pub async fn resolve(self) -> Result<T, CheckError> {
        match self {
            Self::Ready(result) => result,
            Self::Pending(future) => future.await,
        }
    }

    /// Transforms the successful value, now or once it resolves.
    pub fn map<U, F>(self, f: F) -> Checked<'a, U>
    where
        U: Send + 'a,
        F: FnOnce(T) -> U + Send + 'a,
    {
        match self {
            Self::Ready(result) => Checked::Ready(result.map(f)),
            Self::Pending(future) => {
                Checked::Pending(Box::pin(async move { future.await.map(f) }))
            }
        }
    }

    /// Transforms the fault, now or once it resolves.
    pub fn map_err<F>(self, f: F) -> Self
    where
        F: FnOnce(CheckError) -> CheckError + Send + 'a,
    {
        match self {
            Self::Ready(result) => Self::Ready(result.map_err(f)),
            Self::Pending(future) => Self::Pending(Box::pin(async move { future.await.map_err(f) })),
        }
    }
}

impl<'a, T: Send + 'a> IntoFuture for Checked<'a, T> {
    type Output = Result<T, CheckError>;
    type IntoFuture = BoxFuture<'a, Result<T, CheckError>>;

    fn into_future(self) -> Self::IntoFuture {
        match self {
            Self::Ready(result) => Box::pin(futures::future::ready(result)),
            Self::Pending(future) => future,
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Checked<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ready(result) => f.debug_tuple("Ready").field(result).finish(),
            Self::Pending(_) => f.write_str("Pending"),
        }
    }
}
