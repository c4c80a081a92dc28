//! The result of a single plugin method call.

use crate::{deferred::Deferred, error::BoxError, object::Object, value::Value};
use futures::future::BoxFuture;
use std::{fmt, future::Future};

/// A future produced by an asynchronous plugin method.
pub type PendingValue = BoxFuture<'static, Result<Value, BoxError>>;

/// What a plugin method handed back: a value, or a future of one.
///
/// Fan-out invocation never waits on pending outcomes; the caller decides
/// whether and how to await them (see `Bundle::resolve`).
pub enum Outcome {
    /// The method returned synchronously.
    Ready(Value),
    /// The method returned a future.
    Pending(PendingValue),
}

impl Outcome {
    /// A ready outcome.
    pub fn ready(value: impl Into<Value>) -> Self {
        Outcome::Ready(value.into())
    }

    /// The unset outcome.
    pub fn unit() -> Self {
        Outcome::Ready(Value::Unit)
    }

    /// A pending outcome from any sendable future.
    pub fn pending<F>(fut: F) -> Self
    where
        F: Future<Output = Result<Value, BoxError>> + Send + 'static,
    {
        Outcome::Pending(Box::pin(fut))
    }

    /// Whether the value is available now.
    pub fn is_ready(&self) -> bool {
        matches!(self, Outcome::Ready(_))
    }

    /// Whether the value still has to be awaited.
    pub fn is_pending(&self) -> bool {
        matches!(self, Outcome::Pending(_))
    }

    /// Borrow the ready value.
    pub fn as_ready(&self) -> Option<&Value> {
        match self {
            Outcome::Ready(v) => Some(v),
            Outcome::Pending(_) => None,
        }
    }

    /// Take the ready value.
    pub fn into_ready(self) -> Option<Value> {
        match self {
            Outcome::Ready(v) => Some(v),
            Outcome::Pending(_) => None,
        }
    }

    /// Turn the outcome into a value that can be passed on as an argument.
    ///
    /// A pending outcome becomes a [`Value::Deferred`] sharing its future.
    pub fn into_value(self) -> Value {
        match self {
            Outcome::Ready(v) => v,
            Outcome::Pending(fut) => Value::Deferred(Deferred::new(fut)),
        }
    }

    /// Wait for the value.
    ///
    /// A ready [`Value::Deferred`] is awaited too, so a fold whose last
    /// plugin passed a pending argument through still settles.
    pub async fn resolve(self) -> Result<Value, BoxError> {
        match self {
            Outcome::Ready(Value::Deferred(deferred)) => deferred.resolve().await,
            Outcome::Ready(v) => Ok(v),
            Outcome::Pending(fut) => fut.await,
        }
    }
}

impl Default for Outcome {
    fn default() -> Self {
        Outcome::unit()
    }
}

impl fmt::Debug for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Ready(v) => f.debug_tuple("Ready").field(v).finish(),
            Outcome::Pending(_) => f.write_str("Pending(..)"),
        }
    }
}

impl From<Value> for Outcome {
    fn from(value: Value) -> Self {
        Outcome::Ready(value)
    }
}

/// Conversion of plugin method return types into a call result.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be returned from a plugin method",
    label = "return a `Value`, an `Outcome`, a value convertible into `Value`, or a `Result` of one",
    note = "Use `Outcome::pending(fut)` for asynchronous results."
)]
pub trait IntoOutcome {
    /// Convert into the outcome of one method call.
    fn into_outcome(self) -> Result<Outcome, BoxError>;
}

impl IntoOutcome for Outcome {
    fn into_outcome(self) -> Result<Outcome, BoxError> {
        Ok(self)
    }
}

impl<T, E> IntoOutcome for Result<T, E>
where
    T: IntoOutcome,
    E: Into<BoxError>,
{
    fn into_outcome(self) -> Result<Outcome, BoxError> {
        match self {
            Ok(value) => value.into_outcome(),
            Err(err) => Err(err.into()),
        }
    }
}

macro_rules! impl_into_outcome_via_value {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl IntoOutcome for $ty {
                fn into_outcome(self) -> Result<Outcome, BoxError> {
                    Ok(Outcome::Ready(Value::from(self)))
                }
            }
        )+
    };
}

impl_into_outcome_via_value!(
    Value,
    (),
    bool,
    i64,
    i32,
    f64,
    String,
    &'static str,
    Vec<Value>,
    Object,
    Deferred,
);
