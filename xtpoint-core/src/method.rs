//! # Plugin Methods
//!
//! A plugin is a named set of methods, looked up by string name at call
//! time. Each entry of that capability table implements [`Method`].
//!
//! Plain closures are methods:
//!
//! ```rust,ignore
//! let slapshot = |this: &Object, args: Args| -> Value {
//!     match args.first() {
//!         Some(arg) => format!("{arg}score!").into(),
//!         None => "score!".into(),
//!     }
//! };
//! ```
//!
//! For methods that produce their value asynchronously, return
//! [`Outcome::pending`] or wrap an async closure in [`AsyncMethod`].

use crate::{
    error::BoxError,
    object::Object,
    outcome::{IntoOutcome, Outcome},
    value::{Args, Value},
};
use std::future::Future;

/// One entry in a plugin's method table.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be registered as a plugin method",
    label = "missing `Method` implementation",
    note = "Closures of the form `Fn(&Object, Args) -> impl IntoOutcome` implement `Method`."
)]
pub trait Method: Send + Sync + 'static {
    /// Call the method with `this` bound to the invocation context.
    fn call(&self, this: &Object, args: Args) -> Result<Outcome, BoxError>;
}

impl<F, R> Method for F
where
    F: Fn(&Object, Args) -> R + Send + Sync + 'static,
    R: IntoOutcome,
{
    fn call(&self, this: &Object, args: Args) -> Result<Outcome, BoxError> {
        (self)(this, args).into_outcome()
    }
}

/// Adapts an async closure into a [`Method`] returning a pending outcome.
///
/// The future must be `'static`, so clone `this` into it when needed.
pub struct AsyncMethod<F> {
    func: F,
}

impl<F> AsyncMethod<F> {
    /// Wrap an async closure.
    pub const fn new(func: F) -> Self {
        Self { func }
    }
}

impl<F, Fut> Method for AsyncMethod<F>
where
    F: Fn(Object, Args) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Value, BoxError>> + Send + 'static,
{
    fn call(&self, this: &Object, args: Args) -> Result<Outcome, BoxError> {
        Ok(Outcome::pending((self.func)(this.clone(), args)))
    }
}
