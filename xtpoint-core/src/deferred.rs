//! Pending results carried as values.
//!
//! A synchronous fold cannot wait for a plugin's future, so it hands the
//! future itself to the next plugin as a [`Value::Deferred`]. The future is
//! shared: any number of holders may await it and all of them observe the
//! same settlement.

use crate::{error::BoxError, outcome::PendingValue, value::Value};
use futures::future::{BoxFuture, FutureExt, Shared};
use std::{error::Error, fmt, sync::Arc};

/// A settled error that can be observed by every holder of a [`Deferred`].
pub type SharedError = Arc<dyn Error + Send + Sync + 'static>;

type SharedPending = Shared<BoxFuture<'static, Result<Value, SharedError>>>;

/// A cloneable handle to a pending plugin result.
#[derive(Clone)]
pub struct Deferred {
    inner: SharedPending,
}

impl Deferred {
    /// Share a pending result.
    pub fn new(fut: PendingValue) -> Self {
        let inner = fut
            .map(|settled| settled.map_err(SharedError::from))
            .boxed()
            .shared();
        Self { inner }
    }

    /// Wait for the value.
    pub async fn resolve(self) -> Result<Value, BoxError> {
        self.inner
            .await
            .map_err(|err| -> BoxError { Box::new(err) })
    }

    /// Whether both handles share the same future.
    pub fn ptr_eq(&self, other: &Deferred) -> bool {
        self.inner.ptr_eq(&other.inner)
    }
}

impl fmt::Debug for Deferred {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Deferred(..)")
    }
}
