//! Path-based invocation over a [`Registry`].

use crate::{address::Address, bundle::Bundle, point::ExtensionPoint, registry::Registry};
use lazy_static::lazy_static;
use std::sync::Arc;
use xtpoint_core::{Args, Object, Outcome, Value, XtError};

lazy_static! {
    static ref GLOBAL: Dispatcher = Dispatcher::new();
}

/// The entry point plugins are registered through and invoked by.
///
/// A `Dispatcher` is a cheap, clonable handle over a shared [`Registry`].
/// Use [`Dispatcher::new`] for an isolated instance (tests, embedding) or
/// [`Dispatcher::global`] for the process-wide one, which lives until the
/// process exits.
///
/// Every invocation form takes an optional context first, then a dotted
/// path (see [`Address`]), then the arguments:
///
/// ```rust,ignore
/// let ext = Dispatcher::new();
/// ext.point("canada.hockey").extend(puck);
///
/// let bundle = ext.invoke(None, "canada.hockey.slapshot", args!["he shoots..."])?;
/// let last = ext.exec(Some(&scoped), "canada.order.exec", args![])?;
/// let two = ext.exec(None, "canada.order.exec#two", args![])?;
/// ```
#[derive(Clone, Default, Debug)]
pub struct Dispatcher {
    registry: Arc<Registry>,
}

impl Dispatcher {
    /// Create a dispatcher over a fresh registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a dispatcher over an existing registry.
    pub fn with_registry(registry: Arc<Registry>) -> Self {
        Self { registry }
    }

    /// The process-wide dispatcher.
    pub fn global() -> &'static Dispatcher {
        &GLOBAL
    }

    /// The underlying registry.
    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    /// The point with this name, created on first reference.
    pub fn point(&self, name: &str) -> ExtensionPoint {
        self.registry.point(name)
    }

    /// Every point name referenced so far, in first-reference order.
    pub fn keys(&self) -> Vec<String> {
        self.registry.keys()
    }

    /// Fan-out shorthand: `invoke(ctx, "point.method", args)` is
    /// `point("point").invoke(ctx, "method", args)`.
    pub fn invoke(
        &self,
        ctx: Option<&Object>,
        path: &str,
        args: Args,
    ) -> Result<Bundle, XtError> {
        let address = Address::parse(path)?.without_id()?;
        let method = address.method()?;
        self.point(address.point()).invoke(ctx, method, args)
    }

    /// Fan-out, then await every result concurrently (order preserved).
    pub async fn invoke_async(
        &self,
        ctx: Option<&Object>,
        path: &str,
        args: Args,
    ) -> Result<Vec<Value>, XtError> {
        self.invoke(ctx, path, args)?.resolve().await
    }

    /// Batch shorthand: `invoke_all(ctx, "point.m1,m2,...", args)`.
    ///
    /// Methods run left to right against one shared context; only the last
    /// one receives `args`. One result per method name.
    pub fn invoke_all(
        &self,
        ctx: Option<&Object>,
        path: &str,
        args: Args,
    ) -> Result<Vec<Outcome>, XtError> {
        let address = Address::parse(path)?.without_id()?;
        self.point(address.point())
            .invoke_methods(ctx, address.methods(), args)
    }

    /// Fold shorthand. With an `#id` suffix, calls only that plugin and
    /// returns its raw result.
    pub fn exec(
        &self,
        ctx: Option<&Object>,
        path: &str,
        args: Args,
    ) -> Result<Outcome, XtError> {
        let address = Address::parse(path)?;
        let method = address.method()?;
        let point = self.point(address.point());
        match address.id() {
            Some(id) => point.exec_id(ctx, method, id, args),
            None => point.exec(ctx, method, args),
        }
    }

    /// Awaiting fold shorthand; an `#id` suffix awaits that plugin alone.
    pub async fn exec_async(
        &self,
        ctx: Option<&Object>,
        path: &str,
        args: Args,
    ) -> Result<Value, XtError> {
        let address = Address::parse(path)?;
        let method = address.method()?;
        let point = self.point(address.point());
        match address.id() {
            Some(id) => {
                let outcome = point.exec_id(ctx, method, id, args)?;
                outcome.resolve().await.map_err(|source| {
                    XtError::Rejected(xtpoint_core::PluginError {
                        point: point.name().to_owned(),
                        plugin: id.to_owned(),
                        method: method.to_owned(),
                        source,
                    })
                })
            }
            None => point.exec_async(ctx, method, args).await,
        }
    }
}
