//! Fan-out results.

use futures::future::join_all;
use std::ops::Index;
use xtpoint_core::{Object, Outcome, PluginError, Value, XtError};

/// The ordered result of a fan-out invocation.
///
/// One item per enabled plugin, in execution order. Items may be pending;
/// [`resolve`](Self::resolve) waits for all of them. When the invocation was
/// given a context, the bundle keeps a handle to it, separately from the
/// results.
#[derive(Debug)]
pub struct Bundle {
    point: String,
    method: String,
    ids: Vec<String>,
    items: Vec<Outcome>,
    context: Option<Object>,
}

impl Bundle {
    pub(crate) fn new(
        point: &str,
        method: &str,
        ids: Vec<String>,
        items: Vec<Outcome>,
        context: Option<Object>,
    ) -> Self {
        Self {
            point: point.to_owned(),
            method: method.to_owned(),
            ids,
            items,
            context,
        }
    }

    /// The point that produced the bundle.
    pub fn point(&self) -> &str {
        &self.point
    }

    /// The invoked method.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Ids of the plugins that produced each item, in the same order.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// The per-plugin results.
    pub fn value(&self) -> &[Outcome] {
        &self.items
    }

    /// Take the per-plugin results.
    pub fn into_value(self) -> Vec<Outcome> {
        self.items
    }

    /// The context the invocation was given, if any.
    pub fn context(&self) -> Option<&Object> {
        self.context.as_ref()
    }

    /// Number of results.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no plugin produced a result.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the results.
    pub fn iter(&self) -> std::slice::Iter<'_, Outcome> {
        self.items.iter()
    }

    /// Copies of all results, or `None` if any is still pending.
    pub fn ready_values(&self) -> Option<Vec<Value>> {
        self.items
            .iter()
            .map(|item| item.as_ready().cloned())
            .collect()
    }

    /// Await every result concurrently, preserving order.
    ///
    /// All futures run to completion; the first rejection in plugin order is
    /// reported and the remaining resolutions are discarded.
    pub async fn resolve(self) -> Result<Vec<Value>, XtError> {
        let Bundle {
            point,
            method,
            ids,
            items,
            ..
        } = self;
        debug!(point = %point, method = %method, items = items.len(), "gathering bundle");

        let settled = join_all(items.into_iter().map(Outcome::resolve)).await;
        settled
            .into_iter()
            .zip(ids)
            .map(|(result, plugin)| {
                result.map_err(|source| {
                    XtError::Rejected(PluginError {
                        point: point.clone(),
                        plugin,
                        method: method.clone(),
                        source,
                    })
                })
            })
            .collect()
    }
}

impl Index<usize> for Bundle {
    type Output = Outcome;

    fn index(&self, index: usize) -> &Self::Output {
        &self.items[index]
    }
}

impl IntoIterator for Bundle {
    type Item = Outcome;
    type IntoIter = std::vec::IntoIter<Outcome>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Bundle {
    type Item = &'a Outcome;
    type IntoIter = std::slice::Iter<'a, Outcome>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
