//! Extension points: ordered plugin collections with fan-out and fold.

use crate::{bundle::Bundle, record::PluginRecord};
use std::{
    fmt, mem,
    sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};
use xtpoint_core::{Args, BoxError, Object, Outcome, PluginError, Value, XtError};

struct PointState {
    name: String,
    /// Registration order; replacement keeps a record's slot.
    plugins: RwLock<Vec<PluginRecord>>,
}

/// A named slot that plugins register against.
///
/// `ExtensionPoint` is a shared handle: clones refer to the same point, so
/// a handle obtained from [`Registry::point`](crate::Registry::point) stays
/// live as plugins are added elsewhere.
///
/// # Ordering
///
/// Enabled plugins are enumerated in ascending index order. Plugins with
/// equal indices keep registration order, and plugins without an index come
/// after every indexed plugin, again in registration order. The enumeration
/// is recomputed on every call.
///
/// # Context
///
/// Every invocation takes an optional context. When given, the same object
/// is bound as `this` for every method called during that invocation. When
/// omitted, a fresh empty object plays that role.
#[derive(Clone)]
pub struct ExtensionPoint {
    state: Arc<PointState>,
}

impl ExtensionPoint {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            state: Arc::new(PointState {
                name: name.into(),
                plugins: RwLock::new(Vec::new()),
            }),
        }
    }

    /// The point name.
    pub fn name(&self) -> &str {
        &self.state.name
    }

    fn plugins(&self) -> RwLockReadGuard<'_, Vec<PluginRecord>> {
        self.state
            .plugins
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn plugins_mut(&self) -> RwLockWriteGuard<'_, Vec<PluginRecord>> {
        self.state
            .plugins
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a plugin, replacing any plugin with the same id in place.
    pub fn extend(&self, record: impl Into<PluginRecord>) -> &Self {
        let record = record.into();
        let mut plugins = self.plugins_mut();
        match plugins.iter_mut().find(|p| p.id() == record.id()) {
            Some(slot) => {
                debug!(point = %self.name(), plugin = %record.id(), "plugin replaced");
                *slot = record;
            }
            None => {
                debug!(
                    point = %self.name(),
                    plugin = %record.id(),
                    index = ?record.index(),
                    "plugin registered"
                );
                plugins.push(record);
            }
        }
        self
    }

    /// Enable a plugin. Unknown ids are ignored; returns whether one matched.
    pub fn enable(&self, id: &str) -> bool {
        self.set_enabled(id, true)
    }

    /// Disable a plugin. Unknown ids are ignored; returns whether one matched.
    pub fn disable(&self, id: &str) -> bool {
        self.set_enabled(id, false)
    }

    fn set_enabled(&self, id: &str, enabled: bool) -> bool {
        let mut plugins = self.plugins_mut();
        match plugins.iter_mut().find(|p| p.id() == id) {
            Some(plugin) => {
                plugin.set_enabled(enabled);
                debug!(point = %self.name(), plugin = %id, enabled, "plugin toggled");
                true
            }
            None => {
                warn!(point = %self.name(), plugin = %id, enabled, "toggle of unknown plugin ignored");
                false
            }
        }
    }

    /// Whether a plugin with this id exists and is enabled.
    pub fn is_enabled(&self, id: &str) -> bool {
        self.plugins()
            .iter()
            .any(|p| p.id() == id && p.is_enabled())
    }

    /// A copy of the plugin registered under `id`.
    pub fn plugin(&self, id: &str) -> Option<PluginRecord> {
        self.plugins().iter().find(|p| p.id() == id).cloned()
    }

    /// All plugin ids in registration order.
    pub fn ids(&self) -> Vec<String> {
        self.plugins().iter().map(|p| p.id().to_owned()).collect()
    }

    /// Number of registered plugins, enabled or not.
    pub fn len(&self) -> usize {
        self.plugins().len()
    }

    /// Whether no plugin has been registered.
    pub fn is_empty(&self) -> bool {
        self.plugins().is_empty()
    }

    /// Enabled plugins in execution order.
    ///
    /// The snapshot is taken under the lock and released before any method
    /// runs, so plugins may register or toggle plugins while being invoked.
    pub fn enabled_plugins(&self) -> Vec<PluginRecord> {
        let mut enabled: Vec<PluginRecord> = self
            .plugins()
            .iter()
            .filter(|p| p.is_enabled())
            .cloned()
            .collect();
        enabled.sort_by_key(PluginRecord::sort_key);
        enabled
    }

    /// Fan-out: call `method` on every enabled plugin with the same `args`.
    ///
    /// Results are collected in execution order. Pending results are not
    /// awaited. The first failing method aborts the call and no partial
    /// bundle is returned.
    pub fn invoke(
        &self,
        ctx: Option<&Object>,
        method: &str,
        args: Args,
    ) -> Result<Bundle, XtError> {
        let this = ctx.cloned().unwrap_or_default();
        let (ids, items) = self.fan_out(&this, method, args)?;
        Ok(Bundle::new(self.name(), method, ids, items, ctx.cloned()))
    }

    fn fan_out(
        &self,
        this: &Object,
        method: &str,
        args: Args,
    ) -> Result<(Vec<String>, Vec<Outcome>), XtError> {
        let plugins = self.enabled_plugins();
        debug!(point = %self.name(), method, plugins = plugins.len(), "invoke");

        let mut ids = Vec::with_capacity(plugins.len());
        let mut items = Vec::with_capacity(plugins.len());
        for plugin in &plugins {
            items.push(self.call(plugin, method, this, args.clone())?);
            ids.push(plugin.id().to_owned());
        }
        Ok((ids, items))
    }

    /// Fold: call enabled plugins in order, threading each result into the
    /// next call as its only argument.
    ///
    /// The first plugin receives `args`. The result of the last plugin is
    /// returned, or the unset value when no plugin is enabled. A pending
    /// result is not awaited: the next plugin receives it as a
    /// [`Value::Deferred`]. The first failing method aborts the chain.
    pub fn exec(
        &self,
        ctx: Option<&Object>,
        method: &str,
        args: Args,
    ) -> Result<Outcome, XtError> {
        let this = ctx.cloned().unwrap_or_default();
        let plugins = self.enabled_plugins();
        debug!(point = %self.name(), method, chain = plugins.len(), "exec");

        let mut next_args = Some(args);
        let mut last = Outcome::unit();
        for plugin in &plugins {
            let call_args = next_args
                .take()
                .unwrap_or_else(|| vec![mem::take(&mut last).into_value()]);
            last = self.call(plugin, method, &this, call_args)?;
        }
        Ok(last)
    }

    /// Fold that awaits each plugin's result before threading it onward.
    pub async fn exec_async(
        &self,
        ctx: Option<&Object>,
        method: &str,
        args: Args,
    ) -> Result<Value, XtError> {
        let this = ctx.cloned().unwrap_or_default();
        let plugins = self.enabled_plugins();
        debug!(point = %self.name(), method, chain = plugins.len(), "exec_async");

        let mut next_args = Some(args);
        let mut last = Value::Unit;
        for plugin in &plugins {
            let call_args = next_args.take().unwrap_or_else(|| vec![last.clone()]);
            let outcome = self.call(plugin, method, &this, call_args)?;
            last = outcome
                .resolve()
                .await
                .map_err(|source| XtError::Rejected(self.plugin_error(plugin, method, source)))?;
        }
        Ok(last)
    }

    /// Call `method` on the single plugin `id`, bypassing ordering and
    /// chaining. Unknown or disabled ids yield the unset value.
    pub fn exec_id(
        &self,
        ctx: Option<&Object>,
        method: &str,
        id: &str,
        args: Args,
    ) -> Result<Outcome, XtError> {
        let Some(plugin) = self.plugin(id).filter(PluginRecord::is_enabled) else {
            warn!(point = %self.name(), method, plugin = %id, "no enabled plugin with this id");
            return Ok(Outcome::unit());
        };
        let this = ctx.cloned().unwrap_or_default();
        self.call(&plugin, method, &this, args)
    }

    /// Batch: invoke several methods in order against one shared context.
    ///
    /// Only the last method receives `args`; every earlier method is called
    /// with none. Each method is answered by the first enabled plugin that
    /// defines it, and only that plugin is called. A method no enabled
    /// plugin defines contributes the unset value.
    pub fn invoke_methods<S: AsRef<str>>(
        &self,
        ctx: Option<&Object>,
        methods: &[S],
        args: Args,
    ) -> Result<Vec<Outcome>, XtError> {
        let this = ctx.cloned().unwrap_or_default();
        let plugins = self.enabled_plugins();
        let mut trailing = Some(args);
        let mut results = Vec::with_capacity(methods.len());
        for (i, method) in methods.iter().enumerate() {
            let method = method.as_ref();
            let call_args = if i + 1 == methods.len() {
                trailing.take().unwrap_or_default()
            } else {
                Vec::new()
            };
            let outcome = match plugins.iter().find(|p| p.has_method(method)) {
                Some(plugin) => self.call(plugin, method, &this, call_args)?,
                None => Outcome::unit(),
            };
            results.push(outcome);
        }
        debug!(point = %self.name(), methods = results.len(), "invoke_all");
        Ok(results)
    }

    fn call(
        &self,
        plugin: &PluginRecord,
        method: &str,
        this: &Object,
        args: Args,
    ) -> Result<Outcome, XtError> {
        let Some(func) = plugin.method(method) else {
            return Ok(Outcome::unit());
        };
        func.call(this, args)
            .map_err(|source| XtError::Plugin(self.plugin_error(plugin, method, source)))
    }

    fn plugin_error(
        &self,
        plugin: &PluginRecord,
        method: &str,
        source: BoxError,
    ) -> PluginError {
        PluginError {
            point: self.name().to_owned(),
            plugin: plugin.id().to_owned(),
            method: method.to_owned(),
            source,
        }
    }
}

impl fmt::Debug for ExtensionPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtensionPoint")
            .field("name", &self.name())
            .field("plugins", &*self.plugins())
            .finish()
    }
}
