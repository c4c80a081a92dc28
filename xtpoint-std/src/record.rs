//! Plugin registration data.

use std::{collections::HashMap, fmt, sync::Arc};
use xtpoint_core::Method;

/// Registration data for one plugin at one extension point.
///
/// Records are cheap to clone: method tables are shared behind `Arc`.
#[derive(Clone)]
pub struct PluginRecord {
    id: String,
    index: Option<i64>,
    enabled: bool,
    methods: HashMap<String, Arc<dyn Method>>,
}

impl PluginRecord {
    /// Start building a record with the given id.
    pub fn builder(id: impl Into<String>) -> PluginRecordBuilder {
        PluginRecordBuilder {
            record: PluginRecord {
                id: id.into(),
                index: None,
                enabled: true,
                methods: HashMap::new(),
            },
        }
    }

    /// The plugin id, unique within its extension point.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Ordering index; `None` sorts after every indexed plugin.
    pub fn index(&self) -> Option<i64> {
        self.index
    }

    /// Whether the plugin takes part in invocation.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Look up a method by name.
    pub fn method(&self, name: &str) -> Option<&Arc<dyn Method>> {
        self.methods.get(name)
    }

    /// Whether the plugin defines the method.
    pub fn has_method(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    /// Names of all defined methods, sorted.
    pub fn method_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.methods.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub(crate) fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Unset indices sort last; ties are left to the stable sort.
    pub(crate) fn sort_key(&self) -> (bool, i64) {
        (self.index.is_none(), self.index.unwrap_or_default())
    }
}

impl fmt::Debug for PluginRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginRecord")
            .field("id", &self.id)
            .field("index", &self.index)
            .field("enabled", &self.enabled)
            .field("methods", &self.method_names())
            .finish()
    }
}

/// Builder for [`PluginRecord`].
///
/// # Example
/// ```ignore
/// let record = PluginRecord::builder("hot")
///     .index(-100)
///     .method("render", |_this: &Object, _args: Args| "hot")
///     .build();
/// ```
pub struct PluginRecordBuilder {
    record: PluginRecord,
}

impl PluginRecordBuilder {
    /// Set the ordering index (lower = earlier).
    pub fn index(mut self, index: i64) -> Self {
        self.record.index = Some(index);
        self
    }

    /// Set the initial enabled state (default `true`).
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.record.enabled = enabled;
        self
    }

    /// Add a named method. A later method with the same name wins.
    pub fn method<M: Method>(mut self, name: impl Into<String>, method: M) -> Self {
        self.record.methods.insert(name.into(), Arc::new(method));
        self
    }

    /// Add an already shared method.
    pub fn shared_method(mut self, name: impl Into<String>, method: Arc<dyn Method>) -> Self {
        self.record.methods.insert(name.into(), method);
        self
    }

    /// Build the record.
    pub fn build(self) -> PluginRecord {
        self.record
    }
}

impl From<PluginRecordBuilder> for PluginRecord {
    fn from(builder: PluginRecordBuilder) -> Self {
        builder.build()
    }
}
