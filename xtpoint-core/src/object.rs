//! # Shared Objects (Invocation Context)
//!
//! An [`Object`] is a property bag with reference identity. Cloning an
//! `Object` clones the handle, not the properties, so every holder observes
//! the same state. This is what makes it usable as an invocation context:
//! the caller passes one in, every plugin method of that call receives the
//! same handle as `this`, and mutations are visible to later plugins and to
//! the caller once the call returns.
//!
//! Objects are also ordinary [`Value`]s (`Value::Object`), so a plugin may
//! take one as an argument, mutate it, and return it.

use crate::value::Value;
use std::{
    collections::BTreeMap,
    fmt,
    sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

/// A shared, mutable property bag with reference identity.
#[derive(Clone, Default)]
pub struct Object {
    props: Arc<RwLock<BTreeMap<String, Value>>>,
}

/// The binding object passed to plugin methods as `this`.
pub type Context = Object;

impl Object {
    /// Create a new empty object.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<String, Value>> {
        self.props.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<String, Value>> {
        self.props.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Get a copy of a property.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.read().get(key).cloned()
    }

    /// Set a property, returning the previous value.
    pub fn set(&self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.write().insert(key.into(), value.into())
    }

    /// Set a property and return the object, for chained construction.
    pub fn with(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Remove a property.
    pub fn remove(&self, key: &str) -> Option<Value> {
        self.write().remove(key)
    }

    /// Whether the property exists.
    pub fn contains_key(&self, key: &str) -> bool {
        self.read().contains_key(key)
    }

    /// Property names, sorted.
    pub fn keys(&self) -> Vec<String> {
        self.read().keys().cloned().collect()
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether the object has no properties.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// A point-in-time copy of all properties.
    pub fn snapshot(&self) -> BTreeMap<String, Value> {
        self.read().clone()
    }

    /// Whether two handles refer to the same object.
    pub fn ptr_eq(&self, other: &Object) -> bool {
        Arc::ptr_eq(&self.props, &other.props)
    }
}

/// Objects compare by identity.
impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Object {
    // Keys only: objects may (indirectly) contain themselves.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Object")
            .field("keys", &self.keys())
            .finish()
    }
}

impl<K, V> FromIterator<(K, V)> for Object
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let props = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            props: Arc::new(RwLock::new(props)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_state() {
        let a = Object::new();
        let b = a.clone();
        b.set("speed", "0-100");
        assert_eq!(a.get("speed"), Some(Value::from("0-100")));
        assert!(a.ptr_eq(&b));
    }

    #[test]
    fn equality_is_identity() {
        let a = Object::from_iter([("wet", false)]);
        let b = Object::from_iter([("wet", false)]);
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
        assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn with_builds_and_remove_drops() {
        let obj = Object::new().with("a", 1).with("b", true);
        assert_eq!(obj.keys(), vec!["a".to_string(), "b".to_string()]);
        assert_eq!(obj.remove("a"), Some(Value::Int(1)));
        assert!(!obj.contains_key("a"));
        assert_eq!(obj.len(), 1);
    }
}
