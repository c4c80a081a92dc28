//! Registry of extension points.

use crate::point::ExtensionPoint;
use indexmap::IndexMap;
use std::{
    fmt,
    sync::{PoisonError, RwLock},
};

/// Map from point name to [`ExtensionPoint`], in first-reference order.
///
/// Points are created lazily: referencing an unknown name allocates an
/// empty point. Points are never removed.
#[derive(Default)]
pub struct Registry {
    points: RwLock<IndexMap<String, ExtensionPoint>>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The point with this name, created on first reference.
    pub fn point(&self, name: &str) -> ExtensionPoint {
        if let Some(point) = self.get(name) {
            return point;
        }
        let mut points = self.points.write().unwrap_or_else(PoisonError::into_inner);
        points
            .entry(name.to_owned())
            .or_insert_with(|| {
                debug!(point = %name, "extension point created");
                ExtensionPoint::new(name)
            })
            .clone()
    }

    /// The point with this name, without creating it.
    pub fn get(&self, name: &str) -> Option<ExtensionPoint> {
        self.points
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    /// Every point name ever referenced, in first-reference order.
    pub fn keys(&self) -> Vec<String> {
        self.points
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Whether no point has been referenced yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("points", &self.keys())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_are_created_lazily_and_shared() {
        let registry = Registry::new();
        assert!(registry.get("canada.eh").is_none());

        let a = registry.point("canada.eh");
        let b = registry.point("canada.eh");
        a.extend(crate::PluginRecord::builder("igloo"));
        assert_eq!(b.ids(), vec!["igloo"]);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn keys_keep_first_reference_order_without_duplicates() {
        let registry = Registry::new();
        for name in ["b", "a", "b", "c", "a"] {
            registry.point(name);
        }
        assert_eq!(registry.keys(), vec!["b", "a", "c"]);
    }
}
