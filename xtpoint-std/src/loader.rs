//! # Loading Units
//!
//! A loadable unit is anything that knows how to register its plugins:
//! it exposes a name and a `bootstrap(dispatcher, di)` entry point. How
//! units are discovered is up to the host; the [`Loader`] only needs a
//! [`ModuleSource`] to enumerate them and, optionally, a glob over unit
//! names to select which ones to load.
//!
//! The `di` argument is an opaque side object forwarded untouched to every
//! unit.
//!
//! With the `inventory` feature, units can be declared anywhere in the
//! program and collected at link time:
//!
//! ```rust,ignore
//! fn bootstrap(ext: &Dispatcher, di: &Di) -> Result<(), BoxError> { ... }
//!
//! xtpoint_std::inventory::submit! {
//!     CollectedUnit::new("canada/bundle", bootstrap)
//! }
//!
//! let loaded = Loader::new().load(&Collected, &ext, &di)?;
//! ```

use crate::dispatcher::Dispatcher;
use globset::{GlobBuilder, GlobMatcher};
use std::any::Any;
use xtpoint_core::{BoxError, LoadError, XtError};

/// The opaque side object handed to every unit.
pub type Di = dyn Any + Send + Sync;

/// Signature of a unit's entry point.
pub type BootstrapFn = fn(&Dispatcher, &Di) -> Result<(), BoxError>;

/// Something that can register plugins into a dispatcher.
pub trait LoadableUnit: Send + Sync {
    /// The unit name, matched against the loader's pattern.
    fn name(&self) -> &str;

    /// Register the unit's plugins.
    fn bootstrap(&self, ext: &Dispatcher, di: &Di) -> Result<(), BoxError>;
}

/// A unit built from a name and a closure.
pub struct FnUnit<F> {
    name: String,
    func: F,
}

impl<F> FnUnit<F>
where
    F: Fn(&Dispatcher, &Di) -> Result<(), BoxError> + Send + Sync,
{
    /// Create a unit.
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }
}

impl<F> LoadableUnit for FnUnit<F>
where
    F: Fn(&Dispatcher, &Di) -> Result<(), BoxError> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn bootstrap(&self, ext: &Dispatcher, di: &Di) -> Result<(), BoxError> {
        (self.func)(ext, di)
    }
}

/// An enumerable collection of loadable units.
pub trait ModuleSource {
    /// The units, in load order.
    fn units(&self) -> Box<dyn Iterator<Item = &dyn LoadableUnit> + '_>;
}

impl ModuleSource for [Box<dyn LoadableUnit>] {
    fn units(&self) -> Box<dyn Iterator<Item = &dyn LoadableUnit> + '_> {
        Box::new(self.iter().map(|unit| unit.as_ref()))
    }
}

impl ModuleSource for Vec<Box<dyn LoadableUnit>> {
    fn units(&self) -> Box<dyn Iterator<Item = &dyn LoadableUnit> + '_> {
        self.as_slice().units()
    }
}

/// Loads units from a [`ModuleSource`] into a dispatcher.
#[derive(Debug, Clone, Default)]
pub struct Loader {
    filter: Option<GlobMatcher>,
}

impl Loader {
    /// A loader accepting every unit.
    pub fn new() -> Self {
        Self::default()
    }

    /// A loader accepting units whose name matches `pattern`.
    ///
    /// `*` does not cross `/`, so `"*/bundle"` selects `"canada/bundle"` but
    /// not `"canada/nested/bundle"`.
    pub fn matching(pattern: &str) -> Result<Self, LoadError> {
        let glob = GlobBuilder::new(pattern)
            .literal_separator(true)
            .build()
            .map_err(|err| LoadError::Pattern {
                pattern: pattern.to_owned(),
                reason: err.kind().to_string(),
            })?;
        Ok(Self {
            filter: Some(glob.compile_matcher()),
        })
    }

    /// Whether a unit with this name would be loaded.
    pub fn accepts(&self, name: &str) -> bool {
        self.filter
            .as_ref()
            .is_none_or(|matcher| matcher.is_match(name))
    }

    /// Bootstrap every accepted unit once, in source order.
    ///
    /// Returns whether at least one unit was loaded. The first failing unit
    /// stops the load.
    pub fn load<S>(&self, source: &S, ext: &Dispatcher, di: &Di) -> Result<bool, XtError>
    where
        S: ModuleSource + ?Sized,
    {
        let mut loaded = 0usize;
        for unit in source.units() {
            if !self.accepts(unit.name()) {
                debug!(unit = %unit.name(), "unit skipped");
                continue;
            }
            debug!(unit = %unit.name(), "bootstrapping unit");
            unit.bootstrap(ext, di).map_err(|source| LoadError::Bootstrap {
                unit: unit.name().to_owned(),
                source,
            })?;
            loaded += 1;
        }
        debug!(loaded, "units loaded");
        Ok(loaded > 0)
    }
}

/// A unit submitted through `inventory`.
#[cfg(feature = "inventory")]
pub struct CollectedUnit {
    name: &'static str,
    bootstrap: BootstrapFn,
}

#[cfg(feature = "inventory")]
impl CollectedUnit {
    /// Create a unit entry for `inventory::submit!`.
    pub const fn new(name: &'static str, bootstrap: BootstrapFn) -> Self {
        Self { name, bootstrap }
    }
}

#[cfg(feature = "inventory")]
inventory::collect!(CollectedUnit);

#[cfg(feature = "inventory")]
impl LoadableUnit for CollectedUnit {
    fn name(&self) -> &str {
        self.name
    }

    fn bootstrap(&self, ext: &Dispatcher, di: &Di) -> Result<(), BoxError> {
        (self.bootstrap)(ext, di)
    }
}

/// Every [`CollectedUnit`] linked into the program.
#[cfg(feature = "inventory")]
#[derive(Debug, Clone, Copy, Default)]
pub struct Collected;

#[cfg(feature = "inventory")]
impl ModuleSource for Collected {
    fn units(&self) -> Box<dyn Iterator<Item = &dyn LoadableUnit> + '_> {
        Box::new(
            inventory::iter::<CollectedUnit>
                .into_iter()
                .map(|unit| unit as &dyn LoadableUnit),
        )
    }
}
