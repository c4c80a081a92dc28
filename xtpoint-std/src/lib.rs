//! # xtpoint-std
//!
//! The extension-point dispatch engine.
//!
//! This crate provides:
//! - **Registration**: [`PluginRecord`] and its builder
//! - **Extension points**: [`ExtensionPoint`] with ordering, enable/disable,
//!   fan-out `invoke` and sequential-fold `exec`
//! - **Registry**: [`Registry`], lazily creating points on first reference
//! - **Results**: [`Bundle`], the ordered fan-out result with async gather
//! - **Addressing**: [`Address`], the `"point.method[#id]"` shorthand
//! - **Facade**: [`Dispatcher`], path-based invocation over a registry
//! - **Loading**: [`loader`], bootstrapping discovered units
//! - **Testing**: [`testing`] helpers

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Logging compiles away without the `tracing` feature.
macro_rules! debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)*);
    };
}

macro_rules! warn {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::warn!($($arg)*);
    };
}

// Re-export core types
pub use xtpoint_core;

mod address;
mod bundle;
mod dispatcher;
pub mod loader;
mod point;
mod record;
mod registry;
pub mod testing;

pub use address::Address;
pub use bundle::Bundle;
pub use dispatcher::Dispatcher;
pub use point::ExtensionPoint;
pub use record::{PluginRecord, PluginRecordBuilder};
pub use registry::Registry;

#[cfg(feature = "inventory")]
pub use inventory;
