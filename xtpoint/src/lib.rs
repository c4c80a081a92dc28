//! # xtpoint - Extension Points and Plugin Dispatch
//!
//! `xtpoint` lets independent producers register named plugins against
//! shared extension points, and lets consumers invoke every enabled plugin
//! at a point: fanned out with the same arguments, or folded so each
//! plugin receives the previous plugin's result.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use xtpoint::prelude::*;
//!
//! let ext = xtpoint::ext();
//!
//! ext.point("canada.chain")
//!     .extend(PluginRecord::builder("one").index(1).method("exec", |_: &Object, _: Args| "one"))
//!     .extend(PluginRecord::builder("two").index(2).method("exec", |_: &Object, args: Args| {
//!         format!("{} two", args[0])
//!     }));
//!
//! // Fold: "one two"
//! let chained = ext.exec(None, "canada.chain.exec", args![])?;
//!
//! // Fan-out: ["one", "two args..."]
//! let bundle = ext.invoke(None, "canada.chain.exec", args!["x"])?;
//! ```
//!
//! ## Invocation Forms
//!
//! | Form | Semantics |
//! |------|-----------|
//! | `invoke(ctx, "p.m", args)` | every enabled plugin, same args, [`Bundle`] |
//! | `invoke_async(ctx, "p.m", args)` | `invoke`, then await all results concurrently |
//! | `invoke_all(ctx, "p.m1,m2", args)` | each method in turn, `args` to the last only |
//! | `exec(ctx, "p.m", args)` | fold through enabled plugins, last result |
//! | `exec(ctx, "p.m#id", args)` | only plugin `id`, raw result |
//! | `exec_async(ctx, "p.m", args)` | fold, awaiting each step |

#![deny(clippy::pub_use, clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use xtpoint_core::{
    // Errors
    AddressError,
    // Values
    Args,
    // Methods
    AsyncMethod,
    BoxError,
    Context,
    Deferred,
    IntoOutcome,
    LoadError,
    Method,
    Object,
    Outcome,
    PendingValue,
    PluginError,
    SharedError,
    Value,
    XtError,
    args,
};

pub use xtpoint_std::{
    Address, Bundle, Dispatcher, ExtensionPoint, PluginRecord, PluginRecordBuilder, Registry,
};

/// The process-wide dispatcher.
///
/// Created on first use and kept for the lifetime of the process.
pub fn ext() -> &'static Dispatcher {
    Dispatcher::global()
}

/// Loading units into a dispatcher.
pub mod loader {
    #[cfg(feature = "inventory")]
    pub use xtpoint_std::loader::{Collected, CollectedUnit};
    pub use xtpoint_std::loader::{BootstrapFn, Di, FnUnit, LoadableUnit, Loader, ModuleSource};
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use xtpoint_std::testing::*;
}

/// Prelude module - common imports for xtpoint.
///
/// # Usage
///
/// ```rust,ignore
/// use xtpoint::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Args, AsyncMethod, BoxError, Bundle, Dispatcher, ExtensionPoint, Method, Object, Outcome,
        PluginRecord, Value, XtError, args,
        loader::{Di, Loader},
    };
}

#[cfg(feature = "macros")]
pub use xtpoint_macros::bootstrap;

#[cfg(feature = "inventory")]
pub use inventory;
