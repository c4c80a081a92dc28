//! # xtpoint-core
//!
//! Core types for the xtpoint extension-point dispatcher.
//!
//! This crate has minimal dependencies and is meant to be imported by
//! plugin authors who only need to write methods, not host a registry.
//!
//! - [`Value`] / [`Args`] - dynamically typed arguments and results
//! - [`Object`] - shared property bag, used as the invocation context
//! - [`Outcome`] - a method's result: ready now, or pending
//! - [`Deferred`] - a pending result passed on as a value
//! - [`Method`] - an entry in a plugin's capability table
//!
//! # Error Types
//!
//! - [`XtError`] - Top-level error type
//! - [`AddressError`] - Dotted-path parsing errors
//! - [`PluginError`] - Plugin method failures
//! - [`LoadError`] - Unit bootstrap failures

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod deferred;
mod error;
mod method;
mod object;
mod outcome;
mod value;

// Re-exports
pub use deferred::{Deferred, SharedError};
pub use error::{AddressError, BoxError, LoadError, PluginError, XtError};
pub use method::{AsyncMethod, Method};
pub use object::{Context, Object};
pub use outcome::{IntoOutcome, Outcome, PendingValue};
pub use value::{Args, Value};
