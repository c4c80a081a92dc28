//! Error types for xtpoint.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`XtError`] - Top-level error type for all dispatch operations
//! - [`AddressError`] - Malformed dotted-path addresses
//! - [`PluginError`] - A plugin method failed (or its future rejected)
//! - [`LoadError`] - A loadable unit failed to bootstrap

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all xtpoint operations.
#[derive(Error, Debug)]
pub enum XtError {
    /// The dotted path could not be resolved into a point and method.
    #[error("addressing error: {0}")]
    Address(#[from] AddressError),

    /// A plugin method failed synchronously.
    #[error("plugin error: {0}")]
    Plugin(PluginError),

    /// A pending result returned by a plugin method was rejected.
    #[error("rejected: {0}")]
    Rejected(PluginError),

    /// Bootstrapping a loadable unit failed.
    #[error("load error: {0}")]
    Load(#[from] LoadError),

    /// A custom error occurred.
    #[error(transparent)]
    Custom(BoxError),
}

/// Errors produced while parsing a `"point.method[#id]"` address.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// The path was empty.
    #[error("empty address")]
    Empty,

    /// The path has no `.method` segment.
    #[error("missing method segment in `{0}`")]
    MissingMethod(String),

    /// The path has a method segment but no point name before it.
    #[error("missing point name in `{0}`")]
    MissingPoint(String),

    /// A `#` suffix was given without an id.
    #[error("empty plugin id in `{0}`")]
    EmptyId(String),

    /// A comma-separated method list contained an empty name.
    #[error("empty method name in `{0}`")]
    EmptyMethodName(String),

    /// A method name contained whitespace.
    #[error("invalid method name in `{0}`")]
    InvalidMethodName(String),

    /// A method list was used where a single method is expected.
    #[error("expected a single method in `{0}`")]
    UnexpectedList(String),

    /// An `#id` suffix was used with a form that does not accept one.
    #[error("plugin id not accepted here: `{0}`")]
    UnexpectedId(String),
}

/// A plugin method failed while being invoked.
#[derive(Error, Debug)]
#[error("plugin `{plugin}` failed in `{point}.{method}`: {source}")]
pub struct PluginError {
    /// Extension point name.
    pub point: String,
    /// Plugin id.
    pub plugin: String,
    /// Method name.
    pub method: String,
    /// The error raised by the plugin.
    #[source]
    pub source: BoxError,
}

/// Errors raised while loading units into a dispatcher.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The unit-name filter could not be compiled.
    #[error("invalid unit pattern `{pattern}`: {reason}")]
    Pattern {
        /// The rejected pattern.
        pattern: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A unit's `bootstrap` function returned an error.
    #[error("unit `{unit}` failed to bootstrap: {source}")]
    Bootstrap {
        /// Unit name.
        unit: String,
        /// The error returned by the unit.
        #[source]
        source: BoxError,
    },
}

// Convenience conversions
impl From<BoxError> for XtError {
    fn from(err: BoxError) -> Self {
        XtError::Custom(err)
    }
}

impl XtError {
    /// Returns the plugin failure, if this error came from a plugin.
    pub fn plugin_error(&self) -> Option<&PluginError> {
        match self {
            XtError::Plugin(err) | XtError::Rejected(err) => Some(err),
            _ => None,
        }
    }
}
