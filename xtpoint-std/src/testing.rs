//! Testing utilities for xtpoint.
//!
//! - [`CallLog`]: records which plugin methods ran, and in what order
//! - [`failing`]: a method that always fails
//! - [`echo`]: a method that returns its arguments

use std::sync::{Arc, Mutex, PoisonError};
use xtpoint_core::{Args, BoxError, Method, Object, Value};

// ============================================================================
// Call Log
// ============================================================================

/// A shared log of method invocations.
///
/// # Example
///
/// ```rust,ignore
/// let log = CallLog::new();
/// point.extend(PluginRecord::builder("a").index(2).method("run", log.record("a")));
/// point.extend(PluginRecord::builder("b").index(1).method("run", log.record("b")));
///
/// point.invoke(None, "run", args![])?;
/// assert_eq!(log.entries(), vec!["b", "a"]);
/// ```
#[derive(Clone, Default)]
pub struct CallLog {
    entries: Arc<Mutex<Vec<String>>>,
}

impl CallLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// A method that appends `label` to the log and returns it.
    pub fn record(&self, label: impl Into<String>) -> impl Method {
        let entries = self.entries.clone();
        let label = label.into();
        move |_this: &Object, _args: Args| -> Value {
            entries
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(label.clone());
            Value::from(label.as_str())
        }
    }

    /// A method that appends `label` and the arguments it received.
    pub fn record_args(&self, label: impl Into<String>) -> impl Method {
        let entries = self.entries.clone();
        let label = label.into();
        move |_this: &Object, args: Args| -> Value {
            let rendered: Vec<String> = args.iter().map(ToString::to_string).collect();
            entries
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(format!("{label}({})", rendered.join(",")));
            Value::from(args)
        }
    }

    /// Get a copy of the recorded entries.
    pub fn entries(&self) -> Vec<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of recorded calls.
    pub fn count(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Clear all recorded entries.
    pub fn clear(&self) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

// ============================================================================
// Canned Methods
// ============================================================================

/// A method that always fails with `message`.
pub fn failing(message: &'static str) -> impl Method {
    move |_this: &Object, _args: Args| -> Result<Value, BoxError> { Err(message.into()) }
}

/// A method that returns its arguments as a list.
pub fn echo() -> impl Method {
    |_this: &Object, args: Args| -> Value { Value::List(args) }
}
