//! Core types for the callback library
//!
//! This module defines the error type shared by both slot variants and the
//! records a caller emits when it triggers its callback.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result type for callback operations
pub type Result<T> = std::result::Result<T, CallbackError>;

/// Errors that can occur while triggering a callback
#[derive(Debug, thiserror::Error)]
pub enum CallbackError {
    /// `invoke` was called before any behavior was bound
    #[error("no callback bound")]
    Unbound,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A single triggered invocation: which behavior ran, with what, and its result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invocation {
    /// Name of the bound behavior (e.g. "function", "closure")
    pub label: String,
    /// Argument passed to the callback
    pub argument: i32,
    /// Value returned by the callback
    pub result: i32,
}

impl Invocation {
    /// Create a new invocation record
    pub fn new(label: impl Into<String>, argument: i32, result: i32) -> Self {
        Self {
            label: label.into(),
            argument,
            result,
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}) = {}", self.label, self.argument, self.result)
    }
}

/// Ordered record of invocations produced by a demonstration run
///
/// Entries keep the order in which they were recorded, one per trigger.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transcript {
    entries: Vec<Invocation>,
}

impl Transcript {
    /// Create an empty transcript
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an invocation at the end of the transcript
    pub fn record(&mut self, invocation: Invocation) {
        log::debug!("Recorded invocation: {}", invocation);
        self.entries.push(invocation);
    }

    /// All recorded invocations, in order
    pub fn entries(&self) -> &[Invocation] {
        &self.entries
    }

    /// Just the results, in order
    pub fn results(&self) -> Vec<i32> {
        self.entries.iter().map(|entry| entry.result).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append every entry of `other`, keeping its order
    pub fn extend(&mut self, other: Transcript) {
        self.entries.extend(other.entries);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Invocation> {
        self.entries.iter()
    }
}
