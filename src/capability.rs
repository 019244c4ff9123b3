//! Host-supplied capabilities a profile may call into.
//!
//! Neither capability is required. A profile without a [`DiagnosticSink`]
//! stays silent; a profile without a [`DomWriter`] refuses element greetings
//! with [`SaluteError::MissingCapability`](crate::SaluteError::MissingCapability).

use std::collections::BTreeMap;
use std::sync::Mutex;

/// Writes text into the element matched by a selector.
pub trait DomWriter: Send + Sync {
    /// Replace the text of the element(s) matching `selector`.
    fn write(&self, selector: &str, text: &str);
}

impl<F> DomWriter for F
where
    F: Fn(&str, &str) + Send + Sync,
{
    fn write(&self, selector: &str, text: &str) {
        self(selector, text)
    }
}

/// Receives greeting and login lines as they are produced.
pub trait DiagnosticSink: Send + Sync {
    /// Emit one line. Best effort; must not fail.
    fn emit(&self, line: &str);
}

impl<F> DiagnosticSink for F
where
    F: Fn(&str) + Send + Sync,
{
    fn emit(&self, line: &str) {
        self(line)
    }
}

/// Default sink: forwards every line to `tracing` at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, line: &str) {
        tracing::info!(target: "salute", "{}", line);
    }
}

/// An in-memory element store keyed by selector.
///
/// Useful where no real document exists: the last text written to each
/// selector is kept and can be read back.
#[derive(Debug, Default)]
pub struct MemoryDom {
    elements: Mutex<BTreeMap<String, String>>,
}

impl MemoryDom {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Text last written to `selector`, if any.
    pub fn text(&self, selector: &str) -> Option<String> {
        self.elements
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(selector)
            .cloned()
    }

    /// All `(selector, text)` pairs in selector order.
    pub fn entries(&self) -> Vec<(String, String)> {
        self.elements
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

impl DomWriter for MemoryDom {
    fn write(&self, selector: &str, text: &str) {
        self.elements
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(selector.to_string(), text.to_string());
    }
}
