//! The diagnostics seam for non-fatal failure reporting.
//!
//! # Design
//! Remote-call failures are returned to the caller and additionally recorded
//! here, so a host that ignores the returned error still leaves a trace.
//! `record` is fire-and-forget with no delivery guarantee.

use tracing::warn;

/// Destination for non-fatal failure messages.
pub trait DiagnosticsSink {
    /// Record one message. Fire-and-forget; implementations must not fail.
    fn record(&mut self, message: &str);
}

impl<T: DiagnosticsSink + ?Sized> DiagnosticsSink for &mut T {
    fn record(&mut self, message: &str) {
        (**self).record(message)
    }
}

/// Sink that forwards every message to `tracing` at WARN level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticsSink for TracingSink {
    fn record(&mut self, message: &str) {
        warn!("{message}");
    }
}

/// Sink that keeps messages in memory, oldest first.
///
/// Substitute sink for tests and for hosts that surface failures through
/// their own UI.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    messages: Vec<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

impl DiagnosticsSink for MemorySink {
    fn record(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
