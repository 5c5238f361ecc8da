use std::fmt;

/// Sink for progress messages emitted while a sticker is produced.
///
/// The pipeline only ever talks to the sink it is handed, so callers decide
/// where messages go without any process-wide logger being involved.
pub trait Diagnostics {
    fn debug(&self, message: fmt::Arguments<'_>);
    fn info(&self, message: fmt::Arguments<'_>);
}

/// Forwards messages to the `tracing` crate under the `hexsticker` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn debug(&self, message: fmt::Arguments<'_>) {
        tracing::debug!(target: "hexsticker", "{message}");
    }

    fn info(&self, message: fmt::Arguments<'_>) {
        tracing::info!(target: "hexsticker", "{message}");
    }
}

/// Discards every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullDiagnostics;

impl Diagnostics for NullDiagnostics {
    fn debug(&self, _message: fmt::Arguments<'_>) {}

    fn info(&self, _message: fmt::Arguments<'_>) {}
}
