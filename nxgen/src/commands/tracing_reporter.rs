//! Reporter implementation for CLI.

use std::fmt;

use nxgen_core::Reporter;

/// Forwards core messages to `tracing`.
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn debug(&self, message: fmt::Arguments<'_>) {
        tracing::trace!("{}", message);
    }

    fn verbose(&self, message: fmt::Arguments<'_>) {
        tracing::debug!("{}", message);
    }

    fn info(&self, message: fmt::Arguments<'_>) {
        tracing::info!("{}", message);
    }

    fn warn(&self, message: fmt::Arguments<'_>) {
        tracing::warn!("{}", message);
    }

    fn error(&self, message: fmt::Arguments<'_>) {
        tracing::error!("{}", message);
    }

    fn fatal(&self, message: fmt::Arguments<'_>) {
        tracing::error!(fatal = true, "{}", message);
    }
}
