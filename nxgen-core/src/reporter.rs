//! Logging capability injected into the file-system helpers.

use std::fmt;

/// Receives progress and diagnostic messages from the core.
///
/// This trait keeps the core library free of any logging backend; callers
/// plug in whatever sink they use. All methods default to doing nothing, so
/// an implementation only overrides the levels it cares about.
pub trait Reporter: Send + Sync {
    fn debug(&self, _message: fmt::Arguments<'_>) {}
    fn verbose(&self, _message: fmt::Arguments<'_>) {}
    fn info(&self, _message: fmt::Arguments<'_>) {}
    fn warn(&self, _message: fmt::Arguments<'_>) {}
    fn error(&self, _message: fmt::Arguments<'_>) {}
    fn fatal(&self, _message: fmt::Arguments<'_>) {}
}

/// Reporter that discards every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopReporter;

impl Reporter for NoopReporter {}
