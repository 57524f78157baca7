//! Reporter trait for dependency injection
//!
//! This trait allows core logic to report progress and outcomes without
//! being coupled to a specific terminal implementation.

use crate::classify::RemovalOutcome;
use crate::package::PackageId;

/// Receives progress and outcome events from core operations.
pub trait Reporter: Send + Sync {
    /// Indicates a new section or phase has started (e.g. "Removing packages").
    fn section(&self, title: &str);

    /// A removal command is about to run for `id`.
    fn removing(&self, id: &PackageId);

    /// The removal attempt for `id` finished with `outcome`.
    fn outcome(&self, id: &PackageId, outcome: &RemovalOutcome);

    /// Log an informational message.
    fn info(&self, msg: &str);

    /// Log a warning message.
    fn warning(&self, msg: &str);

    /// Log an error message.
    fn error(&self, msg: &str);

    /// Display a final summary of a bulk operation.
    fn summary(&self, removed: usize, absent: usize, failed: usize, elapsed_secs: f64);
}

impl<T: Reporter + ?Sized> Reporter for std::sync::Arc<T> {
    fn section(&self, title: &str) {
        (**self).section(title);
    }
    fn removing(&self, id: &PackageId) {
        (**self).removing(id);
    }
    fn outcome(&self, id: &PackageId, outcome: &RemovalOutcome) {
        (**self).outcome(id, outcome);
    }
    fn info(&self, msg: &str) {
        (**self).info(msg);
    }
    fn warning(&self, msg: &str) {
        (**self).warning(msg);
    }
    fn error(&self, msg: &str) {
        (**self).error(msg);
    }
    fn summary(&self, removed: usize, absent: usize, failed: usize, elapsed_secs: f64) {
        (**self).summary(removed, absent, failed, elapsed_secs);
    }
}

/// A no-op reporter for silent operations (e.g., scripting, testing).
#[derive(Debug, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn section(&self, _: &str) {}
    fn removing(&self, _: &PackageId) {}
    fn outcome(&self, _: &PackageId, _: &RemovalOutcome) {}
    fn info(&self, _: &str) {}
    fn warning(&self, _: &str) {}
    fn error(&self, _: &str) {}
    fn summary(&self, _: usize, _: usize, _: usize, _: f64) {}
}
