//! Response classification.
//!
//! The package manager's output is not a stable contract, so removal results
//! are recognised by two fixed marker substrings. If the tool's phrasing
//! changes, these constants are the only place that needs updating.

use crate::exec::CommandResult;
use std::time::Duration;
use tracing::Level;

/// Printed by `pm uninstall` when the package was removed.
pub const REMOVED_MARKER: &str = "Success";

/// Printed by `pm uninstall` when the package is not installed for user 0.
pub const ABSENT_MARKER: &str = "Failure [not installed for 0]";

/// Outcome of one removal attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemovalOutcome {
    /// The package was removed for the current user.
    Removed,
    /// The package was not installed for the current user. Not an error.
    AbsentAlready,
    /// The tool ran but its output matched neither marker. Holds the raw text.
    Unexpected(String),
    /// The tool could not be launched.
    ExecFailed(String),
    /// The tool did not answer before the deadline.
    TimedOut(Duration),
}

impl RemovalOutcome {
    /// Log severity for this outcome.
    pub fn level(&self) -> Level {
        match self {
            Self::Removed => Level::INFO,
            Self::AbsentAlready => Level::WARN,
            Self::Unexpected(_) | Self::ExecFailed(_) | Self::TimedOut(_) => Level::ERROR,
        }
    }

    /// Whether this outcome needs the user's attention.
    pub fn is_failure(&self) -> bool {
        self.level() == Level::ERROR
    }

    /// Short status word for tables and summaries.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Removed => "removed",
            Self::AbsentAlready => "not present",
            Self::Unexpected(_) => "unexpected response",
            Self::ExecFailed(_) => "could not run bridge",
            Self::TimedOut(_) => "timed out",
        }
    }

    /// Diagnostic detail, when the outcome carries one.
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::Removed | Self::AbsentAlready => None,
            Self::Unexpected(text) => Some(text.trim_end().to_string()),
            Self::ExecFailed(reason) => Some(reason.clone()),
            Self::TimedOut(limit) => Some(format!("no response after {}s", limit.as_secs_f64())),
        }
    }
}

/// Map a removal command's result to an outcome.
///
/// Matching is case-sensitive substring containment; the removed marker wins
/// when both are present.
pub fn classify(result: &CommandResult) -> RemovalOutcome {
    match result {
        CommandResult::ExecFailed(reason) => RemovalOutcome::ExecFailed(reason.clone()),
        CommandResult::TimedOut(limit) => RemovalOutcome::TimedOut(*limit),
        CommandResult::Output(text) if text.contains(REMOVED_MARKER) => RemovalOutcome::Removed,
        CommandResult::Output(text) if text.contains(ABSENT_MARKER) => {
            RemovalOutcome::AbsentAlready
        }
        CommandResult::Output(text) => RemovalOutcome::Unexpected(text.clone()),
    }
}
