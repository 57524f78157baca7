//! Bulk package removal.
//!
//! Packages are processed strictly in list order, one at a time. A single
//! package's failure never stops the remaining packages from being attempted.

use crate::bridge::Bridge;
use crate::classify::{RemovalOutcome, classify};
use crate::exec::{CommandResult, Executor};
use crate::package::PackageId;
use crate::reporter::Reporter;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{error, info, warn};

/// Per-package results of one bulk removal, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemovalReport {
    /// One entry per requested package.
    pub outcomes: Vec<(PackageId, RemovalOutcome)>,
}

/// Tally of a [`RemovalReport`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RemovalCounts {
    /// Packages removed.
    pub removed: usize,
    /// Packages that were not installed.
    pub absent: usize,
    /// Packages whose removal failed or produced unrecognised output.
    pub failed: usize,
}

impl RemovalReport {
    /// Count outcomes by category.
    pub fn counts(&self) -> RemovalCounts {
        self.outcomes
            .iter()
            .fold(RemovalCounts::default(), |mut acc, (_, outcome)| {
                match outcome {
                    RemovalOutcome::Removed => acc.removed += 1,
                    RemovalOutcome::AbsentAlready => acc.absent += 1,
                    _ => acc.failed += 1,
                }
                acc
            })
    }

    /// True when no package needs the user's attention.
    pub fn all_succeeded(&self) -> bool {
        self.outcomes.iter().all(|(_, o)| !o.is_failure())
    }

    /// Packages whose outcome is a failure.
    pub fn failures(&self) -> impl Iterator<Item = &(PackageId, RemovalOutcome)> {
        self.outcomes.iter().filter(|(_, o)| o.is_failure())
    }
}

/// Remove every package in `packages` for the current user.
///
/// The caller is expected to have checked device availability first; this
/// function does not re-check. No retries, no early termination.
pub fn remove_all(
    executor: &dyn Executor,
    bridge: &Bridge,
    packages: &[PackageId],
    reporter: &dyn Reporter,
) -> RemovalReport {
    let started = Instant::now();
    let mut report = RemovalReport {
        outcomes: Vec::with_capacity(packages.len()),
    };

    if packages.is_empty() {
        reporter.info("No packages configured.");
        return report;
    }

    reporter.section("Removing packages");

    for id in packages {
        reporter.removing(id);
        let outcome = classify(&executor.execute(&bridge.uninstall(id)));
        log_outcome(id, &outcome);
        reporter.outcome(id, &outcome);
        report.outcomes.push((id.clone(), outcome));
    }

    let counts = report.counts();
    reporter.summary(
        counts.removed,
        counts.absent,
        counts.failed,
        started.elapsed().as_secs_f64(),
    );

    report
}

fn log_outcome(id: &PackageId, outcome: &RemovalOutcome) {
    match outcome {
        RemovalOutcome::Removed => info!(package = %id, "Package {id} has been removed successfully."),
        RemovalOutcome::AbsentAlready => warn!(package = %id, "Package {id} is not present."),
        RemovalOutcome::Unexpected(text) => {
            error!(package = %id, "Unexpected response for package {id}: {}", text.trim_end());
        }
        RemovalOutcome::ExecFailed(reason) => {
            error!(package = %id, "Could not run removal for package {id}: {reason}");
        }
        RemovalOutcome::TimedOut(limit) => {
            error!(package = %id, ?limit, "Removal of package {id} timed out");
        }
    }
}

/// Why the installed-package listing could not be produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// The bridge tool could not be launched.
    #[error("Could not run the device bridge: {0}")]
    Launch(String),

    /// The bridge did not answer before the deadline.
    #[error("Package listing did not finish within {}s", .0.as_secs_f64())]
    TimedOut(Duration),
}

/// Run the read-only package listing and return its raw text.
///
/// # Errors
///
/// Returns a [`ListError`] when the bridge cannot be run or times out.
pub fn list_installed(executor: &dyn Executor, bridge: &Bridge) -> Result<String, ListError> {
    match executor.execute(&bridge.list_packages()) {
        CommandResult::Output(text) => Ok(text),
        CommandResult::ExecFailed(reason) => Err(ListError::Launch(reason)),
        CommandResult::TimedOut(limit) => Err(ListError::TimedOut(limit)),
    }
}

/// Extract package identifiers from listing text (`package:<id>` per line).
///
/// Lines without the prefix are kept as-is; blank lines are dropped.
pub fn parse_package_listing(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(|l| l.strip_prefix("package:").unwrap_or(l))
        .collect()
}
