//! Unified UI output interface.
//!
//! This module provides the API that commands use to print to the terminal.
//! All output is line-oriented and written in order; device operations are
//! sequential, so no render actor is needed.

use super::theme::{Theme, fit};
use crossterm::style::Stylize;
use debloat_core::{PackageId, RemovalOutcome, Reporter};
use std::io::Write;
use std::sync::Mutex;

/// A handle for printing status lines and removal outcomes.
pub struct Output {
    writer: Mutex<Box<dyn Write + Send>>,
    theme: Theme,
}

impl std::fmt::Debug for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Output").finish_non_exhaustive()
    }
}

impl Output {
    /// Create an output handle writing to stdout.
    pub fn new() -> Self {
        Self::with_writer(std::io::stdout())
    }

    /// Create an output handle writing to `writer`.
    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            theme: Theme::default(),
        }
    }

    /// Write one raw line.
    pub fn line(&self, text: &str) {
        if let Ok(mut w) = self.writer.lock() {
            let _ = writeln!(w, "{text}");
            let _ = w.flush();
        }
    }

    /// Prints a visual section header.
    pub fn section(&self, title: &str) {
        let rule = "─".repeat(self.theme.layout.rule_width);
        self.line("");
        self.line(&format!("  {}", title.with(self.theme.colors.header).bold()));
        self.line(&format!("  {}", rule.with(self.theme.colors.secondary)));
    }

    /// Prints an informational message.
    pub fn info(&self, msg: &str) {
        self.line(&format!(
            "  {} {msg}",
            self.theme.icons.info.with(self.theme.colors.secondary)
        ));
    }

    /// Prints a success message.
    pub fn success(&self, msg: &str) {
        self.line(&format!(
            "  {} {msg}",
            self.theme.icons.success.with(self.theme.colors.success)
        ));
    }

    /// Prints a warning message.
    pub fn warning(&self, msg: &str) {
        self.line(&format!(
            "  {} {msg}",
            self.theme.icons.warning.with(self.theme.colors.warning)
        ));
    }

    /// Prints an error message.
    pub fn error(&self, msg: &str) {
        self.line(&format!(
            "  {} {}",
            self.theme.icons.error.with(self.theme.colors.error),
            msg.with(self.theme.colors.error)
        ));
    }

    /// Prints one package row with a secondary column.
    pub fn row(&self, name: &str, detail: &str) {
        self.line(&format!(
            "  {} {}",
            fit(name, self.theme.layout.name_width).with(self.theme.colors.package_name),
            detail.with(self.theme.colors.secondary)
        ));
    }

    /// Prints the result of one removal attempt, with any diagnostic text
    /// indented underneath.
    pub fn outcome(&self, id: &PackageId, outcome: &RemovalOutcome) {
        let (icon, color) = match outcome {
            RemovalOutcome::Removed => (self.theme.icons.success, self.theme.colors.success),
            RemovalOutcome::AbsentAlready => (self.theme.icons.warning, self.theme.colors.warning),
            _ => (self.theme.icons.error, self.theme.colors.error),
        };

        self.line(&format!(
            "  {} {} {}",
            icon.with(color),
            fit(id.as_str(), self.theme.layout.name_width).with(self.theme.colors.package_name),
            outcome.label().with(color)
        ));

        if let Some(detail) = outcome.detail() {
            for line in detail.lines().filter(|l| !l.trim().is_empty()) {
                self.line(&format!("      {}", line.trim_end().with(self.theme.colors.secondary)));
            }
        }
    }

    /// Prints the tally of a bulk removal.
    pub fn summary(&self, removed: usize, absent: usize, failed: usize, elapsed_secs: f64) {
        let text = format!(
            "{removed} removed, {absent} not present, {failed} failed in {elapsed_secs:.1}s"
        );
        self.line("");
        if failed == 0 {
            self.success(&text);
        } else {
            self.error(&text);
        }
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for Output {
    fn section(&self, title: &str) {
        self.section(title);
    }

    fn removing(&self, id: &PackageId) {
        tracing::debug!(package = %id, "removing");
    }

    fn outcome(&self, id: &PackageId, outcome: &RemovalOutcome) {
        self.outcome(id, outcome);
    }

    fn info(&self, msg: &str) {
        self.info(msg);
    }

    fn warning(&self, msg: &str) {
        self.warning(msg);
    }

    fn error(&self, msg: &str) {
        self.error(msg);
    }

    fn summary(&self, removed: usize, absent: usize, failed: usize, elapsed_secs: f64) {
        self.summary(removed, absent, failed, elapsed_secs);
    }
}

/// A cloneable in-memory writer, used to capture output in tests.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer(std::sync::Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    /// Everything written so far, lossily decoded.
    pub fn contents(&self) -> String {
        self.0
            .lock()
            .map(|b| String::from_utf8_lossy(&b).into_owned())
            .unwrap_or_default()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0
            .lock()
            .map_err(|_| std::io::Error::other("buffer lock poisoned"))?
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
