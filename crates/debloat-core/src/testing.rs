//! Test doubles shared by the unit tests.

use crate::classify::RemovalOutcome;
use crate::exec::{CommandLine, CommandResult, Executor};
use crate::package::PackageId;
use crate::reporter::Reporter;
use std::io::Write;
use std::sync::{Arc, Mutex};

type Responder = Box<dyn Fn(&CommandLine) -> CommandResult + Send + Sync>;

/// Executor that answers from a closure and records every command line.
pub(crate) struct ScriptedExecutor {
    respond: Responder,
    calls: Mutex<Vec<String>>,
}

impl ScriptedExecutor {
    pub(crate) fn new(
        respond: impl Fn(&CommandLine) -> CommandResult + Send + Sync + 'static,
    ) -> Self {
        Self {
            respond: Box::new(respond),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn always(result: CommandResult) -> Self {
        Self::new(move |_| result.clone())
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Executor for ScriptedExecutor {
    fn execute(&self, command: &CommandLine) -> CommandResult {
        self.calls.lock().unwrap().push(command.to_string());
        (self.respond)(command)
    }
}

/// Reporter that records every event as a short string.
#[derive(Default)]
pub(crate) struct RecordingReporter {
    events: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub(crate) fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

impl Reporter for RecordingReporter {
    fn section(&self, title: &str) {
        self.push(format!("section {title}"));
    }
    fn removing(&self, id: &PackageId) {
        self.push(format!("removing {id}"));
    }
    fn outcome(&self, id: &PackageId, outcome: &RemovalOutcome) {
        self.push(format!("outcome {id} {}", outcome.label()));
    }
    fn info(&self, msg: &str) {
        self.push(format!("info {msg}"));
    }
    fn warning(&self, msg: &str) {
        self.push(format!("warning {msg}"));
    }
    fn error(&self, msg: &str) {
        self.push(format!("error {msg}"));
    }
    fn summary(&self, removed: usize, absent: usize, failed: usize, _: f64) {
        self.push(format!("summary {removed}/{absent}/{failed}"));
    }
}

#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a plain-text subscriber and return the log lines it emitted.
pub(crate) fn capture_logs(f: impl FnOnce()) -> Vec<String> {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .with_max_level(tracing::Level::INFO)
        .finish();

    tracing::subscriber::with_default(subscriber, f);

    let bytes = buffer.0.lock().unwrap().clone();
    String::from_utf8_lossy(&bytes)
        .lines()
        .map(str::to_string)
        .collect()
}
