//! Command execution.
//!
//! Runs an external command line synchronously and captures its output.
//! The executor never fails its caller: every outcome, including a tool that
//! cannot be launched or one that hangs past its deadline, is returned as a
//! [`CommandResult`] value for the classifier to interpret.

use std::ffi::OsString;
use std::io::Read;
use std::path::Path;
use std::process::{Command, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::time::{Duration, Instant};
use tracing::{debug, warn};
use wait_timeout::ChildExt;

/// Size of the read buffer reused across reads of a child's output stream.
pub const READ_BUFFER_SIZE: usize = 1024;

/// A fully-formed command line: a program and its argument vector.
///
/// Arguments are handed to the OS directly, never through a shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    /// Program to launch (looked up on `PATH` when not a path).
    pub program: OsString,
    /// Arguments, in order.
    pub args: Vec<String>,
}

impl CommandLine {
    /// Create a command line for `program` with no arguments.
    pub fn new(program: impl AsRef<Path>) -> Self {
        Self {
            program: program.as_ref().as_os_str().to_os_string(),
            args: Vec::new(),
        }
    }

    /// Append arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|a| a.as_ref().to_string()));
        self
    }
}

impl std::fmt::Display for CommandLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program.to_string_lossy())?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Result of running one command to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// The process ran and exited; holds its full captured output.
    Output(String),
    /// The process could not be started (tool missing, permission denied, ...).
    ExecFailed(String),
    /// The process did not exit before the deadline and was killed.
    TimedOut(Duration),
}

/// Runs command lines. Implemented by [`ProcessExecutor`] and by test stubs.
pub trait Executor: Send + Sync {
    /// Run `command` to completion and capture its output.
    fn execute(&self, command: &CommandLine) -> CommandResult;
}

impl<T: Executor + ?Sized> Executor for std::sync::Arc<T> {
    fn execute(&self, command: &CommandLine) -> CommandResult {
        (**self).execute(command)
    }
}

/// Executes commands as real OS child processes.
#[derive(Debug, Clone, Default)]
pub struct ProcessExecutor {
    timeout: Option<Duration>,
}

impl ProcessExecutor {
    /// Create an executor. `None` waits indefinitely.
    pub fn new(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }
}

impl Executor for ProcessExecutor {
    fn execute(&self, command: &CommandLine) -> CommandResult {
        debug!(%command, "executing");

        let deadline = self.timeout.map(|limit| Instant::now() + limit);
        let mut child = match Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
        {
            Ok(child) => child,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return CommandResult::ExecFailed(format!(
                    "'{}' not found. Install the Android platform tools or pass --adb <PATH>",
                    command.program.to_string_lossy()
                ));
            }
            Err(e) => {
                return CommandResult::ExecFailed(format!(
                    "Failed to spawn '{}': {e}",
                    command.program.to_string_lossy()
                ));
            }
        };

        // Drain both pipes concurrently so a chatty child never blocks on a full pipe.
        let (tx, rx) = mpsc::channel();
        let mut open = 0;
        if let Some(stdout) = child.stdout.take() {
            spawn_pump(stdout, Stream::Stdout, tx.clone());
            open += 1;
        }
        if let Some(stderr) = child.stderr.take() {
            spawn_pump(stderr, Stream::Stderr, tx.clone());
            open += 1;
        }
        drop(tx);

        let waited = match self.timeout {
            Some(limit) => child.wait_timeout(limit),
            None => child.wait().map(Some),
        };

        let status = match waited {
            Ok(Some(status)) => status,
            Ok(None) => {
                let limit = self.timeout.unwrap_or_default();
                warn!(%command, ?limit, "command timed out, killing");
                let _ = child.kill();
                let _ = child.wait();
                return CommandResult::TimedOut(limit);
            }
            Err(e) => {
                let _ = child.kill();
                let _ = child.wait();
                return CommandResult::ExecFailed(format!("Failed to wait for '{command}': {e}"));
            }
        };

        debug!(%command, code = ?status.code(), "command exited");

        let captured = collect(&rx, open, deadline);
        if !captured.complete {
            // A background process kept the pipes open past the deadline.
            warn!(%command, "output still open at deadline, using what was read");
        }
        CommandResult::Output(captured.text())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stream {
    Stdout,
    Stderr,
}

enum Chunk {
    Data(Stream, Vec<u8>),
    Closed,
}

fn spawn_pump<R: Read + Send + 'static>(reader: R, stream: Stream, tx: Sender<Chunk>) {
    std::thread::spawn(move || pump(reader, stream, &tx));
}

/// Forward `reader` through a fixed-size buffer until end of stream.
fn pump<R: Read>(mut reader: R, stream: Stream, tx: &Sender<Chunk>) {
    let mut buffer = [0u8; READ_BUFFER_SIZE];
    loop {
        match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => {
                if tx.send(Chunk::Data(stream, buffer[..n].to_vec())).is_err() {
                    return;
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {}
            Err(e) => {
                debug!(?stream, "read failed: {e}");
                break;
            }
        }
    }
    let _ = tx.send(Chunk::Closed);
}

#[derive(Debug, Default)]
struct Captured {
    stdout: Vec<u8>,
    stderr: Vec<u8>,
    complete: bool,
}

impl Captured {
    /// Standard output followed by standard error.
    fn text(&self) -> String {
        let mut text = String::from_utf8_lossy(&self.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&self.stderr));
        text
    }
}

/// Gather chunks until `open` streams have closed or `deadline` passes.
fn collect(rx: &Receiver<Chunk>, mut open: usize, deadline: Option<Instant>) -> Captured {
    let mut captured = Captured::default();
    while open > 0 {
        let chunk = match deadline {
            Some(deadline) => {
                match rx.recv_timeout(deadline.saturating_duration_since(Instant::now())) {
                    Ok(chunk) => chunk,
                    Err(RecvTimeoutError::Timeout) => return captured,
                    Err(RecvTimeoutError::Disconnected) => break,
                }
            }
            None => match rx.recv() {
                Ok(chunk) => chunk,
                Err(_) => break,
            },
        };
        match chunk {
            Chunk::Data(Stream::Stdout, bytes) => captured.stdout.extend_from_slice(&bytes),
            Chunk::Data(Stream::Stderr, bytes) => captured.stderr.extend_from_slice(&bytes),
            Chunk::Closed => open -= 1,
        }
    }
    captured.complete = true;
    captured
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_joins_args() {
        let cmd = CommandLine::new("adb").args(["shell", "pm", "list", "packages"]);
        assert_eq!(cmd.to_string(), "adb shell pm list packages");
    }

    #[test]
    fn test_pump_spans_multiple_buffers() {
        let data = vec![b'x'; READ_BUFFER_SIZE * 3 + 17];
        let (tx, rx) = mpsc::channel();
        pump(std::io::Cursor::new(data.clone()), Stream::Stdout, &tx);

        let captured = collect(&rx, 1, None);
        assert!(captured.complete);
        assert_eq!(captured.stdout, data);
        assert!(captured.stderr.is_empty());
    }

    #[test]
    fn test_collect_stops_at_deadline() {
        let (tx, rx) = mpsc::channel();
        tx.send(Chunk::Data(Stream::Stdout, b"hi\n".to_vec())).unwrap();

        let deadline = Instant::now() + Duration::from_millis(50);
        let captured = collect(&rx, 1, Some(deadline));
        assert!(!captured.complete);
        assert_eq!(captured.text(), "hi\n");
    }

    #[test]
    fn test_missing_program_is_exec_failed() {
        let exec = ProcessExecutor::new(Some(Duration::from_secs(5)));
        let result = exec.execute(&CommandLine::new("/nonexistent/debloat-test-tool"));
        assert!(matches!(result, CommandResult::ExecFailed(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_captures_output_with_trailing_newline() {
        let exec = ProcessExecutor::new(Some(Duration::from_secs(5)));
        let result = exec.execute(&CommandLine::new("sh").args(["-c", "printf 'Success\\n'"]));
        assert_eq!(result, CommandResult::Output("Success\n".to_string()));
    }

    #[cfg(unix)]
    #[test]
    fn test_silent_child_is_empty_output_not_failure() {
        let exec = ProcessExecutor::new(None);
        let result = exec.execute(&CommandLine::new("sh").args(["-c", "exit 3"]));
        assert_eq!(result, CommandResult::Output(String::new()));
    }

    #[cfg(unix)]
    #[test]
    fn test_stderr_is_appended() {
        let exec = ProcessExecutor::new(Some(Duration::from_secs(5)));
        let result =
            exec.execute(&CommandLine::new("sh").args(["-c", "echo out; echo err 1>&2"]));
        assert_eq!(result, CommandResult::Output("out\nerr\n".to_string()));
    }

    #[cfg(unix)]
    #[test]
    fn test_long_output_is_accumulated() {
        let exec = ProcessExecutor::new(Some(Duration::from_secs(10)));
        let result = exec.execute(
            &CommandLine::new("sh").args(["-c", "i=0; while [ $i -lt 500 ]; do echo line$i; i=$((i+1)); done"]),
        );
        let CommandResult::Output(text) = result else {
            panic!("expected output");
        };
        assert!(text.len() > READ_BUFFER_SIZE);
        assert_eq!(text.lines().count(), 500);
        assert!(text.ends_with("line499\n"));
    }

    #[cfg(unix)]
    #[test]
    fn test_deadline_breach_is_timed_out() {
        let limit = Duration::from_millis(200);
        let exec = ProcessExecutor::new(Some(limit));
        let result = exec.execute(&CommandLine::new("sleep").args(["5"]));
        assert_eq!(result, CommandResult::TimedOut(limit));
    }

    #[cfg(unix)]
    #[test]
    fn test_background_process_holding_pipes_does_not_outlive_deadline() {
        let exec = ProcessExecutor::new(Some(Duration::from_millis(500)));
        let started = Instant::now();
        let result = exec.execute(&CommandLine::new("sh").args(["-c", "sleep 3 & echo hi"]));

        assert_eq!(result, CommandResult::Output("hi\n".to_string()));
        assert!(started.elapsed() < Duration::from_secs(2));
    }
}
