//! debloat-core - device-facing core of the debloat tool
//!
//! Removes vendor-preinstalled applications from an Android device by driving
//! its package manager through the `adb` device bridge.
//!
//! # Flow
//!
//! ```text
//! device::check_device_available ─┐
//!                                 ▼
//! removal::remove_all ──► exec::Executor ──► classify::classify ──► Reporter + tracing
//! ```
//!
//! - [`exec`] runs one command line and never fails its caller.
//! - [`classify`] turns free-text tool output into a [`RemovalOutcome`].
//! - [`removal`] walks the configured list in order, one package at a time.

pub mod bridge;
pub mod classify;
pub mod config;
pub mod device;
pub mod exec;
pub mod package;
pub mod paths;
pub mod removal;
pub mod reporter;

#[cfg(test)]
mod testing;

pub use bridge::Bridge;
pub use classify::{RemovalOutcome, classify};
pub use config::{MenuAction, MenuOption, PackageConfig};
pub use device::{DeviceError, check_device_available, probe_devices};
pub use exec::{CommandLine, CommandResult, Executor, ProcessExecutor};
pub use package::{PackageId, PackageIdError};
pub use removal::{ListError, RemovalReport, list_installed, remove_all};
pub use reporter::{NullReporter, Reporter};
