//! Device availability check.
//!
//! The check is advisory: a device can disconnect between the check and the
//! next operation, so per-command results remain the authoritative signal.

use crate::bridge::Bridge;
use crate::exec::{CommandResult, Executor};
use crate::reporter::Reporter;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error};

/// Why no device could be used.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeviceError {
    /// The bridge tool could not be launched.
    #[error("Could not run the device bridge: {0}")]
    Launch(String),

    /// The bridge did not answer before the deadline.
    #[error("Device bridge did not respond within {}s", .0.as_secs_f64())]
    TimedOut(Duration),

    /// The listing contained only its header.
    #[error("No device connected. Enable USB debugging and plug in the device.")]
    NoDevice,
}

/// One row of the device listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    /// Device serial number.
    pub serial: String,
    /// Connection state as reported by the bridge (`device`, `unauthorized`, ...).
    pub state: String,
}

/// Parse device listing output.
///
/// Fewer than two non-empty lines means only the header (or nothing) was
/// printed, so no device is attached.
///
/// # Errors
///
/// Returns [`DeviceError::NoDevice`] when no device line follows the header.
pub fn parse_devices(text: &str) -> Result<Vec<Device>, DeviceError> {
    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    if lines.len() < 2 {
        return Err(DeviceError::NoDevice);
    }

    Ok(lines[1..]
        .iter()
        .map(|line| {
            let mut cols = line.split_whitespace();
            Device {
                serial: cols.next().unwrap_or_default().to_string(),
                state: cols.next().unwrap_or("unknown").to_string(),
            }
        })
        .collect())
}

/// Run the device listing and return the attached devices.
///
/// # Errors
///
/// Returns a [`DeviceError`] when the bridge cannot be run, times out, or
/// reports no device.
pub fn probe_devices(executor: &dyn Executor, bridge: &Bridge) -> Result<Vec<Device>, DeviceError> {
    match executor.execute(&bridge.devices()) {
        CommandResult::Output(text) => {
            let devices = parse_devices(&text)?;
            debug!(count = devices.len(), "devices attached");
            Ok(devices)
        }
        CommandResult::ExecFailed(reason) => Err(DeviceError::Launch(reason)),
        CommandResult::TimedOut(limit) => Err(DeviceError::TimedOut(limit)),
    }
}

/// Whether a target device is present.
///
/// Attached devices are announced through `reporter`. When none is usable the
/// reason is logged and shown to the user.
pub fn check_device_available(
    executor: &dyn Executor,
    bridge: &Bridge,
    reporter: &dyn Reporter,
) -> bool {
    match probe_devices(executor, bridge) {
        Ok(devices) => {
            for device in &devices {
                reporter.info(&format!("Device {} ({})", device.serial, device.state));
            }
            true
        }
        Err(e) => {
            error!("{e}");
            reporter.error(&e.to_string());
            false
        }
    }
}
