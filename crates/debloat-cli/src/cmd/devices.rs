//! Devices command

use crate::context::Context;
use crate::ui::Output;
use debloat_core::probe_devices;

/// Show the devices the bridge can see
pub fn devices(ctx: &Context, output: &Output) {
    output.section("Devices");
    match probe_devices(ctx.executor.as_ref(), &ctx.bridge) {
        Ok(devices) => {
            for device in &devices {
                output.row(&device.serial, &device.state);
            }
            if devices.iter().any(|d| d.state == "unauthorized") {
                output.warning("Confirm the USB debugging prompt on the device.");
            }
        }
        Err(e) => output.error(&e.to_string()),
    }
}
