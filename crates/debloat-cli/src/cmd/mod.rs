//! Command implementations shared by the subcommands and the menu.

pub mod clean;
pub mod devices;
pub mod guide;
pub mod list;
pub mod packages;

use crate::context::Context;
use crate::ui::Output;
use debloat_core::check_device_available;

/// Check for an attached device, reporting the reason when there is none.
pub(crate) fn require_device(ctx: &Context, output: &Output) -> bool {
    check_device_available(ctx.executor.as_ref(), &ctx.bridge, output)
}
