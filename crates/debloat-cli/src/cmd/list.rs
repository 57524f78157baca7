//! List command

use crate::context::Context;
use crate::ui::Output;
use debloat_core::list_installed;
use debloat_core::removal::parse_package_listing;

/// List the packages installed on the device.
///
/// Returns the number of packages shown, or `None` when nothing was listed.
pub fn list(ctx: &Context, output: &Output) -> Option<usize> {
    if !super::require_device(ctx, output) {
        return None;
    }

    match list_installed(ctx.executor.as_ref(), &ctx.bridge) {
        Ok(text) => {
            let packages = parse_package_listing(&text);
            output.section("Installed packages");
            for name in &packages {
                let marker = if ctx.packages.iter().any(|p| p == name) {
                    "on removal list"
                } else {
                    ""
                };
                output.row(name, marker);
            }
            output.line("");
            output.info(&format!("{} packages", packages.len()));
            Some(packages.len())
        }
        Err(e) => {
            tracing::error!("{e}");
            output.error(&e.to_string());
            None
        }
    }
}
