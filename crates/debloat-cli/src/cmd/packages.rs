//! Packages command

use crate::context::Context;
use crate::ui::Output;

/// Print the configured removal list
pub fn packages(ctx: &Context, output: &Output) {
    output.section("Removal list");
    for id in &ctx.packages {
        output.row(id, "");
    }
    output.line("");
    output.info(&format!("{} packages configured", ctx.packages.len()));
}
