//! Clean command
use crate::context::Context;
use crate::ui::Output;
use anyhow::Result;
use crossterm::style::Stylize;
use debloat_core::{RemovalReport, remove_all};
use std::io::{BufRead, Write};

/// Remove every configured package from the attached device.
///
/// Returns `None` when nothing was attempted (no device, empty list, or the
/// user declined). The device is checked first, even for an empty list.
/// Per-package failures are reported in-band and never turn into an error.
pub fn clean(ctx: &Context, output: &Output, confirm: bool) -> Result<Option<RemovalReport>> {
    if !super::require_device(ctx, output) {
        return Ok(None);
    }

    if ctx.packages.is_empty() {
        output.info("No packages configured.");
        return Ok(None);
    }

    if confirm && !confirm_removal(ctx.packages.len(), &mut std::io::stdin().lock())? {
        output.error("Operation cancelled");
        return Ok(None);
    }

    let report = remove_all(ctx.executor.as_ref(), &ctx.bridge, &ctx.packages, output);

    if !report.all_succeeded() {
        let names: Vec<String> = report.failures().map(|(id, _)| id.to_string()).collect();
        output.warning(&format!("Needs attention: {}", names.join(", ")));
    }

    Ok(Some(report))
}

fn confirm_removal(count: usize, input: &mut impl BufRead) -> Result<bool> {
    println!();
    print!(
        "  {} This will remove {count} packages for the current user. Continue? (y/N) ",
        "WARNING:".bold().red()
    );
    std::io::stdout().flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}
