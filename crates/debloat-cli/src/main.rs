//! debloat - remove vendor-preinstalled Android apps

use anyhow::{Context as _, Result};
use clap::Parser;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use debloat_cli::menu::{Menu, MenuState};
use debloat_cli::ui::{CrosstermSurface, Output};
use debloat_cli::{Cli, Commands, Context, cmd};
use debloat_core::config::default_menu;
use debloat_core::{Bridge, PackageConfig, ProcessExecutor};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.log_file.as_deref())?;

    let config = PackageConfig::resolve(cli.packages.as_deref())?;
    let timeout = (cli.timeout > 0).then(|| Duration::from_secs(cli.timeout));
    let bridge = Bridge::new(&cli.adb);

    match which::which(bridge.program()) {
        Ok(path) => tracing::debug!(path = %path.display(), "using bridge"),
        Err(e) => tracing::warn!(program = %bridge.program().display(), "bridge not found: {e}"),
    }

    let ctx = Context::new(
        Arc::new(ProcessExecutor::new(timeout)),
        bridge,
        config.packages,
    );
    let output = Output::new();

    match cli.command {
        None => {
            let state = MenuState::new(default_menu())?;
            let mut surface =
                CrosstermSurface::enter().context("Failed to initialize the terminal")?;
            Menu::new(state, ctx, output).run(&mut surface)
        }
        Some(Commands::Guide) => {
            cmd::guide::guide(&output);
            Ok(())
        }
        Some(Commands::Devices) => {
            cmd::devices::devices(&ctx, &output);
            Ok(())
        }
        Some(Commands::List) => {
            cmd::list::list(&ctx, &output);
            Ok(())
        }
        Some(Commands::Clean { yes }) => cmd::clean::clean(&ctx, &output, !yes).map(|_| ()),
        Some(Commands::Packages) => {
            cmd::packages::packages(&ctx, &output);
            Ok(())
        }
    }
}

/// Log to `log_file` at `info` by default, otherwise to stderr only when
/// `RUST_LOG` asks for it.
fn init_logging(log_file: Option<&Path>) -> Result<()> {
    match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::builder()
                        .with_default_directive(LevelFilter::INFO.into())
                        .from_env_lossy(),
                )
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::builder()
                        .with_default_directive(LevelFilter::OFF.into())
                        .from_env_lossy(),
                )
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time()
                .init();
        }
    }
    Ok(())
}
