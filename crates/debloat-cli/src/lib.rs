//! debloat - remove vendor-preinstalled Android apps
#![allow(missing_docs)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_panics_doc)]
//!
//! Interactive terminal front end over [`debloat_core`].
//!
//! # Overview
//!
//! Running `debloat` without a subcommand opens a menu (Guide, List packages,
//! Clean device, Exit). The subcommands run the same operations directly,
//! which is handy for scripts.
//!
//! # Configuration
//!
//! ```text
//! ~/.debloat/
//! └── packages.toml   # optional removal list, replaces the built-in one
//! ```

pub mod cmd;
pub mod context;
pub mod menu;
pub mod ui;

pub use context::Context;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "debloat")]
#[command(author, version = env!("DEBLOAT_VERSION"), about = "debloat - remove vendor-preinstalled Android apps over adb")]
pub struct Cli {
    /// Path to the adb executable
    #[arg(long, global = true, env = "DEBLOAT_ADB", default_value = debloat_core::bridge::DEFAULT_PROGRAM)]
    pub adb: PathBuf,

    /// Seconds to wait for each adb call (0 waits forever)
    #[arg(long, global = true, env = "DEBLOAT_TIMEOUT", default_value_t = 60)]
    pub timeout: u64,

    /// TOML file with the packages to remove
    #[arg(long, global = true, env = "DEBLOAT_PACKAGES")]
    pub packages: Option<PathBuf>,

    /// Append logs to this file (level from RUST_LOG, default info)
    #[arg(long, global = true, env = "DEBLOAT_LOG")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show how to prepare the device
    Guide,
    /// Show attached devices
    Devices,
    /// List packages installed on the device
    List,
    /// Remove every configured package from the device
    Clean {
        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
    /// Print the configured removal list
    Packages,
}
