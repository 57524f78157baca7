//! Filesystem locations.

use dirs::home_dir;
use std::path::PathBuf;

/// Returns the configuration directory (`DEBLOAT_HOME`, else `~/.debloat`),
/// or None if the user's home cannot be resolved.
pub fn try_debloat_home() -> Option<PathBuf> {
    if let Ok(val) = std::env::var("DEBLOAT_HOME") {
        return Some(PathBuf::from(val));
    }
    home_dir().map(|h| h.join(".debloat"))
}

/// User package list: ~/.debloat/packages.toml
pub fn packages_file() -> Option<PathBuf> {
    try_debloat_home().map(|h| h.join("packages.toml"))
}
