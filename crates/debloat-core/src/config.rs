//! Package list and menu configuration.
//!
//! The package list is plain data handed to the removal orchestrator at call
//! time. It comes from an explicit file, the user's `packages.toml`, or the
//! built-in default list, in that order.

use crate::package::PackageId;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Built-in removal list: vendor and partner apps preinstalled on Samsung devices.
const DEFAULT_PACKAGES: &[&str] = &[
    "com.samsung.android.smartswitchassistant",
    "com.samsung.android.themestore",
    "com.samsung.android.themecenter",
    "com.samsung.android.game.gos",
    "com.samsung.android.game.gametools",
    "com.samsung.android.game.gamehome",
    "com.samsung.android.kidsinstaller",
    "com.samsung.android.aircommandmanager",
    "com.samsung.android.app.appsedge",
    "com.samsung.android.app.updatecenter",
    "com.samsung.android.shortcutbackupservice",
    "com.samsung.android.scloud",
    "com.samsung.android.app.sharelive",
    "com.samsung.android.dialer",
    "com.samsung.android.messaging",
    "com.samsung.android.app.contacts",
    "com.sec.android.app.samsungapps",
    "com.sec.android.easyMover.Agent",
    "com.sec.android.app.chromecustomizations",
    "com.android.chrome",
    "tv.sweet.player",
    "com.netflix.partner.activation",
    "com.microsoft.skydrive",
    "com.facebook.services",
    "com.facebook.katana",
    "com.facebook.appmanager",
    "com.facebook.system",
    "com.einnovation.temu",
    "com.google.android.apps.tachyon",
    "com.netflix.mediaclient",
    "com.scopely.monopolygo",
    "com.samsung.android.bbc.bbcagent",
    "com.samsung.android.privateshare",
    "com.aura.oobe.samsung.gl",
];

/// Errors loading a package list file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// File that was read.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// The file is not valid TOML for a package list.
    #[error("Failed to parse {path}: {source}")]
    Parse {
        /// File that was parsed.
        path: PathBuf,
        /// Underlying error.
        source: toml::de::Error,
    },
}

/// The packages to remove.
///
/// File format:
///
/// ```toml
/// packages = [
///     "com.facebook.katana",
///     "com.netflix.mediaclient",
/// ]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PackageConfig {
    /// Packages in removal order.
    pub packages: Vec<PackageId>,
}

impl PackageConfig {
    /// The built-in list.
    pub fn builtin() -> Self {
        Self {
            packages: default_packages(),
        }
    }

    /// Parse a package list from TOML text.
    ///
    /// # Errors
    ///
    /// Returns the TOML error, which includes empty identifiers.
    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Load a package list file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Pick the package list: `explicit` if given, else the user's
    /// `packages.toml` when present, else the built-in list.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the chosen file cannot be loaded.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "loading package list");
            return Self::load(path);
        }

        if let Some(path) = crate::paths::packages_file().filter(|p| p.is_file()) {
            debug!(path = %path.display(), "loading user package list");
            return Self::load(&path);
        }

        debug!("using built-in package list");
        Ok(Self::builtin())
    }
}

/// The built-in package list, in removal order.
pub fn default_packages() -> Vec<PackageId> {
    DEFAULT_PACKAGES
        .iter()
        .filter_map(|id| PackageId::new(id).ok())
        .collect()
}

/// Actions the interactive menu can dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    /// Show the instructional screens.
    Guide,
    /// Show the packages installed on the device.
    ListPackages,
    /// Remove every configured package.
    Clean,
    /// Leave the program.
    Exit,
}

/// A labelled menu entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOption {
    /// Text shown in the menu.
    pub label: String,
    /// Action dispatched when the entry is confirmed.
    pub action: MenuAction,
}

impl MenuOption {
    /// Create a menu entry.
    pub fn new(label: impl Into<String>, action: MenuAction) -> Self {
        Self {
            label: label.into(),
            action,
        }
    }
}

/// The reference menu: Guide, List packages, Clean device, Exit.
pub fn default_menu() -> Vec<MenuOption> {
    vec![
        MenuOption::new("Guide", MenuAction::Guide),
        MenuOption::new("List packages", MenuAction::ListPackages),
        MenuOption::new("Clean device", MenuAction::Clean),
        MenuOption::new("Exit", MenuAction::Exit),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_list_is_complete() {
        let packages = default_packages();
        assert_eq!(packages.len(), DEFAULT_PACKAGES.len());
        assert_eq!(packages[0], "com.samsung.android.smartswitchassistant");
        assert_eq!(packages.last().unwrap(), &"com.aura.oobe.samsung.gl");
    }

    #[test]
    fn test_parse_keeps_order_and_duplicates() {
        let config = PackageConfig::parse(
            r#"packages = ["com.b", "com.a", "com.b"]"#,
        )
        .unwrap();
        let names: Vec<&str> = config.packages.iter().map(PackageId::as_str).collect();
        assert_eq!(names, vec!["com.b", "com.a", "com.b"]);
    }

    #[test]
    fn test_parse_rejects_empty_identifier() {
        assert!(PackageConfig::parse(r#"packages = ["com.a", "  "]"#).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "packages = [\"a.b.c\", \"x.y.z\"]").unwrap();

        let config = PackageConfig::resolve(Some(file.path())).unwrap();
        assert_eq!(config.packages.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let err = PackageConfig::load(Path::new("/nonexistent/packages.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_default_menu_order() {
        let actions: Vec<MenuAction> = default_menu().iter().map(|o| o.action).collect();
        assert_eq!(
            actions,
            vec![
                MenuAction::Guide,
                MenuAction::ListPackages,
                MenuAction::Clean,
                MenuAction::Exit
            ]
        );
    }
}
