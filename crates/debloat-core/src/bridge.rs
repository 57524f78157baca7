//! Device bridge command templates.
//!
//! The core depends on exactly three command shapes of the bridge tool.

use crate::exec::CommandLine;
use crate::package::PackageId;
use std::path::{Path, PathBuf};

/// Default bridge executable, resolved through `PATH`.
pub const DEFAULT_PROGRAM: &str = "adb";

/// The external device bridge tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bridge {
    program: PathBuf,
}

impl Bridge {
    /// Use `program` as the bridge executable.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// The bridge executable.
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// `<tool> devices`: enumerate attached devices. The first non-empty
    /// line of its output is always a header.
    pub fn devices(&self) -> CommandLine {
        CommandLine::new(&self.program).args(["devices"])
    }

    /// `<tool> shell pm list packages`: read-only package listing.
    pub fn list_packages(&self) -> CommandLine {
        CommandLine::new(&self.program).args(["shell", "pm", "list", "packages"])
    }

    /// `<tool> shell pm uninstall --user 0 <id>`: remove `id` for the current
    /// user profile only.
    pub fn uninstall(&self, id: &PackageId) -> CommandLine {
        CommandLine::new(&self.program).args(["shell", "pm", "uninstall", "--user", "0", id.as_str()])
    }
}

impl Default for Bridge {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_shapes() {
        let bridge = Bridge::default();
        assert_eq!(bridge.devices().to_string(), "adb devices");
        assert_eq!(bridge.list_packages().to_string(), "adb shell pm list packages");

        let id = PackageId::new("com.facebook.katana").unwrap();
        assert_eq!(
            bridge.uninstall(&id).to_string(),
            "adb shell pm uninstall --user 0 com.facebook.katana"
        );
    }

    #[test]
    fn test_package_id_is_single_argument() {
        let bridge = Bridge::new("/opt/platform-tools/adb");
        let id = PackageId::new("a.b; rm -rf /").unwrap();
        let cmd = bridge.uninstall(&id);
        assert_eq!(cmd.args.last().map(String::as_str), Some("a.b; rm -rf /"));
        assert_eq!(cmd.args.len(), 6);
    }
}
