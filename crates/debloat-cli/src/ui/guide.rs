//! Guide screens shown from the menu and by `debloat guide`.

/// One page of instructions.
#[derive(Debug, Clone, Copy)]
pub struct GuideScreen {
    pub title: &'static str,
    pub lines: &'static [&'static str],
}

pub const SCREENS: &[GuideScreen] = &[
    GuideScreen {
        title: "1/4  Enable developer options",
        lines: &[
            "Open Settings > About phone > Software information.",
            "Tap \"Build number\" seven times until developer mode is enabled.",
        ],
    },
    GuideScreen {
        title: "2/4  Enable USB debugging",
        lines: &[
            "Open Settings > Developer options.",
            "Turn on \"USB debugging\".",
        ],
    },
    GuideScreen {
        title: "3/4  Connect the device",
        lines: &[
            "Install the Android platform tools so that `adb` is on your PATH,",
            "or pass its location with --adb <PATH>.",
            "Plug the device in and accept the \"Allow USB debugging\" prompt.",
            "Only one device should be connected.",
        ],
    },
    GuideScreen {
        title: "4/4  Clean the device",
        lines: &[
            "Choose \"Clean device\" to remove every package on the removal list.",
            "Packages are removed for the current user only and can be restored with:",
            "  adb shell cmd package install-existing <package>",
            "Edit ~/.debloat/packages.toml (or pass --packages <FILE>) to change the list.",
        ],
    },
];
