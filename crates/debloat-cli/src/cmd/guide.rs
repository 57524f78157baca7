//! Guide command

use crate::ui::Output;
use crate::ui::guide::SCREENS;

/// Print every guide screen
pub fn guide(output: &Output) {
    for screen in SCREENS {
        output.section(screen.title);
        for line in screen.lines {
            output.line(&format!("  {line}"));
        }
    }
    output.line("");
}
