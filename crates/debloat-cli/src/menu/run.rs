//! Menu loop and action dispatch.

use super::{MenuKey, MenuState};
use crate::cmd;
use crate::context::Context;
use crate::ui::guide::SCREENS;
use crate::ui::{Output, Surface, Suspended, Theme};
use anyhow::{Context as _, Result};
use debloat_core::MenuAction;

const TITLE: &str = "debloat - remove preinstalled Android apps";
const HINT: &str = "↑/↓ move   Enter select";
const RETURN_PROMPT: &str = "Press Enter to return to the menu...";

/// The interactive menu: state, command context and output.
#[derive(Debug)]
pub struct Menu {
    state: MenuState,
    ctx: Context,
    output: Output,
    theme: Theme,
}

impl Menu {
    pub fn new(state: MenuState, ctx: Context, output: Output) -> Self {
        Self {
            state,
            ctx,
            output,
            theme: Theme::default(),
        }
    }

    pub fn state(&self) -> &MenuState {
        &self.state
    }

    /// Run until the user chooses [`MenuAction::Exit`].
    ///
    /// The highlight is kept across actions. Device actions run with the
    /// surface suspended and resume it on every exit path.
    pub fn run(&mut self, surface: &mut dyn Surface) -> Result<()> {
        loop {
            let action = self.choose(surface)?;
            tracing::debug!(?action, "menu action");

            match action {
                MenuAction::Exit => return Ok(()),
                MenuAction::Guide => self.guide(surface)?,
                MenuAction::ListPackages => {
                    let mut suspended = Suspended::new(surface).context("Failed to suspend terminal")?;
                    cmd::list::list(&self.ctx, &self.output);
                    suspended.pause(RETURN_PROMPT)?;
                }
                MenuAction::Clean => {
                    let mut suspended = Suspended::new(surface).context("Failed to suspend terminal")?;
                    cmd::clean::clean(&self.ctx, &self.output, false)?;
                    suspended.pause(RETURN_PROMPT)?;
                }
            }
        }
    }

    /// Render and read keys until an entry is confirmed.
    fn choose(&mut self, surface: &mut dyn Surface) -> Result<MenuAction> {
        loop {
            self.render(surface)?;
            let key = surface.read_key().context("Failed to read key")?;
            if let Some(action) = self.state.handle(key) {
                return Ok(action);
            }
        }
    }

    fn render(&self, surface: &mut dyn Surface) -> Result<()> {
        let layout = &self.theme.layout;
        surface.clear()?;
        surface.print_at(layout.title_row, layout.menu_col, TITLE, false)?;

        for (i, option) in self.state.options().iter().enumerate() {
            let selected = i == self.state.highlighted();
            let cursor = if selected { self.theme.icons.cursor } else { " " };
            let text = format!("{cursor} {}", option.label);
            surface.print_at(layout.menu_top + i as u16, layout.menu_col, &text, selected)?;
        }

        let hint_row = layout.menu_top + self.state.options().len() as u16 + 1;
        surface.print_at(hint_row, layout.menu_col, HINT, false)?;
        surface.flush()?;
        Ok(())
    }

    /// Show each guide screen, advancing on any key.
    fn guide(&self, surface: &mut dyn Surface) -> Result<()> {
        let layout = &self.theme.layout;
        for screen in SCREENS {
            surface.clear()?;
            surface.print_at(layout.title_row, layout.menu_col, screen.title, true)?;
            for (i, line) in screen.lines.iter().enumerate() {
                surface.print_at(layout.menu_top + i as u16, layout.menu_col, line, false)?;
            }
            let prompt_row = layout.menu_top + screen.lines.len() as u16 + 1;
            surface.print_at(prompt_row, layout.menu_col, "Press any key to continue", false)?;
            surface.flush()?;
            let _: MenuKey = surface.read_key()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::SharedBuffer;
    use debloat_core::config::default_menu;
    use debloat_core::{Bridge, CommandLine, CommandResult, Executor, PackageId};
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    /// Answers `devices` with `devices_output` and every removal with "Success".
    struct StubBridge {
        devices_output: String,
        calls: Mutex<Vec<String>>,
    }

    impl StubBridge {
        fn new(devices_output: &str) -> Arc<Self> {
            Arc::new(Self {
                devices_output: devices_output.to_string(),
                calls: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl Executor for StubBridge {
        fn execute(&self, command: &CommandLine) -> CommandResult {
            self.calls.lock().unwrap().push(command.to_string());
            match command.args.first().map(String::as_str) {
                Some("devices") => CommandResult::Output(self.devices_output.clone()),
                _ if command.args.contains(&"list".to_string()) => {
                    CommandResult::Output("package:a.b.c\npackage:com.other\n".to_string())
                }
                _ => CommandResult::Output("Success\n".to_string()),
            }
        }
    }

    /// Plays back keys and records what the menu does to the terminal.
    #[derive(Default)]
    struct ScriptedSurface {
        keys: VecDeque<MenuKey>,
        events: Vec<String>,
        highlighted_rows: Vec<String>,
        suspended: bool,
    }

    impl ScriptedSurface {
        fn with_keys(keys: &[MenuKey]) -> Self {
            Self {
                keys: keys.iter().copied().collect(),
                ..Self::default()
            }
        }

        fn suspends(&self) -> usize {
            self.events.iter().filter(|e| *e == "suspend").count()
        }

        fn resumes(&self) -> usize {
            self.events.iter().filter(|e| *e == "resume").count()
        }
    }

    impl Surface for ScriptedSurface {
        fn clear(&mut self) -> std::io::Result<()> {
            assert!(!self.suspended, "drew while suspended");
            Ok(())
        }
        fn print_at(&mut self, _: u16, _: u16, text: &str, highlight: bool) -> std::io::Result<()> {
            if highlight {
                self.highlighted_rows.push(text.to_string());
            }
            Ok(())
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
        fn read_key(&mut self) -> std::io::Result<MenuKey> {
            self.keys
                .pop_front()
                .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "no keys left"))
        }
        fn suspend(&mut self) -> std::io::Result<()> {
            self.suspended = true;
            self.events.push("suspend".to_string());
            Ok(())
        }
        fn resume(&mut self) -> std::io::Result<()> {
            self.suspended = false;
            self.events.push("resume".to_string());
            Ok(())
        }
        fn pause(&mut self, _: &str) -> std::io::Result<()> {
            self.events.push("pause".to_string());
            Ok(())
        }
    }

    const ATTACHED: &str = "List of devices attached\nR58N12ABC\tdevice\n";
    const DETACHED: &str = "List of devices attached\n\n";

    fn menu(executor: Arc<StubBridge>, packages: &[&str]) -> (Menu, SharedBuffer) {
        let buffer = SharedBuffer::default();
        let ctx = Context::new(
            executor,
            Bridge::default(),
            packages.iter().map(|p| PackageId::new(p).unwrap()).collect(),
        );
        let state = MenuState::new(default_menu()).unwrap();
        (
            Menu::new(state, ctx, Output::with_writer(buffer.clone())),
            buffer,
        )
    }

    #[test]
    fn test_exit_runs_no_device_commands() {
        let exec = StubBridge::new(ATTACHED);
        let (mut menu, _) = menu(exec.clone(), &["a.b.c"]);
        let mut surface = ScriptedSurface::with_keys(&[MenuKey::Up, MenuKey::Enter]);

        menu.run(&mut surface).unwrap();

        assert!(exec.calls().is_empty());
        assert!(surface.events.is_empty());
    }

    #[test]
    fn test_clean_removes_every_package_then_returns() {
        let exec = StubBridge::new(ATTACHED);
        let (mut menu, buffer) = menu(exec.clone(), &["a.b.c", "x.y.z"]);
        let mut surface = ScriptedSurface::with_keys(&[
            MenuKey::Down,
            MenuKey::Down,
            MenuKey::Enter,
            MenuKey::Down,
            MenuKey::Enter,
        ]);

        menu.run(&mut surface).unwrap();

        assert_eq!(
            exec.calls(),
            vec![
                "adb devices",
                "adb shell pm uninstall --user 0 a.b.c",
                "adb shell pm uninstall --user 0 x.y.z",
            ]
        );
        assert_eq!(surface.events, vec!["suspend", "pause", "resume"]);
        assert!(buffer.contents().contains("2 removed"));
    }

    #[test]
    fn test_clean_without_device_skips_removal() {
        let exec = StubBridge::new(DETACHED);
        let (mut menu, buffer) = menu(exec.clone(), &["a.b.c"]);
        let mut surface =
            ScriptedSurface::with_keys(&[MenuKey::Down, MenuKey::Down, MenuKey::Enter, MenuKey::Up, MenuKey::Up, MenuKey::Up, MenuKey::Enter]);

        menu.run(&mut surface).unwrap();

        assert_eq!(exec.calls(), vec!["adb devices"]);
        assert_eq!(surface.suspends(), surface.resumes());
        assert!(buffer.contents().contains("No device connected"));
    }

    #[test]
    fn test_list_packages_and_highlight_persists() {
        let exec = StubBridge::new(ATTACHED);
        let (mut menu, buffer) = menu(exec.clone(), &["a.b.c"]);
        let mut surface = ScriptedSurface::with_keys(&[MenuKey::Down, MenuKey::Enter]);

        // Key script runs out after the listing, ending the loop with an error.
        assert!(menu.run(&mut surface).is_err());

        assert_eq!(exec.calls(), vec!["adb devices", "adb shell pm list packages"]);
        assert_eq!(menu.state().highlighted(), 1);
        assert_eq!(
            surface.highlighted_rows.last().map(String::as_str),
            Some("› List packages")
        );
        assert_eq!(surface.events, vec!["suspend", "pause", "resume"]);

        let text = buffer.contents();
        assert!(text.contains("com.other"));
        assert!(text.contains("on removal list"));
        assert!(text.contains("2 packages"));
    }

    #[test]
    fn test_guide_advances_on_any_key() {
        let exec = StubBridge::new(ATTACHED);
        let (mut menu, _) = menu(exec.clone(), &[]);
        let mut keys = vec![MenuKey::Enter];
        keys.extend(std::iter::repeat_n(MenuKey::Other, SCREENS.len()));
        keys.extend([MenuKey::Up, MenuKey::Enter]);
        let mut surface = ScriptedSurface::with_keys(&keys);

        menu.run(&mut surface).unwrap();

        assert!(exec.calls().is_empty());
        assert!(surface.keys.is_empty());
        for screen in SCREENS {
            assert!(surface.highlighted_rows.iter().any(|r| r == screen.title));
        }
    }
}
