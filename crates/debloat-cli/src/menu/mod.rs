//! Interactive menu.
//!
//! [`MenuState`] is the pure navigation state machine; [`Menu`] drives it
//! against a [`Surface`](crate::ui::Surface) and dispatches the chosen actions.

mod run;

pub use run::Menu;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use debloat_core::{MenuAction, MenuOption};
use thiserror::Error;

/// The keys the menu distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKey {
    /// Move the highlight up.
    Up,
    /// Move the highlight down.
    Down,
    /// Confirm the highlighted entry.
    Enter,
    /// Anything else; ignored.
    Other,
}

impl MenuKey {
    /// Map a terminal key event. Release events yield `None`.
    pub fn from_key_event(event: &KeyEvent) -> Option<Self> {
        if event.kind == KeyEventKind::Release {
            return None;
        }
        Some(match event.code {
            KeyCode::Up | KeyCode::Char('k') => Self::Up,
            KeyCode::Down | KeyCode::Char('j') => Self::Down,
            KeyCode::Enter => Self::Enter,
            _ => Self::Other,
        })
    }
}

/// Errors building a menu.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MenuError {
    /// A menu needs at least one entry.
    #[error("Menu has no options")]
    Empty,
}

/// Ordered menu entries and the highlighted index.
///
/// The highlighted index is always a valid index into the options: moving
/// past either end wraps around.
#[derive(Debug, Clone)]
pub struct MenuState {
    options: Vec<MenuOption>,
    highlighted: usize,
}

impl MenuState {
    /// Create a menu with the first entry highlighted.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::Empty`] if `options` is empty.
    pub fn new(options: Vec<MenuOption>) -> Result<Self, MenuError> {
        if options.is_empty() {
            return Err(MenuError::Empty);
        }
        Ok(Self {
            options,
            highlighted: 0,
        })
    }

    /// The entries, in display order.
    pub fn options(&self) -> &[MenuOption] {
        &self.options
    }

    /// Index of the highlighted entry.
    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    /// Apply one key. Returns the chosen action on Enter.
    pub fn handle(&mut self, key: MenuKey) -> Option<MenuAction> {
        let n = self.options.len();
        match key {
            MenuKey::Up => {
                self.highlighted = (self.highlighted + n - 1) % n;
                None
            }
            MenuKey::Down => {
                self.highlighted = (self.highlighted + 1) % n;
                None
            }
            MenuKey::Enter => Some(self.options[self.highlighted].action),
            MenuKey::Other => None,
        }
    }
}
