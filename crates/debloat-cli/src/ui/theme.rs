//! UI Theme - Design system constants
//!
//! This module defines all visual elements used in debloat's UI:
//! - Colors
//! - Icons
//! - Menu and table layout
//!
//! Centralizing these keeps the menu, the guide and the removal log
//! visually consistent.

use crossterm::style::Color;

/// Default theme for the debloat UI
#[derive(Debug, Clone, Default)]
pub struct Theme {
    /// Colors for different UI elements
    pub colors: ColorScheme,
    /// Status icons
    pub icons: Icons,
    /// Layout constants
    pub layout: Layout,
}

/// Color scheme for UI elements
#[derive(Debug, Clone)]
pub struct ColorScheme {
    /// Package identifiers (primary content)
    pub package_name: Color,
    /// Secondary info (states, hints, counts)
    pub secondary: Color,
    /// Headers and titles
    pub header: Color,
    /// Success states
    pub success: Color,
    /// Warning states
    pub warning: Color,
    /// Error states
    pub error: Color,
    /// Foreground of the highlighted menu entry
    pub highlight_fg: Color,
    /// Background of the highlighted menu entry
    pub highlight_bg: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            package_name: Color::Cyan,
            secondary: Color::DarkGrey,
            header: Color::White,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            highlight_fg: Color::Black,
            highlight_bg: Color::Cyan,
        }
    }
}

/// Status icons for different states
#[derive(Debug, Clone)]
pub struct Icons {
    /// Success/completed state (✓)
    pub success: &'static str,
    /// Error/failed state (✗)
    pub error: &'static str,
    /// Warning state (⚠)
    pub warning: &'static str,
    /// Info/Tip state (ℹ)
    pub info: &'static str,
    /// Menu cursor (›)
    pub cursor: &'static str,
}

impl Default for Icons {
    fn default() -> Self {
        Self {
            success: "✓",
            error: "✗",
            warning: "⚠",
            info: "ℹ",
            cursor: "›",
        }
    }
}

/// Layout constants
#[derive(Debug, Clone)]
pub struct Layout {
    /// Row of the menu title
    pub title_row: u16,
    /// Row of the first menu entry
    pub menu_top: u16,
    /// Column of the menu entries
    pub menu_col: u16,
    /// Width allocated for the package column in the removal log
    pub name_width: usize,
    /// Width of section rules
    pub rule_width: usize,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            title_row: 1,
            menu_top: 3,
            menu_col: 2,
            name_width: 44,
            rule_width: 60,
        }
    }
}

/// Pad or truncate `text` to exactly `width` characters.
pub fn fit(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count > width && width > 1 {
        let mut cut: String = text.chars().take(width - 1).collect();
        cut.push('…');
        cut
    } else {
        format!("{text:<width$}")
    }
}
