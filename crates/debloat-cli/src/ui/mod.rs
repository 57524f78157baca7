//! UI Module - Clean separation of terminal output concerns
//!
//! ```text
//! ┌─────────────┐
//! │    Menu     │  MenuState + dispatch
//! └──────┬──────┘
//!        │ draws on / suspends
//!        ▼
//! ┌─────────────┐        ┌─────────────┐
//! │   Surface   │        │   Output    │  line output + Reporter impl
//! └──────┬──────┘        └──────┬──────┘
//!        └──────────┬───────────┘
//!                   ▼
//!            ┌─────────────┐
//!            │    Theme    │  Colors, icons, layout
//!            └─────────────┘
//! ```
//!
//! - [`theme`] - Colors, icons, and layout constants
//! - [`output`] - Line output used by commands and the removal reporter
//! - [`surface`] - Raw-mode terminal ownership and scoped suspension
//! - [`guide`] - Instructional screens

pub mod guide;
pub mod output;
pub mod surface;
pub mod theme;

// Re-export main types for convenience
pub use output::{Output, SharedBuffer};
pub use surface::{CrosstermSurface, Surface, Suspended};
pub use theme::Theme;
