//! UI components built with Leptos.
//!
//! - [`Screen`] - Boot splash or terminal window (main entry point)
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`status`] - Status bar showing path, entry count and clock
//! - [`terminal`] - Terminal emulator interface

pub mod icons;
pub mod status;
pub mod terminal;

pub use terminal::Screen;
