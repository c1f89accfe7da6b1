//! Web front end configuration.
//!
//! Shell text and metadata live in `dosterm_core::config`; only browser
//! presentation settings are kept here.

// =============================================================================
// Window
// =============================================================================

/// Title shown in the terminal window header.
pub const WINDOW_TITLE: &str = "DOS Terminal - Oguz Tozkoparan";

/// Heading of the boot splash.
pub const SPLASH_TITLE: &str = "Oguz Tozkoparan DOS TERMINAL";

/// Where `exit` and the header buttons navigate to.
pub const EXIT_URL: &str = "/";

/// Glyph drawn after the input field.
pub const CURSOR_GLYPH: &str = "█";

// =============================================================================
// Timing
// =============================================================================

/// How long the boot splash stays up before the terminal appears.
pub const BOOT_SPLASH_MS: u32 = 3000;

/// Interval of the status bar clock.
pub const CLOCK_TICK_MS: u32 = 1000;

// =============================================================================
// Logging
// =============================================================================

/// Maximum level forwarded to the browser console.
pub const LOG_LEVEL: log::LevelFilter = if cfg!(debug_assertions) {
    log::LevelFilter::Debug
} else {
    log::LevelFilter::Info
};

// =============================================================================
// Icon Theme
// =============================================================================

/// Icon theme selection.
///
/// Only `Lucide` is compiled in; the enum keeps the switch point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconTheme {
    #[default]
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Lucide;
