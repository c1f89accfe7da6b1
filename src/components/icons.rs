//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArrowLeft as Back, LuMaximize2 as Maximize, LuMinimize2 as Minimize,
        LuTerminal as Terminal, LuX as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
        };
    };
}

themed_icon!(TERMINAL, Terminal);
themed_icon!(BACK, Back);
themed_icon!(MAXIMIZE, Maximize);
themed_icon!(MINIMIZE, Minimize);
themed_icon!(CLOSE, Close);
