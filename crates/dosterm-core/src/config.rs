//! Shell configuration.
//!
//! Centralizes the constants used by the command handlers and front ends.
//! Text assets are loaded at compile time using `include_str!`.

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// Static reference printed by `help`.
pub const HELP_TEXT: &str = include_str!("../assets/text/help.txt");

/// Blog posts consumed by `read` and `BLOG\POSTS.TXT`.
pub const POSTS_JSON: &str = include_str!("../assets/posts.json");

// =============================================================================
// Application Metadata
// =============================================================================

/// Product name shown by `ver` and the welcome header.
pub const APP_TITLE: &str = "Oguz Tozkoparan DOS Terminal";

/// Product version shown by `ver`.
pub const APP_VERSION: &str = "1.0.0";

/// Hint printed under the welcome banner.
pub const WELCOME_HINT: &str = "Type 'help' for available commands.";

/// Copyright holder shown by `ver`.
pub const APP_OWNER: &str = "Oguz Tozkoparan";

/// Year shown in the `ver` copyright line.
pub const COPYRIGHT_YEAR: u16 = 2024;

// =============================================================================
// Filesystem Configuration
// =============================================================================

/// Name of the root directory, always the first element of a session path.
pub const ROOT_NAME: &str = "C:";

/// Separator between path components in prompts and listings.
pub const PATH_SEPARATOR: &str = "\\";

/// Marker appended to the path to form the prompt.
pub const PROMPT_MARKER: &str = ">";

/// Synthetic timestamp printed for every `dir` entry.
pub const DIR_ENTRY_STAMP: &str = "01-01-24  12:00";

/// Synthetic size column for files in `dir`.
pub const DIR_FILE_SIZE: &str = "     1,024";

/// Size column for directories in `dir`.
pub const DIR_DIR_SIZE: &str = "    <DIR>";

/// Byte count each file contributes to the `dir` summary.
pub const SYNTHETIC_FILE_BYTES: usize = 1024;

// =============================================================================
// Blog Reader
// =============================================================================

/// Width of the `=` rules framing a post.
pub const READER_RULE_WIDTH: usize = 60;

/// Column width of post ids in `read` listings.
pub const READER_ID_WIDTH: usize = 25;

/// A line containing this many repeated `=` or `-` is a separator.
pub const SEPARATOR_RUN: usize = 10;
