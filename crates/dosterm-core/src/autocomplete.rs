//! Tab autocomplete for command names, directory entries and blog posts.
//!
//! This module provides completion for:
//! - Command names (e.g., "tr" -> "tree ")
//! - Directory entries for `cd`, `type`, `del`, `ren`
//! - Post ids for `read`
//!
//! The autocomplete system supports:
//! - Single match: complete immediately, with a trailing space
//! - Multiple matches: extend to the common prefix and list all options

use crate::commands::command_names;
use crate::filesystem::VirtualFs;
use crate::models::BlogStore;
use crate::session::ShellSession;

// ============================================================================
// Public Types
// ============================================================================

/// Result of an autocomplete attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AutocompleteResult {
    /// Single match - the whole new input line.
    Single(String),
    /// Multiple matches.
    Multiple {
        /// New input line when the common prefix is longer than what was typed.
        extended: Option<String>,
        /// Every candidate, for the suggestion panel.
        suggestions: Vec<String>,
    },
    /// No matches found.
    None,
}

// ============================================================================
// Configuration
// ============================================================================

/// Commands whose argument is an entry of the current directory.
const ENTRY_COMMANDS: &[&str] = &["cd", "type", "del", "ren"];

// ============================================================================
// Public API
// ============================================================================

/// Perform autocomplete on Tab press.
pub fn autocomplete(
    input: &str,
    session: &ShellSession,
    fs: &VirtualFs,
    blog: &BlogStore,
) -> AutocompleteResult {
    let mut tokens: Vec<&str> = input.split_whitespace().collect();
    if tokens.is_empty() {
        // A blank line completes like an empty command name.
        tokens.push("");
    }

    let candidates = match tokens.as_slice() {
        [partial] => command_candidates(partial),
        [cmd, partial] => {
            let cmd = cmd.to_lowercase();
            if ENTRY_COMMANDS.contains(&cmd.as_str()) {
                entry_candidates(partial, cmd == "cd", session, fs)
            } else if cmd == "read" {
                post_candidates(partial, blog)
            } else {
                Vec::new()
            }
        }
        _ => Vec::new(),
    };

    resolve(&tokens, candidates)
}

// ============================================================================
// Candidates
// ============================================================================

fn command_candidates(partial: &str) -> Vec<String> {
    let partial_lower = partial.to_lowercase();
    command_names()
        .filter(|name| name.starts_with(&partial_lower))
        .map(str::to_string)
        .collect()
}

/// Children of the current directory, `.` and `..` first for `cd`.
fn entry_candidates(
    partial: &str,
    dirs_only: bool,
    session: &ShellSession,
    fs: &VirtualFs,
) -> Vec<String> {
    let Some(current) = fs.dir_at(session.current_path()) else {
        return Vec::new();
    };

    let partial_upper = partial.to_uppercase();
    let mut candidates = Vec::new();

    if dirs_only {
        if ".".starts_with(partial) {
            candidates.push(".".to_string());
        }
        if "..".starts_with(partial) && !session.is_at_root() {
            candidates.push("..".to_string());
        }
    }

    candidates.extend(
        current
            .children()
            .filter(|node| !dirs_only || node.is_directory())
            .filter(|node| node.key().as_str().starts_with(&partial_upper))
            .map(|node| node.name().to_string()),
    );
    candidates
}

/// Post ids starting with the partial, or whose title contains it.
///
/// Hyphens in the partial are read as spaces for the title match only.
fn post_candidates(partial: &str, blog: &BlogStore) -> Vec<String> {
    let lower = partial.to_lowercase();
    let spaced = lower.replace('-', " ");
    blog.iter()
        .filter(|post| {
            post.id.to_lowercase().starts_with(&lower)
                || post.title.to_lowercase().contains(&spaced)
        })
        .map(|post| post.id.clone())
        .collect()
}

// ============================================================================
// Resolution
// ============================================================================

/// Rebuild the line with its last token replaced.
fn replace_last(tokens: &[&str], replacement: &str) -> String {
    match tokens.split_last() {
        Some((_, head)) if !head.is_empty() => format!("{} {}", head.join(" "), replacement),
        _ => replacement.to_string(),
    }
}

fn resolve(tokens: &[&str], candidates: Vec<String>) -> AutocompleteResult {
    match candidates.len() {
        0 => AutocompleteResult::None,
        1 => AutocompleteResult::Single(format!("{} ", replace_last(tokens, &candidates[0]))),
        _ => {
            let typed = tokens.last().map_or(0, |t| t.chars().count());
            let common = find_common_prefix(&candidates);
            let extended =
                (common.chars().count() > typed).then(|| replace_last(tokens, &common));
            AutocompleteResult::Multiple {
                extended,
                suggestions: candidates,
            }
        }
    }
}

// ============================================================================
// Utilities
// ============================================================================

/// Find the common prefix of multiple strings (case-insensitive).
///
/// The casing of the first string is kept.
pub fn find_common_prefix(strings: &[String]) -> String {
    let Some((first, rest)) = strings.split_first() else {
        return String::new();
    };

    let mut prefix_len = first.chars().count();
    for s in rest {
        prefix_len = first
            .chars()
            .zip(s.chars())
            .take(prefix_len)
            .take_while(|(a, b)| a.to_lowercase().eq(b.to_lowercase()))
            .count();
    }

    first.chars().take(prefix_len).collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixture {
        fs: VirtualFs,
        blog: BlogStore,
        session: ShellSession,
    }

    impl Fixture {
        fn at(path: &[&str]) -> Self {
            let blog = BlogStore::builtin().unwrap();
            let fs = VirtualFs::seeded(&blog);
            let mut session = ShellSession::new();
            for part in path {
                session.push_dir(*part);
            }
            Self { fs, blog, session }
        }

        fn complete(&self, input: &str) -> AutocompleteResult {
            autocomplete(input, &self.session, &self.fs, &self.blog)
        }
    }

    #[test]
    fn test_command_completion_single() {
        let fx = Fixture::at(&[]);
        assert_eq!(fx.complete("tr"), AutocompleteResult::Single("tree ".into()));
        assert_eq!(fx.complete("AT"), AutocompleteResult::Single("attrib ".into()));
    }

    #[test]
    fn test_command_completion_multiple() {
        let fx = Fixture::at(&[]);
        match fx.complete("c") {
            AutocompleteResult::Multiple { extended, suggestions } => {
                assert_eq!(extended, None);
                assert_eq!(suggestions, vec!["cd", "cls", "copy"]);
            }
            other => panic!("Expected multiple matches, got {:?}", other),
        }
    }

    #[test]
    fn test_command_completion_extends_prefix() {
        let fx = Fixture::at(&[]);
        match fx.complete("d") {
            AutocompleteResult::Multiple { extended, suggestions } => {
                assert_eq!(extended, None);
                assert_eq!(suggestions, vec!["dir", "date", "del"]);
            }
            other => panic!("Expected multiple matches, got {:?}", other),
        }
        match fx.complete("de") {
            AutocompleteResult::Single(line) => assert_eq!(line, "del "),
            other => panic!("Expected single match, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_line_lists_every_command() {
        let fx = Fixture::at(&[]);
        match fx.complete("   ") {
            AutocompleteResult::Multiple { suggestions, .. } => {
                assert_eq!(suggestions.len(), command_names().count());
            }
            other => panic!("Expected multiple matches, got {:?}", other),
        }
    }

    #[test]
    fn test_no_match() {
        let fx = Fixture::at(&[]);
        assert_eq!(fx.complete("xyz"), AutocompleteResult::None);
        assert_eq!(fx.complete("echo hel"), AutocompleteResult::None);
        assert_eq!(fx.complete("cd DOS extra"), AutocompleteResult::None);
    }

    #[test]
    fn test_cd_single_directory() {
        let fx = Fixture::at(&[]);
        assert_eq!(fx.complete("cd W"), AutocompleteResult::Single("cd WINDOWS ".into()));
        assert_eq!(fx.complete("CD win"), AutocompleteResult::Single("CD WINDOWS ".into()));
    }

    #[test]
    fn test_cd_only_offers_directories() {
        let fx = Fixture::at(&["DOS"]);
        assert_eq!(fx.complete("cd C"), AutocompleteResult::None);
    }

    #[test]
    fn test_cd_dot_entries() {
        let fx = Fixture::at(&["WINDOWS"]);
        assert_eq!(
            fx.complete("cd ."),
            AutocompleteResult::Multiple {
                extended: None,
                suggestions: vec![".".into(), "..".into()],
            }
        );

        let root = Fixture::at(&[]);
        assert_eq!(root.complete("cd ."), AutocompleteResult::Single("cd . ".into()));
    }

    #[test]
    fn test_type_extends_common_prefix() {
        let fx = Fixture::at(&["DOS"]);
        assert_eq!(
            fx.complete("type c"),
            AutocompleteResult::Multiple {
                extended: Some("type CO".into()),
                suggestions: vec!["COMMAND.COM".into(), "CONFIG.SYS".into()],
            }
        );
        assert_eq!(
            fx.complete("type CONF"),
            AutocompleteResult::Single("type CONFIG.SYS ".into())
        );
    }

    #[test]
    fn test_del_and_ren_offer_files_and_dirs() {
        let fx = Fixture::at(&[]);
        assert_eq!(fx.complete("del T"), AutocompleteResult::Single("del TEMP ".into()));
        assert_eq!(fx.complete("ren B"), AutocompleteResult::Single("ren BLOG ".into()));
    }

    #[test]
    fn test_read_completion() {
        let fx = Fixture::at(&[]);
        assert_eq!(
            fx.complete("read perf"),
            AutocompleteResult::Single("read performance-optimization ".into())
        );
        // Title match with hyphens read as spaces.
        assert_eq!(
            fx.complete("read scalable-design"),
            AutocompleteResult::Single("read design-systems-guide ".into())
        );
    }

    #[test]
    fn test_read_completion_hyphenated_id() {
        let fx = Fixture::at(&[]);
        assert_eq!(
            fx.complete("read glassmorphism-tr"),
            AutocompleteResult::Single("read glassmorphism-trends ".into())
        );
        assert_eq!(
            fx.complete("read design-systems-g"),
            AutocompleteResult::Single("read design-systems-guide ".into())
        );
        // A complete id still resolves to itself.
        assert_eq!(
            fx.complete("read brutalist-design-principles"),
            AutocompleteResult::Single("read brutalist-design-principles ".into())
        );
        assert_eq!(
            fx.complete("read Performance-Opt"),
            AutocompleteResult::Single("read performance-optimization ".into())
        );
    }

    #[test]
    fn test_read_completion_multiple() {
        let fx = Fixture::at(&[]);
        match fx.complete("read design") {
            AutocompleteResult::Multiple { extended, suggestions } => {
                assert_eq!(extended, None);
                assert_eq!(
                    suggestions,
                    vec!["design-systems-guide", "glassmorphism-trends", "brutalist-design-principles"]
                );
            }
            other => panic!("Expected multiple matches, got {:?}", other),
        }
    }

    #[test]
    fn test_common_prefix() {
        let strings = vec![
            "hello".to_string(),
            "help".to_string(),
            "helicopter".to_string(),
        ];
        assert_eq!(find_common_prefix(&strings), "hel");
    }

    #[test]
    fn test_common_prefix_keeps_first_casing() {
        let strings = vec!["Config".to_string(), "CONFIRM".to_string()];
        assert_eq!(find_common_prefix(&strings), "Confi");
        assert_eq!(find_common_prefix(&[]), "");
        assert_eq!(find_common_prefix(&["one".to_string()]), "one");
    }

    #[test]
    fn test_common_prefix_multibyte() {
        let strings = vec!["ünïcode".to_string(), "ÜNIX".to_string()];
        assert_eq!(find_common_prefix(&strings), "ün");
    }
}
