//! Error types for the shell.
//!
//! - [`ShellError`] - user-visible command failures, reported as output lines
//! - [`FsError`] - virtual filesystem construction errors
//! - [`BlogStoreError`] - blog content decoding errors

use thiserror::Error;

use crate::models::OutputLine;

/// A command failure. The `Display` text is the exact message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    /// No handler is registered under this (lowercased) name.
    #[error("'{0}' is not recognized as an internal or external command,")]
    UnknownCommand(String),
    /// A required argument is missing.
    #[error("The syntax of the command is incorrect.")]
    Syntax { usage: Option<&'static str> },
    /// `cd` target missing or not a directory.
    #[error("The system cannot find the path specified.")]
    PathNotFound,
    /// `type` target missing or a directory.
    #[error("The system cannot find the file specified.")]
    FileNotFound,
    /// `mkdir` on a name that already exists.
    #[error("A subdirectory or file already exists.")]
    AlreadyExists,
}

impl ShellError {
    /// Syntax error without a usage hint.
    pub fn syntax() -> Self {
        Self::Syntax { usage: None }
    }

    /// Syntax error followed by a usage hint line.
    pub fn usage(usage: &'static str) -> Self {
        Self::Syntax { usage: Some(usage) }
    }

    /// Render the error as the output lines of the failed command.
    pub fn into_lines(self) -> Vec<OutputLine> {
        let mut lines = vec![OutputLine::error(self.to_string())];
        match self {
            Self::UnknownCommand(_) => {
                lines.push(OutputLine::error("operable program or batch file."));
            }
            Self::Syntax { usage: Some(usage) } => {
                lines.push(OutputLine::text(usage));
            }
            _ => {}
        }
        lines
    }
}

/// Errors raised while building the virtual tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FsError {
    /// A sibling with the same case-insensitive name exists.
    #[error("entry '{0}' already exists")]
    AlreadyExists(String),
    /// Children can only be added to directories.
    #[error("'{0}' is not a directory")]
    NotADirectory(String),
}

/// Errors raised while decoding blog content.
#[derive(Debug, Error)]
pub enum BlogStoreError {
    #[error("invalid blog content: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate post id '{0}'")]
    DuplicateId(String),
}
