//! Core of the DOS-style terminal: virtual filesystem, command dispatcher,
//! tab completion and history navigation.
//!
//! This crate provides:
//! - [`Shell`], which runs input lines against a [`ShellSession`]
//! - [`VirtualFs`], the case-insensitive in-memory tree
//! - [`autocomplete`] for Tab completion
//! - [`Clock`], implemented by each front end
//!
//! Nothing here touches the DOM or the terminal; front ends render the
//! [`HistoryRecord`]s and prompt the shell exposes.

pub mod autocomplete;
pub mod clock;
pub mod commands;
pub mod config;
pub mod error;
pub mod filesystem;
pub mod models;
pub mod parser;
pub mod session;
mod shell;

pub use autocomplete::{AutocompleteResult, autocomplete};
pub use clock::{Clock, FixedClock};
pub use commands::{CommandResult, Effect, version_banner};
pub use error::{BlogStoreError, FsError, ShellError};
pub use filesystem::VirtualFs;
pub use models::{BlogPost, BlogStore, FsNode, OutputLine, OutputLineData};
pub use session::{HistoryRecord, Recall, ShellSession};
pub use shell::{Shell, Submission};
