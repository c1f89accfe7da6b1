//! Data models for the shell.
//!
//! Contains domain types for:
//! - [`FsNode`], [`NodeKind`], [`NodeKey`] - Virtual filesystem representation
//! - [`OutputLine`] - Command output types
//! - [`BlogPost`], [`BlogStore`] - Read-only blog content

mod blog;
mod filesystem;
mod terminal;

pub use blog::{BlogPost, BlogStore};
pub use filesystem::{FsNode, NodeKey, NodeKind};
pub use terminal::{OutputLine, OutputLineData};
