//! The in-memory directory tree the shell navigates.

mod seed;

use crate::config::ROOT_NAME;
use crate::models::{BlogStore, FsNode};

/// Virtual filesystem rooted at `C:`.
///
/// # Path Convention
///
/// A path is the ordered list of node names from the root to a directory,
/// root included: `["C:"]`, `["C:", "WINDOWS", "SYSTEM32"]`. Components after
/// the root are matched case-insensitively.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VirtualFs {
    root: FsNode,
}

impl VirtualFs {
    /// Wrap an existing root directory.
    pub fn new(root: FsNode) -> Self {
        Self { root }
    }

    /// The fixed tree shipped with the terminal.
    ///
    /// `BLOG\POSTS.TXT` is generated from `blog`.
    pub fn seeded(blog: &BlogStore) -> Self {
        Self::new(seed::build(blog))
    }

    /// Create a filesystem with only the root directory.
    pub fn empty() -> Self {
        Self::new(FsNode::dir(ROOT_NAME))
    }

    pub fn root(&self) -> &FsNode {
        &self.root
    }

    /// Walk `path` from the root and return the directory it names.
    ///
    /// Returns `None` if a component is missing or names a file.
    pub fn dir_at(&self, path: &[String]) -> Option<&FsNode> {
        let (first, rest) = path.split_first()?;
        if !first.eq_ignore_ascii_case(self.root.name()) {
            return None;
        }

        let mut current = &self.root;
        for part in rest {
            current = current.child(part)?;
        }
        current.is_directory().then_some(current)
    }

    /// Case-insensitive lookup of `name` in the directory at `path`.
    pub fn lookup(&self, path: &[String], name: &str) -> Option<&FsNode> {
        self.dir_at(path)?.child(name)
    }
}
