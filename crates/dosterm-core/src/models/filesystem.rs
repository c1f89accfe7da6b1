//! Virtual filesystem node types.

use std::collections::BTreeMap;

use crate::error::FsError;

/// Case-insensitive lookup key for a node name.
///
/// Names are stored with their original casing on [`FsNode`]; the key is the
/// uppercased form, so `config.sys` and `CONFIG.SYS` address the same entry.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeKey(String);

impl NodeKey {
    pub fn new(name: &str) -> Self {
        Self(name.to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// What a node holds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    File { content: String },
    Directory { children: BTreeMap<NodeKey, FsNode> },
}

/// One named entry in the virtual tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FsNode {
    name: String,
    kind: NodeKind,
}

impl FsNode {
    /// Create a file node.
    pub fn file(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::File {
                content: content.into(),
            },
        }
    }

    /// Create an empty directory node.
    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Directory {
                children: BTreeMap::new(),
            },
        }
    }

    /// Create a directory and insert `children` into it.
    pub fn dir_with(
        name: impl Into<String>,
        children: impl IntoIterator<Item = FsNode>,
    ) -> Result<Self, FsError> {
        let mut dir = Self::dir(name);
        for child in children {
            dir.insert(child)?;
        }
        Ok(dir)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn key(&self) -> NodeKey {
        NodeKey::new(&self.name)
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn is_directory(&self) -> bool {
        matches!(self.kind, NodeKind::Directory { .. })
    }

    pub fn is_file(&self) -> bool {
        matches!(self.kind, NodeKind::File { .. })
    }

    /// File content, `None` for directories.
    pub fn content(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::File { content } => Some(content),
            NodeKind::Directory { .. } => None,
        }
    }

    /// Add a child to this directory.
    ///
    /// Fails if this node is a file or a sibling with the same
    /// case-insensitive name already exists.
    pub fn insert(&mut self, child: FsNode) -> Result<(), FsError> {
        match &mut self.kind {
            NodeKind::Directory { children } => {
                let key = child.key();
                if children.contains_key(&key) {
                    return Err(FsError::AlreadyExists(child.name));
                }
                children.insert(key, child);
                Ok(())
            }
            NodeKind::File { .. } => Err(FsError::NotADirectory(self.name.clone())),
        }
    }

    /// Case-insensitive child lookup.
    pub fn child(&self, name: &str) -> Option<&FsNode> {
        match &self.kind {
            NodeKind::Directory { children } => children.get(&NodeKey::new(name)),
            NodeKind::File { .. } => None,
        }
    }

    /// Children in key order. Files yield nothing.
    pub fn children(&self) -> impl Iterator<Item = &FsNode> {
        let map = match &self.kind {
            NodeKind::Directory { children } => Some(children),
            NodeKind::File { .. } => None,
        };
        map.into_iter().flat_map(|children| children.values())
    }

    pub fn child_count(&self) -> usize {
        match &self.kind {
            NodeKind::Directory { children } => children.len(),
            NodeKind::File { .. } => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_is_uppercase() {
        assert_eq!(NodeKey::new("config.sys").as_str(), "CONFIG.SYS");
        assert_eq!(NodeKey::from("Dos"), NodeKey::from("DOS"));
    }

    #[test]
    fn test_lookup_preserves_case() {
        let dir = FsNode::dir_with("C:", [FsNode::file("ReadMe.md", "hi")]).unwrap();
        let found = dir.child("README.MD").unwrap();
        assert_eq!(found.name(), "ReadMe.md");
        assert_eq!(found.content(), Some("hi"));
        assert!(dir.child("readme.md").is_some());
    }

    #[test]
    fn test_case_insensitive_uniqueness() {
        let mut dir = FsNode::dir("C:");
        dir.insert(FsNode::dir("TEMP")).unwrap();
        assert_eq!(
            dir.insert(FsNode::file("temp", "")),
            Err(FsError::AlreadyExists("temp".to_string()))
        );
        assert_eq!(dir.child_count(), 1);
    }

    #[test]
    fn test_file_has_no_children() {
        let mut file = FsNode::file("A.TXT", "a");
        assert!(file.children().next().is_none());
        assert_eq!(
            file.insert(FsNode::file("B.TXT", "b")),
            Err(FsError::NotADirectory("A.TXT".to_string()))
        );
        assert!(file.child("B.TXT").is_none());
    }

    #[test]
    fn test_children_key_order() {
        let dir = FsNode::dir_with(
            "C:",
            [
                FsNode::dir("WINDOWS"),
                FsNode::file("autoexec.bat", ""),
                FsNode::dir("DOS"),
            ],
        )
        .unwrap();
        let names: Vec<_> = dir.children().map(|n| n.name()).collect();
        assert_eq!(names, vec!["autoexec.bat", "DOS", "WINDOWS"]);
    }
}
