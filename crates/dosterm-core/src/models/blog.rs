//! Read-only blog content consumed by `read` and `BLOG\POSTS.TXT`.

use std::collections::HashSet;

use serde::Deserialize;

use crate::config::POSTS_JSON;
use crate::error::BlogStoreError;

/// A single blog post.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    /// Preformatted plain text.
    pub content: String,
    pub date: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Immutable lookup of posts by id, kept in listing order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BlogStore {
    posts: Vec<BlogPost>,
}

impl BlogStore {
    /// Build a store from posts. Ids must be unique.
    pub fn new(posts: Vec<BlogPost>) -> Result<Self, BlogStoreError> {
        let mut seen = HashSet::new();
        for post in &posts {
            if !seen.insert(post.id.as_str()) {
                return Err(BlogStoreError::DuplicateId(post.id.clone()));
            }
        }
        Ok(Self { posts })
    }

    /// Decode a JSON array of posts.
    pub fn from_json(json: &str) -> Result<Self, BlogStoreError> {
        let posts: Vec<BlogPost> = serde_json::from_str(json)?;
        Self::new(posts)
    }

    /// The posts embedded at compile time.
    pub fn builtin() -> Result<Self, BlogStoreError> {
        Self::from_json(POSTS_JSON)
    }

    /// Create a store with no posts (fallback when content fails to load).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Exact id lookup.
    pub fn get(&self, id: &str) -> Option<&BlogPost> {
        self.posts.iter().find(|post| post.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BlogPost> {
        self.posts.iter()
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
