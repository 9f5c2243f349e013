//! Post model

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Metadata for a single post.
///
/// `slug` is always derived from the content file's name; every other
/// field is present only if the front-matter block defined it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostMetadata {
    pub title: Option<String>,

    /// Publication date as an ISO `YYYY-MM-DD` string
    pub date: Option<String>,

    pub excerpt: Option<String>,

    /// URL-safe identifier, the file name without extension
    pub slug: String,

    /// Custom front-matter fields
    #[serde(flatten)]
    pub extra: HashMap<String, String>,
}

/// A blog post: parsed metadata plus the raw body text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub metadata: PostMetadata,

    /// Body with the metadata block removed and outer whitespace trimmed
    pub content: String,
}

impl Post {
    /// Title for display, falling back to the slug when the block
    /// defined none.
    pub fn display_title(&self) -> &str {
        self.metadata.title.as_deref().unwrap_or(&self.metadata.slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_title_falls_back_to_slug() {
        let post = Post {
            metadata: PostMetadata {
                slug: "my-post".to_string(),
                ..Default::default()
            },
            content: String::new(),
        };
        assert_eq!(post.display_title(), "my-post");

        let post = Post {
            metadata: PostMetadata {
                title: Some("A Title".to_string()),
                slug: "my-post".to_string(),
                ..Default::default()
            },
            content: String::new(),
        };
        assert_eq!(post.display_title(), "A Title");
    }
}
