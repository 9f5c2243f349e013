//! Content module - loads and parses posts from content files

mod frontmatter;
pub mod loader;
mod markdown;
mod post;

pub use frontmatter::FrontMatter;
pub use loader::ContentLoader;
pub use markdown::MarkdownRenderer;
pub use post::{Post, PostMetadata};

use std::path::PathBuf;
use thiserror::Error;

/// Errors from loading or parsing content files
#[derive(Debug, Error)]
pub enum ContentError {
    /// No content file matches the requested slug
    #[error("no post found for slug `{0}`")]
    NotFound(String),

    /// The file has no front-matter delimiter pair at all
    #[error("missing front-matter block in {}", .0.display())]
    MissingFrontmatter(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
