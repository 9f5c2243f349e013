//! Content loader - loads posts from the content directory

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{ContentError, FrontMatter, Post, PostMetadata};

/// Recognized content file extension
pub const CONTENT_EXT: &str = "mdx";

/// Loads posts from a flat content directory.
///
/// The directory is injected at construction; every call re-reads the
/// disk, so loads are stateless and independent.
pub struct ContentLoader {
    content_dir: PathBuf,
}

impl ContentLoader {
    /// Create a loader over the given content directory
    pub fn new<P: Into<PathBuf>>(content_dir: P) -> Self {
        Self {
            content_dir: content_dir.into(),
        }
    }

    /// Load all posts, sorted by date descending (newest first).
    ///
    /// Only `.mdx` entries are considered; a missing or empty directory
    /// yields an empty list. A single malformed file fails the whole
    /// listing.
    pub fn load_posts(&self) -> Result<Vec<Post>, ContentError> {
        if !self.content_dir.exists() {
            return Ok(Vec::new());
        }

        let mut posts = Vec::new();

        for entry in WalkDir::new(&self.content_dir)
            .max_depth(1)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || !is_content_file(path) {
                continue;
            }
            if let Some(slug) = path.file_stem().and_then(|s| s.to_str()) {
                posts.push(self.load_post(path, slug)?);
            }
        }

        // Dates are ISO YYYY-MM-DD strings, so lexicographic order is
        // chronological; sort_by is stable, so ties keep their order.
        posts.sort_by(|a, b| b.metadata.date.cmp(&a.metadata.date));

        Ok(posts)
    }

    /// Load the post stored as `<content_dir>/<slug>.mdx`
    pub fn load_post_by_slug(&self, slug: &str) -> Result<Post, ContentError> {
        let path = self.content_dir.join(format!("{}.{}", slug, CONTENT_EXT));
        if !path.is_file() {
            return Err(ContentError::NotFound(slug.to_string()));
        }
        self.load_post(&path, slug)
    }

    fn load_post(&self, path: &Path, slug: &str) -> Result<Post, ContentError> {
        let raw = fs::read_to_string(path)?;
        let (fm, body) = FrontMatter::parse(&raw)
            .ok_or_else(|| ContentError::MissingFrontmatter(path.to_path_buf()))?;

        // The file name wins over any slug key in the block
        let metadata = PostMetadata {
            title: fm.title,
            date: fm.date,
            excerpt: fm.excerpt,
            slug: slug.to_string(),
            extra: fm.extra,
        };

        Ok(Post {
            metadata,
            content: body,
        })
    }
}

/// Check if a file has the recognized content extension
fn is_content_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == CONTENT_EXT)
        .unwrap_or(false)
}
