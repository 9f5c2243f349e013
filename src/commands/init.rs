//! Initialize a new site

use anyhow::Result;
use std::fs;
use std::path::Path;

/// Default site configuration written by `init`
const DEFAULT_CONFIG: &str = r#"# Site
title: Tofu's World
description: An online home for projects and musings.
author: Tofu
language: en

# URL
url: http://localhost:4000
root: /

# Directory
content_dir: content
static_dir: static

# Navigation
menu:
  - name: Home
    path: /
  - name: Blog
    path: /blog
"#;

/// Sample post written into the fresh content directory
const SAMPLE_POST: &str = r#"---
title: Hello World
date: 2024-01-15
excerpt: The very first post on this site.
---

Welcome! This post lives in `content/hello-world.mdx`.

Edit the front-matter block at the top of the file to change the
title, date, or excerpt, and write the body in markdown below it.
"#;

const DEFAULT_STYLESHEET: &str = r#"body {
  font-family: system-ui, sans-serif;
  line-height: 1.6;
  margin: 0;
}

.container {
  max-width: 48rem;
  margin: 0 auto;
  padding: 2rem;
}

.site-nav {
  display: flex;
  align-items: baseline;
  gap: 1.5rem;
  padding: 1rem 2rem;
  border-bottom: 1px solid #ddd;
}

.site-nav ul {
  display: flex;
  gap: 1rem;
  list-style: none;
  margin: 0;
  padding: 0;
}

.post-summary {
  border-bottom: 1px solid #eee;
  padding-bottom: 2rem;
  margin-bottom: 2rem;
}

time {
  color: #666;
  font-size: 0.875rem;
}
"#;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir)?;
    fs::create_dir_all(target_dir.join("content"))?;
    fs::create_dir_all(target_dir.join("static"))?;

    write_if_absent(&target_dir.join("_config.yml"), DEFAULT_CONFIG)?;
    write_if_absent(&target_dir.join("content/hello-world.mdx"), SAMPLE_POST)?;
    write_if_absent(&target_dir.join("static/style.css"), DEFAULT_STYLESHEET)?;

    Ok(())
}

fn write_if_absent(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        tracing::warn!("Skipping existing file {:?}", path);
        return Ok(());
    }
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentLoader;
    use tempfile::TempDir;

    #[test]
    fn test_init_scaffolds_a_loadable_site() {
        let tmp = TempDir::new().unwrap();
        init_site(tmp.path()).unwrap();

        assert!(tmp.path().join("_config.yml").is_file());
        assert!(tmp.path().join("static/style.css").is_file());

        let loader = ContentLoader::new(tmp.path().join("content"));
        let posts = loader.load_posts().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].metadata.slug, "hello-world");
        assert_eq!(posts[0].metadata.title, Some("Hello World".to_string()));
    }

    #[test]
    fn test_init_keeps_existing_files() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("_config.yml"), "title: Kept\n").unwrap();

        init_site(tmp.path()).unwrap();

        let config = std::fs::read_to_string(tmp.path().join("_config.yml")).unwrap();
        assert_eq!(config, "title: Kept\n");
    }
}
