//! Create a new post

use anyhow::Result;
use std::fs;

use crate::content::loader::CONTENT_EXT;
use crate::Site;

/// Create a new post file under the content directory.
///
/// The file name (and therefore the slug) is the slugified title; the
/// front-matter block gets the title and today's date.
pub fn run(site: &Site, title: &str) -> Result<()> {
    let slug = slug::slugify(title);
    let file_path = site.content_dir.join(format!("{}.{}", slug, CONTENT_EXT));

    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    fs::create_dir_all(&site.content_dir)?;

    let today = chrono::Local::now().format("%Y-%m-%d");
    let content = format!(
        "---\ntitle: {}\ndate: {}\nexcerpt: \"\"\n---\n\n",
        title, today
    );
    fs::write(&file_path, content)?;

    println!("Created: {:?}", file_path);

    Ok(())
}
