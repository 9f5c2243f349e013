//! List site content

use anyhow::Result;

use crate::content::ContentLoader;
use crate::Site;

/// Print every post, newest first
pub fn run(site: &Site) -> Result<()> {
    let loader = ContentLoader::new(&site.content_dir);
    let posts = loader.load_posts()?;

    println!("Posts ({}):", posts.len());
    for post in &posts {
        println!(
            "  {} - {} [{}]",
            post.metadata.date.as_deref().unwrap_or("????-??-??"),
            post.display_title(),
            post.metadata.slug
        );
    }

    Ok(())
}
