//! Site templates using the Tera template engine
//!
//! All templates are embedded directly in the binary; there is no
//! on-disk theme to resolve at runtime.

use anyhow::Result;
use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::config::{MenuItem, SiteConfig};
use crate::content::Post;
use crate::helpers::long_date;

/// Template renderer with the embedded site theme
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // Post bodies arrive pre-rendered as HTML; escaping would
        // mangle them
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("site/layout.html")),
            ("home.html", include_str!("site/home.html")),
            ("blog.html", include_str!("site/blog.html")),
            ("post.html", include_str!("site/post.html")),
            ("404.html", include_str!("site/404.html")),
            ("partials/nav.html", include_str!("site/partials/nav.html")),
        ])?;

        tera.register_filter("long_date", long_date_filter);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Tera filter: format an ISO date string as a long en-US date
fn long_date_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("long_date", "value", String, value);
    Ok(tera::Value::String(long_date(&s)))
}

/// Data structures for template context

#[derive(Debug, Clone, Serialize)]
pub struct SiteView {
    pub title: String,
    pub description: String,
    pub author: String,
    pub language: String,
    pub menu: Vec<MenuItem>,
}

impl SiteView {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            title: config.title.clone(),
            description: config.description.clone(),
            author: config.author.clone(),
            language: config.language.clone(),
            menu: config.menu.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PostView {
    pub slug: String,
    pub title: String,
    /// ISO date string, empty when the post has none
    pub date: String,
    pub excerpt: String,
    /// Rendered body HTML, empty in index listings
    pub content: String,
}

impl PostView {
    /// Listing view: metadata only, no body
    pub fn summary(post: &Post) -> Self {
        Self {
            slug: post.metadata.slug.clone(),
            title: post.display_title().to_string(),
            date: post.metadata.date.clone().unwrap_or_default(),
            excerpt: post.metadata.excerpt.clone().unwrap_or_default(),
            content: String::new(),
        }
    }

    /// Full view with the rendered body
    pub fn full(post: &Post, content_html: String) -> Self {
        Self {
            content: content_html,
            ..Self::summary(post)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PostMetadata;

    fn sample_post() -> Post {
        Post {
            metadata: PostMetadata {
                title: Some("First Post".to_string()),
                date: Some("2024-01-15".to_string()),
                excerpt: Some("An excerpt".to_string()),
                slug: "first-post".to_string(),
                ..Default::default()
            },
            content: "Hello.".to_string(),
        }
    }

    #[test]
    fn test_render_blog_index() {
        let renderer = TemplateRenderer::new().unwrap();
        let mut context = Context::new();
        context.insert("site", &SiteView::from_config(&SiteConfig::default()));
        context.insert("posts", &vec![PostView::summary(&sample_post())]);

        let html = renderer.render("blog.html", &context).unwrap();
        assert!(html.contains("First Post"));
        assert!(html.contains("/blog/first-post"));
        assert!(html.contains("Monday, January 15, 2024"));
        assert!(html.contains("An excerpt"));
    }

    #[test]
    fn test_render_single_post() {
        let renderer = TemplateRenderer::new().unwrap();
        let mut context = Context::new();
        context.insert("site", &SiteView::from_config(&SiteConfig::default()));
        context.insert(
            "post",
            &PostView::full(&sample_post(), "<p>Hello.</p>".to_string()),
        );

        let html = renderer.render("post.html", &context).unwrap();
        assert!(html.contains("<p>Hello.</p>"));
        assert!(html.contains("First Post"));
        assert!(html.contains("Monday, January 15, 2024"));
    }

    #[test]
    fn test_render_not_found() {
        let renderer = TemplateRenderer::new().unwrap();
        let mut context = Context::new();
        context.insert("site", &SiteView::from_config(&SiteConfig::default()));

        let html = renderer.render("404.html", &context).unwrap();
        assert!(html.contains("not found"));
    }

    #[test]
    fn test_undated_post_renders_without_date_line() {
        let mut post = sample_post();
        post.metadata.date = None;

        let renderer = TemplateRenderer::new().unwrap();
        let mut context = Context::new();
        context.insert("site", &SiteView::from_config(&SiteConfig::default()));
        context.insert("post", &PostView::full(&post, String::new()));

        let html = renderer.render("post.html", &context).unwrap();
        assert!(!html.contains("<time"));
    }
}
