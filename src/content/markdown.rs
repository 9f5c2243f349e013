//! Markdown rendering with link rewriting

use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag, TagEnd};

/// Markdown renderer for post bodies.
///
/// In-site links (starting with `/` or `#`) render as ordinary anchors;
/// everything else opens in a new tab with `rel="noopener noreferrer"`.
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render markdown to HTML
    pub fn render(&self, markdown: &str) -> String {
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_SMART_PUNCTUATION
            | Options::ENABLE_GFM;
        let parser = Parser::new_ext(markdown, options);

        let mut events: Vec<Event> = Vec::new();
        // Tracks, per open link, whether we replaced it with raw HTML
        let mut rewritten: Vec<bool> = Vec::new();

        for event in parser {
            match event {
                Event::Start(Tag::Link {
                    link_type,
                    dest_url,
                    title,
                    id,
                }) => {
                    if is_external(&dest_url) {
                        let title_attr = if title.is_empty() {
                            String::new()
                        } else {
                            format!(r#" title="{}""#, html_escape(&title))
                        };
                        events.push(Event::Html(CowStr::from(format!(
                            r#"<a href="{}"{} target="_blank" rel="noopener noreferrer">"#,
                            html_escape(&dest_url),
                            title_attr
                        ))));
                        rewritten.push(true);
                    } else {
                        events.push(Event::Start(Tag::Link {
                            link_type,
                            dest_url,
                            title,
                            id,
                        }));
                        rewritten.push(false);
                    }
                }
                Event::End(TagEnd::Link) => {
                    if rewritten.pop().unwrap_or(false) {
                        events.push(Event::Html(CowStr::from("</a>")));
                    } else {
                        events.push(Event::End(TagEnd::Link));
                    }
                }
                _ => events.push(event),
            }
        }

        let mut html_output = String::new();
        html::push_html(&mut html_output, events.into_iter());

        html_output
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Anything that is not an in-site path or a fragment opens in a new tab
fn is_external(href: &str) -> bool {
    !href.starts_with('/') && !href.starts_with('#')
}

/// Simple HTML escaping
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_basic_markdown() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("# Hello World\n\nThis is a test.");
        assert!(html.contains("<h1>Hello World</h1>"));
        assert!(html.contains("<p>This is a test.</p>"));
    }

    #[test]
    fn test_internal_link_untouched() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("[blog](/blog/first-post)");
        assert!(html.contains(r#"<a href="/blog/first-post">blog</a>"#));
        assert!(!html.contains("target"));
    }

    #[test]
    fn test_fragment_link_untouched() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("[top](#top)");
        assert!(html.contains(r##"<a href="#top">top</a>"##));
        assert!(!html.contains("target"));
    }

    #[test]
    fn test_external_link_opens_new_tab() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("[site](https://example.com)");
        assert!(html.contains(r#"href="https://example.com""#));
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"rel="noopener noreferrer""#));
        assert!(html.contains(">site</a>"));
    }

    #[test]
    fn test_blank_lines_become_paragraphs() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("Line 1\n\nLine 2");
        assert!(html.contains("<p>Line 1</p>"));
        assert!(html.contains("<p>Line 2</p>"));
    }
}
