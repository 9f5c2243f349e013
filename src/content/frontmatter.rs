//! Front-matter parsing

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

lazy_static! {
    /// First delimiter-bounded metadata block, non-greedy: the first
    /// closing `---` terminates the block.
    static ref BLOCK_RE: Regex = Regex::new(r"(?s)---\s*(.*?)\s*---").unwrap();
}

/// Front-matter data parsed from a post's metadata block.
///
/// Fields absent from the block stay `None`; no defaults are invented.
/// Unknown keys are kept verbatim in `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub date: Option<String>,
    pub excerpt: Option<String>,

    /// Additional custom fields
    #[serde(flatten)]
    pub extra: HashMap<String, String>,
}

impl FrontMatter {
    /// Parse front-matter from a content file.
    ///
    /// Returns the parsed block plus the body: the file text with the
    /// block (delimiters included) removed and outer whitespace trimmed.
    /// Internal blank lines in the body are preserved verbatim.
    ///
    /// Returns `None` when the file contains no delimiter pair at all;
    /// the caller decides how to surface that.
    pub fn parse(raw: &str) -> Option<(Self, String)> {
        let caps = BLOCK_RE.captures(raw)?;
        let block = caps.get(1).map(|b| b.as_str()).unwrap_or("");
        let whole = caps.get(0).expect("regex matched");

        let mut body = String::with_capacity(raw.len() - whole.len());
        body.push_str(&raw[..whole.start()]);
        body.push_str(&raw[whole.end()..]);
        let body = body.trim().to_string();

        Some((Self::parse_block(block), body))
    }

    /// Parse the key/value lines of a metadata block.
    ///
    /// Each non-blank line splits on the first `": "`; the rest of the
    /// line is the raw value, so colons inside values survive. A line
    /// with no separator becomes a key with an empty value.
    fn parse_block(block: &str) -> Self {
        let mut fm = FrontMatter::default();

        for line in block.trim().lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let (key, value) = match line.split_once(": ") {
                Some((key, rest)) => (key.trim(), rest.trim()),
                None => (line, ""),
            };
            let value = strip_quotes(value).to_string();

            match key {
                "title" => fm.title = Some(value),
                "date" => fm.date = Some(value),
                "excerpt" => fm.excerpt = Some(value),
                _ => {
                    fm.extra.insert(key.to_string(), value);
                }
            }
        }

        fm
    }
}

/// Strip one layer of matching wrapping quotes, single or double.
/// Unbalanced or absent quotes are left untouched.
fn strip_quotes(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if (first == b'"' && last == b'"') || (first == b'\'' && last == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}
