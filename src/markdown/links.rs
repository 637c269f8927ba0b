//! Relative image reference rewriting for fetched Markdown.

use regex::{Captures, Regex};
use url::Url;

/// Rewrites relative image references to absolute raw-content URLs.
///
/// Profile pages are served from a different host than the repository's raw
/// content, so `![alt](images/pic.png)` must become an absolute URL against
/// the branch's raw base before rendering. Only image embeds are rewritten;
/// plain links `[text](path)` are intentionally left alone.
pub struct LinkRewriter {
    image_ref: Regex,
}

impl LinkRewriter {
    /// Creates a rewriter with the image pattern compiled once.
    pub fn new() -> Self {
        Self {
            image_ref: Regex::new(r"!\[([^\]]*)\]\(([^)]*)\)").expect("valid regex"),
        }
    }

    /// Rewrites every relative image path in `markdown` against `base`.
    ///
    /// A path is relative if it does not begin with `http://`, `https://`,
    /// or `//`; relative paths become `base` + path, absolute paths are left
    /// untouched. Alt text and surrounding content are preserved verbatim.
    /// Unbalanced brackets or nested parentheses in a path get best-effort
    /// matching rather than a stricter parse.
    ///
    /// # Arguments
    ///
    /// * `markdown`: Markdown source to scan
    /// * `base`: Raw-content base URL, trailing slash included
    ///
    /// # Returns
    ///
    /// Markdown with relative image paths rewritten
    pub fn rewrite(&self, markdown: &str, base: &Url) -> String {
        self.image_ref
            .replace_all(markdown, |caps: &Captures| {
                let alt = &caps[1];
                let path = &caps[2];

                if path.is_empty() || is_absolute(path) {
                    caps[0].to_string()
                } else {
                    format!("![{alt}]({base}{path})")
                }
            })
            .into_owned()
    }
}

impl Default for LinkRewriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether `path` already points at an external location.
fn is_absolute(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://") || path.starts_with("//")
}
