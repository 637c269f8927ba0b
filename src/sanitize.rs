//! Allow-list HTML sanitization for rendered fragments.

use std::collections::{HashMap, HashSet};

/// Tags explicitly allowed in profile fragments, on top of ammonia's
/// baseline of generally-safe inline tags.
const ALLOWED_TAGS: [&str; 29] = [
    "h1", "h2", "h3", "h4", "h5", "h6", "p", "a", "ul", "ol", "li", "b", "i", "strong", "em",
    "strike", "code", "hr", "br", "div", "table", "thead", "caption", "tbody", "tr", "th", "td",
    "pre", "img",
];

/// HTML guaranteed free of script-executing constructs.
///
/// The only artifact a page template may embed unescaped. Constructed
/// exclusively by [`Sanitizer::sanitize`], so holding one means the
/// allow-list has been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedFragment(String);

impl SanitizedFragment {
    /// Sanitized HTML as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the fragment, returning the sanitized HTML.
    pub fn into_string(self) -> String {
        self.0
    }
}

/// Filters rendered HTML through an explicit allow-list.
///
/// Anything capable of script execution is removed: script and style bodies
/// are discarded outright, other disallowed tags are unwrapped with their
/// safe inner content promoted to the surrounding context, event-handler
/// attributes and `javascript:`/`data:` scheme URLs are dropped regardless
/// of nesting depth or encoding tricks. Sanitization is total and
/// idempotent; it never rejects input.
pub struct Sanitizer {
    cleaner: ammonia::Builder<'static>,
}

impl Sanitizer {
    /// Builds the allow-list once.
    ///
    /// Attributes: `class`/`id` on any allowed tag, `href`/`name`/`target`/
    /// `rel` on anchors, `src`/`alt` on images, nothing else. URL schemes
    /// are limited to http, https and mailto. Allowing `rel` on anchors
    /// requires disabling ammonia's own rel rewriting.
    pub fn new() -> Self {
        let mut cleaner = ammonia::Builder::default();
        cleaner
            .strip_comments(true)
            .add_tags(ALLOWED_TAGS)
            .generic_attributes(HashSet::from(["class", "id"]))
            .tag_attributes(HashMap::from([
                ("a", HashSet::from(["href", "name", "target", "rel"])),
                ("img", HashSet::from(["src", "alt"])),
            ]))
            .link_rel(None)
            .url_schemes(HashSet::from(["http", "https", "mailto"]));

        Self { cleaner }
    }

    /// Produces a fragment guaranteed free of script-executing constructs.
    ///
    /// # Arguments
    ///
    /// * `html`: Arbitrary HTML, typically a rendered fragment
    ///
    /// # Returns
    ///
    /// A (possibly empty) safe fragment; this never fails
    pub fn sanitize(&self, html: &str) -> SanitizedFragment {
        SanitizedFragment(self.cleaner.clean(html).to_string())
    }
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::new()
    }
}
