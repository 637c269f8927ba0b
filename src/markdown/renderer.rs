//! Markdown rendering with GitHub Flavored Markdown support.

use comrak::Options;
use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

/// Renders profile README markdown to an HTML fragment.
///
/// Provides GFM extensions (tables, strikethrough, autolinks, task lists,
/// footnotes) and deterministic heading identifiers: each heading slugs to a
/// URL-safe id, duplicates within a document get `-1`, `-2`, ... suffixes,
/// stable across repeated renders of the same input. Raw HTML embedded in
/// the source passes through untouched; the sanitizer downstream owns all
/// filtering. Rendering is total: arbitrary text degrades to literal output,
/// never an error.
pub struct MarkdownRenderer<'a> {
    options: Options<'a>,
    syntax_set: SyntaxSet,
}

impl<'a> MarkdownRenderer<'a> {
    /// Creates a renderer with GFM options and heading identifiers enabled.
    ///
    /// Options are built once here and reused for every render call; no
    /// global state is mutated.
    pub fn new() -> Self {
        let mut options = Options::default();

        // Extension options (GFM features)
        options.extension.strikethrough = true;
        options.extension.table = true;
        options.extension.autolink = true;
        options.extension.tasklist = true;
        options.extension.footnotes = true;

        // Heading ids: slugged text, duplicates suffixed -1, -2, ...
        options.extension.header_ids = Some(String::new());

        // Raw HTML passes through; sanitization happens downstream
        options.render.unsafe_ = true;

        // Load syntax definitions for code block highlighting
        let syntax_set = SyntaxSet::load_defaults_newlines();

        Self {
            options,
            syntax_set,
        }
    }

    /// Renders markdown content to an HTML fragment.
    ///
    /// The fragment may contain unsafe markup and must go through the
    /// sanitizer before being embedded anywhere.
    ///
    /// # Arguments
    ///
    /// * `markdown`: Markdown content to render
    ///
    /// # Returns
    ///
    /// HTML fragment with syntax highlighted code blocks
    pub fn render(&self, markdown: &str) -> String {
        let html = comrak::markdown_to_html(markdown, &self.options);
        self.highlight_code_blocks(&html)
    }

    /// Replaces `<code class="language-X">` bodies with span-classed
    /// highlighting.
    ///
    /// Blocks with an unknown language, and any block the highlighter cannot
    /// process, keep their escaped plain text so rendering stays total.
    fn highlight_code_blocks(&self, html: &str) -> String {
        const OPEN: &str = "<code class=\"language-";
        const CLOSE: &str = "</code>";

        let mut result = String::with_capacity(html.len());
        let mut last_end = 0;
        let mut search_pos = 0;

        while let Some(found) = html[search_pos..].find(OPEN) {
            let code_start = search_pos + found;

            let lang_start = code_start + OPEN.len();
            let Some(lang_rel) = html[lang_start..].find('"') else {
                break;
            };
            let lang_end = lang_start + lang_rel;
            let language = &html[lang_start..lang_end];

            let Some(tag_rel) = html[lang_end..].find('>') else {
                break;
            };
            let content_start = lang_end + tag_rel + 1;

            let Some(close_rel) = html[content_start..].find(CLOSE) else {
                break;
            };
            let content_end = content_start + close_rel;

            let escaped = &html[content_start..content_end];
            if let Some(highlighted) = self.highlight_code(&html_decode(escaped), language) {
                result.push_str(&html[last_end..content_start]);
                result.push_str(&highlighted);
                last_end = content_end;
            }

            search_pos = content_end + CLOSE.len();
        }

        result.push_str(&html[last_end..]);
        result
    }

    /// Highlights `code` with CSS classes using the `hl-` prefix.
    ///
    /// Class-based markup survives attribute sanitization, unlike inline
    /// styles. Returns `None` for unknown languages or highlighter misfires;
    /// the caller keeps the original escaped text in that case.
    fn highlight_code(&self, code: &str, language: &str) -> Option<String> {
        if code.is_empty() {
            return Some(String::new());
        }

        let syntax = self
            .syntax_set
            .find_syntax_by_token(language)
            .or_else(|| self.syntax_set.find_syntax_by_extension(language))?;

        let mut generator = ClassedHTMLGenerator::new_with_class_style(
            syntax,
            &self.syntax_set,
            ClassStyle::SpacedPrefixed { prefix: "hl-" },
        );

        for line in LinesWithEndings::from(code) {
            generator
                .parse_html_for_line_which_includes_newline(line)
                .ok()?;
        }

        Some(generator.finalize())
    }
}

impl<'a> Default for MarkdownRenderer<'a> {
    fn default() -> Self {
        Self::new()
    }
}

/// Reverses comrak's entity escaping inside code block bodies.
fn html_decode(html: &str) -> String {
    html.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
}
