//! Page layout wrapper component

use maud::{DOCTYPE, Markup, PreEscaped, html};

use super::footer::footer;

/// Stylesheet embedded into every page so the output is a single
/// self-contained document.
const STYLE: &str = include_str!("../../assets/profile.css");

/// Wraps page content with standard HTML structure
///
/// Provides consistent DOCTYPE, html, head, and container structure. The
/// wrapper handles viewport configuration, charset, and the embedded
/// stylesheet while the caller provides page-specific body content.
///
/// # Arguments
///
/// * `title`: Page title text (without suffix)
/// * `body`: Page-specific body markup
///
/// # Returns
///
/// Complete HTML document with wrapped content
pub fn page_wrapper(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - gitsoul" }
                style { (PreEscaped(STYLE)) }
            }
            body {
                div class="container" {
                    (body)
                }
                (footer())
            }
        }
    }
}
