//! Page footer component

use maud::{Markup, html};

/// Renders the standard page footer
pub fn footer() -> Markup {
    html! {
        footer {
            p {
                "Rendered by "
                a href="https://github.com/gitsoul/gitsoul" target="_blank" { "gitsoul" }
            }
        }
    }
}
