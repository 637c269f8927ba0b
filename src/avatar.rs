//! Provider avatar decoration for profile headers.

use maud::{Markup, html};

use crate::provider::Provider;

/// Background palette for initial-letter avatars, soft pastels.
const COLORS: &[&str] = &[
    "#dc8a78", "#ea76cb", "#ca9ee6", "#8caaee", "#81c8be", "#a6d189", "#e5c890", "#ef9f76",
];

fn hash(s: &str) -> u64 {
    const OFFSET: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x100000001b3;
    s.trim()
        .bytes()
        .fold(OFFSET, |h, b| (h ^ b as u64).wrapping_mul(PRIME))
}

/// Deterministic background color for an identity.
fn pick_color(identity: &str) -> &'static str {
    COLORS[(hash(identity) % COLORS.len() as u64) as usize]
}

/// Renders the avatar element for a profile header.
///
/// GitHub serves user avatars at a public `.png` endpoint, so that variant
/// embeds it directly. GitLab has no equivalent unauthenticated endpoint;
/// that variant renders an initial-letter block with a background color
/// hashed from the identity, stable across runs.
pub fn render(provider: Provider, identity: &str, size: u32) -> Markup {
    match provider {
        Provider::Github => html! {
            img class="avatar avatar-github"
                src=(format!("https://github.com/{identity}.png"))
                alt=(identity)
                width=(size)
                height=(size);
        },
        Provider::Gitlab => {
            let initial = identity
                .chars()
                .next()
                .and_then(|c| c.to_uppercase().next())
                .unwrap_or('?');

            html! {
                span class="avatar avatar-initial"
                    style=(format!(
                        "width:{size}px;height:{size}px;background:{}",
                        pick_color(identity)
                    )) {
                    (initial)
                }
            }
        }
    }
}
