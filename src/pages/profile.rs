//! Profile card page generation.

use maud::{Markup, PreEscaped, html};

use crate::avatar;
use crate::components::layout::page_wrapper;
use crate::provider::Provider;
use crate::sanitize::SanitizedFragment;

/// Avatar size in the profile header, in pixels.
const AVATAR_SIZE: u32 = 80;

/// Generates the profile card page for `identity` on `provider`.
///
/// Header carries the avatar, the identity and a provider badge; the README
/// fragment renders below in a card. Only the sanitized fragment is ever
/// interpolated unescaped.
///
/// # Arguments
///
/// * `provider`: Hosting provider, used for avatar and badge decoration
/// * `identity`: Username shown in the header
/// * `readme`: Sanitized README fragment to embed
///
/// # Returns
///
/// Complete HTML document markup for the profile page
pub fn profile_page(provider: Provider, identity: &str, readme: &SanitizedFragment) -> Markup {
    page_wrapper(
        &format!("{identity} on gitsoul"),
        html! {
            header class="profile-header" {
                (avatar::render(provider, identity, AVATAR_SIZE))
                div class="profile-title" {
                    h1 class="profile-name" { (identity) }
                    p class="profile-provider" {
                        span class=(format!("provider-dot provider-{}", provider.label())) {}
                        " " (provider.label()) " profile"
                    }
                }
            }
            section class="readme-card" {
                div class="readme-content" {
                    (PreEscaped(readme.as_str()))
                }
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sanitize::Sanitizer;

    #[test]
    fn test_profile_page_basic() {
        // Arrange
        let fragment = Sanitizer::new().sanitize("<h1>About me</h1><p>I write Rust.</p>");

        // Act
        let page = profile_page(Provider::Github, "octocat", &fragment).into_string();

        // Assert
        assert!(page.contains("octocat"), "Should contain identity");
        assert!(page.contains("github profile"), "Should contain badge");
        assert!(page.contains("About me"), "Should embed README fragment");
        assert!(page.contains("I write Rust."));
        assert!(page.contains("readme-content"));
    }

    #[test]
    fn test_profile_page_provider_decoration() {
        // Arrange
        let fragment = Sanitizer::new().sanitize("<p>hi</p>");

        // Act
        let github = profile_page(Provider::Github, "octocat", &fragment).into_string();
        let gitlab = profile_page(Provider::Gitlab, "voxxelle", &fragment).into_string();

        // Assert: avatar and dot differ per provider
        assert!(github.contains("provider-dot provider-github"));
        assert!(github.contains("https://github.com/octocat.png"));
        assert!(gitlab.contains("provider-dot provider-gitlab"));
        assert!(gitlab.contains("avatar-initial"));
    }

    #[test]
    fn test_profile_page_empty_fragment() {
        // Arrange: sanitization may legitimately produce an empty fragment
        let fragment = Sanitizer::new().sanitize("<script>only evil</script>");

        // Act
        let page = profile_page(Provider::Github, "octocat", &fragment).into_string();

        // Assert
        assert!(page.contains("octocat"), "Page chrome still renders");
        assert!(!page.contains("only evil"));
    }
}
