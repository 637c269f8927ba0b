//! The profile rendering pipeline.
//!
//! Composes the four core stages: fetch with branch fallback, relative image
//! rewriting, markdown rendering, and allow-list sanitization. Data flows in
//! one direction only; every stage produces a new value and only the final
//! [`SanitizedFragment`] may reach a page template.

use std::time::Duration;

use tracing::{debug, instrument};

use crate::error::{ProfileError, Result};
use crate::fetch::{RawDocument, ReadmeFetcher};
use crate::markdown::{LinkRewriter, MarkdownRenderer};
use crate::provider::Provider;
use crate::sanitize::{SanitizedFragment, Sanitizer};

/// One profile rendering request, constructed once per invocation.
#[derive(Debug, Clone)]
pub struct ProfileRequest {
    pub provider: Provider,
    pub identity: String,
}

impl ProfileRequest {
    /// Validates and constructs a request.
    ///
    /// Identities are restricted to the character set common to GitHub and
    /// GitLab usernames: ASCII alphanumerics plus `.`, `_`, `-`, not leading
    /// with a separator.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::InvalidIdentity`] if `identity` is empty or
    /// falls outside that set.
    pub fn new(provider: Provider, identity: impl Into<String>) -> Result<Self> {
        let identity = identity.into();

        if !is_valid_identity(&identity) {
            return Err(ProfileError::InvalidIdentity(identity));
        }

        Ok(Self { provider, identity })
    }
}

/// Whether `identity` can be a username on either supported provider.
fn is_valid_identity(identity: &str) -> bool {
    !identity.is_empty()
        && !identity.starts_with(['.', '-', '_'])
        && identity
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
}

/// Markdown with relative image references rewritten absolute.
#[derive(Debug, Clone)]
pub struct NormalizedDocument {
    pub text: String,
}

/// HTML from the renderer.
///
/// May contain unsafe markup and must never be embedded directly; the only
/// consumer is the sanitizer.
#[derive(Debug, Clone)]
pub struct RenderedFragment(String);

impl RenderedFragment {
    /// Unsanitized HTML as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The assembled pipeline, configured once per process.
///
/// Holds the HTTP client, the compiled image pattern, the renderer options
/// and the sanitizer allow-list; none of it is global state. Stages are pure
/// transformations, so a pipeline value is safe to share across requests.
pub struct Pipeline {
    fetcher: ReadmeFetcher,
    rewriter: LinkRewriter,
    renderer: MarkdownRenderer<'static>,
    sanitizer: Sanitizer,
}

impl Pipeline {
    /// Builds every stage up front.
    ///
    /// # Arguments
    ///
    /// * `timeout`: Bound applied to each candidate fetch individually
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::Fetch`] if the HTTP client cannot be built.
    pub fn new(timeout: Duration) -> Result<Self> {
        Ok(Self {
            fetcher: ReadmeFetcher::new(timeout)?,
            rewriter: LinkRewriter::new(),
            renderer: MarkdownRenderer::new(),
            sanitizer: Sanitizer::new(),
        })
    }

    /// Fetches and renders the profile README for `request`.
    ///
    /// # Errors
    ///
    /// Propagates fetch-stage errors unchanged; the remaining stages are
    /// total and cannot fail.
    #[instrument(skip_all, fields(provider = %request.provider, identity = %request.identity))]
    pub async fn render(&self, request: &ProfileRequest) -> Result<SanitizedFragment> {
        let raw = self.fetcher.fetch(request).await?;
        Ok(self.render_document(&raw))
    }

    /// Runs the pure stages on an already-fetched document.
    ///
    /// Once a document is in hand rendering always succeeds, however
    /// malformed the source: content degrades gracefully instead of failing.
    pub fn render_document(&self, raw: &RawDocument) -> SanitizedFragment {
        let normalized = NormalizedDocument {
            text: self.rewriter.rewrite(&raw.text, &raw.raw_base),
        };

        let rendered = RenderedFragment(self.renderer.render(&normalized.text));
        debug!(
            rendered_bytes = rendered.as_str().len(),
            "rendered markdown fragment"
        );

        self.sanitizer.sanitize(rendered.as_str())
    }
}
