//! Profile card rendering for git-hosting providers.
//!
//! Fetches a user's self-titled repository README (falling back from `main`
//! to `master`), rewrites relative image references against the raw-content
//! base, renders GitHub Flavored Markdown, sanitizes the result through an
//! allow-list, and wraps it in a profile card page.

pub mod avatar;
pub mod components;
mod config;
mod error;
mod fetch;
mod markdown;
pub mod pages;
mod pipeline;
mod provider;
mod sanitize;

pub use config::Config;
pub use error::{ProfileError, Result};
pub use fetch::{RawDocument, ReadmeFetcher};
pub use markdown::{LinkRewriter, MarkdownRenderer};
pub use pipeline::{NormalizedDocument, Pipeline, ProfileRequest, RenderedFragment};
pub use provider::{Provider, SourceCandidate};
pub use sanitize::{SanitizedFragment, Sanitizer};
