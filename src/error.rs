//! Error types for the profile rendering pipeline.
//!
//! The library reports failures through [`ProfileError`] via `thiserror`;
//! the binary wraps internal-class failures with `anyhow` for context.

use crate::provider::Provider;

/// Failure modes of the profile rendering pipeline.
///
/// Not-found-class variants (`InvalidProvider`, `InvalidIdentity`,
/// `NotFound`) map to a 404-style outcome. `Fetch` is an internal-error
/// outcome and must never be conflated with `NotFound`: a missing README
/// and a broken network path are different facts.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    /// Provider outside the supported set; the pipeline is never invoked.
    #[error("unsupported provider: {0}")]
    InvalidProvider(String),

    /// Identity failed validation before any fetch was attempted.
    #[error("invalid identity: {0:?}")]
    InvalidIdentity(String),

    /// README absent on every fallback branch.
    #[error("profile README not found on {provider} for {identity}")]
    NotFound {
        provider: Provider,
        identity: String,
    },

    /// Network-layer fault (DNS, timeout, reset) while attempting a
    /// candidate fetch.
    #[error("network error fetching profile README: {0}")]
    Fetch(#[from] reqwest::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ProfileError>;

impl ProfileError {
    /// Whether this error maps to a not-found outcome rather than an
    /// internal error.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::InvalidProvider(_) | Self::InvalidIdentity(_) | Self::NotFound { .. }
        )
    }
}
