//! Git-hosting providers and their README source locations.

use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::error::ProfileError;

/// Fallback branches probed for the profile README, in order.
const BRANCH_FALLBACK: [&str; 2] = ["main", "master"];

/// Supported git-hosting providers.
///
/// A closed set: every decision point (candidate URL construction, avatar
/// decoration, raw-content base selection) matches exhaustively, so adding
/// a provider is a compile-checked extension rather than a string
/// comparison scattered across handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Github,
    Gitlab,
}

/// One fully-qualified README location to try, paired with the raw-content
/// base that relative image references resolve against.
#[derive(Debug, Clone)]
pub struct SourceCandidate {
    /// README location for one fallback branch.
    pub url: Url,
    /// Directory base of `url`, with trailing slash.
    pub raw_base: Url,
}

impl Provider {
    /// Lowercase provider label as it appears in requests and pages.
    pub fn label(&self) -> &'static str {
        match self {
            Provider::Github => "github",
            Provider::Gitlab => "gitlab",
        }
    }

    /// Raw-content base for the self-titled repository at `branch`.
    fn raw_base(&self, identity: &str, branch: &str) -> String {
        match self {
            Provider::Github => {
                format!("https://raw.githubusercontent.com/{identity}/{identity}/{branch}/")
            }
            Provider::Gitlab => {
                format!("https://gitlab.com/{identity}/{identity}/-/raw/{branch}/")
            }
        }
    }

    /// Builds the ordered candidate list for `identity`: `main` first, then
    /// `master`. Order is significant and fixed.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::InvalidIdentity`] if `identity` cannot form a
    /// valid candidate URL.
    pub fn candidates(&self, identity: &str) -> Result<Vec<SourceCandidate>, ProfileError> {
        BRANCH_FALLBACK
            .iter()
            .map(|branch| {
                let raw_base = Url::parse(&self.raw_base(identity, branch))
                    .map_err(|_| ProfileError::InvalidIdentity(identity.to_string()))?;
                let url = raw_base
                    .join("README.md")
                    .map_err(|_| ProfileError::InvalidIdentity(identity.to_string()))?;
                Ok(SourceCandidate { url, raw_base })
            })
            .collect()
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Provider {
    type Err = ProfileError;

    /// Accepts exactly `github` or `gitlab`; anything else is an
    /// [`ProfileError::InvalidProvider`] (a not-found outcome upstream).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "github" => Ok(Provider::Github),
            "gitlab" => Ok(Provider::Gitlab),
            other => Err(ProfileError::InvalidProvider(other.to_string())),
        }
    }
}
