//! Profile README retrieval with branch fallback.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info, instrument};
use url::Url;

use crate::error::{ProfileError, Result};
use crate::pipeline::ProfileRequest;
use crate::provider::SourceCandidate;

/// User-Agent sent with upstream requests.
const USER_AGENT: &str = concat!("gitsoul/", env!("CARGO_PKG_VERSION"));

/// Maximum redirect hops followed per candidate.
const MAX_REDIRECTS: usize = 5;

/// The Markdown text of the first successful candidate fetch.
#[derive(Debug, Clone)]
pub struct RawDocument {
    /// Markdown source as served by the provider.
    pub text: String,
    /// Candidate URL that produced the document.
    pub origin: Url,
    /// Raw-content base for resolving relative image references.
    pub raw_base: Url,
}

/// Fetches profile READMEs over HTTP, one candidate at a time.
///
/// Wraps a single reqwest client built once per process. Each fetch walks
/// the candidate list in order and stops at the first success; a non-success
/// status on a non-final candidate is not an error, it triggers the next
/// candidate. There is no caching and no retry beyond the fixed branch
/// fallback, so every call is independent and safe to repeat.
pub struct ReadmeFetcher {
    client: Client,
}

impl ReadmeFetcher {
    /// Creates a fetcher with a bounded per-candidate `timeout`.
    ///
    /// # Arguments
    ///
    /// * `timeout`: Applied to each candidate request individually
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::Fetch`] if the HTTP client cannot be
    /// constructed.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .timeout(timeout)
            .build()?;

        Ok(Self { client })
    }

    /// Fetches the README for `request`, trying `main` then `master`.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::NotFound`] when every candidate responds with
    /// a non-success status, and [`ProfileError::Fetch`] when a network-layer
    /// fault occurs on any attempt. The two are distinct outcomes: the first
    /// means the profile README does not exist, the second that we could not
    /// find out.
    #[instrument(skip_all, fields(provider = %request.provider, identity = %request.identity))]
    pub async fn fetch(&self, request: &ProfileRequest) -> Result<RawDocument> {
        let candidates = request.provider.candidates(&request.identity)?;
        self.fetch_from(&candidates, request).await
    }

    /// Walks an explicit candidate list in order.
    ///
    /// Split out from [`fetch`](Self::fetch) so tests can point candidates
    /// at a mock server.
    pub async fn fetch_from(
        &self,
        candidates: &[SourceCandidate],
        request: &ProfileRequest,
    ) -> Result<RawDocument> {
        for candidate in candidates {
            debug!(url = %candidate.url, "trying candidate");

            let response = self.client.get(candidate.url.clone()).send().await?;

            if response.status().is_success() {
                let text = response.text().await?;
                info!(origin = %candidate.url, bytes = text.len(), "fetched profile README");
                return Ok(RawDocument {
                    text,
                    origin: candidate.url.clone(),
                    raw_base: candidate.raw_base.clone(),
                });
            }

            debug!(
                url = %candidate.url,
                status = %response.status(),
                "candidate missed, falling back"
            );
        }

        Err(ProfileError::NotFound {
            provider: request.provider,
            identity: request.identity.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::Provider;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn request() -> ProfileRequest {
        ProfileRequest::new(Provider::Github, "user").expect("Valid request")
    }

    fn fetcher() -> ReadmeFetcher {
        ReadmeFetcher::new(Duration::from_secs(5)).expect("Should build fetcher")
    }

    /// Candidates for both fallback branches, pointed at a mock server.
    fn candidates_for(uri: &str) -> Vec<SourceCandidate> {
        ["main", "master"]
            .iter()
            .map(|branch| {
                let raw_base = Url::parse(&format!("{uri}/user/user/{branch}/"))
                    .expect("Valid base URL");
                let url = raw_base.join("README.md").expect("Valid candidate URL");
                SourceCandidate { url, raw_base }
            })
            .collect()
    }

    #[tokio::test]
    async fn test_main_branch_success_skips_master() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/user/user/main/README.md"))
            .respond_with(ResponseTemplate::new(200).set_body_string("# Hello"))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/user/user/master/README.md"))
            .respond_with(ResponseTemplate::new(200).set_body_string("wrong branch"))
            .expect(0)
            .mount(&server)
            .await;

        // Act
        let doc = fetcher()
            .fetch_from(&candidates_for(&server.uri()), &request())
            .await
            .expect("Should fetch main branch");

        // Assert
        assert_eq!(doc.text, "# Hello");
        assert!(
            doc.origin.as_str().ends_with("/user/user/main/README.md"),
            "Origin should be the main candidate: {}",
            doc.origin
        );
        assert!(doc.raw_base.as_str().ends_with("/user/user/main/"));
    }

    #[tokio::test]
    async fn test_falls_back_to_master_in_order() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/user/user/main/README.md"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/user/user/master/README.md"))
            .respond_with(ResponseTemplate::new(200).set_body_string("# Master"))
            .expect(1)
            .mount(&server)
            .await;

        // Act
        let doc = fetcher()
            .fetch_from(&candidates_for(&server.uri()), &request())
            .await
            .expect("Should fall back to master");

        // Assert: master content served, both candidates attempted in order
        assert_eq!(doc.text, "# Master");

        let requests = server
            .received_requests()
            .await
            .expect("Request recording enabled");
        assert_eq!(requests.len(), 2, "Both candidates should be attempted");
        assert!(requests[0].url.path().contains("/main/"));
        assert!(requests[1].url.path().contains("/master/"));
    }

    #[tokio::test]
    async fn test_all_candidates_missing_is_not_found() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        // Act
        let result = fetcher()
            .fetch_from(&candidates_for(&server.uri()), &request())
            .await;

        // Assert
        let err = result.expect_err("Exhausted candidates should be an error");
        assert!(
            matches!(err, ProfileError::NotFound { .. }),
            "Expected NotFound, got: {err}"
        );
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_network_fault_is_fetch_error() {
        // Arrange: nothing listens on port 1
        let candidates = candidates_for("http://127.0.0.1:1");

        // Act
        let result = fetcher().fetch_from(&candidates, &request()).await;

        // Assert: distinguishable from NotFound
        let err = result.expect_err("Connection failure should be an error");
        assert!(
            matches!(err, ProfileError::Fetch(_)),
            "Expected Fetch, got: {err}"
        );
        assert!(!err.is_not_found());
    }

    #[tokio::test]
    async fn test_server_error_on_final_candidate_is_not_found() {
        // Arrange: non-success statuses exhaust the list without a network fault
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/user/user/main/README.md"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/user/user/master/README.md"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        // Act
        let result = fetcher()
            .fetch_from(&candidates_for(&server.uri()), &request())
            .await;

        // Assert
        assert!(matches!(result, Err(ProfileError::NotFound { .. })));
    }
}
