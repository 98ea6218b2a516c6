//! HTTP client with relay fallback for cross-origin fetches
//!
//! The listing site does not allow direct cross-origin requests, so every
//! fetch goes through a public relay that retrieves the target server-side
//! and returns its body verbatim. Relays are tried strictly in order, one
//! in-flight request at a time, with no per-relay retry and no health
//! memory across calls.

use std::time::Duration;

use tracing::{debug, warn};

use crate::error::{FlziosError, Result};

/// Relay bases tried in order of preference; each expects the target URL
/// percent-encoded as its single query parameter.
pub const DEFAULT_RELAYS: [&str; 3] = [
    "https://api.codetabs.com/v1/proxy?quest=",
    "https://api.allorigins.win/raw?url=",
    "https://corsproxy.io/?url=",
];

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Configuration for the relay client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// Ordered relay bases to try (default: [`DEFAULT_RELAYS`])
    pub relays: Vec<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            relays: DEFAULT_RELAYS.iter().map(|r| r.to_string()).collect(),
        }
    }
}

/// HTTP client that fetches a target URL through a relay fallback chain
///
/// Each call walks the configured relays from the first one; a transport
/// error or non-success status moves on to the next relay. Only when the
/// whole chain fails does the call error, carrying the last failure.
pub struct RelayClient {
    client: reqwest::Client,
    relays: Vec<String>,
}

impl RelayClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(FlziosError::Http)?;

        Ok(Self {
            client,
            relays: config.relays,
        })
    }

    /// Fetch the body of `target_url` through the relay chain
    ///
    /// # Arguments
    /// * `target_url` - The absolute URL whose body should be retrieved
    ///
    /// # Returns
    /// The raw response body of the first relay that succeeds
    ///
    /// # Errors
    /// `RelayExhausted` when every relay fails, carrying the last error
    /// (a transport `Http` error or a `RelayStatus` for a non-2xx answer)
    pub async fn fetch(&self, target_url: &str) -> Result<String> {
        let mut last_error: Option<FlziosError> = None;

        for relay in &self.relays {
            let url = format!("{}{}", relay, urlencoding::encode(target_url));

            match self.do_fetch(&url).await {
                Ok(body) => {
                    debug!(relay = relay.as_str(), "relay fetch succeeded");
                    return Ok(body);
                }
                Err(e) => {
                    warn!(relay = relay.as_str(), error = %e, "relay fetch failed, trying next");
                    last_error = Some(e);
                }
            }
        }

        Err(FlziosError::RelayExhausted(Box::new(
            last_error.unwrap_or_else(|| {
                FlziosError::InvalidUrl(format!("no relays configured for {target_url}"))
            }),
        )))
    }

    /// Perform a single fetch attempt against one relay
    async fn do_fetch(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(FlziosError::Http)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FlziosError::RelayStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response.text().await.map_err(FlziosError::Http)
    }

    /// The configured relay bases, in try order
    pub fn relays(&self) -> &[String] {
        &self.relays
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn relay_base(server: &MockServer) -> String {
        format!("{}/relay?url=", server.uri())
    }

    async fn client_for(relays: Vec<String>) -> RelayClient {
        RelayClient::with_config(ClientConfig {
            timeout_secs: 5,
            relays,
        })
        .expect("client should build")
    }

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.relays.len(), 3);
        assert_eq!(config.relays[0], DEFAULT_RELAYS[0]);
    }

    #[test]
    fn test_client_creation() {
        let client = RelayClient::new();
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_first_relay_success_short_circuits() {
        let first = MockServer::start().await;
        let second = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/relay"))
            .respond_with(ResponseTemplate::new(200).set_body_string("first body"))
            .expect(1)
            .mount(&first)
            .await;
        Mock::given(method("GET"))
            .and(path("/relay"))
            .respond_with(ResponseTemplate::new(200).set_body_string("second body"))
            .expect(0)
            .mount(&second)
            .await;

        let client = client_for(vec![relay_base(&first), relay_base(&second)]).await;
        let body = client.fetch("https://flzios.ir/list.php?q=x").await.unwrap();

        assert_eq!(body, "first body");
    }

    #[tokio::test]
    async fn test_failing_relays_fall_through_to_third() {
        let first = MockServer::start().await;
        let second = MockServer::start().await;
        let third = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/relay"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&first)
            .await;
        Mock::given(method("GET"))
            .and(path("/relay"))
            .respond_with(ResponseTemplate::new(403))
            .expect(1)
            .mount(&second)
            .await;
        Mock::given(method("GET"))
            .and(path("/relay"))
            .respond_with(ResponseTemplate::new(200).set_body_string("third body"))
            .expect(1)
            .mount(&third)
            .await;

        let client = client_for(vec![
            relay_base(&first),
            relay_base(&second),
            relay_base(&third),
        ])
        .await;
        let body = client.fetch("https://flzios.ir/list.php?q=x").await.unwrap();

        assert_eq!(body, "third body");
    }

    #[tokio::test]
    async fn test_all_relays_failing_reports_last_error() {
        let first = MockServer::start().await;
        let second = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&first)
            .await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&second)
            .await;

        let client = client_for(vec![relay_base(&first), relay_base(&second)]).await;
        let result = client.fetch("https://flzios.ir/list.php?q=x").await;

        match result {
            Err(FlziosError::RelayExhausted(last)) => match *last {
                FlziosError::RelayStatus { status, .. } => assert_eq!(status, 404),
                other => panic!("expected RelayStatus, got {other}"),
            },
            other => panic!("expected RelayExhausted, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_target_url_is_percent_encoded() {
        let server = MockServer::start().await;
        let target = "https://flzios.ir/list.php?q=a b&send=x";

        // The matcher sees the decoded query value; a request only matches
        // when the client encoded the full target into one parameter.
        Mock::given(method("GET"))
            .and(path("/relay"))
            .and(query_param("url", target))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(vec![relay_base(&server)]).await;
        let body = client.fetch(target).await.unwrap();

        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn test_no_relays_configured() {
        let client = client_for(Vec::new()).await;
        let result = client.fetch("https://flzios.ir/list.php?q=x").await;

        match result {
            Err(FlziosError::RelayExhausted(last)) => {
                assert!(matches!(*last, FlziosError::InvalidUrl(_)));
            }
            other => panic!("expected RelayExhausted, got {other:?}"),
        }
    }
}
