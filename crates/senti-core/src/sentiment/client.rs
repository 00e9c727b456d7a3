//! HTTP client for the sentiment classification service.

use std::future::Future;

use anyhow::{Context, Result};
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use url::Url;

use super::error::RequestError;
use super::types::{AnalyzeRequest, Analysis, HealthStatus};
use crate::config::Config;

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("senti/", env!("CARGO_PKG_VERSION"));

const SENTIMENT_PATH: &str = "/sentiment";
const HEALTH_PATH: &str = "/health";

/// Something that can classify text.
///
/// The form controller is generic over this so tests can substitute a fake.
pub trait SentimentService {
    fn analyze(
        &self,
        request: &AnalyzeRequest,
    ) -> impl Future<Output = Result<Analysis, RequestError>> + Send;
}

/// Where requests are sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// Prefix prepended to endpoint paths. Empty means same origin.
    pub base: String,
    /// Origin that relative paths resolve against when `base` is empty.
    pub origin: String,
}

impl Endpoint {
    pub fn new(base: impl Into<String>, origin: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            origin: origin.into(),
        }
    }

    /// Resolves an endpoint path such as `/sentiment`.
    ///
    /// # Errors
    /// Returns a transport error if the resulting URL is malformed.
    pub fn url(&self, path: &str) -> Result<Url, RequestError> {
        let base = self.base.trim();
        let resolved = if base.is_empty() {
            Url::parse(&self.origin).and_then(|origin| origin.join(path))
        } else {
            Url::parse(&format!("{}{}", base.trim_end_matches('/'), path))
        };
        resolved.map_err(|e| RequestError::transport(Some(format!("Invalid endpoint URL: {e}"))))
    }

    /// Human-readable form of the sentiment endpoint, for status lines.
    pub fn describe(&self) -> String {
        self.url(SENTIMENT_PATH)
            .map_or_else(|_| format!("{}{}", self.base, SENTIMENT_PATH), String::from)
    }
}

/// Sentiment client backed by reqwest.
#[derive(Debug, Clone)]
pub struct SentimentClient {
    endpoint: Endpoint,
    http: reqwest::Client,
}

impl SentimentClient {
    /// Creates a client for `endpoint`.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (e.g. TLS backend
    /// initialisation fails).
    pub fn new(endpoint: Endpoint) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("build HTTP client")?;
        Ok(Self { endpoint, http })
    }

    /// Builds a client from config, applying an optional base override.
    ///
    /// # Errors
    /// Returns an error if the effective API base is not a valid URL or the
    /// HTTP client cannot be built.
    pub fn from_config(config: &Config, api_base_override: Option<&str>) -> Result<Self> {
        let base = config.effective_api_base(api_base_override)?;
        Self::new(Endpoint::new(base, config.origin.clone()))
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Sends one classification request.
    ///
    /// # Errors
    /// Returns an HTTP status error for non-2xx responses, a transport error
    /// when the request cannot be delivered and a parse error when the body
    /// is not a valid classification.
    pub async fn analyze(&self, request: &AnalyzeRequest) -> Result<Analysis, RequestError> {
        let url = self.endpoint.url(SENTIMENT_PATH)?;
        tracing::debug!(%url, chars = request.text.chars().count(), "Sending sentiment request");

        let response = self
            .http
            .post(url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .json(request)
            .send()
            .await
            .map_err(RequestError::from)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Sentiment request failed");
            return Err(RequestError::http_status(status.as_u16()));
        }

        let analysis: Analysis = response.json().await.map_err(|e| {
            tracing::warn!(error = %e, "Malformed sentiment response");
            RequestError::parse(e.to_string())
        })?;

        tracing::info!(
            label = %analysis.label,
            confidence = analysis.confidence,
            "Sentiment request succeeded"
        );
        Ok(analysis)
    }

    /// Checks that the service is reachable.
    ///
    /// # Errors
    /// Same taxonomy as [`SentimentClient::analyze`].
    pub async fn health(&self) -> Result<HealthStatus, RequestError> {
        let url = self.endpoint.url(HEALTH_PATH)?;
        tracing::debug!(%url, "Checking service health");

        let response = self.http.get(url).send().await.map_err(RequestError::from)?;

        let status = response.status();
        if !status.is_success() {
            return Err(RequestError::http_status(status.as_u16()));
        }

        response
            .json::<HealthStatus>()
            .await
            .map_err(|e| RequestError::parse(e.to_string()))
    }
}

impl SentimentService for SentimentClient {
    fn analyze(
        &self,
        request: &AnalyzeRequest,
    ) -> impl Future<Output = Result<Analysis, RequestError>> + Send {
        SentimentClient::analyze(self, request)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::sentiment::RequestErrorKind;

    fn can_bind_localhost() -> bool {
        std::net::TcpListener::bind("127.0.0.1:0").is_ok()
    }

    fn client_for(server: &MockServer) -> SentimentClient {
        SentimentClient::new(Endpoint::new(server.uri(), Config::DEFAULT_ORIGIN)).unwrap()
    }

    fn request(text: &str) -> AnalyzeRequest {
        AnalyzeRequest {
            text: text.to_string(),
        }
    }

    #[test]
    fn test_from_config_applies_override() {
        let config = Config::default();
        let client =
            SentimentClient::from_config(&config, Some("https://api.example.com/")).unwrap();
        assert_eq!(client.endpoint().describe(), "https://api.example.com/sentiment");
    }

    #[test]
    fn test_from_config_rejects_invalid_base() {
        let config = Config::default();
        let err = SentimentClient::from_config(&config, Some("not a url")).unwrap_err();
        assert!(err.to_string().contains("Invalid API base URL"));
    }

    #[test]
    fn test_endpoint_joins_base_and_path() {
        let endpoint = Endpoint::new("https://api.example.com/", Config::DEFAULT_ORIGIN);
        assert_eq!(
            endpoint.url("/sentiment").unwrap().as_str(),
            "https://api.example.com/sentiment"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path_prefix() {
        let endpoint = Endpoint::new("https://example.com/api", Config::DEFAULT_ORIGIN);
        assert_eq!(
            endpoint.url("/sentiment").unwrap().as_str(),
            "https://example.com/api/sentiment"
        );
    }

    #[test]
    fn test_empty_base_resolves_against_origin() {
        let endpoint = Endpoint::new("", "http://127.0.0.1:8000");
        assert_eq!(
            endpoint.url("/sentiment").unwrap().as_str(),
            "http://127.0.0.1:8000/sentiment"
        );
    }

    #[test]
    fn test_malformed_endpoint_is_transport_error() {
        let endpoint = Endpoint::new("", "not a url");
        let err = endpoint.url("/sentiment").unwrap_err();
        assert_eq!(err.kind, RequestErrorKind::Transport);
    }

    #[tokio::test]
    async fn test_analyze_posts_json_and_parses_result() {
        if !can_bind_localhost() {
            eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/sentiment"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({"text": "I love this!"})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"label": "positive", "confidence": 0.95})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let analysis = client.analyze(&request("I love this!")).await.unwrap();

        assert_eq!(analysis.label, "positive");
        assert_eq!(analysis.confidence_percent(), "95.0%");
    }

    #[tokio::test]
    async fn test_analyze_sends_user_agent() {
        if !can_bind_localhost() {
            eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/sentiment"))
            .and(header("user-agent", USER_AGENT))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"label": "neutral", "confidence": 0.5})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        assert!(client.analyze(&request("ok")).await.is_ok());
    }

    #[tokio::test]
    async fn test_server_error_reports_status() {
        if !can_bind_localhost() {
            eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/sentiment"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.analyze(&request("anything")).await.unwrap_err();

        assert_eq!(err.kind, RequestErrorKind::HttpStatus);
        assert_eq!(err.display_message(), "HTTP error! status: 500");
    }

    #[tokio::test]
    async fn test_client_error_status_is_not_distinguished() {
        if !can_bind_localhost() {
            eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/sentiment"))
            .respond_with(
                ResponseTemplate::new(422).set_body_json(json!({"detail": "text is required"})),
            )
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.analyze(&request("x")).await.unwrap_err();

        assert_eq!(err.display_message(), "HTTP error! status: 422");
    }

    #[tokio::test]
    async fn test_malformed_body_is_parse_error() {
        if !can_bind_localhost() {
            eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/sentiment"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.analyze(&request("x")).await.unwrap_err();

        assert_eq!(err.kind, RequestErrorKind::Parse);
        assert!(err.message.is_some());
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        if !can_bind_localhost() {
            eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
            return;
        }
        // Bind then drop to get a port nothing is listening on.
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();

        let client = SentimentClient::new(Endpoint::new(
            format!("http://127.0.0.1:{port}"),
            Config::DEFAULT_ORIGIN,
        ))
        .unwrap();
        let err = client.analyze(&request("x")).await.unwrap_err();

        assert_eq!(err.kind, RequestErrorKind::Transport);
        assert!(!err.display_message().is_empty());
    }

    #[tokio::test]
    async fn test_empty_base_uses_origin() {
        if !can_bind_localhost() {
            eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/sentiment"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"label": "negative", "confidence": 0.8734})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = SentimentClient::new(Endpoint::new("", server.uri())).unwrap();
        let analysis = client.analyze(&request("meh")).await.unwrap();

        assert_eq!(analysis.confidence_percent(), "87.3%");
    }

    #[tokio::test]
    async fn test_health_reports_ok() {
        if !can_bind_localhost() {
            eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .mount(&server)
            .await;

        let client = client_for(&server);
        assert_eq!(client.health().await.unwrap(), HealthStatus { ok: true });
    }
}
