//! Main client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use tracing::debug;
use url::Url;

use crate::api::{ChatApi, EscalationsApi, HealthApi, NotificationsApi, WorkspacesApi};
use crate::error::{Error, ErrorResponse, Result};

/// Default timeout for requests.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Muster API client.
///
/// Cheap to clone; clones share one connection pool.
///
/// # Example
///
/// ```no_run
/// use muster_client::MusterClient;
///
/// # async fn example() -> muster_client::Result<()> {
/// let client = MusterClient::builder()
///     .base_url("http://localhost:7420")
///     .auth_token("secret")
///     .build()?;
///
/// let workspaces = client.workspaces().list("my-project").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct MusterClient {
    inner: Arc<ClientInner>,
}

/// Inner client state (shared across clones).
pub(crate) struct ClientInner {
    /// HTTP client.
    pub(crate) http: reqwest::Client,
    /// Base URL for API requests.
    pub(crate) base_url: Url,
    /// Request timeout.
    pub(crate) timeout: Duration,
}

impl MusterClient {
    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    pub(crate) fn inner(&self) -> &ClientInner {
        &self.inner
    }

    // ─────────────────────────────────────────────────────────────────────────
    // API accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Access the workspace directory API.
    pub fn workspaces(&self) -> WorkspacesApi {
        WorkspacesApi::new(self.clone())
    }

    /// Access the chat API.
    pub fn chat(&self) -> ChatApi {
        ChatApi::new(self.clone())
    }

    /// Access the escalations API.
    pub fn escalations(&self) -> EscalationsApi {
        EscalationsApi::new(self.clone())
    }

    /// Access the notifications API.
    pub fn notifications(&self) -> NotificationsApi {
        NotificationsApi::new(self.clone())
    }

    /// Access the health API.
    pub fn health(&self) -> HealthApi {
        HealthApi::new(self.clone())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internal HTTP methods
    // ─────────────────────────────────────────────────────────────────────────

    /// Build an API URL from path segments, percent-encoding each one.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.inner.base_url.join("api/v1/")?;
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| Error::Config("base_url cannot carry a path".to_string()))?;
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }

    /// Make a GET request.
    pub(crate) async fn get<T: serde::de::DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        let url = self.endpoint(segments)?;
        debug!(%url, "GET");
        let response = self
            .inner
            .http
            .get(url)
            .timeout(self.inner.timeout)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Make a POST request.
    pub(crate) async fn post<T, B>(&self, segments: &[&str], body: &B) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize + ?Sized,
    {
        let url = self.endpoint(segments)?;
        debug!(%url, "POST");
        let response = self
            .inner
            .http
            .post(url)
            .json(body)
            .timeout(self.inner.timeout)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Handle a response, extracting the body or error.
    pub(crate) async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        if response.status().is_success() {
            let bytes = response.bytes().await?;
            Ok(serde_json::from_slice(&bytes)?)
        } else {
            Err(self.extract_error(response).await)
        }
    }

    /// Extract an error from a failed response.
    async fn extract_error(&self, response: reqwest::Response) -> Error {
        let status = response.status().as_u16();
        debug!(status, "request failed");

        match response.json::<ErrorResponse>().await {
            Ok(err) => match status {
                404 => Error::NotFound(err.message),
                401 => Error::Auth(err.message),
                _ => Error::Api {
                    status,
                    code: err.code,
                    message: err.message,
                },
            },
            Err(_) => Error::Api {
                status,
                code: "unknown".to_string(),
                message: format!("HTTP {}", status),
            },
        }
    }
}

/// Builder for creating a [`MusterClient`].
#[derive(Debug)]
pub struct ClientBuilder {
    base_url: Option<String>,
    auth_token: Option<String>,
    timeout: Duration,
    user_agent: Option<String>,
}

impl ClientBuilder {
    /// Create a new builder with defaults.
    pub fn new() -> Self {
        Self {
            base_url: None,
            auth_token: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }

    /// Set the base URL for the server.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the bearer token.
    pub fn auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<MusterClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| Error::Config("base_url is required".to_string()))?;

        let mut base_url = Url::parse(&base_url)?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "unsupported URL scheme '{}'",
                base_url.scheme()
            )));
        }
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(token) = &self.auth_token {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| Error::Config("Invalid auth token".to_string()))?;
            headers.insert(AUTHORIZATION, value);
        }

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("muster-client/{}", env!("CARGO_PKG_VERSION")));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(user_agent)
            .build()?;

        Ok(MusterClient {
            inner: Arc::new(ClientInner {
                http,
                base_url,
                timeout: self.timeout,
            }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
