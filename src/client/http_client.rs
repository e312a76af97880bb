//! Salesfly HTTP client
//!
//! Wraps reqwest and implements the shared response envelope: successful
//! JSON responses carry the payload under a `data` key, failures carry a
//! `{status, message, code}` error document.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::{Duration, Instant};

use log::debug;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tower::Service;

use crate::error::{ApiError, Result, SalesflyError};
use crate::types::ApiKey;

pub(crate) const DEFAULT_BASE_URL: &str = "https://api.salesfly.com";
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub(crate) const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
pub(crate) const USER_AGENT_VALUE: &str = concat!("salesfly-rust/", env!("CARGO_PKG_VERSION"));

// Escapes characters not allowed in a URL path segment while preserving
// commas between IPs and colons in IPv6 addresses.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

type MiddlewareFuture =
    Pin<Box<dyn Future<Output = std::result::Result<reqwest::Response, reqwest::Error>> + Send>>;
type MiddlewareExecutor = Arc<dyn Fn(reqwest::Request) -> MiddlewareFuture + Send + Sync>;

/// Salesfly API client
///
/// Reusable HTTP client for calling the Salesfly REST API.
/// Built with reqwest for async HTTP requests.
#[derive(Clone)]
pub struct SalesflyClient {
    http: Client,
    api_key: ApiKey,
    base_url: String,
    middleware_executor: Option<MiddlewareExecutor>,
}

impl std::fmt::Debug for SalesflyClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SalesflyClient")
            .field("api_key", &self.api_key)
            .field("base_url", &self.base_url)
            .field(
                "middleware_executor",
                &self.middleware_executor.as_ref().map(|_| ".."),
            )
            .finish_non_exhaustive()
    }
}

impl SalesflyClient {
    /// Create a new client builder
    pub fn builder() -> SalesflyClientBuilder {
        SalesflyClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the underlying [`reqwest::Client`] for raw HTTP requests.
    ///
    /// Note: requests made through this client bypass the middleware pipeline.
    /// Use [`get`](Self::get) or [`post`](Self::post) for middleware-aware requests.
    pub fn http(&self) -> &Client {
        &self.http
    }

    /// Percent-encode a value for use as a URL path segment.
    pub(crate) fn encode_path_segment(segment: &str) -> String {
        utf8_percent_encode(segment, PATH_SEGMENT).to_string()
    }

    pub(crate) fn with_middleware_executor(mut self, executor: MiddlewareExecutor) -> Self {
        self.middleware_executor = Some(executor);
        self
    }

    pub(crate) async fn send_request(
        &self,
        request: reqwest::Request,
    ) -> std::result::Result<reqwest::Response, reqwest::Error> {
        if let Some(executor) = &self.middleware_executor {
            (executor)(request).await
        } else {
            self.http.execute(request).await
        }
    }

    /// Map a non-2xx response body to a typed error.
    ///
    /// Bodies that parse as the Salesfly error document become
    /// [`SalesflyError::Response`]; anything else is surfaced verbatim as
    /// [`SalesflyError::Transport`].
    pub(crate) fn error_from_body(status: u16, body: &str) -> SalesflyError {
        match serde_json::from_str::<ApiError>(body) {
            Ok(err) => err.into(),
            Err(_) => SalesflyError::Transport {
                status,
                body: body.to_string(),
            },
        }
    }

    async fn execute<T: DeserializeOwned>(&self, request: reqwest::Request) -> Result<T> {
        let method = request.method().clone();
        let path = request.url().path().to_string();
        let started = Instant::now();

        let response = self.send_request(request).await?;
        let status = response.status();
        debug!(
            "{} {} -> {} ({}ms)",
            method,
            path,
            status.as_u16(),
            started.elapsed().as_millis()
        );

        if !status.is_success() {
            let body = response.text().await?;
            return Err(Self::error_from_body(status.as_u16(), &body));
        }

        let value: serde_json::Value = response.json().await?;
        let data = value
            .get("data")
            .cloned()
            .unwrap_or(serde_json::Value::Null);
        Ok(serde_json::from_value(data)?)
    }

    async fn execute_raw(&self, request: reqwest::Request) -> Result<Vec<u8>> {
        let method = request.method().clone();
        let path = request.url().path().to_string();
        let started = Instant::now();

        let response = self.send_request(request).await?;
        let status = response.status();
        debug!(
            "{} {} -> {} ({}ms)",
            method,
            path,
            status.as_u16(),
            started.elapsed().as_millis()
        );

        if !status.is_success() {
            let body = response.text().await?;
            return Err(Self::error_from_body(status.as_u16(), &body));
        }

        Ok(response.bytes().await?.to_vec())
    }

    /// Make a GET request to the Salesfly API
    ///
    /// # Arguments
    /// * `path` - API endpoint path (e.g., "/v1/usage")
    /// * `query` - Query parameters as key-value pairs
    ///
    /// # Errors
    /// - Returns `SalesflyError::Response` for structured API errors
    /// - Returns `SalesflyError::Transport` for non-2xx responses with
    ///   unparseable bodies
    /// - Returns `SalesflyError::Http` for connection failures
    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let request = self.http.get(url).query(query).build()?;
        self.execute(request).await
    }

    /// Make a POST request with a JSON body to the Salesfly API
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let request = self.http.post(url).json(body).build()?;
        self.execute(request).await
    }

    /// Make a POST request with a multipart form body to the Salesfly API
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let request = self.http.post(url).multipart(form).build()?;
        self.execute(request).await
    }

    /// Make a POST request with a JSON body and return the raw response
    /// bytes, skipping `data` unwrapping. Used by binary endpoints.
    pub async fn post_raw<B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
        accept: &'static str,
    ) -> Result<Vec<u8>> {
        let url = format!("{}{}", self.base_url, path);
        let request = self
            .http
            .post(url)
            .json(body)
            .header(ACCEPT, accept)
            .build()?;
        self.execute_raw(request).await
    }
}

impl Service<reqwest::Request> for SalesflyClient {
    type Response = reqwest::Response;
    type Error = reqwest::Error;
    type Future = MiddlewareFuture;

    fn poll_ready(
        &mut self,
        _cx: &mut Context<'_>,
    ) -> Poll<std::result::Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: reqwest::Request) -> Self::Future {
        let client = self.http.clone();
        Box::pin(async move { client.execute(req).await })
    }
}

/// Builder for SalesflyClient
///
/// # Example
///
/// ```rust
/// use salesfly::client::SalesflyClient;
/// use salesfly::types::ApiKey;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = SalesflyClient::builder()
///     .api_key(ApiKey::new("sk_live_abc123")?)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct SalesflyClientBuilder {
    api_key: Option<ApiKey>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl SalesflyClientBuilder {
    /// Set the Salesfly API key
    pub fn api_key(mut self, api_key: ApiKey) -> Self {
        self.api_key = Some(api_key);
        self
    }

    /// Set the base URL for API calls
    ///
    /// Default: `<https://api.salesfly.com>`
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the total timeout for requests
    ///
    /// Default: 30 seconds
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the connection timeout
    ///
    /// Default: 10 seconds
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Build the SalesflyClient
    ///
    /// # Errors
    /// Returns an error if the api key is not set
    pub fn build(self) -> Result<SalesflyClient> {
        let api_key = self
            .api_key
            .ok_or_else(|| SalesflyError::Config("api_key is required".to_string()))?;

        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout = self
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        let connect_timeout = self
            .connect_timeout
            .unwrap_or(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS));

        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", api_key.as_str()))
            .map_err(|e| SalesflyError::Config(format!("invalid api key: {e}")))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()?;

        Ok(SalesflyClient {
            http: client,
            api_key,
            base_url,
            middleware_executor: None,
        })
    }
}
