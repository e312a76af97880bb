use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use reqwest::{Request as ReqwestRequest, Response as ReqwestResponse};
use tower::{Layer, Service};

use crate::api::SalesflyContext;
use crate::error::SalesflyError;
use crate::types::ApiKey;

use super::http_client::{
    SalesflyClient, DEFAULT_BASE_URL, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS,
};
use super::Salesfly;

type MiddlewareFuture =
    Pin<Box<dyn Future<Output = Result<ReqwestResponse, reqwest::Error>> + Send>>;
type MiddlewareExecutor = Arc<dyn Fn(ReqwestRequest) -> MiddlewareFuture + Send + Sync>;

#[must_use]
#[derive(Default)]
pub struct SalesflyBuilder<M = ()> {
    api_key: Option<ApiKey>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    middleware: Option<M>,
}

impl<M> std::fmt::Debug for SalesflyBuilder<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SalesflyBuilder")
            .field("api_key", &self.api_key)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("middleware", &self.middleware.as_ref().map(|_| ".."))
            .finish_non_exhaustive()
    }
}

impl<M> SalesflyBuilder<M> {
    pub fn api_key(mut self, api_key: ApiKey) -> Self {
        self.api_key = Some(api_key);
        self
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    pub fn with_middleware<M2>(self, middleware: M2) -> SalesflyBuilder<M2>
    where
        M2: Layer<SalesflyClient> + Clone + Send + Sync + 'static,
    {
        SalesflyBuilder {
            api_key: self.api_key,
            base_url: self.base_url,
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            middleware: Some(middleware),
        }
    }

    pub fn build(self) -> Result<Salesfly, SalesflyError>
    where
        M: Layer<SalesflyClient> + Clone + Send + Sync + 'static,
        M::Service: Service<ReqwestRequest, Response = ReqwestResponse, Error = reqwest::Error>
            + Clone
            + Send
            + Sync
            + 'static,
        <M::Service as Service<ReqwestRequest>>::Future: Send + 'static,
    {
        let api_key = self
            .api_key
            .ok_or_else(|| SalesflyError::Config("api_key is required".to_string()))?;

        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(SalesflyError::Config(format!(
                "base_url must start with http:// or https://, got: {}",
                base_url
            )));
        }

        let timeout = self
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        let connect_timeout = self
            .connect_timeout
            .unwrap_or(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS));

        let mut client = SalesflyClient::builder()
            .api_key(api_key)
            .base_url(base_url)
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()?;

        if let Some(middleware) = self.middleware {
            let service = middleware.layer(client.clone());
            let executor = make_middleware_executor(service);
            client = client.with_middleware_executor(executor);
        }

        let context = Arc::new(SalesflyContext::new(Arc::new(client)));

        Ok(Salesfly::from(context))
    }
}

fn make_middleware_executor<S>(service: S) -> MiddlewareExecutor
where
    S: Service<ReqwestRequest, Response = ReqwestResponse, Error = reqwest::Error>
        + Clone
        + Send
        + Sync
        + 'static,
    S::Future: Send + 'static,
{
    let service = Arc::new(service);

    Arc::new(move |request: ReqwestRequest| {
        let mut service = (*service).clone();
        Box::pin(async move { service.call(request).await })
    })
}

#[cfg(test)]
mod tests {
    use std::future::Future;
    use std::pin::Pin;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::task::{Context, Poll};

    use tower::{Layer, Service};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn test_key() -> ApiKey {
        ApiKey::new("sk_test_1234567890").unwrap()
    }

    #[test]
    fn test_builder_default_values() {
        let salesfly = Salesfly::builder().api_key(test_key()).build().unwrap();

        assert_eq!(salesfly.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_builder_custom_values() {
        let salesfly = Salesfly::builder()
            .api_key(test_key())
            .base_url("https://custom.api.example.com")
            .timeout(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(5))
            .build()
            .unwrap();

        assert_eq!(salesfly.base_url(), "https://custom.api.example.com");
    }

    #[test]
    fn test_builder_rejects_bad_base_url() {
        let result = Salesfly::builder()
            .api_key(test_key())
            .base_url("ftp://example.com")
            .build();

        assert!(matches!(result, Err(SalesflyError::Config(_))));
    }

    #[test]
    fn test_missing_api_key() {
        let result = Salesfly::builder().build();

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_middleware_configured_and_executes() {
        #[derive(Clone)]
        struct FlagLayer {
            flag: Arc<AtomicBool>,
        }

        impl Layer<SalesflyClient> for FlagLayer {
            type Service = FlagService;

            fn layer(&self, inner: SalesflyClient) -> Self::Service {
                FlagService {
                    inner,
                    flag: Arc::clone(&self.flag),
                }
            }
        }

        #[derive(Clone)]
        struct FlagService {
            inner: SalesflyClient,
            flag: Arc<AtomicBool>,
        }

        impl Service<ReqwestRequest> for FlagService {
            type Response = ReqwestResponse;
            type Error = reqwest::Error;
            type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

            fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
                Poll::Ready(Ok(()))
            }

            fn call(&mut self, req: ReqwestRequest) -> Self::Future {
                self.flag.store(true, Ordering::SeqCst);
                let mut inner = self.inner.clone();
                Box::pin(async move { inner.call(req).await })
            }
        }

        let middleware_invoked = Arc::new(AtomicBool::new(false));
        let layer = FlagLayer {
            flag: Arc::clone(&middleware_invoked),
        };

        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/usage"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": {"allowed": 1000, "used": 1}
            })))
            .mount(&mock_server)
            .await;

        let salesfly = Salesfly::builder()
            .api_key(test_key())
            .base_url(mock_server.uri())
            .with_middleware(layer)
            .build()
            .unwrap();

        let usage = salesfly.usage().await.unwrap();
        assert_eq!(usage.allowed, 1000);

        assert!(middleware_invoked.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_builder_with_logging_middleware_builds() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/usage"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": {"allowed": 1000, "used": 1}
            })))
            .mount(&mock_server)
            .await;

        let salesfly = Salesfly::builder()
            .api_key(test_key())
            .base_url(mock_server.uri())
            .with_middleware(crate::middleware::LoggingMiddleware::new())
            .build()
            .unwrap();

        let result = salesfly.usage().await;
        assert!(result.is_ok());
    }
}
