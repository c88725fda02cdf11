use std::env;
use std::sync::Arc;
use std::time::Duration;

use regex::Regex;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::error::{ClientError, ErrorEnvelope};

/// Header used for API-key authentication.
pub const API_KEY_HEADER: &str = "X-JFrog-Art-Api";

/// JFrog Platform API client
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: reqwest::Client,
    base_url: Url,
    product_id: String,
    auth: Auth,
    retry: RetryConfig,
    policy: RetryPolicy,
}

#[derive(Debug, Clone, Default)]
pub enum Auth {
    #[default]
    Anonymous,
    AccessToken(String),
    ApiKey(String),
}

#[derive(Clone)]
pub struct RetryConfig {
    pub max_retries: u32,
    pub initial_backoff_ms: u64,
    pub max_backoff_ms: u64,
    pub timeout_seconds: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 20,
            initial_backoff_ms: 100,
            max_backoff_ms: 10000,
            timeout_seconds: 30,
        }
    }
}

/// Decides whether a response body forces another attempt, independent of
/// the HTTP status. The platform answers some conflicting configuration
/// writes with a descriptor merge error that resolves on retry.
#[derive(Clone, Default)]
pub struct RetryPolicy {
    body_pattern: Option<Arc<Regex>>,
}

impl RetryPolicy {
    pub fn never() -> Self {
        Self { body_pattern: None }
    }

    pub fn on_merge_conflict() -> Self {
        Self {
            body_pattern: Some(Arc::new(
                Regex::new(".*Could not merge and save new descriptor.*")
                    .expect("merge conflict pattern is valid"),
            )),
        }
    }

    pub fn on_body_match(pattern: Regex) -> Self {
        Self {
            body_pattern: Some(Arc::new(pattern)),
        }
    }

    fn wants_retry(&self, body: &str) -> bool {
        self.body_pattern
            .as_ref()
            .is_some_and(|re| re.is_match(body))
    }
}

impl Client {
    /// Create a client bound to the platform at `url` with the default
    /// retry behavior. Any path component of `url` is dropped; requests are
    /// issued against `scheme://host[:port]`.
    pub fn build(url: &str, product_id: &str) -> Result<Self, ClientError> {
        Self::with_config(url, product_id, RetryConfig::default(), RetryPolicy::never())
    }

    pub fn with_config(
        url: &str,
        product_id: &str,
        retry: RetryConfig,
        policy: RetryPolicy,
    ) -> Result<Self, ClientError> {
        let parsed =
            Url::parse(url).map_err(|e| ClientError::InvalidUrl(format!("{url}: {e}")))?;
        let host = parsed
            .host_str()
            .ok_or_else(|| ClientError::InvalidUrl(format!("{url} has no host")))?;

        let mut base = format!("{}://{}", parsed.scheme(), host);
        if let Some(port) = parsed.port() {
            base.push_str(&format!(":{port}"));
        }
        let base_url =
            Url::parse(&base).map_err(|e| ClientError::InvalidUrl(format!("{base}: {e}")))?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&format!("jfrog/{product_id}"))?,
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(retry.timeout_seconds))
            .connect_timeout(Duration::from_secs(10))
            .pool_idle_timeout(Duration::from_secs(90))
            .pool_max_idle_per_host(10)
            .tcp_keepalive(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                base_url,
                product_id: product_id.to_string(),
                auth: Auth::Anonymous,
                retry,
                policy,
            }),
        })
    }

    /// Attach authentication. An access token takes precedence over an API
    /// key; supplying neither is an error.
    pub fn add_auth(
        self,
        api_key: Option<&str>,
        access_token: Option<&str>,
    ) -> Result<Self, ClientError> {
        match (api_key, access_token) {
            (_, Some(token)) if !token.is_empty() => Ok(self.with_access_token(token)),
            (Some(key), _) if !key.is_empty() => Ok(self.with_api_key(key)),
            _ => Err(ClientError::MissingCredentials),
        }
    }

    pub fn with_access_token(self, token: impl Into<String>) -> Self {
        self.with_auth(Auth::AccessToken(token.into()))
    }

    pub fn with_api_key(self, key: impl Into<String>) -> Self {
        self.with_auth(Auth::ApiKey(key.into()))
    }

    pub fn with_retry_policy(self, policy: RetryPolicy) -> Self {
        let inner = &self.inner;
        Self {
            inner: Arc::new(ClientInner {
                http: inner.http.clone(),
                base_url: inner.base_url.clone(),
                product_id: inner.product_id.clone(),
                auth: inner.auth.clone(),
                retry: inner.retry.clone(),
                policy,
            }),
        }
    }

    fn with_auth(self, auth: Auth) -> Self {
        let inner = &self.inner;
        Self {
            inner: Arc::new(ClientInner {
                http: inner.http.clone(),
                base_url: inner.base_url.clone(),
                product_id: inner.product_id.clone(),
                auth,
                retry: inner.retry.clone(),
                policy: inner.policy.clone(),
            }),
        }
    }

    pub fn base_url(&self) -> &str {
        self.inner.base_url.as_str()
    }

    pub fn product_id(&self) -> &str {
        &self.inner.product_id
    }

    pub fn is_authenticated(&self) -> bool {
        !matches!(self.inner.auth, Auth::Anonymous)
    }

    /// Execute a GET request with retry logic
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.execute(Method::GET, path, None::<&()>).await
    }

    /// Execute a POST request with retry logic
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        self.execute(Method::POST, path, Some(body)).await
    }

    /// Execute a PUT request with retry logic
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        self.execute(Method::PUT, path, Some(body)).await
    }

    /// Execute a DELETE request with retry logic
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.execute(Method::DELETE, path, None::<&()>).await
    }

    /// Execute a GET and return the raw body. Used for endpoints with
    /// free-form responses, like health pings.
    pub async fn get_text(&self, path: &str) -> Result<String, ClientError> {
        let (_, text) = self.execute_raw(Method::GET, path, None::<&()>).await?;
        Ok(text)
    }

    /// Execute a POST and discard the response body. Used for endpoints that
    /// answer with an empty or free-form body.
    pub async fn post_no_content<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ClientError> {
        self.execute_raw(Method::POST, path, Some(body)).await?;
        Ok(())
    }

    async fn execute<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let (_, text) = self.execute_raw(method, path, body).await?;
        serde_json::from_str(&text).map_err(|e| {
            tracing::error!("failed to deserialize response: {e}, body: {text}");
            ClientError::Parse(e.to_string())
        })
    }

    async fn execute_raw<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<(StatusCode, String), ClientError> {
        let url = self.endpoint(path);
        let mut attempt = 0;
        let mut last_error = None;

        while attempt <= self.inner.retry.max_retries {
            if attempt > 0 {
                let backoff = std::cmp::min(
                    self.inner.retry.initial_backoff_ms * (2_u64.pow(attempt - 1)),
                    self.inner.retry.max_backoff_ms,
                );
                tracing::debug!(
                    "retrying request to {} after {}ms (attempt {})",
                    path,
                    backoff,
                    attempt
                );
                tokio::time::sleep(Duration::from_millis(backoff)).await;
            }

            self.log_request(&method, &url);

            let mut request = self.inner.http.request(method.clone(), &url);
            request = match &self.inner.auth {
                Auth::Anonymous => request,
                Auth::AccessToken(token) => request.bearer_auth(token),
                Auth::ApiKey(key) => request.header(API_KEY_HEADER, key),
            };
            if let Some(b) = body {
                request = request.json(b);
            }

            match request.send().await {
                Ok(response) => {
                    let status = response.status();
                    let text = response.text().await.unwrap_or_default();

                    if self.inner.policy.wants_retry(&text) {
                        last_error = Some(api_error(status, text));
                    } else if status.is_success() {
                        return Ok((status, text));
                    } else if status == StatusCode::UNAUTHORIZED {
                        return Err(ClientError::AuthFailed);
                    } else if status == StatusCode::TOO_MANY_REQUESTS {
                        last_error = Some(ClientError::RateLimited);
                    } else if status.is_server_error() {
                        last_error = Some(ClientError::ServiceUnavailable);
                    } else {
                        return Err(api_error(status, text));
                    }
                }
                Err(e) => {
                    if e.is_timeout() {
                        last_error =
                            Some(ClientError::Timeout(self.inner.retry.timeout_seconds));
                    } else if e.is_connect() || e.is_request() {
                        last_error = Some(ClientError::ServiceUnavailable);
                    } else {
                        return Err(ClientError::Request(e));
                    }
                }
            }

            attempt += 1;
        }

        Err(last_error.unwrap_or(ClientError::ServiceUnavailable))
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.inner.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn log_request(&self, method: &Method, url: &str) {
        if !debug_logging_enabled() {
            return;
        }
        // Never log the auth token
        let auth = match self.inner.auth {
            Auth::Anonymous => "none",
            Auth::AccessToken(_) => "Authorization: <REDACTED>",
            Auth::ApiKey(_) => "X-JFrog-Art-Api: <REDACTED>",
        };
        tracing::debug!(%method, url = %url, auth, "sending request");
    }
}

fn debug_logging_enabled() -> bool {
    matches!(
        env::var("TF_LOG").unwrap_or_default().to_lowercase().as_str(),
        "debug" | "trace"
    )
}

fn api_error(status: StatusCode, text: String) -> ClientError {
    let message = match serde_json::from_str::<ErrorEnvelope>(&text) {
        Ok(envelope) if !envelope.errors.is_empty() => envelope.message(),
        _ => text,
    };
    ClientError::Api {
        status: status.as_u16(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    fn quick_retry() -> RetryConfig {
        RetryConfig {
            max_retries: 2,
            initial_backoff_ms: 1,
            max_backoff_ms: 5,
            timeout_seconds: 5,
        }
    }

    #[test]
    fn build_strips_path_from_base_url() {
        let client = Client::build("https://myorg.jfrog.io/artifactory", "terraform-provider-artifactory/1.0.0").unwrap();
        assert_eq!(client.base_url(), "https://myorg.jfrog.io/");
    }

    #[test]
    fn build_keeps_explicit_port() {
        let client = Client::build("http://localhost:8081/artifactory", "test/0.0.1").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8081/");
    }

    #[test]
    fn build_rejects_relative_url() {
        let result = Client::build("myorg.jfrog.io", "test/0.0.1");
        assert!(matches!(result, Err(ClientError::InvalidUrl(_))));
    }

    #[test]
    fn add_auth_prefers_access_token() {
        let client = Client::build("https://myorg.jfrog.io", "test/0.0.1")
            .unwrap()
            .add_auth(Some("api-key"), Some("access-token"))
            .unwrap();
        assert!(matches!(client.inner.auth, Auth::AccessToken(_)));
    }

    #[test]
    fn add_auth_falls_back_to_api_key() {
        let client = Client::build("https://myorg.jfrog.io", "test/0.0.1")
            .unwrap()
            .add_auth(Some("api-key"), None)
            .unwrap();
        assert!(matches!(client.inner.auth, Auth::ApiKey(_)));
    }

    #[test]
    fn add_auth_requires_credentials() {
        let result = Client::build("https://myorg.jfrog.io", "test/0.0.1")
            .unwrap()
            .add_auth(None, Some(""));
        assert!(matches!(result, Err(ClientError::MissingCredentials)));
    }

    #[tokio::test]
    async fn client_sends_default_headers_and_bearer_token() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/artifactory/api/system/ping")
            .match_header("user-agent", "jfrog/test/0.0.1")
            .match_header("accept", "*/*")
            .match_header("authorization", "Bearer secret-token")
            .with_body(r#"{"status":"OK"}"#)
            .create_async()
            .await;

        let client = Client::build(&server.url(), "test/0.0.1")
            .unwrap()
            .with_access_token("secret-token");

        let body: serde_json::Value = client.get("/artifactory/api/system/ping").await.unwrap();
        assert_eq!(body["status"], "OK");

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn client_sends_api_key_header() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/artifactory/api/system/ping")
            .match_header("x-jfrog-art-api", "my-api-key")
            .with_body(r#"{"status":"OK"}"#)
            .create_async()
            .await;

        let client = Client::build(&server.url(), "test/0.0.1")
            .unwrap()
            .with_api_key("my-api-key");

        let _: serde_json::Value = client.get("/artifactory/api/system/ping").await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn client_maps_unauthorized_without_retry() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/artifactory/api/system/version")
            .with_status(401)
            .with_body(r#"{"errors":[{"code":"UNAUTHORIZED","message":"Bad credentials"}]}"#)
            .expect(1)
            .create_async()
            .await;

        let client = Client::with_config(
            &server.url(),
            "test/0.0.1",
            quick_retry(),
            RetryPolicy::never(),
        )
        .unwrap();

        let result: Result<serde_json::Value, _> =
            client.get("/artifactory/api/system/version").await;
        assert!(matches!(result, Err(ClientError::AuthFailed)));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn client_retries_server_errors_until_ceiling() {
        let mut server = Server::new_async().await;
        // max_retries = 2, so the request goes out three times
        let mock = server
            .mock("GET", "/artifactory/api/system/version")
            .with_status(503)
            .expect(3)
            .create_async()
            .await;

        let client = Client::with_config(
            &server.url(),
            "test/0.0.1",
            quick_retry(),
            RetryPolicy::never(),
        )
        .unwrap();

        let result: Result<serde_json::Value, _> =
            client.get("/artifactory/api/system/version").await;
        assert!(matches!(result, Err(ClientError::ServiceUnavailable)));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn client_does_not_retry_plain_bad_requests() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("PUT", "/artifactory/api/repositories/my-repo")
            .with_status(400)
            .with_body("malformed repository configuration")
            .expect(1)
            .create_async()
            .await;

        let client = Client::with_config(
            &server.url(),
            "test/0.0.1",
            quick_retry(),
            RetryPolicy::never(),
        )
        .unwrap();

        let result: Result<serde_json::Value, _> = client
            .put(
                "/artifactory/api/repositories/my-repo",
                &serde_json::json!({"key": "my-repo"}),
            )
            .await;
        assert!(matches!(result, Err(ClientError::Api { status: 400, .. })));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn client_retries_on_merge_conflict_body() {
        let mut server = Server::new_async().await;
        // The merge policy keeps retrying as long as the descriptor error
        // shows up in the body, regardless of the HTTP status.
        let mock = server
            .mock("PUT", "/artifactory/api/repositories/my-repo")
            .with_status(400)
            .with_body("Could not merge and save new descriptor [model=my-repo]")
            .expect(3)
            .create_async()
            .await;

        let client = Client::with_config(
            &server.url(),
            "test/0.0.1",
            quick_retry(),
            RetryPolicy::on_merge_conflict(),
        )
        .unwrap();

        let result: Result<serde_json::Value, _> = client
            .put(
                "/artifactory/api/repositories/my-repo",
                &serde_json::json!({"key": "my-repo"}),
            )
            .await;
        assert!(matches!(result, Err(ClientError::Api { status: 400, .. })));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn client_surfaces_platform_error_envelope() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/access/api/v1/projects/bad")
            .with_status(404)
            .with_body(r#"{"errors":[{"code":"NOT_FOUND","message":"Project bad not found"}]}"#)
            .create_async()
            .await;

        let client = Client::with_config(
            &server.url(),
            "test/0.0.1",
            quick_retry(),
            RetryPolicy::never(),
        )
        .unwrap();

        let result: Result<serde_json::Value, _> = client.get("/access/api/v1/projects/bad").await;
        match result {
            Err(ClientError::Api { status, message }) => {
                assert_eq!(status, 404);
                assert_eq!(message, "Project bad not found");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }
}
