//! github::gateway
//!
//! Thin invocation layer over the GitHub REST API.
//!
//! # Design
//!
//! The gateway makes exactly one attempt per call: no retry, no backoff.
//! Callers decide on retry policy (the commit orchestrator's single
//! branch-recovery transition is the only retry in this crate). Non-2xx
//! responses are normalized into [`GitHubError`] with the server's `message`
//! field carried through when the body is parseable.
//!
//! A 204 response or an empty body yields `None` rather than a JSON parse
//! error; several write endpoints legitimately return nothing.
//!
//! The bearer token is an explicit constructor input, never read from
//! ambient state.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::errors::GitHubError;

/// Default GitHub API base URL.
const DEFAULT_API_BASE: &str = "https://api.github.com";

/// User-Agent header value for API requests.
const USER_AGENT_VALUE: &str = "gitdrop-cli";

/// API version marker required by GitHub.
const API_VERSION: &str = "2022-11-28";

/// Single-attempt GitHub REST API client.
pub struct Gateway {
    /// HTTP client for making requests
    client: Client,
    /// Bearer token attached to every request
    token: String,
    /// API base URL (configurable for tests and GitHub Enterprise)
    api_base: String,
}

// Custom Debug to avoid exposing the token.
impl std::fmt::Debug for Gateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gateway")
            .field("api_base", &self.api_base)
            .finish()
    }
}

impl Gateway {
    /// Create a gateway against the public GitHub API.
    ///
    /// # Errors
    ///
    /// Returns `GitHubError::InvalidInput` if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, GitHubError> {
        Self::with_api_base(token, DEFAULT_API_BASE)
    }

    /// Create a gateway with a custom API base URL.
    ///
    /// Used by tests (pointed at a mock server) and GitHub Enterprise.
    pub fn with_api_base(
        token: impl Into<String>,
        api_base: impl Into<String>,
    ) -> Result<Self, GitHubError> {
        let token = token.into();
        if token.is_empty() {
            return Err(GitHubError::InvalidInput(
                "a GitHub token is required".into(),
            ));
        }
        Ok(Gateway {
            client: Client::new(),
            token,
            api_base: api_base.into(),
        })
    }

    /// The configured API base URL.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Build common headers for API requests.
    fn headers(&self) -> Result<HeaderMap, GitHubError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.token)).map_err(|_| {
                GitHubError::InvalidInput("token contains invalid header characters".into())
            })?,
        );
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        headers.insert("X-GitHub-Api-Version", HeaderValue::from_static(API_VERSION));
        Ok(headers)
    }

    /// Invoke an API endpoint once.
    ///
    /// `path` is relative to the API base (e.g. `/repos/owner/repo`).
    /// Returns `None` for a 204 response or an empty body.
    pub async fn invoke(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Option<Value>, GitHubError> {
        let url = format!("{}{}", self.api_base, path);
        let mut request = self.client.request(method, &url).headers(self.headers()?);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request
            .send()
            .await
            .map_err(|e| GitHubError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::normalize_error(response, status).await);
        }

        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }
        let bytes = response
            .bytes()
            .await
            .map_err(|e| GitHubError::Network(e.to_string()))?;
        if bytes.is_empty() {
            return Ok(None);
        }
        let value = serde_json::from_slice(&bytes).map_err(|e| GitHubError::Api {
            status: status.as_u16(),
            message: format!("failed to parse response: {e}"),
        })?;
        Ok(Some(value))
    }

    /// GET an endpoint and deserialize the response.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, GitHubError> {
        let value = self.invoke(Method::GET, path, None).await?;
        Self::require_body(value, path)
    }

    /// POST a JSON body and deserialize the response.
    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, GitHubError> {
        let body = Self::to_value(body)?;
        let value = self.invoke(Method::POST, path, Some(&body)).await?;
        Self::require_body(value, path)
    }

    /// PATCH a JSON body. The response body, if any, is discarded.
    pub async fn patch(&self, path: &str, body: &impl Serialize) -> Result<(), GitHubError> {
        let body = Self::to_value(body)?;
        self.invoke(Method::PATCH, path, Some(&body)).await?;
        Ok(())
    }

    /// Upload raw bytes to an absolute URL (release asset endpoint).
    ///
    /// The upload host differs from the API host, so this takes a full URL.
    /// Non-2xx responses map to `GitHubError::UploadFailed`.
    pub async fn upload(
        &self,
        url: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<Option<Value>, GitHubError> {
        let content_type = HeaderValue::from_str(content_type)
            .map_err(|_| GitHubError::InvalidInput("invalid content type".into()))?;
        let response = self
            .client
            .post(url)
            .headers(self.headers()?)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await
            .map_err(|e| GitHubError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = Self::error_message(response, status).await;
            return Err(GitHubError::UploadFailed {
                status: status.as_u16(),
                message,
            });
        }
        let bytes = response
            .bytes()
            .await
            .map_err(|e| GitHubError::Network(e.to_string()))?;
        if bytes.is_empty() {
            return Ok(None);
        }
        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|e| GitHubError::Api {
                status: status.as_u16(),
                message: format!("failed to parse response: {e}"),
            })
    }

    fn to_value(body: &impl Serialize) -> Result<Value, GitHubError> {
        serde_json::to_value(body).map_err(|e| GitHubError::Api {
            status: 0,
            message: format!("failed to serialize request body: {e}"),
        })
    }

    fn require_body<T: DeserializeOwned>(
        value: Option<Value>,
        path: &str,
    ) -> Result<T, GitHubError> {
        let value = value.ok_or_else(|| GitHubError::Api {
            status: 204,
            message: format!("unexpected empty response from {path}"),
        })?;
        serde_json::from_value(value).map_err(|e| GitHubError::Api {
            status: 200,
            message: format!("failed to parse response from {path}: {e}"),
        })
    }

    /// Map a non-2xx response into the error taxonomy.
    async fn normalize_error(response: Response, status: StatusCode) -> GitHubError {
        let message = Self::error_message(response, status).await;
        match status {
            StatusCode::UNAUTHORIZED => GitHubError::AuthFailed("invalid or expired token".into()),
            StatusCode::FORBIDDEN => GitHubError::AuthFailed(format!("permission denied: {message}")),
            StatusCode::TOO_MANY_REQUESTS => GitHubError::RateLimited,
            _ => GitHubError::Api {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// Best-effort extraction of the server's `message` field.
    async fn error_message(response: Response, status: StatusCode) -> String {
        match response.json::<ErrorBody>().await {
            Ok(body) => body.message,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string(),
        }
    }
}

/// GitHub error response format.
#[derive(serde::Deserialize)]
struct ErrorBody {
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_empty_token() {
        let err = Gateway::new("").unwrap_err();
        assert!(matches!(err, GitHubError::InvalidInput(_)));
    }

    #[test]
    fn with_api_base_keeps_base() {
        let gateway = Gateway::with_api_base("token", "http://localhost:9999").unwrap();
        assert_eq!(gateway.api_base(), "http://localhost:9999");
    }

    #[test]
    fn debug_redacts_token() {
        let gateway = Gateway::new("secret_token_abc123").unwrap();
        let debug_output = format!("{:?}", gateway);
        assert!(!debug_output.contains("secret_token_abc123"));
        assert!(debug_output.contains("api_base"));
    }

    #[test]
    fn headers_include_api_version() {
        let gateway = Gateway::new("token").unwrap();
        let headers = gateway.headers().unwrap();
        assert_eq!(headers.get("X-GitHub-Api-Version").unwrap(), "2022-11-28");
        assert_eq!(headers.get(ACCEPT).unwrap(), "application/vnd.github+json");
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer token");
    }
}
