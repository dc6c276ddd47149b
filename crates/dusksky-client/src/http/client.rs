//! JSON-over-HTTP client for the Dusk Sky microservices.
//!
//! Uses reqwest; the bearer token is read from the shared [`Session`] on
//! every call, never duplicated by callers.

use std::sync::Arc;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::session::{Session, SessionError};

/// Request pipeline errors.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success response. The display form is the extracted server
    /// message alone; the status code stays available on the field.
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("response body is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Session(#[from] SessionError),
}

impl ApiError {
    /// HTTP status of an [`ApiError::Api`] failure, if that is what this is.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// HTTP client carrying the base URL and the session it authorizes with.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<Session>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a new API client against the given gateway base URL.
    pub fn new(base_url: &str, session: Arc<Session>) -> Result<Self, ApiError> {
        if base_url.is_empty() {
            return Err(ApiError::Config("base_url is empty".into()));
        }

        // Ensure a TLS crypto provider is installed (reqwest uses rustls-no-provider).
        // The `Err` case just means it was already installed.
        let _ = rustls::crypto::ring::default_provider().install_default();

        let http = reqwest::Client::builder().build()?;
        let base_url = base_url.trim_end_matches('/').to_string();
        Ok(Self { http, base_url, session })
    }

    /// The session this client authorizes with.
    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    /// Build the absolute URL for a gateway path.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Issue a request and return the parsed JSON body.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<T, ApiError> {
        let resp = self.send(method, path, body).await?;
        Ok(resp.json().await?)
    }

    /// Issue a request whose success response may carry no content.
    ///
    /// A 204 status or an empty body yields `None`; anything else is parsed
    /// as JSON. This is the one sanctioned path for no-content endpoints.
    pub async fn request_maybe<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Option<T>, ApiError> {
        let resp = self.send(method, path, body).await?;
        if resp.status() == StatusCode::NO_CONTENT {
            return Ok(None);
        }
        let bytes = resp.bytes().await?;
        if bytes.is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(Method::GET, path, None).await
    }

    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<&Value>,
    ) -> Result<T, ApiError> {
        self.request(Method::POST, path, body).await
    }

    pub async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<&Value>,
    ) -> Result<T, ApiError> {
        self.request(Method::PUT, path, body).await
    }

    /// PUT against an endpoint that may answer 204.
    pub async fn put_maybe<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Option<T>, ApiError> {
        self.request_maybe(Method::PUT, path, body).await
    }

    pub async fn patch<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<&Value>,
    ) -> Result<T, ApiError> {
        self.request(Method::PATCH, path, body).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(Method::DELETE, path, None).await
    }

    /// DELETE against an endpoint that may answer 204.
    pub async fn delete_maybe<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Option<T>, ApiError> {
        self.request_maybe(Method::DELETE, path, None).await
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<reqwest::Response, ApiError> {
        let url = self.url(path);
        tracing::debug!(%method, %url, "issuing request");

        let mut req = self
            .http
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, "application/json");

        if let Some(token) = self.session.token()? {
            req = req.bearer_auth(token);
        }

        // DELETE never carries a body in this API, even when one is passed.
        if method != Method::DELETE {
            if let Some(body) = body {
                req = req.json(body);
            }
        }

        let resp = req.send().await?;
        let status = resp.status();
        if !status.is_success() {
            let bytes = resp.bytes().await.unwrap_or_default();
            return Err(ApiError::Api {
                status: status.as_u16(),
                message: error_message(status, &bytes),
            });
        }
        Ok(resp)
    }
}

/// Best-effort extraction of a human-readable message from an error body:
/// JSON `detail` field, then raw UTF-8 text, then a generic status message.
pub(crate) fn error_message(status: StatusCode, body: &[u8]) -> String {
    let generic = format!("Error {}", status.as_u16());
    match serde_json::from_slice::<Value>(body) {
        Ok(parsed) => parsed
            .get("detail")
            .and_then(Value::as_str)
            .map_or(generic, ToString::to_string),
        Err(_) => match std::str::from_utf8(body) {
            Ok(text) if !text.is_empty() => text.to_string(),
            _ => generic,
        },
    }
}
