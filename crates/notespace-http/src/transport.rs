//! Transport abstraction.
//!
//! [`Transport`] isolates the wire from the client logic: the production
//! implementation rides on `reqwest` with a cookie store (the API uses
//! session-cookie auth), while tests script an in-memory implementation and
//! exercise the full classification path without a server.

use crate::client::ClientConfig;
use crate::error::{ApiError, Result};
use async_trait::async_trait;
use bytes::Bytes;
use http::{Method, StatusCode};
use std::time::Duration;

/// A request as the client hands it to the transport. `path` is relative to
/// the configured base URL and always starts with `/`.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(&'static str, String)>,
    pub body: RequestBody,
}

/// Outgoing request body.
#[derive(Debug, Clone)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    /// One file in a multipart form, for the image upload endpoints.
    File {
        field: &'static str,
        file_name: String,
        bytes: Bytes,
        content_type: String,
    },
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        ApiRequest {
            method,
            path: path.into(),
            query: Vec::new(),
            body: RequestBody::Empty,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    #[must_use]
    pub fn json(mut self, body: serde_json::Value) -> Self {
        self.body = RequestBody::Json(body);
        self
    }

    #[must_use]
    pub fn query(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.query.push((key, value.into()));
        self
    }

    #[must_use]
    pub fn file(
        mut self,
        field: &'static str,
        file_name: impl Into<String>,
        bytes: Bytes,
        content_type: impl Into<String>,
    ) -> Self {
        self.body = RequestBody::File {
            field,
            file_name: file_name.into(),
            bytes,
            content_type: content_type.into(),
        };
        self
    }
}

/// Raw response before envelope handling and status classification.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

/// Abstraction over the wire. Implementations return `Err(Network)` only
/// when no HTTP response was received; error statuses come back as a
/// [`RawResponse`] for the client to classify.
#[async_trait]
pub trait Transport: Send + Sync + 'static {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse>;
}

/// Production transport over `reqwest`, with the cookie store the session
/// auth depends on.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| ApiError::Config(e.to_string()))?;

        Ok(HttpTransport {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse> {
        let url = self.url_for(&request.path);
        let mut builder = self.client.request(request.method.clone(), &url);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::File {
                field,
                file_name,
                bytes,
                content_type,
            } => {
                let part = reqwest::multipart::Part::bytes(bytes.to_vec())
                    .file_name(file_name)
                    .mime_str(&content_type)
                    .map_err(|e| ApiError::Config(e.to_string()))?;
                builder.multipart(reqwest::multipart::Form::new().part(field, part))
            }
        };

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = StatusCode::from_u16(response.status().as_u16())
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(RawResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_builder_composes() {
        let req = ApiRequest::post("/auth/login")
            .json(serde_json::json!({"loginId": "demo"}))
            .query("verbose", "1");
        assert_eq!(req.method, Method::POST);
        assert_eq!(req.path, "/auth/login");
        assert_eq!(req.query, vec![("verbose", "1".to_string())]);
        assert!(matches!(req.body, RequestBody::Json(_)));
    }

    #[test]
    fn base_url_joins_without_double_slash() {
        let config = ClientConfig {
            base_url: "http://localhost:8070/api/v1/".into(),
            ..ClientConfig::default()
        };
        let transport = HttpTransport::new(&config).unwrap();
        assert_eq!(
            transport.url_for("/workspaces/3/folders"),
            "http://localhost:8070/api/v1/workspaces/3/folders"
        );
    }
}
