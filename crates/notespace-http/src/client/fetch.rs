//! Core request path: dispatch, envelope unwrapping, status classification.

use crate::client::config::ClientConfig;
use crate::envelope::{parse_error_body, Envelope};
use crate::error::{ApiError, Result};
use crate::observer::{ClientObserver, NullObserver, TransportAlert};
use crate::transport::{ApiRequest, HttpTransport, Transport};
use http::StatusCode;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// The Notespace API client.
///
/// Thin by design: endpoint methods (see [`crate::api`]) build an
/// [`ApiRequest`], and everything funnels through [`ApiClient::request`] /
/// [`ApiClient::request_unit`], which unwrap the response envelope and
/// classify failures.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    config: Arc<ClientConfig>,
    observer: Arc<dyn ClientObserver>,
}

impl ApiClient {
    /// Client over the production `reqwest` transport.
    pub fn new(config: ClientConfig) -> Result<Self> {
        url::Url::parse(&config.base_url)
            .map_err(|e| ApiError::Config(format!("invalid base URL {:?}: {e}", config.base_url)))?;
        let transport = Arc::new(HttpTransport::new(&config)?);
        Ok(Self::with_transport(transport, config))
    }

    /// Client over an arbitrary transport. Test code scripts responses
    /// through this seam.
    pub fn with_transport(transport: Arc<dyn Transport>, config: ClientConfig) -> Self {
        ApiClient {
            transport,
            config: Arc::new(config),
            observer: Arc::new(NullObserver),
        }
    }

    /// Attach the observer that receives global alerts and answers the
    /// auth-screen probe for 401 classification.
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn ClientObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send a request and deserialize the unwrapped `data` payload.
    pub async fn request<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let path = request.path.clone();
        match self.dispatch(request).await? {
            Some(data) => Ok(serde_json::from_value(data)?),
            None => Err(ApiError::Envelope(format!(
                "no data payload in response from {path}"
            ))),
        }
    }

    /// Send a request whose response payload, if any, is discarded
    /// (logout, deletes).
    pub async fn request_unit(&self, request: ApiRequest) -> Result<()> {
        self.dispatch(request).await.map(|_| ())
    }

    async fn dispatch(&self, request: ApiRequest) -> Result<Option<serde_json::Value>> {
        let method = request.method.clone();
        let path = request.path.clone();
        debug!(%method, %path, "dispatching request");

        let response = match self.transport.execute(request).await {
            Ok(response) => response,
            Err(err) => {
                if matches!(err, ApiError::Network(_)) {
                    error!(%method, %path, "no response received");
                    self.observer.alert(TransportAlert::Network);
                }
                return Err(err);
            }
        };

        if response.status.is_success() {
            if response.body.is_empty() {
                return Ok(None);
            }
            return match serde_json::from_slice::<Envelope>(&response.body)? {
                Envelope::Success { data } => Ok(data),
                Envelope::Error { code, message } => {
                    // Should not happen on a 2xx; treat as a rejection anyway.
                    warn!(%path, %code, "error envelope on success status");
                    Err(ApiError::Rejected {
                        status: response.status.as_u16(),
                        code,
                        message,
                    })
                }
            };
        }

        Err(self.classify(&path, response.status, &response.body))
    }

    fn classify(&self, path: &str, status: StatusCode, body: &[u8]) -> ApiError {
        let error_body = parse_error_body(body);
        match status.as_u16() {
            401 => {
                if self.observer.on_auth_screen() {
                    // Bad credentials on a login/register screen; the caller
                    // renders the failure inline.
                    ApiError::Unauthorized(error_body.message_or("invalid credentials"))
                } else {
                    warn!(%path, "session expired");
                    self.observer.alert(TransportAlert::SessionExpired);
                    ApiError::SessionExpired
                }
            }
            403 => {
                error!(%path, "forbidden");
                self.observer.alert(TransportAlert::Forbidden);
                ApiError::Forbidden(error_body.message_or(TransportAlert::Forbidden.message()))
            }
            404 => {
                error!(%path, "not found");
                self.observer.alert(TransportAlert::NotFound);
                ApiError::NotFound(error_body.message_or(TransportAlert::NotFound.message()))
            }
            500..=599 => {
                error!(%path, status = status.as_u16(), "server error");
                self.observer.alert(TransportAlert::ServerFault);
                ApiError::Server(error_body.message_or(TransportAlert::ServerFault.message()))
            }
            // 400/409/422 and anything else: a business rejection the
            // calling component interprets in context.
            other => ApiError::Rejected {
                status: other,
                code: error_body.code_or_unknown(),
                message: error_body.message_or("request rejected"),
            },
        }
    }
}
