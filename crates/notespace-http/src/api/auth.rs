//! Session endpoints: login, signup, logout, session probe.

use crate::client::ApiClient;
use crate::error::Result;
use crate::transport::ApiRequest;
use crate::wire::{LoginRequest, LoginUserWire, SessionProbeWire, SignupRequest};

impl ApiClient {
    /// `POST /auth/login`. Establishes the session cookie.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginUserWire> {
        self.request(ApiRequest::post("/auth/login").json(serde_json::to_value(request)?))
            .await
    }

    /// `POST /auth/signup`. The server starts a session immediately.
    pub async fn signup(&self, request: &SignupRequest) -> Result<LoginUserWire> {
        self.request(ApiRequest::post("/auth/signup").json(serde_json::to_value(request)?))
            .await
    }

    /// `POST /auth/logout`. Invalidates the server-side session.
    pub async fn logout(&self) -> Result<()> {
        self.request_unit(ApiRequest::post("/auth/logout")).await
    }

    /// `GET /auth/me`. Reports whether the current cookie still maps to a
    /// live session, and for whom.
    pub async fn session_probe(&self) -> Result<SessionProbeWire> {
        self.request(ApiRequest::get("/auth/me")).await
    }
}
