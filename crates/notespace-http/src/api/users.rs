//! Account endpoints: the current user, search, email verification.

use crate::client::ApiClient;
use crate::error::Result;
use crate::transport::ApiRequest;
use crate::wire::{EmailRequest, EmailVerifyRequest, UpdateUserRequest, UserWire};

impl ApiClient {
    /// `GET /users/me`.
    pub async fn get_me(&self) -> Result<UserWire> {
        self.request(ApiRequest::get("/users/me")).await
    }

    /// `PATCH /users/me`.
    pub async fn update_me(&self, request: &UpdateUserRequest) -> Result<UserWire> {
        self.request(ApiRequest::patch("/users/me").json(serde_json::to_value(request)?))
            .await
    }

    /// `DELETE /users/me`. Account deletion.
    pub async fn delete_me(&self) -> Result<()> {
        self.request_unit(ApiRequest::delete("/users/me")).await
    }

    /// `GET /users/search?query=` — by email or nickname.
    pub async fn search_users(&self, query: &str) -> Result<Vec<UserWire>> {
        self.request(ApiRequest::get("/users/search").query("query", query))
            .await
    }

    /// `POST /email/check` — is the address still free?
    pub async fn check_email(&self, email: &str) -> Result<()> {
        let body = EmailRequest {
            email: email.to_string(),
        };
        self.request_unit(ApiRequest::post("/email/check").json(serde_json::to_value(body)?))
            .await
    }

    /// `POST /email/send` — send a verification code.
    pub async fn send_email_code(&self, email: &str) -> Result<()> {
        let body = EmailRequest {
            email: email.to_string(),
        };
        self.request_unit(ApiRequest::post("/email/send").json(serde_json::to_value(body)?))
            .await
    }

    /// `POST /email/verify` — check a verification code.
    pub async fn verify_email_code(&self, email: &str, code: &str) -> Result<()> {
        let body = EmailVerifyRequest {
            email: email.to_string(),
            code: code.to_string(),
        };
        self.request_unit(ApiRequest::post("/email/verify").json(serde_json::to_value(body)?))
            .await
    }
}
