//! Publication endpoints: per-workspace publish settings and the
//! unauthenticated public views.

use crate::client::ApiClient;
use crate::error::Result;
use crate::transport::ApiRequest;
use crate::wire::{
    PostId, PublicPostWire, PublicWorkspaceWire, PublishSettingsWire, UpdatePublishRequest,
    WorkspaceId,
};

impl ApiClient {
    /// `GET /workspaces/{id}/publish`.
    pub async fn publish_settings(&self, workspace_id: WorkspaceId) -> Result<PublishSettingsWire> {
        self.request(ApiRequest::get(format!("/workspaces/{workspace_id}/publish")))
            .await
    }

    /// `PUT /workspaces/{id}/publish`.
    pub async fn update_publish_settings(
        &self,
        workspace_id: WorkspaceId,
        request: &UpdatePublishRequest,
    ) -> Result<PublishSettingsWire> {
        self.request(
            ApiRequest::put(format!("/workspaces/{workspace_id}/publish"))
                .json(serde_json::to_value(request)?),
        )
        .await
    }

    /// `GET /public/{slug}` — no session required.
    pub async fn public_workspace(&self, slug: &str) -> Result<PublicWorkspaceWire> {
        self.request(ApiRequest::get(format!("/public/{slug}"))).await
    }

    /// `GET /public/{slug}/posts/{postId}` — no session required.
    pub async fn public_post(&self, slug: &str, post_id: PostId) -> Result<PublicPostWire> {
        self.request(ApiRequest::get(format!("/public/{slug}/posts/{post_id}")))
            .await
    }
}
