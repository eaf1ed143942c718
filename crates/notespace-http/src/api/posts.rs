//! Post endpoints.

use crate::client::ApiClient;
use crate::error::Result;
use crate::transport::ApiRequest;
use crate::wire::{
    CreatePostRequest, MovePostRequest, PostId, PostWire, UpdatePostRequest, WorkspaceId,
};

impl ApiClient {
    /// `GET /workspaces/{id}/posts`.
    pub async fn list_posts(&self, workspace_id: WorkspaceId) -> Result<Vec<PostWire>> {
        self.request(ApiRequest::get(format!("/workspaces/{workspace_id}/posts")))
            .await
    }

    /// `GET /workspaces/{id}/posts/{postId}`.
    pub async fn get_post(&self, workspace_id: WorkspaceId, post_id: PostId) -> Result<PostWire> {
        self.request(ApiRequest::get(format!(
            "/workspaces/{workspace_id}/posts/{post_id}"
        )))
        .await
    }

    /// `POST /workspaces/{id}/posts`.
    pub async fn create_post(
        &self,
        workspace_id: WorkspaceId,
        request: &CreatePostRequest,
    ) -> Result<PostWire> {
        self.request(
            ApiRequest::post(format!("/workspaces/{workspace_id}/posts"))
                .json(serde_json::to_value(request)?),
        )
        .await
    }

    /// `PUT /workspaces/{id}/posts/{postId}`. A stale version token comes
    /// back as a 409 rejection; see [`crate::ApiError::is_conflict`].
    pub async fn update_post(
        &self,
        workspace_id: WorkspaceId,
        post_id: PostId,
        request: &UpdatePostRequest,
    ) -> Result<PostWire> {
        self.request(
            ApiRequest::put(format!("/workspaces/{workspace_id}/posts/{post_id}"))
                .json(serde_json::to_value(request)?),
        )
        .await
    }

    /// `DELETE /workspaces/{id}/posts/{postId}`.
    pub async fn delete_post(&self, workspace_id: WorkspaceId, post_id: PostId) -> Result<()> {
        self.request_unit(ApiRequest::delete(format!(
            "/workspaces/{workspace_id}/posts/{post_id}"
        )))
        .await
    }

    /// `PUT /workspaces/{id}/posts/{postId}/move`.
    pub async fn move_post(
        &self,
        workspace_id: WorkspaceId,
        post_id: PostId,
        request: &MovePostRequest,
    ) -> Result<PostWire> {
        self.request(
            ApiRequest::put(format!("/workspaces/{workspace_id}/posts/{post_id}/move"))
                .json(serde_json::to_value(request)?),
        )
        .await
    }
}
