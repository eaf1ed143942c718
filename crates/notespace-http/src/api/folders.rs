//! Folder endpoints. The tree endpoint is the canonical read: one call
//! returns the nested folder forest with embedded post summaries.

use crate::client::ApiClient;
use crate::error::Result;
use crate::transport::ApiRequest;
use crate::wire::{
    CreateFolderRequest, FolderId, FolderWire, MoveFolderRequest, RenameFolderRequest,
    WorkspaceId, WorkspaceTreeWire,
};

impl ApiClient {
    /// `GET /workspaces/{id}/folders` — the whole workspace tree.
    pub async fn workspace_tree(&self, workspace_id: WorkspaceId) -> Result<WorkspaceTreeWire> {
        self.request(ApiRequest::get(format!("/workspaces/{workspace_id}/folders")))
            .await
    }

    /// `POST /workspaces/{id}/folders`.
    pub async fn create_folder(
        &self,
        workspace_id: WorkspaceId,
        request: &CreateFolderRequest,
    ) -> Result<FolderWire> {
        self.request(
            ApiRequest::post(format!("/workspaces/{workspace_id}/folders"))
                .json(serde_json::to_value(request)?),
        )
        .await
    }

    /// `PUT /workspaces/{id}/folders/{folderId}` — rename.
    pub async fn rename_folder(
        &self,
        workspace_id: WorkspaceId,
        folder_id: FolderId,
        request: &RenameFolderRequest,
    ) -> Result<FolderWire> {
        self.request(
            ApiRequest::put(format!("/workspaces/{workspace_id}/folders/{folder_id}"))
                .json(serde_json::to_value(request)?),
        )
        .await
    }

    /// `PUT /workspaces/{id}/folders/{folderId}/move`.
    pub async fn move_folder(
        &self,
        workspace_id: WorkspaceId,
        folder_id: FolderId,
        request: &MoveFolderRequest,
    ) -> Result<FolderWire> {
        self.request(
            ApiRequest::put(format!(
                "/workspaces/{workspace_id}/folders/{folder_id}/move"
            ))
            .json(serde_json::to_value(request)?),
        )
        .await
    }

    /// `DELETE /workspaces/{id}/folders/{folderId}`. The server cascades to
    /// descendants; the client mirrors the cascade locally.
    pub async fn delete_folder(
        &self,
        workspace_id: WorkspaceId,
        folder_id: FolderId,
    ) -> Result<()> {
        self.request_unit(ApiRequest::delete(format!(
            "/workspaces/{workspace_id}/folders/{folder_id}"
        )))
        .await
    }
}
