//! Workspace and membership endpoints.

use crate::client::ApiClient;
use crate::error::Result;
use crate::transport::ApiRequest;
use crate::wire::{
    CreateWorkspaceRequest, InviteMemberRequest, MemberId, MemberWire, UpdateMemberRoleRequest,
    UpdateWorkspaceRequest, WorkspaceId, WorkspaceLimitWire, WorkspaceWire,
};

impl ApiClient {
    /// `GET /workspaces` — every workspace the user belongs to.
    pub async fn list_workspaces(&self) -> Result<Vec<WorkspaceWire>> {
        self.request(ApiRequest::get("/workspaces")).await
    }

    /// `POST /workspaces`.
    pub async fn create_workspace(
        &self,
        request: &CreateWorkspaceRequest,
    ) -> Result<WorkspaceWire> {
        self.request(ApiRequest::post("/workspaces").json(serde_json::to_value(request)?))
            .await
    }

    /// `GET /workspaces/{id}`.
    pub async fn get_workspace(&self, workspace_id: WorkspaceId) -> Result<WorkspaceWire> {
        self.request(ApiRequest::get(format!("/workspaces/{workspace_id}")))
            .await
    }

    /// `PUT /workspaces/{id}`.
    pub async fn update_workspace(
        &self,
        workspace_id: WorkspaceId,
        request: &UpdateWorkspaceRequest,
    ) -> Result<WorkspaceWire> {
        self.request(
            ApiRequest::put(format!("/workspaces/{workspace_id}"))
                .json(serde_json::to_value(request)?),
        )
        .await
    }

    /// `DELETE /workspaces/{id}`.
    pub async fn delete_workspace(&self, workspace_id: WorkspaceId) -> Result<()> {
        self.request_unit(ApiRequest::delete(format!("/workspaces/{workspace_id}")))
            .await
    }

    /// `POST /workspaces/{id}/leave`.
    pub async fn leave_workspace(&self, workspace_id: WorkspaceId) -> Result<()> {
        self.request_unit(ApiRequest::post(format!("/workspaces/{workspace_id}/leave")))
            .await
    }

    /// `GET /workspaces/limit` — creation count/limit pair.
    pub async fn workspace_limit(&self) -> Result<WorkspaceLimitWire> {
        self.request(ApiRequest::get("/workspaces/limit")).await
    }

    /// `GET /workspaces/{id}/members`.
    pub async fn list_members(&self, workspace_id: WorkspaceId) -> Result<Vec<MemberWire>> {
        self.request(ApiRequest::get(format!("/workspaces/{workspace_id}/members")))
            .await
    }

    /// `POST /workspaces/{id}/members` — invite by email.
    pub async fn invite_member(
        &self,
        workspace_id: WorkspaceId,
        request: &InviteMemberRequest,
    ) -> Result<MemberWire> {
        self.request(
            ApiRequest::post(format!("/workspaces/{workspace_id}/members"))
                .json(serde_json::to_value(request)?),
        )
        .await
    }

    /// `PUT /workspaces/{id}/members/{memberId}`.
    pub async fn update_member_role(
        &self,
        workspace_id: WorkspaceId,
        member_id: MemberId,
        request: &UpdateMemberRoleRequest,
    ) -> Result<MemberWire> {
        self.request(
            ApiRequest::put(format!("/workspaces/{workspace_id}/members/{member_id}"))
                .json(serde_json::to_value(request)?),
        )
        .await
    }

    /// `DELETE /workspaces/{id}/members/{memberId}`.
    pub async fn remove_member(
        &self,
        workspace_id: WorkspaceId,
        member_id: MemberId,
    ) -> Result<()> {
        self.request_unit(ApiRequest::delete(format!(
            "/workspaces/{workspace_id}/members/{member_id}"
        )))
        .await
    }
}
