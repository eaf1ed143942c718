use super::{parse_timestamp, MemberRole};
use chrono::{DateTime, Utc};
use notespace_http::wire::{WorkspaceId, WorkspaceLimitWire, WorkspaceWire};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkspaceKind {
    Personal,
    Shared,
}

impl WorkspaceKind {
    fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("SHARED") => WorkspaceKind::Shared,
            _ => WorkspaceKind::Personal,
        }
    }
}

/// Top-level container scoping folders, posts and members.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Workspace {
    pub id: WorkspaceId,
    pub name: String,
    pub description: Option<String>,
    pub kind: WorkspaceKind,
    pub my_role: MemberRole,
    pub post_count: u32,
    pub folder_count: u32,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Workspace {
    pub fn from_wire(wire: WorkspaceWire) -> Self {
        Workspace {
            id: wire.workspace_id,
            name: wire.name,
            description: wire.description,
            kind: WorkspaceKind::parse(wire.workspace_type.as_deref()),
            my_role: MemberRole::parse(wire.my_role.as_deref()),
            post_count: wire.post_count.unwrap_or(0),
            folder_count: wire.folder_count.unwrap_or(0),
            created_at: parse_timestamp(wire.created_at.as_deref()),
            updated_at: parse_timestamp(wire.updated_at.as_deref()),
        }
    }
}

/// Count/limit pair behind workspace creation. Advisory only: the client
/// never hides the create action, the server rejection is authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WorkspaceLimit {
    pub count: u32,
    pub limit: u32,
}

impl WorkspaceLimit {
    pub fn from_wire(wire: WorkspaceLimitWire) -> Self {
        WorkspaceLimit {
            count: wire.count,
            limit: wire.limit,
        }
    }

    #[must_use]
    pub fn can_create(&self) -> bool {
        self.count < self.limit
    }
}
