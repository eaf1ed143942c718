use super::{FolderId, PostSummaryWire};
use serde::{Deserialize, Serialize};

/// Folder as the tree endpoint returns it: the full descendant subtree and
/// the folder's post summaries are embedded, in server order.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderWire {
    pub folder_id: FolderId,
    pub name: String,
    #[serde(default)]
    pub parent_id: Option<FolderId>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub children: Vec<FolderWire>,
    #[serde(default)]
    pub posts: Vec<PostSummaryWire>,
}

/// `GET /workspaces/{id}/folders` payload: the workspace's folder forest
/// plus the posts assigned to no folder.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceTreeWire {
    #[serde(default)]
    pub folders: Vec<FolderWire>,
    #[serde(default)]
    pub root_posts: Vec<PostSummaryWire>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFolderRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<FolderId>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameFolderRequest {
    pub name: String,
}

/// Move target; `parent_id: None` moves the folder to the root.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveFolderRequest {
    pub parent_id: Option<FolderId>,
}
