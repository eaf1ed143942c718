use super::{PostSummaryWire, PostWire};
use serde::{Deserialize, Serialize};

/// Per-workspace publication settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishSettingsWire {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub slug: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePublishRequest {
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

/// Publicly readable view of a published workspace.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicWorkspaceWire {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub folders: Vec<super::FolderWire>,
    #[serde(default)]
    pub root_posts: Vec<PostSummaryWire>,
}

pub type PublicPostWire = PostWire;
