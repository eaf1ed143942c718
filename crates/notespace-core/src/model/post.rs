use super::parse_timestamp;
use chrono::{DateTime, Utc};
use notespace_http::wire::{FolderId, PostId, PostSummaryWire, PostWire};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PostStatus {
    Draft,
    Published,
}

impl PostStatus {
    /// Absent or unknown statuses default to draft.
    pub(crate) fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("PUBLISHED") => PostStatus::Published,
            _ => PostStatus::Draft,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Visibility {
    Private,
    Public,
}

impl Visibility {
    /// Absent or unknown visibilities default to private.
    pub(crate) fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("PUBLIC") => Visibility::Public,
            _ => Visibility::Private,
        }
    }
}

/// Lightweight post record, the shape the folder store caches and the tree
/// renders from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostSummary {
    pub id: PostId,
    pub title: Option<String>,
    pub folder_id: Option<FolderId>,
    pub status: PostStatus,
    pub visibility: Visibility,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl PostSummary {
    pub fn from_wire(wire: PostSummaryWire) -> Self {
        PostSummary {
            id: wire.post_id,
            title: wire.title,
            folder_id: wire.folder_id,
            status: PostStatus::parse(wire.status.as_deref()),
            visibility: Visibility::parse(wire.visibility.as_deref()),
            created_at: parse_timestamp(wire.created_at.as_deref()),
            updated_at: parse_timestamp(wire.updated_at.as_deref()),
        }
    }
}

/// Full post record as the post endpoints return it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Post {
    pub id: PostId,
    pub title: Option<String>,
    pub content: Option<String>,
    pub summary: Option<String>,
    pub thumbnail_url: Option<String>,
    pub slug: Option<String>,
    pub status: PostStatus,
    pub visibility: Visibility,
    pub folder_id: Option<FolderId>,
    pub view_count: u64,
    pub version: Option<i64>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Post {
    pub fn from_wire(wire: PostWire) -> Self {
        Post {
            id: wire.post_id,
            title: wire.title,
            content: wire.content,
            summary: wire.summary,
            thumbnail_url: wire.thumbnail_url,
            slug: wire.slug,
            status: PostStatus::parse(wire.status.as_deref()),
            visibility: Visibility::parse(wire.visibility.as_deref()),
            folder_id: wire.folder_id,
            view_count: wire.view_count.unwrap_or(0),
            version: wire.version,
            created_at: parse_timestamp(wire.created_at.as_deref()),
            updated_at: parse_timestamp(wire.updated_at.as_deref()),
        }
    }

    /// The cache-shaped view of this post, for the folder store's summary
    /// collection.
    #[must_use]
    pub fn to_summary(&self) -> PostSummary {
        PostSummary {
            id: self.id,
            title: self.title.clone(),
            folder_id: self.folder_id,
            status: self.status,
            visibility: self.visibility,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enums_default_conservatively() {
        assert_eq!(PostStatus::parse(None), PostStatus::Draft);
        assert_eq!(PostStatus::parse(Some("ARCHIVED")), PostStatus::Draft);
        assert_eq!(Visibility::parse(None), Visibility::Private);
        assert_eq!(Visibility::parse(Some("FRIENDS")), Visibility::Private);
    }

    #[test]
    fn full_post_transform_fills_defaults() {
        let wire = PostWire {
            post_id: 10,
            title: Some("Notes".into()),
            content: None,
            summary: None,
            thumbnail_url: None,
            slug: None,
            status: Some("PUBLISHED".into()),
            visibility: None,
            folder_id: Some(4),
            view_count: None,
            version: Some(2),
            created_at: Some("2024-03-02T08:00:00".into()),
            updated_at: None,
        };
        let post = Post::from_wire(wire);
        assert_eq!(post.status, PostStatus::Published);
        assert_eq!(post.visibility, Visibility::Private);
        assert_eq!(post.view_count, 0);
        assert!(post.created_at.is_some());

        let summary = post.to_summary();
        assert_eq!(summary.id, 10);
        assert_eq!(summary.folder_id, Some(4));
    }
}
