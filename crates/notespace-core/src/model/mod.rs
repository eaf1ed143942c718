//! Canonical client-side models and the per-resource transformers that
//! build them from wire records (field reconciliation, default
//! substitution, timestamp parsing).

mod folder;
mod member;
mod post;
mod user;
mod workspace;

pub use folder::{flatten_tree, Folder};
pub use member::{Member, MemberRole};
pub use post::{Post, PostStatus, PostSummary, Visibility};
pub use user::User;
pub use workspace::{Workspace, WorkspaceKind, WorkspaceLimit};

use chrono::{DateTime, NaiveDateTime, Utc};

/// Parse a server timestamp. The API mixes RFC 3339 and bare
/// `LocalDateTime` strings; anything unparseable stays `None` and sorts as
/// earliest in the tree.
pub(crate) fn parse_timestamp(raw: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}
