//! Cross-store coordination via domain events.
//!
//! Stores never call into each other. A mutating operation publishes one
//! event and the coordinator applies every cross-cutting consequence —
//! folder-store patches, workspace post-count deltas, cache clears — then
//! rebuilds the derived tree when it was affected.

use crate::model::PostSummary;
use crate::store::Stores;
use chrono::{DateTime, Utc};
use notespace_http::wire::{FolderId, PostId, WorkspaceId};
use tracing::debug;

#[derive(Debug, Clone)]
pub enum DomainEvent {
    /// A post was created; its summary joins the cache at the front.
    PostCreated(PostSummary),
    /// A post's title changed in an edit.
    PostRetitled {
        id: PostId,
        title: Option<String>,
        updated_at: Option<DateTime<Utc>>,
    },
    PostDeleted(PostId),
    PostMoved {
        id: PostId,
        folder_id: Option<FolderId>,
        updated_at: Option<DateTime<Utc>>,
    },
    /// A folder was deleted server-side; the local cascade mirrors it.
    FolderRemoved(FolderId),
    /// The active workspace changed; all workspace-scoped caches drop.
    WorkspaceSwitched(WorkspaceId),
    /// Logout or account deletion; every dependent cache drops so no
    /// cross-account data leaks into the next session.
    SignedOut,
}

pub(crate) fn apply(stores: &mut Stores, event: DomainEvent) {
    debug!(?event, "applying domain event");
    match event {
        DomainEvent::PostCreated(summary) => {
            stores.folders.add_post(summary);
            stores.workspace.adjust_post_count(1);
            stores.folders.rebuild();
        }
        DomainEvent::PostRetitled {
            id,
            title,
            updated_at,
        } => {
            stores.folders.retitle_post(id, title, updated_at);
            stores.folders.rebuild();
        }
        DomainEvent::PostDeleted(id) => {
            stores.folders.remove_post(id);
            stores.posts.clear_if(id);
            stores.workspace.adjust_post_count(-1);
            stores.folders.rebuild();
        }
        DomainEvent::PostMoved {
            id,
            folder_id,
            updated_at,
        } => {
            stores.folders.move_post(id, folder_id, updated_at);
            stores.folders.rebuild();
        }
        DomainEvent::FolderRemoved(id) => {
            let (_, removed_posts) = stores.folders.remove_folder_cascade(id);
            for post_id in removed_posts {
                stores.posts.clear_if(post_id);
            }
            stores.folders.rebuild();
        }
        DomainEvent::WorkspaceSwitched(id) => {
            stores.workspace.select(id);
            stores.workspace.members.clear();
            stores.folders.clear();
            stores.posts.clear();
        }
        DomainEvent::SignedOut => {
            stores.auth.clear();
            stores.workspace.clear();
            stores.folders.clear();
            stores.posts.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        Folder, MemberRole, PostStatus, User, Visibility, Workspace, WorkspaceKind,
    };

    fn stores_with_workspace() -> Stores {
        let mut stores = Stores::default();
        stores.workspace.set_workspaces(vec![Workspace {
            id: 1,
            name: "ws".into(),
            description: None,
            kind: WorkspaceKind::Personal,
            my_role: MemberRole::Owner,
            post_count: 2,
            folder_count: 1,
            created_at: None,
            updated_at: None,
        }]);
        stores.workspace.select(1);
        stores.folders.reset(
            vec![Folder {
                id: 7,
                name: "docs".into(),
                parent_id: None,
                created_at: None,
                updated_at: None,
            }],
            vec![],
        );
        stores
    }

    fn summary(id: PostId, folder_id: Option<FolderId>) -> PostSummary {
        PostSummary {
            id,
            title: Some(format!("p{id}")),
            folder_id,
            status: PostStatus::Draft,
            visibility: Visibility::Private,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn post_lifecycle_adjusts_count_and_tree() {
        let mut stores = stores_with_workspace();
        stores.apply(DomainEvent::PostCreated(summary(10, Some(7))));
        assert_eq!(stores.workspace.current_workspace().unwrap().post_count, 3);
        assert_eq!(stores.folders.tree[0].children.len(), 1);

        stores.apply(DomainEvent::PostDeleted(10));
        assert_eq!(stores.workspace.current_workspace().unwrap().post_count, 2);
        assert!(stores.folders.tree[0].children.is_empty());
    }

    #[test]
    fn folder_removal_clears_open_post_under_it() {
        let mut stores = stores_with_workspace();
        stores.apply(DomainEvent::PostCreated(summary(10, Some(7))));
        stores.posts.set_current(crate::model::Post {
            id: 10,
            title: Some("p10".into()),
            content: None,
            summary: None,
            thumbnail_url: None,
            slug: None,
            status: PostStatus::Draft,
            visibility: Visibility::Private,
            folder_id: Some(7),
            view_count: 0,
            version: None,
            created_at: None,
            updated_at: None,
        });

        stores.apply(DomainEvent::FolderRemoved(7));
        assert!(stores.posts.current.is_none());
        assert!(stores.folders.tree.is_empty());
    }

    #[test]
    fn signout_clears_every_dependent_store() {
        let mut stores = stores_with_workspace();
        stores.auth.set_user(User {
            id: 1,
            email: None,
            login_id: None,
            nickname: None,
            profile_image: None,
            created_at: None,
            updated_at: None,
        });
        stores.apply(DomainEvent::SignedOut);
        assert!(!stores.auth.is_authenticated());
        assert!(stores.workspace.workspaces.is_empty());
        assert_eq!(stores.folders.folder_count(), 0);
    }

    #[test]
    fn workspace_switch_drops_scoped_caches_but_keeps_list() {
        let mut stores = stores_with_workspace();
        stores.apply(DomainEvent::PostCreated(summary(10, Some(7))));
        stores.apply(DomainEvent::WorkspaceSwitched(1));
        assert_eq!(stores.workspace.workspaces.len(), 1);
        assert_eq!(stores.folders.folder_count(), 0);
        assert_eq!(stores.folders.post_count(), 0);
    }
}
