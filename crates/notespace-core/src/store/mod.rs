//! Per-resource caches. Plain structs owned by the session context; no
//! global registries, no locking — mutation happens from one operation's
//! continuation at a time.

mod app;
mod auth;
mod folder;
mod post;
mod prefs;
mod workspace;

pub use app::{AppStore, GlobalError};
pub use auth::AuthStore;
pub use folder::FolderStore;
pub use post::PostStore;
pub use prefs::{Preferences, SIDEBAR_DEFAULT_WIDTH, SIDEBAR_MAX_WIDTH, SIDEBAR_MIN_WIDTH};
pub use workspace::WorkspaceStore;

use crate::events::DomainEvent;

/// All stores, bundled so the event coordinator can patch across them
/// without the stores referencing each other.
#[derive(Default)]
pub struct Stores {
    pub workspace: WorkspaceStore,
    pub folders: FolderStore,
    pub posts: PostStore,
    pub auth: AuthStore,
    pub app: AppStore,
}

impl Stores {
    /// Apply one domain event to every store it concerns, then rebuild the
    /// derived tree when it was affected.
    pub fn apply(&mut self, event: DomainEvent) {
        crate::events::apply(self, event);
    }
}
