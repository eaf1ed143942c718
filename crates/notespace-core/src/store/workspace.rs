//! Workspace and member cache.

use crate::model::{Member, MemberRole, Workspace, WorkspaceLimit};
use notespace_http::wire::{MemberId, WorkspaceId};

#[derive(Default)]
pub struct WorkspaceStore {
    pub workspaces: Vec<Workspace>,
    pub current: Option<WorkspaceId>,
    pub members: Vec<Member>,
    pub limit: Option<WorkspaceLimit>,
    pub loading: bool,
}

impl WorkspaceStore {
    pub fn current_workspace(&self) -> Option<&Workspace> {
        self.current
            .and_then(|id| self.workspaces.iter().find(|w| w.id == id))
    }

    pub fn my_role(&self) -> Option<MemberRole> {
        self.current_workspace().map(|w| w.my_role)
    }

    pub fn is_owner(&self) -> bool {
        matches!(self.my_role(), Some(MemberRole::Owner))
    }

    pub fn is_admin(&self) -> bool {
        self.my_role().is_some_and(|role| role.is_admin())
    }

    pub fn can_edit(&self) -> bool {
        self.my_role().is_some_and(|role| role.can_edit())
    }

    /// Advisory creation gate from the server's count/limit pair. Unknown
    /// until the limit has been fetched; never used to hide the action.
    pub fn can_create_workspace(&self) -> Option<bool> {
        self.limit.map(|limit| limit.can_create())
    }

    pub fn set_workspaces(&mut self, workspaces: Vec<Workspace>) {
        self.workspaces = workspaces;
        if let Some(current) = self.current {
            if !self.workspaces.iter().any(|w| w.id == current) {
                self.current = None;
            }
        }
    }

    pub fn push_workspace(&mut self, workspace: Workspace) {
        self.workspaces.push(workspace);
    }

    pub fn replace_workspace(&mut self, workspace: Workspace) {
        if let Some(slot) = self.workspaces.iter_mut().find(|w| w.id == workspace.id) {
            *slot = workspace;
        }
    }

    /// Drop a workspace; when it was current, fall back to the first
    /// remaining one.
    pub fn remove_workspace(&mut self, id: WorkspaceId) {
        self.workspaces.retain(|w| w.id != id);
        if self.current == Some(id) {
            self.current = self.workspaces.first().map(|w| w.id);
        }
    }

    pub fn select(&mut self, id: WorkspaceId) {
        self.current = Some(id);
    }

    /// Bump the current workspace's post count; deletes pass a negative
    /// delta.
    pub fn adjust_post_count(&mut self, delta: i64) {
        let Some(current) = self.current else { return };
        if let Some(workspace) = self.workspaces.iter_mut().find(|w| w.id == current) {
            workspace.post_count = workspace.post_count.saturating_add_signed(delta as i32);
        }
    }

    pub fn set_members(&mut self, members: Vec<Member>) {
        self.members = members;
    }

    pub fn push_member(&mut self, member: Member) {
        self.members.push(member);
    }

    pub fn replace_member(&mut self, member: Member) {
        if let Some(slot) = self.members.iter_mut().find(|m| m.id == member.id) {
            *slot = member;
        }
    }

    pub fn remove_member(&mut self, id: MemberId) {
        self.members.retain(|m| m.id != id);
    }

    pub fn set_limit(&mut self, limit: WorkspaceLimit) {
        self.limit = Some(limit);
    }

    pub fn clear(&mut self) {
        self.workspaces.clear();
        self.current = None;
        self.members.clear();
        self.limit = None;
        self.loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WorkspaceKind;

    fn workspace(id: WorkspaceId, role: MemberRole) -> Workspace {
        Workspace {
            id,
            name: format!("ws {id}"),
            description: None,
            kind: WorkspaceKind::Personal,
            my_role: role,
            post_count: 5,
            folder_count: 0,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn removing_current_workspace_reselects_first() {
        let mut store = WorkspaceStore::default();
        store.set_workspaces(vec![
            workspace(1, MemberRole::Owner),
            workspace(2, MemberRole::Member),
        ]);
        store.select(2);
        store.remove_workspace(2);
        assert_eq!(store.current, Some(1));
    }

    #[test]
    fn role_projections_follow_current_workspace() {
        let mut store = WorkspaceStore::default();
        store.set_workspaces(vec![
            workspace(1, MemberRole::Owner),
            workspace(2, MemberRole::Viewer),
        ]);
        store.select(1);
        assert!(store.is_owner());
        assert!(store.can_edit());
        store.select(2);
        assert!(!store.is_admin());
        assert!(!store.can_edit());
    }

    #[test]
    fn post_count_adjusts_with_floor_at_zero() {
        let mut store = WorkspaceStore::default();
        store.set_workspaces(vec![workspace(1, MemberRole::Owner)]);
        store.select(1);
        store.adjust_post_count(1);
        assert_eq!(store.current_workspace().unwrap().post_count, 6);
        store.adjust_post_count(-10);
        assert_eq!(store.current_workspace().unwrap().post_count, 0);
    }

    #[test]
    fn stale_selection_drops_on_reload() {
        let mut store = WorkspaceStore::default();
        store.set_workspaces(vec![workspace(1, MemberRole::Owner)]);
        store.select(1);
        store.set_workspaces(vec![workspace(2, MemberRole::Member)]);
        assert_eq!(store.current, None);
    }
}
