//! The session context: one object owning the API client, the stores, the
//! alert hub and the UI preferences.
//!
//! Every workflow an application triggers goes through a method here. The
//! pattern is uniform: preconditions first (active workspace, no folder
//! cycle), then the network call, then a domain event so the stores patch
//! themselves and the tree rebuilds. Local state never changes before the
//! server has accepted the operation, except where noted (logout).

use crate::alerts::AlertHub;
use crate::error::{CoreError, Result};
use crate::events::DomainEvent;
use crate::model::{flatten_tree, Folder, Member, Post, User, Workspace, WorkspaceLimit};
use crate::nav::Route;
use crate::store::{Preferences, Stores};
use bytes::Bytes;
use notespace_http::wire::{
    CreateFolderRequest, CreatePostRequest, CreateWorkspaceRequest, FolderId, InviteMemberRequest,
    LoginRequest, MemberId, MoveFolderRequest, MovePostRequest, PostId, PublicPostWire,
    PublicWorkspaceWire, PublishSettingsWire, RenameFolderRequest, SignupRequest,
    UpdateMemberRoleRequest, UpdatePostRequest,
    UpdatePublishRequest, UpdateUserRequest, UpdateWorkspaceRequest, WorkspaceId,
};
use notespace_http::{ApiClient, ClientConfig, Transport};
use std::sync::Arc;
use tracing::{info, warn};

/// Name given to the workspace created for an account that has none.
pub const DEFAULT_WORKSPACE_NAME: &str = "My Notes";
pub const DEFAULT_WORKSPACE_DESCRIPTION: &str = "Personal workspace";

/// Outcome of a post edit. A stale version token never clobbers the
/// server's copy: the submitted edits are dropped and the latest revision
/// comes back for the caller to re-apply.
#[derive(Debug, Clone)]
pub enum PostUpdate {
    Updated(Post),
    Conflict(Post),
}

pub struct Session {
    api: ApiClient,
    hub: Arc<AlertHub>,
    pub stores: Stores,
    pub prefs: Preferences,
}

impl Session {
    /// Session over the production HTTP transport, preferences loaded from
    /// the platform config directory.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let hub = Arc::new(AlertHub::new());
        let api = ApiClient::new(config)?.with_observer(hub.clone());
        Ok(Session {
            api,
            hub,
            stores: Stores::default(),
            prefs: Preferences::load(),
        })
    }

    /// Session over an arbitrary transport. Test code scripts responses
    /// through this seam; preferences start from defaults.
    pub fn with_transport(transport: Arc<dyn Transport>, config: ClientConfig) -> Self {
        let hub = Arc::new(AlertHub::new());
        let api = ApiClient::with_transport(transport, config).with_observer(hub.clone());
        Session {
            api,
            hub,
            stores: Stores::default(),
            prefs: Preferences::default(),
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn hub(&self) -> &Arc<AlertHub> {
        &self.hub
    }

    /// Tell the transport layer which route is active, so a 401 on the
    /// login screen reads as bad credentials rather than session expiry.
    pub fn set_route(&self, route: Route) {
        self.hub.set_auth_screen(route != Route::App);
    }

    /// Drain queued transport alerts into app-shell state.
    pub fn absorb_alerts(&mut self) {
        self.stores.app.absorb(&self.hub);
    }

    fn current_workspace_id(&self) -> Result<WorkspaceId> {
        self.stores
            .workspace
            .current
            .ok_or(CoreError::NoWorkspaceSelected)
    }

    // --- auth -----------------------------------------------------------

    /// Probe the session cookie. A live session caches the user and loads
    /// the workspace list, so a restored cookie lands in a usable app.
    pub async fn check_session(&mut self) -> Result<bool> {
        let probe = self.api.session_probe().await?;
        if !probe.authenticated {
            return Ok(false);
        }
        match User::from_probe(probe) {
            Some(user) => {
                self.stores.auth.set_user(user);
                self.load_workspaces().await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub async fn login(&mut self, login_id: &str, password: &str) -> Result<()> {
        let wire = self
            .api
            .login(&LoginRequest {
                login_id: login_id.to_string(),
                password: password.to_string(),
            })
            .await?;
        let user = User::from_login(wire);
        info!(user = user.id, "logged in");
        self.stores.auth.set_user(user);
        self.hub.clear_session_expired();
        self.load_workspaces().await
    }

    pub async fn signup(&mut self, request: &SignupRequest) -> Result<()> {
        let wire = self.api.signup(request).await?;
        self.stores.auth.set_user(User::from_login(wire));
        self.load_workspaces().await
    }

    /// End the session. Local state clears even when the server call
    /// fails: the cookie may already be dead, and the user asked to leave.
    pub async fn logout(&mut self) -> Result<()> {
        if let Err(err) = self.api.logout().await {
            warn!(error = %err, "server logout failed, clearing local session anyway");
        }
        self.stores.apply(DomainEvent::SignedOut);
        self.stores.app.reset();
        self.hub.clear_session_expired();
        Ok(())
    }

    // --- account --------------------------------------------------------

    pub async fn refresh_user(&mut self) -> Result<()> {
        let wire = self.api.get_me().await?;
        match User::from_wire(wire) {
            Some(user) => self.stores.auth.merge_user(user),
            None => warn!("user record without an id, keeping cached user"),
        }
        Ok(())
    }

    pub async fn update_profile(&mut self, request: &UpdateUserRequest) -> Result<()> {
        let wire = self.api.update_me(request).await?;
        if let Some(user) = User::from_wire(wire) {
            self.stores.auth.merge_user(user);
        }
        Ok(())
    }

    /// Delete the account, then clear everything as a sign-out would.
    pub async fn delete_account(&mut self) -> Result<()> {
        self.api.delete_me().await?;
        self.stores.apply(DomainEvent::SignedOut);
        self.stores.app.reset();
        Ok(())
    }

    pub async fn search_users(&self, query: &str) -> Result<Vec<User>> {
        let wires = self.api.search_users(query).await?;
        Ok(wires.into_iter().filter_map(User::from_wire).collect())
    }

    pub async fn check_email(&self, email: &str) -> Result<()> {
        Ok(self.api.check_email(email).await?)
    }

    pub async fn send_email_code(&self, email: &str) -> Result<()> {
        Ok(self.api.send_email_code(email).await?)
    }

    pub async fn verify_email_code(&self, email: &str, code: &str) -> Result<()> {
        Ok(self.api.verify_email_code(email, code).await?)
    }

    // --- workspaces -----------------------------------------------------

    /// Fetch the workspace list. An account with no workspaces gets a
    /// default personal one created before anything else happens, so the
    /// app never renders an empty workspace switcher.
    pub async fn load_workspaces(&mut self) -> Result<()> {
        let mut workspaces: Vec<Workspace> = self
            .api
            .list_workspaces()
            .await?
            .into_iter()
            .map(Workspace::from_wire)
            .collect();

        if workspaces.is_empty() {
            info!("no workspaces, creating the default one");
            let created = self.create_default_workspace().await?;
            workspaces.push(created);
        }

        self.stores.workspace.set_workspaces(workspaces);
        if self.stores.workspace.current.is_none() {
            if let Some(first) = self.stores.workspace.workspaces.first().map(|w| w.id) {
                self.stores.workspace.select(first);
            }
        }
        Ok(())
    }

    async fn create_default_workspace(&self) -> Result<Workspace> {
        let wire = self
            .api
            .create_workspace(&CreateWorkspaceRequest {
                name: DEFAULT_WORKSPACE_NAME.to_string(),
                description: Some(DEFAULT_WORKSPACE_DESCRIPTION.to_string()),
            })
            .await?;
        Ok(Workspace::from_wire(wire))
    }

    pub async fn create_workspace(
        &mut self,
        name: &str,
        description: Option<String>,
    ) -> Result<WorkspaceId> {
        let wire = self
            .api
            .create_workspace(&CreateWorkspaceRequest {
                name: name.to_string(),
                description,
            })
            .await?;
        let workspace = Workspace::from_wire(wire);
        let id = workspace.id;
        self.stores.workspace.push_workspace(workspace);
        Ok(id)
    }

    pub async fn update_workspace(
        &mut self,
        id: WorkspaceId,
        request: &UpdateWorkspaceRequest,
    ) -> Result<()> {
        let wire = self.api.update_workspace(id, request).await?;
        self.stores.workspace.replace_workspace(Workspace::from_wire(wire));
        Ok(())
    }

    /// Delete a workspace. The account always keeps at least one: removing
    /// the last workspace creates the default replacement before the
    /// removal call, and when the active workspace went away the next one
    /// is entered.
    pub async fn delete_workspace(&mut self, id: WorkspaceId) -> Result<()> {
        self.replace_if_last(id).await?;
        self.api.delete_workspace(id).await?;
        self.after_workspace_removed(id).await
    }

    /// Walk away from a shared workspace. Same fallback rules as deletion.
    pub async fn leave_workspace(&mut self, id: WorkspaceId) -> Result<()> {
        self.replace_if_last(id).await?;
        self.api.leave_workspace(id).await?;
        self.after_workspace_removed(id).await
    }

    async fn replace_if_last(&mut self, leaving: WorkspaceId) -> Result<()> {
        let is_last = matches!(
            self.stores.workspace.workspaces.as_slice(),
            [only] if only.id == leaving
        );
        if is_last {
            let created = self.create_default_workspace().await?;
            self.stores.workspace.push_workspace(created);
        }
        Ok(())
    }

    async fn after_workspace_removed(&mut self, id: WorkspaceId) -> Result<()> {
        let was_current = self.stores.workspace.current == Some(id);
        self.stores.workspace.remove_workspace(id);

        if was_current {
            if let Some(next) = self.stores.workspace.current {
                self.switch_workspace(next).await?;
            }
        }
        Ok(())
    }

    /// Enter a workspace: scoped caches drop, then the tree and member
    /// list load fresh.
    pub async fn switch_workspace(&mut self, id: WorkspaceId) -> Result<()> {
        self.stores.apply(DomainEvent::WorkspaceSwitched(id));
        self.load_tree().await?;
        self.load_members().await?;
        Ok(())
    }

    pub async fn refresh_limit(&mut self) -> Result<WorkspaceLimit> {
        let limit = WorkspaceLimit::from_wire(self.api.workspace_limit().await?);
        self.stores.workspace.set_limit(limit);
        Ok(limit)
    }

    // --- members --------------------------------------------------------

    pub async fn load_members(&mut self) -> Result<()> {
        let id = self.current_workspace_id()?;
        let members = self
            .api
            .list_members(id)
            .await?
            .into_iter()
            .map(Member::from_wire)
            .collect();
        self.stores.workspace.set_members(members);
        Ok(())
    }

    pub async fn invite_member(&mut self, request: &InviteMemberRequest) -> Result<()> {
        let id = self.current_workspace_id()?;
        let wire = self.api.invite_member(id, request).await?;
        self.stores.workspace.push_member(Member::from_wire(wire));
        Ok(())
    }

    pub async fn change_member_role(
        &mut self,
        member_id: MemberId,
        request: &UpdateMemberRoleRequest,
    ) -> Result<()> {
        let id = self.current_workspace_id()?;
        let wire = self.api.update_member_role(id, member_id, request).await?;
        self.stores.workspace.replace_member(Member::from_wire(wire));
        Ok(())
    }

    pub async fn remove_member(&mut self, member_id: MemberId) -> Result<()> {
        let id = self.current_workspace_id()?;
        self.api.remove_member(id, member_id).await?;
        self.stores.workspace.remove_member(member_id);
        Ok(())
    }

    // --- folders --------------------------------------------------------

    /// Reload the active workspace's folder/post tree from the canonical
    /// single-call endpoint.
    pub async fn load_tree(&mut self) -> Result<()> {
        let id = self.current_workspace_id()?;
        let wire = self.api.workspace_tree(id).await?;
        let (folders, posts) = flatten_tree(wire);
        self.stores.folders.reset(folders, posts);
        Ok(())
    }

    pub async fn create_folder(
        &mut self,
        name: &str,
        parent_id: Option<FolderId>,
    ) -> Result<FolderId> {
        let workspace = self.current_workspace_id()?;
        let wire = self
            .api
            .create_folder(
                workspace,
                &CreateFolderRequest {
                    name: name.to_string(),
                    parent_id,
                },
            )
            .await?;
        let mut folder = Folder::from_wire(&wire);
        // Some responses omit parentId; the request target is
        // authoritative then.
        if folder.parent_id.is_none() {
            folder.parent_id = parent_id;
        }
        let id = folder.id;
        self.stores.folders.insert_folder(folder);
        self.stores.folders.rebuild();
        Ok(id)
    }

    pub async fn rename_folder(&mut self, id: FolderId, name: &str) -> Result<()> {
        let workspace = self.current_workspace_id()?;
        let wire = self
            .api
            .rename_folder(
                workspace,
                id,
                &RenameFolderRequest {
                    name: name.to_string(),
                },
            )
            .await?;
        let mut folder = Folder::from_wire(&wire);
        if folder.parent_id.is_none() {
            folder.parent_id = self
                .stores
                .folders
                .folder(id)
                .and_then(|existing| existing.parent_id);
        }
        self.stores.folders.replace_folder(folder);
        self.stores.folders.rebuild();
        Ok(())
    }

    /// Move a folder (and its whole subtree) under a new parent. A move
    /// into the folder's own subtree is rejected before any network call.
    pub async fn move_folder(
        &mut self,
        id: FolderId,
        new_parent: Option<FolderId>,
    ) -> Result<()> {
        if self.stores.folders.would_create_cycle(id, new_parent) {
            return Err(CoreError::FolderCycle { folder: id });
        }
        let workspace = self.current_workspace_id()?;
        self.api
            .move_folder(
                workspace,
                id,
                &MoveFolderRequest {
                    parent_id: new_parent,
                },
            )
            .await?;
        self.stores.folders.move_folder(id, new_parent);
        self.stores.folders.rebuild();
        Ok(())
    }

    pub async fn delete_folder(&mut self, id: FolderId) -> Result<()> {
        let workspace = self.current_workspace_id()?;
        self.api.delete_folder(workspace, id).await?;
        self.stores.apply(DomainEvent::FolderRemoved(id));
        Ok(())
    }

    // --- posts ----------------------------------------------------------

    /// Fetch the full post record into the editor slot.
    pub async fn open_post(&mut self, id: PostId) -> Result<()> {
        let workspace = self.current_workspace_id()?;
        let wire = self.api.get_post(workspace, id).await?;
        self.stores.posts.set_current(Post::from_wire(wire));
        Ok(())
    }

    pub async fn create_post(&mut self, request: &CreatePostRequest) -> Result<PostId> {
        let workspace = self.current_workspace_id()?;
        let wire = self.api.create_post(workspace, request).await?;
        let post = Post::from_wire(wire);
        let id = post.id;
        self.stores.apply(DomainEvent::PostCreated(post.to_summary()));
        self.stores.posts.set_current(post);
        Ok(id)
    }

    /// Submit an edit. On a version conflict the submitted edits are NOT
    /// applied; the server's latest revision is fetched and returned so
    /// the caller can merge and retry.
    pub async fn update_post(
        &mut self,
        id: PostId,
        request: &UpdatePostRequest,
    ) -> Result<PostUpdate> {
        let workspace = self.current_workspace_id()?;
        match self.api.update_post(workspace, id, request).await {
            Ok(wire) => {
                let post = Post::from_wire(wire);
                if request.title.is_some() {
                    self.stores.apply(DomainEvent::PostRetitled {
                        id,
                        title: post.title.clone(),
                        updated_at: post.updated_at,
                    });
                }
                self.stores.posts.set_current(post.clone());
                Ok(PostUpdate::Updated(post))
            }
            Err(err) if err.is_conflict() => {
                warn!(post = id, "edit conflict, fetching latest revision");
                let latest = Post::from_wire(self.api.get_post(workspace, id).await?);
                self.stores.posts.set_current(latest.clone());
                Ok(PostUpdate::Conflict(latest))
            }
            Err(err) => Err(err.into()),
        }
    }

    pub async fn delete_post(&mut self, id: PostId) -> Result<()> {
        let workspace = self.current_workspace_id()?;
        self.api.delete_post(workspace, id).await?;
        self.stores.apply(DomainEvent::PostDeleted(id));
        Ok(())
    }

    pub async fn move_post(&mut self, id: PostId, folder_id: Option<FolderId>) -> Result<()> {
        let workspace = self.current_workspace_id()?;
        let wire = self
            .api
            .move_post(workspace, id, &MovePostRequest { folder_id })
            .await?;
        let moved = Post::from_wire(wire);
        self.stores.apply(DomainEvent::PostMoved {
            id,
            folder_id,
            updated_at: moved.updated_at,
        });
        Ok(())
    }

    // --- images ---------------------------------------------------------

    /// Upload an image referenced from post content; returns its URL.
    pub async fn upload_post_image(
        &self,
        file_name: &str,
        bytes: Bytes,
        content_type: &str,
    ) -> Result<String> {
        let wire = self
            .api
            .upload_post_image(file_name, bytes, content_type)
            .await?;
        Ok(wire.url)
    }

    /// Upload a new avatar and record it on the cached user.
    pub async fn upload_profile_image(
        &mut self,
        file_name: &str,
        bytes: Bytes,
        content_type: &str,
    ) -> Result<String> {
        let wire = self
            .api
            .upload_profile_image(file_name, bytes, content_type)
            .await?;
        if let Some(user) = &mut self.stores.auth.current_user {
            user.profile_image = Some(wire.url.clone());
        }
        Ok(wire.url)
    }

    // --- publication ----------------------------------------------------

    pub async fn publish_settings(&self) -> Result<PublishSettingsWire> {
        let id = self.current_workspace_id()?;
        Ok(self.api.publish_settings(id).await?)
    }

    pub async fn update_publish_settings(
        &self,
        request: &UpdatePublishRequest,
    ) -> Result<PublishSettingsWire> {
        let id = self.current_workspace_id()?;
        Ok(self.api.update_publish_settings(id, request).await?)
    }

    /// Read a published workspace; no session required.
    pub async fn public_workspace(&self, slug: &str) -> Result<PublicWorkspaceWire> {
        Ok(self.api.public_workspace(slug).await?)
    }

    pub async fn public_post(&self, slug: &str, post_id: PostId) -> Result<PublicPostWire> {
        Ok(self.api.public_post(slug, post_id).await?)
    }
}
