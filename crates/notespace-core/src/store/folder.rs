//! Folder/post-summary cache and the derived sidebar tree.
//!
//! Hierarchy is held flat: an id-keyed folder map plus an ordered children
//! index (`None` key = roots). The nested tree view is a read-only
//! projection rebuilt by [`crate::tree::build_tree`]; it is never the
//! mutation target.

use crate::model::{Folder, PostSummary};
use crate::tree::{build_tree, SortOption, TreeNode};
use notespace_http::wire::{FolderId, PostId};
use std::collections::HashMap;
use tracing::debug;

#[derive(Default)]
pub struct FolderStore {
    folders: HashMap<FolderId, Folder>,
    /// Ordered child ids per parent; insertion order is server order, new
    /// roots and children append.
    children: HashMap<Option<FolderId>, Vec<FolderId>>,
    posts: HashMap<PostId, PostSummary>,
    /// Cache order for post summaries; newly created posts prepend.
    post_order: Vec<PostId>,
    pub selected: Option<FolderId>,
    sort: SortOption,
    /// Derived projection; rebuilt after every mutation.
    pub tree: Vec<TreeNode>,
}

impl FolderStore {
    pub fn folder(&self, id: FolderId) -> Option<&Folder> {
        self.folders.get(&id)
    }

    pub fn post(&self, id: PostId) -> Option<&PostSummary> {
        self.posts.get(&id)
    }

    pub fn folder_count(&self) -> usize {
        self.folders.len()
    }

    pub fn post_count(&self) -> usize {
        self.post_order.len()
    }

    pub fn root_ids(&self) -> &[FolderId] {
        self.children.get(&None).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn child_ids(&self, parent: FolderId) -> &[FolderId] {
        self.children
            .get(&Some(parent))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn selected_folder(&self) -> Option<&Folder> {
        self.selected.and_then(|id| self.folders.get(&id))
    }

    pub fn sort(&self) -> SortOption {
        self.sort
    }

    pub fn set_sort(&mut self, sort: SortOption) {
        self.sort = sort;
        self.rebuild();
    }

    pub fn select(&mut self, id: FolderId) {
        self.selected = Some(id);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Replace the whole cache from a freshly fetched workspace tree.
    /// `folders` must arrive parents-before-children (the flattener
    /// guarantees this).
    pub fn reset(&mut self, folders: Vec<Folder>, posts: Vec<PostSummary>) {
        self.folders.clear();
        self.children.clear();
        self.posts.clear();
        self.post_order.clear();
        self.selected = None;
        for folder in folders {
            self.insert_folder(folder);
        }
        for post in posts {
            self.post_order.push(post.id);
            self.posts.insert(post.id, post);
        }
        self.rebuild();
    }

    /// Insert a folder, appending to its parent's child list. Replaces an
    /// existing record with the same id in place.
    pub fn insert_folder(&mut self, folder: Folder) {
        if self.folders.contains_key(&folder.id) {
            self.replace_folder(folder);
            return;
        }
        self.children
            .entry(folder.parent_id)
            .or_default()
            .push(folder.id);
        self.folders.insert(folder.id, folder);
    }

    /// Replace a folder record by id, reindexing when the parent changed.
    pub fn replace_folder(&mut self, folder: Folder) {
        let old_parent = self.folders.get(&folder.id).map(|f| f.parent_id);
        match old_parent {
            Some(parent) if parent != folder.parent_id => {
                self.detach(folder.id, parent);
                self.children
                    .entry(folder.parent_id)
                    .or_default()
                    .push(folder.id);
            }
            Some(_) => {}
            None => {
                self.children
                    .entry(folder.parent_id)
                    .or_default()
                    .push(folder.id);
            }
        }
        self.folders.insert(folder.id, folder);
    }

    /// True when `candidate_parent` is `folder` itself or sits anywhere in
    /// `folder`'s subtree — the move that must never happen.
    #[must_use]
    pub fn would_create_cycle(
        &self,
        folder: FolderId,
        candidate_parent: Option<FolderId>,
    ) -> bool {
        let mut cursor = candidate_parent;
        while let Some(id) = cursor {
            if id == folder {
                return true;
            }
            cursor = self.folders.get(&id).and_then(|f| f.parent_id);
        }
        false
    }

    /// Relocate `folder` (with its whole subtree, which follows the parent
    /// pointer implicitly) under `new_parent` in one operation.
    pub fn move_folder(&mut self, id: FolderId, new_parent: Option<FolderId>) {
        let Some(old_parent) = self.folders.get(&id).map(|f| f.parent_id) else {
            return;
        };
        if old_parent == new_parent {
            return;
        }
        self.detach(id, old_parent);
        self.children.entry(new_parent).or_default().push(id);
        if let Some(folder) = self.folders.get_mut(&id) {
            folder.parent_id = new_parent;
        }
    }

    /// Remove a folder and every descendant, plus all posts under the
    /// removed set. Returns the removed folder and post ids.
    pub fn remove_folder_cascade(&mut self, id: FolderId) -> (Vec<FolderId>, Vec<PostId>) {
        if !self.folders.contains_key(&id) {
            return (Vec::new(), Vec::new());
        }

        let mut removed = Vec::new();
        let mut pending = vec![id];
        while let Some(current) = pending.pop() {
            removed.push(current);
            if let Some(child_ids) = self.children.remove(&Some(current)) {
                pending.extend(child_ids);
            }
        }

        let parent = self.folders.get(&id).and_then(|f| f.parent_id);
        self.detach(id, parent);
        for folder_id in &removed {
            self.folders.remove(folder_id);
        }

        let removed_posts: Vec<PostId> = self
            .posts
            .values()
            .filter(|post| matches!(post.folder_id, Some(f) if removed.contains(&f)))
            .map(|post| post.id)
            .collect();
        for post_id in &removed_posts {
            self.remove_post(*post_id);
        }

        if matches!(self.selected, Some(selected) if removed.contains(&selected)) {
            self.selected = None;
        }

        debug!(
            folder = id,
            folders = removed.len(),
            posts = removed_posts.len(),
            "cascade removed folder subtree"
        );
        (removed, removed_posts)
    }

    /// Prepend a freshly created post summary.
    pub fn add_post(&mut self, post: PostSummary) {
        if !self.posts.contains_key(&post.id) {
            self.post_order.insert(0, post.id);
        }
        self.posts.insert(post.id, post);
    }

    pub fn retitle_post(
        &mut self,
        id: PostId,
        title: Option<String>,
        updated_at: Option<chrono::DateTime<chrono::Utc>>,
    ) {
        if let Some(post) = self.posts.get_mut(&id) {
            post.title = title;
            if updated_at.is_some() {
                post.updated_at = updated_at;
            }
        }
    }

    pub fn move_post(
        &mut self,
        id: PostId,
        folder_id: Option<FolderId>,
        updated_at: Option<chrono::DateTime<chrono::Utc>>,
    ) {
        if let Some(post) = self.posts.get_mut(&id) {
            post.folder_id = folder_id;
            if updated_at.is_some() {
                post.updated_at = updated_at;
            }
        }
    }

    pub fn remove_post(&mut self, id: PostId) {
        if self.posts.remove(&id).is_some() {
            self.post_order.retain(|p| *p != id);
        }
    }

    /// Recompute the derived tree. O(folders + posts), full rebuild.
    pub fn rebuild(&mut self) {
        let ordered: Vec<&PostSummary> = self
            .post_order
            .iter()
            .filter_map(|id| self.posts.get(id))
            .collect();
        self.tree = build_tree(&self.folders, &self.children, &ordered, self.sort);
    }

    pub fn clear(&mut self) {
        self.folders.clear();
        self.children.clear();
        self.posts.clear();
        self.post_order.clear();
        self.selected = None;
        self.tree.clear();
    }

    fn detach(&mut self, id: FolderId, parent: Option<FolderId>) {
        if let Some(siblings) = self.children.get_mut(&parent) {
            siblings.retain(|child| *child != id);
            if siblings.is_empty() {
                self.children.remove(&parent);
            }
        }
    }
}
