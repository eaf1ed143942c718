use super::{parse_timestamp, PostSummary};
use chrono::{DateTime, Utc};
use notespace_http::wire::{FolderId, FolderWire, WorkspaceTreeWire};
use serde::Serialize;

/// A folder, flat: hierarchy lives in `parent_id` and the folder store's
/// children index, never in nested structures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Folder {
    pub id: FolderId,
    pub name: String,
    pub parent_id: Option<FolderId>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Folder {
    /// Shallow transform; embedded children/posts are handled by
    /// [`flatten_tree`].
    pub fn from_wire(wire: &FolderWire) -> Self {
        Folder {
            id: wire.folder_id,
            name: wire.name.clone(),
            parent_id: wire.parent_id,
            created_at: parse_timestamp(wire.created_at.as_deref()),
            updated_at: parse_timestamp(wire.updated_at.as_deref()),
        }
    }
}

/// Transform the nested workspace-tree payload into flat collections in one
/// pass: every descendant folder and every embedded post summary, with
/// structural order preserved (parents before children, siblings as
/// received, root posts appended last).
pub fn flatten_tree(wire: WorkspaceTreeWire) -> (Vec<Folder>, Vec<PostSummary>) {
    let mut folders = Vec::new();
    let mut posts = Vec::new();
    for folder in wire.folders {
        flatten_folder(folder, None, &mut folders, &mut posts);
    }
    for root_post in wire.root_posts {
        let mut summary = PostSummary::from_wire(root_post);
        summary.folder_id = None;
        posts.push(summary);
    }
    (folders, posts)
}

fn flatten_folder(
    wire: FolderWire,
    parent: Option<FolderId>,
    folders: &mut Vec<Folder>,
    posts: &mut Vec<PostSummary>,
) {
    let id = wire.folder_id;
    let mut folder = Folder::from_wire(&wire);
    // Embedded subtrees sometimes omit parentId; the position in the tree
    // is authoritative then.
    if folder.parent_id.is_none() {
        folder.parent_id = parent;
    }
    folders.push(folder);

    for post in wire.posts {
        let mut summary = PostSummary::from_wire(post);
        summary.folder_id.get_or_insert(id);
        posts.push(summary);
    }
    for child in wire.children {
        flatten_folder(child, Some(id), folders, posts);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notespace_http::wire::PostSummaryWire;

    fn post_wire(id: i64) -> PostSummaryWire {
        PostSummaryWire {
            post_id: id,
            title: Some(format!("post {id}")),
            folder_id: None,
            status: None,
            visibility: None,
            created_at: None,
            updated_at: None,
        }
    }

    fn folder_wire(id: i64, children: Vec<FolderWire>, posts: Vec<PostSummaryWire>) -> FolderWire {
        FolderWire {
            folder_id: id,
            name: format!("folder {id}"),
            parent_id: None,
            created_at: None,
            updated_at: None,
            children,
            posts,
        }
    }

    #[test]
    fn flatten_preserves_structure_and_order() {
        let tree = WorkspaceTreeWire {
            folders: vec![
                folder_wire(
                    1,
                    vec![folder_wire(3, vec![folder_wire(4, vec![], vec![])], vec![post_wire(20)])],
                    vec![post_wire(10)],
                ),
                folder_wire(2, vec![], vec![]),
            ],
            root_posts: vec![post_wire(30)],
        };

        let (folders, posts) = flatten_tree(tree);
        let ids: Vec<_> = folders.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![1, 3, 4, 2]);

        let parent_of = |id: i64| folders.iter().find(|f| f.id == id).unwrap().parent_id;
        assert_eq!(parent_of(1), None);
        assert_eq!(parent_of(3), Some(1));
        assert_eq!(parent_of(4), Some(3));
        assert_eq!(parent_of(2), None);

        let post_folders: Vec<_> = posts.iter().map(|p| (p.id, p.folder_id)).collect();
        assert_eq!(post_folders, vec![(10, Some(1)), (20, Some(3)), (30, None)]);
    }

    #[test]
    fn embedded_parent_id_is_trusted_when_present() {
        let mut child = folder_wire(5, vec![], vec![]);
        child.parent_id = Some(1);
        let tree = WorkspaceTreeWire {
            folders: vec![folder_wire(1, vec![child], vec![])],
            root_posts: vec![],
        };
        let (folders, _) = flatten_tree(tree);
        assert_eq!(folders[1].parent_id, Some(1));
    }
}
