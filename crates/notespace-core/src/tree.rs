//! Pure tree construction for the sidebar.
//!
//! [`build_tree`] projects the flat folder index and the post summaries
//! into an ordered forest of ephemeral [`TreeNode`]s. It never mutates its
//! inputs and is rebuilt wholesale after every relevant store change:
//! O(folders + posts) per call, no incremental patching.

use crate::model::{Folder, PostStatus, PostSummary, Visibility};
use chrono::{DateTime, Utc};
use notespace_http::wire::FolderId;
use serde::Serialize;
use std::collections::HashMap;

pub const UNTITLED_LABEL: &str = "Untitled";

/// Post ordering within a sibling set. Folders always precede posts and
/// keep their arrival order regardless of the option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOption {
    #[default]
    NameAsc,
    NameDesc,
    CreatedAsc,
    CreatedDesc,
    UpdatedAsc,
    UpdatedDesc,
}

impl SortOption {
    /// Parse a sort token; unknown tokens fall back to `name_asc`.
    #[must_use]
    pub fn parse(token: &str) -> Self {
        match token {
            "name_desc" => SortOption::NameDesc,
            "created_asc" => SortOption::CreatedAsc,
            "created_desc" => SortOption::CreatedDesc,
            "updated_asc" => SortOption::UpdatedAsc,
            "updated_desc" => SortOption::UpdatedDesc,
            _ => SortOption::NameAsc,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::NameAsc => "name_asc",
            SortOption::NameDesc => "name_desc",
            SortOption::CreatedAsc => "created_asc",
            SortOption::CreatedDesc => "created_desc",
            SortOption::UpdatedAsc => "updated_asc",
            SortOption::UpdatedDesc => "updated_desc",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Folder,
    Post,
}

/// Rendering payload carried on each node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NodeData {
    Folder {
        parent_id: Option<FolderId>,
        created_at: Option<DateTime<Utc>>,
        updated_at: Option<DateTime<Utc>>,
    },
    Post {
        folder_id: Option<FolderId>,
        status: PostStatus,
        visibility: Visibility,
        created_at: Option<DateTime<Utc>>,
        updated_at: Option<DateTime<Utc>>,
    },
}

impl NodeData {
    fn created_at(&self) -> Option<DateTime<Utc>> {
        match self {
            NodeData::Folder { created_at, .. } | NodeData::Post { created_at, .. } => *created_at,
        }
    }

    fn updated_at(&self) -> Option<DateTime<Utc>> {
        match self {
            NodeData::Folder { updated_at, .. } | NodeData::Post { updated_at, .. } => *updated_at,
        }
    }
}

/// Ephemeral UI projection of one folder or post. Derived, never the
/// mutation target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeNode {
    pub key: String,
    pub label: String,
    pub icon: &'static str,
    pub kind: NodeKind,
    pub id: i64,
    pub data: NodeData,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    fn folder(folder: &Folder, children: Vec<TreeNode>) -> Self {
        TreeNode {
            key: format!("folder-{}", folder.id),
            label: folder.name.clone(),
            icon: "folder",
            kind: NodeKind::Folder,
            id: folder.id,
            data: NodeData::Folder {
                parent_id: folder.parent_id,
                created_at: folder.created_at,
                updated_at: folder.updated_at,
            },
            children,
        }
    }

    fn post(post: &PostSummary) -> Self {
        TreeNode {
            key: format!("post-{}", post.id),
            label: post
                .title
                .as_deref()
                .filter(|t| !t.trim().is_empty())
                .unwrap_or(UNTITLED_LABEL)
                .to_string(),
            icon: "file",
            kind: NodeKind::Post,
            id: post.id,
            data: NodeData::Post {
                folder_id: post.folder_id,
                status: post.status,
                visibility: post.visibility,
                created_at: post.created_at,
                updated_at: post.updated_at,
            },
            children: Vec::new(),
        }
    }
}

/// Build the rendered forest.
///
/// `folders` is the id-keyed folder map, `children` the ordered child index
/// (`None` key holds the roots), `posts` the summaries in cache order.
/// Folderless posts surface at the root level. Posts referencing a folder
/// missing from the index are dropped: the client never invents structure.
pub fn build_tree(
    folders: &HashMap<FolderId, Folder>,
    children: &HashMap<Option<FolderId>, Vec<FolderId>>,
    posts: &[&PostSummary],
    sort: SortOption,
) -> Vec<TreeNode> {
    let mut posts_by_folder: HashMap<Option<FolderId>, Vec<&PostSummary>> = HashMap::new();
    for post in posts {
        let slot = match post.folder_id {
            Some(folder_id) if folders.contains_key(&folder_id) => Some(folder_id),
            Some(_) => continue,
            None => None,
        };
        posts_by_folder.entry(slot).or_default().push(post);
    }

    build_level(None, folders, children, &posts_by_folder, sort)
}

fn build_level(
    parent: Option<FolderId>,
    folders: &HashMap<FolderId, Folder>,
    children: &HashMap<Option<FolderId>, Vec<FolderId>>,
    posts_by_folder: &HashMap<Option<FolderId>, Vec<&PostSummary>>,
    sort: SortOption,
) -> Vec<TreeNode> {
    let folder_nodes: Vec<TreeNode> = children
        .get(&parent)
        .into_iter()
        .flatten()
        .filter_map(|id| folders.get(id))
        .map(|folder| {
            let nested = build_level(Some(folder.id), folders, children, posts_by_folder, sort);
            TreeNode::folder(folder, nested)
        })
        .collect();

    let mut post_nodes: Vec<TreeNode> = posts_by_folder
        .get(&parent)
        .into_iter()
        .flatten()
        .map(|post| TreeNode::post(post))
        .collect();
    sort_posts(&mut post_nodes, sort);

    // Folders first, posts after, at every level.
    let mut level = folder_nodes;
    level.extend(post_nodes);
    level
}

fn sort_posts(nodes: &mut [TreeNode], sort: SortOption) {
    // Missing dates sort as earliest, mirroring a zero epoch fallback.
    let time = |value: Option<DateTime<Utc>>| value.map(|t| t.timestamp_millis()).unwrap_or(0);
    match sort {
        // Caseless compare with a codepoint tiebreak, so labels equal
        // ignoring case still order deterministically.
        SortOption::NameAsc => nodes.sort_by(|a, b| {
            a.label
                .to_lowercase()
                .cmp(&b.label.to_lowercase())
                .then_with(|| a.label.cmp(&b.label))
        }),
        SortOption::NameDesc => nodes.sort_by(|a, b| {
            b.label
                .to_lowercase()
                .cmp(&a.label.to_lowercase())
                .then_with(|| b.label.cmp(&a.label))
        }),
        SortOption::CreatedAsc => nodes.sort_by_key(|n| time(n.data.created_at())),
        SortOption::CreatedDesc => nodes.sort_by_key(|n| std::cmp::Reverse(time(n.data.created_at()))),
        SortOption::UpdatedAsc => nodes.sort_by_key(|n| time(n.data.updated_at())),
        SortOption::UpdatedDesc => nodes.sort_by_key(|n| std::cmp::Reverse(time(n.data.updated_at()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use notespace_http::wire::PostId;

    fn folder(id: FolderId, name: &str, parent_id: Option<FolderId>) -> Folder {
        Folder {
            id,
            name: name.into(),
            parent_id,
            created_at: None,
            updated_at: None,
        }
    }

    fn post(id: PostId, title: Option<&str>, folder_id: Option<FolderId>) -> PostSummary {
        PostSummary {
            id,
            title: title.map(String::from),
            folder_id,
            status: PostStatus::Draft,
            visibility: Visibility::Private,
            created_at: None,
            updated_at: None,
        }
    }

    fn at(day: u32) -> Option<DateTime<Utc>> {
        Some(Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap())
    }

    struct Fixture {
        folders: HashMap<FolderId, Folder>,
        children: HashMap<Option<FolderId>, Vec<FolderId>>,
        posts: Vec<PostSummary>,
    }

    impl Fixture {
        fn new(folders: Vec<Folder>, posts: Vec<PostSummary>) -> Self {
            let mut map = HashMap::new();
            let mut children: HashMap<Option<FolderId>, Vec<FolderId>> = HashMap::new();
            for folder in folders {
                children.entry(folder.parent_id).or_default().push(folder.id);
                map.insert(folder.id, folder);
            }
            Fixture {
                folders: map,
                children,
                posts,
            }
        }

        fn build(&self, sort: SortOption) -> Vec<TreeNode> {
            let refs: Vec<&PostSummary> = self.posts.iter().collect();
            build_tree(&self.folders, &self.children, &refs, sort)
        }
    }

    fn mixed_fixture() -> Fixture {
        Fixture::new(
            vec![
                folder(1, "beta", None),
                folder(2, "alpha", None),
                folder(3, "inner", Some(1)),
            ],
            vec![
                post(10, Some("zeta"), Some(1)),
                post(11, Some("alpha post"), Some(1)),
                post(12, Some("root post"), None),
                post(13, Some("deep"), Some(3)),
            ],
        )
    }

    #[test]
    fn folders_precede_posts_at_every_level_for_every_sort() {
        let fixture = mixed_fixture();
        for sort in [
            SortOption::NameAsc,
            SortOption::NameDesc,
            SortOption::CreatedAsc,
            SortOption::CreatedDesc,
            SortOption::UpdatedAsc,
            SortOption::UpdatedDesc,
        ] {
            let forest = fixture.build(sort);
            assert_no_post_before_folder(&forest);
        }
    }

    fn assert_no_post_before_folder(nodes: &[TreeNode]) {
        let mut seen_post = false;
        for node in nodes {
            match node.kind {
                NodeKind::Post => seen_post = true,
                NodeKind::Folder => assert!(!seen_post, "folder after post in sibling set"),
            }
            assert_no_post_before_folder(&node.children);
        }
    }

    #[test]
    fn folder_order_is_arrival_order_not_sorted() {
        let forest = mixed_fixture().build(SortOption::NameAsc);
        // "beta" was inserted before "alpha" and stays first.
        assert_eq!(forest[0].label, "beta");
        assert_eq!(forest[1].label, "alpha");
    }

    #[test]
    fn posts_sort_by_name_within_siblings() {
        let forest = mixed_fixture().build(SortOption::NameAsc);
        let beta_children: Vec<_> = forest[0].children.iter().map(|n| n.label.as_str()).collect();
        assert_eq!(beta_children, vec!["inner", "alpha post", "zeta"]);
    }

    #[test]
    fn folderless_posts_surface_at_root() {
        let forest = mixed_fixture().build(SortOption::NameAsc);
        let root_posts: Vec<_> = forest
            .iter()
            .filter(|n| n.kind == NodeKind::Post)
            .map(|n| n.id)
            .collect();
        assert_eq!(root_posts, vec![12]);
    }

    #[test]
    fn missing_dates_sort_earliest() {
        let mut dated = post(20, Some("dated"), None);
        dated.created_at = at(5);
        let undated = post(21, Some("undated"), None);
        let fixture = Fixture::new(vec![], vec![dated, undated]);

        let asc = fixture.build(SortOption::CreatedAsc);
        assert_eq!(asc[0].id, 21);
        let desc = fixture.build(SortOption::CreatedDesc);
        assert_eq!(desc[0].id, 20);
    }

    #[test]
    fn updated_desc_orders_most_recent_first() {
        let mut a = post(30, Some("a"), None);
        a.updated_at = at(1);
        let mut b = post(31, Some("b"), None);
        b.updated_at = at(9);
        let fixture = Fixture::new(vec![], vec![a, b]);
        let forest = fixture.build(SortOption::UpdatedDesc);
        assert_eq!(forest[0].id, 31);
    }

    #[test]
    fn name_sort_breaks_case_ties_by_codepoint() {
        let fixture = Fixture::new(
            vec![],
            vec![
                post(60, Some("notes"), None),
                post(61, Some("Notes"), None),
                post(62, Some("NOTES"), None),
            ],
        );
        let asc = fixture.build(SortOption::NameAsc);
        let labels: Vec<_> = asc.iter().map(|n| n.label.as_str()).collect();
        assert_eq!(labels, vec!["NOTES", "Notes", "notes"]);

        let desc = fixture.build(SortOption::NameDesc);
        let labels: Vec<_> = desc.iter().map(|n| n.label.as_str()).collect();
        assert_eq!(labels, vec!["notes", "Notes", "NOTES"]);
    }

    #[test]
    fn untitled_posts_get_placeholder_label() {
        let fixture = Fixture::new(vec![], vec![post(40, None, None), post(41, Some("  "), None)]);
        let forest = fixture.build(SortOption::NameAsc);
        assert!(forest.iter().all(|n| n.label == UNTITLED_LABEL));
    }

    #[test]
    fn posts_referencing_unknown_folders_are_dropped() {
        let fixture = Fixture::new(vec![folder(1, "only", None)], vec![post(50, Some("ghost"), Some(99))]);
        let forest = fixture.build(SortOption::NameAsc);
        assert_eq!(forest.len(), 1);
        assert!(forest[0].children.is_empty());
    }

    #[test]
    fn rebuild_is_idempotent_for_identical_input() {
        let fixture = mixed_fixture();
        let first = fixture.build(SortOption::UpdatedDesc);
        let second = fixture.build(SortOption::UpdatedDesc);
        assert_eq!(first, second);
    }

    #[test]
    fn sort_tokens_round_trip_with_fallback() {
        assert_eq!(SortOption::parse("updated_desc"), SortOption::UpdatedDesc);
        assert_eq!(SortOption::parse("name_desc").as_str(), "name_desc");
        assert_eq!(SortOption::parse("definitely_not_a_token"), SortOption::NameAsc);
    }
}
