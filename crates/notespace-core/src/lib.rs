//! Client-side domain layer for the Notespace note/workspace service.
//!
//! The [`session::Session`] is the single context object an application
//! constructs: it owns the API client, the per-resource stores and the
//! alert hub, and coordinates cross-store updates through domain events.
//! The rendered folder/post tree is a derived projection, rebuilt by the
//! pure [`tree::build_tree`] after every local mutation.

pub mod alerts;
pub mod error;
pub mod events;
pub mod model;
pub mod nav;
pub mod session;
pub mod store;
pub mod tree;

pub use error::{CoreError, Result};
pub use session::{PostUpdate, Session};
pub use tree::{build_tree, NodeKind, SortOption, TreeNode};
