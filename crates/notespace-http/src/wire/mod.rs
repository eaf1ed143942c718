//! Server-side JSON shapes, exactly as the API sends and receives them.
//!
//! These stay deliberately dumb: renaming, default substitution and
//! timestamp parsing happen in the consumer's transformers, not here.

mod auth;
mod folder;
mod image;
mod member;
mod post;
mod publish;
mod user;
mod workspace;

pub use auth::*;
pub use folder::*;
pub use image::*;
pub use member::*;
pub use post::*;
pub use publish::*;
pub use user::*;
pub use workspace::*;

pub type UserId = i64;
pub type WorkspaceId = i64;
pub type FolderId = i64;
pub type PostId = i64;
pub type MemberId = i64;
