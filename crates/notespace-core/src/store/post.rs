//! The currently open post.

use crate::model::Post;
use notespace_http::wire::PostId;

#[derive(Default)]
pub struct PostStore {
    pub current: Option<Post>,
}

impl PostStore {
    pub fn set_current(&mut self, post: Post) {
        self.current = Some(post);
    }

    pub fn current_id(&self) -> Option<PostId> {
        self.current.as_ref().map(|post| post.id)
    }

    /// Drop the open post when it is the given one.
    pub fn clear_if(&mut self, id: PostId) {
        if self.current_id() == Some(id) {
            self.current = None;
        }
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}
