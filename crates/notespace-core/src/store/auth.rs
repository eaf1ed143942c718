//! Authentication state.

use crate::model::User;
use notespace_http::wire::UserId;

#[derive(Default)]
pub struct AuthStore {
    pub current_user: Option<User>,
}

impl AuthStore {
    pub fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }

    pub fn user_id(&self) -> Option<UserId> {
        self.current_user.as_ref().map(|user| user.id)
    }

    pub fn set_user(&mut self, user: User) {
        self.current_user = Some(user);
    }

    /// Overlay a fresh server record onto the signed-in user.
    pub fn merge_user(&mut self, user: User) {
        match &mut self.current_user {
            Some(current) => current.merge(user),
            None => self.current_user = Some(user),
        }
    }

    pub fn clear(&mut self) {
        self.current_user = None;
    }
}
