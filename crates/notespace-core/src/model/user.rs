use super::parse_timestamp;
use chrono::{DateTime, Utc};
use notespace_http::wire::{LoginUserWire, SessionProbeWire, UserId, UserWire};
use serde::Serialize;

/// The signed-in user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: UserId,
    pub email: Option<String>,
    pub login_id: Option<String>,
    pub nickname: Option<String>,
    pub profile_image: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    /// From a `/users/*` record. Older endpoints say `id` where newer ones
    /// say `userId`; `userId` wins when both are present.
    pub fn from_wire(wire: UserWire) -> Option<Self> {
        let id = wire.user_id.or(wire.id)?;
        Some(User {
            id,
            email: wire.email,
            login_id: wire.login_id,
            nickname: wire.nickname,
            profile_image: wire.profile_image,
            created_at: parse_timestamp(wire.created_at.as_deref()),
            updated_at: parse_timestamp(wire.updated_at.as_deref()),
        })
    }

    /// From a login/signup response, which carries no email or timestamps.
    pub fn from_login(wire: LoginUserWire) -> Self {
        User {
            id: wire.user_id,
            email: None,
            login_id: wire.login_id,
            nickname: wire.nickname,
            profile_image: wire.profile_image,
            created_at: None,
            updated_at: None,
        }
    }

    /// From a positive session probe.
    pub fn from_probe(wire: SessionProbeWire) -> Option<Self> {
        let id = wire.user_id?;
        Some(User {
            id,
            email: wire.email,
            login_id: wire.login_id,
            nickname: wire.nickname,
            profile_image: wire.profile_image,
            created_at: None,
            updated_at: None,
        })
    }

    /// Overlay a fresh server record onto this user, keeping fields the
    /// record does not carry.
    pub fn merge(&mut self, other: User) {
        self.id = other.id;
        if other.email.is_some() {
            self.email = other.email;
        }
        if other.login_id.is_some() {
            self.login_id = other.login_id;
        }
        if other.nickname.is_some() {
            self.nickname = other.nickname;
        }
        if other.profile_image.is_some() {
            self.profile_image = other.profile_image;
        }
        if other.created_at.is_some() {
            self.created_at = other.created_at;
        }
        if other.updated_at.is_some() {
            self.updated_at = other.updated_at;
        }
    }
}
