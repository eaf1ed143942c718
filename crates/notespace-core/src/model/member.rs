use notespace_http::wire::{MemberId, MemberWire, UserId};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MemberRole {
    Owner,
    Admin,
    Member,
    Viewer,
}

impl MemberRole {
    /// Unknown roles degrade to `Viewer`, the least-privileged one.
    pub(crate) fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("OWNER") => MemberRole::Owner,
            Some("ADMIN") => MemberRole::Admin,
            Some("MEMBER") => MemberRole::Member,
            _ => MemberRole::Viewer,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberRole::Owner => "OWNER",
            MemberRole::Admin => "ADMIN",
            MemberRole::Member => "MEMBER",
            MemberRole::Viewer => "VIEWER",
        }
    }

    #[must_use]
    pub fn can_edit(&self) -> bool {
        !matches!(self, MemberRole::Viewer)
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        matches!(self, MemberRole::Owner | MemberRole::Admin)
    }
}

/// A workspace member.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Member {
    pub id: MemberId,
    pub user_id: Option<UserId>,
    pub email: Option<String>,
    pub nickname: Option<String>,
    pub profile_image: Option<String>,
    pub role: MemberRole,
}

impl Member {
    pub fn from_wire(wire: MemberWire) -> Self {
        Member {
            id: wire.member_id,
            user_id: wire.user_id,
            email: wire.email,
            nickname: wire.nickname,
            profile_image: wire.profile_image,
            role: MemberRole::parse(wire.role.as_deref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_role_degrades_to_viewer() {
        assert_eq!(MemberRole::parse(Some("SUPERUSER")), MemberRole::Viewer);
        assert_eq!(MemberRole::parse(None), MemberRole::Viewer);
    }

    #[test]
    fn role_capabilities() {
        assert!(MemberRole::Owner.is_admin());
        assert!(MemberRole::Admin.is_admin());
        assert!(!MemberRole::Member.is_admin());
        assert!(MemberRole::Member.can_edit());
        assert!(!MemberRole::Viewer.can_edit());
    }
}
