//! Actor permission snapshots for the moderation gate.

use serenity::all::{Member, Permissions};

/// What the transport layer knows about the invoking user.
///
/// Built once per interaction; the moderation gate is a pure function of this snapshot and the
/// guild's [`ModerationPolicy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionSnapshot {
    pub user_id: u64,
    pub role_ids: Vec<u64>,
    pub permissions: Permissions,
    pub is_owner: bool,
}

impl PermissionSnapshot {
    /// Builds a snapshot from an interaction member.
    ///
    /// Interaction members carry resolved permissions; a member without them is treated as
    /// having none.
    ///
    /// # Arguments
    /// - `member` - Member attached to the interaction
    /// - `is_owner` - Whether the member owns the guild
    pub fn from_member(member: &Member, is_owner: bool) -> Self {
        Self {
            user_id: member.user.id.get(),
            role_ids: member.roles.iter().map(|r| r.get()).collect(),
            permissions: member.permissions.unwrap_or_else(Permissions::empty),
            is_owner,
        }
    }
}

/// Guild-level moderation configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModerationPolicy {
    /// Roles allowed to moderate loot in addition to administrators and managers.
    pub allowed_role_ids: Vec<u64>,
}
