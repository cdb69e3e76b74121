//! Authorization of mutating loot commands.

use serenity::all::Permissions;

use crate::{
    error::loot::LootError,
    model::moderation::{ModerationPolicy, PermissionSnapshot},
};

/// Decides whether an actor may run moderator commands.
///
/// Stateless apart from the policy; never touches storage or the Discord API.
pub struct ModerationGate<'a> {
    policy: &'a ModerationPolicy,
}

impl<'a> ModerationGate<'a> {
    pub fn new(policy: &'a ModerationPolicy) -> Self {
        Self { policy }
    }

    /// Checks whether the actor is a loot moderator.
    ///
    /// An actor qualifies with the administrator or manage-guild permission, by owning the
    /// guild, or by holding one of the policy's allowed roles.
    pub fn is_authorized(&self, actor: &PermissionSnapshot) -> bool {
        actor.is_owner
            || actor
                .permissions
                .intersects(Permissions::ADMINISTRATOR | Permissions::MANAGE_GUILD)
            || actor
                .role_ids
                .iter()
                .any(|role| self.policy.allowed_role_ids.contains(role))
    }

    /// Fails with `Unauthorized` unless the actor is a loot moderator.
    pub fn require(&self, actor: &PermissionSnapshot) -> Result<(), LootError> {
        if self.is_authorized(actor) {
            Ok(())
        } else {
            tracing::debug!(user_id = actor.user_id, "Moderation gate rejected actor");
            Err(LootError::Unauthorized(actor.user_id))
        }
    }
}
