//! Domain models for the vote ledger.

use chrono::{DateTime, Utc};

use crate::{
    error::{internal::InternalError, AppError},
    model::{item::LootItem, reason::PriorityReason},
    util::parse::parse_u64_from_string,
};

/// A stored vote.
#[derive(Debug, Clone, PartialEq)]
pub struct LootVote {
    pub id: i32,
    pub guild_id: u64,
    pub user_id: u64,
    pub item_slug: String,
    pub reason: PriorityReason,
    pub created_at: DateTime<Utc>,
}

impl LootVote {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(LootVote)` - The converted vote
    /// - `Err(AppError::InternalErr)` - Stored id or reason could not be parsed
    pub fn from_entity(entity: entity::loot_vote::Model) -> Result<Self, AppError> {
        let reason = entity
            .reason
            .parse()
            .map_err(|_| InternalError::UnknownColumnValue {
                column: "loot_vote.reason",
                value: entity.reason.clone(),
            })?;

        Ok(Self {
            id: entity.id,
            guild_id: parse_u64_from_string(entity.guild_id)?,
            user_id: parse_u64_from_string(entity.user_id)?,
            item_slug: entity.item_slug,
            reason,
            created_at: entity.created_at,
        })
    }
}

/// An active vote as listed for one item.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveVote {
    pub user_id: u64,
    pub reason: PriorityReason,
    pub created_at: DateTime<Utc>,
}

impl From<LootVote> for ActiveVote {
    fn from(vote: LootVote) -> Self {
        Self {
            user_id: vote.user_id,
            reason: vote.reason,
            created_at: vote.created_at,
        }
    }
}

/// One of a user's active votes, used to build the withdrawal picker.
#[derive(Debug, Clone, PartialEq)]
pub struct UserVote {
    pub item_slug: String,
    pub display_name: String,
    pub reason: PriorityReason,
}

/// Parameters for submitting a vote.
///
/// `item_name` and `reason` are raw user input; the vote service normalises the name and
/// parses the reason.
#[derive(Debug, Clone)]
pub struct SubmitVoteParam {
    pub guild_id: u64,
    pub user_id: u64,
    pub item_name: String,
    pub reason: String,
}

/// Result of an accepted vote.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitVoteOutcome {
    pub accepted: bool,
    /// Canonical registry entry for the voted item.
    pub item: LootItem,
    pub reason: PriorityReason,
}

/// Result of a withdrawal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithdrawOutcome {
    /// Whether an active vote was removed.
    pub removed: bool,
    /// Whether the open item was garbage-collected because no votes remained.
    pub item_deleted: bool,
}
