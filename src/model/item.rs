//! Domain models for the item registry.

use chrono::{DateTime, Utc};

use crate::{
    error::{internal::InternalError, AppError},
    util::parse::{parse_optional_u64, parse_u64_from_string},
};

/// Roll status of a registered item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollStatus {
    /// Accepting votes, eligible for a first draw.
    Open,
    /// Has a recorded winner; only re-rolls apply.
    Rolled,
}

impl RollStatus {
    /// Value stored in the `status` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Rolled => "rolled",
        }
    }

    /// Parses a stored `status` column value.
    pub fn from_column(value: &str) -> Result<Self, InternalError> {
        match value {
            "open" => Ok(Self::Open),
            "rolled" => Ok(Self::Rolled),
            other => Err(InternalError::UnknownColumnValue {
                column: "loot_item.status",
                value: other.to_string(),
            }),
        }
    }
}

/// An item that has received votes within a guild.
#[derive(Debug, Clone, PartialEq)]
pub struct LootItem {
    /// Guild the item is registered in.
    pub guild_id: u64,
    /// Normalized item key.
    pub slug: String,
    /// First display name ever submitted for the slug.
    pub display_name: String,
    pub status: RollStatus,
    /// Winner of the latest roll.
    pub winner_id: Option<u64>,
    /// Time of the latest roll.
    pub rolled_at: Option<DateTime<Utc>>,
    /// Whether the latest roll was triggered by a moderator.
    pub rolled_by_moderator: bool,
    pub created_at: DateTime<Utc>,
}

impl LootItem {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(LootItem)` - The converted item
    /// - `Err(AppError::InternalErr)` - Stored id or status could not be parsed
    pub fn from_entity(entity: entity::loot_item::Model) -> Result<Self, AppError> {
        Ok(Self {
            guild_id: parse_u64_from_string(entity.guild_id)?,
            slug: entity.slug,
            display_name: entity.display_name,
            status: RollStatus::from_column(&entity.status)?,
            winner_id: parse_optional_u64(entity.winner_id)?,
            rolled_at: entity.rolled_at,
            rolled_by_moderator: entity.rolled_by_moderator,
            created_at: entity.created_at,
        })
    }

    pub fn is_rolled(&self) -> bool {
        self.status == RollStatus::Rolled
    }
}

/// Condition an item must satisfy for a roll result to be recorded.
///
/// Guards the conditional update that records a winner, so two rolls racing on the same item
/// cannot both apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollGuard {
    /// Item must still be open (first draw).
    Open,
    /// Item must still have the winner that was read when ranking (re-roll).
    Winner(Option<u64>),
    /// No precondition.
    Any,
}

/// Result of clearing a guild's votes and items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearOutcome {
    pub votes_deleted: u64,
    pub items_deleted: u64,
}
