//! Domain models for the win ledger.

use chrono::{DateTime, Utc};

use crate::{error::AppError, util::parse::parse_u64_from_string};

/// A user's running win count within a guild.
#[derive(Debug, Clone, PartialEq)]
pub struct WinRecord {
    pub guild_id: u64,
    pub user_id: u64,
    pub wins: u32,
    pub updated_at: DateTime<Utc>,
}

impl WinRecord {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::loot_win::Model) -> Result<Self, AppError> {
        Ok(Self {
            guild_id: parse_u64_from_string(entity.guild_id)?,
            user_id: parse_u64_from_string(entity.user_id)?,
            wins: entity.wins.max(0) as u32,
            updated_at: entity.updated_at,
        })
    }
}
