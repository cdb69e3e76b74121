//! Loot vote factory for creating vote ledger rows.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test votes with customizable fields.
///
/// Inserts rows directly, bypassing the duplicate-vote guard, so tests can set up expired
/// or otherwise unusual ledger states.
pub struct LootVoteFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    user_id: String,
    item_slug: String,
    reason: String,
    created_at: DateTime<Utc>,
}

impl<'a> LootVoteFactory<'a> {
    /// Creates a new LootVoteFactory with default values.
    ///
    /// Defaults:
    /// - reason: `"mainspec"`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection, guild_id: &str, user_id: &str, item_slug: &str) -> Self {
        Self {
            db,
            guild_id: guild_id.to_string(),
            user_id: user_id.to_string(),
            item_slug: item_slug.to_string(),
            reason: "mainspec".to_string(),
            created_at: Utc::now(),
        }
    }

    /// Sets the stored reason key (`mainspec`, `offspec` or `greed`).
    pub fn reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }

    /// Sets the creation timestamp.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the vote entity into the database.
    pub async fn build(self) -> Result<entity::loot_vote::Model, DbErr> {
        entity::loot_vote::ActiveModel {
            id: ActiveValue::NotSet,
            guild_id: ActiveValue::Set(self.guild_id),
            user_id: ActiveValue::Set(self.user_id),
            item_slug: ActiveValue::Set(self.item_slug),
            reason: ActiveValue::Set(self.reason),
            created_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a mainspec vote cast now.
pub async fn create_vote(
    db: &DatabaseConnection,
    guild_id: &str,
    user_id: &str,
    item_slug: &str,
) -> Result<entity::loot_vote::Model, DbErr> {
    LootVoteFactory::new(db, guild_id, user_id, item_slug)
        .build()
        .await
}
