//! Vote ledger repository for database operations.
//!
//! This module provides the `LootVoteRepository` for the `loot_vote` table. Votes are
//! append-only apart from withdrawal and guild clears; expiry is never written to the table,
//! every read instead filters with [`active_vote_condition`].

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::{Expr, Order, Query},
    ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::model::reason::PriorityReason;

/// Condition matching the active votes of a guild.
///
/// Shared by plain selects and the subqueries embedded in item and vote statements.
///
/// # Arguments
/// - `guild_id` - Discord guild ID as stored
/// - `active_since` - Oldest vote creation time still considered active
pub(crate) fn active_vote_condition(guild_id: &str, active_since: DateTime<Utc>) -> Condition {
    Condition::all()
        .add(entity::loot_vote::Column::GuildId.eq(guild_id))
        .add(entity::loot_vote::Column::CreatedAt.gte(active_since))
}

/// Repository providing database operations for the vote ledger.
pub struct LootVoteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LootVoteRepository<'a, C> {
    /// Creates a new LootVoteRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `LootVoteRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a vote unless the user already has an active vote on the item.
    ///
    /// Runs `INSERT INTO loot_vote (...) SELECT ... WHERE NOT EXISTS (...)` so the duplicate
    /// check and the insert are one statement.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `user_id` - Discord user ID of the voter
    /// - `slug` - Normalized item slug
    /// - `reason` - Priority reason of the vote
    /// - `created_at` - Vote timestamp
    /// - `active_since` - Oldest vote creation time still considered active
    ///
    /// # Returns
    /// - `Ok(true)` - Vote recorded
    /// - `Ok(false)` - User already has an active vote on the item
    /// - `Err(DbErr)` - Database error during insert
    pub async fn insert_if_no_active(
        &self,
        guild_id: u64,
        user_id: u64,
        slug: &str,
        reason: PriorityReason,
        created_at: DateTime<Utc>,
        active_since: DateTime<Utc>,
    ) -> Result<bool, DbErr> {
        use entity::loot_vote::Column;

        let guild = guild_id.to_string();
        let user = user_id.to_string();

        let existing = Query::select()
            .column(Column::Id)
            .from(entity::prelude::LootVote)
            .cond_where(active_vote_condition(&guild, active_since))
            .and_where(Column::UserId.eq(user.as_str()))
            .and_where(Column::ItemSlug.eq(slug))
            .to_owned();

        let values = Query::select()
            .exprs([
                Expr::val(guild),
                Expr::val(user),
                Expr::val(slug),
                Expr::val(reason.as_str()),
                Expr::val(created_at),
            ])
            .cond_where(Condition::all().add(Expr::exists(existing)).not())
            .to_owned();

        let insert = Query::insert()
            .into_table(entity::prelude::LootVote)
            .columns([
                Column::GuildId,
                Column::UserId,
                Column::ItemSlug,
                Column::Reason,
                Column::CreatedAt,
            ])
            .select_from(values)
            .map_err(|e| DbErr::Custom(e.to_string()))?
            .to_owned();

        let result = self.db.execute(&insert).await?;

        Ok(result.rows_affected() > 0)
    }

    /// Deletes the user's most recent active vote on an item.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `user_id` - Discord user ID of the voter
    /// - `slug` - Normalized item slug
    /// - `active_since` - Oldest vote creation time still considered active
    ///
    /// # Returns
    /// - `Ok(true)` - A vote was removed
    /// - `Ok(false)` - User had no active vote on the item
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_latest_active(
        &self,
        guild_id: u64,
        user_id: u64,
        slug: &str,
        active_since: DateTime<Utc>,
    ) -> Result<bool, DbErr> {
        use entity::loot_vote::Column;

        let latest = Query::select()
            .column(Column::Id)
            .from(entity::prelude::LootVote)
            .cond_where(active_vote_condition(&guild_id.to_string(), active_since))
            .and_where(Column::UserId.eq(user_id.to_string()))
            .and_where(Column::ItemSlug.eq(slug))
            .order_by(Column::CreatedAt, Order::Desc)
            .order_by(Column::Id, Order::Desc)
            .limit(1)
            .to_owned();

        let result = entity::prelude::LootVote::delete_many()
            .filter(Column::Id.in_subquery(latest))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets the active votes on an item, oldest first.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Active votes ordered by creation time
    /// - `Err(DbErr)` - Database error during query
    pub async fn list_active_for_item(
        &self,
        guild_id: u64,
        slug: &str,
        active_since: DateTime<Utc>,
    ) -> Result<Vec<entity::loot_vote::Model>, DbErr> {
        use entity::loot_vote::Column;

        entity::prelude::LootVote::find()
            .filter(active_vote_condition(&guild_id.to_string(), active_since))
            .filter(Column::ItemSlug.eq(slug))
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(self.db)
            .await
    }

    /// Gets a user's active votes across every item of a guild, oldest first.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Active votes ordered by creation time
    /// - `Err(DbErr)` - Database error during query
    pub async fn list_active_for_user(
        &self,
        guild_id: u64,
        user_id: u64,
        active_since: DateTime<Utc>,
    ) -> Result<Vec<entity::loot_vote::Model>, DbErr> {
        use entity::loot_vote::Column;

        entity::prelude::LootVote::find()
            .filter(active_vote_condition(&guild_id.to_string(), active_since))
            .filter(Column::UserId.eq(user_id.to_string()))
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes every vote of a guild, expired ones included.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of votes deleted
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_for_guild(&self, guild_id: u64) -> Result<u64, DbErr> {
        let result = entity::prelude::LootVote::delete_many()
            .filter(entity::loot_vote::Column::GuildId.eq(guild_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
