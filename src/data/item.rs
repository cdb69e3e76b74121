//! Item registry repository for database operations.
//!
//! This module provides the `LootItemRepository` for the `loot_item` table. Items are keyed by
//! guild and slug, created implicitly on the first vote and updated only through the
//! conditional roll update in `mark_rolled`.

use chrono::{DateTime, Utc};
use migration::OnConflict;
use sea_orm::{
    sea_query::{Expr, ExprTrait, Query},
    ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::model::item::{RollGuard, RollStatus};

/// Repository providing database operations for the item registry.
pub struct LootItemRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LootItemRepository<'a, C> {
    /// Creates a new LootItemRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `LootItemRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an open item unless one already exists for the guild and slug.
    ///
    /// Uses `INSERT ... ON CONFLICT DO NOTHING`, so the first display name submitted for a
    /// slug is kept and concurrent first votes cannot create two rows.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `slug` - Normalized item slug
    /// - `display_name` - Display form of the submitted name
    ///
    /// # Returns
    /// - `Ok(true)` - Item was created
    /// - `Ok(false)` - Item already existed
    /// - `Err(DbErr)` - Database error during insert
    pub async fn register_if_missing(
        &self,
        guild_id: u64,
        slug: &str,
        display_name: &str,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::LootItem::insert(entity::loot_item::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            slug: ActiveValue::Set(slug.to_string()),
            display_name: ActiveValue::Set(display_name.to_string()),
            status: ActiveValue::Set(RollStatus::Open.as_str().to_string()),
            winner_id: ActiveValue::Set(None),
            rolled_at: ActiveValue::Set(None),
            rolled_by_moderator: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::columns([
                entity::loot_item::Column::GuildId,
                entity::loot_item::Column::Slug,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await;

        match result {
            Ok(rows) => Ok(rows > 0),
            Err(DbErr::RecordNotInserted) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Finds an item by guild and slug.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Item found
    /// - `Ok(None)` - No item registered under the slug
    /// - `Err(DbErr)` - Database error during query
    pub async fn find(
        &self,
        guild_id: u64,
        slug: &str,
    ) -> Result<Option<entity::loot_item::Model>, DbErr> {
        entity::prelude::LootItem::find_by_id((guild_id.to_string(), slug.to_string()))
            .one(self.db)
            .await
    }

    /// Finds several items of a guild by slug.
    pub async fn find_many(
        &self,
        guild_id: u64,
        slugs: Vec<String>,
    ) -> Result<Vec<entity::loot_item::Model>, DbErr> {
        if slugs.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::LootItem::find()
            .filter(entity::loot_item::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::loot_item::Column::Slug.is_in(slugs))
            .all(self.db)
            .await
    }

    /// Records a roll result on an item.
    ///
    /// Sets the status to `rolled` together with the winner, timestamp and moderator flag in
    /// one `UPDATE` whose `WHERE` clause also checks `guard`. When another roll has changed
    /// the item since it was read, no row matches and `false` is returned.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `slug` - Normalized item slug
    /// - `winner_id` - Discord user ID of the winner
    /// - `rolled_by_moderator` - Whether a moderator triggered the roll
    /// - `guard` - Precondition the stored row must still satisfy
    /// - `rolled_at` - Time of the roll
    ///
    /// # Returns
    /// - `Ok(true)` - Roll recorded
    /// - `Ok(false)` - Item missing or guard not satisfied
    /// - `Err(DbErr)` - Database error during update
    pub async fn mark_rolled(
        &self,
        guild_id: u64,
        slug: &str,
        winner_id: u64,
        rolled_by_moderator: bool,
        guard: RollGuard,
        rolled_at: DateTime<Utc>,
    ) -> Result<bool, DbErr> {
        use entity::loot_item::Column;

        let query = entity::prelude::LootItem::update_many()
            .col_expr(Column::Status, Expr::value(RollStatus::Rolled.as_str()))
            .col_expr(Column::WinnerId, Expr::value(winner_id.to_string()))
            .col_expr(Column::RolledAt, Expr::value(rolled_at))
            .col_expr(Column::RolledByModerator, Expr::value(rolled_by_moderator))
            .filter(Column::GuildId.eq(guild_id.to_string()))
            .filter(Column::Slug.eq(slug));

        let query = match guard {
            RollGuard::Open => query.filter(Column::Status.eq(RollStatus::Open.as_str())),
            RollGuard::Winner(Some(previous)) => {
                query.filter(Column::WinnerId.eq(previous.to_string()))
            }
            RollGuard::Winner(None) => query.filter(Column::WinnerId.is_null()),
            RollGuard::Any => query,
        };

        let result = query.exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Checks whether an item has a recorded winner.
    ///
    /// # Returns
    /// - `Ok(true)` - Item exists and is rolled
    /// - `Ok(false)` - Item is open or does not exist
    /// - `Err(DbErr)` - Database error during query
    pub async fn is_rolled(&self, guild_id: u64, slug: &str) -> Result<bool, DbErr> {
        Ok(self
            .find(guild_id, slug)
            .await?
            .is_some_and(|item| item.status == RollStatus::Rolled.as_str()))
    }

    /// Deletes an open item that no longer has active votes.
    ///
    /// The vote check is a `NOT EXISTS` subquery inside the `DELETE`, so a vote inserted
    /// concurrently either lands before the delete (and the item survives) or after it (and
    /// re-registers the item).
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `slug` - Normalized item slug
    /// - `active_since` - Oldest vote creation time still considered active
    ///
    /// # Returns
    /// - `Ok(true)` - Item deleted
    /// - `Ok(false)` - Item missing, rolled, or still voted on
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_if_orphaned(
        &self,
        guild_id: u64,
        slug: &str,
        active_since: DateTime<Utc>,
    ) -> Result<bool, DbErr> {
        use entity::loot_item::Column;

        let guild = guild_id.to_string();
        let active_votes = Query::select()
            .column(entity::loot_vote::Column::Id)
            .from(entity::prelude::LootVote)
            .cond_where(crate::data::vote::active_vote_condition(&guild, active_since))
            .and_where(entity::loot_vote::Column::ItemSlug.eq(slug))
            .to_owned();

        let result = entity::prelude::LootItem::delete_many()
            .filter(Column::GuildId.eq(guild.as_str()))
            .filter(Column::Slug.eq(slug))
            .filter(Column::Status.eq(RollStatus::Open.as_str()))
            .filter(Condition::all().add(Expr::exists(active_votes)).not())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets every open item of a guild that has at least one active vote.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `active_since` - Oldest vote creation time still considered active
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Eligible items ordered by registration time
    /// - `Err(DbErr)` - Database error during query
    pub async fn list_open_with_votes(
        &self,
        guild_id: u64,
        active_since: DateTime<Utc>,
    ) -> Result<Vec<entity::loot_item::Model>, DbErr> {
        use entity::loot_item::Column;

        let guild = guild_id.to_string();
        let active_votes = Query::select()
            .column(entity::loot_vote::Column::Id)
            .from(entity::prelude::LootVote)
            .cond_where(crate::data::vote::active_vote_condition(&guild, active_since))
            .and_where(
                Expr::col((
                    entity::prelude::LootVote,
                    entity::loot_vote::Column::ItemSlug,
                ))
                .equals((entity::prelude::LootItem, Column::Slug)),
            )
            .to_owned();

        entity::prelude::LootItem::find()
            .filter(Column::GuildId.eq(guild.as_str()))
            .filter(Column::Status.eq(RollStatus::Open.as_str()))
            .filter(Expr::exists(active_votes))
            .order_by_asc(Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Deletes every item of a guild.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of items deleted
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_for_guild(&self, guild_id: u64) -> Result<u64, DbErr> {
        let result = entity::prelude::LootItem::delete_many()
            .filter(entity::loot_item::Column::GuildId.eq(guild_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
