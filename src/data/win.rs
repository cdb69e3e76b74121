//! Win ledger repository for database operations.
//!
//! This module provides the `LootWinRepository` for the `loot_win` table. Win counts are
//! changed with arithmetic inside SQL (`wins = wins + n`, floored at zero on decrement) so
//! concurrent adjustments never lose updates. Counts are kept within `0..=MAX_WINS`.

use std::collections::HashMap;

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

/// Largest win count the ledger stores; increments saturate here.
pub const MAX_WINS: i32 = i32::MAX;

/// Converts an adjustment amount to the column type, saturating at [`MAX_WINS`].
fn to_wins(amount: u32) -> i32 {
    i32::try_from(amount).unwrap_or(MAX_WINS)
}

/// Repository providing database operations for the win ledger.
pub struct LootWinRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LootWinRepository<'a, C> {
    /// Creates a new LootWinRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `LootWinRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Adds wins to a user, creating the record on first win.
    ///
    /// Upserts with `ON CONFLICT (guild_id, user_id) DO UPDATE SET wins = loot_win.wins + n`,
    /// saturating at [`MAX_WINS`] instead of overflowing.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `user_id` - Discord user ID
    /// - `by` - Number of wins to add
    ///
    /// # Returns
    /// - `Ok(())` - Wins added
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn increment(&self, guild_id: u64, user_id: u64, by: u32) -> Result<(), DbErr> {
        use entity::loot_win::Column;

        let by = to_wins(by);
        let stored = || Expr::col((entity::prelude::LootWin, Column::Wins));

        entity::prelude::LootWin::insert(entity::loot_win::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            user_id: ActiveValue::Set(user_id.to_string()),
            wins: ActiveValue::Set(by),
            updated_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::columns([Column::GuildId, Column::UserId])
                .value(
                    Column::Wins,
                    Expr::expr(
                        Expr::case(stored().gt(MAX_WINS - by), Expr::value(MAX_WINS))
                            .finally(stored().add(by)),
                    ),
                )
                .update_column(Column::UpdatedAt)
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Removes wins from a user, flooring at zero.
    ///
    /// A user without a record is left without one.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `user_id` - Discord user ID
    /// - `by` - Number of wins to remove
    ///
    /// # Returns
    /// - `Ok(())` - Wins removed or already zero
    /// - `Err(DbErr)` - Database error during update
    pub async fn decrement(&self, guild_id: u64, user_id: u64, by: u32) -> Result<(), DbErr> {
        use entity::loot_win::Column;

        let by = to_wins(by);

        entity::prelude::LootWin::update_many()
            .col_expr(
                Column::Wins,
                Expr::expr(
                    Expr::case(Expr::col(Column::Wins).gt(by), Expr::col(Column::Wins).sub(by))
                        .finally(0),
                ),
            )
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(Column::GuildId.eq(guild_id.to_string()))
            .filter(Column::UserId.eq(user_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Gets a user's win record.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Record found
    /// - `Ok(None)` - User has never won in the guild
    /// - `Err(DbErr)` - Database error during query
    pub async fn get(
        &self,
        guild_id: u64,
        user_id: u64,
    ) -> Result<Option<entity::loot_win::Model>, DbErr> {
        entity::prelude::LootWin::find_by_id((guild_id.to_string(), user_id.to_string()))
            .one(self.db)
            .await
    }

    /// Gets win counts for several users at once.
    ///
    /// Users without a record are absent from the returned map.
    ///
    /// # Returns
    /// - `Ok(HashMap<String, i32>)` - Win counts keyed by stored user ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_many(
        &self,
        guild_id: u64,
        user_ids: &[u64],
    ) -> Result<HashMap<String, i32>, DbErr> {
        use entity::loot_win::Column;

        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let records = entity::prelude::LootWin::find()
            .filter(Column::GuildId.eq(guild_id.to_string()))
            .filter(Column::UserId.is_in(user_ids.iter().map(|id| id.to_string())))
            .all(self.db)
            .await?;

        Ok(records
            .into_iter()
            .map(|record| (record.user_id, record.wins))
            .collect())
    }

    /// Overwrites a user's win count.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `user_id` - Discord user ID
    /// - `wins` - New win count, saturated at [`MAX_WINS`]
    ///
    /// # Returns
    /// - `Ok(Model)` - The stored record
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn set(
        &self,
        guild_id: u64,
        user_id: u64,
        wins: u32,
    ) -> Result<entity::loot_win::Model, DbErr> {
        use entity::loot_win::Column;

        entity::prelude::LootWin::insert(entity::loot_win::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            user_id: ActiveValue::Set(user_id.to_string()),
            wins: ActiveValue::Set(to_wins(wins)),
            updated_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::columns([Column::GuildId, Column::UserId])
                .update_columns([Column::Wins, Column::UpdatedAt])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }

    /// Gets the users with the most wins in a guild.
    ///
    /// Ties are broken by user ID so the order is stable. Users at zero wins are omitted.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Up to `limit` records, most wins first
    /// - `Err(DbErr)` - Database error during query
    pub async fn leaderboard(
        &self,
        guild_id: u64,
        limit: u64,
    ) -> Result<Vec<entity::loot_win::Model>, DbErr> {
        use entity::loot_win::Column;

        entity::prelude::LootWin::find()
            .filter(Column::GuildId.eq(guild_id.to_string()))
            .filter(Column::Wins.gt(0))
            .order_by_desc(Column::Wins)
            .order_by_asc(Column::UserId)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Deletes every win record of a guild.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of records deleted
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_for_guild(&self, guild_id: u64) -> Result<u64, DbErr> {
        let result = entity::prelude::LootWin::delete_many()
            .filter(entity::loot_win::Column::GuildId.eq(guild_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
