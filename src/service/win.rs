use sea_orm::DatabaseConnection;

use crate::{
    data::win::{LootWinRepository, MAX_WINS},
    error::AppError,
    model::win::WinRecord,
};

pub struct WinLedgerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WinLedgerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds wins to a user.
    pub async fn increment(&self, guild_id: u64, user_id: u64, by: u32) -> Result<(), AppError> {
        LootWinRepository::new(self.db)
            .increment(guild_id, user_id, by)
            .await?;

        Ok(())
    }

    /// Removes wins from a user, never going below zero.
    pub async fn decrement(&self, guild_id: u64, user_id: u64, by: u32) -> Result<(), AppError> {
        LootWinRepository::new(self.db)
            .decrement(guild_id, user_id, by)
            .await?;

        Ok(())
    }

    /// Gets a user's win count, zero when the user has never won.
    pub async fn get(&self, guild_id: u64, user_id: u64) -> Result<u32, AppError> {
        let record = LootWinRepository::new(self.db).get(guild_id, user_id).await?;

        Ok(record.map(|r| r.wins.max(0) as u32).unwrap_or(0))
    }

    /// Overwrites a user's win count.
    ///
    /// Values are clamped to `0..=MAX_WINS`.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `user_id` - Discord user ID
    /// - `value` - Requested win count
    ///
    /// # Returns
    /// - `Ok(WinRecord)` - The stored record
    /// - `Err(AppError::DbErr)` - Database error during upsert
    pub async fn set_absolute(
        &self,
        guild_id: u64,
        user_id: u64,
        value: i64,
    ) -> Result<WinRecord, AppError> {
        let wins = value.clamp(0, i64::from(MAX_WINS)) as u32;

        let record = LootWinRepository::new(self.db)
            .set(guild_id, user_id, wins)
            .await?;

        tracing::info!(guild_id, user_id, wins, "Win count set");

        WinRecord::from_entity(record)
    }

    /// Gets the users with the most wins, best first.
    pub async fn leaderboard(&self, guild_id: u64, limit: u64) -> Result<Vec<WinRecord>, AppError> {
        LootWinRepository::new(self.db)
            .leaderboard(guild_id, limit)
            .await?
            .into_iter()
            .map(WinRecord::from_entity)
            .collect()
    }

    /// Resets every win count of a guild.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of win records removed
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn reset_community(&self, guild_id: u64) -> Result<u64, AppError> {
        let deleted = LootWinRepository::new(self.db)
            .delete_for_guild(guild_id)
            .await?;

        tracing::info!(guild_id, deleted, "Win ledger reset");

        Ok(deleted)
    }
}
