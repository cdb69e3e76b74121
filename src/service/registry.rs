use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{item::LootItemRepository, vote::LootVoteRepository},
    error::{loot::LootError, AppError},
    model::{
        item::{ClearOutcome, LootItem, RollGuard},
        window::VoteWindow,
    },
};

pub struct ItemRegistryService<'a> {
    db: &'a DatabaseConnection,
    window: VoteWindow,
}

impl<'a> ItemRegistryService<'a> {
    pub fn new(db: &'a DatabaseConnection, window: VoteWindow) -> Self {
        Self { db, window }
    }

    /// Registers an open item unless the slug is already known.
    ///
    /// # Returns
    /// - `Ok(true)` - Item was created
    /// - `Ok(false)` - Item already existed, its display name is unchanged
    pub async fn register_if_missing(
        &self,
        guild_id: u64,
        slug: &str,
        display_name: &str,
    ) -> Result<bool, AppError> {
        Ok(LootItemRepository::new(self.db)
            .register_if_missing(guild_id, slug, display_name)
            .await?)
    }

    /// Gets an item by slug.
    pub async fn get(&self, guild_id: u64, slug: &str) -> Result<Option<LootItem>, AppError> {
        LootItemRepository::new(self.db)
            .find(guild_id, slug)
            .await?
            .map(LootItem::from_entity)
            .transpose()
    }

    /// Records a winner on an item regardless of its current status.
    ///
    /// # Returns
    /// - `Ok(LootItem)` - The updated item
    /// - `Err(AppError::LootErr(NotFound))` - No item registered under the slug
    pub async fn mark_rolled(
        &self,
        guild_id: u64,
        slug: &str,
        winner_id: u64,
        rolled_by_moderator: bool,
    ) -> Result<LootItem, AppError> {
        let repo = LootItemRepository::new(self.db);

        let applied = repo
            .mark_rolled(
                guild_id,
                slug,
                winner_id,
                rolled_by_moderator,
                RollGuard::Any,
                Utc::now(),
            )
            .await?;

        if !applied {
            return Err(LootError::NotFound(format!("Item '{}' not found", slug)).into());
        }

        let item = repo
            .find(guild_id, slug)
            .await?
            .ok_or_else(|| LootError::NotFound(format!("Item '{}' not found", slug)))?;

        LootItem::from_entity(item)
    }

    pub async fn is_rolled(&self, guild_id: u64, slug: &str) -> Result<bool, AppError> {
        Ok(LootItemRepository::new(self.db)
            .is_rolled(guild_id, slug)
            .await?)
    }

    /// Deletes an open item with no active votes.
    pub async fn delete_if_orphaned(&self, guild_id: u64, slug: &str) -> Result<bool, AppError> {
        Ok(LootItemRepository::new(self.db)
            .delete_if_orphaned(guild_id, slug, self.window.cutoff(Utc::now()))
            .await?)
    }

    /// Gets the open items of a guild that can be drawn.
    pub async fn list_open_with_votes(&self, guild_id: u64) -> Result<Vec<LootItem>, AppError> {
        LootItemRepository::new(self.db)
            .list_open_with_votes(guild_id, self.window.cutoff(Utc::now()))
            .await?
            .into_iter()
            .map(LootItem::from_entity)
            .collect()
    }

    /// Deletes every vote and item of a guild.
    ///
    /// Win counts are kept; resetting them is a separate operation on the win ledger.
    ///
    /// # Returns
    /// - `Ok(ClearOutcome)` - Number of votes and items removed
    /// - `Err(AppError::DbErr)` - Storage failure, nothing was removed
    pub async fn clear_community(&self, guild_id: u64) -> Result<ClearOutcome, AppError> {
        let txn = self.db.begin().await?;

        let votes_deleted = LootVoteRepository::new(&txn)
            .delete_for_guild(guild_id)
            .await?;
        let items_deleted = LootItemRepository::new(&txn)
            .delete_for_guild(guild_id)
            .await?;

        txn.commit().await?;

        tracing::info!(guild_id, votes_deleted, items_deleted, "Community loot cleared");

        Ok(ClearOutcome {
            votes_deleted,
            items_deleted,
        })
    }
}
