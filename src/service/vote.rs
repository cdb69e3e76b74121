use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{item::LootItemRepository, vote::LootVoteRepository},
    error::{loot::LootError, AppError},
    model::{
        item::LootItem,
        reason::PriorityReason,
        vote::{ActiveVote, LootVote, SubmitVoteOutcome, SubmitVoteParam, UserVote, WithdrawOutcome},
        window::VoteWindow,
    },
    util::slug::{display_name, normalize_slug},
};

pub struct VoteService<'a> {
    db: &'a DatabaseConnection,
    window: VoteWindow,
}

impl<'a> VoteService<'a> {
    pub fn new(db: &'a DatabaseConnection, window: VoteWindow) -> Self {
        Self { db, window }
    }

    /// Records a user's demand for an item.
    ///
    /// Normalises the item name, registers the item on first sight and inserts the vote in
    /// one transaction. When the vote is rejected as a duplicate the transaction is dropped,
    /// so a freshly registered item does not outlive the failed vote.
    ///
    /// # Arguments
    /// - `param` - Guild, user and the raw item name and reason
    ///
    /// # Returns
    /// - `Ok(SubmitVoteOutcome)` - Vote accepted, with the canonical item
    /// - `Err(AppError::LootErr(InvalidReason))` - Reason not recognised
    /// - `Err(AppError::LootErr(InvalidItemName))` - Name has no letters or digits
    /// - `Err(AppError::LootErr(DuplicateVote))` - User already has an active vote on the item
    /// - `Err(AppError::DbErr)` - Storage failure, nothing was written
    pub async fn submit_vote(&self, param: SubmitVoteParam) -> Result<SubmitVoteOutcome, AppError> {
        let reason: PriorityReason = param.reason.parse()?;

        let slug = normalize_slug(&param.item_name);
        if slug.is_empty() {
            return Err(LootError::InvalidItemName(param.item_name).into());
        }

        let txn = self.db.begin().await?;
        let item_repo = LootItemRepository::new(&txn);
        let vote_repo = LootVoteRepository::new(&txn);

        let registered = item_repo
            .register_if_missing(param.guild_id, &slug, &display_name(&param.item_name))
            .await?;

        let now = Utc::now();
        let inserted = vote_repo
            .insert_if_no_active(
                param.guild_id,
                param.user_id,
                &slug,
                reason,
                now,
                self.window.cutoff(now),
            )
            .await?;

        if !inserted {
            return Err(LootError::DuplicateVote {
                user_id: param.user_id,
                slug,
            }
            .into());
        }

        let item = item_repo
            .find(param.guild_id, &slug)
            .await?
            .ok_or_else(|| LootError::NotFound(format!("Item '{}' not found", slug)))?;

        txn.commit().await?;

        tracing::debug!(
            guild_id = param.guild_id,
            user_id = param.user_id,
            slug = %slug,
            reason = %reason,
            registered,
            "Vote recorded"
        );

        Ok(SubmitVoteOutcome {
            accepted: true,
            item: LootItem::from_entity(item)?,
            reason,
        })
    }

    /// Removes the user's most recent active vote on an item.
    ///
    /// An open item left without active votes is deleted in the same transaction. Rolled
    /// items are kept regardless.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `user_id` - Discord user ID of the voter
    /// - `item` - Item slug or any spelling of its name
    ///
    /// # Returns
    /// - `Ok(WithdrawOutcome)` - Whether a vote and the item were removed
    /// - `Err(AppError::DbErr)` - Storage failure, nothing was removed
    pub async fn withdraw_vote(
        &self,
        guild_id: u64,
        user_id: u64,
        item: &str,
    ) -> Result<WithdrawOutcome, AppError> {
        let slug = normalize_slug(item);

        let txn = self.db.begin().await?;
        let active_since = self.window.cutoff(Utc::now());

        let removed = LootVoteRepository::new(&txn)
            .delete_latest_active(guild_id, user_id, &slug, active_since)
            .await?;

        let item_deleted = if removed {
            LootItemRepository::new(&txn)
                .delete_if_orphaned(guild_id, &slug, active_since)
                .await?
        } else {
            false
        };

        txn.commit().await?;

        tracing::debug!(
            guild_id,
            user_id,
            slug = %slug,
            removed,
            item_deleted,
            "Vote withdrawn"
        );

        Ok(WithdrawOutcome {
            removed,
            item_deleted,
        })
    }

    /// Gets the active votes on an item, oldest first.
    pub async fn list_active_votes_for_item(
        &self,
        guild_id: u64,
        item: &str,
    ) -> Result<Vec<ActiveVote>, AppError> {
        let votes = LootVoteRepository::new(self.db)
            .list_active_for_item(guild_id, &normalize_slug(item), self.window.cutoff(Utc::now()))
            .await?;

        votes
            .into_iter()
            .map(|vote| LootVote::from_entity(vote).map(ActiveVote::from))
            .collect()
    }

    /// Gets a user's active votes with the display name of each item.
    ///
    /// # Returns
    /// - `Ok(Vec<UserVote>)` - Active votes, oldest first
    /// - `Err(AppError)` - Storage failure or unreadable stored row
    pub async fn list_user_active_votes(
        &self,
        guild_id: u64,
        user_id: u64,
    ) -> Result<Vec<UserVote>, AppError> {
        let votes = LootVoteRepository::new(self.db)
            .list_active_for_user(guild_id, user_id, self.window.cutoff(Utc::now()))
            .await?;

        let slugs: Vec<String> = votes.iter().map(|v| v.item_slug.clone()).collect();
        let names: HashMap<String, String> = LootItemRepository::new(self.db)
            .find_many(guild_id, slugs)
            .await?
            .into_iter()
            .map(|item| (item.slug, item.display_name))
            .collect();

        votes
            .into_iter()
            .map(|vote| {
                let vote = LootVote::from_entity(vote)?;
                let display_name = names
                    .get(&vote.item_slug)
                    .cloned()
                    .unwrap_or_else(|| vote.item_slug.clone());

                Ok(UserVote {
                    item_slug: vote.item_slug,
                    display_name,
                    reason: vote.reason,
                })
            })
            .collect()
    }
}
