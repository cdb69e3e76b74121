//! Allocation engine: draws, re-rolls and batch draws.
//!
//! Every draw reads the item, its active votes and the voters' win counts, ranks them, and
//! then records the result inside the same database transaction. The recording update is
//! guarded by the item state that was read (see [`RollGuard`]), so two rolls racing on one
//! item cannot both adjust the win ledger.

pub mod ranking;

use chrono::Utc;
use rand::seq::SliceRandom;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    config::LootPolicy,
    data::{item::LootItemRepository, vote::LootVoteRepository, win::LootWinRepository},
    error::{loot::LootError, AppError},
    model::{
        draw::{Candidate, DrawResult, RankedCandidate, RerollResult},
        item::{LootItem, RollGuard},
        vote::LootVote,
    },
    util::slug::normalize_slug,
};

use self::ranking::rank_candidates;

pub struct AllocationService<'a> {
    db: &'a DatabaseConnection,
    policy: &'a LootPolicy,
}

impl<'a> AllocationService<'a> {
    pub fn new(db: &'a DatabaseConnection, policy: &'a LootPolicy) -> Self {
        Self { db, policy }
    }

    /// Draws a winner for an open item.
    ///
    /// Increments the winner's win count and marks the item rolled in one transaction. Votes
    /// are left in place so the item can be re-rolled.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `item` - Item slug or any spelling of its name
    /// - `by_moderator` - Whether a moderator triggered the draw
    ///
    /// # Returns
    /// - `Ok(DrawResult)` - Full ranking and the winner
    /// - `Err(AppError::LootErr(NoCandidates))` - Item unknown or without active votes
    /// - `Err(AppError::LootErr(AlreadyRolled))` - Item already has a winner
    /// - `Err(AppError::LootErr(ConcurrentRoll))` - Another roll recorded first
    /// - `Err(AppError::DbErr)` - Storage failure, nothing was recorded
    pub async fn draw(
        &self,
        guild_id: u64,
        item: &str,
        by_moderator: bool,
    ) -> Result<DrawResult, AppError> {
        let slug = normalize_slug(item);

        let txn = self.db.begin().await?;

        let item = self.load_item(&txn, guild_id, &slug).await?;
        if item.is_rolled() {
            return Err(LootError::AlreadyRolled(item.display_name).into());
        }

        let ranking = self.rank(&txn, &item).await?;
        let winner = Self::winner_of(&ranking, &item)?;

        let applied = LootItemRepository::new(&txn)
            .mark_rolled(
                guild_id,
                &slug,
                winner,
                by_moderator,
                RollGuard::Open,
                Utc::now(),
            )
            .await?;
        if !applied {
            return Err(LootError::ConcurrentRoll(item.display_name).into());
        }

        LootWinRepository::new(&txn)
            .increment(guild_id, winner, 1)
            .await?;

        txn.commit().await?;

        tracing::info!(
            guild_id,
            slug = %slug,
            winner_id = winner,
            candidates = ranking.len(),
            by_moderator,
            "Item rolled"
        );

        Ok(DrawResult {
            guild_id,
            slug,
            display_name: item.display_name,
            ranking,
            winner_id: winner,
        })
    }

    /// Re-runs the draw for an item.
    ///
    /// Valid for open and rolled items. When the winner changes, one win moves from the
    /// previous winner (floored at zero) to the new one; when it does not, only the roll
    /// timestamp is refreshed.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `item` - Item slug or any spelling of its name
    /// - `by_moderator` - Whether a moderator triggered the re-roll
    ///
    /// # Returns
    /// - `Ok(RerollResult)` - New ranking, winner and whether it changed
    /// - `Err(AppError::LootErr(NoCandidates))` - Item unknown or without active votes
    /// - `Err(AppError::LootErr(RerollWindowElapsed))` - Item was rolled too long ago
    /// - `Err(AppError::LootErr(ConcurrentRoll))` - Another roll recorded first
    /// - `Err(AppError::DbErr)` - Storage failure, nothing was recorded
    pub async fn reroll(
        &self,
        guild_id: u64,
        item: &str,
        by_moderator: bool,
    ) -> Result<RerollResult, AppError> {
        let slug = normalize_slug(item);
        let now = Utc::now();

        let txn = self.db.begin().await?;

        let item = self.load_item(&txn, guild_id, &slug).await?;

        if let (Some(window), Some(rolled_at)) = (self.policy.reroll_window, item.rolled_at) {
            // A deadline past the representable range never elapses.
            let elapsed = rolled_at
                .checked_add_signed(window)
                .is_some_and(|deadline| deadline < now);
            if item.is_rolled() && elapsed {
                return Err(LootError::RerollWindowElapsed(item.display_name).into());
            }
        }

        let ranking = self.rank(&txn, &item).await?;
        let winner = Self::winner_of(&ranking, &item)?;
        let previous = item.winner_id;

        let applied = LootItemRepository::new(&txn)
            .mark_rolled(
                guild_id,
                &slug,
                winner,
                by_moderator,
                RollGuard::Winner(previous),
                now,
            )
            .await?;
        if !applied {
            return Err(LootError::ConcurrentRoll(item.display_name).into());
        }

        let winner_changed = previous != Some(winner);
        if winner_changed {
            let wins = LootWinRepository::new(&txn);
            if let Some(previous) = previous {
                wins.decrement(guild_id, previous, 1).await?;
            }
            wins.increment(guild_id, winner, 1).await?;
        }

        txn.commit().await?;

        tracing::info!(
            guild_id,
            slug = %slug,
            previous_winner_id = ?previous,
            winner_id = winner,
            winner_changed,
            by_moderator,
            "Item re-rolled"
        );

        Ok(RerollResult {
            draw: DrawResult {
                guild_id,
                slug,
                display_name: item.display_name,
                ranking,
                winner_id: winner,
            },
            previous_winner_id: previous,
            winner_changed,
        })
    }

    /// Draws every open item of a guild that has active votes.
    ///
    /// Items are processed in random order, each in its own transaction. Items that lose
    /// their votes or get rolled while the batch runs are skipped.
    ///
    /// # Returns
    /// - `Ok(Vec<DrawResult>)` - One result per item drawn
    /// - `Err(AppError)` - Storage failure; items drawn before it stay drawn
    pub async fn draw_all_open(
        &self,
        guild_id: u64,
        by_moderator: bool,
    ) -> Result<Vec<DrawResult>, AppError> {
        let mut slugs: Vec<String> = LootItemRepository::new(self.db)
            .list_open_with_votes(guild_id, self.policy.vote_window.cutoff(Utc::now()))
            .await?
            .into_iter()
            .map(|item| item.slug)
            .collect();

        slugs.shuffle(&mut rand::rng());

        let mut results = Vec::with_capacity(slugs.len());
        for slug in slugs {
            match self.draw(guild_id, &slug, by_moderator).await {
                Ok(result) => results.push(result),
                Err(AppError::LootErr(
                    err @ (LootError::NoCandidates(_)
                    | LootError::AlreadyRolled(_)
                    | LootError::ConcurrentRoll(_)),
                )) => {
                    tracing::debug!(guild_id, slug = %slug, "Skipping item in batch draw: {}", err);
                }
                Err(err) => return Err(err),
            }
        }

        tracing::info!(guild_id, drawn = results.len(), "Batch draw finished");

        Ok(results)
    }

    async fn load_item<C: ConnectionTrait>(
        &self,
        db: &C,
        guild_id: u64,
        slug: &str,
    ) -> Result<LootItem, AppError> {
        let item = LootItemRepository::new(db)
            .find(guild_id, slug)
            .await?
            .ok_or_else(|| LootError::NoCandidates(slug.to_string()))?;

        LootItem::from_entity(item)
    }

    /// Loads the item's active votes with the voters' win counts and ranks them.
    async fn rank<C: ConnectionTrait>(
        &self,
        db: &C,
        item: &LootItem,
    ) -> Result<Vec<RankedCandidate>, AppError> {
        let votes = LootVoteRepository::new(db)
            .list_active_for_item(
                item.guild_id,
                &item.slug,
                self.policy.vote_window.cutoff(Utc::now()),
            )
            .await?
            .into_iter()
            .map(LootVote::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        let user_ids: Vec<u64> = votes.iter().map(|v| v.user_id).collect();
        let wins = LootWinRepository::new(db)
            .get_many(item.guild_id, &user_ids)
            .await?;

        let candidates = votes
            .into_iter()
            .map(|vote| Candidate {
                user_id: vote.user_id,
                reason: vote.reason,
                wins: wins
                    .get(&vote.user_id.to_string())
                    .map(|w| (*w).max(0) as u32)
                    .unwrap_or(0),
            })
            .collect();

        Ok(rank_candidates(
            candidates,
            self.policy.draw_max,
            &mut rand::rng(),
        ))
    }

    fn winner_of(ranking: &[RankedCandidate], item: &LootItem) -> Result<u64, AppError> {
        ranking
            .first()
            .map(|c| c.user_id)
            .ok_or_else(|| LootError::NoCandidates(item.display_name.clone()).into())
    }
}
