//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an open item with one mainspec vote per user.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Guild the item belongs to
/// - `slug` - Item slug
/// - `user_ids` - Users voting for the item
///
/// # Returns
/// - `Ok((item, votes))` - The created item and its votes in `user_ids` order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_item_with_votes(
    db: &DatabaseConnection,
    guild_id: &str,
    slug: &str,
    user_ids: &[&str],
) -> Result<(entity::loot_item::Model, Vec<entity::loot_vote::Model>), DbErr> {
    let item = crate::factory::loot_item::create_item(db, guild_id, slug).await?;

    let mut votes = Vec::with_capacity(user_ids.len());
    for user_id in user_ids {
        votes.push(crate::factory::loot_vote::create_vote(db, guild_id, user_id, slug).await?);
    }

    Ok((item, votes))
}
