//! Win record factory for seeding the win ledger.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a win record with the given count.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Guild the record belongs to
/// - `user_id` - Discord user ID
/// - `wins` - Initial win count
///
/// # Returns
/// - `Ok(entity::loot_win::Model)` - Created win record
/// - `Err(DbErr)` - Database error during insert
pub async fn create_win(
    db: &DatabaseConnection,
    guild_id: &str,
    user_id: &str,
    wins: i32,
) -> Result<entity::loot_win::Model, DbErr> {
    entity::loot_win::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.to_string()),
        user_id: ActiveValue::Set(user_id.to_string()),
        wins: ActiveValue::Set(wins),
        updated_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
