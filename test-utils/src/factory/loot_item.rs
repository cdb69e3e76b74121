//! Loot item factory for creating registry rows.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test loot items with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let item = LootItemFactory::new(&db, "1", "sword")
///     .display_name("Sword")
///     .rolled("100")
///     .build()
///     .await?;
/// ```
pub struct LootItemFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    slug: String,
    display_name: String,
    status: String,
    winner_id: Option<String>,
    rolled_at: Option<DateTime<Utc>>,
    rolled_by_moderator: bool,
}

impl<'a> LootItemFactory<'a> {
    /// Creates a new LootItemFactory with default values.
    ///
    /// Defaults:
    /// - display_name: the slug
    /// - status: `"open"` with no winner
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `guild_id` - Guild the item belongs to
    /// - `slug` - Normalized item slug
    pub fn new(db: &'a DatabaseConnection, guild_id: &str, slug: &str) -> Self {
        Self {
            db,
            guild_id: guild_id.to_string(),
            slug: slug.to_string(),
            display_name: slug.to_string(),
            status: "open".to_string(),
            winner_id: None,
            rolled_at: None,
            rolled_by_moderator: false,
        }
    }

    /// Sets the display name.
    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    /// Marks the item as rolled by a moderator with the given winner, rolled now.
    pub fn rolled(self, winner_id: impl Into<String>) -> Self {
        self.rolled_at(winner_id, Utc::now())
    }

    /// Marks the item as rolled with the given winner at a specific time.
    pub fn rolled_at(mut self, winner_id: impl Into<String>, rolled_at: DateTime<Utc>) -> Self {
        self.status = "rolled".to_string();
        self.winner_id = Some(winner_id.into());
        self.rolled_at = Some(rolled_at);
        self.rolled_by_moderator = true;
        self
    }

    /// Builds and inserts the item entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::loot_item::Model)` - Created item entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::loot_item::Model, DbErr> {
        entity::loot_item::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            slug: ActiveValue::Set(self.slug),
            display_name: ActiveValue::Set(self.display_name),
            status: ActiveValue::Set(self.status),
            winner_id: ActiveValue::Set(self.winner_id),
            rolled_at: ActiveValue::Set(self.rolled_at),
            rolled_by_moderator: ActiveValue::Set(self.rolled_by_moderator),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an open loot item with default values.
///
/// Shorthand for `LootItemFactory::new(db, guild_id, slug).build().await`.
pub async fn create_item(
    db: &DatabaseConnection,
    guild_id: &str,
    slug: &str,
) -> Result<entity::loot_item::Model, DbErr> {
    LootItemFactory::new(db, guild_id, slug).build().await
}
