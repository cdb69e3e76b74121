use sea_orm::DatabaseConnection;
use serenity::all::{Context, EventHandler, Interaction, Ready};
use serenity::async_trait;

use crate::{catalog::ItemCatalog, config::LootPolicy};

pub mod interaction;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub db: DatabaseConnection,
    pub policy: LootPolicy,
    pub catalog: ItemCatalog,
}

impl Handler {
    pub fn new(db: DatabaseConnection, policy: LootPolicy, catalog: ItemCatalog) -> Self {
        Self {
            db,
            policy,
            catalog,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called for slash commands, autocomplete requests and component clicks
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction(self, ctx, interaction).await;
    }
}
