use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents};

use crate::{
    bot::handler::Handler, catalog::ItemCatalog, config::Config, error::AppError,
};

/// Builds the Discord client with the loot event handler.
///
/// The client is returned unstarted so the caller can grab its shard manager for shutdown
/// before calling `Client::start`, which blocks until the bot disconnects.
///
/// # Arguments
/// - `config` - Application configuration holding the bot token and loot policy
/// - `db` - Database connection for the handler to use
/// - `catalog` - Item names offered as autocomplete suggestions
///
/// # Returns
/// - `Ok(Client)` - Configured client ready to start
/// - `Err(AppError)` - Client construction failed
pub async fn init_bot(
    config: &Config,
    db: DatabaseConnection,
    catalog: ItemCatalog,
) -> Result<Client, AppError> {
    let intents = GatewayIntents::GUILDS;

    let handler = Handler::new(db, config.loot_policy(), catalog);

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    Ok(client)
}

/// Runs the bot until it disconnects or is shut down.
pub async fn start_bot(client: &mut Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
