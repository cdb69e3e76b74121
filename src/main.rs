use lootboard::{bot, catalog::ItemCatalog, config::Config, error::AppError, startup};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let catalog = ItemCatalog::embedded()?;

    tracing::info!("Loaded {} catalog items", catalog.len());

    let mut client = bot::start::init_bot(&config, db.clone(), catalog).await?;

    // Stop the gateway connection on Ctrl-C so the pool can be closed cleanly
    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for shutdown signal: {}", e);
            return;
        }

        tracing::info!("Shutting down");
        shard_manager.shutdown_all().await;
    });

    if let Err(e) = bot::start::start_bot(&mut client).await {
        tracing::error!("Discord bot error: {}", e);
    }

    drop(client);

    startup::close_database(db).await
}
