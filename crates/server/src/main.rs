use anyhow::{Context, Result};
use dotenv::dotenv;
use foodhome_server::{bootstrap, handler::AppRouter, state::AppState};
use shared::{
    config::{Config, ConnectionManager},
    utils::init_logger,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    init_logger("server");

    let config = Config::init().context("Failed to load configuration")?;

    let pool = ConnectionManager::new_pool(&config.database_url)
        .await
        .context("Failed to connect to MySQL")?;

    let state = AppState::new(pool.clone(), &config.jwt_secret, &config.admin_api_key)
        .context("Failed to create AppState")?;

    if config.run_migrations {
        bootstrap::create_schema(&pool).await?;
        bootstrap::seed_sample_data(&pool, &state.hashing).await?;
    }

    println!("🚀 Server started successfully");

    AppRouter::serve(config.port, state)
        .await
        .context("Failed to start server")?;

    info!("Server stopped");

    Ok(())
}
