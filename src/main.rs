mod bot;
mod config;
mod data;
mod error;
mod model;
mod scheduler;
mod service;
mod sink;
mod startup;
mod state;

use dioxus_logger::tracing;
use serenity::http::Http;
use std::sync::Arc;

use crate::{config::Config, error::AppError};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    dioxus_logger::initialize_default();

    let config = Config::from_env()?;

    // Sinks need an HTTP client before the gateway client exists
    let http = Arc::new(Http::new(&config.discord_token));
    let state = startup::build_state(&config, http).await?;
    let giveaways = state.giveaways.clone();

    tracing::info!("Starting giveaway bot");

    let client = bot::start::init_bot(&config, state).await?;
    let shard_manager = client.shard_manager.clone();

    let bot_task = tokio::spawn(async move {
        if let Err(e) = bot::start::start_bot(client).await {
            tracing::error!("Discord bot error: {}", e);
        }
    });

    tokio::select! {
        signal = tokio::signal::ctrl_c() => {
            if let Err(e) = signal {
                tracing::error!("Failed to listen for shutdown signal: {}", e);
            }
            tracing::info!("Shutting down");
            shard_manager.shutdown_all().await;
        }
        _ = bot_task => {
            tracing::warn!("Discord bot stopped");
        }
    }

    giveaways.shutdown().await;

    Ok(())
}
