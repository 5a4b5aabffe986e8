//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway. The handler logs the connection and registers the
//! slash commands in the configured guild.

use dioxus_logger::tracing;
use serenity::all::{Context, GuildId, Ready};

use crate::{bot::command, model::log::LogLevel, state::AppState};

/// Handles the ready event when the bot connects to Discord.
///
/// Fires after every (re)connection, so command registration is repeated each time;
/// Discord replaces the guild's command set as a whole, which makes this idempotent.
///
/// # Arguments
/// - `state` - Shared application state
/// - `ctx` - Discord context for API requests
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(state: &AppState, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    let guild_id = GuildId::new(state.guild_id);
    match guild_id
        .set_commands(&ctx.http, command::all_commands())
        .await
    {
        Ok(commands) => {
            tracing::info!(
                "Registered {} slash command(s) in guild {}",
                commands.len(),
                guild_id
            );
        }
        Err(e) => {
            tracing::error!("Failed to register slash commands: {}", e);
            state.notifier.record(
                LogLevel::Error,
                &format!("Failed to register slash commands: {}", e),
            );
        }
    }
}
