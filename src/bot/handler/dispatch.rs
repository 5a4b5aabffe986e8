//! Routing of parsed events to the services.
//!
//! `dispatch` is the single entry point from the Discord handler into the application.
//! It enforces the Manage Messages requirement of staff commands, calls the matching
//! service operation and turns the outcome into the ephemeral reply text.

use chrono::Duration;

use crate::{
    error::{giveaway::GiveawayError, AppError},
    model::{
        event::{Actor, BotEvent, ButtonPress, Command},
        giveaway::{mention_list, StartGiveawayParam},
        log::LogLevel,
    },
    state::AppState,
};

/// Number of entries shown by the `logs` command.
const LOGS_REPLY_ENTRIES: usize = 10;
/// Leaves headroom under Discord's 2000 character message limit.
const MAX_REPLY_LENGTH: usize = 1900;

const INACTIVE_GIVEAWAY: &str = "This giveaway has ended or is no longer active.";
const MISSING_PERMISSION: &str = "You do not have permission to use this command!";

/// Handles a parsed event on behalf of `actor`.
///
/// # Arguments
/// - `state` - Shared application state
/// - `event` - Parsed interaction
/// - `actor` - Member that triggered the interaction
///
/// # Returns
/// - `Ok(String)` - Reply shown to the member
/// - `Err(AppError)` - Failure; `user_message()` gives the reply text
pub async fn dispatch(state: &AppState, event: BotEvent, actor: Actor) -> Result<String, AppError> {
    match event {
        BotEvent::EnterPressed(press) => enter(state, press).await,
        BotEvent::LeavePressed(press) => leave(state, press).await,
        BotEvent::CommandInvoked(command) => {
            if command.requires_manage_messages() && !actor.can_manage_messages {
                return Err(AppError::BadRequest(MISSING_PERMISSION.to_string()));
            }
            run_command(state, command, actor).await
        }
    }
}

async fn enter(state: &AppState, press: ButtonPress) -> Result<String, AppError> {
    let id = state
        .giveaways
        .find_by_announcement(press.message_id)
        .await
        .ok_or_else(|| AppError::BadRequest(INACTIVE_GIVEAWAY.to_string()))?;

    state
        .giveaways
        .enter(id, press.user_id)
        .await
        .map_err(button_error)?;

    Ok("You have been entered into the giveaway!".to_string())
}

async fn leave(state: &AppState, press: ButtonPress) -> Result<String, AppError> {
    let id = state
        .giveaways
        .find_by_announcement(press.message_id)
        .await
        .ok_or_else(|| AppError::BadRequest(INACTIVE_GIVEAWAY.to_string()))?;

    state
        .giveaways
        .leave(id, press.user_id)
        .await
        .map_err(button_error)?;

    Ok("You have been removed from the giveaway.".to_string())
}

/// A giveaway resolved between lookup and enrollment reads as inactive to the presser.
fn button_error(err: GiveawayError) -> AppError {
    match err {
        GiveawayError::NotFound => AppError::BadRequest(INACTIVE_GIVEAWAY.to_string()),
        err => err.into(),
    }
}

async fn run_command(state: &AppState, command: Command, actor: Actor) -> Result<String, AppError> {
    match command {
        Command::GiveawayStart {
            prize,
            duration_minutes,
            winners,
        } => {
            let guild_id = actor.guild_id.ok_or_else(|| {
                AppError::BadRequest("This command can only be used in a server.".to_string())
            })?;
            let duration = Duration::try_minutes(duration_minutes).ok_or_else(|| {
                GiveawayError::InvalidParameters("Duration is too long".to_string())
            })?;

            let record = state
                .giveaways
                .start(StartGiveawayParam {
                    prize,
                    winner_count: winners,
                    duration,
                    host_id: actor.user_id,
                    guild_id,
                })
                .await?;

            Ok(format!(
                "Giveaway started! Message ID: {}",
                record.announcement.message_id
            ))
        }
        Command::GiveawayEnd { message_id } => {
            state.giveaways.end(message_id).await?;
            Ok("Giveaway ended!".to_string())
        }
        Command::GiveawayReroll { message_id } => {
            let winners = state.giveaways.reroll(message_id).await?;
            Ok(format!("Rerolled winners: {}", mention_list(&winners)))
        }
        Command::Logs => Ok(recent_logs_reply(state)),
        Command::KeyGenerate { key_type, amount } => {
            let keys = state.product_keys.generate(&key_type, amount).await?;
            state.notifier.record(
                LogLevel::Info,
                &format!(
                    "<@{}> generated {} **{}** key(s)",
                    actor.user_id,
                    keys.len(),
                    keys[0].key_type
                ),
            );

            let listing = keys
                .iter()
                .map(|key| key.key.as_str())
                .collect::<Vec<_>>()
                .join("\n");
            Ok(format!(
                "Generated {} **{}** key(s):\n```\n{}\n```",
                keys.len(),
                keys[0].key_type,
                listing
            ))
        }
        Command::KeyCheck { key } => {
            let record = state.product_keys.validate(&key).await?;
            Ok(format!(
                "✅ Valid **{}** key, not yet redeemed.",
                record.key_type
            ))
        }
        Command::KeyRedeem { key } => {
            let record = state.product_keys.redeem(&key, actor.user_id).await?;
            state.notifier.record(
                LogLevel::Info,
                &format!(
                    "<@{}> redeemed a **{}** key",
                    actor.user_id, record.key_type
                ),
            );
            Ok(format!("Key redeemed! You unlocked **{}**.", record.key_type))
        }
    }
}

/// Formats the latest log entries, newest first, within the reply length limit.
fn recent_logs_reply(state: &AppState) -> String {
    let entries = state.recent_logs.latest(LOGS_REPLY_ENTRIES);
    if entries.is_empty() {
        return "No log entries yet.".to_string();
    }

    let mut reply = String::from("**Recent log entries**");
    for entry in entries {
        let line = format!(
            "\n<t:{}:T> `{}` {}",
            entry.timestamp.timestamp(),
            entry.level,
            entry.message
        );
        if reply.len() + line.len() > MAX_REPLY_LENGTH {
            break;
        }
        reply.push_str(&line);
    }

    reply
}
