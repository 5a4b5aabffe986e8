//! Parsing of raw interactions into `BotEvent`s.
//!
//! This is the only place that looks at custom IDs, command names and option names.
//! Everything downstream matches on the typed event.

use serenity::all::CommandDataOption;

use crate::{
    error::AppError,
    model::event::{BotEvent, ButtonPress, Command},
};

use super::{command, component};

/// Parses a button press on a giveaway announcement.
///
/// # Arguments
/// - `custom_id` - Custom ID of the pressed button
/// - `message_id` - Message the button is attached to
/// - `user_id` - Member who pressed the button
///
/// # Returns
/// - `Some(BotEvent)` - Enter or leave press
/// - `None` - The component does not belong to a giveaway
pub fn parse_component(custom_id: &str, message_id: u64, user_id: u64) -> Option<BotEvent> {
    let press = ButtonPress {
        message_id,
        user_id,
    };

    match custom_id {
        component::ENTER_BUTTON_ID => Some(BotEvent::EnterPressed(press)),
        component::LEAVE_BUTTON_ID => Some(BotEvent::LeavePressed(press)),
        _ => None,
    }
}

/// Parses a slash command invocation.
///
/// # Arguments
/// - `name` - Invoked command name
/// - `options` - Top-level options supplied with the command
///
/// # Returns
/// - `Ok(Command)` - Typed command with its arguments
/// - `Err(AppError::BadRequest)` - Unknown command, missing or malformed option
pub fn parse_command(name: &str, options: &[CommandDataOption]) -> Result<Command, AppError> {
    let command = match name {
        command::GIVEAWAY_START => Command::GiveawayStart {
            prize: required_string(options, "prize")?.to_string(),
            duration_minutes: required_integer(options, "duration")?,
            winners: integer(options, "winners").unwrap_or(1),
        },
        command::GIVEAWAY_END => Command::GiveawayEnd {
            message_id: message_id(options)?,
        },
        command::GIVEAWAY_REROLL => Command::GiveawayReroll {
            message_id: message_id(options)?,
        },
        command::LOGS => Command::Logs,
        command::KEY_GENERATE => Command::KeyGenerate {
            key_type: required_string(options, "type")?.to_string(),
            amount: integer(options, "amount").unwrap_or(1),
        },
        command::KEY_CHECK => Command::KeyCheck {
            key: required_string(options, "key")?.to_string(),
        },
        command::KEY_REDEEM => Command::KeyRedeem {
            key: required_string(options, "key")?.to_string(),
        },
        other => return Err(AppError::BadRequest(format!("Unknown command '{}'.", other))),
    };

    Ok(command)
}

fn find<'a>(options: &'a [CommandDataOption], name: &str) -> Option<&'a CommandDataOption> {
    options.iter().find(|option| option.name == name)
}

fn integer(options: &[CommandDataOption], name: &str) -> Option<i64> {
    find(options, name).and_then(|option| option.value.as_i64())
}

fn required_integer(options: &[CommandDataOption], name: &str) -> Result<i64, AppError> {
    integer(options, name)
        .ok_or_else(|| AppError::BadRequest(format!("Missing option '{}'.", name)))
}

fn required_string<'a>(options: &'a [CommandDataOption], name: &str) -> Result<&'a str, AppError> {
    find(options, name)
        .and_then(|option| option.value.as_str())
        .ok_or_else(|| AppError::BadRequest(format!("Missing option '{}'.", name)))
}

/// Reads the `message_id` option, given as a string since snowflakes overflow JS integers.
fn message_id(options: &[CommandDataOption]) -> Result<u64, AppError> {
    required_string(options, "message_id")?
        .trim()
        .parse::<u64>()
        .ok()
        .filter(|id| *id != 0)
        .ok_or_else(|| AppError::BadRequest("Invalid message ID.".to_string()))
}
