//! Slash command definitions.
//!
//! Commands are registered per guild on every `ready` so definition changes show up
//! without waiting for global command propagation.

use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption, Permissions};

pub const GIVEAWAY_START: &str = "giveaway_start";
pub const GIVEAWAY_END: &str = "giveaway_end";
pub const GIVEAWAY_REROLL: &str = "giveaway_reroll";
pub const LOGS: &str = "logs";
pub const KEY_GENERATE: &str = "key_generate";
pub const KEY_CHECK: &str = "key_check";
pub const KEY_REDEEM: &str = "key_redeem";

/// Bounds on `giveaway_start`, keeping the congratulation message within one Discord
/// message.
pub const MAX_WINNERS: u64 = 20;
pub const MAX_PRIZE_LENGTH: u16 = 256;

/// Builds every slash command the bot handles.
///
/// Staff commands default to members with Manage Messages. Discord lets server admins
/// override these defaults, so the interaction handler checks the permission again.
///
/// # Returns
/// - `Vec<CreateCommand>` - Command definitions ready for registration
pub fn all_commands() -> Vec<CreateCommand> {
    vec![
        CreateCommand::new(GIVEAWAY_START)
            .description("Start a new giveaway")
            .default_member_permissions(Permissions::MANAGE_MESSAGES)
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "prize",
                    "The prize for the giveaway",
                )
                .required(true)
                .max_length(MAX_PRIZE_LENGTH),
            )
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::Integer,
                    "duration",
                    "Duration in minutes",
                )
                .required(true)
                .min_int_value(1),
            )
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::Integer,
                    "winners",
                    "Number of winners (default: 1)",
                )
                .required(false)
                .min_int_value(1)
                .max_int_value(MAX_WINNERS),
            ),
        CreateCommand::new(GIVEAWAY_END)
            .description("End a giveaway early")
            .default_member_permissions(Permissions::MANAGE_MESSAGES)
            .add_option(message_id_option()),
        CreateCommand::new(GIVEAWAY_REROLL)
            .description("Reroll a giveaway winner")
            .default_member_permissions(Permissions::MANAGE_MESSAGES)
            .add_option(message_id_option()),
        CreateCommand::new(LOGS)
            .description("Show the most recent bot log entries")
            .default_member_permissions(Permissions::MANAGE_MESSAGES),
        CreateCommand::new(KEY_GENERATE)
            .description("Generate product keys")
            .default_member_permissions(Permissions::MANAGE_MESSAGES)
            .add_option(
                CreateCommandOption::new(CommandOptionType::String, "type", "Product type")
                    .required(true),
            )
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::Integer,
                    "amount",
                    "Number of keys to generate (default: 1)",
                )
                .required(false)
                .min_int_value(1)
                .max_int_value(50),
            ),
        CreateCommand::new(KEY_CHECK)
            .description("Check whether a product key is valid")
            .add_option(
                CreateCommandOption::new(CommandOptionType::String, "key", "The product key")
                    .required(true),
            ),
        CreateCommand::new(KEY_REDEEM)
            .description("Redeem a product key")
            .add_option(
                CreateCommandOption::new(CommandOptionType::String, "key", "The product key")
                    .required(true),
            ),
    ]
}

fn message_id_option() -> CreateCommandOption {
    CreateCommandOption::new(
        CommandOptionType::String,
        "message_id",
        "The message ID of the giveaway",
    )
    .required(true)
}
