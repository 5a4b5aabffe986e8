//! Typed inbound bot events.
//!
//! Every interaction the bot reacts to is parsed into a `BotEvent` before it reaches
//! any service, so dispatch is an exhaustive match instead of comparisons against
//! custom-id and command-name strings.

/// A button press on a giveaway announcement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonPress {
    /// Message ID of the announcement the button belongs to.
    pub message_id: u64,
    /// Discord user ID of the member who pressed the button.
    pub user_id: u64,
}

/// Slash commands understood by the bot, with their parsed arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    GiveawayStart {
        prize: String,
        duration_minutes: i64,
        winners: i64,
    },
    GiveawayEnd {
        message_id: u64,
    },
    GiveawayReroll {
        message_id: u64,
    },
    Logs,
    KeyGenerate {
        key_type: String,
        amount: i64,
    },
    KeyCheck {
        key: String,
    },
    KeyRedeem {
        key: String,
    },
}

impl Command {
    /// Whether the invoking member needs the Manage Messages permission.
    pub fn requires_manage_messages(&self) -> bool {
        match self {
            Self::GiveawayStart { .. }
            | Self::GiveawayEnd { .. }
            | Self::GiveawayReroll { .. }
            | Self::Logs
            | Self::KeyGenerate { .. } => true,
            Self::KeyCheck { .. } | Self::KeyRedeem { .. } => false,
        }
    }
}

/// Inbound interaction after parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotEvent {
    EnterPressed(ButtonPress),
    LeavePressed(ButtonPress),
    CommandInvoked(Command),
}

/// The member that triggered an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub user_id: u64,
    pub guild_id: Option<u64>,
    /// Whether the member holds the Manage Messages permission in the invoking channel.
    pub can_manage_messages: bool,
}
