//! Giveaway message and log text.
//!
//! Shared by resolution and reroll so both announce winners the same way.

use crate::model::giveaway::{mention_list, GiveawayResolution, ParticipantId};

/// Builds the public congratulation message.
///
/// # Arguments
/// - `prize` - Prize description
/// - `winners` - Winning participants, must not be empty
/// - `reroll` - Whether the winners come from a reroll
///
/// # Returns
/// - `String` - Message mentioning every winner
pub fn winner_message(prize: &str, winners: &[ParticipantId], reroll: bool) -> String {
    let suffix = if reroll { " (Reroll)" } else { "" };
    format!(
        "🎉 Congratulations {}! You won **{}**{}!",
        mention_list(winners),
        prize,
        suffix
    )
}

pub fn started_log(prize: &str, winner_count: u32, message_id: u64, host_id: u64) -> String {
    format!(
        "Giveaway started by <@{}>: **{}** ({} winner(s)), message ID {}",
        host_id, prize, winner_count, message_id
    )
}

pub fn ended_log(resolution: &GiveawayResolution) -> String {
    format!(
        "Giveaway ended: **{}** - {} winner(s) from {} entries, message ID {}",
        resolution.prize,
        resolution.winners.len(),
        resolution.entries,
        resolution.announcement.message_id
    )
}

pub fn reroll_log(prize: &str, winners: &[ParticipantId], message_id: u64) -> String {
    format!(
        "Giveaway rerolled: **{}** - new winner(s) {}, message ID {}",
        prize,
        mention_list(winners),
        message_id
    )
}
