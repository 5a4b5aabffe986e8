use crate::data::giveaway::GiveawayStore;
use crate::model::giveaway::{AnnouncementRef, CreateGiveawayParam, GiveawayState};
use chrono::{Duration, Utc};

mod create;
mod find_by_announcement;
mod remove;

/// Builds creation parameters for a giveaway announced in channel 10 with the given
/// message ID.
fn create_param(message_id: u64, prize: &str) -> CreateGiveawayParam {
    CreateGiveawayParam {
        announcement: AnnouncementRef {
            channel_id: 10,
            message_id,
        },
        guild_id: 1,
        prize: prize.to_string(),
        winner_count: 1,
        end_at: Utc::now() + Duration::minutes(10),
        host_id: 99,
    }
}
