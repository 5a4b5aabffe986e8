use crate::data::resolved_giveaway::ResolvedGiveawayCache;
use crate::model::giveaway::{AnnouncementRef, GiveawayId, ResolvedGiveaway};
use chrono::{DateTime, Duration, Utc};

mod find_by_announcement;
mod push;

fn snapshot(id: u64, message_id: u64, resolved_at: DateTime<Utc>) -> ResolvedGiveaway {
    ResolvedGiveaway {
        id: GiveawayId::new(id),
        announcement: AnnouncementRef {
            channel_id: 10,
            message_id,
        },
        prize: "Gift Card".to_string(),
        winner_count: 1,
        host_id: 99,
        participants: vec![1, 2, 3],
        winners: vec![2],
        resolved_at,
    }
}
