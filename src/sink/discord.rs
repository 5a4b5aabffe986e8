//! Serenity-backed delivery collaborators.
//!
//! `DiscordAnnouncementSink` renders giveaway announcements as embeds with enter/leave
//! buttons in the configured giveaway channel. `DiscordLogSink` mirrors audit records
//! into the configured log channel.

use dioxus_logger::tracing;
use serenity::{
    all::{
        ChannelId, CreateEmbed, CreateEmbedFooter, CreateMessage, EditMessage, MessageId,
        Timestamp,
    },
    async_trait,
    http::Http,
};
use std::sync::Arc;

use crate::{
    bot::component::giveaway_buttons,
    error::sink::SinkError,
    model::{
        giveaway::{mention_list, Announcement, AnnouncementRef},
        log::LogLevel,
    },
};

use super::AnnouncementSink;

const OPEN_COLOR: u32 = 0x0099ff;
const ENDED_COLOR: u32 = 0xff0000;

/// Announcement sink posting to a single giveaway channel.
pub struct DiscordAnnouncementSink {
    /// Discord HTTP client for sending and editing messages
    http: Arc<Http>,
    /// Giveaway channel; `None` makes every publish fail with `SinkError::Unavailable`
    channel_id: Option<ChannelId>,
}

impl DiscordAnnouncementSink {
    /// Creates a new DiscordAnnouncementSink instance.
    ///
    /// # Arguments
    /// - `http` - Arc-wrapped Discord HTTP client for API requests
    /// - `channel_id` - Configured giveaway channel, if any
    ///
    /// # Returns
    /// - `DiscordAnnouncementSink` - New sink instance
    pub fn new(http: Arc<Http>, channel_id: Option<u64>) -> Self {
        Self {
            http,
            channel_id: channel_id.map(ChannelId::new),
        }
    }
}

#[async_trait]
impl AnnouncementSink for DiscordAnnouncementSink {
    async fn publish(&self, announcement: &Announcement) -> Result<AnnouncementRef, SinkError> {
        let channel_id = self.channel_id.ok_or(SinkError::Unavailable)?;

        let message = CreateMessage::new()
            .embed(build_announcement_embed(announcement))
            .components(vec![giveaway_buttons()]);

        let sent = channel_id.send_message(&self.http, message).await?;

        tracing::debug!(
            "Published giveaway announcement {} in channel {}",
            sent.id,
            sent.channel_id
        );

        Ok(AnnouncementRef {
            channel_id: sent.channel_id.get(),
            message_id: sent.id.get(),
        })
    }

    async fn update(
        &self,
        at: AnnouncementRef,
        announcement: &Announcement,
    ) -> Result<(), SinkError> {
        let components = match announcement {
            Announcement::Open { .. } => vec![giveaway_buttons()],
            // Remove the buttons once the giveaway is over
            Announcement::Ended { .. } => vec![],
        };

        let edit_builder = EditMessage::new()
            .embed(build_announcement_embed(announcement))
            .components(components);

        self.http
            .edit_message(
                ChannelId::new(at.channel_id),
                MessageId::new(at.message_id),
                &edit_builder,
                vec![],
            )
            .await?;

        Ok(())
    }

    async fn post(&self, channel_id: u64, content: &str) -> Result<(), SinkError> {
        ChannelId::new(channel_id)
            .send_message(&self.http, CreateMessage::new().content(content))
            .await?;

        Ok(())
    }
}

/// Builds the giveaway announcement embed.
///
/// Open giveaways show the prize, winner count, relative end time and current number of
/// participants. Ended giveaways show the host, total entries and the winners, or
/// "No participants" when nobody entered.
pub fn build_announcement_embed(announcement: &Announcement) -> CreateEmbed {
    match announcement {
        Announcement::Open {
            prize,
            winner_count,
            end_at,
            participant_count,
        } => CreateEmbed::new()
            .title("🎉 Giveaway! 🎉")
            .description(format!(
                "Press the button to enter!\n\n**Prize:** {}\n**Winners:** {}\n**Ends:** <t:{}:R>\n\n**Participants:** {}",
                prize,
                winner_count,
                end_at.timestamp(),
                participant_count
            ))
            .color(OPEN_COLOR)
            .timestamp(Timestamp::now()),
        Announcement::Ended {
            prize,
            host_id,
            entries,
            winners,
        } => {
            let winners_value = if winners.is_empty() {
                "No participants".to_string()
            } else {
                mention_list(winners)
            };

            CreateEmbed::new()
                .title("🎉 Giveaway Ended! 🎉")
                .description(format!(
                    "**Prize:** {}\n**Hosted by:** <@{}>\n**Entries:** {}",
                    prize, host_id, entries
                ))
                .field("Winner(s)", winners_value, false)
                .color(ENDED_COLOR)
                .timestamp(Timestamp::now())
        }
    }
}

/// Mirrors audit records into the configured log channel.
#[derive(Clone)]
pub struct DiscordLogSink {
    http: Arc<Http>,
    channel_id: ChannelId,
}

impl DiscordLogSink {
    pub fn new(http: Arc<Http>, channel_id: u64) -> Self {
        Self {
            http,
            channel_id: ChannelId::new(channel_id),
        }
    }

    /// Posts the record as an embed from a detached task.
    ///
    /// Returns immediately; delivery failures are only traced. Outside a tokio runtime
    /// the record is skipped.
    pub fn forward(&self, level: LogLevel, message: &str) {
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::debug!("No runtime available, skipping log channel delivery");
            return;
        };

        let http = self.http.clone();
        let channel_id = self.channel_id;
        let embed = CreateEmbed::new()
            .title(format!("Bot Log ({})", level))
            .description(message)
            .color(level.color())
            .footer(CreateEmbedFooter::new("Giveaway bot"))
            .timestamp(Timestamp::now());

        runtime.spawn(async move {
            if let Err(e) = channel_id
                .send_message(&http, CreateMessage::new().embed(embed))
                .await
            {
                tracing::warn!("Failed to deliver log entry to channel {}: {}", channel_id, e);
            }
        });
    }
}
