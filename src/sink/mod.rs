//! Delivery collaborators consumed by the giveaway engine.
//!
//! The engine never talks to Discord directly. Announcements go through an
//! `AnnouncementSink` and audit events through a `NotificationSink`, so delivery can
//! fail independently of engine correctness and both can be replaced in tests.
//!
//! - `discord` - Serenity-backed announcement sink and log-channel forwarder
//! - `log` - Notification sink writing to tracing, the recent-log buffer and the log channel
//! - `recent` - Ring buffer of the most recent log entries

pub mod discord;
pub mod log;
pub mod recent;


use serenity::async_trait;

use crate::error::sink::SinkError;
use crate::model::{
    giveaway::{Announcement, AnnouncementRef},
    log::LogLevel,
};

/// Delivers and edits the public giveaway announcement.
#[async_trait]
pub trait AnnouncementSink: Send + Sync {
    /// Posts a new announcement to the configured giveaway channel.
    ///
    /// # Returns
    /// - `Ok(AnnouncementRef)` - Where the announcement was posted
    /// - `Err(SinkError::Unavailable)` - No giveaway channel is configured
    /// - `Err(SinkError)` - Delivery failed
    async fn publish(&self, announcement: &Announcement) -> Result<AnnouncementRef, SinkError>;

    /// Replaces the content of an existing announcement.
    async fn update(
        &self,
        at: AnnouncementRef,
        announcement: &Announcement,
    ) -> Result<(), SinkError>;

    /// Posts a plain message to a channel.
    async fn post(&self, channel_id: u64, content: &str) -> Result<(), SinkError>;
}

/// Receives audit events. Fire-and-forget: implementations must not block the caller.
pub trait NotificationSink: Send + Sync {
    fn record(&self, level: LogLevel, message: &str);
}
