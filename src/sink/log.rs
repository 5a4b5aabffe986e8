use dioxus_logger::tracing;

use crate::model::log::LogLevel;

use super::{discord::DiscordLogSink, recent::RecentLogs, NotificationSink};

/// Notification sink used by the running bot.
///
/// Every record is traced, kept in the recent-log buffer and, when a log channel is
/// configured, forwarded there without waiting for delivery.
pub struct EventLog {
    recent: RecentLogs,
    channel: Option<DiscordLogSink>,
}

impl EventLog {
    pub fn new(recent: RecentLogs, channel: Option<DiscordLogSink>) -> Self {
        Self { recent, channel }
    }
}

impl NotificationSink for EventLog {
    fn record(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Info => tracing::info!("{}", message),
            LogLevel::Warn => tracing::warn!("{}", message),
            LogLevel::Error => tracing::error!("{}", message),
        }

        self.recent.push(level, message);

        if let Some(channel) = &self.channel {
            channel.forward(level, message);
        }
    }
}
