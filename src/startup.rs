use chrono::Duration;
use dioxus_logger::tracing;
use serenity::http::Http;
use std::sync::Arc;

use crate::{
    config::Config,
    data::{
        giveaway::GiveawayStore, product_key::ProductKeyRepository,
        resolved_giveaway::ResolvedGiveawayCache,
    },
    error::{config::ConfigError, AppError},
    scheduler::resolution_timers::ResolutionTimers,
    service::{giveaway::GiveawayService, product_key::ProductKeyService},
    sink::{
        discord::{DiscordAnnouncementSink, DiscordLogSink},
        log::EventLog,
        recent::RecentLogs,
        NotificationSink,
    },
    state::AppState,
};

/// Builds the notification sink and the recent-log buffer it writes to.
///
/// Records are mirrored into the log channel only when one is configured.
///
/// # Arguments
/// - `config` - Application configuration holding the optional log channel
/// - `http` - Discord HTTP client used for log channel delivery
///
/// # Returns
/// - `(RecentLogs, Arc<dyn NotificationSink>)` - Buffer served by `logs` and the sink feeding it
pub fn setup_event_log(config: &Config, http: Arc<Http>) -> (RecentLogs, Arc<dyn NotificationSink>) {
    let recent_logs = RecentLogs::new();
    let channel = config
        .log_channel_id
        .map(|channel_id| DiscordLogSink::new(http, channel_id));

    if channel.is_none() {
        tracing::warn!("LOG_CHANNEL_ID not set, audit records will not be posted to Discord");
    }

    let notifier: Arc<dyn NotificationSink> = Arc::new(EventLog::new(recent_logs.clone(), channel));
    (recent_logs, notifier)
}

/// Builds the giveaway service and starts its resolution scheduler.
///
/// # Arguments
/// - `config` - Application configuration holding the giveaway channel and retention
/// - `http` - Discord HTTP client used for announcements
/// - `notifier` - Sink receiving audit records
///
/// # Returns
/// - `Ok(GiveawayService)` - Service with a running scheduler and an empty store
/// - `Err(AppError::ConfigErr)` - Retention window out of range
/// - `Err(AppError::SchedulerErr)` - Scheduler failed to start
pub async fn setup_giveaway_service(
    config: &Config,
    http: Arc<Http>,
    notifier: Arc<dyn NotificationSink>,
) -> Result<GiveawayService, AppError> {
    let ttl = Duration::try_hours(config.resolved_giveaway_ttl_hours).ok_or_else(|| {
        ConfigError::InvalidEnvVar {
            name: "RESOLVED_GIVEAWAY_TTL_HOURS".to_string(),
            value: config.resolved_giveaway_ttl_hours.to_string(),
        }
    })?;

    if config.giveaway_channel_id.is_none() {
        tracing::warn!("GIVEAWAY_CHANNEL_ID not set, giveaways cannot be started");
    }

    let announcer = Arc::new(DiscordAnnouncementSink::new(http, config.giveaway_channel_id));
    let timers = ResolutionTimers::start().await?;

    Ok(GiveawayService::new(
        GiveawayStore::new(),
        ResolvedGiveawayCache::new(config.resolved_giveaway_retention, ttl),
        timers,
        announcer,
        notifier,
    ))
}

/// Loads the product key table and wraps it in the product key service.
///
/// # Arguments
/// - `config` - Application configuration holding the key table path
///
/// # Returns
/// - `Ok(ProductKeyService)` - Service over the loaded table
/// - `Err(AppError::IoErr)` - Key table exists but could not be read
/// - `Err(AppError::JsonErr)` - Key table is malformed
pub async fn setup_product_keys(config: &Config) -> Result<ProductKeyService, AppError> {
    let repo = ProductKeyRepository::load(&config.product_keys_path).await?;

    tracing::info!(
        "Loaded {} product key(s) from {}",
        repo.all().await.len(),
        config.product_keys_path
    );

    Ok(ProductKeyService::new(repo))
}

/// Wires every service into the shared application state.
pub async fn build_state(config: &Config, http: Arc<Http>) -> Result<AppState, AppError> {
    let (recent_logs, notifier) = setup_event_log(config, http.clone());
    let giveaways = setup_giveaway_service(config, http, notifier.clone()).await?;
    let product_keys = setup_product_keys(config).await?;

    Ok(AppState::new(
        giveaways,
        product_keys,
        recent_logs,
        notifier,
        config.guild_id,
    ))
}
