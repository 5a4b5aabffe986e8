//! Giveaway engine.
//!
//! This module provides the `GiveawayService` which owns the lifecycle of every giveaway:
//! creation and announcement, enrollment through the announcement buttons, the deferred
//! resolution armed at creation, early termination and rerolls.
//!
//! The service is organized into separate modules by concern:
//! - `lifecycle` - Start, resolve, end and reroll
//! - `enrollment` - Enter and leave
//! - `selection` - Winner drawing
//! - `builder` - Message and log text
//!
//! # Ordering
//!
//! Every operation on a giveaway holds that giveaway's record lock from the moment it
//! reads the record until its deliveries are done, so enrollment, resolution and
//! rerolls of one giveaway are linearized. A resolution marks the record resolved and
//! removes it from the store before releasing the lock; anything queued behind it then
//! observes the giveaway as gone.

pub mod builder;
pub mod enrollment;
pub mod lifecycle;
pub mod selection;

#[cfg(test)]
mod test;

use dioxus_logger::tracing;
use rand::{rngs::StdRng, SeedableRng};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::{
    data::{giveaway::GiveawayStore, resolved_giveaway::ResolvedGiveawayCache},
    error::sink::SinkError,
    model::{
        giveaway::{GiveawayId, ParticipantId},
        log::LogLevel,
    },
    scheduler::resolution_timers::ResolutionTimers,
    sink::{AnnouncementSink, NotificationSink},
};

/// Service providing the giveaway operations.
///
/// Cheap to clone: every field is shared, so clones operate on the same store, cache,
/// timers and random source. The deferred resolution callback holds one such clone.
#[derive(Clone)]
pub struct GiveawayService {
    /// Active giveaways
    store: GiveawayStore,
    /// Snapshots of resolved giveaways kept for rerolls
    resolved: ResolvedGiveawayCache,
    /// Pending deferred resolutions
    timers: ResolutionTimers,
    /// Delivers the public announcement and winner messages
    announcer: Arc<dyn AnnouncementSink>,
    /// Receives audit events
    notifier: Arc<dyn NotificationSink>,
    /// Random source for winner draws
    rng: Arc<Mutex<StdRng>>,
}

impl GiveawayService {
    /// Creates a new GiveawayService instance.
    ///
    /// # Arguments
    /// - `store` - Store holding active giveaways
    /// - `resolved` - Cache receiving snapshots of resolved giveaways
    /// - `timers` - Registry used to arm deferred resolutions
    /// - `announcer` - Announcement sink
    /// - `notifier` - Notification sink
    ///
    /// # Returns
    /// - `GiveawayService` - New service seeded from the operating system's RNG
    pub fn new(
        store: GiveawayStore,
        resolved: ResolvedGiveawayCache,
        timers: ResolutionTimers,
        announcer: Arc<dyn AnnouncementSink>,
        notifier: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            store,
            resolved,
            timers,
            announcer,
            notifier,
            rng: Arc::new(Mutex::new(StdRng::from_os_rng())),
        }
    }

    /// Replaces the random source, making draws reproducible.
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = Arc::new(Mutex::new(rng));
        self
    }

    /// Finds the active giveaway owning the announcement with the given message ID.
    pub async fn find_by_announcement(&self, message_id: u64) -> Option<GiveawayId> {
        self.store.find_by_announcement(message_id).await
    }

    pub async fn active_count(&self) -> usize {
        self.store.len().await
    }

    /// Stops the resolution scheduler.
    ///
    /// Active giveaways are not resolved; they are lost with the process.
    pub async fn shutdown(&self) {
        let active = self.active_count().await;
        if active > 0 {
            tracing::warn!(
                "Shutting down with {} active giveaway(s), they will not be resolved",
                active
            );
        }

        if let Err(e) = self.timers.shutdown().await {
            tracing::error!("Failed to stop giveaway scheduler: {}", e);
        }
    }

    /// Draws winners from `participants` using the shared random source.
    async fn draw(&self, participants: &[ParticipantId], winner_count: u32) -> Vec<ParticipantId> {
        let mut rng = self.rng.lock().await;
        selection::draw_winners(participants, winner_count as usize, &mut *rng)
    }

    /// Logs a delivery failure after a committed transition. Never propagates.
    fn report_delivery_failure(&self, what: &str, id: GiveawayId, err: &SinkError) {
        tracing::warn!("Failed to {} for giveaway {}: {}", what, id, err);
        self.notifier.record(
            LogLevel::Warn,
            &format!("Failed to {} for giveaway {}: {}", what, id, err),
        );
    }
}
