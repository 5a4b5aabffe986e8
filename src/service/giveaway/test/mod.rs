use super::GiveawayService;
use crate::data::{giveaway::GiveawayStore, resolved_giveaway::ResolvedGiveawayCache};
use crate::error::giveaway::GiveawayError;
use crate::model::giveaway::{Announcement, GiveawayRecord, StartGiveawayParam};
use crate::model::log::LogLevel;
use crate::scheduler::resolution_timers::ResolutionTimers;
use crate::sink::test::{
    RecordingAnnouncementSink, RecordingNotificationSink, SinkCall, TEST_CHANNEL_ID,
};
use chrono::Duration;
use rand::{rngs::StdRng, SeedableRng};
use std::sync::Arc;
use tokio_cron_scheduler::JobScheduler;

mod reroll;

const HOST_ID: u64 = 99;
const GUILD_ID: u64 = 1;

/// Giveaway service wired to recording sinks.
///
/// The scheduler is never started, so armed resolutions stay pending and tests drive
/// resolution explicitly.
struct Harness {
    service: GiveawayService,
    store: GiveawayStore,
    announcer: Arc<RecordingAnnouncementSink>,
    notifier: Arc<RecordingNotificationSink>,
}

async fn harness() -> Harness {
    harness_with(RecordingAnnouncementSink::new(), 7).await
}

async fn harness_with(announcer: RecordingAnnouncementSink, seed: u64) -> Harness {
    let scheduler = JobScheduler::new().await.unwrap();
    build(announcer, ResolutionTimers::new(scheduler), seed)
}

fn build(announcer: RecordingAnnouncementSink, timers: ResolutionTimers, seed: u64) -> Harness {
    let store = GiveawayStore::new();
    let announcer = Arc::new(announcer);
    let notifier = Arc::new(RecordingNotificationSink::new());

    let service = GiveawayService::new(
        store.clone(),
        ResolvedGiveawayCache::new(10, Duration::hours(1)),
        timers,
        announcer.clone(),
        notifier.clone(),
    )
    .with_rng(StdRng::seed_from_u64(seed));

    Harness {
        service,
        store,
        announcer,
        notifier,
    }
}

fn start_param(prize: &str, winner_count: i64, duration: Duration) -> StartGiveawayParam {
    StartGiveawayParam {
        prize: prize.to_string(),
        winner_count,
        duration,
        host_id: HOST_ID,
        guild_id: GUILD_ID,
    }
}

impl Harness {
    /// Starts a ten minute giveaway and returns its record.
    async fn start(&self, prize: &str, winner_count: i64) -> GiveawayRecord {
        self.service
            .start(start_param(prize, winner_count, Duration::minutes(10)))
            .await
            .unwrap()
    }

    /// Participant count shown by the most recent announcement edit.
    fn last_open_count(&self) -> Option<usize> {
        self.announcer
            .updates()
            .iter()
            .rev()
            .find_map(|(_, announcement)| match announcement {
                Announcement::Open {
                    participant_count, ..
                } => Some(*participant_count),
                _ => None,
            })
    }

    fn ended_updates(&self) -> Vec<Announcement> {
        self.announcer
            .updates()
            .into_iter()
            .map(|(_, announcement)| announcement)
            .filter(|announcement| matches!(announcement, Announcement::Ended { .. }))
            .collect()
    }
}
