use chrono::{Duration, Utc};
use dioxus_logger::tracing;

use crate::{
    error::{giveaway::GiveawayError, sink::SinkError},
    model::{
        giveaway::{
            Announcement, AnnouncementRef, CreateGiveawayParam, GiveawayId, GiveawayRecord,
            GiveawayResolution, GiveawayState, ParticipantId, ResolutionTrigger,
            ResolvedGiveaway, StartGiveawayParam,
        },
        log::LogLevel,
    },
};

use super::{builder, GiveawayService};

impl GiveawayService {
    /// Starts a new giveaway.
    ///
    /// Validates the parameters, publishes the announcement with zero participants,
    /// stores the record under the announcement's message ID and arms the deferred
    /// resolution for the end of the duration. Nothing is stored if publishing fails.
    ///
    /// A failure to arm the timer is logged but does not undo the giveaway; it stays
    /// active and can still be closed with an explicit end.
    ///
    /// # Arguments
    /// - `param` - Unvalidated start parameters from the command layer
    ///
    /// # Returns
    /// - `Ok(GiveawayRecord)` - Snapshot of the newly created giveaway
    /// - `Err(GiveawayError::InvalidParameters)` - Non-positive winner count or duration,
    ///   or an empty prize
    /// - `Err(GiveawayError::AnnouncementUnavailable)` - No announcement channel configured
    /// - `Err(GiveawayError::DeliveryFailed)` - Discord rejected the announcement
    pub async fn start(&self, param: StartGiveawayParam) -> Result<GiveawayRecord, GiveawayError> {
        let prize = param.prize.trim().to_string();
        if prize.is_empty() {
            return Err(GiveawayError::InvalidParameters(
                "Prize must not be empty".to_string(),
            ));
        }

        let winner_count = u32::try_from(param.winner_count)
            .ok()
            .filter(|count| *count >= 1)
            .ok_or_else(|| {
                GiveawayError::InvalidParameters(format!(
                    "Winner count must be at least 1, got {}",
                    param.winner_count
                ))
            })?;

        if param.duration <= Duration::zero() {
            return Err(GiveawayError::InvalidParameters(
                "Duration must be greater than zero".to_string(),
            ));
        }

        let delay = param.duration.to_std().map_err(|_| {
            GiveawayError::InvalidParameters("Duration is out of range".to_string())
        })?;
        let end_at = Utc::now()
            .checked_add_signed(param.duration)
            .ok_or_else(|| GiveawayError::InvalidParameters("Duration is too long".to_string()))?;

        let announcement = Announcement::Open {
            prize: prize.clone(),
            winner_count,
            end_at,
            participant_count: 0,
        };

        let at = match self.announcer.publish(&announcement).await {
            Ok(at) => at,
            Err(SinkError::Unavailable) => {
                tracing::warn!("Giveaway '{}' not started: no giveaway channel", prize);
                self.notifier.record(
                    LogLevel::Warn,
                    &format!(
                        "Giveaway **{}** by <@{}> not started: no giveaway channel available",
                        prize, param.host_id
                    ),
                );
                return Err(GiveawayError::AnnouncementUnavailable);
            }
            Err(e) => {
                tracing::error!("Failed to publish giveaway '{}': {}", prize, e);
                self.notifier.record(
                    LogLevel::Error,
                    &format!("Failed to publish giveaway **{}**: {}", prize, e),
                );
                return Err(GiveawayError::DeliveryFailed(e.to_string()));
            }
        };

        let record = self
            .store
            .create(CreateGiveawayParam {
                announcement: at,
                guild_id: param.guild_id,
                prize,
                winner_count,
                end_at,
                host_id: param.host_id,
            })
            .await;

        self.arm_resolution(record.id, delay).await;

        tracing::info!(
            "Started giveaway {} in guild {} for '{}' ({} winner(s)), ends at {}",
            record.id,
            record.guild_id,
            record.prize,
            record.winner_count,
            record.end_at
        );
        self.notifier.record(
            LogLevel::Info,
            &builder::started_log(&record.prize, winner_count, at.message_id, record.host_id),
        );

        Ok(record)
    }

    /// Resolves a giveaway: closes it, draws winners and announces the result.
    ///
    /// Idempotent. The first call to reach an active giveaway resolves it; any later
    /// or concurrent call, from either trigger, returns `None` without side effects.
    /// A manual trigger unschedules the pending timer.
    ///
    /// The transition is committed (record resolved, snapshot retained, record removed
    /// from the store) under the record lock before any delivery is attempted, and
    /// delivery failures are only logged. A reroll racing the resolution waits on that
    /// lock and then draws from the snapshot.
    ///
    /// # Arguments
    /// - `id` - Giveaway to resolve
    /// - `trigger` - Whether the timer fired or an end was requested
    ///
    /// # Returns
    /// - `Some(GiveawayResolution)` - This call resolved the giveaway
    /// - `None` - The giveaway does not exist or was already resolved
    pub async fn resolve(
        &self,
        id: GiveawayId,
        trigger: ResolutionTrigger,
    ) -> Option<GiveawayResolution> {
        match trigger {
            ResolutionTrigger::Timer => self.timers.forget(id).await,
            ResolutionTrigger::Manual => {
                self.timers.cancel(id).await;
            }
        }

        let Some(entry) = self.store.get(id).await else {
            tracing::debug!("Giveaway {} already resolved ({:?})", id, trigger);
            return None;
        };

        let mut record = entry.lock().await;
        if !record.is_active() {
            tracing::debug!("Giveaway {} already resolved ({:?})", id, trigger);
            return None;
        }

        record.state = GiveawayState::Resolved;

        let participants = record.participants.as_slice().to_vec();
        let winners = self.draw(&participants, record.winner_count).await;

        // Snapshot before removal so a reroll never finds the giveaway in neither place
        self.resolved
            .push(ResolvedGiveaway {
                id,
                announcement: record.announcement,
                prize: record.prize.clone(),
                winner_count: record.winner_count,
                host_id: record.host_id,
                participants: participants.clone(),
                winners: winners.clone(),
                resolved_at: Utc::now(),
            })
            .await;
        self.store.remove(id).await;

        let resolution = GiveawayResolution {
            id,
            announcement: record.announcement,
            prize: record.prize.clone(),
            entries: participants.len(),
            winners,
        };

        let ended = Announcement::Ended {
            prize: record.prize.clone(),
            host_id: record.host_id,
            entries: resolution.entries,
            winners: resolution.winners.clone(),
        };
        if let Err(e) = self.announcer.update(record.announcement, &ended).await {
            self.report_delivery_failure("mark announcement ended", id, &e);
        }

        if !resolution.winners.is_empty() {
            let content = builder::winner_message(&record.prize, &resolution.winners, false);
            if let Err(e) = self
                .announcer
                .post(record.announcement.channel_id, &content)
                .await
            {
                self.report_delivery_failure("announce winners", id, &e);
            }
        }

        tracing::info!(
            "Resolved giveaway {} ({:?}): {} winner(s) from {} entries",
            id,
            trigger,
            resolution.winners.len(),
            resolution.entries
        );
        self.notifier
            .record(LogLevel::Info, &builder::ended_log(&resolution));

        Some(resolution)
    }

    /// Ends an active giveaway early.
    ///
    /// # Arguments
    /// - `message_id` - Message ID of the giveaway announcement
    ///
    /// # Returns
    /// - `Ok(GiveawayResolution)` - The giveaway was resolved by this call
    /// - `Err(GiveawayError::NotFound)` - No active giveaway owns that announcement
    pub async fn end(&self, message_id: u64) -> Result<GiveawayResolution, GiveawayError> {
        let id = self
            .store
            .find_by_announcement(message_id)
            .await
            .ok_or(GiveawayError::NotFound)?;

        self.resolve(id, ResolutionTrigger::Manual)
            .await
            .ok_or(GiveawayError::NotFound)
    }

    /// Draws a fresh set of winners for a giveaway.
    ///
    /// Works on an active giveaway using its current participants, or on a recently
    /// resolved one using the participants captured at resolution. Previous winners
    /// stay eligible. Rerolling never changes the giveaway's state; for a resolved
    /// giveaway the retained snapshot is updated with the new winners.
    ///
    /// # Arguments
    /// - `message_id` - Message ID of the giveaway announcement
    ///
    /// # Returns
    /// - `Ok(Vec<ParticipantId>)` - The new winners
    /// - `Err(GiveawayError::NotFound)` - Giveaway unknown or no longer retained
    /// - `Err(GiveawayError::NoParticipants)` - Nobody to draw from
    pub async fn reroll(&self, message_id: u64) -> Result<Vec<ParticipantId>, GiveawayError> {
        if let Some(id) = self.store.find_by_announcement(message_id).await {
            if let Some(entry) = self.store.get(id).await {
                let record = entry.lock().await;
                if record.is_active() {
                    return self
                        .redraw(
                            id,
                            record.announcement,
                            &record.prize,
                            record.participants.as_slice(),
                            record.winner_count,
                        )
                        .await;
                }
            }
        }

        let snapshot = self
            .resolved
            .find_by_announcement(message_id)
            .await
            .ok_or(GiveawayError::NotFound)?;

        let winners = self
            .redraw(
                snapshot.id,
                snapshot.announcement,
                &snapshot.prize,
                &snapshot.participants,
                snapshot.winner_count,
            )
            .await?;
        self.resolved.set_winners(message_id, winners.clone()).await;

        Ok(winners)
    }

    async fn redraw(
        &self,
        id: GiveawayId,
        at: AnnouncementRef,
        prize: &str,
        participants: &[ParticipantId],
        winner_count: u32,
    ) -> Result<Vec<ParticipantId>, GiveawayError> {
        if participants.is_empty() {
            return Err(GiveawayError::NoParticipants);
        }

        let winners = self.draw(participants, winner_count).await;

        let content = builder::winner_message(prize, &winners, true);
        if let Err(e) = self.announcer.post(at.channel_id, &content).await {
            self.report_delivery_failure("announce rerolled winners", id, &e);
        }

        tracing::info!("Rerolled giveaway {}: {:?}", id, winners);
        self.notifier.record(
            LogLevel::Info,
            &builder::reroll_log(prize, &winners, at.message_id),
        );

        Ok(winners)
    }

    /// Arms the deferred resolution for a freshly created giveaway.
    async fn arm_resolution(&self, id: GiveawayId, delay: std::time::Duration) {
        let service = self.clone();
        let armed = self
            .timers
            .arm(id, delay, move || {
                let service = service.clone();
                async move {
                    service.resolve(id, ResolutionTrigger::Timer).await;
                }
            })
            .await;

        if let Err(e) = armed {
            tracing::error!("Failed to schedule resolution of giveaway {}: {}", id, e);
            self.notifier.record(
                LogLevel::Error,
                &format!(
                    "Failed to schedule the end of giveaway {}: {}. End it manually with /giveaway_end",
                    id, e
                ),
            );
        }
    }
}
