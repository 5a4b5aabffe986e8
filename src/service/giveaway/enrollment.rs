use dioxus_logger::tracing;

use crate::{
    error::giveaway::GiveawayError,
    model::giveaway::{GiveawayId, GiveawayRecord, ParticipantId},
};

use super::GiveawayService;

impl GiveawayService {
    /// Enrolls a participant in an active giveaway.
    ///
    /// The announcement is refreshed with the new participant count while the record
    /// lock is still held, so refreshes of one giveaway are applied in commit order. A
    /// failed refresh is logged and the enrollment stands.
    ///
    /// # Arguments
    /// - `id` - Giveaway to enter
    /// - `participant` - Discord user ID of the participant
    ///
    /// # Returns
    /// - `Ok(usize)` - Participant count after the entry
    /// - `Err(GiveawayError::NotFound)` - Giveaway unknown or already resolved
    /// - `Err(GiveawayError::AlreadyEntered)` - Participant was already enrolled
    pub async fn enter(
        &self,
        id: GiveawayId,
        participant: ParticipantId,
    ) -> Result<usize, GiveawayError> {
        let entry = self.store.get(id).await.ok_or(GiveawayError::NotFound)?;
        let mut record = entry.lock().await;

        if !record.is_active() {
            return Err(GiveawayError::NotFound);
        }
        if !record.participants.insert(participant) {
            return Err(GiveawayError::AlreadyEntered);
        }

        let count = record.participants.len();
        tracing::debug!("User {} entered giveaway {} ({} entries)", participant, id, count);

        self.refresh_announcement(&record).await;

        Ok(count)
    }

    /// Withdraws a participant from an active giveaway.
    ///
    /// # Arguments
    /// - `id` - Giveaway to leave
    /// - `participant` - Discord user ID of the participant
    ///
    /// # Returns
    /// - `Ok(usize)` - Participant count after leaving
    /// - `Err(GiveawayError::NotFound)` - Giveaway unknown or already resolved
    /// - `Err(GiveawayError::NotEntered)` - Participant was not enrolled
    pub async fn leave(
        &self,
        id: GiveawayId,
        participant: ParticipantId,
    ) -> Result<usize, GiveawayError> {
        let entry = self.store.get(id).await.ok_or(GiveawayError::NotFound)?;
        let mut record = entry.lock().await;

        if !record.is_active() {
            return Err(GiveawayError::NotFound);
        }
        if !record.participants.remove(participant) {
            return Err(GiveawayError::NotEntered);
        }

        let count = record.participants.len();
        tracing::debug!("User {} left giveaway {} ({} entries)", participant, id, count);

        self.refresh_announcement(&record).await;

        Ok(count)
    }

    async fn refresh_announcement(&self, record: &GiveawayRecord) {
        if let Err(e) = self
            .announcer
            .update(record.announcement, &record.open_announcement())
            .await
        {
            self.report_delivery_failure("refresh announcement", record.id, &e);
        }
    }
}
