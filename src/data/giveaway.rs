use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use crate::model::giveaway::{
    CreateGiveawayParam, GiveawayId, GiveawayRecord, GiveawayState, ParticipantRegistry,
};

/// Shared handle to a single live giveaway.
///
/// The record's mutex is the per-giveaway serialization point: enrollment, resolution
/// and rerolls of one giveaway queue on it in FIFO order, while operations on other
/// giveaways proceed independently.
pub type GiveawayEntry = Arc<Mutex<GiveawayRecord>>;

#[derive(Default)]
struct StoreInner {
    records: HashMap<GiveawayId, GiveawayEntry>,
    /// Announcement message ID to giveaway ID.
    by_message: HashMap<u64, GiveawayId>,
}

/// In-memory table of active giveaways.
///
/// State lives for the lifetime of the process only; a restart loses every active
/// giveaway. Clones share the same table.
#[derive(Clone)]
pub struct GiveawayStore {
    inner: Arc<RwLock<StoreInner>>,
    next_id: Arc<AtomicU64>,
}

impl GiveawayStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(StoreInner::default())),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Inserts a new active giveaway and assigns it a fresh ID.
    ///
    /// # Arguments
    /// - `param` - Validated giveaway data with its already-delivered announcement
    ///
    /// # Returns
    /// - `GiveawayRecord` - Copy of the stored record
    pub async fn create(&self, param: CreateGiveawayParam) -> GiveawayRecord {
        let id = GiveawayId::new(self.next_id.fetch_add(1, Ordering::Relaxed));
        let record = GiveawayRecord {
            id,
            announcement: param.announcement,
            guild_id: param.guild_id,
            prize: param.prize,
            winner_count: param.winner_count,
            end_at: param.end_at,
            host_id: param.host_id,
            state: GiveawayState::Active,
            participants: ParticipantRegistry::new(),
        };

        let mut inner = self.inner.write().await;
        inner
            .by_message
            .insert(record.announcement.message_id, id);
        inner
            .records
            .insert(id, Arc::new(Mutex::new(record.clone())));

        record
    }

    pub async fn get(&self, id: GiveawayId) -> Option<GiveawayEntry> {
        self.inner.read().await.records.get(&id).cloned()
    }

    /// Finds the giveaway owning the announcement with the given message ID.
    pub async fn find_by_announcement(&self, message_id: u64) -> Option<GiveawayId> {
        self.inner.read().await.by_message.get(&message_id).copied()
    }

    /// Removes a giveaway and its announcement index entry.
    ///
    /// # Returns
    /// - `true` - The giveaway was present and has been removed
    /// - `false` - No giveaway with this ID was stored
    pub async fn remove(&self, id: GiveawayId) -> bool {
        let mut inner = self.inner.write().await;
        if inner.records.remove(&id).is_none() {
            return false;
        }
        inner.by_message.retain(|_, giveaway_id| *giveaway_id != id);
        true
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.records.len()
    }

    #[cfg(test)]
    pub async fn ids(&self) -> Vec<GiveawayId> {
        self.inner.read().await.records.keys().copied().collect()
    }
}

impl Default for GiveawayStore {
    fn default() -> Self {
        Self::new()
    }
}
