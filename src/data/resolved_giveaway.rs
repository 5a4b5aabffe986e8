use chrono::{Duration, Utc};
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::model::giveaway::ResolvedGiveaway;

/// Bounded cache of recently resolved giveaways, used to serve rerolls.
///
/// Holds at most `capacity` snapshots (oldest evicted first) and drops snapshots older
/// than `ttl` whenever the cache is touched.
#[derive(Clone)]
pub struct ResolvedGiveawayCache {
    entries: Arc<RwLock<VecDeque<ResolvedGiveaway>>>,
    capacity: usize,
    ttl: Duration,
}

impl ResolvedGiveawayCache {
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            entries: Arc::new(RwLock::new(VecDeque::with_capacity(capacity))),
            capacity,
            ttl,
        }
    }

    pub async fn push(&self, snapshot: ResolvedGiveaway) {
        let mut entries = self.entries.write().await;
        self.prune_expired(&mut entries);

        entries.retain(|entry| entry.id != snapshot.id);
        entries.push_back(snapshot);
        while entries.len() > self.capacity {
            entries.pop_front();
        }
    }

    /// Finds the snapshot whose announcement has the given message ID.
    pub async fn find_by_announcement(&self, message_id: u64) -> Option<ResolvedGiveaway> {
        let mut entries = self.entries.write().await;
        self.prune_expired(&mut entries);

        entries
            .iter()
            .find(|entry| entry.announcement.message_id == message_id)
            .cloned()
    }

    /// Records the winners of a reroll on the retained snapshot.
    pub async fn set_winners(&self, message_id: u64, winners: Vec<u64>) {
        let mut entries = self.entries.write().await;
        if let Some(entry) = entries
            .iter_mut()
            .find(|entry| entry.announcement.message_id == message_id)
        {
            entry.winners = winners;
        }
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    fn prune_expired(&self, entries: &mut VecDeque<ResolvedGiveaway>) {
        let cutoff = Utc::now() - self.ttl;
        entries.retain(|entry| entry.resolved_at > cutoff);
    }
}
