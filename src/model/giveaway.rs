//! Giveaway domain models.
//!
//! This module defines the record stored for every active giveaway, the parameter types
//! used to create one, the snapshot retained after resolution for rerolls, and the
//! announcement content handed to the announcement sink.

use chrono::{DateTime, Duration, Utc};
use std::fmt;

/// Discord user ID of an enrolled participant.
pub type ParticipantId = u64;

/// Formats participants as comma-separated Discord mentions.
pub fn mention_list(participants: &[ParticipantId]) -> String {
    participants
        .iter()
        .map(|id| format!("<@{}>", id))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Engine-assigned giveaway identifier.
///
/// Allocated from a monotonically increasing counter owned by the store, so an ID is
/// never reused within the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GiveawayId(u64);

impl GiveawayId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for GiveawayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Location of the public announcement message for a giveaway.
///
/// Interactive controls and manual commands identify a giveaway by the announcement's
/// message ID, so this is also the correlation key for inbound events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnnouncementRef {
    /// Discord channel ID the announcement was posted in.
    pub channel_id: u64,
    /// Discord message ID of the announcement.
    pub message_id: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GiveawayState {
    Active,
    Resolved,
}

/// Duplicate-free participant list preserving enrollment order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParticipantRegistry {
    participants: Vec<ParticipantId>,
}

impl ParticipantRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the participant unless already present.
    ///
    /// # Returns
    /// - `true` - Participant was added
    /// - `false` - Participant was already enrolled
    pub fn insert(&mut self, participant: ParticipantId) -> bool {
        if self.contains(participant) {
            return false;
        }
        self.participants.push(participant);
        true
    }

    /// Removes the participant, keeping the order of the remaining entries.
    ///
    /// # Returns
    /// - `true` - Participant was removed
    /// - `false` - Participant was not enrolled
    pub fn remove(&mut self, participant: ParticipantId) -> bool {
        match self.participants.iter().position(|p| *p == participant) {
            Some(index) => {
                self.participants.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, participant: ParticipantId) -> bool {
        self.participants.contains(&participant)
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    pub fn as_slice(&self) -> &[ParticipantId] {
        &self.participants
    }
}

/// An active giveaway as held by the store.
///
/// Everything except `participants` and `state` is fixed at creation. `participants`
/// is only mutated through the enrollment operations of the giveaway service.
#[derive(Debug, Clone)]
pub struct GiveawayRecord {
    pub id: GiveawayId,
    pub announcement: AnnouncementRef,
    /// Guild the giveaway was started in.
    pub guild_id: u64,
    pub prize: String,
    /// Number of winners drawn at resolution. Never reduced, even if fewer people enter.
    pub winner_count: u32,
    pub end_at: DateTime<Utc>,
    pub host_id: u64,
    pub state: GiveawayState,
    pub participants: ParticipantRegistry,
}

impl GiveawayRecord {
    pub fn is_active(&self) -> bool {
        self.state == GiveawayState::Active
    }

    /// Announcement content reflecting the current participant count.
    pub fn open_announcement(&self) -> Announcement {
        Announcement::Open {
            prize: self.prize.clone(),
            winner_count: self.winner_count,
            end_at: self.end_at,
            participant_count: self.participants.len(),
        }
    }
}

/// Parameters for starting a giveaway, as received from the command layer.
///
/// Values are unvalidated; the giveaway service rejects non-positive winner counts
/// and durations.
#[derive(Debug, Clone)]
pub struct StartGiveawayParam {
    pub prize: String,
    pub winner_count: i64,
    pub duration: Duration,
    pub host_id: u64,
    pub guild_id: u64,
}

/// Parameters for inserting a validated, already-announced giveaway into the store.
#[derive(Debug, Clone)]
pub struct CreateGiveawayParam {
    pub announcement: AnnouncementRef,
    pub guild_id: u64,
    pub prize: String,
    pub winner_count: u32,
    pub end_at: DateTime<Utc>,
    pub host_id: u64,
}

/// What triggered a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionTrigger {
    /// The deferred timer armed at creation fired.
    Timer,
    /// An explicit `giveaway_end` request.
    Manual,
}

/// Outcome of resolving a giveaway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GiveawayResolution {
    pub id: GiveawayId,
    pub announcement: AnnouncementRef,
    pub prize: String,
    pub entries: usize,
    pub winners: Vec<ParticipantId>,
}

/// Read-only snapshot of a resolved giveaway retained for rerolls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedGiveaway {
    pub id: GiveawayId,
    pub announcement: AnnouncementRef,
    pub prize: String,
    pub winner_count: u32,
    pub host_id: u64,
    pub participants: Vec<ParticipantId>,
    pub winners: Vec<ParticipantId>,
    pub resolved_at: DateTime<Utc>,
}

/// Content of the public giveaway announcement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Announcement {
    /// The giveaway is accepting entries.
    Open {
        prize: String,
        winner_count: u32,
        end_at: DateTime<Utc>,
        participant_count: usize,
    },
    /// The giveaway has been resolved. An empty `winners` list means nobody entered.
    Ended {
        prize: String,
        host_id: u64,
        entries: usize,
        winners: Vec<ParticipantId>,
    },
}
