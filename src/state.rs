//! Application state shared by every interaction handler.
//!
//! This module defines the `AppState` struct which holds the services and shared
//! buffers the bot needs. The state is built once during startup and handed to the
//! serenity event handler, which clones it freely.
//!
//! The state includes:
//! - Giveaway service owning the active giveaways and their timers
//! - Product key service backed by the JSON key table
//! - Recent log buffer served by the `logs` command
//! - Notification sink for audit events raised by the bot layer itself

use std::sync::Arc;

use crate::{
    service::{giveaway::GiveawayService, product_key::ProductKeyService},
    sink::{recent::RecentLogs, NotificationSink},
};

/// Shared state for the interaction handlers.
///
/// Every field is cheap to clone: the services share their internals through `Arc`,
/// and the sinks are reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub giveaways: GiveawayService,
    pub product_keys: ProductKeyService,
    /// Most recent audit events, newest first.
    pub recent_logs: RecentLogs,
    pub notifier: Arc<dyn NotificationSink>,
    /// Guild the slash commands are registered in.
    pub guild_id: u64,
}

impl AppState {
    pub fn new(
        giveaways: GiveawayService,
        product_keys: ProductKeyService,
        recent_logs: RecentLogs,
        notifier: Arc<dyn NotificationSink>,
        guild_id: u64,
    ) -> Self {
        Self {
            giveaways,
            product_keys,
            recent_logs,
            notifier,
            guild_id,
        }
    }
}
