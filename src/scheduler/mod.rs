//! Scheduled background work.
//!
//! - `resolution_timers` - One-shot deferred resolution per giveaway, cancellable by ID

pub mod resolution_timers;
