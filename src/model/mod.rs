//! Domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! giveaways, product keys, log entries and the parsed form of inbound Discord
//! interactions. Raw serenity payloads are converted into these types at the bot
//! boundary so the engine never branches on untyped interaction data.

pub mod event;
pub mod giveaway;
pub mod log;
pub mod product_key;
