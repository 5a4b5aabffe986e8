//! Discord bot integration for running giveaways and product key commands.
//!
//! This module provides the serenity side of the application: slash command
//! definitions, the announcement buttons, parsing of raw interactions into typed
//! `BotEvent`s, and the event handler that routes them to the services.
//!
//! The bot runs in a separate tokio task so the main task can wait for a shutdown
//! signal. The announcement and log sinks use their own HTTP client, built before the
//! gateway client, since the services have to exist before the handler does.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive guild availability, needed before interactions are routed
//!
//! Slash commands and button presses arrive as interactions, which need no privileged
//! intent.

pub mod command;
pub mod component;
pub mod event;
pub mod handler;
pub mod start;
