//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs for
//! testing purposes. These factories create valid Serenity objects by deserializing
//! JSON, simulating what Discord's gateway would deliver.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_integer_option, create_string_option};
//!
//! #[test]
//! fn parses_giveaway_start() {
//!     let options = vec![
//!         create_string_option("prize", "Gift Card"),
//!         create_integer_option("duration", 10),
//!     ];
//!
//!     // Feed the options to the command parser...
//! }
//! ```
//!
//! # Available Factories
//!
//! - `command::create_string_option` - Create string slash command options
//! - `command::create_integer_option` - Create integer slash command options

pub mod command;

pub use command::{create_integer_option, create_string_option};
