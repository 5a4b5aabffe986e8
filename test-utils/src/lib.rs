//! Giveaway Bot Test Utils
//!
//! Provides shared testing utilities for the giveaway bot. The giveaway engine keeps
//! all of its state in memory, so tests need no database or network setup; what they
//! do need are Discord payload objects, which this crate builds from JSON.
//!
//! # Overview
//!
//! - **serenity**: Factories for Serenity API objects such as slash command options
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::create_string_option;
//!
//! let option = create_string_option("message_id", "123456789012345678");
//! ```

pub mod serenity;
