//! Error types and user-facing reply mapping.
//!
//! This module provides the application's error hierarchy. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors, while the domain
//! errors (`GiveawayError`, `ProductKeyError`) carry their own mapping to the short,
//! non-technical text shown to the Discord user who triggered the operation.

pub mod config;
pub mod giveaway;
pub mod product_key;
pub mod sink;

use dioxus_logger::tracing;
use thiserror::Error;

use crate::error::{
    config::ConfigError, giveaway::GiveawayError, product_key::ProductKeyError, sink::SinkError,
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Most variants
/// use `#[from]` for automatic error conversion. Domain errors like `GiveawayError` map
/// themselves to user-facing replies, while infrastructure variants collapse into a
/// generic message with the details logged server-side.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Giveaway engine error (lookup, validation or enrollment failure).
    #[error(transparent)]
    GiveawayErr(#[from] GiveawayError),

    /// Product key lookup or validation error.
    #[error(transparent)]
    ProductKeyErr(#[from] ProductKeyError),

    /// Announcement or log delivery error.
    #[error(transparent)]
    SinkErr(#[from] SinkError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Scheduler error raised while arming or cancelling a deferred resolution.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Filesystem error while loading or persisting the product key table.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Malformed product key document.
    #[error(transparent)]
    JsonErr(#[from] serde_json::Error),

    /// Invalid command input.
    ///
    /// # Fields
    /// - Message describing what was invalid about the request, shown to the user
    #[error("{0}")]
    BadRequest(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Converts the error into the reply shown to the invoking user.
    ///
    /// Domain errors delegate to their own mapping. Infrastructure errors are logged
    /// with full details but return a generic message to avoid leaking internals.
    ///
    /// # Returns
    /// - `String` - Short, non-technical reply text
    pub fn user_message(&self) -> String {
        match self {
            Self::GiveawayErr(err) => err.user_message().to_string(),
            Self::ProductKeyErr(err) => err.user_message(),
            Self::BadRequest(msg) => msg.clone(),
            err => {
                tracing::error!("Internal error: {}", err);
                "Something went wrong, please try again.".to_string()
            }
        }
    }
}
