use thiserror::Error;

/// Errors reported synchronously by the giveaway engine.
///
/// None of these leave partial state behind: lookup and validation failures happen
/// before any mutation, and delivery failures after a committed transition are logged
/// instead of being returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GiveawayError {
    /// No active giveaway (or retained snapshot) matches the given id or message.
    #[error("Giveaway not found")]
    NotFound,

    /// Winner count or duration rejected at creation.
    #[error("Invalid giveaway parameters: {0}")]
    InvalidParameters(String),

    /// The participant is already enrolled.
    #[error("Participant already entered")]
    AlreadyEntered,

    /// The participant is not enrolled.
    #[error("Participant not entered")]
    NotEntered,

    /// A draw was requested against an empty participant pool.
    #[error("Giveaway has no participants")]
    NoParticipants,

    /// No giveaway channel is configured, so the giveaway cannot be announced.
    #[error("No announcement channel configured")]
    AnnouncementUnavailable,

    /// The announcement could not be delivered.
    ///
    /// Only surfaced from `start`, where the announcement is a precondition for creating
    /// the giveaway. After a committed transition this is logged and swallowed.
    #[error("Announcement delivery failed: {0}")]
    DeliveryFailed(String),
}

impl GiveawayError {
    /// Converts giveaway errors into the ephemeral reply shown to the user.
    ///
    /// # Returns
    /// - `&str` - Non-technical description of the failure
    pub fn user_message(&self) -> &str {
        match self {
            Self::NotFound => "Giveaway not found or already ended.",
            Self::InvalidParameters(_) => {
                "Duration and number of winners must both be at least 1."
            }
            Self::AlreadyEntered => "You are already entered in this giveaway!",
            Self::NotEntered => "You are not entered in this giveaway!",
            Self::NoParticipants => "No participants in this giveaway.",
            Self::AnnouncementUnavailable => {
                "Failed to send giveaway message. Please check the giveaway channel configuration."
            }
            Self::DeliveryFailed(_) => "Failed to send giveaway message. Please try again.",
        }
    }
}
