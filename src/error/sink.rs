use thiserror::Error;

/// Failure reported by an announcement or log delivery collaborator.
#[derive(Error, Debug)]
pub enum SinkError {
    /// The sink has no destination channel configured.
    #[error("No destination channel configured")]
    Unavailable,

    /// Discord rejected or failed the request.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    Discord(#[from] Box<serenity::Error>),

    /// Delivery failed for a reason reported by the sink itself.
    #[error("Delivery rejected: {0}")]
    Rejected(String),
}

impl From<serenity::Error> for SinkError {
    fn from(err: serenity::Error) -> Self {
        SinkError::Discord(Box::new(err))
    }
}
