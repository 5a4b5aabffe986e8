use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProductKeyError {
    /// No key with this value exists in the table.
    #[error("Product key '{0}' not found")]
    NotFound(String),

    /// The key exists but has already been redeemed.
    #[error("Product key '{0}' has already been used")]
    AlreadyUsed(String),

    /// Requested batch size is outside the accepted range.
    #[error("Invalid key amount {amount}, expected 1..={max}")]
    InvalidAmount {
        /// The requested amount
        amount: i64,
        /// Largest batch accepted by a single generate call
        max: usize,
    },

    /// Key type label is empty.
    #[error("Product key type must not be empty")]
    InvalidType,
}

impl ProductKeyError {
    /// Converts product key errors into the ephemeral reply shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound(_) => "That key does not exist.".to_string(),
            Self::AlreadyUsed(_) => "That key has already been used.".to_string(),
            Self::InvalidAmount { max, .. } => {
                format!("You can generate between 1 and {} keys at a time.", max)
            }
            Self::InvalidType => "Please provide a key type.".to_string(),
        }
    }
}
