//! Product key model.
//!
//! Keys are persisted as a flat JSON array of these records. Field names follow the
//! document format shared with the dashboard (`type`, `createdAt`, `usedBy`, ...).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A product key issued for a digital-goods product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductKey {
    /// Product label the key was issued for.
    #[serde(rename = "type")]
    pub key_type: String,
    /// The key itself, formatted `XXXX-XXXX-XXXX-XXXX`.
    pub key: String,
    pub created_at: DateTime<Utc>,
    pub used: bool,
    /// Discord user ID of the redeeming member, stored as a string.
    #[serde(default)]
    pub used_by: Option<String>,
    #[serde(default)]
    pub used_at: Option<DateTime<Utc>>,
}

impl ProductKey {
    /// Creates a fresh, unused key.
    pub fn new(key_type: String, key: String, created_at: DateTime<Utc>) -> Self {
        Self {
            key_type,
            key,
            created_at,
            used: false,
            used_by: None,
            used_at: None,
        }
    }
}
