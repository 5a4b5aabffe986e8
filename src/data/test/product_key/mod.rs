use crate::data::product_key::ProductKeyRepository;
use crate::error::{product_key::ProductKeyError, AppError};
use crate::model::product_key::ProductKey;
use chrono::Utc;
use std::path::PathBuf;

mod insert_many;
mod load;
mod mark_used;

/// Unique scratch path under the system temp directory.
///
/// Each test removes its file when done; a leftover file only affects the test that
/// created it since names never repeat.
pub(super) fn temp_keys_path(label: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "giveaway-bot-{}-{}.json",
        label,
        uuid::Uuid::new_v4()
    ))
}

fn key(value: &str) -> ProductKey {
    ProductKey::new("premium".to_string(), value.to_string(), Utc::now())
}
