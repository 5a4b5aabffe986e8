//! Product key service.
//!
//! This module provides the `ProductKeyService` for issuing product keys, checking
//! whether a key can still be used, and redeeming keys on behalf of members. Keys are
//! stored in the JSON-backed `ProductKeyRepository`.

use chrono::Utc;
use dioxus_logger::tracing;
use rand::Rng;
use std::collections::HashSet;

use crate::{
    data::product_key::ProductKeyRepository,
    error::{product_key::ProductKeyError, AppError},
    model::product_key::ProductKey,
};

/// Largest number of keys a single generate request may issue.
pub const MAX_KEYS_PER_BATCH: usize = 50;

const KEY_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const KEY_GROUPS: usize = 4;
const KEY_GROUP_LENGTH: usize = 4;

#[derive(Clone)]
pub struct ProductKeyService {
    repo: ProductKeyRepository,
}

impl ProductKeyService {
    pub fn new(repo: ProductKeyRepository) -> Self {
        Self { repo }
    }

    /// Issues a batch of new, unused keys for a product.
    ///
    /// Every generated key is distinct from all keys already stored and from the rest of
    /// the batch. The batch is persisted as a whole; if the write fails none of the keys
    /// are kept.
    ///
    /// # Arguments
    /// - `key_type` - Product label for the keys
    /// - `amount` - Number of keys to issue, 1 to `MAX_KEYS_PER_BATCH`
    ///
    /// # Returns
    /// - `Ok(Vec<ProductKey>)` - The issued keys
    /// - `Err(ProductKeyError::InvalidType)` - Empty key type
    /// - `Err(ProductKeyError::InvalidAmount)` - Amount out of range
    /// - `Err(AppError::IoErr)` - Key table could not be written
    pub async fn generate(&self, key_type: &str, amount: i64) -> Result<Vec<ProductKey>, AppError> {
        let key_type = key_type.trim();
        if key_type.is_empty() {
            return Err(ProductKeyError::InvalidType.into());
        }

        let count = usize::try_from(amount)
            .ok()
            .filter(|n| (1..=MAX_KEYS_PER_BATCH).contains(n))
            .ok_or(ProductKeyError::InvalidAmount {
                amount,
                max: MAX_KEYS_PER_BATCH,
            })?;

        let existing: HashSet<String> = self.repo.all().await.into_iter().map(|k| k.key).collect();
        let mut batch: HashSet<String> = HashSet::with_capacity(count);
        let created_at = Utc::now();

        let mut keys = Vec::with_capacity(count);
        while keys.len() < count {
            let code = Self::generate_key_code();
            if existing.contains(&code) || !batch.insert(code.clone()) {
                continue;
            }
            keys.push(ProductKey::new(key_type.to_string(), code, created_at));
        }

        self.repo.insert_many(keys.clone()).await?;

        tracing::info!("Generated {} product key(s) of type '{}'", keys.len(), key_type);

        Ok(keys)
    }

    /// Checks whether a key exists and has not been redeemed.
    ///
    /// Input is trimmed and upper-cased before lookup.
    ///
    /// # Returns
    /// - `Ok(ProductKey)` - The key record, still unused
    /// - `Err(ProductKeyError::NotFound)` - No such key
    /// - `Err(ProductKeyError::AlreadyUsed)` - Key was redeemed before
    pub async fn validate(&self, key: &str) -> Result<ProductKey, ProductKeyError> {
        let key = normalize_key(key);

        let record = self
            .repo
            .find(&key)
            .await
            .ok_or_else(|| ProductKeyError::NotFound(key.clone()))?;

        if record.used {
            return Err(ProductKeyError::AlreadyUsed(key));
        }

        Ok(record)
    }

    /// Redeems a key for a member.
    ///
    /// # Arguments
    /// - `key` - Key as typed by the member
    /// - `user_id` - Discord user ID of the redeeming member
    ///
    /// # Returns
    /// - `Ok(ProductKey)` - The key record, now marked used
    /// - `Err(ProductKeyError::NotFound)` - No such key
    /// - `Err(ProductKeyError::AlreadyUsed)` - Key was redeemed before
    /// - `Err(AppError::IoErr)` - Key table could not be written; the key stays unused
    pub async fn redeem(&self, key: &str, user_id: u64) -> Result<ProductKey, AppError> {
        let key = normalize_key(key);
        let record = self.repo.mark_used(&key, user_id, Utc::now()).await?;

        tracing::info!("User {} redeemed product key of type '{}'", user_id, record.key_type);

        Ok(record)
    }

    /// Generates a random key in `XXXX-XXXX-XXXX-XXXX` form.
    fn generate_key_code() -> String {
        let mut rng = rand::rng();

        (0..KEY_GROUPS)
            .map(|_| {
                (0..KEY_GROUP_LENGTH)
                    .map(|_| {
                        let idx = rng.random_range(0..KEY_CHARSET.len());
                        KEY_CHARSET[idx] as char
                    })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("-")
    }
}

fn normalize_key(key: &str) -> String {
    key.trim().to_uppercase()
}
