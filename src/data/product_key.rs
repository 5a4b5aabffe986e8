use chrono::{DateTime, Utc};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::error::{product_key::ProductKeyError, AppError};
use crate::model::product_key::ProductKey;

/// Product key table persisted as a single JSON document.
///
/// The whole table is loaded at startup and rewritten after every mutation. The
/// in-memory mutex is the only locking; a single process is assumed to own the file.
#[derive(Clone)]
pub struct ProductKeyRepository {
    path: PathBuf,
    keys: Arc<Mutex<Vec<ProductKey>>>,
}

impl ProductKeyRepository {
    /// Loads the key table from disk.
    ///
    /// A missing file is treated as an empty table; it is created on the first write.
    ///
    /// # Arguments
    /// - `path` - Location of the JSON document
    ///
    /// # Returns
    /// - `Ok(ProductKeyRepository)` - Repository holding every stored key
    /// - `Err(AppError::IoErr)` - File exists but could not be read
    /// - `Err(AppError::JsonErr)` - File is not a valid key document
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref().to_path_buf();

        let keys = match tokio::fs::read_to_string(&path).await {
            Ok(contents) if contents.trim().is_empty() => Vec::new(),
            Ok(contents) => serde_json::from_str(&contents)?,
            Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            path,
            keys: Arc::new(Mutex::new(keys)),
        })
    }

    /// Appends keys to the table and persists it.
    ///
    /// Nothing is kept in memory if the write fails.
    pub async fn insert_many(&self, new_keys: Vec<ProductKey>) -> Result<(), AppError> {
        let mut keys = self.keys.lock().await;
        let previous_len = keys.len();
        keys.extend(new_keys);

        if let Err(e) = self.persist(&keys).await {
            keys.truncate(previous_len);
            return Err(e);
        }

        Ok(())
    }

    pub async fn find(&self, key: &str) -> Option<ProductKey> {
        self.keys
            .lock()
            .await
            .iter()
            .find(|k| k.key == key)
            .cloned()
    }

    #[cfg(test)]
    pub async fn contains(&self, key: &str) -> bool {
        self.keys.lock().await.iter().any(|k| k.key == key)
    }

    /// Marks a key as used by the given member and persists the table.
    ///
    /// # Returns
    /// - `Ok(ProductKey)` - The updated key record
    /// - `Err(ProductKeyError::NotFound)` - No such key
    /// - `Err(ProductKeyError::AlreadyUsed)` - Key was redeemed before
    /// - `Err(AppError::IoErr)` - Write failed; the key stays unused in memory
    pub async fn mark_used(
        &self,
        key: &str,
        used_by: u64,
        used_at: DateTime<Utc>,
    ) -> Result<ProductKey, AppError> {
        let mut keys = self.keys.lock().await;

        let index = keys
            .iter()
            .position(|k| k.key == key)
            .ok_or_else(|| ProductKeyError::NotFound(key.to_string()))?;

        if keys[index].used {
            return Err(ProductKeyError::AlreadyUsed(key.to_string()).into());
        }

        let previous = keys[index].clone();
        keys[index].used = true;
        keys[index].used_by = Some(used_by.to_string());
        keys[index].used_at = Some(used_at);

        if let Err(e) = self.persist(&keys).await {
            keys[index] = previous;
            return Err(e);
        }

        Ok(keys[index].clone())
    }

    pub async fn all(&self) -> Vec<ProductKey> {
        self.keys.lock().await.clone()
    }

    /// Rewrites the whole document, going through a temporary file so a crash mid-write
    /// never leaves a truncated table behind.
    async fn persist(&self, keys: &[ProductKey]) -> Result<(), AppError> {
        let contents = serde_json::to_string_pretty(keys)?;

        let mut tmp_path = self.path.clone().into_os_string();
        tmp_path.push(".tmp");
        let tmp_path = PathBuf::from(tmp_path);

        tokio::fs::write(&tmp_path, contents).await?;
        tokio::fs::rename(&tmp_path, &self.path).await?;

        Ok(())
    }
}
