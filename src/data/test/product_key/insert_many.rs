use super::*;

/// Tests that inserted keys are written to disk.
///
/// Verifies that a fresh repository loaded from the same path sees the keys.
///
/// Expected: Ok with both keys persisted
#[tokio::test]
async fn persists_inserted_keys() -> Result<(), AppError> {
    let path = temp_keys_path("insert");
    let repo = ProductKeyRepository::load(&path).await?;

    repo.insert_many(vec![key("AAAA-AAAA-AAAA-AAAA"), key("BBBB-BBBB-BBBB-BBBB")])
        .await?;

    let reloaded = ProductKeyRepository::load(&path).await?;
    assert_eq!(reloaded.all().await.len(), 2);
    assert!(reloaded.contains("BBBB-BBBB-BBBB-BBBB").await);

    tokio::fs::remove_file(&path).await?;
    Ok(())
}

/// Tests that a failed write leaves the in-memory table unchanged.
///
/// Points the repository at a path inside a directory that does not exist.
///
/// Expected: Err(AppError::IoErr) and no keys kept in memory
#[tokio::test]
async fn rolls_back_on_write_failure() -> Result<(), AppError> {
    let path = std::env::temp_dir()
        .join(format!("giveaway-bot-missing-dir-{}", uuid::Uuid::new_v4()))
        .join("keys.json");
    let repo = ProductKeyRepository::load(&path).await?;

    let result = repo.insert_many(vec![key("AAAA-AAAA-AAAA-AAAA")]).await;

    assert!(matches!(result, Err(AppError::IoErr(_))));
    assert!(repo.all().await.is_empty());

    Ok(())
}
