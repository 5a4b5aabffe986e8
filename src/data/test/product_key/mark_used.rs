use super::*;

/// Tests redeeming an unused key.
///
/// Expected: Ok with used flag, redeemer and timestamp set and persisted
#[tokio::test]
async fn marks_key_used() -> Result<(), AppError> {
    let path = temp_keys_path("mark-used");
    let repo = ProductKeyRepository::load(&path).await?;
    repo.insert_many(vec![key("AAAA-AAAA-AAAA-AAAA")]).await?;

    let now = Utc::now();
    let updated = repo.mark_used("AAAA-AAAA-AAAA-AAAA", 42, now).await?;

    assert!(updated.used);
    assert_eq!(updated.used_by.as_deref(), Some("42"));
    assert_eq!(updated.used_at, Some(now));

    let reloaded = ProductKeyRepository::load(&path).await?;
    assert!(reloaded.find("AAAA-AAAA-AAAA-AAAA").await.unwrap().used);

    tokio::fs::remove_file(&path).await?;
    Ok(())
}

/// Tests redeeming the same key twice.
///
/// Expected: Err(AlreadyUsed) on the second attempt, first redeemer kept
#[tokio::test]
async fn rejects_second_use() -> Result<(), AppError> {
    let path = temp_keys_path("double-use");
    let repo = ProductKeyRepository::load(&path).await?;
    repo.insert_many(vec![key("AAAA-AAAA-AAAA-AAAA")]).await?;

    repo.mark_used("AAAA-AAAA-AAAA-AAAA", 1, Utc::now()).await?;
    let result = repo.mark_used("AAAA-AAAA-AAAA-AAAA", 2, Utc::now()).await;

    assert!(matches!(
        result,
        Err(AppError::ProductKeyErr(ProductKeyError::AlreadyUsed(_)))
    ));
    let stored = repo.find("AAAA-AAAA-AAAA-AAAA").await.unwrap();
    assert_eq!(stored.used_by.as_deref(), Some("1"));

    tokio::fs::remove_file(&path).await?;
    Ok(())
}

/// Tests redeeming a key that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_unknown_key() -> Result<(), AppError> {
    let path = temp_keys_path("unknown");
    let repo = ProductKeyRepository::load(&path).await?;

    let result = repo.mark_used("ZZZZ-ZZZZ-ZZZZ-ZZZZ", 1, Utc::now()).await;

    assert!(matches!(
        result,
        Err(AppError::ProductKeyErr(ProductKeyError::NotFound(_)))
    ));

    Ok(())
}
