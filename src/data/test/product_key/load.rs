use super::*;

/// Tests loading when the key document does not exist yet.
///
/// Expected: Ok with an empty table and no file created
#[tokio::test]
async fn loads_empty_table_for_missing_file() -> Result<(), AppError> {
    let path = temp_keys_path("missing");

    let repo = ProductKeyRepository::load(&path).await?;

    assert!(repo.all().await.is_empty());
    assert!(!path.exists());

    Ok(())
}

/// Tests loading an existing key document.
///
/// Expected: Ok with every stored record available
#[tokio::test]
async fn loads_existing_document() -> Result<(), AppError> {
    let path = temp_keys_path("existing");
    let document = serde_json::json!([
        {
            "type": "premium",
            "key": "AAAA-BBBB-CCCC-DDDD",
            "createdAt": "2025-01-01T00:00:00Z",
            "used": false,
            "usedBy": null,
            "usedAt": null
        },
        {
            "type": "basic",
            "key": "EEEE-FFFF-GGGG-HHHH",
            "createdAt": "2025-01-02T00:00:00Z",
            "used": true,
            "usedBy": "42",
            "usedAt": "2025-01-03T00:00:00Z"
        }
    ]);
    tokio::fs::write(&path, document.to_string()).await?;

    let repo = ProductKeyRepository::load(&path).await?;

    assert_eq!(repo.all().await.len(), 2);
    let used = repo.find("EEEE-FFFF-GGGG-HHHH").await.unwrap();
    assert!(used.used);
    assert_eq!(used.used_by.as_deref(), Some("42"));

    tokio::fs::remove_file(&path).await?;
    Ok(())
}

/// Tests loading a malformed key document.
///
/// Expected: Err(AppError::JsonErr)
#[tokio::test]
async fn rejects_malformed_document() -> Result<(), AppError> {
    let path = temp_keys_path("malformed");
    tokio::fs::write(&path, "{ not json").await?;

    let result = ProductKeyRepository::load(&path).await;
    assert!(matches!(result, Err(AppError::JsonErr(_))));

    tokio::fs::remove_file(&path).await?;
    Ok(())
}
