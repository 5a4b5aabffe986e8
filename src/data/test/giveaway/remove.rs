use super::*;

/// Tests removing a stored giveaway.
///
/// Verifies that the record and its announcement index entry are both gone.
///
/// Expected: Ok with true on first removal, false on the second
#[tokio::test]
async fn removes_giveaway_and_index() {
    let store = GiveawayStore::new();
    let record = store.create(create_param(321, "Gift Card")).await;

    assert!(store.remove(record.id).await);
    assert!(store.get(record.id).await.is_none());
    assert_eq!(store.find_by_announcement(321).await, None);

    assert!(!store.remove(record.id).await);
}

/// Tests that removal leaves other giveaways untouched.
///
/// Expected: Ok with the remaining giveaway still retrievable
#[tokio::test]
async fn keeps_other_giveaways() {
    let store = GiveawayStore::new();
    let removed = store.create(create_param(1, "A")).await;
    let kept = store.create(create_param(2, "B")).await;

    store.remove(removed.id).await;

    assert_eq!(store.ids().await, vec![kept.id]);
    assert_eq!(store.find_by_announcement(2).await, Some(kept.id));
}
