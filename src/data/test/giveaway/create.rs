use super::*;

/// Tests creating a giveaway in an empty store.
///
/// Verifies that the stored record is active, has no participants and carries the
/// creation parameters unchanged.
///
/// Expected: Ok with active record retrievable by ID
#[tokio::test]
async fn creates_active_giveaway() {
    let store = GiveawayStore::new();

    let record = store.create(create_param(500, "Gift Card")).await;

    assert_eq!(record.state, GiveawayState::Active);
    assert_eq!(record.prize, "Gift Card");
    assert_eq!(record.announcement.message_id, 500);
    assert!(record.participants.is_empty());

    let entry = store.get(record.id).await.expect("record should be stored");
    let stored = entry.lock().await;
    assert_eq!(stored.id, record.id);
    assert_eq!(stored.host_id, 99);
    assert_eq!(store.len().await, 1);
}

/// Tests that every created giveaway receives a distinct ID.
///
/// Expected: Ok with three different IDs, including after a removal
#[tokio::test]
async fn assigns_unique_ids() {
    let store = GiveawayStore::new();

    let first = store.create(create_param(1, "A")).await;
    let second = store.create(create_param(2, "B")).await;
    store.remove(first.id).await;
    let third = store.create(create_param(3, "C")).await;

    assert_ne!(first.id, second.id);
    assert_ne!(first.id, third.id);
    assert_ne!(second.id, third.id);
}

/// Tests that separate store instances do not share state.
///
/// Expected: Ok with the second store empty
#[tokio::test]
async fn stores_are_isolated() {
    let store = GiveawayStore::new();
    let other = GiveawayStore::new();

    store.create(create_param(1, "A")).await;

    assert_eq!(store.len().await, 1);
    assert_eq!(other.len().await, 0);
}
