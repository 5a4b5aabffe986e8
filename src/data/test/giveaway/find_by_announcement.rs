use super::*;

/// Tests correlating an announcement message ID back to its giveaway.
///
/// Expected: Ok with the matching giveaway ID for each announcement
#[tokio::test]
async fn finds_giveaway_by_message_id() {
    let store = GiveawayStore::new();
    let first = store.create(create_param(111, "A")).await;
    let second = store.create(create_param(222, "B")).await;

    assert_eq!(store.find_by_announcement(111).await, Some(first.id));
    assert_eq!(store.find_by_announcement(222).await, Some(second.id));
}

/// Tests looking up an unknown message ID.
///
/// Expected: None
#[tokio::test]
async fn returns_none_for_unknown_message() {
    let store = GiveawayStore::new();
    store.create(create_param(111, "A")).await;

    assert_eq!(store.find_by_announcement(999).await, None);
}
