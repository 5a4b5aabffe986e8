use super::*;

/// Tests finding a retained snapshot by its announcement message ID.
///
/// Expected: Ok with the snapshot's participants intact
#[tokio::test]
async fn finds_snapshot() {
    let cache = ResolvedGiveawayCache::new(5, Duration::hours(1));
    cache.push(snapshot(1, 100, Utc::now())).await;

    let found = cache.find_by_announcement(100).await.unwrap();
    assert_eq!(found.id, GiveawayId::new(1));
    assert_eq!(found.participants, vec![1, 2, 3]);
}

/// Tests that a snapshot past its TTL is no longer served.
///
/// Expected: None for the expired snapshot, which is also dropped from the cache
#[tokio::test]
async fn ignores_expired_snapshot() {
    let cache = ResolvedGiveawayCache::new(5, Duration::minutes(5));
    cache
        .push(snapshot(1, 100, Utc::now() - Duration::minutes(1)))
        .await;
    cache
        .push(snapshot(2, 200, Utc::now() - Duration::minutes(6)))
        .await;

    assert!(cache.find_by_announcement(200).await.is_none());
    assert!(cache.find_by_announcement(100).await.is_some());
    assert_eq!(cache.len().await, 1);
}

/// Tests recording reroll winners on a retained snapshot.
///
/// Expected: Ok with the new winners returned by later lookups
#[tokio::test]
async fn records_reroll_winners() {
    let cache = ResolvedGiveawayCache::new(5, Duration::hours(1));
    cache.push(snapshot(1, 100, Utc::now())).await;

    cache.set_winners(100, vec![1, 3]).await;

    let found = cache.find_by_announcement(100).await.unwrap();
    assert_eq!(found.winners, vec![1, 3]);
}
