use super::*;

/// Tests that the cache evicts the oldest snapshot once full.
///
/// Expected: Ok with the first snapshot gone and the newest three retained
#[tokio::test]
async fn evicts_oldest_when_full() {
    let cache = ResolvedGiveawayCache::new(3, Duration::hours(1));
    let now = Utc::now();

    for i in 1..=4 {
        cache.push(snapshot(i, 100 + i, now)).await;
    }

    assert_eq!(cache.len().await, 3);
    assert!(cache.find_by_announcement(101).await.is_none());
    assert!(cache.find_by_announcement(104).await.is_some());
}

/// Tests that pushing a snapshot for the same giveaway twice keeps one copy.
///
/// Expected: Ok with a single entry holding the latest winners
#[tokio::test]
async fn replaces_snapshot_of_same_giveaway() {
    let cache = ResolvedGiveawayCache::new(5, Duration::hours(1));
    let now = Utc::now();

    cache.push(snapshot(1, 100, now)).await;
    let mut updated = snapshot(1, 100, now);
    updated.winners = vec![3];
    cache.push(updated).await;

    assert_eq!(cache.len().await, 1);
    let found = cache.find_by_announcement(100).await.unwrap();
    assert_eq!(found.winners, vec![3]);
}

/// Tests that expired snapshots are pruned on push.
///
/// Expected: Ok with only the fresh snapshot retained
#[tokio::test]
async fn prunes_expired_on_push() {
    let cache = ResolvedGiveawayCache::new(5, Duration::hours(1));
    let now = Utc::now();

    cache.push(snapshot(1, 100, now - Duration::hours(2))).await;
    cache.push(snapshot(2, 200, now)).await;

    assert_eq!(cache.len().await, 1);
}
