use super::*;

/// Tests rerolling a resolved giveaway.
///
/// Verifies that the new winners come from the participants captured at resolution,
/// a reroll-marked message is posted and the retained snapshot records them.
///
/// Expected: Ok with one winner from the recorded participants
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn rerolls_resolved_giveaway() {
    let h = harness().await;
    let record = h.start("Gift Card", 1).await;
    for participant in [11, 12, 13] {
        h.service.enter(record.id, participant).await.unwrap();
    }
    let message_id = record.announcement.message_id;
    h.service.end(message_id).await.unwrap();

    let winners = h.service.reroll(message_id).await.unwrap();

    assert_eq!(winners.len(), 1);
    assert!([11, 12, 13].contains(&winners[0]));

    let posts = h.announcer.posts();
    let last = posts.last().unwrap();
    assert_eq!(last.0, TEST_CHANNEL_ID);
    assert!(last.1.contains("(Reroll)"));

    let snapshot = h
        .service
        .resolved
        .find_by_announcement(message_id)
        .await
        .unwrap();
    assert_eq!(snapshot.winners, winners);
}

/// Tests that rerolling does not reopen a resolved giveaway.
///
/// Expected: enrollment still rejected with NotFound after the reroll
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn reroll_keeps_giveaway_resolved() {
    let h = harness().await;
    let record = h.start("Gift Card", 1).await;
    h.service.enter(record.id, 11).await.unwrap();
    h.service.end(record.announcement.message_id).await.unwrap();

    h.service
        .reroll(record.announcement.message_id)
        .await
        .unwrap();

    assert_eq!(
        h.service.enter(record.id, 12).await.unwrap_err(),
        GiveawayError::NotFound
    );
    assert_eq!(h.service.active_count().await, 0);
}

/// Tests rerolling an active giveaway.
///
/// Expected: Ok with a winner from the current participants and the giveaway still
/// active with its timer armed
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn rerolls_active_giveaway() {
    let h = harness().await;
    let record = h.start("Gift Card", 1).await;
    h.service.enter(record.id, 11).await.unwrap();
    h.service.enter(record.id, 12).await.unwrap();

    let winners = h
        .service
        .reroll(record.announcement.message_id)
        .await
        .unwrap();

    assert_eq!(winners.len(), 1);
    assert!([11, 12].contains(&winners[0]));
    assert!(h.store.get(record.id).await.unwrap().lock().await.is_active());
    assert!(h.service.timers.is_armed(record.id).await);
    assert!(h.ended_updates().is_empty());
}

/// Tests rerolling a giveaway without participants.
///
/// Expected: Err(NoParticipants) and nothing posted
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn reroll_without_participants_fails() {
    let h = harness().await;
    let record = h.start("Gift Card", 1).await;
    h.service.end(record.announcement.message_id).await.unwrap();

    let result = h.service.reroll(record.announcement.message_id).await;

    assert_eq!(result.unwrap_err(), GiveawayError::NoParticipants);
    assert!(h.announcer.posts().is_empty());
}

/// Tests rerolling an unknown announcement.
///
/// Expected: Err(NotFound)
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn unknown_message_not_found() {
    let h = harness().await;

    assert_eq!(
        h.service.reroll(42).await.unwrap_err(),
        GiveawayError::NotFound
    );
}

/// Tests that previous winners remain eligible.
///
/// With a single participant every reroll must return that participant again.
///
/// Expected: Ok with the same winner on each reroll
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn previous_winners_stay_eligible() {
    let h = harness().await;
    let record = h.start("Gift Card", 1).await;
    h.service.enter(record.id, 11).await.unwrap();
    let message_id = record.announcement.message_id;
    h.service.end(message_id).await.unwrap();

    for _ in 0..3 {
        assert_eq!(h.service.reroll(message_id).await.unwrap(), vec![11]);
    }
}

/// Tests that a failed reroll post does not fail the reroll.
///
/// Expected: Ok with winners and a warning recorded
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn reroll_survives_post_failure() {
    let h = harness().await;
    let record = h.start("Gift Card", 1).await;
    h.service.enter(record.id, 11).await.unwrap();
    let message_id = record.announcement.message_id;
    h.service.end(message_id).await.unwrap();

    h.announcer.fail_posts();
    let winners = h.service.reroll(message_id).await.unwrap();

    assert_eq!(winners, vec![11]);
    assert_eq!(h.notifier.count(LogLevel::Warn), 1);
}

/// Tests a reroll that arrives while the giveaway is being resolved.
///
/// The draw is held up while `end` owns the record lock. A reroll issued in that
/// window must wait for the resolution and then draw from the retained snapshot.
///
/// Expected: Ok with a winner from the participants, never NotFound
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn reroll_during_resolution_waits_for_snapshot() {
    let h = harness().await;
    let record = h.start("Gift Card", 1).await;
    for participant in [11, 12, 13] {
        h.service.enter(record.id, participant).await.unwrap();
    }
    let message_id = record.announcement.message_id;
    let entry = h.store.get(record.id).await.unwrap();

    let rng = h.service.rng.lock().await;

    let ending = tokio::spawn({
        let service = h.service.clone();
        async move { service.end(message_id).await }
    });
    while entry.try_lock().is_ok() {
        tokio::task::yield_now().await;
    }

    let rerolling = tokio::spawn({
        let service = h.service.clone();
        async move { service.reroll(message_id).await }
    });
    tokio::time::sleep(std::time::Duration::from_millis(100)).await;
    assert!(!rerolling.is_finished());

    drop(rng);

    let resolution = ending.await.unwrap().unwrap();
    let winners = rerolling.await.unwrap().unwrap();

    assert_eq!(resolution.entries, 3);
    assert_eq!(winners.len(), 1);
    assert!([11, 12, 13].contains(&winners[0]));
    assert_eq!(h.service.active_count().await, 0);
}
