use super::*;

/// Tests inserting a first vote.
///
/// Expected: Ok(true) with vote stored
#[tokio::test]
async fn inserts_first_vote() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_loot_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let repo = LootVoteRepository::new(db);
    let inserted = repo
        .insert_if_no_active(
            1,
            100,
            "sword",
            PriorityReason::OffSpec,
            now,
            now - Duration::hours(48),
        )
        .await?;

    assert!(inserted);

    let votes = entity::prelude::LootVote::find().all(db).await?;
    assert_eq!(votes.len(), 1);
    assert_eq!(votes[0].user_id, "100");
    assert_eq!(votes[0].reason, "offspec");

    Ok(())
}

/// Tests that a second active vote by the same user is rejected.
///
/// Expected: Ok(false) with a single vote stored
#[tokio::test]
async fn rejects_duplicate_active_vote() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_loot_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let cutoff = now - Duration::hours(48);
    let repo = LootVoteRepository::new(db);

    assert!(
        repo.insert_if_no_active(1, 100, "sword", PriorityReason::MainSpec, now, cutoff)
            .await?
    );
    let second = repo
        .insert_if_no_active(1, 100, "sword", PriorityReason::Greed, now, cutoff)
        .await?;

    assert!(!second);

    let count = entity::prelude::LootVote::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that an expired vote does not block a new one.
///
/// Expected: Ok(true) with both rows stored
#[tokio::test]
async fn allows_vote_after_expiry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_loot_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    factory::loot_vote::LootVoteFactory::new(db, "1", "100", "sword")
        .created_at(now - Duration::hours(72))
        .build()
        .await?;

    let repo = LootVoteRepository::new(db);
    let inserted = repo
        .insert_if_no_active(
            1,
            100,
            "sword",
            PriorityReason::MainSpec,
            now,
            now - Duration::hours(48),
        )
        .await?;

    assert!(inserted);

    let count = entity::prelude::LootVote::find().count(db).await?;
    assert_eq!(count, 2);

    Ok(())
}

/// Tests that votes by other users or on other items do not conflict.
///
/// Expected: Ok(true) for each distinct (user, item) pair
#[tokio::test]
async fn allows_other_users_and_items() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_loot_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let cutoff = now - Duration::hours(48);
    let repo = LootVoteRepository::new(db);

    assert!(
        repo.insert_if_no_active(1, 100, "sword", PriorityReason::MainSpec, now, cutoff)
            .await?
    );
    assert!(
        repo.insert_if_no_active(1, 200, "sword", PriorityReason::MainSpec, now, cutoff)
            .await?
    );
    assert!(
        repo.insert_if_no_active(1, 100, "shield", PriorityReason::MainSpec, now, cutoff)
            .await?
    );
    assert!(
        repo.insert_if_no_active(2, 100, "sword", PriorityReason::MainSpec, now, cutoff)
            .await?
    );

    Ok(())
}
