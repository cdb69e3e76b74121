use super::*;

/// Tests withdrawing an active vote.
///
/// Expected: Ok(true) with vote removed
#[tokio::test]
async fn removes_active_vote() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_loot_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_vote(db, "1", "100", "sword").await?;
    factory::create_vote(db, "1", "200", "sword").await?;

    let repo = LootVoteRepository::new(db);
    let removed = repo
        .delete_latest_active(1, 100, "sword", Utc::now() - Duration::hours(48))
        .await?;

    assert!(removed);

    let remaining = entity::prelude::LootVote::find().all(db).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].user_id, "200");

    Ok(())
}

/// Tests that only the most recent vote is removed.
///
/// Verifies that when an expired and an active vote exist for the same user and
/// item, only the active one is deleted.
///
/// Expected: Ok(true) with expired vote kept
#[tokio::test]
async fn removes_only_latest_active_vote() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_loot_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let expired = factory::loot_vote::LootVoteFactory::new(db, "1", "100", "sword")
        .created_at(now - Duration::hours(72))
        .build()
        .await?;
    factory::create_vote(db, "1", "100", "sword").await?;

    let repo = LootVoteRepository::new(db);
    let removed = repo
        .delete_latest_active(1, 100, "sword", now - Duration::hours(48))
        .await?;

    assert!(removed);

    let remaining = entity::prelude::LootVote::find().all(db).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, expired.id);

    Ok(())
}

/// Tests withdrawing when the user has no active vote.
///
/// Expected: Ok(false) with nothing removed
#[tokio::test]
async fn returns_false_without_active_vote() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_loot_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_vote(db, "1", "200", "sword").await?;

    let repo = LootVoteRepository::new(db);
    let removed = repo
        .delete_latest_active(1, 100, "sword", Utc::now() - Duration::hours(48))
        .await?;

    assert!(!removed);

    let count = entity::prelude::LootVote::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
