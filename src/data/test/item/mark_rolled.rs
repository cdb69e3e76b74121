use super::*;

/// Tests recording a first roll on an open item.
///
/// Expected: Ok(true) with winner, timestamp and moderator flag stored
#[tokio::test]
async fn records_winner_on_open_item() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_loot_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_item(db, "1", "sword").await?;

    let repo = LootItemRepository::new(db);
    let now = Utc::now();
    let applied = repo
        .mark_rolled(1, "sword", 100, true, RollGuard::Open, now)
        .await?;

    assert!(applied);

    let item = repo.find(1, "sword").await?.unwrap();
    assert_eq!(item.status, "rolled");
    assert_eq!(item.winner_id.as_deref(), Some("100"));
    assert!(item.rolled_by_moderator);
    assert!(item.rolled_at.is_some());

    Ok(())
}

/// Tests that the open guard rejects an already rolled item.
///
/// Expected: Ok(false) with original winner kept
#[tokio::test]
async fn open_guard_rejects_rolled_item() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_loot_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::loot_item::LootItemFactory::new(db, "1", "sword")
        .rolled("100")
        .build()
        .await?;

    let repo = LootItemRepository::new(db);
    let applied = repo
        .mark_rolled(1, "sword", 200, true, RollGuard::Open, Utc::now())
        .await?;

    assert!(!applied);

    let item = repo.find(1, "sword").await?.unwrap();
    assert_eq!(item.winner_id.as_deref(), Some("100"));

    Ok(())
}

/// Tests that the winner guard only applies while the winner is unchanged.
///
/// Verifies that a re-roll computed against a stale winner does not overwrite
/// a newer result.
///
/// Expected: Ok(true) for the current winner, Ok(false) for a stale one
#[tokio::test]
async fn winner_guard_detects_stale_winner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_loot_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::loot_item::LootItemFactory::new(db, "1", "sword")
        .rolled("100")
        .build()
        .await?;

    let repo = LootItemRepository::new(db);

    let stale = repo
        .mark_rolled(1, "sword", 300, true, RollGuard::Winner(Some(999)), Utc::now())
        .await?;
    assert!(!stale);

    let current = repo
        .mark_rolled(1, "sword", 200, true, RollGuard::Winner(Some(100)), Utc::now())
        .await?;
    assert!(current);

    let item = repo.find(1, "sword").await?.unwrap();
    assert_eq!(item.winner_id.as_deref(), Some("200"));

    Ok(())
}

/// Tests recording a roll on a missing item.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_item() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_loot_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LootItemRepository::new(db);
    let applied = repo
        .mark_rolled(1, "sword", 100, false, RollGuard::Any, Utc::now())
        .await?;

    assert!(!applied);

    Ok(())
}
