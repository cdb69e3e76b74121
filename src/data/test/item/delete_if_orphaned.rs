use super::*;

/// Tests deleting an open item with no votes.
///
/// Expected: Ok(true) with item removed
#[tokio::test]
async fn deletes_open_item_without_votes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_loot_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_item(db, "1", "sword").await?;

    let repo = LootItemRepository::new(db);
    let deleted = repo
        .delete_if_orphaned(1, "sword", Utc::now() - Duration::hours(48))
        .await?;

    assert!(deleted);
    assert!(repo.find(1, "sword").await?.is_none());

    Ok(())
}

/// Tests that an item with an active vote is kept.
///
/// Expected: Ok(false) with item kept
#[tokio::test]
async fn keeps_item_with_active_vote() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_loot_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_item_with_votes(db, "1", "sword", &["100"]).await?;

    let repo = LootItemRepository::new(db);
    let deleted = repo
        .delete_if_orphaned(1, "sword", Utc::now() - Duration::hours(48))
        .await?;

    assert!(!deleted);
    assert!(repo.find(1, "sword").await?.is_some());

    Ok(())
}

/// Tests that expired votes do not keep an item alive.
///
/// Expected: Ok(true) with item removed
#[tokio::test]
async fn ignores_expired_votes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_loot_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    factory::create_item(db, "1", "sword").await?;
    factory::loot_vote::LootVoteFactory::new(db, "1", "100", "sword")
        .created_at(now - Duration::hours(72))
        .build()
        .await?;

    let repo = LootItemRepository::new(db);
    let deleted = repo
        .delete_if_orphaned(1, "sword", now - Duration::hours(48))
        .await?;

    assert!(deleted);

    Ok(())
}

/// Tests that a rolled item is never garbage-collected.
///
/// Expected: Ok(false) with item kept
#[tokio::test]
async fn keeps_rolled_item() -> Result<(), DbErr> {
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
    let deleted = repo
        .delete_if_orphaned(1, "sword", Utc::now() - Duration::hours(48))
        .await?;

    assert!(!deleted);
    assert!(repo.find(1, "sword").await?.is_some());

    Ok(())
}
