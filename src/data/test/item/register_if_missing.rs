use super::*;

/// Tests registering a new item.
///
/// Verifies that the first registration creates an open item with the submitted
/// display name.
///
/// Expected: Ok(true) with open item stored
#[tokio::test]
async fn creates_open_item() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_loot_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LootItemRepository::new(db);
    let created = repo.register_if_missing(1, "sword", "Sword").await?;

    assert!(created);

    let item = repo.find(1, "sword").await?.unwrap();
    assert_eq!(item.display_name, "Sword");
    assert_eq!(item.status, "open");
    assert!(item.winner_id.is_none());

    Ok(())
}

/// Tests registering an already known slug.
///
/// Verifies that a second registration keeps the first display name and does
/// not create a second row.
///
/// Expected: Ok(false) with original display name kept
#[tokio::test]
async fn keeps_first_display_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_loot_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LootItemRepository::new(db);
    repo.register_if_missing(1, "sword", "Sword").await?;
    let created = repo.register_if_missing(1, "sword", "SWORD!!").await?;

    assert!(!created);

    let item = repo.find(1, "sword").await?.unwrap();
    assert_eq!(item.display_name, "Sword");

    let count = entity::prelude::LootItem::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that registration does not reopen a rolled item.
///
/// Expected: Ok(false) with item still rolled
#[tokio::test]
async fn does_not_reopen_rolled_item() -> Result<(), DbErr> {
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
    let created = repo.register_if_missing(1, "sword", "Sword").await?;

    assert!(!created);
    assert!(repo.is_rolled(1, "sword").await?);

    Ok(())
}

/// Tests that the same slug is independent across guilds.
///
/// Expected: Ok(true) for both guilds
#[tokio::test]
async fn registers_per_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_loot_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LootItemRepository::new(db);

    assert!(repo.register_if_missing(1, "sword", "Sword").await?);
    assert!(repo.register_if_missing(2, "sword", "Sword").await?);

    Ok(())
}
