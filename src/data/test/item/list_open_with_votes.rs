use super::*;

/// Tests listing items eligible for a draw.
///
/// Verifies that only open items of the guild with at least one active vote are
/// returned.
///
/// Expected: Ok with only the voted open item
#[tokio::test]
async fn lists_only_open_items_with_active_votes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_loot_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();

    // Eligible
    factory::helpers::create_item_with_votes(db, "1", "sword", &["100"]).await?;
    // Rolled
    factory::loot_item::LootItemFactory::new(db, "1", "shield")
        .rolled("100")
        .build()
        .await?;
    factory::create_vote(db, "1", "200", "shield").await?;
    // Only expired votes
    factory::create_item(db, "1", "bow").await?;
    factory::loot_vote::LootVoteFactory::new(db, "1", "100", "bow")
        .created_at(now - Duration::hours(72))
        .build()
        .await?;
    // Other guild
    factory::helpers::create_item_with_votes(db, "2", "axe", &["100"]).await?;

    let repo = LootItemRepository::new(db);
    let items = repo
        .list_open_with_votes(1, now - Duration::hours(48))
        .await?;

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].slug, "sword");

    Ok(())
}

/// Tests listing when a guild has no items.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_for_unknown_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_loot_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LootItemRepository::new(db);
    let items = repo
        .list_open_with_votes(1, Utc::now() - Duration::hours(48))
        .await?;

    assert!(items.is_empty());

    Ok(())
}
