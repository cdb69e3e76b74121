use super::*;

/// Tests ordering of the leaderboard.
///
/// Verifies that users are ordered by wins descending, that zero-win users and
/// other guilds are excluded, and that the limit applies.
///
/// Expected: Ok with top two users in order
#[tokio::test]
async fn orders_by_wins_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_loot_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_win(db, "1", "100", 1).await?;
    factory::create_win(db, "1", "200", 5).await?;
    factory::create_win(db, "1", "300", 3).await?;
    factory::create_win(db, "1", "400", 0).await?;
    factory::create_win(db, "2", "500", 9).await?;

    let repo = LootWinRepository::new(db);
    let top = repo.leaderboard(1, 2).await?;

    let users: Vec<&str> = top.iter().map(|r| r.user_id.as_str()).collect();
    assert_eq!(users, vec!["200", "300"]);

    Ok(())
}

/// Tests resetting a guild's win ledger.
///
/// Expected: Ok with only the other guild's records remaining
#[tokio::test]
async fn delete_for_guild_resets_wins() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_loot_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_win(db, "1", "100", 1).await?;
    factory::create_win(db, "1", "200", 2).await?;
    factory::create_win(db, "2", "100", 3).await?;

    let repo = LootWinRepository::new(db);
    let deleted = repo.delete_for_guild(1).await?;

    assert_eq!(deleted, 2);
    assert!(repo.get(1, 100).await?.is_none());
    assert_eq!(repo.get(2, 100).await?.unwrap().wins, 3);

    Ok(())
}
