use super::*;

/// Tests listing the active votes on an item.
///
/// Verifies that expired votes and votes on other items or guilds are excluded and
/// that results are ordered oldest first.
///
/// Expected: Ok with two active votes in creation order
#[tokio::test]
async fn lists_active_votes_for_item() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_loot_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    factory::loot_vote::LootVoteFactory::new(db, "1", "100", "sword")
        .created_at(now - Duration::hours(2))
        .build()
        .await?;
    factory::loot_vote::LootVoteFactory::new(db, "1", "200", "sword")
        .reason("greed")
        .created_at(now - Duration::hours(1))
        .build()
        .await?;
    factory::loot_vote::LootVoteFactory::new(db, "1", "300", "sword")
        .created_at(now - Duration::hours(49))
        .build()
        .await?;
    factory::create_vote(db, "1", "400", "shield").await?;
    factory::create_vote(db, "2", "500", "sword").await?;

    let repo = LootVoteRepository::new(db);
    let votes = repo
        .list_active_for_item(1, "sword", now - Duration::hours(48))
        .await?;

    let users: Vec<&str> = votes.iter().map(|v| v.user_id.as_str()).collect();
    assert_eq!(users, vec!["100", "200"]);
    assert_eq!(votes[1].reason, "greed");

    Ok(())
}

/// Tests listing a user's active votes across items.
///
/// Expected: Ok with the user's active votes only
#[tokio::test]
async fn lists_active_votes_for_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_loot_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    factory::create_vote(db, "1", "100", "sword").await?;
    factory::create_vote(db, "1", "100", "shield").await?;
    factory::loot_vote::LootVoteFactory::new(db, "1", "100", "bow")
        .created_at(now - Duration::hours(72))
        .build()
        .await?;
    factory::create_vote(db, "1", "200", "axe").await?;

    let repo = LootVoteRepository::new(db);
    let votes = repo
        .list_active_for_user(1, 100, now - Duration::hours(48))
        .await?;

    let slugs: Vec<&str> = votes.iter().map(|v| v.item_slug.as_str()).collect();
    assert_eq!(slugs, vec!["sword", "shield"]);

    Ok(())
}

/// Tests deleting all votes of a guild.
///
/// Expected: Ok with only the other guild's votes remaining
#[tokio::test]
async fn deletes_votes_for_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_loot_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_vote(db, "1", "100", "sword").await?;
    factory::create_vote(db, "1", "200", "shield").await?;
    factory::create_vote(db, "2", "100", "sword").await?;

    let repo = LootVoteRepository::new(db);
    let deleted = repo.delete_for_guild(1).await?;

    assert_eq!(deleted, 2);

    let count = entity::prelude::LootVote::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
