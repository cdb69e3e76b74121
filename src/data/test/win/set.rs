use super::*;

/// Tests overwriting an existing win count.
///
/// Expected: Ok with the new count stored
#[tokio::test]
async fn overwrites_existing_count() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_loot_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_win(db, "1", "100", 7).await?;

    let repo = LootWinRepository::new(db);
    let record = repo.set(1, 100, 2).await?;

    assert_eq!(record.wins, 2);
    assert_eq!(repo.get(1, 100).await?.unwrap().wins, 2);

    Ok(())
}

/// Tests setting the count of a user without a record.
///
/// Expected: Ok with record created
#[tokio::test]
async fn creates_missing_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_loot_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LootWinRepository::new(db);
    repo.set(1, 100, 4).await?;

    assert_eq!(repo.get(1, 100).await?.unwrap().wins, 4);

    Ok(())
}
