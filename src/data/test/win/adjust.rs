use super::*;

/// Tests the first increment of a user without a record.
///
/// Expected: Ok with record created at one win
#[tokio::test]
async fn increment_creates_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_loot_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LootWinRepository::new(db);
    repo.increment(1, 100, 1).await?;

    let record = repo.get(1, 100).await?.unwrap();
    assert_eq!(record.wins, 1);

    Ok(())
}

/// Tests incrementing an existing record.
///
/// Expected: Ok with wins added to the stored count
#[tokio::test]
async fn increment_adds_to_existing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_loot_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_win(db, "1", "100", 2).await?;

    let repo = LootWinRepository::new(db);
    repo.increment(1, 100, 1).await?;
    repo.increment(1, 100, 3).await?;

    let record = repo.get(1, 100).await?.unwrap();
    assert_eq!(record.wins, 6);

    Ok(())
}

/// Tests that decrementing floors at zero.
///
/// Expected: Ok with wins at zero instead of negative
#[tokio::test]
async fn decrement_floors_at_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_loot_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_win(db, "1", "100", 2).await?;

    let repo = LootWinRepository::new(db);
    repo.decrement(1, 100, 1).await?;
    assert_eq!(repo.get(1, 100).await?.unwrap().wins, 1);

    repo.decrement(1, 100, 5).await?;
    assert_eq!(repo.get(1, 100).await?.unwrap().wins, 0);

    Ok(())
}

/// Tests decrementing a user without a record.
///
/// Expected: Ok with no record created
#[tokio::test]
async fn decrement_without_record_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_loot_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LootWinRepository::new(db);
    repo.decrement(1, 100, 1).await?;

    assert!(repo.get(1, 100).await?.is_none());

    Ok(())
}

/// Tests batch lookup of win counts.
///
/// Expected: Ok with only recorded users present in the map
#[tokio::test]
async fn get_many_returns_recorded_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_loot_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_win(db, "1", "100", 2).await?;
    factory::create_win(db, "1", "200", 0).await?;
    factory::create_win(db, "2", "300", 5).await?;

    let repo = LootWinRepository::new(db);
    let wins = repo.get_many(1, &[100, 200, 300]).await?;

    assert_eq!(wins.len(), 2);
    assert_eq!(wins.get("100"), Some(&2));
    assert_eq!(wins.get("200"), Some(&0));
    assert!(!wins.contains_key("300"));

    Ok(())
}

/// Tests incrementing by more than the column can hold.
///
/// Expected: Ok with the count saturated at MAX_WINS for new and existing records
#[tokio::test]
async fn increment_saturates_at_max() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_loot_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_win(db, "1", "200", 5).await?;

    let repo = LootWinRepository::new(db);
    repo.increment(1, 100, 3_000_000_000).await?;
    repo.increment(1, 200, u32::MAX).await?;

    assert_eq!(repo.get(1, 100).await?.unwrap().wins, MAX_WINS);
    assert_eq!(repo.get(1, 200).await?.unwrap().wins, MAX_WINS);

    Ok(())
}

/// Tests incrementing a user already at the cap.
///
/// Expected: Ok with the count held at MAX_WINS and the row still readable
#[tokio::test]
async fn increment_at_max_stays_at_max() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_loot_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LootWinRepository::new(db);
    repo.set(1, 100, u32::MAX).await?;
    repo.increment(1, 100, 1).await?;

    assert_eq!(repo.get(1, 100).await?.unwrap().wins, MAX_WINS);
    assert_eq!(repo.get_many(1, &[100]).await?.get("100"), Some(&MAX_WINS));

    Ok(())
}

/// Tests decrementing by more than the column can hold.
///
/// Expected: Ok with the count floored at zero
#[tokio::test]
async fn decrement_by_huge_amount_floors_at_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_loot_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_win(db, "1", "100", 2).await?;

    let repo = LootWinRepository::new(db);
    repo.decrement(1, 100, u32::MAX).await?;

    assert_eq!(repo.get(1, 100).await?.unwrap().wins, 0);

    Ok(())
}
