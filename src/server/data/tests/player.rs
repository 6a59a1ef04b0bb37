//! Tests for PlayerRepository.

use super::*;

use crate::server::data::player::PlayerRepository;

/// Expect the existing row when a name is already on the roster
#[tokio::test]
async fn get_or_create_reuses_existing_player() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .with_player("장현규")
        .build()
        .await?;

    let player_repo = PlayerRepository::new(&test.db);
    let player = player_repo.get_or_create("장현규").await?;

    assert_eq!(player.id, 1);
    assert_eq!(player_repo.count().await?, 1);

    Ok(())
}

/// Expect a new row for an unknown name
#[tokio::test]
async fn get_or_create_inserts_unknown_player() -> Result<(), TestError> {
    let test = TestBuilder::new().with_ledger_tables().build().await?;

    let player_repo = PlayerRepository::new(&test.db);
    let player = player_repo.get_or_create("우형오").await?;

    assert_eq!(player.name, "우형오");
    assert_eq!(player.phone_number, None);
    assert_eq!(player_repo.count().await?, 1);

    Ok(())
}

/// Expect name lookups to be exact
#[tokio::test]
async fn find_by_name_is_exact() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .with_player("송민규")
        .build()
        .await?;

    let player_repo = PlayerRepository::new(&test.db);

    assert!(player_repo.find_by_name("송민규").await?.is_some());
    assert!(player_repo.find_by_name("송민").await?.is_none());
    assert!(player_repo.find_by_name(" 송민규").await?.is_none());

    Ok(())
}

/// Expect only IDs of stored players to be returned
#[tokio::test]
async fn get_existing_ids_drops_unknown_ids() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .with_player("민성우")
        .with_player("김재린")
        .build()
        .await?;

    let player_repo = PlayerRepository::new(&test.db);
    let existing = player_repo.get_existing_ids(&[1, 2, 99]).await?;

    assert_eq!(existing.len(), 2);
    assert!(existing.contains(&1));
    assert!(existing.contains(&2));
    assert!(player_repo.get_existing_ids(&[]).await?.is_empty());

    Ok(())
}

/// Expect players ordered by name
#[tokio::test]
async fn get_all_by_name_sorts_by_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .with_player("정준희")
        .with_player("김재린")
        .with_player("박승재")
        .build()
        .await?;

    let player_repo = PlayerRepository::new(&test.db);
    let names: Vec<String> = player_repo
        .get_all_by_name()
        .await?
        .into_iter()
        .map(|player| player.name)
        .collect();

    assert_eq!(names, vec!["김재린", "박승재", "정준희"]);

    Ok(())
}

/// Expect phone number to be replaced and cleared
#[tokio::test]
async fn update_phone_number_sets_and_clears() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_ledger_tables().build().await?;
    let player = test
        .player()
        .insert_player_with_phone("이승준", "010-0000-0000")
        .await?;

    let player_repo = PlayerRepository::new(&test.db);
    let updated = player_repo
        .update_phone_number(player.id, Some("010-1111-2222".to_string()))
        .await?;
    assert_eq!(
        updated.and_then(|player| player.phone_number),
        Some("010-1111-2222".to_string())
    );

    let cleared = player_repo.update_phone_number(player.id, None).await?;
    assert_eq!(cleared.map(|player| player.phone_number), Some(None));

    Ok(())
}

/// Expect Ok(None) when updating a player that does not exist
#[tokio::test]
async fn update_phone_number_returns_none_for_unknown_player() -> Result<(), TestError> {
    let test = TestBuilder::new().with_ledger_tables().build().await?;

    let player_repo = PlayerRepository::new(&test.db);
    let result = player_repo.update_phone_number(1, None).await?;

    assert!(result.is_none());

    Ok(())
}

/// Expect Error when required database tables are not present
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let player_repo = PlayerRepository::new(&test.db);
    let result = player_repo.find_by_name("장현규").await;

    assert!(result.is_err());

    Ok(())
}
