use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use navi::server::controller::player::get_player;
use serde_json::json;

use super::*;

/// Expect 200 for a known player name
#[tokio::test]
async fn returns_player_detail() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_ledger_tables()
        .with_player("장현규")
        .build()
        .await?;
    let game = test
        .game()
        .insert_match(date(2026, 1, 11), "찢자fc", 1, 4)
        .await?;
    test.game().insert_attendance(game.id, 1, true).await?;
    test.game().insert_goal_assist(game.id, 1, 1, 0).await?;

    let result = get_player(State(test.to_app_state()), Path("장현규".to_string())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 404 for an unknown player name
#[tokio::test]
async fn unknown_player_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_ledger_tables().build().await?;

    let result = get_player(State(test.to_app_state()), Path("김없음".to_string())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect the roster sorted by name with phone numbers
#[tokio::test]
async fn lists_players() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_ledger_tables().build().await?;
    test.player()
        .insert_player_with_phone("장현규", "010-1111-2222")
        .await?;
    test.player().insert_player("민성우").await?;

    let (status, body) = send(&test, "GET", "/api/players", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["name"], "민성우");
    assert_eq!(body[0]["phoneNumber"], serde_json::Value::Null);
    assert_eq!(body[1]["phoneNumber"], "010-1111-2222");

    Ok(())
}

/// Expect the phone number trimmed on set and cleared by a blank value
#[tokio::test]
async fn updates_and_clears_phone_number() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .with_player("장현규")
        .build()
        .await?;

    let (status, body) = send(
        &test,
        "PATCH",
        "/api/player/id/1",
        Some(json!({ "phoneNumber": " 010-1234-5678 " })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["phoneNumber"], "010-1234-5678");

    let (status, body) = send(
        &test,
        "PATCH",
        "/api/player/id/1",
        Some(json!({ "phoneNumber": "   " })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["phoneNumber"], serde_json::Value::Null);

    Ok(())
}

/// Expect 404 when updating an unknown player
#[tokio::test]
async fn update_unknown_player_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_ledger_tables().build().await?;

    let (status, body) = send(
        &test,
        "PATCH",
        "/api/player/id/9",
        Some(json!({ "phoneNumber": "010-0000-0000" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Player not found");

    Ok(())
}
