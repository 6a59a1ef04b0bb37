use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use navi::{
    model::game::CreateMatchDto,
    server::controller::game::{create_match, list_matches},
};
use serde_json::json;

use super::*;

fn match_body(match_date: &str, our_score: i32, opponent_score: i32) -> serde_json::Value {
    json!({
        "matchDate": match_date,
        "opponent": " 라온fc ",
        "ourScore": our_score,
        "opponentScore": opponent_score,
        "attendeePlayerIds": [1, 2, 2, 99],
        "goalAssistRecords": [
            { "playerId": 1, "goals": 2, "assists": 0 },
            { "playerId": 2, "goals": 0, "assists": 1 }
        ]
    })
}

/// Expect 200 and an empty list on a fresh ledger
#[tokio::test]
async fn lists_no_matches_for_fresh_ledger() -> Result<(), TestError> {
    let test = TestBuilder::new().with_ledger_tables().build().await?;

    let result = list_matches(State(test.to_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 200 when a match is recorded by calling the handler directly
#[tokio::test]
async fn creates_match_through_handler() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .with_player("장현규")
        .build()
        .await?;

    let request = CreateMatchDto {
        match_date: Some(date(2026, 3, 1)),
        opponent: Some("찢자fc".to_string()),
        our_score: 1,
        opponent_score: 0,
        attendee_player_ids: vec![1],
        ..Default::default()
    };

    let result = create_match(State(test.to_app_state()), Json(request)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect the created match, its detail and the season tally to agree
#[tokio::test]
async fn creates_and_reads_back_match() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .with_player("장현규")
        .with_player("우형오")
        .build()
        .await?;

    let (status, created) = send(
        &test,
        "POST",
        "/api/matches",
        Some(match_body("2026-03-01", 2, 1)),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["opponent"], "라온fc");
    assert_eq!(created["result"], "승");

    let uri = format!("/api/matches/{}", created["id"]);
    let (status, detail) = send(&test, "GET", &uri, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["attendeePlayerIds"], json!([1, 2]));
    assert_eq!(detail["goalAssistRecords"].as_array().unwrap().len(), 2);

    let (_, home) = send(&test, "GET", "/api/home", None).await;
    assert_eq!(home["seasonStats"]["seasonYear"], 2026);
    assert_eq!(home["seasonStats"]["wins"], 1);

    Ok(())
}

/// Expect 400 with a message when the match date is missing
#[tokio::test]
async fn rejects_match_without_date() -> Result<(), TestError> {
    let test = TestBuilder::new().with_ledger_tables().build().await?;

    let (status, body) = send(
        &test,
        "POST",
        "/api/matches",
        Some(json!({ "opponent": "라온fc", "ourScore": 1, "opponentScore": 0 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Match date is required");

    Ok(())
}

/// Expect an update to move the match between season outcomes
#[tokio::test]
async fn updates_match_and_tally() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .with_player("장현규")
        .with_player("우형오")
        .build()
        .await?;

    let (_, created) = send(
        &test,
        "POST",
        "/api/matches",
        Some(match_body("2026-03-01", 2, 1)),
    )
    .await;
    let uri = format!("/api/matches/{}", created["id"]);

    let (status, updated) = send(&test, "PUT", &uri, Some(match_body("2026-03-01", 0, 3))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["result"], "패");

    let (_, home) = send(&test, "GET", "/api/home", None).await;
    assert_eq!(home["seasonStats"]["wins"], 0);
    assert_eq!(home["seasonStats"]["losses"], 1);
    assert_eq!(home["seasonStats"]["totalMatches"], 1);

    Ok(())
}

/// Expect 404 when updating an unknown match
#[tokio::test]
async fn update_unknown_match_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_ledger_tables().build().await?;

    let (status, body) = send(
        &test,
        "PUT",
        "/api/matches/42",
        Some(match_body("2026-03-01", 1, 1)),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Match not found");

    Ok(())
}

/// Expect 204 on delete, then 404 for the removed match
#[tokio::test]
async fn deletes_match() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .with_player("장현규")
        .with_player("우형오")
        .build()
        .await?;

    let (_, created) = send(
        &test,
        "POST",
        "/api/matches",
        Some(match_body("2026-03-01", 2, 2)),
    )
    .await;
    let uri = format!("/api/matches/{}", created["id"]);

    let (status, body) = send(&test, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, serde_json::Value::Null);

    let (status, _) = send(&test, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, home) = send(&test, "GET", "/api/home", None).await;
    assert_eq!(home["seasonStats"]["draws"], 0);
    assert_eq!(home["seasonStats"]["totalMatches"], 0);

    Ok(())
}

/// Expect 404 when fetching an unknown match through the handler
#[tokio::test]
async fn get_unknown_match_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_ledger_tables().build().await?;

    let result =
        navi::server::controller::game::get_match(State(test.to_app_state()), Path(7)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
