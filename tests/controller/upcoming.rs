use axum::{extract::State, http::StatusCode, response::IntoResponse};
use navi::server::controller::upcoming::list_upcoming;
use serde_json::json;

use super::*;

/// Expect 200 and an empty schedule on a fresh ledger
#[tokio::test]
async fn lists_empty_schedule() -> Result<(), TestError> {
    let test = TestBuilder::new().with_ledger_tables().build().await?;

    let result = list_upcoming(State(test.to_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect blank optional fields stored as null and the schedule ordered by date
#[tokio::test]
async fn creates_scheduled_matches() -> Result<(), TestError> {
    let test = TestBuilder::new().with_ledger_tables().build().await?;

    let (status, created) = send(
        &test,
        "POST",
        "/api/next-matches",
        Some(json!({
            "matchDate": "2026-03-08",
            "matchTime": "14:00:00",
            "opponent": " 라온fc ",
            "venue": "  ",
            "memo": "유니폼 지참"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["opponent"], "라온fc");
    assert_eq!(created["venue"], serde_json::Value::Null);
    assert_eq!(created["memo"], "유니폼 지참");

    send(
        &test,
        "POST",
        "/api/next-matches",
        Some(json!({ "matchDate": "2026-02-15", "opponent": "찢자fc" })),
    )
    .await;

    let (_, schedule) = send(&test, "GET", "/api/next-matches", None).await;
    assert_eq!(schedule[0]["opponent"], "찢자fc");
    assert_eq!(schedule[1]["opponent"], "라온fc");

    Ok(())
}

/// Expect 400 when the opponent is blank
#[tokio::test]
async fn rejects_blank_opponent() -> Result<(), TestError> {
    let test = TestBuilder::new().with_ledger_tables().build().await?;

    let (status, body) = send(
        &test,
        "POST",
        "/api/next-matches",
        Some(json!({ "matchDate": "2026-02-15", "opponent": "  " })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Opponent is required");

    Ok(())
}

/// Expect an update to replace every field of the scheduled match
#[tokio::test]
async fn updates_scheduled_match() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_ledger_tables().build().await?;
    let scheduled = test
        .upcoming()
        .insert_upcoming_match(date(2026, 2, 15), "다음 상대팀")
        .await?;

    let uri = format!("/api/next-matches/{}", scheduled.id);
    let (status, body) = send(
        &test,
        "PUT",
        &uri,
        Some(json!({ "matchDate": "2026-02-22", "opponent": "라온fc", "venue": "홈 경기장" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["matchDate"], "2026-02-22");
    assert_eq!(body["venue"], "홈 경기장");

    Ok(())
}

/// Expect 204 on delete and 404 on a second delete
#[tokio::test]
async fn deletes_scheduled_match() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_ledger_tables().build().await?;
    let scheduled = test
        .upcoming()
        .insert_upcoming_match(date(2026, 2, 15), "라온fc")
        .await?;

    let uri = format!("/api/next-matches/{}", scheduled.id);

    let (status, _) = send(&test, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&test, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Upcoming match not found");

    Ok(())
}
