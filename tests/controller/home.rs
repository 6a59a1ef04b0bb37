use axum::{extract::State, http::StatusCode, response::IntoResponse};
use navi::server::controller::home::get_home;

use super::*;

/// Expect 200 with an empty bundle on a fresh ledger
#[tokio::test]
async fn returns_empty_bundle_for_fresh_ledger() -> Result<(), TestError> {
    let test = TestBuilder::new().with_ledger_tables().build().await?;

    let result = get_home(State(test.to_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect the tally, schedule and rankings to be serialized in camelCase
#[tokio::test]
async fn serializes_home_bundle() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_ledger_tables()
        .with_player("장현규")
        .with_player("우형오")
        .build()
        .await?;
    test.season().insert_season_stats(2026, 1, 0, 1).await?;
    let game = test
        .game()
        .insert_match(date(2026, 1, 11), "찢자fc", 3, 1)
        .await?;
    test.game().insert_attendance(game.id, 1, true).await?;
    test.game().insert_goal_assist(game.id, 1, 2, 0).await?;
    test.game().insert_goal_assist(game.id, 2, 1, 1).await?;
    test.upcoming()
        .insert_upcoming_match(date(2026, 2, 15), "라온fc")
        .await?;

    let (status, body) = send(&test, "GET", "/api/home", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["seasonStats"]["seasonYear"], 2026);
    assert_eq!(body["seasonStats"]["totalMatches"], 2);
    assert_eq!(body["nextMatches"][0]["opponent"], "라온fc");
    assert_eq!(body["goalRanking"][0]["playerName"], "장현규");
    assert_eq!(body["goalRanking"][0]["value"], 2);
    assert_eq!(body["goalRanking"][1]["rank"], 2);
    assert_eq!(body["assistRanking"].as_array().unwrap().len(), 1);
    assert_eq!(body["attendanceRanking"][0]["value"], 1);

    Ok(())
}
