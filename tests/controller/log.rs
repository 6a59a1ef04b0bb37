use axum::{extract::State, http::StatusCode, response::IntoResponse};
use navi::server::controller::log::{get_assist_log, get_attendance_log, get_goal_log};

use super::*;

/// Expect 200 from every log endpoint on a fresh ledger
#[tokio::test]
async fn logs_are_empty_for_fresh_ledger() -> Result<(), TestError> {
    let test = TestBuilder::new().with_ledger_tables().build().await?;

    let goals = get_goal_log(State(test.to_app_state())).await;
    let assists = get_assist_log(State(test.to_app_state())).await;
    let attendance = get_attendance_log(State(test.to_app_state())).await;

    assert_eq!(goals.unwrap().into_response().status(), StatusCode::OK);
    assert_eq!(assists.unwrap().into_response().status(), StatusCode::OK);
    assert_eq!(attendance.unwrap().into_response().status(), StatusCode::OK);

    Ok(())
}

/// Expect goal and assist endpoints to serve the same contribution log
#[tokio::test]
async fn goal_and_assist_logs_match() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_ledger_tables()
        .with_player("장현규")
        .with_player("우형오")
        .build()
        .await?;
    let game = test
        .game()
        .insert_match(date(2026, 1, 11), "찢자fc", 1, 4)
        .await?;
    test.game().insert_goal_assist(game.id, 2, 0, 1).await?;
    test.game().insert_goal_assist(game.id, 1, 1, 0).await?;

    let (status, goals) = send(&test, "GET", "/api/goals", None).await;
    let (_, assists) = send(&test, "GET", "/api/assists", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(goals, assists);
    assert_eq!(goals[0]["playerName"], "장현규");
    assert_eq!(goals[0]["opponent"], "찢자fc");
    assert_eq!(goals[1]["assists"], 1);

    Ok(())
}

/// Expect each match's roster listed by name, most recent match first
#[tokio::test]
async fn attendance_log_lists_rosters() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_ledger_tables()
        .with_player("우형오")
        .with_player("민성우")
        .build()
        .await?;
    let earlier = test
        .game()
        .insert_match(date(2026, 1, 11), "찢자fc", 1, 4)
        .await?;
    let later = test
        .game()
        .insert_match(date(2026, 1, 18), "라온fc", 2, 4)
        .await?;
    test.game().insert_attendance(earlier.id, 1, true).await?;
    test.game().insert_attendance(earlier.id, 2, true).await?;

    let (status, body) = send(&test, "GET", "/api/attendance", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["matchId"], later.id);
    assert_eq!(body[0]["attendedPlayerNames"].as_array().unwrap().len(), 0);
    assert_eq!(body[1]["attendedPlayerNames"][0], "민성우");
    assert_eq!(body[1]["attendedPlayerNames"][1], "우형오");

    Ok(())
}
