use axum::{extract::State, http::StatusCode, response::IntoResponse};
use navi::server::controller::admin::seed_csv;

use super::*;

const ROSTER_CSV: &str = "선수명,골,도움\n장현규,1,0\n민성우,0,0\n";

const DASHBOARD_CSV: &str = "\
시즌 전적,,,,,,
,,,,,,
경기,,승,,무,,패
1경기,,0승,,0무,,1패
";

const RESULTS_CSV: &str = "\
경기일,상대팀,우리득점,상대득점,판정,참석자,골도움기록
2026. 1. 11,찢자fc,1,4,패,\"민성우, 장현규\",장현규 1골
";

const ATTENDANCE_CSV: &str = "이름,2026.1.11,2026. 2. 15\n민성우,O,\n";

fn with_exports(builder: TestBuilder) -> TestBuilder {
    builder
        .with_seed_file("goal_assist.csv", ROSTER_CSV)
        .with_seed_file("dashboard.csv", DASHBOARD_CSV)
        .with_seed_file("response.csv", RESULTS_CSV)
        .with_seed_file("attendance.csv", ATTENDANCE_CSV)
}

/// Expect 200 from the handler even when there is nothing to seed
#[tokio::test]
async fn responds_ok_without_exports() -> Result<(), TestError> {
    let test = TestBuilder::new().with_ledger_tables().build().await?;

    let result = seed_csv(State(test.to_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect `done: false` when an export is missing
#[tokio::test]
async fn reports_missing_exports() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .with_seed_file("goal_assist.csv", ROSTER_CSV)
        .build()
        .await?;

    let (status, body) = send(&test, "GET", "/api/admin/seed-csv", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["done"], false);
    assert_eq!(body["message"], "이미 데이터가 있거나 CSV 리소스가 없습니다.");

    Ok(())
}

/// Expect the exports loaded into an empty ledger and visible through the read endpoints
#[tokio::test]
async fn seeds_empty_ledger() -> Result<(), TestError> {
    let test = with_exports(TestBuilder::new().with_ledger_tables())
        .build()
        .await?;

    let (status, body) = send(&test, "GET", "/api/admin/seed-csv", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["done"], true);
    assert_eq!(body["message"], "CSV 데이터를 DB에 넣었습니다.");

    let (_, home) = send(&test, "GET", "/api/home", None).await;
    assert_eq!(home["seasonStats"]["losses"], 1);
    assert_eq!(home["goalRanking"][0]["playerName"], "장현규");
    assert_eq!(home["nextMatches"][0]["matchDate"], "2026-02-15");

    let (_, matches) = send(&test, "GET", "/api/matches", None).await;
    assert_eq!(matches.as_array().unwrap().len(), 1);

    Ok(())
}

/// Expect a second seed attempt to leave the ledger untouched
#[tokio::test]
async fn refuses_to_seed_twice() -> Result<(), TestError> {
    let test = with_exports(TestBuilder::new().with_ledger_tables())
        .build()
        .await?;

    send(&test, "GET", "/api/admin/seed-csv", None).await;
    let (status, body) = send(&test, "GET", "/api/admin/seed-csv", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["done"], false);

    let (_, matches) = send(&test, "GET", "/api/matches", None).await;
    assert_eq!(matches.as_array().unwrap().len(), 1);

    Ok(())
}
