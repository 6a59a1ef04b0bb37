use super::*;

/// Expect log lines grouped by match, newest first, best contribution first
#[tokio::test]
async fn orders_by_match_then_contribution() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_ledger_tables()
        .with_player("장현규")
        .with_player("우형오")
        .with_player("송민규")
        .with_player("박성준")
        .build()
        .await?;
    let first = test
        .game()
        .insert_match(date(2026, 1, 11), "찢자fc", 1, 4)
        .await?;
    let second = test
        .game()
        .insert_match(date(2026, 1, 18), "라온fc", 2, 4)
        .await?;
    test.game().insert_goal_assist(first.id, 2, 0, 1).await?;
    test.game().insert_goal_assist(first.id, 1, 1, 0).await?;
    test.game().insert_goal_assist(second.id, 4, 0, 1).await?;
    test.game().insert_goal_assist(second.id, 3, 2, 0).await?;
    test.game().insert_goal_assist(second.id, 1, 0, 0).await?;

    let stats_service = StatsService::new(&test.db);
    let log = stats_service.goal_assist_log().await.unwrap();

    let lines: Vec<(&str, &str)> = log
        .iter()
        .map(|line| (line.opponent.as_str(), line.player_name.as_str()))
        .collect();
    assert_eq!(
        lines,
        vec![
            ("라온fc", "송민규"),
            ("라온fc", "박성준"),
            ("찢자fc", "장현규"),
            ("찢자fc", "우형오"),
        ]
    );

    Ok(())
}

/// Expect one roster per match with names sorted, including empty rosters
#[tokio::test]
async fn attendance_log_sorts_names() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_ledger_tables()
        .with_player("정준희")
        .with_player("김재린")
        .build()
        .await?;
    let first = test
        .game()
        .insert_match(date(2026, 1, 11), "찢자fc", 1, 4)
        .await?;
    let second = test
        .game()
        .insert_match(date(2026, 1, 18), "라온fc", 2, 4)
        .await?;
    test.game().insert_attendance(first.id, 1, true).await?;
    test.game().insert_attendance(first.id, 2, true).await?;

    let stats_service = StatsService::new(&test.db);
    let log = stats_service.attendance_log().await.unwrap();

    assert_eq!(log.len(), 2);
    assert_eq!(log[0].match_id, second.id);
    assert!(log[0].attended_player_names.is_empty());
    assert_eq!(log[1].attended_player_names, vec!["김재린", "정준희"]);

    Ok(())
}
