
use navi_test_utils::prelude::*;

use super::*;
use crate::server::{
    data::{
        attendance::AttendanceRepository, game::MatchRepository,
        goal_assist::GoalAssistRepository, player::PlayerRepository,
        upcoming_match::UpcomingMatchRepository,
    },
    service::seed::source::{ATTENDANCE_FILE, DASHBOARD_FILE, RESULTS_FILE, ROSTER_FILE},
};

const ROSTER_CSV: &str = "\u{feff}선수명,골,도움\n장현규,1,0\n우형오,0,1\n송민규,2,0\n민성우,0,0\n";

const DASHBOARD_CSV: &str = "\
시즌 전적,,,,,,
,,,,,,
경기,,승,,무,,패
3경기,,0승,,0무,,2패
";

const RESULTS_CSV: &str = "\
경기일,상대팀,우리득점,상대득점,판정,참석자,골도움기록
2026. 1. 11,찢자fc,1,4,패,\"민성우, 장현규, 우형오, 장현규, 김없음\",\"장현규 1골
우형오 1도움\"
15/1/2026,라온fc,0,0,무,,
2026.1.18,라온fc,2,4,승,\"송민규, 민성우\",\"송민규 1골
송민규 1골
없는선수 1골\"
";

const ATTENDANCE_CSV: &str = "이름,2026.1.11,2026.1.18,2026. 2. 15\n민성우,O,O,\n";

fn with_all_sources(builder: TestBuilder) -> TestBuilder {
    builder
        .with_seed_file(ROSTER_FILE, ROSTER_CSV)
        .with_seed_file(DASHBOARD_FILE, DASHBOARD_CSV)
        .with_seed_file(RESULTS_FILE, RESULTS_CSV)
        .with_seed_file(ATTENDANCE_FILE, ATTENDANCE_CSV)
}
