//! Built-in dataset used when the CSV exports are unavailable at startup.

use chrono::NaiveDate;

use crate::server::{
    model::{game::MatchFields, season::SeasonTally},
    service::seed::{
        dataset::{MatchSeed, SeasonSeed, SeedDataset},
        parse::GoalAssistLine,
        source::DASHBOARD_SEASON_YEAR,
    },
};

const ROSTER: [&str; 32] = [
    "민성우", "정준희", "김재린", "송민규", "양승운", "박승재", "김채운", "장현규",
    "전찬일", "김재헌", "박성준", "방홍석", "이승준", "김태운", "김시형", "김강엽",
    "우형오", "류성우", "안진석", "이재원", "정민철", "이규호", "배재빈", "강지구",
    "권준", "정봉원", "펠릭스", "오경택", "오상우", "이민형", "장채운", "도나",
];

struct PlayedMatch {
    date: (i32, u32, u32),
    opponent: &'static str,
    score: (i32, i32),
    attendees: &'static [&'static str],
    goal_assists: &'static [(&'static str, i32, i32)],
}

const PLAYED_MATCHES: [PlayedMatch; 2] = [
    PlayedMatch {
        date: (2026, 1, 11),
        opponent: "찢자fc",
        score: (1, 4),
        attendees: &[
            "민성우", "김재린", "송민규", "양승운", "박승재", "김채운", "장현규", "박성준",
            "이승준", "김태운", "우형오", "류성우", "배재빈", "이민형",
        ],
        goal_assists: &[("장현규", 1, 0), ("우형오", 0, 1)],
    },
    PlayedMatch {
        date: (2026, 1, 18),
        opponent: "라온fc",
        score: (2, 4),
        attendees: &[
            "민성우", "정준희", "김재린", "송민규", "양승운", "박승재", "장현규", "전찬일",
            "박성준", "김태운", "김시형", "우형오", "류성우",
        ],
        goal_assists: &[("송민규", 2, 0), ("박성준", 0, 1), ("김재린", 0, 1)],
    },
];

const NEXT_MATCH_DATE: (i32, u32, u32) = (2026, 2, 15);

fn ymd((year, month, day): (i32, u32, u32)) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

/// The club's 2026 roster, its first two results and the next scheduled date
pub fn fallback_dataset() -> SeedDataset {
    let matches = PLAYED_MATCHES
        .iter()
        .filter_map(|played| {
            Some(MatchSeed {
                fields: MatchFields {
                    match_date: ymd(played.date)?,
                    match_time: None,
                    opponent: played.opponent.to_string(),
                    our_score: played.score.0,
                    opponent_score: played.score.1,
                },
                attendee_names: played.attendees.iter().map(|name| name.to_string()).collect(),
                goal_assists: played
                    .goal_assists
                    .iter()
                    .map(|(player_name, goals, assists)| GoalAssistLine {
                        player_name: player_name.to_string(),
                        goals: *goals,
                        assists: *assists,
                    })
                    .collect(),
            })
        })
        .collect();

    SeedDataset {
        roster: ROSTER.iter().map(|name| name.to_string()).collect(),
        season: SeasonSeed {
            season_year: DASHBOARD_SEASON_YEAR,
            tally: SeasonTally::new(0, 0, 2),
        },
        matches,
        upcoming_date: ymd(NEXT_MATCH_DATE),
    }
}
