use chrono::{Datelike, NaiveDate, NaiveTime};

use crate::model::game::{CreateMatchDto, MatchDto, MatchResult};
use crate::server::{error::game::MatchError, model::db::MatchModel};

/// Validated column values of a match.
///
/// The result label is not a field: repositories derive it from the scores through
/// [`MatchFields::result`] so the stored label cannot drift from the score.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchFields {
    pub match_date: NaiveDate,
    pub match_time: Option<NaiveTime>,
    pub opponent: String,
    pub our_score: i32,
    pub opponent_score: i32,
}

impl MatchFields {
    /// Validate a create/update request.
    ///
    /// # Returns
    /// - `Ok(MatchFields)` - Request carried a match date; opponent trimmed, missing → "",
    ///   negative scores raised to 0
    /// - `Err(MatchError::MissingMatchDate)` - Request had no match date
    pub fn from_request(request: &CreateMatchDto) -> Result<Self, MatchError> {
        let match_date = request.match_date.ok_or(MatchError::MissingMatchDate)?;

        Ok(Self {
            match_date,
            match_time: request.match_time,
            opponent: request
                .opponent
                .as_deref()
                .map(str::trim)
                .unwrap_or_default()
                .to_string(),
            our_score: request.our_score.max(0),
            opponent_score: request.opponent_score.max(0),
        })
    }

    pub fn result(&self) -> MatchResult {
        MatchResult::from_scores(self.our_score, self.opponent_score)
    }

    pub fn season_year(&self) -> i32 {
        self.match_date.year()
    }
}

impl From<MatchModel> for MatchDto {
    fn from(model: MatchModel) -> Self {
        // Stored labels always come from `MatchFields::result`; fall back to the score for
        // rows written by anything else.
        let result = MatchResult::from_label(&model.result)
            .unwrap_or_else(|| MatchResult::from_scores(model.our_score, model.opponent_score));

        Self {
            id: model.id,
            match_date: model.match_date,
            match_time: model.match_time,
            opponent: model.opponent,
            our_score: model.our_score,
            opponent_score: model.opponent_score,
            result,
        }
    }
}
