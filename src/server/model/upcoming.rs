use chrono::{NaiveDate, NaiveTime};

use crate::model::upcoming::{CreateUpcomingMatchDto, UpcomingMatchDto};
use crate::server::{
    error::upcoming::UpcomingMatchError, model::db::UpcomingMatchModel, util::text::non_blank,
};

/// Validated column values of a scheduled match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpcomingMatchFields {
    pub match_date: NaiveDate,
    pub match_time: Option<NaiveTime>,
    pub opponent: String,
    pub venue: Option<String>,
    pub memo: Option<String>,
}

impl UpcomingMatchFields {
    /// Validate a create/update request; both date and a non-blank opponent are required.
    pub fn from_request(request: &CreateUpcomingMatchDto) -> Result<Self, UpcomingMatchError> {
        let match_date = request
            .match_date
            .ok_or(UpcomingMatchError::MissingMatchDate)?;
        let opponent =
            non_blank(request.opponent.as_deref()).ok_or(UpcomingMatchError::MissingOpponent)?;

        Ok(Self {
            match_date,
            match_time: request.match_time,
            opponent,
            venue: non_blank(request.venue.as_deref()),
            memo: non_blank(request.memo.as_deref()),
        })
    }
}

impl From<UpcomingMatchModel> for UpcomingMatchDto {
    fn from(model: UpcomingMatchModel) -> Self {
        Self {
            id: model.id,
            match_date: model.match_date,
            match_time: model.match_time,
            opponent: model.opponent,
            venue: model.venue,
            memo: model.memo,
        }
    }
}
