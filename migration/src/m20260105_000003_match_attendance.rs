use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260105_000001_player::Player, m20260105_000002_game::Game};

static IDX_MATCH_ATTENDANCE_MATCH_PLAYER: &str = "idx-match_attendance-match_id-player_id";
static FK_MATCH_ATTENDANCE_MATCH_ID: &str = "fk-match_attendance-match_id";
static FK_MATCH_ATTENDANCE_PLAYER_ID: &str = "fk-match_attendance-player_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MatchAttendance::Table)
                    .if_not_exists()
                    .col(pk_auto(MatchAttendance::Id))
                    .col(integer(MatchAttendance::MatchId))
                    .col(integer(MatchAttendance::PlayerId))
                    .col(boolean(MatchAttendance::Attended).default(true))
                    .to_owned(),
            )
            .await?;

        // One attendance row per player per match
        manager
            .create_index(
                Index::create()
                    .name(IDX_MATCH_ATTENDANCE_MATCH_PLAYER)
                    .table(MatchAttendance::Table)
                    .col(MatchAttendance::MatchId)
                    .col(MatchAttendance::PlayerId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MATCH_ATTENDANCE_MATCH_ID)
                    .from_tbl(MatchAttendance::Table)
                    .from_col(MatchAttendance::MatchId)
                    .to_tbl(Game::Table)
                    .to_col(Game::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MATCH_ATTENDANCE_PLAYER_ID)
                    .from_tbl(MatchAttendance::Table)
                    .from_col(MatchAttendance::PlayerId)
                    .to_tbl(Player::Table)
                    .to_col(Player::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_MATCH_ATTENDANCE_PLAYER_ID)
                    .table(MatchAttendance::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_MATCH_ATTENDANCE_MATCH_ID)
                    .table(MatchAttendance::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MATCH_ATTENDANCE_MATCH_PLAYER)
                    .table(MatchAttendance::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(MatchAttendance::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum MatchAttendance {
    Table,
    Id,
    MatchId,
    PlayerId,
    Attended,
}
