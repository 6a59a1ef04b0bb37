use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260105_000001_player::Player, m20260105_000002_game::Game};

static IDX_MATCH_GOAL_ASSIST_MATCH_ID: &str = "idx-match_goal_assist-match_id";
static FK_MATCH_GOAL_ASSIST_MATCH_ID: &str = "fk-match_goal_assist-match_id";
static FK_MATCH_GOAL_ASSIST_PLAYER_ID: &str = "fk-match_goal_assist-player_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MatchGoalAssist::Table)
                    .if_not_exists()
                    .col(pk_auto(MatchGoalAssist::Id))
                    .col(integer(MatchGoalAssist::MatchId))
                    .col(integer(MatchGoalAssist::PlayerId))
                    .col(integer(MatchGoalAssist::Goals).default(0))
                    .col(integer(MatchGoalAssist::Assists).default(0))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MATCH_GOAL_ASSIST_MATCH_ID)
                    .table(MatchGoalAssist::Table)
                    .col(MatchGoalAssist::MatchId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MATCH_GOAL_ASSIST_MATCH_ID)
                    .from_tbl(MatchGoalAssist::Table)
                    .from_col(MatchGoalAssist::MatchId)
                    .to_tbl(Game::Table)
                    .to_col(Game::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MATCH_GOAL_ASSIST_PLAYER_ID)
                    .from_tbl(MatchGoalAssist::Table)
                    .from_col(MatchGoalAssist::PlayerId)
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
                    .name(FK_MATCH_GOAL_ASSIST_PLAYER_ID)
                    .table(MatchGoalAssist::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_MATCH_GOAL_ASSIST_MATCH_ID)
                    .table(MatchGoalAssist::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MATCH_GOAL_ASSIST_MATCH_ID)
                    .table(MatchGoalAssist::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(MatchGoalAssist::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum MatchGoalAssist {
    Table,
    Id,
    MatchId,
    PlayerId,
    Goals,
    Assists,
}
