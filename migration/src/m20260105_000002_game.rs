use sea_orm_migration::{prelude::*, schema::*};

static IDX_GAME_MATCH_DATE: &str = "idx-game-match_date";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Game::Table)
                    .if_not_exists()
                    .col(pk_auto(Game::Id))
                    .col(date(Game::MatchDate))
                    .col(time_null(Game::MatchTime))
                    .col(string(Game::Opponent).default(""))
                    .col(integer(Game::OurScore).default(0))
                    .col(integer(Game::OpponentScore).default(0))
                    .col(string_len(Game::Result, 10))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_GAME_MATCH_DATE)
                    .table(Game::Table)
                    .col(Game::MatchDate)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_GAME_MATCH_DATE)
                    .table(Game::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Game::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Game {
    Table,
    Id,
    MatchDate,
    MatchTime,
    Opponent,
    OurScore,
    OpponentScore,
    Result,
}
