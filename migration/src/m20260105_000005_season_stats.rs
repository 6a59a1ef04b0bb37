use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SeasonStats::Table)
                    .if_not_exists()
                    .col(pk_auto(SeasonStats::Id))
                    .col(integer_uniq(SeasonStats::SeasonYear))
                    .col(integer(SeasonStats::TotalMatches).default(0))
                    .col(integer(SeasonStats::Wins).default(0))
                    .col(integer(SeasonStats::Draws).default(0))
                    .col(integer(SeasonStats::Losses).default(0))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SeasonStats::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum SeasonStats {
    Table,
    Id,
    SeasonYear,
    TotalMatches,
    Wins,
    Draws,
    Losses,
}
