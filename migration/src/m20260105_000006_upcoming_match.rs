use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UpcomingMatch::Table)
                    .if_not_exists()
                    .col(pk_auto(UpcomingMatch::Id))
                    .col(date(UpcomingMatch::MatchDate))
                    .col(time_null(UpcomingMatch::MatchTime))
                    .col(string_len(UpcomingMatch::Opponent, 100))
                    .col(string_len_null(UpcomingMatch::Venue, 200))
                    .col(string_len_null(UpcomingMatch::Memo, 500))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UpcomingMatch::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum UpcomingMatch {
    Table,
    Id,
    MatchDate,
    MatchTime,
    Opponent,
    Venue,
    Memo,
}
