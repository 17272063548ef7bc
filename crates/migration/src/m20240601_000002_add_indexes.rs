use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Driver: composite index serving the (name, year, team) existence check.
        // Intentionally NOT unique: the triple is enforced at the application
        // layer, and a batch may legitimately insert identical candidates.
        manager
            .create_index(
                Index::create()
                    .name("idx_driver_name_year_team")
                    .table(Driver::Table)
                    .col(Driver::Name)
                    .col(Driver::Year)
                    .col(Driver::Team)
                    .to_owned(),
            )
            .await?;

        // Driver: index on year for the common season-scoped search
        manager
            .create_index(
                Index::create()
                    .name("idx_driver_year")
                    .table(Driver::Table)
                    .col(Driver::Year)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_driver_name_year_team").table(Driver::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_driver_year").table(Driver::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Driver { Table, Name, Team, Year }
