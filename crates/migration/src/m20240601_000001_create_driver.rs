//! Create `driver` table.
//! Stores one row per driver entry: name, team, championship position, season year.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Driver::Table)
                    .if_not_exists()
                    .col(big_integer(Driver::Id).auto_increment().primary_key())
                    .col(string_len(Driver::Name, 128).not_null())
                    .col(string_len(Driver::Team, 128).not_null())
                    .col(integer(Driver::Position).not_null())
                    .col(integer(Driver::Year).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Driver::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Driver {
    Table,
    Id,
    Name,
    Team,
    Position,
    Year,
}
