//! Create `tus` table (opening-hours rows shown in the site footer).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tus::Table)
                    .if_not_exists()
                    .col(big_integer(Tus::Id).primary_key().auto_increment())
                    .col(text(Tus::Day).not_null())
                    .col(text(Tus::Hours).not_null())
                    .col(text(Tus::Status).not_null().default("Open"))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Tus::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Tus {
    Table,
    Id,
    Day,
    Hours,
    Status,
}
