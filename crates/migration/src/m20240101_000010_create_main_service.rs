//! Create `main_service` table, the root level of the service catalog.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MainService::Table)
                    .if_not_exists()
                    .col(big_integer(MainService::Id).primary_key().auto_increment())
                    .col(text(MainService::ServiceName).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(MainService::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum MainService {
    Table,
    Id,
    ServiceName,
}
