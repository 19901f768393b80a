//! Create `sub_service` table with FK to `main_service`.
//! Deleting a main service cascades to its sub-services.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SubService::Table)
                    .if_not_exists()
                    .col(big_integer(SubService::Id).primary_key().auto_increment())
                    .col(big_integer(SubService::MainServiceId).not_null())
                    .col(text(SubService::ServiceName).not_null())
                    .col(
                        ColumnDef::new(SubService::Description)
                            .text()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sub_service_main")
                            .from(SubService::Table, SubService::MainServiceId)
                            .to(MainService::Table, MainService::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(SubService::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum SubService {
    Table,
    Id,
    MainServiceId,
    ServiceName,
    Description,
}

#[derive(DeriveIden)]
enum MainService { Table, Id }
