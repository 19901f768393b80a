use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // SubService: index on main_service_id
        manager
            .create_index(
                Index::create()
                    .name("idx_sub_service_main_id")
                    .table(SubService::Table)
                    .col(SubService::MainServiceId)
                    .to_owned(),
            )
            .await?;

        // ServiceTest: index on sub_service_id
        manager
            .create_index(
                Index::create()
                    .name("idx_service_test_sub_id")
                    .table(ServiceTest::Table)
                    .col(ServiceTest::SubServiceId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_sub_service_main_id").table(SubService::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_service_test_sub_id").table(ServiceTest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SubService { Table, MainServiceId }

#[derive(DeriveIden)]
enum ServiceTest { Table, SubServiceId }
