//! Create `core_values` table (company core-value bullets).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CoreValues::Table)
                    .if_not_exists()
                    .col(big_integer(CoreValues::Id).primary_key().auto_increment())
                    .col(text(CoreValues::BulletText).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(CoreValues::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum CoreValues {
    Table,
    Id,
    BulletText,
}
