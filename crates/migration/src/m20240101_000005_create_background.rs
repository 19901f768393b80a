//! Create `background` table (company-background paragraphs).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Background::Table)
                    .if_not_exists()
                    .col(big_integer(Background::Id).primary_key().auto_increment())
                    .col(text(Background::Paragraph).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Background::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Background {
    Table,
    Id,
    Paragraph,
}
