//! Create `facts` table (counter widgets: label plus a number).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Facts::Table)
                    .if_not_exists()
                    .col(big_integer(Facts::Id).primary_key().auto_increment())
                    .col(text(Facts::Label).not_null())
                    .col(big_integer(Facts::Number).not_null())
                    .col(text(Facts::Status).not_null().default("Visible"))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Facts::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Facts {
    Table,
    Id,
    Label,
    Number,
    Status,
}
