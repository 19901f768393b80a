//! Create `why_choose_us` table (selling-point bullets).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WhyChooseUs::Table)
                    .if_not_exists()
                    .col(big_integer(WhyChooseUs::Id).primary_key().auto_increment())
                    .col(text(WhyChooseUs::Label).not_null())
                    .col(text(WhyChooseUs::Value).not_null())
                    .col(text(WhyChooseUs::Status).not_null().default("Visible"))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(WhyChooseUs::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum WhyChooseUs {
    Table,
    Id,
    Label,
    Value,
    Status,
}
