//! Create `ceo_card` table (the single CEO presentation card).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CeoCard::Table)
                    .if_not_exists()
                    .col(big_integer(CeoCard::Id).primary_key().auto_increment())
                    .col(text(CeoCard::Name).not_null())
                    .col(text(CeoCard::Title).not_null())
                    .col(text(CeoCard::Email).not_null())
                    .col(
                        ColumnDef::new(CeoCard::Image)
                            .blob()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(CeoCard::ImageMime)
                            .text()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(CeoCard::ShortDescription)
                            .text()
                            .null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(CeoCard::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum CeoCard {
    Table,
    Id,
    Name,
    Title,
    Email,
    Image,
    ImageMime,
    ShortDescription,
}
