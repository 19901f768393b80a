//! Create `banner` table.
//! Home-page hero banners with an optional inline image blob.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Banner::Table)
                    .if_not_exists()
                    .col(big_integer(Banner::Id).primary_key().auto_increment())
                    .col(text(Banner::HighlightTag).not_null())
                    .col(text(Banner::Title).not_null())
                    .col(
                        ColumnDef::new(Banner::Description)
                            .text()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Banner::Image)
                            .blob()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Banner::ImageMime)
                            .text()
                            .null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Banner::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Banner {
    Table,
    Id,
    HighlightTag,
    Title,
    Description,
    Image,
    ImageMime,
}
