//! Create `gallery` table.
//! Pure image records; the blob is mandatory here, unlike the other
//! attachment-bearing tables.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Gallery::Table)
                    .if_not_exists()
                    .col(big_integer(Gallery::Id).primary_key().auto_increment())
                    .col(blob(Gallery::Image).not_null())
                    .col(
                        ColumnDef::new(Gallery::ImageMime)
                            .text()
                            .null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Gallery::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Gallery {
    Table,
    Id,
    Image,
    ImageMime,
}
