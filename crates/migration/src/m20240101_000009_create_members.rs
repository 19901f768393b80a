//! Create `members` table (team member cards, same shape as `ceo_card`).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Members::Table)
                    .if_not_exists()
                    .col(big_integer(Members::Id).primary_key().auto_increment())
                    .col(text(Members::Name).not_null())
                    .col(text(Members::Title).not_null())
                    .col(text(Members::Email).not_null())
                    .col(
                        ColumnDef::new(Members::Image)
                            .blob()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Members::ImageMime)
                            .text()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Members::ShortDescription)
                            .text()
                            .null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Members::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Members {
    Table,
    Id,
    Name,
    Title,
    Email,
    Image,
    ImageMime,
    ShortDescription,
}
