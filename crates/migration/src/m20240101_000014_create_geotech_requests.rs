//! Create `geotech_requests` table (geotechnical service-request intake).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GeotechRequests::Table)
                    .if_not_exists()
                    .col(big_integer(GeotechRequests::Id).primary_key().auto_increment())
                    .col(text(GeotechRequests::Name).not_null())
                    .col(text(GeotechRequests::Email).not_null())
                    .col(text(GeotechRequests::Phone).not_null())
                    .col(text(GeotechRequests::ProjectDetails).not_null())
                    .col(timestamp_with_time_zone(GeotechRequests::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(GeotechRequests::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum GeotechRequests {
    Table,
    Id,
    Name,
    Email,
    Phone,
    ProjectDetails,
    CreatedAt,
}
