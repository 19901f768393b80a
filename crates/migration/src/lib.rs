//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_banner;
mod m20240101_000002_create_tus;
mod m20240101_000003_create_facts;
mod m20240101_000004_create_why_choose_us;
mod m20240101_000005_create_background;
mod m20240101_000006_create_core_values;
mod m20240101_000007_create_gallery;
mod m20240101_000008_create_ceo_card;
mod m20240101_000009_create_members;
mod m20240101_000010_create_main_service;
mod m20240101_000011_create_sub_service;
mod m20240101_000013_create_messages;
mod m20240101_000014_create_geotech_requests;
mod m20240101_000015_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_banner::Migration),
            Box::new(m20240101_000002_create_tus::Migration),
            Box::new(m20240101_000003_create_facts::Migration),
            Box::new(m20240101_000004_create_why_choose_us::Migration),
            Box::new(m20240101_000005_create_background::Migration),
            Box::new(m20240101_000006_create_core_values::Migration),
            Box::new(m20240101_000007_create_gallery::Migration),
            Box::new(m20240101_000008_create_ceo_card::Migration),
            Box::new(m20240101_000009_create_members::Migration),
            Box::new(m20240101_000010_create_main_service::Migration),
            Box::new(m20240101_000011_create_sub_service::Migration),
            Box::new(m20240101_000012_create_service_test::Migration),
            Box::new(m20240101_000013_create_messages::Migration),
            Box::new(m20240101_000014_create_geotech_requests::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000015_add_indexes::Migration),
        ]
    }
}
