#![cfg(test)]

use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;

/// Fresh migrated in-memory database for a single test.
///
/// A pool of one keeps every statement on the same in-memory database.
pub async fn memory_db() -> Result<DatabaseConnection, anyhow::Error> {
    let cfg = configs::DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
        ..Default::default()
    };
    let db = models::db::connect(&cfg).await?;
    Migrator::up(&db, None).await?;
    Ok(db)
}
