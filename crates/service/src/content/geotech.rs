//! Geotechnical investigation requests: append-only, read back newest first.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, QueryOrder, Set};

use models::geotech_requests;

use crate::errors::ServiceError;

/// Record an inbound request, stamping it with the current time.
pub async fn create_geotech_request(
    db: &DatabaseConnection,
    name: &str,
    email: &str,
    phone: &str,
    project_details: &str,
) -> Result<geotech_requests::Model, ServiceError> {
    let am = geotech_requests::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        email: Set(email.to_string()),
        phone: Set(phone.to_string()),
        project_details: Set(project_details.to_string()),
        created_at: Set(Utc::now().into()),
    };
    Ok(am.insert(db).await.map_err(|e| ServiceError::Db(e.to_string()))?)
}

/// List all requests, newest first.
pub async fn list_geotech_requests(
    db: &DatabaseConnection,
) -> Result<Vec<geotech_requests::Model>, ServiceError> {
    Ok(geotech_requests::Entity::find()
        .order_by_desc(geotech_requests::Column::CreatedAt)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::memory_db;

    /// Requests keep every submitted field and come back newest first.
    #[tokio::test]
    async fn requests_are_listed_newest_first() -> Result<(), anyhow::Error> {
        let db = memory_db().await?;

        let first = create_geotech_request(
            &db,
            "Ann",
            "ann@example.com",
            "+31 6 1234 5678",
            "Foundation survey for a warehouse",
        )
        .await?;
        std::thread::sleep(std::time::Duration::from_millis(5));
        let second =
            create_geotech_request(&db, "Ben", "ben@example.com", "555-0100", "Borehole logging")
                .await?;

        let all = list_geotech_requests(&db).await?;
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, second.id);
        assert_eq!(all[1].id, first.id);
        assert_eq!(all[1].project_details, "Foundation survey for a warehouse");
        Ok(())
    }
}
