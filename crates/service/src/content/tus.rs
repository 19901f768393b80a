//! Opening-hours entries ("tus"): a day label, an hours string and a status.

use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, QueryOrder, Set};

use models::tus;

use crate::errors::ServiceError;
use crate::merge::keep_or;

/// Optional fields of a tus entry update.
#[derive(Debug, Default)]
pub struct TusPatch {
    pub day: Option<String>,
    pub hours: Option<String>,
    pub status: Option<String>,
}

/// List all tus entries, oldest first.
pub async fn list_tus(db: &DatabaseConnection) -> Result<Vec<tus::Model>, ServiceError> {
    Ok(tus::Entity::find()
        .order_by_asc(tus::Column::Id)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?)
}

/// Create a tus entry; an omitted status defaults to "Open".
pub async fn create_tus(
    db: &DatabaseConnection,
    day: &str,
    hours: &str,
    status: Option<String>,
) -> Result<tus::Model, ServiceError> {
    let am = tus::ActiveModel {
        id: NotSet,
        day: Set(day.to_string()),
        hours: Set(hours.to_string()),
        status: Set(status.unwrap_or_else(|| "Open".to_string())),
    };
    Ok(am.insert(db).await.map_err(|e| ServiceError::Db(e.to_string()))?)
}

/// Update a tus entry; omitted fields keep their stored values.
pub async fn update_tus(
    db: &DatabaseConnection,
    id: i64,
    patch: TusPatch,
) -> Result<tus::Model, ServiceError> {
    let current = tus::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("tus entry"))?;
    let mut am: tus::ActiveModel = current.clone().into();
    am.day = Set(keep_or(patch.day, current.day.clone()));
    am.hours = Set(keep_or(patch.hours, current.hours.clone()));
    am.status = Set(keep_or(patch.status, current.status.clone()));
    Ok(am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?)
}

/// Delete a tus entry.
pub async fn delete_tus(db: &DatabaseConnection, id: i64) -> Result<(), ServiceError> {
    let res = tus::Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("tus entry"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::memory_db;

    fn msg(err: ServiceError) -> String {
        match err {
            ServiceError::Validation(m) | ServiceError::NotFound(m) | ServiceError::Db(m) => m,
        }
    }

    /// A created entry defaults its status to "Open" and updates merge
    /// field by field.
    #[tokio::test]
    async fn tus_lifecycle() -> Result<(), anyhow::Error> {
        let db = memory_db().await?;

        let entry = create_tus(&db, "Monday", "9:00 - 17:00", None).await?;
        assert_eq!(entry.status, "Open");
        let closed = create_tus(&db, "Sunday", "-", Some("Closed".into())).await?;
        assert_eq!(closed.status, "Closed");

        let patch = TusPatch { hours: Some("8:00 - 16:00".into()), ..Default::default() };
        let after = update_tus(&db, entry.id, patch).await?;
        assert_eq!(after.hours, "8:00 - 16:00");
        assert_eq!(after.day, "Monday");
        assert_eq!(after.status, "Open");

        assert_eq!(list_tus(&db).await?.len(), 2);
        delete_tus(&db, closed.id).await?;
        assert_eq!(msg(delete_tus(&db, closed.id).await.unwrap_err()), "tus entry not found");
        Ok(())
    }
}
