//! "Why choose us" entries: a label, a value line and a status.

use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, QueryOrder, Set};

use models::why_choose_us;

use crate::errors::ServiceError;
use crate::merge::keep_or;

/// Optional fields of a why-choose-us update.
#[derive(Debug, Default)]
pub struct WhyPatch {
    pub label: Option<String>,
    pub value: Option<String>,
    pub status: Option<String>,
}

/// List all why-choose-us entries, oldest first.
pub async fn list_why(db: &DatabaseConnection) -> Result<Vec<why_choose_us::Model>, ServiceError> {
    Ok(why_choose_us::Entity::find()
        .order_by_asc(why_choose_us::Column::Id)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?)
}

/// Create an entry; an omitted status defaults to "Visible".
pub async fn create_why(
    db: &DatabaseConnection,
    label: &str,
    value: &str,
    status: Option<String>,
) -> Result<why_choose_us::Model, ServiceError> {
    let am = why_choose_us::ActiveModel {
        id: NotSet,
        label: Set(label.to_string()),
        value: Set(value.to_string()),
        status: Set(status.unwrap_or_else(|| "Visible".to_string())),
    };
    Ok(am.insert(db).await.map_err(|e| ServiceError::Db(e.to_string()))?)
}

/// Update an entry; omitted fields keep their stored values.
pub async fn update_why(
    db: &DatabaseConnection,
    id: i64,
    patch: WhyPatch,
) -> Result<why_choose_us::Model, ServiceError> {
    let current = why_choose_us::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("Why entry"))?;
    let mut am: why_choose_us::ActiveModel = current.clone().into();
    am.label = Set(keep_or(patch.label, current.label.clone()));
    am.value = Set(keep_or(patch.value, current.value.clone()));
    am.status = Set(keep_or(patch.status, current.status.clone()));
    Ok(am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?)
}

/// Delete an entry.
pub async fn delete_why(db: &DatabaseConnection, id: i64) -> Result<(), ServiceError> {
    let res = why_choose_us::Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("Why entry"));
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

    /// Why-choose-us entries default to "Visible" and merge on update.
    #[tokio::test]
    async fn why_lifecycle() -> Result<(), anyhow::Error> {
        let db = memory_db().await?;

        let entry = create_why(&db, "Experience", "25 years in the field", None).await?;
        assert_eq!(entry.status, "Visible");

        let patch = WhyPatch { status: Some("Hidden".into()), ..Default::default() };
        let after = update_why(&db, entry.id, patch).await?;
        assert_eq!(after.status, "Hidden");
        assert_eq!(after.label, "Experience");
        assert_eq!(after.value, "25 years in the field");

        delete_why(&db, entry.id).await?;
        assert_eq!(msg(delete_why(&db, entry.id).await.unwrap_err()), "Why entry not found");
        Ok(())
    }
}
