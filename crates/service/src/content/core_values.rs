//! Core values: one bullet line each.

use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, QueryOrder, Set};

use models::core_values;

use crate::errors::ServiceError;
use crate::merge::keep_or;

/// List all core values, oldest first.
pub async fn list_core_values(
    db: &DatabaseConnection,
) -> Result<Vec<core_values::Model>, ServiceError> {
    Ok(core_values::Entity::find()
        .order_by_asc(core_values::Column::Id)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?)
}

/// Create a core value.
pub async fn create_core_value(
    db: &DatabaseConnection,
    bullet_text: &str,
) -> Result<core_values::Model, ServiceError> {
    let am = core_values::ActiveModel {
        id: NotSet,
        bullet_text: Set(bullet_text.to_string()),
    };
    Ok(am.insert(db).await.map_err(|e| ServiceError::Db(e.to_string()))?)
}

/// Update a core value; an omitted text keeps the stored one.
pub async fn update_core_value(
    db: &DatabaseConnection,
    id: i64,
    bullet_text: Option<String>,
) -> Result<core_values::Model, ServiceError> {
    let current = core_values::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("Core value"))?;
    let mut am: core_values::ActiveModel = current.clone().into();
    am.bullet_text = Set(keep_or(bullet_text, current.bullet_text));
    Ok(am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?)
}

/// Delete a core value.
pub async fn delete_core_value(db: &DatabaseConnection, id: i64) -> Result<(), ServiceError> {
    let res = core_values::Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("Core value"));
    }
    Ok(())
}
