//! Numeric "facts" shown on the site, e.g. completed projects: 120.

use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, QueryOrder, Set};

use models::facts;

use crate::errors::ServiceError;
use crate::merge::keep_or;

/// Optional fields of a fact update.
#[derive(Debug, Default)]
pub struct FactPatch {
    pub label: Option<String>,
    pub number: Option<i64>,
    pub status: Option<String>,
}

/// List all facts, oldest first.
pub async fn list_facts(db: &DatabaseConnection) -> Result<Vec<facts::Model>, ServiceError> {
    Ok(facts::Entity::find()
        .order_by_asc(facts::Column::Id)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?)
}

/// Create a fact; an omitted status defaults to "Visible".
pub async fn create_fact(
    db: &DatabaseConnection,
    label: &str,
    number: i64,
    status: Option<String>,
) -> Result<facts::Model, ServiceError> {
    let am = facts::ActiveModel {
        id: NotSet,
        label: Set(label.to_string()),
        number: Set(number),
        status: Set(status.unwrap_or_else(|| "Visible".to_string())),
    };
    Ok(am.insert(db).await.map_err(|e| ServiceError::Db(e.to_string()))?)
}

/// Update a fact; omitted fields keep their stored values.
pub async fn update_fact(
    db: &DatabaseConnection,
    id: i64,
    patch: FactPatch,
) -> Result<facts::Model, ServiceError> {
    let current = facts::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("Fact"))?;
    let mut am: facts::ActiveModel = current.clone().into();
    am.label = Set(keep_or(patch.label, current.label.clone()));
    am.number = Set(keep_or(patch.number, current.number));
    am.status = Set(keep_or(patch.status, current.status.clone()));
    Ok(am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?)
}

/// Delete a fact.
pub async fn delete_fact(db: &DatabaseConnection, id: i64) -> Result<(), ServiceError> {
    let res = facts::Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("Fact"));
    }
    Ok(())
}
