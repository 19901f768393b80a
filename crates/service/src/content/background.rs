//! Company background paragraphs.

use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, QueryOrder, Set};

use models::background;

use crate::errors::ServiceError;
use crate::merge::keep_or;

/// List all background paragraphs, oldest first.
pub async fn list_background(
    db: &DatabaseConnection,
) -> Result<Vec<background::Model>, ServiceError> {
    Ok(background::Entity::find()
        .order_by_asc(background::Column::Id)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?)
}

/// Create a background paragraph.
pub async fn create_background(
    db: &DatabaseConnection,
    paragraph: &str,
) -> Result<background::Model, ServiceError> {
    let am = background::ActiveModel {
        id: NotSet,
        paragraph: Set(paragraph.to_string()),
    };
    Ok(am.insert(db).await.map_err(|e| ServiceError::Db(e.to_string()))?)
}

/// Update a background paragraph; an omitted text keeps the stored one.
pub async fn update_background(
    db: &DatabaseConnection,
    id: i64,
    paragraph: Option<String>,
) -> Result<background::Model, ServiceError> {
    let current = background::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("Background paragraph"))?;
    let mut am: background::ActiveModel = current.clone().into();
    am.paragraph = Set(keep_or(paragraph, current.paragraph));
    Ok(am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?)
}

/// Delete a background paragraph.
pub async fn delete_background(db: &DatabaseConnection, id: i64) -> Result<(), ServiceError> {
    let res = background::Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("Background paragraph"));
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

    /// Paragraphs are created, rewritten and removed independently.
    #[tokio::test]
    async fn background_lifecycle() -> Result<(), anyhow::Error> {
        let db = memory_db().await?;

        let p = create_background(&db, "Founded in 1998.").await?;
        let q = create_background(&db, "We operate nationwide.").await?;
        assert_eq!(list_background(&db).await?.len(), 2);

        let after = update_background(&db, p.id, Some("Founded in 1999.".into())).await?;
        assert_eq!(after.paragraph, "Founded in 1999.");
        let same = update_background(&db, q.id, None).await?;
        assert_eq!(same.paragraph, "We operate nationwide.");

        delete_background(&db, p.id).await?;
        assert_eq!(
            msg(update_background(&db, p.id, None).await.unwrap_err()),
            "Background paragraph not found"
        );
        Ok(())
    }
}
