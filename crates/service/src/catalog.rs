//! The three-level service catalog: main services, sub-services and tests.
//!
//! Writes validate the referenced parent before touching the child table, and
//! the schema cascades deletes downward, so a catalog row never outlives its
//! parent. Each test row also stores a denormalized `main_service_id` that is
//! derived from its sub-service at write time, not kept in sync afterwards:
//! re-parenting a sub-service leaves the stored value on existing tests
//! untouched until a test update supplies `sub_service_id` again.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

use models::{main_service, service_test, sub_service};

use crate::errors::ServiceError;
use crate::merge::{keep_or, keep_or_opt};

/// Optional fields of a sub-service update.
#[derive(Debug, Default)]
pub struct SubServicePatch {
    pub main_service_id: Option<i64>,
    pub service_name: Option<String>,
    pub description: Option<String>,
}

/// Optional fields of a service-test update.
#[derive(Debug, Default)]
pub struct ServiceTestPatch {
    pub sub_service_id: Option<i64>,
    pub test_name: Option<String>,
    pub description: Option<String>,
}

/// List all main services, oldest first.
pub async fn list_main_services(
    db: &DatabaseConnection,
) -> Result<Vec<main_service::Model>, ServiceError> {
    Ok(main_service::Entity::find()
        .order_by_asc(main_service::Column::Id)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?)
}

/// Create a main service.
pub async fn create_main_service(
    db: &DatabaseConnection,
    service_name: &str,
) -> Result<main_service::Model, ServiceError> {
    let am = main_service::ActiveModel {
        id: NotSet,
        service_name: Set(service_name.to_string()),
    };
    Ok(am.insert(db).await.map_err(|e| ServiceError::Db(e.to_string()))?)
}

/// Rename a main service; an omitted name keeps the stored one.
pub async fn update_main_service(
    db: &DatabaseConnection,
    id: i64,
    service_name: Option<String>,
) -> Result<main_service::Model, ServiceError> {
    let current = main_service::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("Service"))?;
    let mut am: main_service::ActiveModel = current.clone().into();
    am.service_name = Set(keep_or(service_name, current.service_name));
    Ok(am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?)
}

/// Delete a main service and, through the schema, everything under it.
pub async fn delete_main_service(db: &DatabaseConnection, id: i64) -> Result<(), ServiceError> {
    let res = main_service::Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("Service"));
    }
    Ok(())
}

/// List the sub-services of one main service, oldest first.
///
/// An unknown parent yields an empty list, not an error.
pub async fn list_sub_services_by_main(
    db: &DatabaseConnection,
    main_service_id: i64,
) -> Result<Vec<sub_service::Model>, ServiceError> {
    Ok(sub_service::Entity::find()
        .filter(sub_service::Column::MainServiceId.eq(main_service_id))
        .order_by_asc(sub_service::Column::Id)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?)
}

/// Create a sub-service under an existing main service.
pub async fn create_sub_service(
    db: &DatabaseConnection,
    main_service_id: i64,
    service_name: &str,
    description: Option<String>,
) -> Result<sub_service::Model, ServiceError> {
    let parent = main_service::Entity::find_by_id(main_service_id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if parent.is_none() {
        return Err(ServiceError::not_found("Main service"));
    }
    let am = sub_service::ActiveModel {
        id: NotSet,
        main_service_id: Set(main_service_id),
        service_name: Set(service_name.to_string()),
        description: Set(description),
    };
    Ok(am.insert(db).await.map_err(|e| ServiceError::Db(e.to_string()))?)
}

/// Fetch one sub-service.
pub async fn get_sub_service(
    db: &DatabaseConnection,
    id: i64,
) -> Result<sub_service::Model, ServiceError> {
    sub_by_id(db, id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Sub-service"))
}

async fn sub_by_id(
    db: &DatabaseConnection,
    id: i64,
) -> Result<Option<sub_service::Model>, ServiceError> {
    Ok(sub_service::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?)
}

/// Update a sub-service; supplying `main_service_id` re-parents it.
///
/// Re-parenting only moves the sub-service row. Tests under it keep their
/// stored `main_service_id` until each one is updated with `sub_service_id`.
pub async fn update_sub_service(
    db: &DatabaseConnection,
    id: i64,
    patch: SubServicePatch,
) -> Result<sub_service::Model, ServiceError> {
    let current = sub_by_id(db, id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Sub-service"))?;
    if let Some(target) = patch.main_service_id {
        let exists = main_service::Entity::find_by_id(target)
            .one(db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        if exists.is_none() {
            return Err(ServiceError::not_found("Target main service"));
        }
    }
    let mut am: sub_service::ActiveModel = current.clone().into();
    am.main_service_id = Set(keep_or(patch.main_service_id, current.main_service_id));
    am.service_name = Set(keep_or(patch.service_name, current.service_name.clone()));
    am.description = Set(keep_or_opt(patch.description, current.description.clone()));
    Ok(am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?)
}

/// Delete a sub-service and, through the schema, its tests.
pub async fn delete_sub_service(db: &DatabaseConnection, id: i64) -> Result<(), ServiceError> {
    let res = sub_service::Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("Sub-service"));
    }
    Ok(())
}

/// List the tests of one sub-service, oldest first.
///
/// An unknown parent yields an empty list, not an error.
pub async fn list_tests_by_sub(
    db: &DatabaseConnection,
    sub_service_id: i64,
) -> Result<Vec<service_test::Model>, ServiceError> {
    Ok(service_test::Entity::find()
        .filter(service_test::Column::SubServiceId.eq(sub_service_id))
        .order_by_asc(service_test::Column::Id)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?)
}

/// Create a test under an existing sub-service.
///
/// The stored `main_service_id` is copied from the sub-service here and never
/// maintained afterwards.
pub async fn create_service_test(
    db: &DatabaseConnection,
    sub_service_id: i64,
    test_name: &str,
    description: Option<String>,
) -> Result<service_test::Model, ServiceError> {
    let sub = sub_by_id(db, sub_service_id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Sub-service"))?;
    let am = service_test::ActiveModel {
        id: NotSet,
        main_service_id: Set(sub.main_service_id),
        sub_service_id: Set(sub_service_id),
        test_name: Set(test_name.to_string()),
        description: Set(description),
    };
    Ok(am.insert(db).await.map_err(|e| ServiceError::Db(e.to_string()))?)
}

/// Fetch one service test.
pub async fn get_service_test(
    db: &DatabaseConnection,
    id: i64,
) -> Result<service_test::Model, ServiceError> {
    service_test::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("Service test"))
}

/// Update a service test; supplying `sub_service_id` re-parents it and
/// re-derives the stored `main_service_id` from the new sub-service. With
/// `sub_service_id` omitted both stored ids are kept exactly as they are.
pub async fn update_service_test(
    db: &DatabaseConnection,
    id: i64,
    patch: ServiceTestPatch,
) -> Result<service_test::Model, ServiceError> {
    let current = service_test::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("Service test"))?;
    let (sub_id, main_id) = match patch.sub_service_id {
        Some(sub_id) => {
            let sub = sub_by_id(db, sub_id)
                .await?
                .ok_or_else(|| ServiceError::not_found("Sub-service"))?;
            (sub_id, sub.main_service_id)
        }
        None => (current.sub_service_id, current.main_service_id),
    };
    let mut am: service_test::ActiveModel = current.clone().into();
    am.main_service_id = Set(main_id);
    am.sub_service_id = Set(sub_id);
    am.test_name = Set(keep_or(patch.test_name, current.test_name.clone()));
    am.description = Set(keep_or_opt(patch.description, current.description.clone()));
    Ok(am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?)
}

/// Delete a service test.
pub async fn delete_service_test(db: &DatabaseConnection, id: i64) -> Result<(), ServiceError> {
    let res = service_test::Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("Service test"));
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

    /// Plain CRUD on the top level of the catalog.
    #[tokio::test]
    async fn main_service_crud() -> Result<(), anyhow::Error> {
        let db = memory_db().await?;

        let a = create_main_service(&db, "Geotechnical Services").await?;
        let b = create_main_service(&db, "Laboratory Services").await?;

        let all = list_main_services(&db).await?;
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, a.id, "listing is oldest first");

        let renamed = update_main_service(&db, b.id, Some("Field Services".to_string())).await?;
        assert_eq!(renamed.service_name, "Field Services");

        delete_main_service(&db, a.id).await?;
        assert_eq!(list_main_services(&db).await?.len(), 1);

        let err = delete_main_service(&db, a.id).await.unwrap_err();
        assert_eq!(msg(err), "Service not found");
        Ok(())
    }

    /// A sub-service cannot be created under a parent that does not exist.
    #[tokio::test]
    async fn create_sub_service_requires_live_parent() -> Result<(), anyhow::Error> {
        let db = memory_db().await?;

        let err = create_sub_service(&db, 4242, "Soil Testing", None).await.unwrap_err();
        assert_eq!(msg(err), "Main service not found");

        let main = create_main_service(&db, "Geotechnical Services").await?;
        let sub = create_sub_service(&db, main.id, "Soil Testing", Some("On-site".into())).await?;
        assert_eq!(sub.main_service_id, main.id);
        assert_eq!(get_sub_service(&db, sub.id).await?.service_name, "Soil Testing");
        Ok(())
    }

    /// A new test copies its main service id from the referenced sub-service.
    #[tokio::test]
    async fn service_test_derives_main_from_sub() -> Result<(), anyhow::Error> {
        let db = memory_db().await?;

        let main = create_main_service(&db, "Geotechnical Services").await?;
        let sub = create_sub_service(&db, main.id, "Soil Testing", None).await?;

        let test = create_service_test(&db, sub.id, "Proctor Test", None).await?;
        assert_eq!(test.sub_service_id, sub.id);
        assert_eq!(test.main_service_id, main.id);

        let err = create_service_test(&db, 4242, "Orphan", None).await.unwrap_err();
        assert_eq!(msg(err), "Sub-service not found");
        Ok(())
    }

    /// Deleting a main service removes every sub-service and test under it.
    #[tokio::test]
    async fn cascade_delete_removes_descendants() -> Result<(), anyhow::Error> {
        let db = memory_db().await?;

        let main = create_main_service(&db, "Geotechnical Services").await?;
        let keep = create_main_service(&db, "Laboratory Services").await?;
        let sub_a = create_sub_service(&db, main.id, "Soil Testing", None).await?;
        let sub_b = create_sub_service(&db, main.id, "Rock Testing", None).await?;
        let kept_sub = create_sub_service(&db, keep.id, "Chemical Analysis", None).await?;
        for name in ["Proctor Test", "Atterberg Limits", "Sieve Analysis"] {
            create_service_test(&db, sub_a.id, name, None).await?;
        }
        create_service_test(&db, sub_b.id, "Point Load Test", None).await?;
        let kept_test = create_service_test(&db, kept_sub.id, "pH Test", None).await?;

        delete_main_service(&db, main.id).await?;

        assert!(list_sub_services_by_main(&db, main.id).await?.is_empty());
        assert!(list_tests_by_sub(&db, sub_a.id).await?.is_empty());
        assert!(list_tests_by_sub(&db, sub_b.id).await?.is_empty());
        let err = get_sub_service(&db, sub_a.id).await.unwrap_err();
        assert_eq!(msg(err), "Sub-service not found");

        // the sibling tree is untouched
        assert_eq!(get_sub_service(&db, kept_sub.id).await?.id, kept_sub.id);
        assert_eq!(get_service_test(&db, kept_test.id).await?.id, kept_test.id);
        Ok(())
    }

    /// An update with every field omitted changes nothing.
    #[tokio::test]
    async fn update_with_no_fields_is_a_noop() -> Result<(), anyhow::Error> {
        let db = memory_db().await?;

        let main = create_main_service(&db, "Geotechnical Services").await?;
        let sub =
            create_sub_service(&db, main.id, "Soil Testing", Some("On-site".into())).await?;

        let after = update_sub_service(&db, sub.id, SubServicePatch::default()).await?;
        assert_eq!(after, sub);
        Ok(())
    }

    /// Only the supplied field changes; the rest of the row is kept.
    #[tokio::test]
    async fn update_replaces_only_supplied_fields() -> Result<(), anyhow::Error> {
        let db = memory_db().await?;

        let main = create_main_service(&db, "Geotechnical Services").await?;
        let sub = create_sub_service(&db, main.id, "Soil Testing", None).await?;
        let test =
            create_service_test(&db, sub.id, "Proctor Test", Some("Compaction".into())).await?;

        let patch = ServiceTestPatch { test_name: Some("Modified Proctor".into()), ..Default::default() };
        let after = update_service_test(&db, test.id, patch).await?;
        assert_eq!(after.test_name, "Modified Proctor");
        assert_eq!(after.description.as_deref(), Some("Compaction"));
        assert_eq!(after.sub_service_id, sub.id);
        assert_eq!(after.main_service_id, main.id);
        Ok(())
    }

    /// Re-parenting a sub-service does not rewrite the main service id stored
    /// on its tests; a later test update that supplies `sub_service_id`
    /// re-derives it.
    #[tokio::test]
    async fn reparenting_sub_service_leaves_tests_stale() -> Result<(), anyhow::Error> {
        let db = memory_db().await?;

        let old_main = create_main_service(&db, "Geotechnical Services").await?;
        let new_main = create_main_service(&db, "Laboratory Services").await?;
        let sub = create_sub_service(&db, old_main.id, "Soil Testing", None).await?;
        let test = create_service_test(&db, sub.id, "Proctor Test", None).await?;

        let patch = SubServicePatch { main_service_id: Some(new_main.id), ..Default::default() };
        let moved = update_sub_service(&db, sub.id, patch).await?;
        assert_eq!(moved.main_service_id, new_main.id);

        // the stored value on the test still points at the old parent
        let stale = get_service_test(&db, test.id).await?;
        assert_eq!(stale.main_service_id, old_main.id);

        // a name-only update keeps it stale
        let patch = ServiceTestPatch { test_name: Some("Renamed".into()), ..Default::default() };
        let still_stale = update_service_test(&db, test.id, patch).await?;
        assert_eq!(still_stale.main_service_id, old_main.id);

        // re-supplying the same sub-service id re-derives the stored value
        let patch = ServiceTestPatch { sub_service_id: Some(sub.id), ..Default::default() };
        let healed = update_service_test(&db, test.id, patch).await?;
        assert_eq!(healed.main_service_id, new_main.id);
        Ok(())
    }

    /// Re-parenting to a main service that does not exist is refused.
    #[tokio::test]
    async fn reparent_to_unknown_target_fails() -> Result<(), anyhow::Error> {
        let db = memory_db().await?;

        let main = create_main_service(&db, "Geotechnical Services").await?;
        let sub = create_sub_service(&db, main.id, "Soil Testing", None).await?;

        let patch = SubServicePatch { main_service_id: Some(4242), ..Default::default() };
        let err = update_sub_service(&db, sub.id, patch).await.unwrap_err();
        assert_eq!(msg(err), "Target main service not found");

        // the failed update must not have touched the row
        assert_eq!(get_sub_service(&db, sub.id).await?.main_service_id, main.id);
        Ok(())
    }

    /// Moving a test to another sub-service re-derives the main service id.
    #[tokio::test]
    async fn reparenting_test_follows_new_sub() -> Result<(), anyhow::Error> {
        let db = memory_db().await?;

        let main_a = create_main_service(&db, "Geotechnical Services").await?;
        let main_b = create_main_service(&db, "Laboratory Services").await?;
        let sub_a = create_sub_service(&db, main_a.id, "Soil Testing", None).await?;
        let sub_b = create_sub_service(&db, main_b.id, "Chemical Analysis", None).await?;
        let test = create_service_test(&db, sub_a.id, "Proctor Test", None).await?;

        let patch = ServiceTestPatch { sub_service_id: Some(sub_b.id), ..Default::default() };
        let moved = update_service_test(&db, test.id, patch).await?;
        assert_eq!(moved.sub_service_id, sub_b.id);
        assert_eq!(moved.main_service_id, main_b.id);

        let patch = ServiceTestPatch { sub_service_id: Some(4242), ..Default::default() };
        let err = update_service_test(&db, test.id, patch).await.unwrap_err();
        assert_eq!(msg(err), "Sub-service not found");
        Ok(())
    }

    /// Listing under a parent that does not exist is empty rather than an error.
    #[tokio::test]
    async fn listing_under_unknown_parent_is_empty() -> Result<(), anyhow::Error> {
        let db = memory_db().await?;
        assert!(list_sub_services_by_main(&db, 4242).await?.is_empty());
        assert!(list_tests_by_sub(&db, 4242).await?.is_empty());
        Ok(())
    }

    /// Deletes of missing rows report the kind of the missing row.
    #[tokio::test]
    async fn delete_missing_rows_report_kind() -> Result<(), anyhow::Error> {
        let db = memory_db().await?;
        assert_eq!(msg(delete_main_service(&db, 1).await.unwrap_err()), "Service not found");
        assert_eq!(msg(delete_sub_service(&db, 1).await.unwrap_err()), "Sub-service not found");
        assert_eq!(msg(delete_service_test(&db, 1).await.unwrap_err()), "Service test not found");
        Ok(())
    }
}
