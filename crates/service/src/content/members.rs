//! Team member cards, structurally the same as CEO cards.

use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, QueryOrder, Set};

use models::members;

use crate::attachment::{self, ImageBearing, ImageUpload};
use crate::errors::ServiceError;
use crate::merge::{keep_or, keep_or_opt};

impl ImageBearing for members::Entity {
    const KIND: &'static str = "Member";
    const IMAGE_KIND: &'static str = "Image";

    fn image_path(id: i64) -> String {
        format!("/members/{}/image", id)
    }
    fn image(model: &members::Model) -> Option<&[u8]> {
        model.image.as_deref()
    }
    fn image_mime(model: &members::Model) -> Option<&str> {
        model.image_mime.as_deref()
    }
}

/// Optional fields of a member update.
#[derive(Debug, Default)]
pub struct MemberPatch {
    pub name: Option<String>,
    pub title: Option<String>,
    pub email: Option<String>,
    pub short_description: Option<String>,
    pub image: Option<ImageUpload>,
}

/// List all members, oldest first.
pub async fn list_members(db: &DatabaseConnection) -> Result<Vec<members::Model>, ServiceError> {
    Ok(members::Entity::find()
        .order_by_asc(members::Column::Id)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?)
}

/// Create a member card; the portrait is optional.
pub async fn create_member(
    db: &DatabaseConnection,
    name: &str,
    title: &str,
    email: &str,
    short_description: Option<String>,
    image: Option<ImageUpload>,
) -> Result<members::Model, ServiceError> {
    let (bytes, mime) = match image {
        Some(up) => (Some(up.bytes), Some(up.mime)),
        None => (None, None),
    };
    let am = members::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        title: Set(title.to_string()),
        email: Set(email.to_string()),
        short_description: Set(short_description),
        image: Set(bytes),
        image_mime: Set(mime),
    };
    Ok(am.insert(db).await.map_err(|e| ServiceError::Db(e.to_string()))?)
}

/// Update a member card; omitted fields keep their stored values.
pub async fn update_member(
    db: &DatabaseConnection,
    id: i64,
    patch: MemberPatch,
) -> Result<members::Model, ServiceError> {
    let current = members::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found(members::Entity::KIND))?;
    let mut am: members::ActiveModel = current.clone().into();
    am.name = Set(keep_or(patch.name, current.name.clone()));
    am.title = Set(keep_or(patch.title, current.title.clone()));
    am.email = Set(keep_or(patch.email, current.email.clone()));
    am.short_description =
        Set(keep_or_opt(patch.short_description, current.short_description.clone()));
    if let Some(up) = patch.image {
        am.image = Set(Some(up.bytes));
        am.image_mime = Set(Some(up.mime));
    }
    Ok(am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?)
}

/// Delete a member card.
pub async fn delete_member(db: &DatabaseConnection, id: i64) -> Result<(), ServiceError> {
    attachment::remove::<members::Entity>(db, id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attachment::load_image;
    use crate::test_support::memory_db;

    fn msg(err: ServiceError) -> String {
        match err {
            ServiceError::Validation(m) | ServiceError::NotFound(m) | ServiceError::Db(m) => m,
        }
    }

    /// Member cards keep untouched fields across partial updates and replace
    /// the portrait only when a new upload arrives.
    #[tokio::test]
    async fn member_card_lifecycle() -> Result<(), anyhow::Error> {
        let db = memory_db().await?;

        let card = create_member(&db, "Sam Lee", "Engineer", "sam@example.com", None, None).await?;
        let err = load_image::<members::Entity>(&db, card.id).await.unwrap_err();
        assert_eq!(msg(err), "Image not found");

        let up = ImageUpload::accept(vec![9, 9, 9], Some("image/webp".to_string()))?;
        let patch = MemberPatch {
            short_description: Some("Leads the lab team".into()),
            image: Some(up),
            ..Default::default()
        };
        let after = update_member(&db, card.id, patch).await?;
        assert_eq!(after.name, "Sam Lee");
        assert_eq!(after.short_description.as_deref(), Some("Leads the lab team"));

        let img = load_image::<members::Entity>(&db, card.id).await?;
        assert_eq!(img.bytes, vec![9, 9, 9]);
        assert_eq!(img.mime, "image/webp");

        delete_member(&db, card.id).await?;
        assert_eq!(msg(delete_member(&db, card.id).await.unwrap_err()), "Member not found");
        Ok(())
    }
}
