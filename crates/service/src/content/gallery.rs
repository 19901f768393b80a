//! Gallery entries: rows that are nothing but a stored image.

use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, QueryOrder, Set};

use models::gallery;

use crate::attachment::{self, ImageBearing, ImageUpload};
use crate::errors::ServiceError;

impl ImageBearing for gallery::Entity {
    const KIND: &'static str = "Image";
    const IMAGE_KIND: &'static str = "Image";

    fn image_path(id: i64) -> String {
        format!("/gallery/{}/image", id)
    }
    fn image(model: &gallery::Model) -> Option<&[u8]> {
        Some(&model.image)
    }
    fn image_mime(model: &gallery::Model) -> Option<&str> {
        model.image_mime.as_deref()
    }
}

/// List all gallery entries, oldest first.
pub async fn list_gallery(db: &DatabaseConnection) -> Result<Vec<gallery::Model>, ServiceError> {
    Ok(gallery::Entity::find()
        .order_by_asc(gallery::Column::Id)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?)
}

/// Add a gallery entry; unlike the card resources the image is required.
pub async fn add_gallery_image(
    db: &DatabaseConnection,
    upload: ImageUpload,
) -> Result<gallery::Model, ServiceError> {
    let am = gallery::ActiveModel {
        id: NotSet,
        image: Set(upload.bytes),
        image_mime: Set(Some(upload.mime)),
    };
    Ok(am.insert(db).await.map_err(|e| ServiceError::Db(e.to_string()))?)
}

/// Replace the stored image of a gallery entry.
///
/// There are no other fields on the row, so an update without an upload
/// changes nothing and returns the entry as it is.
pub async fn replace_gallery_image(
    db: &DatabaseConnection,
    id: i64,
    upload: Option<ImageUpload>,
) -> Result<gallery::Model, ServiceError> {
    let current = gallery::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found(gallery::Entity::KIND))?;
    let Some(up) = upload else {
        return Ok(current);
    };
    let mut am: gallery::ActiveModel = current.into();
    am.image = Set(up.bytes);
    am.image_mime = Set(Some(up.mime));
    Ok(am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?)
}

/// Delete a gallery entry.
pub async fn delete_gallery_image(db: &DatabaseConnection, id: i64) -> Result<(), ServiceError> {
    attachment::remove::<gallery::Entity>(db, id).await
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

    /// Add, list, replace and delete a gallery entry.
    #[tokio::test]
    async fn gallery_lifecycle() -> Result<(), anyhow::Error> {
        let db = memory_db().await?;

        let first = ImageUpload::accept(vec![1, 1, 1], Some("image/png".to_string()))?;
        let entry = add_gallery_image(&db, first).await?;
        assert_eq!(list_gallery(&db).await?.len(), 1);

        let img = load_image::<gallery::Entity>(&db, entry.id).await?;
        assert_eq!(img.bytes, vec![1, 1, 1]);
        assert_eq!(img.mime, "image/png");

        // an update without an upload is a no-op
        let same = replace_gallery_image(&db, entry.id, None).await?;
        assert_eq!(same.image, vec![1, 1, 1]);

        let second = ImageUpload::accept(vec![2, 2], Some("image/gif".to_string()))?;
        let replaced = replace_gallery_image(&db, entry.id, Some(second)).await?;
        assert_eq!(replaced.image, vec![2, 2]);
        assert_eq!(replaced.image_mime.as_deref(), Some("image/gif"));

        delete_gallery_image(&db, entry.id).await?;
        assert_eq!(msg(delete_gallery_image(&db, entry.id).await.unwrap_err()), "Image not found");
        assert_eq!(
            msg(load_image::<gallery::Entity>(&db, entry.id).await.unwrap_err()),
            "Image not found"
        );
        Ok(())
    }
}
