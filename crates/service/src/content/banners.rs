//! Homepage banners: text fields plus an optional inline image.

use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, QueryOrder, Set};

use models::banner;

use crate::attachment::{self, ImageBearing, ImageUpload};
use crate::errors::ServiceError;
use crate::merge::{keep_or, keep_or_opt};

impl ImageBearing for banner::Entity {
    const KIND: &'static str = "Banner";
    const IMAGE_KIND: &'static str = "Banner image";

    fn image_path(id: i64) -> String {
        format!("/banners/{}/image-preview", id)
    }
    fn image(model: &banner::Model) -> Option<&[u8]> {
        model.image.as_deref()
    }
    fn image_mime(model: &banner::Model) -> Option<&str> {
        model.image_mime.as_deref()
    }
}

/// Optional fields of a banner update.
#[derive(Debug, Default)]
pub struct BannerPatch {
    pub highlight_tag: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<ImageUpload>,
}

/// List all banners, oldest first.
pub async fn list_banners(db: &DatabaseConnection) -> Result<Vec<banner::Model>, ServiceError> {
    Ok(banner::Entity::find()
        .order_by_asc(banner::Column::Id)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?)
}

/// Create a banner; the image is optional at creation time.
pub async fn create_banner(
    db: &DatabaseConnection,
    highlight_tag: &str,
    title: &str,
    description: Option<String>,
    image: Option<ImageUpload>,
) -> Result<banner::Model, ServiceError> {
    let (bytes, mime) = match image {
        Some(up) => (Some(up.bytes), Some(up.mime)),
        None => (None, None),
    };
    let am = banner::ActiveModel {
        id: NotSet,
        highlight_tag: Set(highlight_tag.to_string()),
        title: Set(title.to_string()),
        description: Set(description),
        image: Set(bytes),
        image_mime: Set(mime),
    };
    Ok(am.insert(db).await.map_err(|e| ServiceError::Db(e.to_string()))?)
}

/// Update a banner; omitted fields keep their stored values and the image
/// and its MIME type are only rewritten when a new upload is supplied.
pub async fn update_banner(
    db: &DatabaseConnection,
    id: i64,
    patch: BannerPatch,
) -> Result<banner::Model, ServiceError> {
    let current = banner::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found(banner::Entity::KIND))?;
    let mut am: banner::ActiveModel = current.clone().into();
    am.highlight_tag = Set(keep_or(patch.highlight_tag, current.highlight_tag.clone()));
    am.title = Set(keep_or(patch.title, current.title.clone()));
    am.description = Set(keep_or_opt(patch.description, current.description.clone()));
    if let Some(up) = patch.image {
        am.image = Set(Some(up.bytes));
        am.image_mime = Set(Some(up.mime));
    }
    Ok(am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?)
}

/// Delete a banner.
pub async fn delete_banner(db: &DatabaseConnection, id: i64) -> Result<(), ServiceError> {
    attachment::remove::<banner::Entity>(db, id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attachment::load_image;
    use crate::test_support::memory_db;

    const PNG: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 1, 2, 3];

    fn msg(err: ServiceError) -> String {
        match err {
            ServiceError::Validation(m) | ServiceError::NotFound(m) | ServiceError::Db(m) => m,
        }
    }

    /// Banners can be created without an image, and the image retrieval then
    /// reports the image as missing rather than the banner.
    #[tokio::test]
    async fn banner_without_image() -> Result<(), anyhow::Error> {
        let db = memory_db().await?;

        let banner = create_banner(&db, "New", "Welcome", None, None).await?;
        assert!(banner.image.is_none());
        assert!(banner.image_mime.is_none());

        let err = load_image::<banner::Entity>(&db, banner.id).await.unwrap_err();
        assert_eq!(msg(err), "Banner image not found");
        Ok(())
    }

    /// Stored bytes and MIME type come back exactly as uploaded.
    #[tokio::test]
    async fn banner_image_roundtrip() -> Result<(), anyhow::Error> {
        let db = memory_db().await?;

        let up = ImageUpload::accept(PNG.to_vec(), Some("image/png".to_string()))?;
        let banner = create_banner(&db, "New", "Welcome", Some("Hero".into()), Some(up)).await?;

        let img = load_image::<banner::Entity>(&db, banner.id).await?;
        assert_eq!(img.bytes, PNG);
        assert_eq!(img.mime, "image/png");
        Ok(())
    }

    /// A text-only update leaves the stored image untouched; an update with a
    /// new upload replaces the bytes and the MIME type together.
    #[tokio::test]
    async fn update_merges_text_and_replaces_image() -> Result<(), anyhow::Error> {
        let db = memory_db().await?;

        let up = ImageUpload::accept(PNG.to_vec(), Some("image/png".to_string()))?;
        let banner = create_banner(&db, "New", "Welcome", None, Some(up)).await?;

        let patch = BannerPatch { title: Some("Updated".into()), ..Default::default() };
        let after = update_banner(&db, banner.id, patch).await?;
        assert_eq!(after.title, "Updated");
        assert_eq!(after.highlight_tag, "New");
        assert_eq!(after.image.as_deref(), Some(PNG));
        assert_eq!(after.image_mime.as_deref(), Some("image/png"));

        let jpeg = ImageUpload::accept(vec![0xff, 0xd8, 0xff], Some("image/jpeg".to_string()))?;
        let patch = BannerPatch { image: Some(jpeg), ..Default::default() };
        let after = update_banner(&db, banner.id, patch).await?;
        assert_eq!(after.image.as_deref(), Some(&[0xff, 0xd8, 0xff][..]));
        assert_eq!(after.image_mime.as_deref(), Some("image/jpeg"));
        Ok(())
    }

    /// Delete reports the banner kind when the row is already gone.
    #[tokio::test]
    async fn delete_missing_banner() -> Result<(), anyhow::Error> {
        let db = memory_db().await?;

        let banner = create_banner(&db, "New", "Welcome", None, None).await?;
        delete_banner(&db, banner.id).await?;
        assert!(list_banners(&db).await?.is_empty());

        let err = delete_banner(&db, banner.id).await.unwrap_err();
        assert_eq!(msg(err), "Banner not found");

        let err = update_banner(&db, banner.id, BannerPatch::default()).await.unwrap_err();
        assert_eq!(msg(err), "Banner not found");
        Ok(())
    }
}
