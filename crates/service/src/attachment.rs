//! Shared handling for rows that carry an inline image blob.
//!
//! Banners, CEO cards, members and gallery entries all store image bytes and
//! their MIME type directly on the row. This module centralizes upload
//! acceptance, blob retrieval and the derived retrieval URL so each resource
//! module only declares where its image lives.

use sea_orm::{DatabaseConnection, EntityTrait, PrimaryKeyTrait};

use crate::errors::ServiceError;

/// Served when a stored image has no recorded content type.
pub const FALLBACK_MIME: &str = "application/octet-stream";

/// An accepted upload, ready to be written onto a row.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    pub bytes: Vec<u8>,
    pub mime: String,
}

impl ImageUpload {
    /// Accept raw upload bytes, rejecting empty files up front.
    pub fn accept(bytes: Vec<u8>, declared_mime: Option<String>) -> Result<Self, ServiceError> {
        if bytes.is_empty() {
            return Err(ServiceError::Validation("uploaded image is empty".to_string()));
        }
        let mime = declared_mime
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| FALLBACK_MIME.to_string());
        Ok(Self { bytes, mime })
    }
}

/// Image bytes and MIME type loaded back from a row.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredImage {
    pub bytes: Vec<u8>,
    pub mime: String,
}

/// Implemented by entities whose rows carry an inline image.
pub trait ImageBearing: EntityTrait {
    /// Row kind used in "{kind} not found" messages.
    const KIND: &'static str;
    /// Kind reported when the row or its image is missing on retrieval.
    const IMAGE_KIND: &'static str;

    /// Host-relative path the stored image is served from.
    fn image_path(id: i64) -> String;
    /// Stored image bytes, if any.
    fn image(model: &Self::Model) -> Option<&[u8]>;
    /// Stored MIME type, if any.
    fn image_mime(model: &Self::Model) -> Option<&str>;
}

/// Load the stored image of a row.
///
/// A missing row and a row without an image report the same kind; the caller
/// cannot tell the two apart and does not need to.
pub async fn load_image<E>(db: &DatabaseConnection, id: i64) -> Result<StoredImage, ServiceError>
where
    E: ImageBearing,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i64>,
{
    let row = E::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found(E::IMAGE_KIND))?;
    let bytes = E::image(&row).ok_or_else(|| ServiceError::not_found(E::IMAGE_KIND))?;
    let mime = E::image_mime(&row).unwrap_or(FALLBACK_MIME);
    Ok(StoredImage { bytes: bytes.to_vec(), mime: mime.to_string() })
}

/// Delete a row by id, reporting the entity kind when nothing was deleted.
pub async fn remove<E>(db: &DatabaseConnection, id: i64) -> Result<(), ServiceError>
where
    E: ImageBearing,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i64>,
{
    let res = E::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found(E::KIND));
    }
    Ok(())
}

/// URL the row's image is served from, absolute when a base is known.
pub fn image_url<E: ImageBearing>(base: Option<&str>, id: i64) -> String {
    match base {
        Some(base) => format!("{}{}", base.trim_end_matches('/'), E::image_path(id)),
        None => E::image_path(id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::banner;

    /// Zero-byte uploads are rejected before anything touches the database.
    #[test]
    fn empty_upload_is_rejected() {
        let err = ImageUpload::accept(Vec::new(), Some("image/png".to_string())).unwrap_err();
        match err {
            ServiceError::Validation(msg) => assert_eq!(msg, "uploaded image is empty"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    /// A missing or blank content type falls back to the octet-stream default.
    #[test]
    fn missing_mime_falls_back() {
        let up = ImageUpload::accept(vec![1, 2, 3], None).unwrap();
        assert_eq!(up.mime, FALLBACK_MIME);
        let up = ImageUpload::accept(vec![1, 2, 3], Some(String::new())).unwrap();
        assert_eq!(up.mime, FALLBACK_MIME);
        let up = ImageUpload::accept(vec![1, 2, 3], Some("image/jpeg".to_string())).unwrap();
        assert_eq!(up.mime, "image/jpeg");
    }

    /// Derived URLs are host-relative without a base and absolute with one.
    #[test]
    fn image_url_joins_base() {
        assert_eq!(image_url::<banner::Entity>(None, 3), "/banners/3/image-preview");
        assert_eq!(
            image_url::<banner::Entity>(Some("http://localhost:8080"), 3),
            "http://localhost:8080/banners/3/image-preview"
        );
        // a trailing slash on the base must not double up
        assert_eq!(
            image_url::<banner::Entity>(Some("http://localhost:8080/"), 3),
            "http://localhost:8080/banners/3/image-preview"
        );
    }
}
