//! CEO cards: the leadership blurb with an optional portrait.

use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, QueryOrder, Set};

use models::ceo_card;

use crate::attachment::{self, ImageBearing, ImageUpload};
use crate::errors::ServiceError;
use crate::merge::{keep_or, keep_or_opt};

impl ImageBearing for ceo_card::Entity {
    const KIND: &'static str = "CEO card";
    const IMAGE_KIND: &'static str = "Image";

    fn image_path(id: i64) -> String {
        format!("/ceo/{}/image", id)
    }
    fn image(model: &ceo_card::Model) -> Option<&[u8]> {
        model.image.as_deref()
    }
    fn image_mime(model: &ceo_card::Model) -> Option<&str> {
        model.image_mime.as_deref()
    }
}

/// Optional fields of a CEO card update.
#[derive(Debug, Default)]
pub struct CeoCardPatch {
    pub name: Option<String>,
    pub title: Option<String>,
    pub email: Option<String>,
    pub short_description: Option<String>,
    pub image: Option<ImageUpload>,
}

/// List all CEO cards, oldest first.
pub async fn list_ceo_cards(db: &DatabaseConnection) -> Result<Vec<ceo_card::Model>, ServiceError> {
    Ok(ceo_card::Entity::find()
        .order_by_asc(ceo_card::Column::Id)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?)
}

/// Create a CEO card; the portrait is optional.
pub async fn create_ceo_card(
    db: &DatabaseConnection,
    name: &str,
    title: &str,
    email: &str,
    short_description: Option<String>,
    image: Option<ImageUpload>,
) -> Result<ceo_card::Model, ServiceError> {
    let (bytes, mime) = match image {
        Some(up) => (Some(up.bytes), Some(up.mime)),
        None => (None, None),
    };
    let am = ceo_card::ActiveModel {
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

/// Update a CEO card; omitted fields keep their stored values.
pub async fn update_ceo_card(
    db: &DatabaseConnection,
    id: i64,
    patch: CeoCardPatch,
) -> Result<ceo_card::Model, ServiceError> {
    let current = ceo_card::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found(ceo_card::Entity::KIND))?;
    let mut am: ceo_card::ActiveModel = current.clone().into();
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

/// Delete a CEO card.
pub async fn delete_ceo_card(db: &DatabaseConnection, id: i64) -> Result<(), ServiceError> {
    attachment::remove::<ceo_card::Entity>(db, id).await
}
