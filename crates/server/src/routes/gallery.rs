use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use serde::Serialize;
use tracing::info;

use service::attachment::{self, ImageUpload};
use service::content::gallery;

use crate::errors::ApiError;
use crate::extract::{FormPayload, RequestBase};
use crate::routes::{inline_image, AppState};

/// Client-facing gallery shape: the image is required, so its URL always is.
#[derive(Debug, Serialize)]
pub struct GalleryImageOut {
    pub id: i64,
    pub image_preview_url: String,
}

fn present(model: &models::gallery::Model, base: Option<&str>) -> GalleryImageOut {
    GalleryImageOut {
        id: model.id,
        image_preview_url: attachment::image_url::<models::gallery::Entity>(base, model.id),
    }
}

pub async fn list(
    State(state): State<AppState>,
    base: RequestBase,
) -> Result<Json<Vec<GalleryImageOut>>, ApiError> {
    let all = gallery::list_gallery(&state.db).await?;
    Ok(Json(all.iter().map(|m| present(m, base.as_deref())).collect()))
}

pub async fn create(
    State(state): State<AppState>,
    base: RequestBase,
    mut payload: FormPayload,
) -> Result<(StatusCode, Json<GalleryImageOut>), ApiError> {
    let file = payload.require_upload()?;
    let upload = ImageUpload::accept(file.bytes, file.content_type)?;
    let created = gallery::add_gallery_image(&state.db, upload).await?;
    info!(id = created.id, size = created.image.len(), "added gallery image");
    Ok((StatusCode::CREATED, Json(present(&created, base.as_deref()))))
}

pub async fn image(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    let img = attachment::load_image::<models::gallery::Entity>(&state.db, id).await?;
    Ok(inline_image(img))
}

pub async fn update(
    State(state): State<AppState>,
    base: RequestBase,
    Path(id): Path<i64>,
    mut payload: FormPayload,
) -> Result<Json<GalleryImageOut>, ApiError> {
    let upload = payload
        .take_upload()
        .map(|f| ImageUpload::accept(f.bytes, f.content_type))
        .transpose()?;
    let updated = gallery::replace_gallery_image(&state.db, id, upload).await?;
    info!(id = updated.id, "replaced gallery image");
    Ok(Json(present(&updated, base.as_deref())))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    gallery::delete_gallery_image(&state.db, id).await?;
    info!(id, "deleted gallery image");
    Ok(StatusCode::NO_CONTENT)
}
