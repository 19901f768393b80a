use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use serde::Serialize;
use tracing::info;

use service::attachment::{self, ImageUpload};
use service::content::banners::{self, BannerPatch};

use crate::errors::ApiError;
use crate::extract::{FormPayload, RequestBase};
use crate::routes::{inline_image, AppState};

/// Client-facing banner shape: stored fields plus the derived retrieval URL.
#[derive(Debug, Serialize)]
pub struct BannerOut {
    pub id: i64,
    pub highlight_tag: String,
    pub title: String,
    pub description: Option<String>,
    pub image_mime: Option<String>,
    pub image_preview_url: Option<String>,
}

fn present(model: models::banner::Model, base: Option<&str>) -> BannerOut {
    let image_preview_url = model
        .image
        .is_some()
        .then(|| attachment::image_url::<models::banner::Entity>(base, model.id));
    BannerOut {
        id: model.id,
        highlight_tag: model.highlight_tag,
        title: model.title,
        description: model.description,
        image_mime: model.image_mime,
        image_preview_url,
    }
}

pub async fn list(
    State(state): State<AppState>,
    base: RequestBase,
) -> Result<Json<Vec<BannerOut>>, ApiError> {
    let all = banners::list_banners(&state.db).await?;
    Ok(Json(all.into_iter().map(|m| present(m, base.as_deref())).collect()))
}

pub async fn create(
    State(state): State<AppState>,
    base: RequestBase,
    mut payload: FormPayload,
) -> Result<(StatusCode, Json<BannerOut>), ApiError> {
    let highlight_tag = payload.require_text("highlight_tag")?;
    let title = payload.require_text("title")?;
    let description = payload.take_text("description");
    let image = payload
        .take_upload()
        .map(|f| ImageUpload::accept(f.bytes, f.content_type))
        .transpose()?;
    let created =
        banners::create_banner(&state.db, &highlight_tag, &title, description, image).await?;
    info!(id = created.id, has_image = created.image.is_some(), "created banner");
    Ok((StatusCode::CREATED, Json(present(created, base.as_deref()))))
}

pub async fn image_preview(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    let img = attachment::load_image::<models::banner::Entity>(&state.db, id).await?;
    Ok(inline_image(img))
}

pub async fn update(
    State(state): State<AppState>,
    base: RequestBase,
    Path(id): Path<i64>,
    mut payload: FormPayload,
) -> Result<Json<BannerOut>, ApiError> {
    let patch = BannerPatch {
        highlight_tag: payload.take_text("highlight_tag"),
        title: payload.take_text("title"),
        description: payload.take_text("description"),
        image: payload
            .take_upload()
            .map(|f| ImageUpload::accept(f.bytes, f.content_type))
            .transpose()?,
    };
    let updated = banners::update_banner(&state.db, id, patch).await?;
    info!(id = updated.id, "updated banner");
    Ok(Json(present(updated, base.as_deref())))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    banners::delete_banner(&state.db, id).await?;
    info!(id, "deleted banner");
    Ok(StatusCode::NO_CONTENT)
}
