use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use serde::Serialize;
use tracing::info;

use service::attachment::{self, ImageUpload};
use service::content::members::{self, MemberPatch};

use crate::errors::ApiError;
use crate::extract::{FormPayload, RequestBase};
use crate::routes::{inline_image, AppState};

/// Client-facing member card shape with the derived portrait URL.
#[derive(Debug, Serialize)]
pub struct MemberOut {
    pub id: i64,
    pub name: String,
    pub title: String,
    pub email: String,
    pub short_description: Option<String>,
    pub image_mime: Option<String>,
    pub image_url: Option<String>,
}

fn present(model: models::members::Model, base: Option<&str>) -> MemberOut {
    let image_url = model
        .image
        .is_some()
        .then(|| attachment::image_url::<models::members::Entity>(base, model.id));
    MemberOut {
        id: model.id,
        name: model.name,
        title: model.title,
        email: model.email,
        short_description: model.short_description,
        image_mime: model.image_mime,
        image_url,
    }
}

pub async fn list(
    State(state): State<AppState>,
    base: RequestBase,
) -> Result<Json<Vec<MemberOut>>, ApiError> {
    let all = members::list_members(&state.db).await?;
    Ok(Json(all.into_iter().map(|m| present(m, base.as_deref())).collect()))
}

pub async fn create(
    State(state): State<AppState>,
    base: RequestBase,
    mut payload: FormPayload,
) -> Result<(StatusCode, Json<MemberOut>), ApiError> {
    let name = payload.require_text("name")?;
    let title = payload.require_text("title")?;
    let email = payload.require_text("email")?;
    let short_description = payload.take_text("short_description");
    let image = payload
        .take_upload()
        .map(|f| ImageUpload::accept(f.bytes, f.content_type))
        .transpose()?;
    let created =
        members::create_member(&state.db, &name, &title, &email, short_description, image).await?;
    info!(id = created.id, "created member");
    Ok((StatusCode::CREATED, Json(present(created, base.as_deref()))))
}

pub async fn image(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    let img = attachment::load_image::<models::members::Entity>(&state.db, id).await?;
    Ok(inline_image(img))
}

pub async fn update(
    State(state): State<AppState>,
    base: RequestBase,
    Path(id): Path<i64>,
    mut payload: FormPayload,
) -> Result<Json<MemberOut>, ApiError> {
    let patch = MemberPatch {
        name: payload.take_text("name"),
        title: payload.take_text("title"),
        email: payload.take_text("email"),
        short_description: payload.take_text("short_description"),
        image: payload
            .take_upload()
            .map(|f| ImageUpload::accept(f.bytes, f.content_type))
            .transpose()?,
    };
    let updated = members::update_member(&state.db, id, patch).await?;
    info!(id = updated.id, "updated member");
    Ok(Json(present(updated, base.as_deref())))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    members::delete_member(&state.db, id).await?;
    info!(id, "deleted member");
    Ok(StatusCode::NO_CONTENT)
}
