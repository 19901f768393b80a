use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::info;

use service::content::background;

use crate::errors::ApiError;
use crate::extract::FormPayload;
use crate::routes::AppState;

pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<Vec<models::background::Model>>, ApiError> {
    Ok(Json(background::list_background(&state.db).await?))
}

pub async fn create(
    State(state): State<AppState>,
    mut payload: FormPayload,
) -> Result<(StatusCode, Json<models::background::Model>), ApiError> {
    let paragraph = payload.require_text("paragraph")?;
    let created = background::create_background(&state.db, &paragraph).await?;
    info!(id = created.id, "created background paragraph");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    mut payload: FormPayload,
) -> Result<Json<models::background::Model>, ApiError> {
    let paragraph = payload.take_text("paragraph");
    let updated = background::update_background(&state.db, id, paragraph).await?;
    info!(id = updated.id, "updated background paragraph");
    Ok(Json(updated))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    background::delete_background(&state.db, id).await?;
    info!(id, "deleted background paragraph");
    Ok(StatusCode::NO_CONTENT)
}
