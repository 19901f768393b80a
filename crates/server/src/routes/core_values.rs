use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::info;

use service::content::core_values;

use crate::errors::ApiError;
use crate::extract::FormPayload;
use crate::routes::AppState;

pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<Vec<models::core_values::Model>>, ApiError> {
    Ok(Json(core_values::list_core_values(&state.db).await?))
}

pub async fn create(
    State(state): State<AppState>,
    mut payload: FormPayload,
) -> Result<(StatusCode, Json<models::core_values::Model>), ApiError> {
    let bullet_text = payload.require_text("bullet_text")?;
    let created = core_values::create_core_value(&state.db, &bullet_text).await?;
    info!(id = created.id, "created core value");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    mut payload: FormPayload,
) -> Result<Json<models::core_values::Model>, ApiError> {
    let bullet_text = payload.take_text("bullet_text");
    let updated = core_values::update_core_value(&state.db, id, bullet_text).await?;
    info!(id = updated.id, "updated core value");
    Ok(Json(updated))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    core_values::delete_core_value(&state.db, id).await?;
    info!(id, "deleted core value");
    Ok(StatusCode::NO_CONTENT)
}
