use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::info;

use service::content::tus::{self, TusPatch};

use crate::errors::ApiError;
use crate::extract::FormPayload;
use crate::routes::AppState;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<models::tus::Model>>, ApiError> {
    Ok(Json(tus::list_tus(&state.db).await?))
}

pub async fn create(
    State(state): State<AppState>,
    mut payload: FormPayload,
) -> Result<(StatusCode, Json<models::tus::Model>), ApiError> {
    let day = payload.require_text("day")?;
    let hours = payload.require_text("hours")?;
    let status = payload.take_text("status");
    let created = tus::create_tus(&state.db, &day, &hours, status).await?;
    info!(id = created.id, day = %created.day, "created tus entry");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    mut payload: FormPayload,
) -> Result<Json<models::tus::Model>, ApiError> {
    let patch = TusPatch {
        day: payload.take_text("day"),
        hours: payload.take_text("hours"),
        status: payload.take_text("status"),
    };
    let updated = tus::update_tus(&state.db, id, patch).await?;
    info!(id = updated.id, "updated tus entry");
    Ok(Json(updated))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    tus::delete_tus(&state.db, id).await?;
    info!(id, "deleted tus entry");
    Ok(StatusCode::NO_CONTENT)
}
