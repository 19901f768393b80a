use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::info;

use service::content::why::{self, WhyPatch};

use crate::errors::ApiError;
use crate::extract::FormPayload;
use crate::routes::AppState;

pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<Vec<models::why_choose_us::Model>>, ApiError> {
    Ok(Json(why::list_why(&state.db).await?))
}

pub async fn create(
    State(state): State<AppState>,
    mut payload: FormPayload,
) -> Result<(StatusCode, Json<models::why_choose_us::Model>), ApiError> {
    let label = payload.require_text("label")?;
    let value = payload.require_text("value")?;
    let status = payload.take_text("status");
    let created = why::create_why(&state.db, &label, &value, status).await?;
    info!(id = created.id, label = %created.label, "created why-choose-us entry");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    mut payload: FormPayload,
) -> Result<Json<models::why_choose_us::Model>, ApiError> {
    let patch = WhyPatch {
        label: payload.take_text("label"),
        value: payload.take_text("value"),
        status: payload.take_text("status"),
    };
    let updated = why::update_why(&state.db, id, patch).await?;
    info!(id = updated.id, "updated why-choose-us entry");
    Ok(Json(updated))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    why::delete_why(&state.db, id).await?;
    info!(id, "deleted why-choose-us entry");
    Ok(StatusCode::NO_CONTENT)
}
