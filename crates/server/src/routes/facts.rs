use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::info;

use service::content::facts::{self, FactPatch};

use crate::errors::ApiError;
use crate::extract::FormPayload;
use crate::routes::AppState;

pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<Vec<models::facts::Model>>, ApiError> {
    Ok(Json(facts::list_facts(&state.db).await?))
}

pub async fn create(
    State(state): State<AppState>,
    mut payload: FormPayload,
) -> Result<(StatusCode, Json<models::facts::Model>), ApiError> {
    let label = payload.require_text("label")?;
    let number = payload.require_i64("number")?;
    let status = payload.take_text("status");
    let created = facts::create_fact(&state.db, &label, number, status).await?;
    info!(id = created.id, label = %created.label, "created fact");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    mut payload: FormPayload,
) -> Result<Json<models::facts::Model>, ApiError> {
    let patch = FactPatch {
        label: payload.take_text("label"),
        number: payload.take_i64("number")?,
        status: payload.take_text("status"),
    };
    let updated = facts::update_fact(&state.db, id, patch).await?;
    info!(id = updated.id, "updated fact");
    Ok(Json(updated))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    facts::delete_fact(&state.db, id).await?;
    info!(id, "deleted fact");
    Ok(StatusCode::NO_CONTENT)
}
