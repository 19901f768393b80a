use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::info;

use service::catalog;

use crate::errors::ApiError;
use crate::extract::FormPayload;
use crate::routes::AppState;

pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<Vec<models::main_service::Model>>, ApiError> {
    Ok(Json(catalog::list_main_services(&state.db).await?))
}

pub async fn create(
    State(state): State<AppState>,
    mut payload: FormPayload,
) -> Result<(StatusCode, Json<models::main_service::Model>), ApiError> {
    let service_name = payload.require_text("service_name")?;
    let created = catalog::create_main_service(&state.db, &service_name).await?;
    info!(id = created.id, name = %created.service_name, "created main service");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    mut payload: FormPayload,
) -> Result<Json<models::main_service::Model>, ApiError> {
    let service_name = payload.take_text("service_name");
    let updated = catalog::update_main_service(&state.db, id, service_name).await?;
    info!(id = updated.id, "updated main service");
    Ok(Json(updated))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    catalog::delete_main_service(&state.db, id).await?;
    info!(id, "deleted main service");
    Ok(StatusCode::NO_CONTENT)
}
