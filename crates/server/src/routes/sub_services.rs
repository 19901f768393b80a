use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::info;

use service::catalog::{self, SubServicePatch};

use crate::errors::ApiError;
use crate::extract::FormPayload;
use crate::routes::AppState;

pub async fn list_by_main(
    State(state): State<AppState>,
    Path(main_id): Path<i64>,
) -> Result<Json<Vec<models::sub_service::Model>>, ApiError> {
    Ok(Json(catalog::list_sub_services_by_main(&state.db, main_id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Path(main_id): Path<i64>,
    mut payload: FormPayload,
) -> Result<(StatusCode, Json<models::sub_service::Model>), ApiError> {
    let service_name = payload.require_text("service_name")?;
    let description = payload.take_text("description");
    let created = catalog::create_sub_service(&state.db, main_id, &service_name, description).await?;
    info!(id = created.id, main_service_id = created.main_service_id, "created sub-service");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<models::sub_service::Model>, ApiError> {
    Ok(Json(catalog::get_sub_service(&state.db, id).await?))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    mut payload: FormPayload,
) -> Result<Json<models::sub_service::Model>, ApiError> {
    let patch = SubServicePatch {
        main_service_id: payload.take_i64("main_service_id")?,
        service_name: payload.take_text("service_name"),
        description: payload.take_text("description"),
    };
    let updated = catalog::update_sub_service(&state.db, id, patch).await?;
    info!(id = updated.id, main_service_id = updated.main_service_id, "updated sub-service");
    Ok(Json(updated))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    catalog::delete_sub_service(&state.db, id).await?;
    info!(id, "deleted sub-service");
    Ok(StatusCode::NO_CONTENT)
}
