use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracing::info;

use service::content::geotech;

use crate::errors::ApiError;
use crate::extract::FormPayload;
use crate::routes::AppState;

pub async fn create(
    State(state): State<AppState>,
    mut payload: FormPayload,
) -> Result<(StatusCode, Json<models::geotech_requests::Model>), ApiError> {
    let name = payload.require_text("name")?;
    let email = payload.require_text("email")?;
    let phone = payload.require_text("phone")?;
    let project_details = payload.require_text("project_details")?;
    let created =
        geotech::create_geotech_request(&state.db, &name, &email, &phone, &project_details).await?;
    info!(id = created.id, "recorded geotech request");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<Vec<models::geotech_requests::Model>>, ApiError> {
    Ok(Json(geotech::list_geotech_requests(&state.db).await?))
}
