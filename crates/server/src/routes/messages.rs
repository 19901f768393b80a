use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use tracing::info;

use service::content::messages;

use crate::errors::ApiError;
use crate::extract::FormPayload;
use crate::routes::AppState;

/// Acknowledgement sent back with every recorded message.
const ACK: &str = "Thank you for contacting us \u{2014} our team will get back to you soon.";

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
    pub data: models::messages::Model,
}

pub async fn create(
    State(state): State<AppState>,
    mut payload: FormPayload,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let name = payload.require_text("name")?;
    let email = payload.require_text("email")?;
    let message = payload.require_text("message")?;
    let created = messages::create_message(&state.db, &name, &email, &message).await?;
    info!(id = created.id, "recorded contact message");
    Ok((StatusCode::CREATED, Json(MessageResponse { message: ACK, data: created })))
}

pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<Vec<models::messages::Model>>, ApiError> {
    Ok(Json(messages::list_messages(&state.db).await?))
}
