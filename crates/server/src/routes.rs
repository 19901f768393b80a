use axum::extract::DefaultBodyLimit;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;

use common::types::Health;
use service::attachment::StoredImage;

pub mod background;
pub mod banners;
pub mod ceo;
pub mod core_values;
pub mod facts;
pub mod gallery;
pub mod geotech;
pub mod main_services;
pub mod members;
pub mod messages;
pub mod sub_services;
pub mod tus;
pub mod why;

/// Uploads above this size are refused before reaching any handler.
const MAX_UPLOAD_BYTES: usize = 32 * 1024 * 1024;

/// Shared application state: the store connection.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Binary response for a stored image: the exact bytes, shown inline under
/// the stored media type.
pub(crate) fn inline_image(img: StoredImage) -> Response {
    (
        [
            (header::CONTENT_TYPE, img.mime),
            (header::CONTENT_DISPOSITION, "inline".to_string()),
        ],
        img.bytes,
    )
        .into_response()
}

/// Build the full application router: health plus every content resource.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/main-services", get(main_services::list).post(main_services::create))
        .route("/main-services/:id", put(main_services::update).delete(main_services::remove))
        .route(
            "/sub-services/by-main/:main_id",
            get(sub_services::list_by_main).post(sub_services::create),
        )
        .route(
            "/sub-services/:id",
            get(sub_services::get_one).put(sub_services::update).delete(sub_services::remove),
        )
        .route("/service-tests/by-sub/:sub_id", get(service_tests::list_by_sub))
        .route("/service-tests", post(service_tests::create))
        .route(
            "/service-tests/:id",
            get(service_tests::get_one).put(service_tests::update).delete(service_tests::remove),
        )
        .route("/banners", get(banners::list).post(banners::create))
        .route("/banners/:id", put(banners::update).delete(banners::remove))
        .route("/banners/:id/image-preview", get(banners::image_preview))
        .route("/ceo", get(ceo::list).post(ceo::create))
        .route("/ceo/:id", put(ceo::update).delete(ceo::remove))
        .route("/ceo/:id/image", get(ceo::image))
        .route("/members", get(members::list).post(members::create))
        .route("/members/:id", put(members::update).delete(members::remove))
        .route("/members/:id/image", get(members::image))
        .route("/gallery", get(gallery::list).post(gallery::create))
        .route("/gallery/:id", put(gallery::update).delete(gallery::remove))
        .route("/gallery/:id/image", get(gallery::image))
        .route("/tus", get(tus::list).post(tus::create))
        .route("/tus/:id", put(tus::update).delete(tus::remove))
        .route("/facts", get(facts::list).post(facts::create))
        .route("/facts/:id", put(facts::update).delete(facts::remove))
        .route("/why", get(why::list).post(why::create))
        .route("/why/:id", put(why::update).delete(why::remove))
        .route("/background", get(background::list).post(background::create))
        .route("/background/:id", put(background::update).delete(background::remove))
        .route("/core-values", get(core_values::list).post(core_values::create))
        .route("/core-values/:id", put(core_values::update).delete(core_values::remove))
        .route("/messages", get(messages::list).post(messages::create))
        .route("/geotech-requests", get(geotech::list).post(geotech::create))
        .with_state(state)
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
