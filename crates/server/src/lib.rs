pub mod config;
pub mod doc;
pub mod dtos;
pub mod error;
pub mod routes;
pub mod state;
pub mod templates;
pub mod utils;

use axum::{Json, Router, routing::get};
use models::ReportKind;
use routes::{health, reports};
use state::AppState;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use utoipa::OpenApi;

/// Builds the application router with every report route
pub fn app(state: AppState) -> Router {
    Router::new()
        .route(ReportKind::Hotels.path(), get(reports::hotels))
        .route(ReportKind::RoomCount.path(), get(reports::room_count))
        .route(ReportKind::AverageBeds.path(), get(reports::average_beds))
        .route(ReportKind::Reservations.path(), get(reports::reservations))
        .route(ReportKind::RestaurantTypes.path(), get(reports::restaurant_types))
        .route(
            ReportKind::ReservationCounts.path(),
            get(reports::reservation_counts),
        )
        .route("/health", get(health::health))
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(doc::ApiDoc::openapi()) }),
        )
        .layer(ServiceBuilder::new().layer(CompressionLayer::new()))
        .with_state(state)
}
