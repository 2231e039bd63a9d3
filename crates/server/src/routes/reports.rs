use crate::{
    dtos::report::HotelSearchParams, error::AppError, state::AppState, templates::ReportPage,
};
use askama::Template;
use axum::{
    extract::{Query, State},
    response::Html,
};
use database::services::report::ReportService;
use models::{Report, ReportKind};

/// Renders a report through the shared page template
fn render(
    kind: ReportKind,
    report: &Report,
    search: Option<&str>,
) -> Result<Html<String>, AppError> {
    ReportPage::new(kind, report, search)
        .render()
        .map(Html)
        .map_err(AppError::render(kind))
}

/// List all hotels, or those whose name contains the search term
#[utoipa::path(
    get,
    path = "/",
    params(HotelSearchParams),
    responses(
        (status = 200, description = "Hotel table", content_type = "text/html", body = String),
        (status = 500, description = "Internal server error")
    ),
    tag = "Reports"
)]
pub async fn hotels(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Html<String>, AppError> {
    let kind = ReportKind::Hotels;
    let params = HotelSearchParams::from_pairs(pairs);
    let search = params.query.as_deref();

    let report = ReportService::hotels(&state.db, search)
        .await
        .map_err(AppError::query(kind))?;

    render(kind, &report, search)
}

/// Number of rooms per hotel
#[utoipa::path(
    get,
    path = "/room_count",
    responses(
        (status = 200, description = "Room count table", content_type = "text/html", body = String),
        (status = 500, description = "Internal server error")
    ),
    tag = "Reports"
)]
pub async fn room_count(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let kind = ReportKind::RoomCount;

    let report = ReportService::room_count_per_hotel(&state.db)
        .await
        .map_err(AppError::query(kind))?;

    render(kind, &report, None)
}

/// Average number of beds per room for each hotel
#[utoipa::path(
    get,
    path = "/average_beds",
    responses(
        (status = 200, description = "Average beds table", content_type = "text/html", body = String),
        (status = 500, description = "Internal server error")
    ),
    tag = "Reports"
)]
pub async fn average_beds(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let kind = ReportKind::AverageBeds;

    let report = ReportService::average_beds_per_room(&state.db)
        .await
        .map_err(AppError::query(kind))?;

    render(kind, &report, None)
}

/// All reservations of each hotel
#[utoipa::path(
    get,
    path = "/reservations",
    responses(
        (status = 200, description = "Reservations table", content_type = "text/html", body = String),
        (status = 500, description = "Internal server error")
    ),
    tag = "Reports"
)]
pub async fn reservations(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let kind = ReportKind::Reservations;

    let report = ReportService::reservations_per_hotel(&state.db)
        .await
        .map_err(AppError::query(kind))?;

    render(kind, &report, None)
}

/// A restaurant type available in each hotel
#[utoipa::path(
    get,
    path = "/restaurant_types",
    responses(
        (status = 200, description = "Restaurant types table", content_type = "text/html", body = String),
        (status = 500, description = "Internal server error")
    ),
    tag = "Reports"
)]
pub async fn restaurant_types(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let kind = ReportKind::RestaurantTypes;

    let report = ReportService::restaurant_types_per_hotel(&state.db)
        .await
        .map_err(AppError::query(kind))?;

    render(kind, &report, None)
}

/// Total number of reservations per hotel
#[utoipa::path(
    get,
    path = "/reservation_counts",
    responses(
        (status = 200, description = "Reservation counts table", content_type = "text/html", body = String),
        (status = 500, description = "Internal server error")
    ),
    tag = "Reports"
)]
pub async fn reservation_counts(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let kind = ReportKind::ReservationCounts;

    let report = ReportService::reservation_counts_per_hotel(&state.db)
        .await
        .map_err(AppError::query(kind))?;

    render(kind, &report, None)
}
