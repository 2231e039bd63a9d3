use crate::routes::{health, reports};
use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        reports::hotels,
        reports::room_count,
        reports::average_beds,
        reports::reservations,
        reports::restaurant_types,
        reports::reservation_counts,
        health::health
    ),
    tags(
        (name = "Reports", description = "Hotel booking reports rendered as HTML tables"),
        (name = "Health", description = "Liveness probe"),
    ),
    info(
        title = "Hotel Reports",
        version = "0.1.0",
        description = "Fixed analytical reports over the hotel booking database",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
