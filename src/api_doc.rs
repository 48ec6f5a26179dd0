use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers;
use crate::models::{HealthResponse, LocationsResponse, NavigateRequest, NavigateResponse};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "campus-nav API",
        version = "1.0.0",
        description = "Shortest walking routes between campus locations, with a rendered route map"
    ),
    paths(
        handlers::health::health_handler,
        handlers::index::index_handler,
        handlers::locations::locations_handler,
        handlers::navigate::navigate_handler,
        handlers::map::map_handler
    ),
    components(
        schemas(
            NavigateRequest,
            NavigateResponse,
            LocationsResponse,
            HealthResponse,
            ErrorResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "navigation", description = "Route finding operations"),
        (name = "pages", description = "HTML pages")
    )
)]
pub struct ApiDoc;
