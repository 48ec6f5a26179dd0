use crate::models::LocationsResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, Json};

/// GET /locations handler - Known place names in declaration order
#[utoipa::path(
    get,
    path = routes::LOCATIONS,
    responses(
        (status = 200, description = "Known campus locations", body = LocationsResponse)
    ),
    tag = "navigation"
)]
pub async fn locations_handler(State(state): State<AppState>) -> Json<LocationsResponse> {
    Json(LocationsResponse {
        locations: state.campus.locations(),
    })
}
