use crate::campus::Campus;
use crate::error::{ApiError, ErrorResponse};
use crate::html;
use crate::models::{NavigateRequest, NavigateResponse};
use crate::routes;
use crate::state::AppState;
use crate::voice;
use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};
use uuid::Uuid;

pub const INVALID_LOCATIONS_ERROR: &str = "Invalid locations selected";
pub const NO_PATH_ERROR: &str = "No path found";

/// POST /navigate handler - Shortest walking route between two places
///
/// Place names are matched case-insensitively after trimming. Unknown
/// places and unreachable destinations are reported in the body with a
/// 200 status, the same way a successful route is.
#[utoipa::path(
    post,
    path = routes::NAVIGATE,
    request_body = NavigateRequest,
    responses(
        (status = 200, description = "Route found, or a navigation error", body = NavigateResponse),
        (status = 400, description = "Body is not valid JSON", body = ErrorResponse),
        (status = 500, description = "Map rendering error", body = ErrorResponse)
    ),
    tag = "navigation"
)]
pub async fn navigate_handler(
    State(state): State<AppState>,
    payload: Result<Json<NavigateRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<NavigateResponse>), ApiError> {
    let Json(request) = payload?;
    let navigation_id = Uuid::new_v4();

    let start = Campus::normalize(&request.start);
    let end = Campus::normalize(&request.end);

    if !state.campus.contains(&start) || !state.campus.contains(&end) {
        tracing::info!(%navigation_id, start = %start, end = %end, "Rejected navigation with unknown location");
        state.speaker.speak(voice::INVALID_LOCATIONS);
        return Ok(failure(INVALID_LOCATIONS_ERROR));
    }

    let Some(path) = state.campus.find_path(&start, &end) else {
        tracing::info!(%navigation_id, start = %start, end = %end, "No path between locations");
        state.speaker.speak(voice::NO_PATH);
        return Ok(failure(NO_PATH_ERROR));
    };

    for line in voice::route_instructions(&path) {
        state.speaker.speak(&line);
    }

    let route_map = html::map::render(&state.campus, &path, state.config.map_zoom)?;
    *state.latest_map.write().await = Some(route_map);

    tracing::info!(
        %navigation_id,
        start = %start,
        end = %end,
        hops = path.len() - 1,
        "Computed route: {}",
        path.join(" -> ")
    );

    Ok((
        StatusCode::OK,
        Json(NavigateResponse::Route {
            path,
            map: routes::MAP.to_string(),
        }),
    ))
}

fn failure(message: &str) -> (StatusCode, Json<NavigateResponse>) {
    (
        StatusCode::OK,
        Json(NavigateResponse::Failure {
            error: message.to_string(),
        }),
    )
}
