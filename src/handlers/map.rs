use crate::error::{ApiError, ErrorResponse};
use crate::html;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, response::Html};

/// GET /map handler - Map of the latest computed route
///
/// Before any route has been computed this serves the campus with its
/// markers only.
#[utoipa::path(
    get,
    path = routes::MAP,
    responses(
        (status = 200, description = "Leaflet map page", content_type = "text/html", body = String),
        (status = 500, description = "Map rendering error", body = ErrorResponse)
    ),
    tag = "pages"
)]
pub async fn map_handler(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    if let Some(route_map) = state.latest_map.read().await.as_ref() {
        tracing::debug!("Serving route map generated at {}", route_map.generated_at);
        return Ok(Html(route_map.html.clone()));
    }

    let base = html::map::render(&state.campus, &[], state.config.map_zoom)?;
    Ok(Html(base.html))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::navigate_handler;
    use crate::handlers::testing::{body_bytes, test_state};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        routing::{get, post},
        Router,
    };
    use tower::ServiceExt;

    fn app(state: AppState) -> Router {
        Router::new()
            .route(routes::MAP, get(map_handler))
            .route(routes::NAVIGATE, post(navigate_handler))
            .with_state(state)
    }

    async fn get_map(app: Router) -> String {
        let response = app
            .oneshot(Request::builder().uri("/map").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        String::from_utf8(body_bytes(response).await).unwrap()
    }

    #[tokio::test]
    async fn test_map_before_navigation() {
        let (state, _) = test_state();

        let page = get_map(app(state)).await;
        assert!(page.contains("const route = [];"));
        assert!(page.contains("Santosh Library"));
    }

    #[tokio::test]
    async fn test_map_after_navigation() {
        let (state, _) = test_state();
        let app = app(state);

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/navigate")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"start":"gate 1","end":"gate 2"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let page = get_map(app).await;
        assert!(page.contains("const route = [[30.273,78.999],[30.2748,78.9994]];"));
    }
}
