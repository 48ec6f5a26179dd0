use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::campus::Campus;
use crate::config::Config;
use crate::handlers;
use crate::routes;
use crate::state::AppState;
use crate::voice::{CommandSpeaker, LogSpeaker, SilentSpeaker, Speaker};

/// Build shared state from configuration, loading the campus definition
pub fn build_state(config: Config) -> Result<AppState> {
    let campus = match &config.campus_file {
        Some(path) => Campus::load(path)?,
        None => Campus::default_campus(),
    };
    tracing::info!("Campus ready with {} places", campus.len());

    let speaker: Arc<dyn Speaker> = match (config.voice_enabled, &config.voice_command) {
        (false, _) => Arc::new(SilentSpeaker),
        (true, None) => Arc::new(LogSpeaker::new(config.voice_rate)),
        (true, Some(template)) => {
            // The worker runs for the life of the process.
            let (speaker, _worker) = CommandSpeaker::spawn(template, config.voice_rate)?;
            tracing::info!("Speaking route guidance with: {}", template);
            Arc::new(speaker)
        }
    };

    Ok(AppState::new(campus, config, speaker))
}

/// Assemble the service router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(routes::INDEX, get(handlers::index_handler))
        .route(routes::HEALTH, get(handlers::health_handler))
        .route(routes::LOCATIONS, get(handlers::locations_handler))
        .route(routes::NAVIGATE, post(handlers::navigate_handler))
        .route(routes::MAP, get(handlers::map_handler))
        .merge(SwaggerUi::new(routes::SWAGGER_UI).url(routes::OPENAPI_JSON, ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind the configured address and serve until the process is stopped
pub async fn serve(state: AppState) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", state.config.service_host, state.config.service_port)
        .parse()
        .context("SERVICE_HOST:SERVICE_PORT is not a valid socket address")?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, router(state))
        .await
        .context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode};
    use tower::ServiceExt;

    #[test]
    fn test_build_state_with_missing_campus_file() {
        let config = Config {
            campus_file: Some("/definitely/not/here/campus.json".into()),
            ..Config::default()
        };
        assert!(build_state(config).is_err());
    }

    #[tokio::test]
    async fn test_build_state_with_voice_command() {
        let state = build_state(Config {
            voice_command: Some("true {text}".to_string()),
            ..Config::default()
        })
        .unwrap();
        state.speaker.speak("Starting from gate 1.");
        assert_eq!(state.campus.len(), 8);
    }

    #[tokio::test]
    async fn test_router_serves_every_route() {
        let state = build_state(Config {
            voice_enabled: false,
            ..Config::default()
        })
        .unwrap();
        let app = router(state);

        for uri in ["/", "/health", "/locations", "/map", "/api-docs/openapi.json"] {
            let response = app
                .clone()
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK, "GET {}", uri);
        }
    }
}
