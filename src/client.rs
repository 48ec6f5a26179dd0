//! Page-side navigation handler.
//!
//! [`NavigationHandler`] is the handler behind the navigation form: it shows
//! a progress indicator, posts the two inputs to the navigate endpoint, and
//! renders either the route or the error. The page elements it writes to and
//! the transport it posts through are passed in once at construction, so the
//! same handler drives a real page or a test double.

use std::future::Future;
use std::sync::{Arc, Mutex};

use reqwest::{StatusCode, Url};
use thiserror::Error;

use crate::models::{NavigateRequest, NavigateResponse};
use crate::routes;

pub const IN_PROGRESS: &str = "⏳ Finding path...";
pub const SUCCESS_PREFIX: &str = "✅ Path: ";
pub const FAILURE_PREFIX: &str = "❌ ";
pub const PATH_SEPARATOR: &str = " → ";

/// Faults that keep a navigation response from being read
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid service URL: {0}")]
    InvalidUrl(String),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server responded with {0}")]
    Status(StatusCode),

    #[error("unreadable response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Transport for navigation requests
pub trait NavigationApi {
    fn navigate(
        &self,
        request: &NavigateRequest,
    ) -> impl Future<Output = Result<NavigateResponse, ClientError>> + Send;
}

/// Region of the page that shows progress and result text
pub trait StatusRegion {
    fn set_text(&self, text: &str);
}

/// Embedded frame that shows the route map
pub trait MapFrame {
    fn set_source(&self, url: &str);
}

/// Navigation API reached over HTTP
#[derive(Debug, Clone)]
pub struct HttpNavigationApi {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpNavigationApi {
    /// Client for the service rooted at `base_url`
    ///
    /// The base may carry a path prefix: `http://host/campus` and
    /// `http://host/campus/` both post to `http://host/campus/navigate`.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Result<Self, ClientError> {
        let invalid = |reason: String| ClientError::InvalidUrl(format!("{}: {}", base_url, reason));

        let mut base = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(invalid("not a hierarchical URL".to_string()));
        }
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let endpoint = base
            .join(routes::NAVIGATE.trim_start_matches('/'))
            .map_err(|e| invalid(e.to_string()))?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl NavigationApi for HttpNavigationApi {
    async fn navigate(&self, request: &NavigateRequest) -> Result<NavigateResponse, ClientError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        // Error statuses still carry a readable `{"error": ...}` body.
        match serde_json::from_slice(&body) {
            Ok(parsed) => Ok(parsed),
            Err(_) if !status.is_success() => Err(ClientError::Status(status)),
            Err(err) => Err(ClientError::Decode(err)),
        }
    }
}

/// Status line for a navigation response
pub fn status_text(response: &NavigateResponse) -> String {
    match response {
        NavigateResponse::Failure { error } => format!("{}{}", FAILURE_PREFIX, error),
        NavigateResponse::Route { path, .. } => {
            format!("{}{}", SUCCESS_PREFIX, path.join(PATH_SEPARATOR))
        }
    }
}

/// Handler bound to one status region and one map frame
///
/// Invocations are not serialized: when two are in flight, whichever
/// response arrives last owns the display.
pub struct NavigationHandler<A, S, F> {
    api: A,
    status: S,
    frame: F,
}

impl<A, S, F> NavigationHandler<A, S, F>
where
    A: NavigationApi,
    S: StatusRegion,
    F: MapFrame,
{
    pub fn new(api: A, status: S, frame: F) -> Self {
        Self { api, status, frame }
    }

    /// Request a route from `start` to `end` and render the outcome
    ///
    /// Inputs are forwarded exactly as given. A server-reported error and a
    /// transport fault are both rendered with the failure prefix; the map
    /// frame only changes when a route comes back.
    pub async fn navigate(&self, start: &str, end: &str) -> Result<NavigateResponse, ClientError> {
        self.status.set_text(IN_PROGRESS);

        let request = NavigateRequest::new(start, end);
        let response = match self.api.navigate(&request).await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!("Navigation request failed: {}", err);
                self.status.set_text(&format!("{}{}", FAILURE_PREFIX, err));
                return Err(err);
            }
        };

        self.status.set_text(&status_text(&response));
        if let NavigateResponse::Route { map, .. } = &response {
            self.frame.set_source(map);
        }

        Ok(response)
    }
}

/// In-memory page element holding a single string
///
/// Clones share the same contents. Serves as either a status region or a
/// map frame.
#[derive(Debug, Clone, Default)]
pub struct PageSlot(Arc<Mutex<String>>);

impl PageSlot {
    pub fn new(initial: &str) -> Self {
        Self(Arc::new(Mutex::new(initial.to_string())))
    }

    pub fn get(&self) -> String {
        self.0.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn set(&self, value: &str) {
        *self.0.lock().unwrap_or_else(|e| e.into_inner()) = value.to_string();
    }
}

impl StatusRegion for PageSlot {
    fn set_text(&self, text: &str) {
        self.set(text);
    }
}

impl MapFrame for PageSlot {
    fn set_source(&self, url: &str) {
        self.set(url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::Notify;

    /// Transport that records requests and replies from a fixed JSON body
    struct FakeApi {
        reply: Result<String, StatusCode>,
        requests: Mutex<Vec<NavigateRequest>>,
        gate: Option<Arc<Notify>>,
        called: Arc<Notify>,
    }

    impl FakeApi {
        fn replying(json: serde_json::Value) -> Self {
            Self {
                reply: Ok(json.to_string()),
                requests: Mutex::new(Vec::new()),
                gate: None,
                called: Arc::new(Notify::new()),
            }
        }

        fn failing(status: StatusCode) -> Self {
            Self {
                reply: Err(status),
                ..Self::replying(serde_json::Value::Null)
            }
        }

        fn requests(&self) -> Vec<NavigateRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl NavigationApi for FakeApi {
        async fn navigate(&self, request: &NavigateRequest) -> Result<NavigateResponse, ClientError> {
            self.requests.lock().unwrap().push(request.clone());
            self.called.notify_one();
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            match &self.reply {
                Ok(body) => Ok(serde_json::from_str(body)?),
                Err(status) => Err(ClientError::Status(*status)),
            }
        }
    }

    fn page() -> (PageSlot, PageSlot) {
        (PageSlot::new(""), PageSlot::new("about:blank"))
    }

    #[tokio::test]
    async fn test_sends_one_request_with_inputs() {
        let (status, frame) = page();
        let handler = NavigationHandler::new(
            FakeApi::replying(serde_json::json!({"error": "x"})),
            status,
            frame,
        );

        handler.navigate("gate 1", "cse block").await.unwrap();

        assert_eq!(handler.api.requests(), vec![NavigateRequest::new("gate 1", "cse block")]);
    }

    #[tokio::test]
    async fn test_forwards_empty_inputs_unmodified() {
        let (status, frame) = page();
        let handler = NavigationHandler::new(
            FakeApi::replying(serde_json::json!({"error": "Invalid locations selected"})),
            status,
            frame,
        );

        handler.navigate("", "  ").await.unwrap();

        assert_eq!(handler.api.requests(), vec![NavigateRequest::new("", "  ")]);
    }

    #[tokio::test]
    async fn test_renders_server_error() {
        let (status, frame) = page();
        let handler = NavigationHandler::new(
            FakeApi::replying(serde_json::json!({"error": "X"})),
            status.clone(),
            frame.clone(),
        );

        let response = handler.navigate("a", "b").await.unwrap();

        assert_eq!(response, NavigateResponse::Failure { error: "X".to_string() });
        assert_eq!(status.get(), "❌ X");
        assert_eq!(frame.get(), "about:blank");
    }

    #[tokio::test]
    async fn test_renders_route() {
        let (status, frame) = page();
        let handler = NavigationHandler::new(
            FakeApi::replying(serde_json::json!({
                "path": ["A", "B", "C"],
                "map": "http://example/map.png"
            })),
            status.clone(),
            frame.clone(),
        );

        handler.navigate("A", "C").await.unwrap();

        assert_eq!(status.get(), "✅ Path: A → B → C");
        assert_eq!(frame.get(), "http://example/map.png");
    }

    #[tokio::test]
    async fn test_error_takes_precedence_over_path() {
        let (status, frame) = page();
        let handler = NavigationHandler::new(
            FakeApi::replying(serde_json::json!({
                "error": "stale",
                "path": ["A", "B"],
                "map": "/map"
            })),
            status.clone(),
            frame.clone(),
        );

        handler.navigate("A", "B").await.unwrap();

        assert_eq!(status.get(), "❌ stale");
        assert_eq!(frame.get(), "about:blank");
    }

    #[tokio::test]
    async fn test_shows_progress_while_waiting() {
        let (status, frame) = page();
        let gate = Arc::new(Notify::new());
        let api = FakeApi {
            gate: Some(gate.clone()),
            ..FakeApi::replying(serde_json::json!({"path": ["A"], "map": "/map"}))
        };
        let called = api.called.clone();
        let handler = NavigationHandler::new(api, status.clone(), frame);

        let observe = async {
            called.notified().await;
            let during = status.get();
            gate.notify_one();
            during
        };
        let (result, during) = tokio::join!(handler.navigate("A", "A"), observe);

        assert_eq!(during, IN_PROGRESS);
        result.unwrap();
        assert_eq!(status.get(), "✅ Path: A");
    }

    #[tokio::test]
    async fn test_renders_transport_failure() {
        let (status, frame) = page();
        let handler = NavigationHandler::new(
            FakeApi::failing(StatusCode::BAD_GATEWAY),
            status.clone(),
            frame.clone(),
        );

        let result = handler.navigate("A", "B").await;

        assert!(matches!(result, Err(ClientError::Status(code)) if code == StatusCode::BAD_GATEWAY));
        assert_eq!(status.get(), "❌ server responded with 502 Bad Gateway");
        assert_eq!(frame.get(), "about:blank");
    }

    #[tokio::test]
    async fn test_renders_malformed_response() {
        let (status, frame) = page();
        let handler = NavigationHandler::new(
            FakeApi::replying(serde_json::json!({"unexpected": true})),
            status.clone(),
            frame,
        );

        let result = handler.navigate("A", "B").await;

        assert!(matches!(result, Err(ClientError::Decode(_))));
        assert!(status.get().starts_with("❌ unreadable response"));
    }

    #[test]
    fn test_endpoint_join() {
        let api = HttpNavigationApi::new("http://localhost:3000").unwrap();
        assert_eq!(api.endpoint().as_str(), "http://localhost:3000/navigate");

        assert!(matches!(
            HttpNavigationApi::new("mailto:someone@example.com"),
            Err(ClientError::InvalidUrl(_))
        ));

        assert!(matches!(
            HttpNavigationApi::new("not a url"),
            Err(ClientError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_endpoint_keeps_path_prefix() {
        for base in ["http://host/campus", "http://host/campus/"] {
            let api = HttpNavigationApi::new(base).unwrap();
            assert_eq!(api.endpoint().as_str(), "http://host/campus/navigate", "base {}", base);
        }

        let api = HttpNavigationApi::new("http://host/campus/?ignored=1").unwrap();
        assert_eq!(api.endpoint().as_str(), "http://host/campus/navigate");
    }

    async fn spawn(app: axum::Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_http_round_trip_against_service() {
        let (state, _) = crate::handlers::testing::test_state();
        let base_url = spawn(crate::app::router(state)).await;

        let (status, frame) = page();
        let handler = NavigationHandler::new(
            HttpNavigationApi::new(&base_url).unwrap(),
            status.clone(),
            frame.clone(),
        );

        handler.navigate("Gate 1", "cse block").await.unwrap();
        assert_eq!(status.get(), "✅ Path: gate 1 → gate 2 → cse block");
        assert_eq!(frame.get(), "/map");

        handler.navigate("gate 1", "library of alexandria").await.unwrap();
        assert_eq!(status.get(), "❌ Invalid locations selected");
        assert_eq!(frame.get(), "/map");
    }

    #[tokio::test]
    async fn test_http_error_status_without_json() {
        use axum::routing::post;

        let app = axum::Router::new().route(
            routes::NAVIGATE,
            post(|| async { (axum::http::StatusCode::BAD_GATEWAY, "upstream down") }),
        );
        let base_url = spawn(app).await;

        let (status, frame) = page();
        let handler = NavigationHandler::new(
            HttpNavigationApi::new(&base_url).unwrap(),
            status.clone(),
            frame,
        );

        let result = handler.navigate("a", "b").await;
        assert!(matches!(result, Err(ClientError::Status(code)) if code == StatusCode::BAD_GATEWAY));
        assert_eq!(status.get(), "❌ server responded with 502 Bad Gateway");
    }
}
