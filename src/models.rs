use serde::{Deserialize, Serialize};

/// Request body for the navigate endpoint
///
/// Missing fields are treated as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct NavigateRequest {
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
}

impl NavigateRequest {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

/// Response body of the navigate endpoint
///
/// On the wire this is either `{"error": ...}` or `{"path": [...], "map": ...}`.
/// The failure shape is tried first, so a body carrying an `error` field is
/// always read as a failure even when it also carries a path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(untagged)]
pub enum NavigateResponse {
    Failure { error: String },
    Route { path: Vec<String>, map: String },
}

/// Response type for the locations endpoint
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LocationsResponse {
    pub locations: Vec<String>,
}

/// Response type for health check endpoint
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub locations: usize,
}
