use crate::campus::Campus;
use crate::config::Config;
use crate::html::map::RouteMap;
use crate::voice::Speaker;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub campus: Arc<Campus>,
    pub config: Arc<Config>,
    pub speaker: Arc<dyn Speaker>,
    /// Map of the most recent successful navigation
    pub latest_map: Arc<RwLock<Option<RouteMap>>>,
}

impl AppState {
    pub fn new(campus: Campus, config: Config, speaker: Arc<dyn Speaker>) -> Self {
        Self {
            campus: Arc::new(campus),
            config: Arc::new(config),
            speaker,
            latest_map: Arc::new(RwLock::new(None)),
        }
    }
}
