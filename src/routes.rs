// Route path constants - single source of truth for all service paths

pub const INDEX: &str = "/";
pub const HEALTH: &str = "/health";
pub const LOCATIONS: &str = "/locations";
pub const NAVIGATE: &str = "/navigate";
pub const MAP: &str = "/map";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";
pub const SWAGGER_UI: &str = "/swagger-ui";
