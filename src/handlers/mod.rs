pub mod health;
pub mod index;
pub mod locations;
pub mod map;
pub mod navigate;

pub use health::health_handler;
pub use index::index_handler;
pub use locations::locations_handler;
pub use map::map_handler;
pub use navigate::navigate_handler;
