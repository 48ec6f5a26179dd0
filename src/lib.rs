//! Campus navigation service.
//!
//! Serves a page where a visitor picks two campus locations, computes the
//! shortest walking route between them over the campus graph, narrates it,
//! and renders it on a map. The [`client`] module holds the page-side
//! navigation handler for Rust callers.

pub mod api_doc;
pub mod app;
pub mod campus;
pub mod client;
pub mod config;
pub mod error;
pub mod handlers;
pub mod html;
pub mod models;
pub mod routes;
pub mod state;
pub mod voice;
