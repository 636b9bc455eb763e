//! # Thumbinator Server
//!
//! HTTP front end for the in-memory image catalog.
//!
//! ## Overview
//!
//! - **Facets**: `GET /api/images/filters` for populating filter controls
//! - **Search**: `GET /api/images/stream` streams matches as server-sent
//!   events, one `image` event per record followed by `complete`
//! - **Lookup**: `GET /api/images/{id}` for a single record
//!
//! Configuration is layered from `.env`, `thumbinator.toml`, the process
//! environment and CLI flags; see [`infra::config`].

pub mod handlers;
pub mod infra;
pub mod routes;

pub use infra::app_state::AppState;
pub use routes::create_app;
